// ABOUTME: Meal profile and constitution models consumed by the feature encoder
// ABOUTME: Structured input with documented per-field defaults and constitution resolution
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Ahara Nutrition Intelligence

use crate::constants::features::{CONSTITUTION_ENCODING, NUMERIC_FEATURE_COUNT};
use crate::constants::profile_defaults;
use crate::errors::InferenceError;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Ayurvedic constitution (dosha) used to select dietary advice
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[serde(rename_all = "UPPERCASE")]
pub enum Constitution {
    /// Vata - air and space
    Vata,
    /// Pitta - fire and water
    Pitta,
    /// Kapha - earth and water
    Kapha,
}

impl Constitution {
    /// All constitutions in one-hot slot order
    pub const ALL: [Self; 3] = [Self::Vata, Self::Pitta, Self::Kapha];

    /// One-hot slot index
    #[must_use]
    pub const fn index(self) -> usize {
        match self {
            Self::Vata => 0,
            Self::Pitta => 1,
            Self::Kapha => 2,
        }
    }

    /// Resolve a slot index; `None` outside 0..=2
    #[must_use]
    pub fn from_index(index: i64) -> Option<Self> {
        usize::try_from(index)
            .ok()
            .and_then(|i| Self::ALL.get(i).copied())
    }

    /// Case-insensitive exact parse; `None` for anything unrecognised
    #[must_use]
    pub fn parse(value: &str) -> Option<Self> {
        let upper = value.to_uppercase();
        CONSTITUTION_ENCODING
            .iter()
            .position(|name| *name == upper)
            .map(|i| Self::ALL[i])
    }

    /// Parse constitution from string, falling back to `Vata`
    #[must_use]
    pub fn from_str_lossy(value: &str) -> Self {
        Self::parse(value).unwrap_or(Self::Vata)
    }

    /// Canonical upper-case name
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        CONSTITUTION_ENCODING[self.index()]
    }
}

impl fmt::Display for Constitution {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Constitution as supplied by a caller: a slot index or a symbolic name
///
/// The two pipeline stages resolve it differently. The encoder is lenient and
/// maps unknown names to the first slot; the recommendation engine is strict and
/// treats unknown names as "no constitution", so no general advice is produced.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ConstitutionInput {
    /// Integer slot index (valid range 0..=2)
    Index(i64),
    /// Symbolic name, matched case-insensitively
    Name(String),
}

impl Default for ConstitutionInput {
    fn default() -> Self {
        Self::Name(Constitution::Vata.as_str().to_owned())
    }
}

impl From<Constitution> for ConstitutionInput {
    fn from(constitution: Constitution) -> Self {
        Self::Name(constitution.as_str().to_owned())
    }
}

impl ConstitutionInput {
    /// Resolution used for feature encoding
    ///
    /// # Errors
    ///
    /// Returns `InferenceError::ConstitutionIndex` for an integer outside 0..=2.
    /// Unrecognised names are not an error: they resolve to `Vata`.
    pub fn resolve_lenient(&self) -> Result<Constitution, InferenceError> {
        match self {
            Self::Index(index) => {
                Constitution::from_index(*index).ok_or(InferenceError::ConstitutionIndex(*index))
            }
            Self::Name(name) => Ok(Constitution::from_str_lossy(name)),
        }
    }

    /// Resolution used for advice selection; `None` when unrecognised
    #[must_use]
    pub fn resolve_strict(&self) -> Option<Constitution> {
        match self {
            Self::Index(index) => Constitution::from_index(*index),
            Self::Name(name) => Constitution::parse(name),
        }
    }
}

/// One meal plus the eater's demographic and constitutional attributes
///
/// No field is range-checked; negative or implausible values, age and gender
/// included, are passed to the model unchanged.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MealProfile {
    /// Energy (kcal)
    pub calories: f64,
    /// Protein (g)
    pub protein: f64,
    /// Carbohydrates (g)
    pub carbs: f64,
    /// Fat (g)
    pub fat: f64,
    /// Iron (mg)
    pub iron: f64,
    /// Vitamin C (mg)
    #[serde(rename = "vitaminC")]
    pub vitamin_c: f64,
    /// Age in years
    pub age: i64,
    /// Gender indicator (0 female, 1 male)
    pub gender: i64,
    /// Constitution, symbolic or by index
    #[serde(alias = "dosha")]
    pub constitution: ConstitutionInput,
}

impl Default for MealProfile {
    fn default() -> Self {
        Self {
            calories: profile_defaults::NUTRIENT,
            protein: profile_defaults::NUTRIENT,
            carbs: profile_defaults::NUTRIENT,
            fat: profile_defaults::NUTRIENT,
            iron: profile_defaults::NUTRIENT,
            vitamin_c: profile_defaults::NUTRIENT,
            age: profile_defaults::AGE,
            gender: profile_defaults::GENDER,
            constitution: ConstitutionInput::default(),
        }
    }
}

impl MealProfile {
    /// Continuous features in model order, before scaling
    #[must_use]
    pub fn numeric_features(&self) -> [f64; NUMERIC_FEATURE_COUNT] {
        [
            self.calories,
            self.protein,
            self.carbs,
            self.fat,
            self.iron,
            self.vitamin_c,
            self.age as f64,
            self.gender as f64,
        ]
    }
}
