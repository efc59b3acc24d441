// ABOUTME: Meal profile to model input encoding with pre-fitted standard scaling
// ABOUTME: Eight z-scored continuous features followed by a three-slot constitution one-hot
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Ahara Nutrition Intelligence

//! Feature encoding
//!
//! Layout of the 11-wide vector:
//!
//! | slots  | content                                                        |
//! |--------|----------------------------------------------------------------|
//! | 0..8   | `(x - mean) / scale` for calories, protein, carbs, fat, iron, vitaminC, age, gender |
//! | 8..11  | one-hot VATA, PITTA, KAPHA (never scaled)                      |
//!
//! The scaling parameters are fitted offline and loaded with the model artifact.

use ahara_core::constants::features::{
    CONSTITUTION_COUNT, FEATURE_VECTOR_LEN, NUMERIC_FEATURES, NUMERIC_FEATURE_COUNT,
};
use ahara_core::errors::InferenceError;
use ahara_core::models::MealProfile;
use serde::Serialize;
use tracing::warn;

/// Per-feature standardisation parameters, in `NUMERIC_FEATURES` order
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ScalingParameters {
    mean: [f64; NUMERIC_FEATURE_COUNT],
    scale: [f64; NUMERIC_FEATURE_COUNT],
}

impl ScalingParameters {
    /// Build scaling parameters from fitted means and standard deviations
    ///
    /// A zero scale is replaced by 1.0 so a constant training feature is only
    /// centred, never divided by zero.
    ///
    /// # Errors
    ///
    /// Returns `InferenceError::ShapeMismatch` if either slice is not exactly
    /// eight long, or `InferenceError::Configuration` if any value is not finite
    pub fn new(mean: &[f64], scale: &[f64]) -> Result<Self, InferenceError> {
        let mean: [f64; NUMERIC_FEATURE_COUNT] = mean.try_into().map_err(|_| {
            InferenceError::shape_mismatch("scaler mean", NUMERIC_FEATURE_COUNT, mean.len())
        })?;
        let mut scale: [f64; NUMERIC_FEATURE_COUNT] = scale.try_into().map_err(|_| {
            InferenceError::shape_mismatch("scaler scale", NUMERIC_FEATURE_COUNT, scale.len())
        })?;

        if mean.iter().chain(scale.iter()).any(|v| !v.is_finite()) {
            return Err(InferenceError::configuration(
                "scaler parameters must be finite numbers",
            ));
        }

        for (name, s) in NUMERIC_FEATURES.iter().zip(scale.iter_mut()) {
            if *s == 0.0 {
                warn!(feature = %name, "Zero scale in scaler parameters, treating as 1.0");
                *s = 1.0;
            }
        }

        Ok(Self { mean, scale })
    }

    /// Parameters that leave features unchanged (mean 0, scale 1)
    #[must_use]
    pub const fn identity() -> Self {
        Self {
            mean: [0.0; NUMERIC_FEATURE_COUNT],
            scale: [1.0; NUMERIC_FEATURE_COUNT],
        }
    }

    /// Fitted means
    #[must_use]
    pub const fn mean(&self) -> &[f64; NUMERIC_FEATURE_COUNT] {
        &self.mean
    }

    /// Fitted scales, with zeros already replaced
    #[must_use]
    pub const fn scale(&self) -> &[f64; NUMERIC_FEATURE_COUNT] {
        &self.scale
    }

    /// Standardise raw continuous features
    #[must_use]
    pub fn transform(&self, raw: [f64; NUMERIC_FEATURE_COUNT]) -> [f64; NUMERIC_FEATURE_COUNT] {
        let mut scaled = raw;
        for ((value, mean), scale) in scaled.iter_mut().zip(&self.mean).zip(&self.scale) {
            *value = (*value - mean) / scale;
        }
        scaled
    }
}

/// Encoded model input
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(transparent)]
pub struct FeatureVector([f64; FEATURE_VECTOR_LEN]);

impl FeatureVector {
    /// Wrap an already-encoded slice
    ///
    /// # Errors
    ///
    /// Returns `InferenceError::ShapeMismatch` unless the slice has 11 values
    pub fn from_slice(values: &[f64]) -> Result<Self, InferenceError> {
        values.try_into().map(Self).map_err(|_| {
            InferenceError::shape_mismatch("feature vector", FEATURE_VECTOR_LEN, values.len())
        })
    }

    /// All 11 values
    #[must_use]
    pub const fn as_slice(&self) -> &[f64] {
        &self.0
    }

    /// Scaled continuous features
    #[must_use]
    pub fn numeric(&self) -> &[f64] {
        &self.0[..NUMERIC_FEATURE_COUNT]
    }

    /// One-hot constitution slots
    #[must_use]
    pub fn constitution_slots(&self) -> &[f64] {
        &self.0[NUMERIC_FEATURE_COUNT..NUMERIC_FEATURE_COUNT + CONSTITUTION_COUNT]
    }
}

impl AsRef<[f64]> for FeatureVector {
    fn as_ref(&self) -> &[f64] {
        &self.0
    }
}

/// Encode a meal profile into the model input
///
/// Unrecognised constitution names fall back to the VATA slot; only an
/// integer outside 0..=2 is rejected.
///
/// # Errors
///
/// - `InferenceError::Configuration` if no scaling parameters are available
/// - `InferenceError::ConstitutionIndex` for an out-of-range constitution index
pub fn encode(
    profile: &MealProfile,
    scaling: Option<&ScalingParameters>,
) -> Result<FeatureVector, InferenceError> {
    let scaling = scaling.ok_or_else(|| {
        InferenceError::configuration("scaling parameters are not loaded")
    })?;
    let constitution = profile.constitution.resolve_lenient()?;

    let mut values = [0.0; FEATURE_VECTOR_LEN];
    values[..NUMERIC_FEATURE_COUNT].copy_from_slice(&scaling.transform(profile.numeric_features()));
    values[NUMERIC_FEATURE_COUNT + constitution.index()] = 1.0;

    Ok(FeatureVector(values))
}
