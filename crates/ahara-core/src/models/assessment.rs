// ABOUTME: Interpreted prediction models: deficiency labels, risk and confidence tiers
// ABOUTME: Ordered per-label assessments derived purely from a probability vector
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Ahara Nutrition Intelligence

use crate::constants::labels;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Nutrient deficiency the model predicts
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum DeficiencyLabel {
    /// Iron deficiency
    #[serde(rename = "iron_def")]
    Iron,
    /// Vitamin C deficiency
    #[serde(rename = "vitc_def")]
    VitaminC,
    /// Protein deficiency
    #[serde(rename = "protein_def")]
    Protein,
}

impl DeficiencyLabel {
    /// Labels in the fixed advice order
    pub const ALL: [Self; 3] = [Self::Iron, Self::VitaminC, Self::Protein];

    /// Label name as emitted by the model
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Iron => labels::IRON,
            Self::VitaminC => labels::VITAMIN_C,
            Self::Protein => labels::PROTEIN,
        }
    }

    /// Parse a model label name
    #[must_use]
    pub fn parse(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|label| label.as_str() == name)
    }
}

impl fmt::Display for DeficiencyLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Coarse risk bucket for a deficiency probability
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum RiskLevel {
    /// p < 0.3
    Low,
    /// 0.3 <= p < 0.6
    Moderate,
    /// p >= 0.6
    High,
}

impl RiskLevel {
    /// Whether this tier triggers deficiency advice
    #[must_use]
    pub const fn is_elevated(self) -> bool {
        !matches!(self, Self::Low)
    }

    /// Lower-case name used in reports
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Low => "low",
            Self::Moderate => "moderate",
            Self::High => "high",
        }
    }
}

impl fmt::Display for RiskLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// How far a probability sits from the undecided midpoint
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum ConfidenceLevel {
    /// Distance from 0.5 at most 0.2
    Low,
    /// Distance from 0.5 in (0.2, 0.4]
    Medium,
    /// Distance from 0.5 above 0.4
    High,
}

impl ConfidenceLevel {
    /// Lower-case name used in reports
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Low => "low",
            Self::Medium => "medium",
            Self::High => "high",
        }
    }
}

impl fmt::Display for ConfidenceLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Interpretation of a single label's probability
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LabelAssessment {
    /// Label name as emitted by the model
    pub label: String,
    /// Raw probability
    pub probability: f64,
    /// Risk tier
    pub risk_level: RiskLevel,
    /// Confidence tier
    #[serde(rename = "confidence")]
    pub confidence_level: ConfidenceLevel,
}

/// Per-label assessments in model output order
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct InterpretedResult {
    assessments: Vec<LabelAssessment>,
}

impl InterpretedResult {
    /// Wrap assessments that are already in output order
    #[must_use]
    pub const fn new(assessments: Vec<LabelAssessment>) -> Self {
        Self { assessments }
    }

    /// Look up a label by name
    #[must_use]
    pub fn get(&self, label: &str) -> Option<&LabelAssessment> {
        self.assessments.iter().find(|a| a.label == label)
    }

    /// Risk tier for a known deficiency, if that label is present
    #[must_use]
    pub fn risk_level(&self, label: DeficiencyLabel) -> Option<RiskLevel> {
        self.get(label.as_str()).map(|a| a.risk_level)
    }

    /// Whether a known deficiency is present at moderate or high risk
    #[must_use]
    pub fn is_elevated(&self, label: DeficiencyLabel) -> bool {
        self.risk_level(label).is_some_and(RiskLevel::is_elevated)
    }

    /// Iterate in output order
    pub fn iter(&self) -> impl Iterator<Item = &LabelAssessment> {
        self.assessments.iter()
    }

    /// Number of labels
    #[must_use]
    pub fn len(&self) -> usize {
        self.assessments.len()
    }

    /// Whether no labels were interpreted
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.assessments.is_empty()
    }
}

impl<'a> IntoIterator for &'a InterpretedResult {
    type Item = &'a LabelAssessment;
    type IntoIter = std::slice::Iter<'a, LabelAssessment>;

    fn into_iter(self) -> Self::IntoIter {
        self.assessments.iter()
    }
}
