// ABOUTME: Maps raw deficiency probabilities to risk and confidence tiers
// ABOUTME: Pure, deterministic tiering with configurable cut points
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Ahara Nutrition Intelligence

//! Prediction interpretation
//!
//! Risk is bucketed on the probability itself, confidence on its distance from
//! the 0.5 midpoint. Probabilities outside [0, 1] are tiered as-is.

use crate::config::intelligence::InterpretationThresholds;
use ahara_core::errors::InferenceError;
use ahara_core::models::{ConfidenceLevel, InterpretedResult, LabelAssessment, RiskLevel};

/// Interpreter holding the tiering cut points
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct PredictionInterpreter {
    thresholds: InterpretationThresholds,
}

impl PredictionInterpreter {
    /// Create an interpreter with custom thresholds
    #[must_use]
    pub const fn new(thresholds: InterpretationThresholds) -> Self {
        Self { thresholds }
    }

    /// Thresholds in use
    #[must_use]
    pub const fn thresholds(&self) -> &InterpretationThresholds {
        &self.thresholds
    }

    /// Risk tier: low below `risk_moderate`, high at or above `risk_high`
    #[must_use]
    pub fn risk_level(&self, probability: f64) -> RiskLevel {
        if probability < self.thresholds.risk_moderate {
            RiskLevel::Low
        } else if probability < self.thresholds.risk_high {
            RiskLevel::Moderate
        } else {
            RiskLevel::High
        }
    }

    /// Confidence tier from distance to the decision boundary (strict comparisons)
    #[must_use]
    pub fn confidence_level(&self, probability: f64) -> ConfidenceLevel {
        let distance = (probability - self.thresholds.decision_boundary).abs();
        if distance > self.thresholds.confidence_high_distance {
            ConfidenceLevel::High
        } else if distance > self.thresholds.confidence_medium_distance {
            ConfidenceLevel::Medium
        } else {
            ConfidenceLevel::Low
        }
    }

    /// Interpret a probability vector against its labels, preserving order
    ///
    /// # Errors
    ///
    /// Returns `InferenceError::ShapeMismatch` if the two lengths differ
    pub fn interpret<S: AsRef<str>>(
        &self,
        probabilities: &[f64],
        labels: &[S],
    ) -> Result<InterpretedResult, InferenceError> {
        if probabilities.len() != labels.len() {
            return Err(InferenceError::shape_mismatch(
                "interpretation labels",
                labels.len(),
                probabilities.len(),
            ));
        }

        let assessments = probabilities
            .iter()
            .zip(labels)
            .map(|(&probability, label)| LabelAssessment {
                label: label.as_ref().to_owned(),
                probability,
                risk_level: self.risk_level(probability),
                confidence_level: self.confidence_level(probability),
            })
            .collect();

        Ok(InterpretedResult::new(assessments))
    }
}

/// Risk tier using the default cut points
#[must_use]
pub fn risk_level(probability: f64) -> RiskLevel {
    PredictionInterpreter::default().risk_level(probability)
}

/// Confidence tier using the default cut points
#[must_use]
pub fn confidence_level(probability: f64) -> ConfidenceLevel {
    PredictionInterpreter::default().confidence_level(probability)
}

/// Interpret probabilities using the default cut points
///
/// # Errors
///
/// Returns `InferenceError::ShapeMismatch` if the two lengths differ
pub fn interpret<S: AsRef<str>>(
    probabilities: &[f64],
    labels: &[S],
) -> Result<InterpretedResult, InferenceError> {
    PredictionInterpreter::default().interpret(probabilities, labels)
}
