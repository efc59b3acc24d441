// ABOUTME: Interpretation thresholds for probability risk and confidence tiering
// ABOUTME: Defaults are the fixed cut points the advisory rules were written against
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Ahara Nutrition Intelligence

use super::error::ConfigError;
use ahara_core::constants::thresholds;
use serde::{Deserialize, Serialize};

/// Cut points used by the prediction interpreter
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct InterpretationThresholds {
    /// Probabilities below this are low risk
    pub risk_moderate: f64,
    /// Probabilities at or above this are high risk
    pub risk_high: f64,
    /// Midpoint distances are measured from
    pub decision_boundary: f64,
    /// Distance strictly above which confidence is high
    pub confidence_high_distance: f64,
    /// Distance strictly above which confidence is medium
    pub confidence_medium_distance: f64,
}

impl Default for InterpretationThresholds {
    fn default() -> Self {
        Self {
            risk_moderate: thresholds::RISK_MODERATE,
            risk_high: thresholds::RISK_HIGH,
            decision_boundary: thresholds::DECISION_BOUNDARY,
            confidence_high_distance: thresholds::CONFIDENCE_HIGH_DISTANCE,
            confidence_medium_distance: thresholds::CONFIDENCE_MEDIUM_DISTANCE,
        }
    }
}

impl InterpretationThresholds {
    /// Validate ranges and ordering
    ///
    /// # Errors
    ///
    /// Returns an error if a cut point is outside [0, 1] or the tiers overlap
    pub fn validate(&self) -> Result<(), ConfigError> {
        let probabilities = [self.risk_moderate, self.risk_high, self.decision_boundary];
        if probabilities.iter().any(|p| !(0.0..=1.0).contains(p)) {
            return Err(ConfigError::InvalidRange(
                "risk thresholds and decision boundary must be within [0, 1]",
            ));
        }
        if self.risk_moderate >= self.risk_high {
            return Err(ConfigError::UnorderedThresholds(
                "risk_moderate must be below risk_high",
            ));
        }
        if !(0.0..=0.5).contains(&self.confidence_medium_distance)
            || !(0.0..=0.5).contains(&self.confidence_high_distance)
        {
            return Err(ConfigError::InvalidRange(
                "confidence distances must be within [0, 0.5]",
            ));
        }
        if self.confidence_medium_distance >= self.confidence_high_distance {
            return Err(ConfigError::UnorderedThresholds(
                "confidence_medium_distance must be below confidence_high_distance",
            ));
        }
        Ok(())
    }
}
