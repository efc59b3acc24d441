// ABOUTME: Personalized recommendation configuration
// ABOUTME: Probability cut points for deficiency advice and supplement suggestions
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Ahara Nutrition Intelligence

use super::error::ConfigError;
use ahara_core::constants::personalized;
use serde::{Deserialize, Serialize};

/// Personalized Recommendation Configuration
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PersonalizedConfig {
    /// Iron probability above which iron advice is given
    pub iron_advice_probability: f64,
    /// Vitamin C probability above which vitamin C advice is given
    pub vitamin_c_advice_probability: f64,
    /// Iron probability above which an iron supplement is suggested
    pub iron_supplement_probability: f64,
    /// Vitamin C probability above which a vitamin C supplement is suggested
    pub vitamin_c_supplement_probability: f64,
}

impl Default for PersonalizedConfig {
    fn default() -> Self {
        Self {
            iron_advice_probability: personalized::IRON_ADVICE_PROBABILITY,
            vitamin_c_advice_probability: personalized::VITAMIN_C_ADVICE_PROBABILITY,
            iron_supplement_probability: personalized::IRON_SUPPLEMENT_PROBABILITY,
            vitamin_c_supplement_probability: personalized::VITAMIN_C_SUPPLEMENT_PROBABILITY,
        }
    }
}

impl PersonalizedConfig {
    /// Validate configuration values
    ///
    /// # Errors
    ///
    /// Returns an error if any cut point lies outside [0, 1]
    pub fn validate(&self) -> Result<(), ConfigError> {
        let cut_points = [
            self.iron_advice_probability,
            self.vitamin_c_advice_probability,
            self.iron_supplement_probability,
            self.vitamin_c_supplement_probability,
        ];
        if cut_points.iter().all(|p| (0.0..=1.0).contains(p)) {
            Ok(())
        } else {
            Err(ConfigError::InvalidRange(
                "personalized probability cut points must be within [0, 1]",
            ))
        }
    }
}
