// ABOUTME: Weekly intake analysis configuration
// ABOUTME: Thresholds for consistency, protein, and iron insights
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Ahara Nutrition Intelligence

use super::error::ConfigError;
use ahara_core::constants::weekly;
use serde::{Deserialize, Serialize};

/// Weekly Analysis Configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WeeklyAnalysisConfig {
    /// Days the weekly totals are averaged over
    pub days_per_week: f64,
    /// Max-min spread of daily calories that flags inconsistent intake
    pub calorie_variation_kcal: f64,
    /// Average daily protein (g) under which intake is flagged
    pub low_protein_g: f64,
    /// Iron deficiency probability over which a deficiency insight fires
    pub iron_probability: f64,
}

impl Default for WeeklyAnalysisConfig {
    fn default() -> Self {
        Self {
            days_per_week: weekly::DAYS_PER_WEEK,
            calorie_variation_kcal: weekly::CALORIE_VARIATION_KCAL,
            low_protein_g: weekly::LOW_PROTEIN_G,
            iron_probability: weekly::IRON_PROBABILITY,
        }
    }
}

impl WeeklyAnalysisConfig {
    /// Validate configuration values
    ///
    /// # Errors
    ///
    /// Returns an error if a threshold is negative or the averaging window is empty
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.days_per_week <= 0.0 {
            return Err(ConfigError::InvalidRange("days_per_week must be positive"));
        }
        if self.calorie_variation_kcal < 0.0 || self.low_protein_g < 0.0 {
            return Err(ConfigError::InvalidRange(
                "weekly nutrient thresholds must be non-negative",
            ));
        }
        if !(0.0..=1.0).contains(&self.iron_probability) {
            return Err(ConfigError::InvalidRange(
                "iron_probability must be within [0, 1]",
            ));
        }
        Ok(())
    }
}
