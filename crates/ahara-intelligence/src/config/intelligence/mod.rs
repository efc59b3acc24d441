// ABOUTME: Intelligence module configuration for deficiency interpretation and advice
// ABOUTME: Groups domain-specific configs and provides unified validation
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Ahara Nutrition Intelligence

//! Intelligence Configuration Module
//!
//! Configuration is organized into domain-specific modules:
//! - `interpretation` - Risk and confidence cut points
//! - `recommendation` - Advisory message catalogue
//! - `weekly` - Weekly intake insight thresholds
//! - `personalized` - Goal, deficiency, and supplement advice cut points
//!
//! There is no global instance. Callers build a config (usually `default()`),
//! validate it once, and hand it to the components that need it.

pub mod error;
pub mod interpretation;
pub mod personalized;
pub mod recommendation;
pub mod weekly;

pub use error::ConfigError;
pub use interpretation::InterpretationThresholds;
pub use personalized::PersonalizedConfig;
pub use recommendation::{ConstitutionMessages, RecommendationEngineConfig, RecommendationMessages};
pub use weekly::WeeklyAnalysisConfig;

use serde::{Deserialize, Serialize};

/// Main intelligence configuration container
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct IntelligenceConfig {
    /// Risk and confidence tiering
    pub interpretation: InterpretationThresholds,
    /// Advisory message catalogue
    pub recommendation_engine: RecommendationEngineConfig,
    /// Weekly intake analysis
    pub weekly_analysis: WeeklyAnalysisConfig,
    /// Personalized recommendations and supplements
    pub personalized: PersonalizedConfig,
}

impl IntelligenceConfig {
    /// Validate every sub-configuration
    ///
    /// # Errors
    ///
    /// Returns the first validation failure found
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.interpretation.validate()?;
        self.recommendation_engine.messages.validate()?;
        self.weekly_analysis.validate()?;
        self.personalized.validate()?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_is_valid() {
        assert!(IntelligenceConfig::default().validate().is_ok());
    }

    #[test]
    fn test_unordered_risk_thresholds_rejected() {
        let mut config = IntelligenceConfig::default();
        config.interpretation.risk_moderate = 0.7;
        assert!(matches!(
            config.validate(),
            Err(ConfigError::UnorderedThresholds(_))
        ));
    }

    #[test]
    fn test_blank_message_rejected() {
        let mut config = IntelligenceConfig::default();
        config.recommendation_engine.messages.pitta.conditional = "  ".to_owned();
        assert_eq!(
            config.validate(),
            Err(ConfigError::MissingField("pitta.conditional"))
        );
    }

    #[test]
    fn test_supplement_cut_point_above_one_rejected() {
        let mut config = IntelligenceConfig::default();
        config.personalized.iron_supplement_probability = 1.2;
        assert!(matches!(
            config.validate(),
            Err(ConfigError::InvalidRange(_))
        ));
    }

    #[test]
    fn test_partial_json_falls_back_to_defaults() {
        let config: IntelligenceConfig =
            serde_json::from_str(r#"{"weekly_analysis": {"days_per_week": 7.0, "calorie_variation_kcal": 400.0, "low_protein_g": 50.0, "iron_probability": 0.6}}"#)
                .unwrap();
        assert!((config.weekly_analysis.calorie_variation_kcal - 400.0).abs() < f64::EPSILON);
        assert_eq!(
            config.recommendation_engine.messages,
            RecommendationMessages::default()
        );
    }
}
