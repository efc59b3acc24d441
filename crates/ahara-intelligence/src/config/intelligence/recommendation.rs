// ABOUTME: Recommendation engine configuration for deficiency and constitution advice
// ABOUTME: Holds the advisory message catalogue keyed by deficiency and constitution
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Ahara Nutrition Intelligence

//! Recommendation Engine Configuration
//!
//! Advice is selected by rule, never generated, so the whole catalogue lives
//! here as plain strings. Deployments may override any entry.

use super::error::ConfigError;
use ahara_core::models::{Constitution, DeficiencyLabel};
use serde::{Deserialize, Serialize};

/// Recommendation Engine Configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RecommendationEngineConfig {
    /// Advisory message catalogue
    pub messages: RecommendationMessages,
}

/// Fixed advice for one constitution
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConstitutionMessages {
    /// Always emitted when the constitution is recognised
    pub general: String,
    /// Emitted when the constitution's associated deficiency is elevated
    pub conditional: String,
}

/// Template messages for deficiency and constitution advice
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RecommendationMessages {
    /// Advice for elevated iron deficiency risk
    pub iron_deficiency: String,
    /// Advice for elevated vitamin C deficiency risk
    pub vitamin_c_deficiency: String,
    /// Advice for elevated protein deficiency risk
    pub protein_deficiency: String,
    /// Vata constitution advice
    pub vata: ConstitutionMessages,
    /// Pitta constitution advice
    pub pitta: ConstitutionMessages,
    /// Kapha constitution advice
    pub kapha: ConstitutionMessages,
}

impl Default for RecommendationMessages {
    fn default() -> Self {
        Self {
            iron_deficiency: "Consider increasing iron-rich foods like spinach, lentils, and pumpkin seeds. Pair with vitamin C sources for better absorption.".into(),
            vitamin_c_deficiency: "Increase vitamin C intake with citrus fruits, bell peppers, or amla. Fresh fruits are better than supplements when possible.".into(),
            protein_deficiency: "Consider adding more protein sources like legumes, nuts, seeds, or lean meats depending on your dietary preferences.".into(),
            vata: ConstitutionMessages {
                general: "For Vata constitution: Focus on warm, cooked foods and regular meal times. Include healthy fats like ghee and nuts.".into(),
                conditional: "Vata types benefit from iron-rich foods cooked with warming spices like ginger.".into(),
            },
            pitta: ConstitutionMessages {
                general: "For Pitta constitution: Favor cooling foods and avoid excessive spicy or acidic items. Include sweet, bitter, and astringent tastes.".into(),
                conditional: "Pitta types should focus on cooling vitamin C sources like sweet fruits.".into(),
            },
            kapha: ConstitutionMessages {
                general: "For Kapha constitution: Choose light, warm, and spicy foods. Reduce heavy, oily, and sweet foods.".to_owned(),
                conditional: "Kapha types benefit from light proteins like legumes and lean meats with spices.".to_owned(),
            },
        }
    }
}

impl RecommendationMessages {
    /// Advice for an elevated deficiency
    #[must_use]
    pub fn deficiency(&self, label: DeficiencyLabel) -> &str {
        match label {
            DeficiencyLabel::Iron => &self.iron_deficiency,
            DeficiencyLabel::VitaminC => &self.vitamin_c_deficiency,
            DeficiencyLabel::Protein => &self.protein_deficiency,
        }
    }

    /// Advice block for a constitution
    #[must_use]
    pub const fn constitution(&self, constitution: Constitution) -> &ConstitutionMessages {
        match constitution {
            Constitution::Vata => &self.vata,
            Constitution::Pitta => &self.pitta,
            Constitution::Kapha => &self.kapha,
        }
    }

    /// Validate that no advisory text is blank
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::MissingField` naming the first empty message
    pub fn validate(&self) -> Result<(), ConfigError> {
        let entries: [(&'static str, &str); 9] = [
            ("iron_deficiency", &self.iron_deficiency),
            ("vitamin_c_deficiency", &self.vitamin_c_deficiency),
            ("protein_deficiency", &self.protein_deficiency),
            ("vata.general", &self.vata.general),
            ("vata.conditional", &self.vata.conditional),
            ("pitta.general", &self.pitta.general),
            ("pitta.conditional", &self.pitta.conditional),
            ("kapha.general", &self.kapha.general),
            ("kapha.conditional", &self.kapha.conditional),
        ];
        entries
            .iter()
            .find(|(_, text)| text.trim().is_empty())
            .map_or(Ok(()), |(name, _)| Err(ConfigError::MissingField(*name)))
    }
}
