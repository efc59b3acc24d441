// ABOUTME: Personalized recommendations and supplement suggestions
// ABOUTME: Combines health goals, predicted deficiency probabilities, and constitution
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Ahara Nutrition Intelligence

//! Personalized advice
//!
//! Recommendations come out in a fixed order: health goals first, then
//! deficiency advice (only when a prediction is available), then constitution
//! balance advice. Constitution matching is strict, so an unrecognised
//! constitution adds no balance advice.

use crate::config::intelligence::PersonalizedConfig;
use ahara_core::constants::{labels, personalized};
use ahara_core::models::{Constitution, HealthProfile};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Urgency of a recommendation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Priority {
    /// Act on this first
    High,
    /// Worth doing
    Medium,
}

/// One piece of personalized advice
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PersonalizedRecommendation {
    /// Advice area, e.g. "Dosha Balance"
    pub category: String,
    /// Urgency
    pub priority: Priority,
    /// What to aim for
    pub recommendation: String,
    /// Concrete step
    pub action: String,
}

impl PersonalizedRecommendation {
    fn new(category: &str, priority: Priority, recommendation: &str, action: &str) -> Self {
        Self {
            category: category.to_owned(),
            priority,
            recommendation: recommendation.to_owned(),
            action: action.to_owned(),
        }
    }
}

/// A supplement with an Ayurvedic alternative
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SupplementSuggestion {
    /// Supplement name
    pub name: String,
    /// Daily amount
    pub dosage: String,
    /// When to take it
    pub timing: String,
    /// How long to take it
    pub duration: String,
    /// Traditional preparation serving the same purpose
    #[serde(rename = "ayurvedicAlternative", alias = "ayurvedic_alternative")]
    pub ayurvedic_alternative: String,
}

/// Builds personalized advice from a health profile and model probabilities
#[derive(Debug, Clone, Copy, Default)]
pub struct PersonalizedAdvisor {
    config: PersonalizedConfig,
}

impl PersonalizedAdvisor {
    /// Create an advisor with custom cut points
    #[must_use]
    pub const fn new(config: PersonalizedConfig) -> Self {
        Self { config }
    }

    /// Goal, deficiency, and constitution advice, in that order
    ///
    /// `probabilities` maps model labels to probabilities and is `None` when
    /// no prediction could be made.
    #[must_use]
    pub fn recommendations(
        &self,
        profile: &HealthProfile,
        probabilities: Option<&BTreeMap<String, f64>>,
    ) -> Vec<PersonalizedRecommendation> {
        let mut recommendations = Vec::new();

        if profile.has_goal(personalized::GOAL_WEIGHT_LOSS) {
            recommendations.push(PersonalizedRecommendation::new(
                "Weight Management",
                Priority::High,
                "Create a moderate calorie deficit while maintaining protein intake",
                "Reduce daily calories by 300-500 while keeping protein at 1.2g per kg body weight",
            ));
        }
        if profile.has_goal(personalized::GOAL_MUSCLE_BUILDING) {
            recommendations.push(PersonalizedRecommendation::new(
                "Muscle Building",
                Priority::High,
                "Increase protein intake and ensure adequate calories",
                "Aim for 1.6-2.2g protein per kg body weight with slight calorie surplus",
            ));
        }

        if let Some(probabilities) = probabilities {
            if exceeds(probabilities, labels::IRON, self.config.iron_advice_probability) {
                recommendations.push(PersonalizedRecommendation::new(
                    "Nutrient Deficiency",
                    Priority::High,
                    "Address potential iron deficiency",
                    "Include iron-rich foods with vitamin C sources for better absorption",
                ));
            }
            if exceeds(
                probabilities,
                labels::VITAMIN_C,
                self.config.vitamin_c_advice_probability,
            ) {
                recommendations.push(PersonalizedRecommendation::new(
                    "Nutrient Deficiency",
                    Priority::Medium,
                    "Increase vitamin C intake",
                    "Add citrus fruits, bell peppers, or amla to daily diet",
                ));
            }
        }

        recommendations.extend(constitution_recommendations(profile));
        recommendations
    }

    /// Supplements for likely iron and vitamin C deficiencies
    #[must_use]
    pub fn supplements(
        &self,
        probabilities: Option<&BTreeMap<String, f64>>,
    ) -> Vec<SupplementSuggestion> {
        let Some(probabilities) = probabilities else {
            return Vec::new();
        };
        let mut supplements = Vec::new();

        if exceeds(probabilities, labels::IRON, self.config.iron_supplement_probability) {
            supplements.push(SupplementSuggestion {
                name: "Iron Supplement".into(),
                dosage: "18mg daily".into(),
                timing: "With vitamin C source".into(),
                duration: "3 months, then retest".into(),
                ayurvedic_alternative: "Lauha Bhasma (Ayurvedic iron preparation)".into(),
            });
        }
        if exceeds(
            probabilities,
            labels::VITAMIN_C,
            self.config.vitamin_c_supplement_probability,
        ) {
            supplements.push(SupplementSuggestion {
                name: "Vitamin C".into(),
                dosage: "500mg daily".into(),
                timing: "With meals".into(),
                duration: "Ongoing".into(),
                ayurvedic_alternative: "Fresh Amla juice daily".into(),
            });
        }

        supplements
    }
}

fn exceeds(probabilities: &BTreeMap<String, f64>, label: &str, cut_point: f64) -> bool {
    probabilities.get(label).is_some_and(|p| *p > cut_point)
}

fn constitution_recommendations(profile: &HealthProfile) -> Vec<PersonalizedRecommendation> {
    match profile.user.constitution.resolve_strict() {
        Some(Constitution::Vata) => {
            let mut recommendations = vec![PersonalizedRecommendation::new(
                "Dosha Balance",
                Priority::Medium,
                "Focus on grounding and warming foods",
                "Include warm, cooked meals with healthy fats and regular meal timing",
            )];
            if profile.has_any_concern(&personalized::VATA_CALMING_CONCERNS) {
                recommendations.push(PersonalizedRecommendation::new(
                    "Mental Health",
                    Priority::High,
                    "Use calming foods to balance Vata",
                    "Include warm milk with nutmeg, dates, and calming herbal teas",
                ));
            }
            recommendations
        }
        Some(Constitution::Pitta) => vec![PersonalizedRecommendation::new(
            "Dosha Balance",
            Priority::Medium,
            "Emphasize cooling and calming foods",
            "Include sweet, bitter tastes and avoid excessive spicy or acidic foods",
        )],
        Some(Constitution::Kapha) => vec![PersonalizedRecommendation::new(
            "Dosha Balance",
            Priority::Medium,
            "Choose light, stimulating foods",
            "Include pungent, bitter tastes and reduce heavy, oily foods",
        )],
        None => Vec::new(),
    }
}
