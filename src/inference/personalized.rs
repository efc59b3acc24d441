// ABOUTME: Personalized recommendations combining health goals with a model prediction
// ABOUTME: A failed prediction degrades to goal and constitution advice only
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Ahara Nutrition Intelligence

use super::{InferenceReport, NutrientRiskEngine};
use crate::model::DeficiencyPredictor;
use ahara_core::models::HealthProfile;
use ahara_intelligence::nutrient_db::NutrientTotals;
use ahara_intelligence::personalized::{PersonalizedRecommendation, SupplementSuggestion};
use chrono::{DateTime, Utc};
use serde::Serialize;
use tracing::{info, warn};

/// Personalized advice for one eater
#[derive(Debug, Clone, Serialize)]
pub struct PersonalizedReport {
    /// Goal, deficiency, and constitution advice, in that order
    pub recommendations: Vec<PersonalizedRecommendation>,
    /// Model output for the current intake; `None` if the model failed
    pub prediction: Option<InferenceReport>,
    /// Supplements for likely deficiencies
    pub supplement_suggestions: Vec<SupplementSuggestion>,
    /// When the advice was generated
    pub generated_at: DateTime<Utc>,
}

impl<P: DeficiencyPredictor> NutrientRiskEngine<P> {
    /// Advise an eater from their health profile and current intake
    #[must_use]
    pub fn personalize(
        &self,
        profile: &HealthProfile,
        current_nutrition: &NutrientTotals,
    ) -> PersonalizedReport {
        let meal = current_nutrition.to_meal_profile(&profile.user);
        let prediction = match self.run_inference(&meal) {
            Ok(report) => Some(report),
            Err(e) => {
                warn!(error = %e, "Personalized prediction failed, continuing without it");
                None
            }
        };

        let probabilities = prediction.as_ref().map(|report| &report.probabilities);
        let recommendations = self.advisor.recommendations(profile, probabilities);
        let supplement_suggestions = self.advisor.supplements(probabilities);

        info!(
            personalized.recommendations = recommendations.len(),
            personalized.supplements = supplement_suggestions.len(),
            personalized.predicted = prediction.is_some(),
            "Personalized recommendations generated"
        );

        PersonalizedReport {
            recommendations,
            prediction,
            supplement_suggestions,
            generated_at: Utc::now(),
        }
    }
}
