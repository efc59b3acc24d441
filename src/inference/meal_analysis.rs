// ABOUTME: Meal analysis from a list of foods: nutrient totals, prediction, and advice
// ABOUTME: Totals feed the model and the constitution meal modifications
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Ahara Nutrition Intelligence

use super::{InferenceReport, NutrientRiskEngine};
use crate::errors::AppResult;
use crate::model::DeficiencyPredictor;
use ahara_core::models::UserProfile;
use ahara_intelligence::ayurveda::meal_modifications;
use ahara_intelligence::nutrient_db::{calculate_nutrients, NutrientTotals};
use serde::Serialize;
use tracing::info;

/// Analysis of one meal given as a food list
#[derive(Debug, Clone, Serialize)]
pub struct MealAnalysisReport {
    /// Summed nutrients of the recognised foods
    pub nutrient_summary: NutrientTotals,
    /// Constitution meal modifications for these totals
    pub dosha_advice: Vec<String>,
    /// Model output for the totals
    pub prediction: InferenceReport,
    /// Model suggestions followed by the constitution modifications
    pub recommendations: Vec<String>,
}

impl<P: DeficiencyPredictor> NutrientRiskEngine<P> {
    /// Total the foods, predict deficiency risk, and gather advice
    ///
    /// `portions` are grams paired with `foods` by position; see
    /// [`calculate_nutrients`] for the defaults.
    ///
    /// # Errors
    ///
    /// Returns the inference failure converted to an `AppError`; there is no
    /// fallback prediction
    pub fn analyze_meal<S: AsRef<str>>(
        &self,
        foods: &[S],
        portions: &[f64],
        user: &UserProfile,
    ) -> AppResult<MealAnalysisReport> {
        let nutrient_summary = calculate_nutrients(foods, portions);
        let dosha_advice: Vec<String> = meal_modifications(
            user.constitution.resolve_strict(),
            nutrient_summary.iron,
            nutrient_summary.vitamin_c,
        )
        .into_iter()
        .map(str::to_owned)
        .collect();

        let prediction = self.run_inference(&nutrient_summary.to_meal_profile(user))?;

        let recommendations = prediction
            .suggestions
            .iter()
            .chain(&dosha_advice)
            .cloned()
            .collect();

        info!(
            meal.foods = foods.len(),
            meal.calories = nutrient_summary.calories,
            "Meal analysis completed"
        );

        Ok(MealAnalysisReport {
            nutrient_summary,
            dosha_advice,
            prediction,
            recommendations,
        })
    }
}
