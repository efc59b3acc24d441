// ABOUTME: Weekly intake analysis combining daily averages with a model prediction
// ABOUTME: A failed prediction degrades to no prediction rather than failing the week
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Ahara Nutrition Intelligence

use super::{InferenceReport, NutrientRiskEngine};
use crate::errors::{AppError, AppResult};
use crate::model::DeficiencyPredictor;
use ahara_core::constants::labels;
use ahara_core::models::{UserProfile, WeeklyMealLog};
use ahara_intelligence::weekly_analysis::{NutrientAverages, WeeklyInsight};
use chrono::{DateTime, Utc};
use serde::Serialize;
use tracing::{info, warn};

/// Weekly analysis result
#[derive(Debug, Clone, Serialize)]
pub struct WeeklyReport {
    /// Average daily intake over the week
    pub weekly_averages: NutrientAverages,
    /// Inference on the average day; `None` if the model failed
    pub prediction: Option<InferenceReport>,
    /// Observations about the week
    pub insights: Vec<WeeklyInsight>,
    /// Constitution and activity planning advice
    pub recommendations: Vec<String>,
    /// When the analysis ran
    pub generated_at: DateTime<Utc>,
}

impl<P: DeficiencyPredictor> NutrientRiskEngine<P> {
    /// Analyze a week of meals for one eater
    ///
    /// # Errors
    ///
    /// Returns `InvalidInput` if the log contains no days
    pub fn analyze_week(&self, log: &WeeklyMealLog, user: &UserProfile) -> AppResult<WeeklyReport> {
        if log.is_empty() {
            return Err(AppError::invalid_input("No weekly meal data provided"));
        }

        let weekly_averages = self.weekly.daily_averages(log);
        let prediction = match self.run_inference(&weekly_averages.to_meal_profile(user)) {
            Ok(report) => Some(report),
            Err(e) => {
                warn!(error = %e, "Weekly prediction failed, continuing without it");
                None
            }
        };

        let iron_probability = prediction
            .as_ref()
            .and_then(|report| report.probabilities.get(labels::IRON).copied());
        let insights = self.weekly.insights(log, &weekly_averages, iron_probability);
        let recommendations = self.weekly.recommendations(user);

        info!(
            weekly.days = log.days.len(),
            weekly.meals = log.meal_count(),
            weekly.insights = insights.len(),
            weekly.predicted = prediction.is_some(),
            "Weekly analysis completed"
        );

        Ok(WeeklyReport {
            weekly_averages,
            prediction,
            insights,
            recommendations,
            generated_at: Utc::now(),
        })
    }
}
