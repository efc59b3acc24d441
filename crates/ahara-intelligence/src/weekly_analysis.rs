// ABOUTME: Weekly intake aggregation, trend insights, and planning recommendations
// ABOUTME: Averages a week of meals into a daily profile and flags intake patterns
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Ahara Nutrition Intelligence

//! Weekly intake analysis
//!
//! Totals are always divided by a full week, so a partially logged week reads
//! as a lower daily intake rather than being extrapolated.

use crate::config::intelligence::WeeklyAnalysisConfig;
use ahara_core::models::{Constitution, MealProfile, UserProfile, WeeklyMealLog};
use serde::{Deserialize, Serialize};

/// Average daily nutrient intake over a week
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct NutrientAverages {
    /// Energy (kcal)
    pub calories: f64,
    /// Protein (g)
    pub protein: f64,
    /// Carbohydrates (g)
    pub carbs: f64,
    /// Fat (g)
    pub fat: f64,
    /// Iron (mg)
    pub iron: f64,
    /// Vitamin C (mg)
    #[serde(rename = "vitaminC")]
    pub vitamin_c: f64,
}

impl NutrientAverages {
    /// Meal profile representing an average day for this eater
    #[must_use]
    pub fn to_meal_profile(&self, user: &UserProfile) -> MealProfile {
        MealProfile {
            calories: self.calories,
            protein: self.protein,
            carbs: self.carbs,
            fat: self.fat,
            iron: self.iron,
            vitamin_c: self.vitamin_c,
            age: user.age,
            gender: user.gender,
            constitution: user.constitution.clone(),
        }
    }
}

/// Category of weekly insight
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum InsightKind {
    /// Day-to-day calorie spread
    Consistency,
    /// Average protein intake
    Protein,
    /// Model-predicted deficiency
    Deficiency,
}

/// A single observation about the week with a suggested action
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WeeklyInsight {
    /// Insight category
    #[serde(rename = "type")]
    pub kind: InsightKind,
    /// What was observed
    pub message: String,
    /// What to do about it
    pub recommendation: String,
}

impl WeeklyInsight {
    fn new(kind: InsightKind, message: &str, recommendation: &str) -> Self {
        Self {
            kind,
            message: message.to_owned(),
            recommendation: recommendation.to_owned(),
        }
    }
}

/// Aggregates a weekly log and derives insights from it
#[derive(Debug, Clone, Default)]
pub struct WeeklyAnalyzer {
    config: WeeklyAnalysisConfig,
}

impl WeeklyAnalyzer {
    /// Create an analyzer with custom thresholds
    #[must_use]
    pub const fn new(config: WeeklyAnalysisConfig) -> Self {
        Self { config }
    }

    /// Sum every meal in the log and divide by the week length
    ///
    /// Missing iron or vitamin C values count as zero.
    #[must_use]
    pub fn daily_averages(&self, log: &WeeklyMealLog) -> NutrientAverages {
        let totals = log
            .days
            .iter()
            .flat_map(|day| &day.meals)
            .fold(NutrientAverages::default(), |mut acc, meal| {
                acc.calories += meal.calories;
                acc.protein += meal.protein;
                acc.carbs += meal.carbs;
                acc.fat += meal.fat;
                acc.iron += meal.iron.unwrap_or(0.0);
                acc.vitamin_c += meal.vitamin_c.unwrap_or(0.0);
                acc
            });

        let days = self.config.days_per_week;
        NutrientAverages {
            calories: totals.calories / days,
            protein: totals.protein / days,
            carbs: totals.carbs / days,
            fat: totals.fat / days,
            iron: totals.iron / days,
            vitamin_c: totals.vitamin_c / days,
        }
    }

    /// Insights in fixed order: consistency, protein, deficiency
    ///
    /// `iron_probability` is `None` when no prediction could be made, in which
    /// case the deficiency insight is skipped.
    #[must_use]
    pub fn insights(
        &self,
        log: &WeeklyMealLog,
        averages: &NutrientAverages,
        iron_probability: Option<f64>,
    ) -> Vec<WeeklyInsight> {
        let mut insights = Vec::new();

        if calorie_spread(log) > self.config.calorie_variation_kcal {
            insights.push(WeeklyInsight::new(
                InsightKind::Consistency,
                "High calorie variation between days detected",
                "Try to maintain more consistent daily calorie intake",
            ));
        }

        if averages.protein < self.config.low_protein_g {
            insights.push(WeeklyInsight::new(
                InsightKind::Protein,
                "Weekly protein intake is below recommended levels",
                "Include more protein-rich foods like legumes, nuts, or lean meats",
            ));
        }

        if iron_probability.is_some_and(|p| p > self.config.iron_probability) {
            insights.push(WeeklyInsight::new(
                InsightKind::Deficiency,
                "High probability of iron deficiency detected",
                "Focus on iron-rich foods and vitamin C for better absorption",
            ));
        }

        insights
    }

    /// Planning advice from constitution and activity level
    ///
    /// An unrecognised constitution contributes nothing.
    #[must_use]
    pub fn recommendations(&self, user: &UserProfile) -> Vec<String> {
        let mut recommendations: Vec<String> = match user.constitution.resolve_strict() {
            Some(Constitution::Vata) => vec![
                "Plan regular meal times throughout the week".into(),
                "Include warm, cooked foods in your weekly meal prep".into(),
            ],
            Some(Constitution::Pitta) => vec![
                "Balance intense flavors throughout the week".into(),
                "Include cooling foods during warmer days".into(),
            ],
            Some(Constitution::Kapha) => vec![
                "Vary your meals to avoid monotony".into(),
                "Include lighter meals and stimulating spices".into(),
            ],
            None => Vec::new(),
        };

        if user.activity_level.is_high() {
            recommendations.push("Increase protein intake on workout days".into());
            recommendations.push("Ensure adequate carbohydrate replenishment post-exercise".into());
        }

        recommendations
    }
}

/// Max minus min of daily calorie totals; zero for an empty log
fn calorie_spread(log: &WeeklyMealLog) -> f64 {
    let totals = log.days.iter().map(ahara_core::models::DayLog::total_calories);
    let (min, max) = totals.fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), t| {
        (lo.min(t), hi.max(t))
    });
    if min.is_finite() && max.is_finite() {
        max - min
    } else {
        0.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ahara_core::models::{DayLog, MealEntry};

    fn day(calories: &[f64]) -> DayLog {
        DayLog {
            day: String::new(),
            meals: calories
                .iter()
                .map(|&c| MealEntry {
                    calories: c,
                    ..MealEntry::default()
                })
                .collect(),
        }
    }

    #[test]
    fn test_calorie_spread() {
        let log = WeeklyMealLog {
            days: vec![day(&[500.0, 700.0]), day(&[300.0]), day(&[])],
        };
        assert!((calorie_spread(&log) - 1200.0).abs() < f64::EPSILON);
        assert!(calorie_spread(&WeeklyMealLog::default()).abs() < f64::EPSILON);
    }

    #[test]
    fn test_spread_at_threshold_is_not_flagged() {
        let log = WeeklyMealLog {
            days: vec![day(&[1500.0]), day(&[2000.0])],
        };
        let analyzer = WeeklyAnalyzer::default();
        let averages = NutrientAverages {
            protein: 60.0,
            ..NutrientAverages::default()
        };
        assert!(analyzer.insights(&log, &averages, None).is_empty());
    }
}
