// ABOUTME: Weekly intake tracking models for multi-day nutrient analysis
// ABOUTME: WeeklyMealLog, DayLog, MealEntry, UserProfile, HealthProfile, and ActivityLevel definitions
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Ahara Nutrition Intelligence

use super::meal::ConstitutionInput;
use crate::constants::profile_defaults;
use serde::{Deserialize, Serialize};

/// Type of meal
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, Default)]
#[serde(rename_all = "snake_case")]
pub enum MealType {
    /// Breakfast meal
    Breakfast,
    /// Lunch meal
    Lunch,
    /// Dinner meal
    Dinner,
    /// Snack between meals
    Snack,
    /// Unspecified or other meal type
    #[default]
    Other,
}

/// Individual meal entry within a day
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct MealEntry {
    /// Meal name/type (breakfast, lunch, dinner, snack)
    #[serde(rename = "type", alias = "meal_type", default)]
    pub meal_type: MealType,
    /// Calories for this meal
    pub calories: f64,
    /// Protein in grams
    pub protein: f64,
    /// Carbohydrates in grams
    pub carbs: f64,
    /// Fat in grams
    pub fat: f64,
    /// Iron in mg
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub iron: Option<f64>,
    /// Vitamin C in mg
    #[serde(
        rename = "vitaminC",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub vitamin_c: Option<f64>,
}

/// Meals logged on a single day
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct DayLog {
    /// Day label (e.g. "monday", "2025-03-01")
    pub day: String,
    /// Meals eaten that day
    #[serde(default)]
    pub meals: Vec<MealEntry>,
}

impl DayLog {
    /// Total calories for the day
    #[must_use]
    pub fn total_calories(&self) -> f64 {
        self.meals.iter().map(|meal| meal.calories).sum()
    }
}

/// A week of logged meals
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct WeeklyMealLog {
    /// Logged days
    #[serde(alias = "weeklyMeals")]
    pub days: Vec<DayLog>,
}

impl WeeklyMealLog {
    /// Whether no day has been logged
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.days.is_empty()
    }

    /// Number of meals across all days
    #[must_use]
    pub fn meal_count(&self) -> usize {
        self.days.iter().map(|day| day.meals.len()).sum()
    }
}

/// Self-reported activity level
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, Default)]
#[serde(rename_all = "lowercase")]
pub enum ActivityLevel {
    /// Little or no exercise
    Sedentary,
    /// 1-3 days/week
    Light,
    /// 3-5 days/week
    #[default]
    Moderate,
    /// 6-7 days/week
    Very,
    /// Hard training twice a day
    Extra,
}

impl ActivityLevel {
    /// Whether training load warrants extra recovery nutrition
    #[must_use]
    pub const fn is_high(self) -> bool {
        matches!(self, Self::Very | Self::Extra)
    }
}

/// Eater attributes shared by every meal of a weekly log
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct UserProfile {
    /// Age in years
    pub age: i64,
    /// Gender indicator (0 female, 1 male)
    pub gender: i64,
    /// Constitution, symbolic or by index
    #[serde(alias = "dosha")]
    pub constitution: ConstitutionInput,
    /// Activity level
    #[serde(rename = "activityLevel", alias = "activity_level")]
    pub activity_level: ActivityLevel,
}

impl Default for UserProfile {
    fn default() -> Self {
        Self {
            age: profile_defaults::AGE,
            gender: profile_defaults::GENDER,
            constitution: ConstitutionInput::default(),
            activity_level: ActivityLevel::default(),
        }
    }
}

/// Eater attributes plus self-reported health goals and concerns
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct HealthProfile {
    /// Demographics, constitution, and activity level
    #[serde(flatten)]
    pub user: UserProfile,
    /// Goals such as "Weight Loss" or "Muscle Building"
    #[serde(rename = "healthGoals", alias = "health_goals", default)]
    pub health_goals: Vec<String>,
    /// Concerns such as "Anxiety" or "Insomnia"
    #[serde(rename = "healthConcerns", alias = "health_concerns", default)]
    pub health_concerns: Vec<String>,
}

impl HealthProfile {
    /// Whether a goal was reported, matched exactly
    #[must_use]
    pub fn has_goal(&self, goal: &str) -> bool {
        self.health_goals.iter().any(|g| g == goal)
    }

    /// Whether any of the given concerns was reported, matched exactly
    #[must_use]
    pub fn has_any_concern(&self, concerns: &[&str]) -> bool {
        self.health_concerns
            .iter()
            .any(|c| concerns.contains(&c.as_str()))
    }
}
