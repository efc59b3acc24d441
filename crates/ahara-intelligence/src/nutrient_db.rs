// ABOUTME: Reference food nutrient table and food-list nutrient totals
// ABOUTME: Lookup, substring search, and portion-scaled summation into a meal profile
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Ahara Nutrition Intelligence

//! Food nutrient reference data
//!
//! Values are per 100 g. Food names are looked up case-insensitively with the
//! first space read as an underscore, so "Brown Rice" finds `brown_rice`.

use ahara_core::constants::food_portions::{DEFAULT_PORTION_G, REFERENCE_PORTION_G};
use ahara_core::models::{MealProfile, UserProfile};
use serde::{Deserialize, Serialize};
use tracing::debug;

/// Nutrients per 100 g of a food
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct FoodNutrients {
    /// Display name
    pub name: &'static str,
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
    /// Calcium (mg)
    pub calcium: f64,
    /// Magnesium (mg)
    pub magnesium: f64,
}

static FOOD_TABLE: [(&str, FoodNutrients); 5] = [
    (
        "spinach",
        FoodNutrients {
            name: "Spinach",
            calories: 23.0,
            protein: 2.9,
            carbs: 3.6,
            fat: 0.4,
            iron: 2.7,
            vitamin_c: 28.1,
            calcium: 99.0,
            magnesium: 79.0,
        },
    ),
    (
        "chicken_breast",
        FoodNutrients {
            name: "Chicken Breast",
            calories: 165.0,
            protein: 31.0,
            carbs: 0.0,
            fat: 3.6,
            iron: 0.7,
            vitamin_c: 0.0,
            calcium: 15.0,
            magnesium: 29.0,
        },
    ),
    (
        "brown_rice",
        FoodNutrients {
            name: "Brown Rice",
            calories: 111.0,
            protein: 2.6,
            carbs: 23.0,
            fat: 0.9,
            iron: 0.4,
            vitamin_c: 0.0,
            calcium: 10.0,
            magnesium: 43.0,
        },
    ),
    (
        "salmon",
        FoodNutrients {
            name: "Salmon",
            calories: 208.0,
            protein: 25.4,
            carbs: 0.0,
            fat: 12.4,
            iron: 0.3,
            vitamin_c: 0.0,
            calcium: 9.0,
            magnesium: 30.0,
        },
    ),
    (
        "lentils",
        FoodNutrients {
            name: "Lentils",
            calories: 116.0,
            protein: 9.0,
            carbs: 20.0,
            fat: 0.4,
            iron: 3.3,
            vitamin_c: 1.5,
            calcium: 19.0,
            magnesium: 36.0,
        },
    ),
];

fn lookup_key(name: &str) -> String {
    name.to_lowercase().replacen(' ', "_", 1)
}

/// Nutrients per 100 g for a food, if it is in the table
#[must_use]
pub fn food_nutrients(name: &str) -> Option<&'static FoodNutrients> {
    let key = lookup_key(name);
    FOOD_TABLE
        .iter()
        .find(|(k, _)| *k == key)
        .map(|(_, food)| food)
}

/// Foods whose display name contains `query`, case-insensitively, in table order
#[must_use]
pub fn search_foods(query: &str) -> Vec<&'static FoodNutrients> {
    let query = query.to_lowercase();
    FOOD_TABLE
        .iter()
        .map(|(_, food)| food)
        .filter(|food| food.name.to_lowercase().contains(&query))
        .collect()
}

/// Summed nutrients of a list of foods
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct NutrientTotals {
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
    /// Calcium (mg)
    pub calcium: f64,
    /// Magnesium (mg)
    pub magnesium: f64,
}

impl NutrientTotals {
    fn add_scaled(&mut self, food: &FoodNutrients, multiplier: f64) {
        self.calories += food.calories * multiplier;
        self.protein += food.protein * multiplier;
        self.carbs += food.carbs * multiplier;
        self.fat += food.fat * multiplier;
        self.iron += food.iron * multiplier;
        self.vitamin_c += food.vitamin_c * multiplier;
        self.calcium += food.calcium * multiplier;
        self.magnesium += food.magnesium * multiplier;
    }

    /// Meal profile for this eater; calcium and magnesium are not model inputs
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

/// Sum the nutrients of `foods`, scaling each by its portion in grams
///
/// `portions` pairs with `foods` by position. A missing, zero, or NaN portion
/// counts as 100 g. Foods not in the table contribute nothing.
#[must_use]
pub fn calculate_nutrients<S: AsRef<str>>(foods: &[S], portions: &[f64]) -> NutrientTotals {
    let mut totals = NutrientTotals::default();
    for (index, food) in foods.iter().enumerate() {
        let Some(nutrients) = food_nutrients(food.as_ref()) else {
            debug!(food = food.as_ref(), "Food not in nutrient table, skipping");
            continue;
        };
        let portion = portions
            .get(index)
            .copied()
            .filter(|p| *p != 0.0 && !p.is_nan())
            .unwrap_or(DEFAULT_PORTION_G);
        totals.add_scaled(nutrients, portion / REFERENCE_PORTION_G);
    }
    totals
}
