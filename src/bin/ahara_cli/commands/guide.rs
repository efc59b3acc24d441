// ABOUTME: Guide and foods commands printing constitution guides and food nutrient data
// ABOUTME: Static lookups only, no model artifact required
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Ahara Nutrition Intelligence

use crate::helpers::io::{print_json, read_json};
use ahara::ayurveda::{food_guide, meal_modifications, seasonal_advice, FoodGuide, Season};
use ahara::models::{Constitution, MealProfile};
use ahara::nutrient_db::search_foods;
use serde::Serialize;
use std::path::Path;

#[derive(Serialize)]
struct GuideOutput {
    constitution: Constitution,
    food_guide: &'static FoodGuide,
    #[serde(skip_serializing_if = "Option::is_none")]
    season: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    seasonal_advice: Option<&'static str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    meal_modifications: Option<Vec<&'static str>>,
}

/// Print the guide for a constitution
pub fn show(constitution: &str, season: Option<&str>, meal: Option<&Path>) -> anyhow::Result<()> {
    let strict = Constitution::parse(constitution);
    let lenient = Constitution::from_str_lossy(constitution);

    let modifications = match meal {
        Some(path) => {
            let profile: MealProfile = read_json(Some(path))?;
            Some(meal_modifications(strict, profile.iron, profile.vitamin_c))
        }
        None => None,
    };

    let output = GuideOutput {
        constitution: lenient,
        food_guide: food_guide(lenient),
        season: season.map(str::to_owned),
        seasonal_advice: season.map(|s| seasonal_advice(Season::parse(s), strict)),
        meal_modifications: modifications,
    };
    print_json(&output)
}

/// Print foods whose name contains `search`, or every food
pub fn foods(search: Option<&str>) -> anyhow::Result<()> {
    print_json(&search_foods(search.unwrap_or_default()))
}
