// ABOUTME: Tests for the food nutrient table and food-list meal analysis
// ABOUTME: Lookup normalisation, portion scaling, search, and engine orchestration
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Ahara Nutrition Intelligence

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

use ahara::errors::{ErrorCode, InferenceError};
use ahara::models::UserProfile;
use ahara::nutrient_db::{calculate_nutrients, food_nutrients, search_foods};
use ahara_intelligence::FeatureVector;

mod common;

use common::{engine_with, failing_predictor, fixed_predictor, named, sample_artifact};

fn assert_close(actual: f64, expected: f64) {
    assert!(
        (actual - expected).abs() < 1e-9,
        "expected {expected}, got {actual}"
    );
}

fn pitta_eater() -> UserProfile {
    UserProfile {
        age: 41,
        gender: 1,
        constitution: named("PITTA"),
        ..UserProfile::default()
    }
}

// ============================================================================
// LOOKUP AND SEARCH
// ============================================================================

#[test]
fn test_lookup_is_case_insensitive_with_space_as_underscore() {
    let rice = food_nutrients("Brown Rice").unwrap();
    assert_eq!(rice.name, "Brown Rice");
    assert_close(rice.carbs, 23.0);

    assert_eq!(food_nutrients("CHICKEN_BREAST"), food_nutrients("chicken breast"));
    assert!(food_nutrients("tofu").is_none());
}

#[test]
fn test_search_matches_name_fragments_in_table_order() {
    let names: Vec<_> = search_foods("").iter().map(|f| f.name).collect();
    assert_eq!(
        names,
        vec!["Spinach", "Chicken Breast", "Brown Rice", "Salmon", "Lentils"]
    );

    let rice: Vec<_> = search_foods("RICE").iter().map(|f| f.name).collect();
    assert_eq!(rice, vec!["Brown Rice"]);
    assert!(search_foods("quinoa").is_empty());
}

// ============================================================================
// NUTRIENT TOTALS
// ============================================================================

#[test]
fn test_portions_scale_per_hundred_grams_and_default_to_hundred() {
    let totals = calculate_nutrients(&["Spinach", "Chicken Breast"], &[200.0]);

    assert_close(totals.calories, 46.0 + 165.0);
    assert_close(totals.protein, 5.8 + 31.0);
    assert_close(totals.iron, 5.4 + 0.7);
    assert_close(totals.vitamin_c, 56.2);
    assert_close(totals.calcium, 198.0 + 15.0);
}

#[test]
fn test_unknown_foods_are_skipped_but_keep_their_portion_slot() {
    let totals = calculate_nutrients(&["tofu", "salmon"], &[50.0, 300.0]);
    assert_close(totals.calories, 624.0);
    assert_close(totals.fat, 37.2);
}

#[test]
fn test_empty_food_list_totals_zero() {
    let foods: [&str; 0] = [];
    let totals = calculate_nutrients(&foods, &[]);
    assert_close(totals.calories, 0.0);
    assert_close(totals.magnesium, 0.0);
}

#[test]
fn test_totals_become_the_meal_profile() {
    let totals = calculate_nutrients(&["lentils"], &[150.0]);
    let profile = totals.to_meal_profile(&pitta_eater());

    assert_close(profile.iron, 4.95);
    assert_close(profile.vitamin_c, 2.25);
    assert_eq!(profile.age, 41);
    assert_eq!(profile.gender, 1);

    let features = ahara_intelligence::encode(&profile, Some(sample_artifact().scaling())).unwrap();
    let hot_slot = features.constitution_slots().iter().position(|s| *s > 0.5);
    assert_eq!(hot_slot, Some(1));
}

// ============================================================================
// MEAL ANALYSIS
// ============================================================================

#[test]
fn test_meal_analysis_combines_model_and_constitution_advice() {
    let engine = engine_with(fixed_predictor(vec![0.7, 0.2, 0.1]));
    let report = engine
        .analyze_meal(&["lentils"], &[], &pitta_eater())
        .unwrap();

    assert_close(report.nutrient_summary.iron, 3.3);
    assert_eq!(report.dosha_advice.len(), 7);
    assert_eq!(
        report.dosha_advice[5],
        "Include iron-rich foods like sesame seeds and dark leafy greens"
    );

    let suggestions = &report.prediction.suggestions;
    assert_eq!(suggestions.len(), 2);
    assert_eq!(report.recommendations.len(), suggestions.len() + 7);
    assert_eq!(&report.recommendations[..2], suggestions.as_slice());
    assert_eq!(
        report.recommendations.last().unwrap(),
        "Add amla (Indian gooseberry) for natural vitamin C"
    );
}

#[test]
fn test_meal_analysis_feeds_totals_to_the_model() {
    let expected_iron_z = (3.3 * 2.0 - 8.0) / 4.0;
    let predictor = move |features: &FeatureVector| -> Result<Vec<f64>, InferenceError> {
        assert!((features.numeric()[4] - expected_iron_z).abs() < 1e-9);
        Ok(vec![0.1, 0.1, 0.1])
    };

    let engine = engine_with(predictor);
    let report = engine
        .analyze_meal(&["Lentils"], &[200.0], &pitta_eater())
        .unwrap();
    assert_close(report.nutrient_summary.iron, 6.6);
}

#[test]
fn test_meal_analysis_has_no_fallback_prediction() {
    let engine = engine_with(failing_predictor());
    let err = engine
        .analyze_meal(&["spinach"], &[], &pitta_eater())
        .err()
        .unwrap();
    assert_eq!(err.code, ErrorCode::InternalError);
}
