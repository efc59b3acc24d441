// ABOUTME: Tests for personalized recommendations and supplement suggestions
// ABOUTME: Goal, deficiency, and constitution ordering plus degraded operation without a model
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Ahara Nutrition Intelligence

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

use ahara::models::HealthProfile;
use ahara::nutrient_db::NutrientTotals;
use ahara_intelligence::personalized::Priority;

mod common;

use common::{engine_with, failing_predictor, fixed_predictor};

fn profile(json: &str) -> HealthProfile {
    serde_json::from_str(json).unwrap()
}

fn intake() -> NutrientTotals {
    NutrientTotals {
        calories: 1800.0,
        protein: 55.0,
        carbs: 220.0,
        fat: 60.0,
        iron: 9.0,
        vitamin_c: 40.0,
        ..NutrientTotals::default()
    }
}

// ============================================================================
// PROFILE PARSING
// ============================================================================

#[test]
fn test_health_profile_flattens_user_attributes() {
    let parsed = profile(
        r#"{"age": 52, "gender": 1, "dosha": "kapha", "activityLevel": "very",
            "healthGoals": ["Weight Loss"], "healthConcerns": ["Anxiety"]}"#,
    );
    assert_eq!(parsed.user.age, 52);
    assert!(parsed.user.activity_level.is_high());
    assert!(parsed.has_goal("Weight Loss"));
    assert!(!parsed.has_goal("weight loss"));
    assert!(parsed.has_any_concern(&["Insomnia", "Anxiety"]));
}

// ============================================================================
// RECOMMENDATION ORDER
// ============================================================================

#[test]
fn test_goals_then_deficiencies_then_constitution() {
    let engine = engine_with(fixed_predictor(vec![0.65, 0.55, 0.1]));
    let me = profile(
        r#"{"dosha": "VATA", "healthGoals": ["Muscle Building", "Weight Loss"],
            "healthConcerns": ["Insomnia"]}"#,
    );

    let report = engine.personalize(&me, &intake());
    let categories: Vec<_> = report
        .recommendations
        .iter()
        .map(|r| r.category.as_str())
        .collect();
    assert_eq!(
        categories,
        vec![
            "Weight Management",
            "Muscle Building",
            "Nutrient Deficiency",
            "Nutrient Deficiency",
            "Dosha Balance",
            "Mental Health",
        ]
    );
    assert_eq!(report.recommendations[3].priority, Priority::Medium);
    assert!(report.prediction.is_some());

    let supplements: Vec<_> = report
        .supplement_suggestions
        .iter()
        .map(|s| s.name.as_str())
        .collect();
    assert_eq!(supplements, vec!["Iron Supplement", "Vitamin C"]);
}

#[test]
fn test_iron_supplement_needs_higher_probability_than_iron_advice() {
    let engine = engine_with(fixed_predictor(vec![0.58, 0.1, 0.1]));
    let report = engine.personalize(&profile(r#"{"dosha": "PITTA"}"#), &intake());

    assert_eq!(
        report.recommendations[0].recommendation,
        "Address potential iron deficiency"
    );
    assert_eq!(report.recommendations[1].category, "Dosha Balance");
    assert!(report.supplement_suggestions.is_empty());
}

#[test]
fn test_unrecognised_constitution_adds_no_balance_advice() {
    let engine = engine_with(fixed_predictor(vec![0.1, 0.1, 0.1]));
    let report = engine.personalize(&profile(r#"{"dosha": "ether"}"#), &intake());

    assert!(report.recommendations.is_empty());
    assert!(report.supplement_suggestions.is_empty());
}

#[test]
fn test_calming_advice_only_for_vata() {
    let engine = engine_with(fixed_predictor(vec![0.1, 0.1, 0.1]));
    let report = engine.personalize(
        &profile(r#"{"dosha": "KAPHA", "healthConcerns": ["Anxiety"]}"#),
        &intake(),
    );

    assert_eq!(report.recommendations.len(), 1);
    assert_eq!(
        report.recommendations[0].recommendation,
        "Choose light, stimulating foods"
    );
}

// ============================================================================
// DEGRADED OPERATION
// ============================================================================

#[test]
fn test_failed_prediction_keeps_goal_and_constitution_advice() {
    let engine = engine_with(failing_predictor());
    let me = profile(r#"{"dosha": "VATA", "healthGoals": ["Weight Loss"]}"#);

    let report = engine.personalize(&me, &intake());
    assert!(report.prediction.is_none());
    assert!(report.supplement_suggestions.is_empty());

    let categories: Vec<_> = report
        .recommendations
        .iter()
        .map(|r| r.category.as_str())
        .collect();
    assert_eq!(categories, vec!["Weight Management", "Dosha Balance"]);
}

// ============================================================================
// SERIALIZATION
// ============================================================================

#[test]
fn test_report_json_shape() {
    let engine = engine_with(fixed_predictor(vec![0.9, 0.1, 0.1]));
    let report = engine.personalize(&profile(r#"{"dosha": "VATA"}"#), &intake());
    let json = serde_json::to_value(&report).unwrap();

    assert_eq!(json["recommendations"][0]["priority"], "high");
    assert_eq!(
        json["supplement_suggestions"][0]["ayurvedicAlternative"],
        "Lauha Bhasma (Ayurvedic iron preparation)"
    );
    assert_eq!(json["prediction"]["risk_assessment"]["iron_def"], "high");
}
