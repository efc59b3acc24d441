// ABOUTME: Tests for weekly intake analysis and its insights
// ABOUTME: Seven-day averaging, consistency/protein/iron insights, and planning advice
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Ahara Nutrition Intelligence

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

use ahara::errors::ErrorCode;
use ahara::models::{ActivityLevel, DayLog, MealEntry, MealType, UserProfile, WeeklyMealLog};
use ahara_intelligence::weekly_analysis::InsightKind;

mod common;

use common::{engine_with, failing_predictor, fixed_predictor, named};

fn entry(calories: f64, protein: f64, iron: Option<f64>) -> MealEntry {
    MealEntry {
        meal_type: MealType::Lunch,
        calories,
        protein,
        carbs: 50.0,
        fat: 14.0,
        iron,
        vitamin_c: Some(21.0),
    }
}

fn steady_week(protein_per_day: f64) -> WeeklyMealLog {
    WeeklyMealLog {
        days: (1..=7)
            .map(|d| DayLog {
                day: format!("day-{d}"),
                meals: vec![
                    entry(900.0, protein_per_day / 2.0, Some(5.0)),
                    entry(1100.0, protein_per_day / 2.0, None),
                ],
            })
            .collect(),
    }
}

fn profile(constitution: &str, activity_level: ActivityLevel) -> UserProfile {
    UserProfile {
        age: 29,
        gender: 1,
        constitution: named(constitution),
        activity_level,
    }
}

// ============================================================================
// AVERAGES
// ============================================================================

#[test]
fn test_averages_divide_by_seven_regardless_of_logged_days() {
    let engine = engine_with(fixed_predictor(vec![0.1, 0.1, 0.1]));
    let log = WeeklyMealLog {
        days: vec![DayLog {
            day: "monday".into(),
            meals: vec![entry(1400.0, 70.0, Some(14.0))],
        }],
    };

    let report = engine
        .analyze_week(&log, &profile("VATA", ActivityLevel::Moderate))
        .unwrap();

    assert!((report.weekly_averages.calories - 200.0).abs() < 1e-9);
    assert!((report.weekly_averages.protein - 10.0).abs() < 1e-9);
    assert!((report.weekly_averages.iron - 2.0).abs() < 1e-9);
    assert!((report.weekly_averages.vitamin_c - 3.0).abs() < 1e-9);
}

#[test]
fn test_missing_micronutrients_count_as_zero() {
    let engine = engine_with(fixed_predictor(vec![0.1, 0.1, 0.1]));
    let report = engine
        .analyze_week(&steady_week(80.0), &profile("VATA", ActivityLevel::Moderate))
        .unwrap();

    // 5 mg on one of two meals per day
    assert!((report.weekly_averages.iron - 5.0).abs() < 1e-9);
}

// ============================================================================
// INSIGHTS
// ============================================================================

#[test]
fn test_steady_week_with_enough_protein_has_no_insights() {
    let engine = engine_with(fixed_predictor(vec![0.2, 0.1, 0.1]));
    let report = engine
        .analyze_week(&steady_week(80.0), &profile("PITTA", ActivityLevel::Light))
        .unwrap();
    assert!(report.insights.is_empty());
}

#[test]
fn test_insights_fire_in_fixed_order() {
    let engine = engine_with(fixed_predictor(vec![0.85, 0.1, 0.1]));
    let mut log = steady_week(30.0);
    log.days[3].meals.push(entry(900.0, 0.0, None));

    let report = engine
        .analyze_week(&log, &profile("KAPHA", ActivityLevel::Moderate))
        .unwrap();

    let kinds: Vec<InsightKind> = report.insights.iter().map(|i| i.kind).collect();
    assert_eq!(
        kinds,
        vec![
            InsightKind::Consistency,
            InsightKind::Protein,
            InsightKind::Deficiency
        ]
    );
    assert_eq!(
        report.insights[0].message,
        "High calorie variation between days detected"
    );
    assert_eq!(
        report.insights[2].recommendation,
        "Focus on iron-rich foods and vitamin C for better absorption"
    );
}

#[test]
fn test_iron_probability_at_threshold_does_not_fire() {
    let engine = engine_with(fixed_predictor(vec![0.6, 0.1, 0.1]));
    let report = engine
        .analyze_week(&steady_week(80.0), &profile("VATA", ActivityLevel::Moderate))
        .unwrap();
    assert!(report
        .insights
        .iter()
        .all(|i| i.kind != InsightKind::Deficiency));
}

#[test]
fn test_failed_prediction_degrades_to_none() {
    let engine = engine_with(failing_predictor());
    let report = engine
        .analyze_week(&steady_week(30.0), &profile("VATA", ActivityLevel::Moderate))
        .unwrap();

    assert!(report.prediction.is_none());
    assert_eq!(report.insights.len(), 1);
    assert_eq!(report.insights[0].kind, InsightKind::Protein);
}

// ============================================================================
// RECOMMENDATIONS
// ============================================================================

#[test]
fn test_constitution_and_activity_recommendations() {
    let engine = engine_with(fixed_predictor(vec![0.1, 0.1, 0.1]));
    let report = engine
        .analyze_week(&steady_week(80.0), &profile("pitta", ActivityLevel::Extra))
        .unwrap();

    assert_eq!(
        report.recommendations,
        vec![
            "Balance intense flavors throughout the week",
            "Include cooling foods during warmer days",
            "Increase protein intake on workout days",
            "Ensure adequate carbohydrate replenishment post-exercise",
        ]
    );
}

#[test]
fn test_unknown_constitution_contributes_no_weekly_recommendations() {
    let engine = engine_with(fixed_predictor(vec![0.1, 0.1, 0.1]));
    let report = engine
        .analyze_week(&steady_week(80.0), &profile("ether", ActivityLevel::Sedentary))
        .unwrap();
    assert!(report.recommendations.is_empty());
    assert!(report.prediction.is_some());
}

// ============================================================================
// INPUT
// ============================================================================

#[test]
fn test_empty_log_is_invalid_input() {
    let engine = engine_with(fixed_predictor(vec![0.1, 0.1, 0.1]));
    let err = engine
        .analyze_week(&WeeklyMealLog::default(), &UserProfile::default())
        .unwrap_err();

    assert_eq!(err.code, ErrorCode::InvalidInput);
    assert_eq!(err.message, "No weekly meal data provided");
}

#[test]
fn test_log_deserializes_from_original_field_names() {
    let log: WeeklyMealLog = serde_json::from_str(
        r#"{"weeklyMeals": [{"day": "mon", "meals": [
            {"type": "breakfast", "calories": 400, "protein": 20, "carbs": 50, "fat": 10, "vitaminC": 30}
        ]}]}"#,
    )
    .unwrap();

    assert_eq!(log.meal_count(), 1);
    assert_eq!(log.days[0].meals[0].meal_type, MealType::Breakfast);
    assert_eq!(log.days[0].meals[0].iron, None);

    let user: UserProfile =
        serde_json::from_str(r#"{"dosha": "KAPHA", "activityLevel": "very"}"#).unwrap();
    assert!(user.activity_level.is_high());
    assert_eq!(user.age, 30);
}
