// ABOUTME: End-to-end tests of the nutrient risk engine pipeline
// ABOUTME: Encode, predict, interpret, and recommend with fixed and artifact predictors
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Ahara Nutrition Intelligence

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

use ahara::config::intelligence::RecommendationMessages;
use ahara::errors::{AppError, ErrorCode, InferenceError};
use ahara::inference::NutrientRiskEngine;
use ahara::model::LinearDeficiencyModel;
use ahara::models::{ConstitutionInput, RiskLevel};
use std::sync::Arc;
use std::thread;

mod common;

use common::{
    engine_with, failing_predictor, fixed_predictor, meal, named, sample_artifact, test_config,
};

// ============================================================================
// SCENARIOS
// ============================================================================

#[test]
fn test_high_iron_risk_for_vata_meal() {
    let engine = engine_with(fixed_predictor(vec![0.9, 0.1, 0.1]));
    let report = engine
        .run_inference(&meal(2.0, 100.0, 80.0, named("VATA")))
        .unwrap();

    assert_eq!(report.risk_assessment["iron_def"], RiskLevel::High);
    assert_eq!(report.risk_assessment["vitc_def"], RiskLevel::Low);
    assert_eq!(report.risk_assessment["protein_def"], RiskLevel::Low);

    let messages = RecommendationMessages::default();
    assert_eq!(
        report.suggestions,
        vec![
            messages.iron_deficiency.clone(),
            messages.vata.general.clone(),
            messages.vata.conditional,
        ]
    );
}

#[test]
fn test_all_low_probabilities_give_single_general_advice() {
    let engine = engine_with(fixed_predictor(vec![0.1, 0.1, 0.1]));
    let messages = RecommendationMessages::default();

    for name in ["VATA", "PITTA", "KAPHA"] {
        let report = engine
            .run_inference(&meal(8.0, 35.0, 40.0, named(name)))
            .unwrap();
        assert_eq!(report.suggestions.len(), 1);
        assert!(report.suggestions[0].starts_with("For "));
        assert!(!report.suggestions.contains(&messages.iron_deficiency));
    }
}

#[test]
fn test_unrecognised_constitution_is_encoded_but_gets_no_advice() {
    let engine = engine_with(fixed_predictor(vec![0.1, 0.1, 0.1]));
    let report = engine
        .run_inference(&meal(8.0, 35.0, 40.0, named("ether")))
        .unwrap();

    assert_eq!(report.probabilities.len(), 3);
    assert!(report.suggestions.is_empty());
}

#[test]
fn test_constitution_index_is_accepted_for_advice() {
    let engine = engine_with(fixed_predictor(vec![0.1, 0.1, 0.5]));
    let messages = RecommendationMessages::default();
    let report = engine
        .run_inference(&meal(8.0, 35.0, 40.0, ConstitutionInput::Index(2)))
        .unwrap();

    assert_eq!(
        report.suggestions,
        vec![
            messages.protein_deficiency.clone(),
            messages.kapha.general.clone(),
            messages.kapha.conditional,
        ]
    );
}

// ============================================================================
// REPORT SHAPE
// ============================================================================

#[test]
fn test_report_carries_probabilities_and_confidence() {
    let engine = engine_with(fixed_predictor(vec![0.95, 0.45, 0.2]));
    let report = engine
        .run_inference(&meal(8.0, 35.0, 40.0, named("PITTA")))
        .unwrap();

    assert!((report.probabilities["iron_def"] - 0.95).abs() < f64::EPSILON);
    let json = serde_json::to_value(&report).unwrap();
    assert_eq!(json["confidence_scores"]["iron_def"], "high");
    assert_eq!(json["confidence_scores"]["vitc_def"], "low");
    assert_eq!(json["confidence_scores"]["protein_def"], "medium");
    assert_eq!(json["risk_assessment"]["vitc_def"], "moderate");
}

// ============================================================================
// FAILURES
// ============================================================================

#[test]
fn test_wrong_prediction_width_is_shape_mismatch() {
    let engine = engine_with(fixed_predictor(vec![0.5, 0.5]));
    let err = engine
        .run_inference(&meal(8.0, 35.0, 40.0, named("VATA")))
        .unwrap_err();
    assert_eq!(
        err,
        InferenceError::ShapeMismatch {
            context: "prediction output",
            expected: 3,
            actual: 2,
        }
    );
}

#[test]
fn test_predictor_failure_surfaces_to_caller() {
    let engine = engine_with(failing_predictor());
    let err = engine
        .run_inference(&meal(8.0, 35.0, 40.0, named("VATA")))
        .unwrap_err();
    assert!(matches!(err, InferenceError::Prediction(_)));

    let app_error = AppError::from(err);
    assert_eq!(app_error.code, ErrorCode::InternalError);
}

#[test]
fn test_out_of_range_constitution_index_fails_the_request() {
    let engine = engine_with(fixed_predictor(vec![0.1, 0.1, 0.1]));
    let err = engine
        .run_inference(&meal(8.0, 35.0, 40.0, ConstitutionInput::Index(5)))
        .unwrap_err();
    assert_eq!(err, InferenceError::ConstitutionIndex(5));
    assert_eq!(AppError::from(err).code, ErrorCode::InvalidInput);
}

#[test]
fn test_engine_rejects_inverted_risk_thresholds() {
    common::init_test_logging();
    let mut config = test_config();
    config.intelligence.interpretation.risk_moderate = 0.7;

    let err = NutrientRiskEngine::with_predictor(
        sample_artifact(),
        fixed_predictor(vec![0.1, 0.1, 0.1]),
        &config,
    )
    .err()
    .unwrap();
    assert_eq!(err.code, ErrorCode::ConfigInvalid);
}

// ============================================================================
// ARTIFACT-BACKED ENGINE
// ============================================================================

#[test]
fn test_initialized_engine_uses_artifact_output_layer() {
    common::init_test_logging();
    let engine: NutrientRiskEngine<LinearDeficiencyModel> =
        NutrientRiskEngine::initialize(&test_config()).unwrap();

    let iron_poor = engine
        .run_inference(&meal(2.0, 100.0, 80.0, named("VATA")))
        .unwrap();
    assert_eq!(iron_poor.risk_assessment["iron_def"], RiskLevel::High);
    assert_eq!(iron_poor.risk_assessment["vitc_def"], RiskLevel::Low);
    assert_eq!(iron_poor.risk_assessment["protein_def"], RiskLevel::Low);

    let health = engine.health();
    assert_eq!(health.status, "healthy");
    assert!(health.output_layer_loaded);
    assert_eq!(health.output_labels, vec!["iron_def", "vitc_def", "protein_def"]);
}

#[test]
fn test_engine_is_shared_across_threads() {
    let engine = Arc::new(engine_with(fixed_predictor(vec![0.7, 0.2, 0.1])));

    let handles: Vec<_> = (0..4)
        .map(|i| {
            let engine = Arc::clone(&engine);
            thread::spawn(move || {
                let profile = meal(f64::from(i), 35.0, 40.0, named("KAPHA"));
                engine.run_inference(&profile).unwrap()
            })
        })
        .collect();

    let reports: Vec<_> = handles.into_iter().map(|h| h.join().unwrap()).collect();
    assert!(reports.windows(2).all(|pair| pair[0] == pair[1]));
}
