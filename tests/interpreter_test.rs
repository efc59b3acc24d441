// ABOUTME: Tests for probability interpretation into risk and confidence tiers
// ABOUTME: Boundary values, midpoint symmetry, label ordering, and shape checks
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Ahara Nutrition Intelligence

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

use ahara::constants::labels::OUTPUT_LABELS;
use ahara::errors::InferenceError;
use ahara::models::{ConfidenceLevel, RiskLevel};
use ahara_intelligence::{confidence_level, interpret, risk_level};

// ============================================================================
// RISK TIERS
// ============================================================================

#[test]
fn test_risk_level_boundaries() {
    assert_eq!(risk_level(0.0), RiskLevel::Low);
    assert_eq!(risk_level(0.299), RiskLevel::Low);
    assert_eq!(risk_level(0.3), RiskLevel::Moderate);
    assert_eq!(risk_level(0.599), RiskLevel::Moderate);
    assert_eq!(risk_level(0.6), RiskLevel::High);
    assert_eq!(risk_level(1.0), RiskLevel::High);
}

// ============================================================================
// CONFIDENCE TIERS
// ============================================================================

#[test]
fn test_confidence_level_tiers() {
    assert_eq!(confidence_level(0.5), ConfidenceLevel::Low);
    assert_eq!(confidence_level(0.3), ConfidenceLevel::Low);
    assert_eq!(confidence_level(0.25), ConfidenceLevel::Medium);
    assert_eq!(confidence_level(0.9), ConfidenceLevel::Medium);
    assert_eq!(confidence_level(0.95), ConfidenceLevel::High);
    assert_eq!(confidence_level(0.0), ConfidenceLevel::High);
}

#[test]
fn test_confidence_is_symmetric_around_midpoint() {
    let grid = [
        0.0, 0.05, 0.1, 0.15, 0.2, 0.25, 0.3, 0.35, 0.4, 0.45, 0.5, 0.7, 0.8, 0.9, 0.95, 1.0,
    ];
    for p in grid {
        assert_eq!(
            confidence_level(p),
            confidence_level(1.0 - p),
            "confidence differs for {p} and {}",
            1.0 - p
        );
    }
}

// ============================================================================
// INTERPRETATION
// ============================================================================

#[test]
fn test_interpret_preserves_label_order() {
    let interpreted = interpret(&[0.9, 0.45, 0.05], &OUTPUT_LABELS).unwrap();

    let labels: Vec<&str> = interpreted.iter().map(|a| a.label.as_str()).collect();
    assert_eq!(labels, vec!["iron_def", "vitc_def", "protein_def"]);

    let iron = interpreted.get("iron_def").unwrap();
    assert_eq!(iron.risk_level, RiskLevel::High);
    assert_eq!(iron.confidence_level, ConfidenceLevel::Medium);

    let vitc = interpreted.get("vitc_def").unwrap();
    assert_eq!(vitc.risk_level, RiskLevel::Moderate);
    assert_eq!(vitc.confidence_level, ConfidenceLevel::Low);

    let protein = interpreted.get("protein_def").unwrap();
    assert_eq!(protein.risk_level, RiskLevel::Low);
    assert_eq!(protein.confidence_level, ConfidenceLevel::High);
}

#[test]
fn test_interpret_rejects_length_mismatch() {
    let err = interpret(&[0.1, 0.2], &OUTPUT_LABELS).unwrap_err();
    assert_eq!(
        err,
        InferenceError::ShapeMismatch {
            context: "interpretation labels",
            expected: 3,
            actual: 2,
        }
    );
}

#[test]
fn test_interpret_empty_input_is_empty_result() {
    let labels: [&str; 0] = [];
    let interpreted = interpret(&[], &labels).unwrap();
    assert!(interpreted.is_empty());
}

#[test]
fn test_interpreted_result_serializes_as_ordered_list() {
    let interpreted = interpret(&[0.7, 0.1, 0.35], &OUTPUT_LABELS).unwrap();
    let json = serde_json::to_value(&interpreted).unwrap();

    assert_eq!(json[0]["label"], "iron_def");
    assert_eq!(json[0]["risk_level"], "high");
    assert_eq!(json[2]["confidence"], "low");
}
