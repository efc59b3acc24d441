// ABOUTME: Shared test utilities and setup functions for integration tests
// ABOUTME: Provides quiet logging, the sample artifact, and fixed-output predictors
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Ahara Nutrition Intelligence
#![allow(
    dead_code,
    clippy::missing_errors_doc,
    clippy::missing_panics_doc,
    clippy::must_use_candidate
)]
//! Shared test utilities for `ahara`

use ahara::config::AharaConfig;
use ahara::errors::InferenceError;
use ahara::inference::NutrientRiskEngine;
use ahara::model::{DeficiencyPredictor, ModelArtifact};
use ahara::models::{ConstitutionInput, MealProfile};
use ahara_intelligence::FeatureVector;
use std::path::PathBuf;
use std::sync::Once;

static INIT_LOGGER: Once = Once::new();

/// Initialize quiet logging for tests (call once per test process)
pub fn init_test_logging() {
    INIT_LOGGER.call_once(|| {
        let log_level = match std::env::var("TEST_LOG").as_deref() {
            Ok("TRACE") => tracing::Level::TRACE,
            Ok("DEBUG") => tracing::Level::DEBUG,
            Ok("INFO") => tracing::Level::INFO,
            _ => tracing::Level::WARN,
        };

        tracing_subscriber::fmt()
            .with_max_level(log_level)
            .with_test_writer()
            .init();
    });
}

/// Path of the artifact shipped in `models/`
pub fn sample_artifact_path() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("models/model_artifact.json")
}

/// The shipped artifact, loaded and validated
pub fn sample_artifact() -> ModelArtifact {
    ModelArtifact::load(&sample_artifact_path()).unwrap()
}

/// Configuration pointing at the shipped artifact
pub fn test_config() -> AharaConfig {
    AharaConfig::default().with_model_artifact_path(sample_artifact_path())
}

/// Predictor that ignores its input and returns `probabilities`
pub fn fixed_predictor(
    probabilities: Vec<f64>,
) -> impl Fn(&FeatureVector) -> Result<Vec<f64>, InferenceError> + Send + Sync {
    move |_: &FeatureVector| Ok(probabilities.clone())
}

/// Predictor that always fails
pub fn failing_predictor(
) -> impl Fn(&FeatureVector) -> Result<Vec<f64>, InferenceError> + Send + Sync {
    |_: &FeatureVector| Err(InferenceError::prediction("model backend unavailable"))
}

/// Engine over the shipped artifact with a custom predictor
pub fn engine_with<P: DeficiencyPredictor>(predictor: P) -> NutrientRiskEngine<P> {
    init_test_logging();
    NutrientRiskEngine::with_predictor(sample_artifact(), predictor, &test_config()).unwrap()
}

/// Meal profile with the given nutrients and constitution
pub fn meal(iron: f64, vitamin_c: f64, protein: f64, constitution: ConstitutionInput) -> MealProfile {
    MealProfile {
        calories: 550.0,
        protein,
        carbs: 70.0,
        fat: 20.0,
        iron,
        vitamin_c,
        age: 34,
        gender: 0,
        constitution,
    }
}

/// Constitution given by name
pub fn named(name: &str) -> ConstitutionInput {
    ConstitutionInput::Name(name.to_owned())
}
