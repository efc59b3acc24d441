// ABOUTME: Nutrient risk engine sequencing encode, predict, interpret, and recommend
// ABOUTME: Immutable, explicitly initialized engine shared across threads via Arc
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Ahara Nutrition Intelligence

//! # Inference Engine
//!
//! [`NutrientRiskEngine`] owns everything a request needs: the loaded artifact,
//! the predictive function, and the interpretation and advice rules. It is built
//! once at startup and never mutated, so clones can be handed to any thread.

/// Multi-meal evaluation with per-item error isolation
pub mod batch;

/// Weekly intake analysis on top of single-meal inference
pub mod weekly;

/// Food-list meal analysis
pub mod meal_analysis;

/// Goal-driven recommendations and supplement suggestions
pub mod personalized;

pub use batch::{BatchItemOutcome, BatchItemResult, BatchReport, BatchSummary};
pub use meal_analysis::MealAnalysisReport;
pub use personalized::PersonalizedReport;
pub use weekly::WeeklyReport;

use crate::config::AharaConfig;
use crate::errors::{AppError, AppResult, InferenceError};
use crate::logging::AppLogger;
use crate::model::{DeficiencyPredictor, LinearDeficiencyModel, ModelArtifact};
use ahara_core::models::{ConfidenceLevel, InterpretedResult, MealProfile, RiskLevel};
use ahara_intelligence::personalized::PersonalizedAdvisor;
use ahara_intelligence::weekly_analysis::WeeklyAnalyzer;
use ahara_intelligence::{encode, PredictionInterpreter, RecommendationEngine};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::sync::Arc;
use tracing::{debug, instrument};

/// Result of one meal's inference
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InferenceReport {
    /// Raw probability per label
    pub probabilities: BTreeMap<String, f64>,
    /// Risk tier per label
    pub risk_assessment: BTreeMap<String, RiskLevel>,
    /// Ordered advice
    pub suggestions: Vec<String>,
    /// Confidence tier per label
    pub confidence_scores: BTreeMap<String, ConfidenceLevel>,
}

impl InferenceReport {
    fn from_interpreted(interpreted: &InterpretedResult, suggestions: Vec<String>) -> Self {
        let mut probabilities = BTreeMap::new();
        let mut risk_assessment = BTreeMap::new();
        let mut confidence_scores = BTreeMap::new();
        for assessment in interpreted {
            probabilities.insert(assessment.label.clone(), assessment.probability);
            risk_assessment.insert(assessment.label.clone(), assessment.risk_level);
            confidence_scores.insert(assessment.label.clone(), assessment.confidence_level);
        }
        Self {
            probabilities,
            risk_assessment,
            suggestions,
            confidence_scores,
        }
    }
}

/// Readiness snapshot of a constructed engine
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HealthStatus {
    /// Always "healthy" for a constructed engine
    pub status: String,
    /// Artifact training run identifier
    pub model_version: String,
    /// Scaling parameters are present
    pub scaler_loaded: bool,
    /// The artifact carries its own output head
    pub output_layer_loaded: bool,
    /// Labels in model output order
    pub output_labels: Vec<String>,
}

/// Immutable nutrient deficiency risk engine
pub struct NutrientRiskEngine<P = LinearDeficiencyModel> {
    artifact: Arc<ModelArtifact>,
    predictor: Arc<P>,
    interpreter: PredictionInterpreter,
    recommender: Arc<RecommendationEngine>,
    weekly: Arc<WeeklyAnalyzer>,
    advisor: PersonalizedAdvisor,
    batch_parallel: bool,
}

impl<P> Clone for NutrientRiskEngine<P> {
    fn clone(&self) -> Self {
        Self {
            artifact: Arc::clone(&self.artifact),
            predictor: Arc::clone(&self.predictor),
            interpreter: self.interpreter,
            recommender: Arc::clone(&self.recommender),
            weekly: Arc::clone(&self.weekly),
            advisor: self.advisor,
            batch_parallel: self.batch_parallel,
        }
    }
}

impl NutrientRiskEngine<LinearDeficiencyModel> {
    /// Load the artifact named by the configuration and use its output head
    ///
    /// # Errors
    ///
    /// Returns an error if the artifact cannot be loaded or has no output layer
    pub fn initialize(config: &AharaConfig) -> AppResult<Self> {
        let artifact = ModelArtifact::load(&config.model_artifact_path)?;
        let predictor = LinearDeficiencyModel::from_artifact(&artifact)?;
        Self::with_predictor(artifact, predictor, config)
    }
}

impl<P: DeficiencyPredictor> NutrientRiskEngine<P> {
    /// Build an engine around an external predictive function
    ///
    /// # Errors
    ///
    /// Returns `ConfigInvalid` if the intelligence configuration fails validation
    pub fn with_predictor(
        artifact: ModelArtifact,
        predictor: P,
        config: &AharaConfig,
    ) -> AppResult<Self> {
        let intelligence = &config.intelligence;
        intelligence
            .validate()
            .map_err(|e| AppError::config_invalid(e.to_string()).with_source(e))?;
        Ok(Self {
            artifact: Arc::new(artifact),
            predictor: Arc::new(predictor),
            interpreter: PredictionInterpreter::new(intelligence.interpretation),
            recommender: Arc::new(RecommendationEngine::new(
                intelligence.recommendation_engine.messages.clone(),
            )),
            weekly: Arc::new(WeeklyAnalyzer::new(intelligence.weekly_analysis.clone())),
            advisor: PersonalizedAdvisor::new(intelligence.personalized),
            batch_parallel: config.batch_parallel,
        })
    }

    /// Loaded artifact
    #[must_use]
    pub fn artifact(&self) -> &ModelArtifact {
        &self.artifact
    }

    /// Readiness snapshot
    #[must_use]
    pub fn health(&self) -> HealthStatus {
        HealthStatus {
            status: "healthy".to_owned(),
            model_version: self.artifact.version().to_owned(),
            scaler_loaded: true,
            output_layer_loaded: self.artifact.output_layer().is_some(),
            output_labels: self.artifact.output_labels().to_vec(),
        }
    }

    /// Run the full pipeline for one meal
    ///
    /// # Errors
    ///
    /// - `ConstitutionIndex` for an integer constitution outside 0..=2
    /// - `Prediction` if the predictive function fails
    /// - `ShapeMismatch` if it returns the wrong number of probabilities
    #[instrument(skip_all)]
    pub fn run_inference(&self, profile: &MealProfile) -> Result<InferenceReport, InferenceError> {
        let interpreted = self.predict_interpreted(profile)?;
        let suggestions = self
            .recommender
            .recommend(&interpreted, profile.constitution.resolve_strict());

        let tiers: Vec<(&str, &str)> = interpreted
            .iter()
            .map(|a| (a.label.as_str(), a.risk_level.as_str()))
            .collect();
        AppLogger::log_inference(&tiers, suggestions.len());

        Ok(InferenceReport::from_interpreted(&interpreted, suggestions))
    }

    /// Encode, predict, and interpret without producing advice
    ///
    /// # Errors
    ///
    /// Same as [`NutrientRiskEngine::run_inference`]
    pub fn predict_interpreted(
        &self,
        profile: &MealProfile,
    ) -> Result<InterpretedResult, InferenceError> {
        let features = encode(profile, Some(self.artifact.scaling()))?;
        debug!(features = ?features.as_slice(), "Encoded meal profile");

        let probabilities = self.predictor.predict(&features)?;
        let labels = self.artifact.output_labels();
        if probabilities.len() != labels.len() {
            return Err(InferenceError::shape_mismatch(
                "prediction output",
                labels.len(),
                probabilities.len(),
            ));
        }

        self.interpreter.interpret(&probabilities, labels)
    }
}
