// ABOUTME: Model artifact loading and validation for the nutrient risk model
// ABOUTME: Load-once JSON artifact with feature layout, scaler, labels, and output head
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Ahara Nutrition Intelligence

//! # Model Artifact
//!
//! The artifact is produced by the offline training job. It pins the feature
//! layout the model was fitted on, so a mismatch is rejected at load time rather
//! than silently producing garbage predictions.
//!
//! ```json
//! {
//!   "version": "2025.03",
//!   "numeric_features": ["calories", "protein", "carbs", "fat", "iron", "vitaminC", "age", "gender"],
//!   "constitution_encoding": ["VATA", "PITTA", "KAPHA"],
//!   "output_labels": ["iron_def", "vitc_def", "protein_def"],
//!   "scaler": { "mean": [...8], "scale": [...8] },
//!   "output_layer": { "weights": [[...11], [...11], [...11]], "bias": [...3] }
//! }
//! ```

/// Predictive function seam and the built-in linear head
pub mod predictor;

pub use predictor::{DeficiencyPredictor, LinearDeficiencyModel};

use crate::constants::features::{CONSTITUTION_ENCODING, FEATURE_VECTOR_LEN, NUMERIC_FEATURES};
use crate::constants::labels::OUTPUT_LABELS;
use crate::errors::{AppError, AppResult};
use crate::logging::AppLogger;
use ahara_core::models::DeficiencyLabel;
use ahara_intelligence::ScalingParameters;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Fitted standard scaler, as serialized by training
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScalerRecord {
    /// Per-feature means
    pub mean: Vec<f64>,
    /// Per-feature standard deviations
    pub scale: Vec<f64>,
}

/// Frozen sigmoid output head: one weight row and bias per label
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OutputLayer {
    /// Weight rows, one per output label, 11 values each
    pub weights: Vec<Vec<f64>>,
    /// Bias per output label
    pub bias: Vec<f64>,
}

/// On-disk artifact layout
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ArtifactFile {
    /// Training run identifier
    pub version: String,
    /// Continuous feature order
    pub numeric_features: Vec<String>,
    /// Constitution one-hot order
    pub constitution_encoding: Vec<String>,
    /// Model output order
    pub output_labels: Vec<String>,
    /// Fitted scaler
    pub scaler: ScalerRecord,
    /// Optional frozen output head
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub output_layer: Option<OutputLayer>,
}

/// Validated, immutable model artifact
#[derive(Debug, Clone)]
pub struct ModelArtifact {
    version: String,
    output_labels: Vec<String>,
    scaling: ScalingParameters,
    output_layer: Option<OutputLayer>,
}

impl ModelArtifact {
    /// Read and validate an artifact file
    ///
    /// # Errors
    ///
    /// - `StorageError` if the file cannot be read
    /// - `SerializationError` if it is not valid artifact JSON
    /// - `ConfigInvalid` if the layout, labels, scaler, or output head are wrong
    pub fn load(path: &Path) -> AppResult<Self> {
        let contents = fs::read_to_string(path).map_err(|e| {
            AppError::storage(format!("Failed to read model artifact: {e}"))
                .with_resource_id(path.display().to_string())
                .with_source(e)
        })?;
        let artifact = Self::from_json(&contents)
            .map_err(|e| e.with_resource_id(path.display().to_string()))?;

        AppLogger::log_artifact_loaded(path, &artifact.version, artifact.output_layer.is_some());
        Ok(artifact)
    }

    /// Parse and validate artifact JSON
    ///
    /// # Errors
    ///
    /// Same as [`ModelArtifact::load`], minus file access
    pub fn from_json(contents: &str) -> AppResult<Self> {
        let file: ArtifactFile = serde_json::from_str(contents)?;
        Self::try_from(file)
    }

    /// Training run identifier
    #[must_use]
    pub fn version(&self) -> &str {
        &self.version
    }

    /// Label names in model output order
    #[must_use]
    pub fn output_labels(&self) -> &[String] {
        &self.output_labels
    }

    /// Scaling parameters for the feature encoder
    #[must_use]
    pub const fn scaling(&self) -> &ScalingParameters {
        &self.scaling
    }

    /// Frozen output head, when the artifact carries one
    #[must_use]
    pub const fn output_layer(&self) -> Option<&OutputLayer> {
        self.output_layer.as_ref()
    }
}

impl TryFrom<ArtifactFile> for ModelArtifact {
    type Error = AppError;

    fn try_from(file: ArtifactFile) -> AppResult<Self> {
        if !file.numeric_features.iter().map(String::as_str).eq(NUMERIC_FEATURES) {
            return Err(AppError::config_invalid(format!(
                "numeric_features must be {NUMERIC_FEATURES:?}, got {:?}",
                file.numeric_features
            )));
        }
        if !file
            .constitution_encoding
            .iter()
            .map(String::as_str)
            .eq(CONSTITUTION_ENCODING)
        {
            return Err(AppError::config_invalid(format!(
                "constitution_encoding must be {CONSTITUTION_ENCODING:?}, got {:?}",
                file.constitution_encoding
            )));
        }
        validate_labels(&file.output_labels)?;

        let scaling = ScalingParameters::new(&file.scaler.mean, &file.scaler.scale)
            .map_err(|e| AppError::config_invalid(format!("Invalid scaler: {e}")).with_source(e))?;

        if let Some(layer) = &file.output_layer {
            validate_output_layer(layer, file.output_labels.len())?;
        }

        Ok(Self {
            version: file.version,
            output_labels: file.output_labels,
            scaling,
            output_layer: file.output_layer,
        })
    }
}

/// Labels must be the three known deficiencies, each exactly once
fn validate_labels(labels: &[String]) -> AppResult<()> {
    if labels.len() != OUTPUT_LABELS.len() {
        return Err(AppError::config_invalid(format!(
            "output_labels must have {} entries, got {}",
            OUTPUT_LABELS.len(),
            labels.len()
        )));
    }
    let mut seen = Vec::with_capacity(labels.len());
    for name in labels {
        let label = DeficiencyLabel::parse(name)
            .ok_or_else(|| AppError::config_invalid(format!("Unknown output label: {name}")))?;
        if seen.contains(&label) {
            return Err(AppError::config_invalid(format!(
                "Duplicate output label: {name}"
            )));
        }
        seen.push(label);
    }
    Ok(())
}

fn validate_output_layer(layer: &OutputLayer, label_count: usize) -> AppResult<()> {
    if layer.weights.len() != label_count || layer.bias.len() != label_count {
        return Err(AppError::config_invalid(format!(
            "output_layer must have {label_count} weight rows and biases, got {} and {}",
            layer.weights.len(),
            layer.bias.len()
        )));
    }
    if let Some(row) = layer.weights.iter().find(|row| row.len() != FEATURE_VECTOR_LEN) {
        return Err(AppError::config_invalid(format!(
            "output_layer weight rows must have {FEATURE_VECTOR_LEN} values, got {}",
            row.len()
        )));
    }
    let all_finite = layer
        .weights
        .iter()
        .flatten()
        .chain(&layer.bias)
        .all(|v| v.is_finite());
    if !all_finite {
        return Err(AppError::config_invalid(
            "output_layer values must be finite numbers",
        ));
    }
    Ok(())
}
