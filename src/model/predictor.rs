// ABOUTME: Predictive function seam mapping a feature vector to deficiency probabilities
// ABOUTME: Trait, closure adapter, and a linear sigmoid head loaded from the artifact
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Ahara Nutrition Intelligence

use super::{ModelArtifact, OutputLayer};
use crate::constants::features::FEATURE_VECTOR_LEN;
use crate::errors::InferenceError;
use ahara_intelligence::FeatureVector;

/// Anything that can turn an encoded meal into per-label probabilities
///
/// Implementations must be safe to call concurrently; the batch runner shares
/// one predictor across the rayon pool.
pub trait DeficiencyPredictor: Send + Sync {
    /// Predict one probability per output label, in model output order
    ///
    /// # Errors
    ///
    /// Returns `InferenceError::Prediction` if the model cannot produce output
    fn predict(&self, features: &FeatureVector) -> Result<Vec<f64>, InferenceError>;
}

impl<F> DeficiencyPredictor for F
where
    F: Fn(&FeatureVector) -> Result<Vec<f64>, InferenceError> + Send + Sync,
{
    fn predict(&self, features: &FeatureVector) -> Result<Vec<f64>, InferenceError> {
        self(features)
    }
}

/// Logistic output head: `p_k = sigmoid(b_k + w_k . x)`
#[derive(Debug, Clone, PartialEq)]
pub struct LinearDeficiencyModel {
    weights: Vec<[f64; FEATURE_VECTOR_LEN]>,
    bias: Vec<f64>,
}

impl LinearDeficiencyModel {
    /// Build from weight rows and biases
    ///
    /// # Errors
    ///
    /// Returns `InferenceError::ShapeMismatch` if a row is not 11 wide or the
    /// bias count differs from the row count
    pub fn new(weights: &[Vec<f64>], bias: Vec<f64>) -> Result<Self, InferenceError> {
        if weights.len() != bias.len() {
            return Err(InferenceError::shape_mismatch(
                "output layer bias",
                weights.len(),
                bias.len(),
            ));
        }
        let weights = weights
            .iter()
            .map(|row| {
                <[f64; FEATURE_VECTOR_LEN]>::try_from(row.as_slice()).map_err(|_| {
                    InferenceError::shape_mismatch(
                        "output layer weights",
                        FEATURE_VECTOR_LEN,
                        row.len(),
                    )
                })
            })
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Self { weights, bias })
    }

    /// Build from the artifact's frozen output head
    ///
    /// # Errors
    ///
    /// Returns `InferenceError::Configuration` if the artifact has no output layer
    pub fn from_artifact(artifact: &ModelArtifact) -> Result<Self, InferenceError> {
        let OutputLayer { weights, bias } = artifact.output_layer().ok_or_else(|| {
            InferenceError::configuration(format!(
                "model artifact {} has no output layer",
                artifact.version()
            ))
        })?;
        Self::new(weights, bias.clone())
    }
}

impl DeficiencyPredictor for LinearDeficiencyModel {
    fn predict(&self, features: &FeatureVector) -> Result<Vec<f64>, InferenceError> {
        Ok(self
            .weights
            .iter()
            .zip(&self.bias)
            .map(|(row, bias)| {
                let logit = row
                    .iter()
                    .zip(features.as_slice())
                    .fold(*bias, |acc, (w, x)| w.mul_add(*x, acc));
                sigmoid(logit)
            })
            .collect())
    }
}

fn sigmoid(z: f64) -> f64 {
    1.0 / (1.0 + (-z).exp())
}
