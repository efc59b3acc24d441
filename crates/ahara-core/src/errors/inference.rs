// ABOUTME: Inference pipeline error types for encoding, interpretation, and prediction
// ABOUTME: Structured variants that convert into AppError at the process boundary
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Ahara Nutrition Intelligence

//! # Inference Error Types
//!
//! Malformed or out-of-range nutrient values are deliberately *not* errors:
//! the encoder passes them through unchanged. Only structural problems are
//! reported here.

use thiserror::Error;

/// Errors raised by the inference pipeline stages
#[derive(Debug, Clone, PartialEq, Error)]
pub enum InferenceError {
    /// A required artifact (scaling parameters, output layer) is not available
    #[error("configuration error: {0}")]
    Configuration(String),

    /// A vector did not have the length a stage requires
    #[error("shape mismatch in {context}: expected {expected} values, got {actual}")]
    ShapeMismatch {
        /// Stage or value that failed the check
        context: &'static str,
        /// Required length
        expected: usize,
        /// Observed length
        actual: usize,
    },

    /// Integer constitution index outside the three known slots
    #[error("constitution index {0} is out of range (expected 0, 1, or 2)")]
    ConstitutionIndex(i64),

    /// The predictive function failed to produce probabilities
    #[error("prediction failed: {0}")]
    Prediction(String),
}

impl InferenceError {
    /// Create a configuration error
    #[must_use]
    pub fn configuration(message: impl Into<String>) -> Self {
        Self::Configuration(message.into())
    }

    /// Create a shape mismatch error
    #[must_use]
    pub const fn shape_mismatch(context: &'static str, expected: usize, actual: usize) -> Self {
        Self::ShapeMismatch {
            context,
            expected,
            actual,
        }
    }

    /// Create a prediction error
    #[must_use]
    pub fn prediction(message: impl Into<String>) -> Self {
        Self::Prediction(message.into())
    }
}
