// ABOUTME: Application error surface re-exporting the core taxonomy
// ABOUTME: Adds the serializable error response used by callers at the process boundary
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Ahara Nutrition Intelligence

//! # Error Handling
//!
//! [`AppError`] and [`InferenceError`] live in `ahara-core` so every crate in
//! the workspace shares one taxonomy. This module adds [`ErrorResponse`], the
//! JSON shape a caller sees when a request fails.

pub use ahara_core::errors::{AppError, AppResult, ErrorCode, ErrorContext, InferenceError};

use serde::{Deserialize, Serialize};

/// Top-level error body
#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorResponse {
    /// Error details
    pub error: ErrorResponseDetails,
}

/// Error body details
#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorResponseDetails {
    /// Stable error code
    pub code: ErrorCode,
    /// HTTP status the code maps to
    pub status: u16,
    /// Human-readable message
    pub message: String,
    /// Resource the error refers to
    #[serde(skip_serializing_if = "Option::is_none")]
    pub resource_id: Option<String>,
    /// Structured context
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<serde_json::Value>,
}

impl From<AppError> for ErrorResponse {
    fn from(error: AppError) -> Self {
        Self {
            error: ErrorResponseDetails {
                code: error.code,
                status: error.http_status(),
                message: error.message,
                resource_id: error.context.resource_id,
                details: error.context.details,
            },
        }
    }
}
