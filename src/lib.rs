// ABOUTME: Main library entry point for the Ahara nutrient deficiency risk engine
// ABOUTME: Wires artifact loading, configuration, logging, and the inference pipeline
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Ahara Nutrition Intelligence

#![deny(unsafe_code)]

//! # Ahara
//!
//! Predicts iron, vitamin C, and protein deficiency risk for a single meal
//! and turns the prediction into constitution-aware dietary advice.
//!
//! ## Architecture
//!
//! - **ahara-core**: errors, constants, and data models
//! - **ahara-intelligence**: feature encoding, interpretation, and advice rules
//! - **this crate**: artifact loading, the predictor seam, and the
//!   [`NutrientRiskEngine`](inference::NutrientRiskEngine) that sequences a
//!   request through the pipeline
//!
//! ## Example Usage
//!
//! ```rust,no_run
//! use ahara::config::AharaConfig;
//! use ahara::errors::AppResult;
//! use ahara::inference::NutrientRiskEngine;
//! use ahara::models::MealProfile;
//!
//! fn main() -> AppResult<()> {
//!     let config = AharaConfig::from_env()?;
//!     let engine = NutrientRiskEngine::initialize(&config)?;
//!
//!     let report = engine.run_inference(&MealProfile::default())?;
//!     println!("{:?}", report.risk_assessment);
//!     Ok(())
//! }
//! ```

/// Process configuration and intelligence tuning
pub mod config;

/// Error types and the serializable error response
pub mod errors;

/// Inference engine: single, batch, weekly, meal analysis, and personalized advice
pub mod inference;

/// Structured logging setup and pipeline log events
pub mod logging;

/// Model artifact and predictive function seam
pub mod model;

/// Domain constants shared with the workspace crates
pub use ahara_core::constants;

/// Data models shared with the workspace crates
pub use ahara_core::models;

/// Constitution food guides and seasonal advice
pub use ahara_intelligence::ayurveda;

/// Food nutrient table and food-list totals
pub use ahara_intelligence::nutrient_db;
