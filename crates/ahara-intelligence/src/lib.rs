// ABOUTME: Nutrient deficiency intelligence: feature encoding, interpretation, and advice
// ABOUTME: Pure functions over immutable inputs, safe to call from any number of threads
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Ahara Nutrition Intelligence

#![deny(unsafe_code)]

//! # Ahara Intelligence
//!
//! The inference core. Data flows through three stages:
//!
//! 1. [`feature_encoder`] turns a [`MealProfile`](ahara_core::models::MealProfile)
//!    into the 11-wide model input using pre-fitted scaling parameters.
//! 2. [`interpreter`] maps the model's three probabilities to risk and
//!    confidence tiers.
//! 3. [`recommendation_engine`] combines the tiers with the eater's constitution
//!    into an ordered list of advisory strings.
//!
//! The predictive function itself sits between stages 1 and 2 and lives outside
//! this crate. [`weekly_analysis`], [`ayurveda`], [`nutrient_db`], and
//! [`personalized`] build on the same types for multi-day trends, constitution
//! food guides, food-list nutrient totals, and goal-driven advice.

/// Intelligence configuration (thresholds, advisory text, weekly rules)
pub mod config;

/// Constitution food guides and seasonal advice
pub mod ayurveda;

/// Meal profile to model input encoding
pub mod feature_encoder;

/// Probability to risk/confidence tier interpretation
pub mod interpreter;

/// Food nutrient table and food-list totals
pub mod nutrient_db;

/// Goal, deficiency, and supplement advice
pub mod personalized;

/// Rule-based advisory synthesis
pub mod recommendation_engine;

/// Weekly intake aggregation and insights
pub mod weekly_analysis;

pub use config::IntelligenceConfig;
pub use feature_encoder::{encode, FeatureVector, ScalingParameters};
pub use interpreter::{confidence_level, interpret, risk_level, PredictionInterpreter};
pub use recommendation_engine::{recommend, RecommendationEngine};
