// ABOUTME: Core types and constants for Ahara nutrient deficiency risk inference
// ABOUTME: Foundation crate with error handling, domain constants, and data models
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Ahara Nutrition Intelligence

#![deny(unsafe_code)]

//! # Ahara Core
//!
//! Foundation crate providing shared types and constants for the Ahara
//! nutrient risk platform. This crate is designed to change infrequently,
//! enabling incremental compilation benefits in the workspace.
//!
//! ## Modules
//!
//! - **errors**: Unified error handling with `AppError`, `ErrorCode`, and `InferenceError`
//! - **constants**: Feature layout, label names, and tiering thresholds
//! - **models**: Meal profiles, constitutions, and interpreted risk assessments

/// Unified error handling system with standard error codes
pub mod errors;

/// Domain constants organized by concern
pub mod constants;

/// Core data models (`MealProfile`, `Constitution`, `InterpretedResult`, ...)
pub mod models;
