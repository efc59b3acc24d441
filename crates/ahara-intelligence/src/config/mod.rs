// ABOUTME: Configuration module for ahara-intelligence crate
// ABOUTME: Re-exports intelligence configuration types
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Ahara Nutrition Intelligence

/// Intelligence module configuration (interpretation, recommendations, weekly analysis)
pub mod intelligence;

pub use intelligence::IntelligenceConfig;
