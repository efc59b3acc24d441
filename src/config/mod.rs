// ABOUTME: Configuration module for process settings and intelligence tuning
// ABOUTME: Environment-driven process config plus re-exported intelligence config
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Ahara Nutrition Intelligence

/// Environment variable driven process configuration
pub mod environment;

pub use ahara_intelligence::config::intelligence;
pub use environment::AharaConfig;
pub use intelligence::IntelligenceConfig;
