// ABOUTME: Environment-based process configuration for artifact location and batch execution
// ABOUTME: Reads AHARA_* variables with documented defaults and validates them once at startup
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Ahara Nutrition Intelligence

//! Process configuration
//!
//! | variable               | default                      |
//! |------------------------|------------------------------|
//! | `AHARA_MODEL_ARTIFACT` | `models/model_artifact.json` |
//! | `AHARA_BATCH_PARALLEL` | `true`                       |
//! | `ENVIRONMENT`          | `development`                |

use crate::config::intelligence::IntelligenceConfig;
use crate::constants::{defaults, env_config};
use crate::errors::{AppError, AppResult};
use std::env;
use std::path::PathBuf;
use tracing::info;

/// Deployment environment
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Environment {
    /// Local development
    #[default]
    Development,
    /// Pre-production
    Staging,
    /// Production
    Production,
    /// Automated tests
    Testing,
}

impl Environment {
    /// Parse environment name, falling back to `Development`
    #[must_use]
    pub fn from_str_or_default(value: &str) -> Self {
        match value.to_lowercase().as_str() {
            "production" | "prod" => Self::Production,
            "staging" | "stage" => Self::Staging,
            "testing" | "test" => Self::Testing,
            _ => Self::Development,
        }
    }

    /// Whether this is a production deployment
    #[must_use]
    pub const fn is_production(self) -> bool {
        matches!(self, Self::Production)
    }
}

/// Process configuration
#[derive(Debug, Clone)]
pub struct AharaConfig {
    /// Path of the JSON model artifact
    pub model_artifact_path: PathBuf,
    /// Evaluate batch items on the rayon thread pool
    pub batch_parallel: bool,
    /// Deployment environment
    pub environment: Environment,
    /// Interpretation, recommendation, and weekly analysis tuning
    pub intelligence: IntelligenceConfig,
}

impl Default for AharaConfig {
    fn default() -> Self {
        Self {
            model_artifact_path: PathBuf::from(defaults::MODEL_ARTIFACT_PATH),
            batch_parallel: true,
            environment: Environment::default(),
            intelligence: IntelligenceConfig::default(),
        }
    }
}

impl AharaConfig {
    /// Load configuration from environment variables
    ///
    /// # Errors
    ///
    /// Returns `ConfigInvalid` if a variable has an unparseable value or the
    /// intelligence configuration fails validation
    pub fn from_env() -> AppResult<Self> {
        let batch_parallel = parse_bool(
            env_config::BATCH_PARALLEL,
            &env_var_or(env_config::BATCH_PARALLEL, "true"),
        )?;

        let config = Self {
            model_artifact_path: PathBuf::from(env_var_or(
                env_config::MODEL_ARTIFACT,
                defaults::MODEL_ARTIFACT_PATH,
            )),
            batch_parallel,
            environment: Environment::from_str_or_default(&env_var_or(
                env_config::ENVIRONMENT,
                defaults::ENVIRONMENT,
            )),
            intelligence: IntelligenceConfig::default(),
        };
        config.validate()?;

        info!(
            artifact = %config.model_artifact_path.display(),
            batch_parallel = config.batch_parallel,
            environment = ?config.environment,
            "Configuration loaded from environment"
        );
        Ok(config)
    }

    /// Override the artifact path, e.g. from a command-line flag
    #[must_use]
    pub fn with_model_artifact_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.model_artifact_path = path.into();
        self
    }

    /// Validate the configuration
    ///
    /// # Errors
    ///
    /// Returns `ConfigInvalid` describing the first invalid setting
    pub fn validate(&self) -> AppResult<()> {
        if self.model_artifact_path.as_os_str().is_empty() {
            return Err(AppError::config_invalid(format!(
                "{} must not be empty",
                env_config::MODEL_ARTIFACT
            )));
        }
        self.intelligence
            .validate()
            .map_err(|e| AppError::config_invalid(e.to_string()).with_source(e))
    }
}

fn env_var_or(key: &str, default: &str) -> String {
    env::var(key).unwrap_or_else(|_| default.to_owned())
}

fn parse_bool(key: &str, value: &str) -> AppResult<bool> {
    match value.trim().to_lowercase().as_str() {
        "true" | "1" | "yes" | "on" => Ok(true),
        "false" | "0" | "no" | "off" => Ok(false),
        other => Err(AppError::config_invalid(format!(
            "Invalid {key} value: {other}"
        ))),
    }
}
