// ABOUTME: Batch inference over many meals with per-item error isolation
// ABOUTME: Optional rayon evaluation, results always returned in input order
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Ahara Nutrition Intelligence

use super::{InferenceReport, NutrientRiskEngine};
use crate::logging::AppLogger;
use crate::model::DeficiencyPredictor;
use ahara_core::models::MealProfile;
use chrono::{DateTime, Utc};
use rayon::prelude::*;
use serde::Serialize;
use uuid::Uuid;

/// Outcome of one batch item
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "status", rename_all = "lowercase")]
pub enum BatchItemOutcome {
    /// Pipeline completed
    Success(InferenceReport),
    /// Pipeline failed for this item only
    Error {
        /// Failure description
        error: String,
    },
}

/// Result for the meal at `meal_index`
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BatchItemResult {
    /// Position in the submitted batch
    pub meal_index: usize,
    /// Report or error
    #[serde(flatten)]
    pub outcome: BatchItemOutcome,
}

impl BatchItemResult {
    /// Whether the item succeeded
    #[must_use]
    pub const fn is_success(&self) -> bool {
        matches!(self.outcome, BatchItemOutcome::Success(_))
    }

    /// Report of a successful item
    #[must_use]
    pub const fn report(&self) -> Option<&InferenceReport> {
        match &self.outcome {
            BatchItemOutcome::Success(report) => Some(report),
            BatchItemOutcome::Error { .. } => None,
        }
    }

    /// Error of a failed item
    #[must_use]
    pub fn error(&self) -> Option<&str> {
        match &self.outcome {
            BatchItemOutcome::Success(_) => None,
            BatchItemOutcome::Error { error } => Some(error),
        }
    }
}

/// Item counts for a batch
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct BatchSummary {
    /// Items submitted
    pub total: usize,
    /// Items that produced a report
    pub successful: usize,
    /// Items that failed
    pub failed: usize,
}

/// Results of a batch, in input order
#[derive(Debug, Clone, Serialize)]
pub struct BatchReport {
    /// Identifier correlating this batch in logs
    pub batch_id: Uuid,
    /// When the batch finished
    pub generated_at: DateTime<Utc>,
    /// One entry per submitted meal
    pub results: Vec<BatchItemResult>,
    /// Counts
    pub summary: BatchSummary,
}

impl<P: DeficiencyPredictor> NutrientRiskEngine<P> {
    /// Run inference on every meal, isolating failures per item
    ///
    /// A failing item never affects its siblings. An empty batch yields an
    /// empty report.
    #[must_use]
    pub fn run_batch(&self, profiles: &[MealProfile]) -> BatchReport {
        let batch_id = Uuid::new_v4();
        let id = batch_id.to_string();

        let evaluate = |(meal_index, profile): (usize, &MealProfile)| {
            let outcome = match self.run_inference(profile) {
                Ok(report) => BatchItemOutcome::Success(report),
                Err(e) => {
                    AppLogger::log_batch_item_failure(&id, meal_index, &e.to_string());
                    BatchItemOutcome::Error {
                        error: e.to_string(),
                    }
                }
            };
            BatchItemResult {
                meal_index,
                outcome,
            }
        };

        // indexed par_iter collects in input order
        let results: Vec<BatchItemResult> = if self.batch_parallel {
            profiles.par_iter().enumerate().map(evaluate).collect()
        } else {
            profiles.iter().enumerate().map(evaluate).collect()
        };

        let successful = results.iter().filter(|r| r.is_success()).count();
        let summary = BatchSummary {
            total: results.len(),
            successful,
            failed: results.len() - successful,
        };
        AppLogger::log_batch_summary(&id, summary.total, summary.successful, summary.failed);

        BatchReport {
            batch_id,
            generated_at: Utc::now(),
            results,
            summary,
        }
    }
}
