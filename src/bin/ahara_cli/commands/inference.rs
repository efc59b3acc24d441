// ABOUTME: Predict, batch, weekly, analyze, and personalize commands backed by the engine
// ABOUTME: Reads JSON input, runs the pipeline, and prints pretty JSON results
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Ahara Nutrition Intelligence

use crate::helpers::io::{print_json, read_json};
use ahara::config::AharaConfig;
use ahara::errors::AppError;
use ahara::inference::NutrientRiskEngine;
use ahara::models::{HealthProfile, MealProfile, UserProfile, WeeklyMealLog};
use ahara::nutrient_db::NutrientTotals;
use serde::Deserialize;
use std::path::Path;
use tracing::info;

/// Weekly command input
#[derive(Deserialize)]
struct WeeklyRequest {
    #[serde(alias = "weekly_log")]
    log: WeeklyMealLog,
    #[serde(default, alias = "userProfile")]
    profile: UserProfile,
}

/// Analyze command input
#[derive(Deserialize)]
struct AnalyzeRequest {
    foods: Vec<String>,
    #[serde(default)]
    portions: Vec<f64>,
    #[serde(default, alias = "userProfile")]
    profile: UserProfile,
}

/// Personalize command input
#[derive(Deserialize)]
struct PersonalizeRequest {
    #[serde(default, alias = "userProfile")]
    profile: HealthProfile,
    #[serde(default, alias = "currentNutrition")]
    nutrition: NutrientTotals,
}

fn engine(config: &AharaConfig) -> anyhow::Result<NutrientRiskEngine> {
    let engine = NutrientRiskEngine::initialize(config)?;
    info!(model.version = %engine.artifact().version(), "Engine ready");
    Ok(engine)
}

/// Run inference on one meal profile
pub fn predict(config: &AharaConfig, input: Option<&Path>) -> anyhow::Result<()> {
    let profile: MealProfile = read_json(input)?;
    let report = engine(config)?
        .run_inference(&profile)
        .map_err(AppError::from)?;
    print_json(&report)
}

/// Run inference on an array of meal profiles
pub fn batch(config: &AharaConfig, input: Option<&Path>) -> anyhow::Result<()> {
    let profiles: Vec<MealProfile> = read_json(input)?;
    let report = engine(config)?.run_batch(&profiles);
    print_json(&report)
}

/// Analyze a week of meals
pub fn weekly(config: &AharaConfig, input: Option<&Path>) -> anyhow::Result<()> {
    let request: WeeklyRequest = read_json(input)?;
    let report = engine(config)?.analyze_week(&request.log, &request.profile)?;
    print_json(&report)
}

/// Analyze a meal given as a list of foods
pub fn analyze(config: &AharaConfig, input: Option<&Path>) -> anyhow::Result<()> {
    let request: AnalyzeRequest = read_json(input)?;
    let report =
        engine(config)?.analyze_meal(&request.foods, &request.portions, &request.profile)?;
    print_json(&report)
}

/// Personalized recommendations for a health profile and current intake
pub fn personalize(config: &AharaConfig, input: Option<&Path>) -> anyhow::Result<()> {
    let request: PersonalizeRequest = read_json(input)?;
    let report = engine(config)?.personalize(&request.profile, &request.nutrition);
    print_json(&report)
}
