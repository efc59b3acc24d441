// ABOUTME: Constants module with domain-separated organization
// ABOUTME: Feature layout, label names, tiering thresholds, and environment keys
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Ahara Nutrition Intelligence

//! Constants module
//!
//! Constants are grouped into logical domains rather than being in a single
//! large list. The feature layout must match the layout the model was trained on.

/// Model input layout
pub mod features {
    /// Continuous features, in the exact order the scaler was fitted on
    pub const NUMERIC_FEATURES: [&str; 8] = [
        "calories", "protein", "carbs", "fat", "iron", "vitaminC", "age", "gender",
    ];
    /// Number of scaled continuous features
    pub const NUMERIC_FEATURE_COUNT: usize = NUMERIC_FEATURES.len();
    /// Constitution one-hot slot names, in slot order
    pub const CONSTITUTION_ENCODING: [&str; 3] = ["VATA", "PITTA", "KAPHA"];
    /// Number of one-hot constitution slots
    pub const CONSTITUTION_COUNT: usize = CONSTITUTION_ENCODING.len();
    /// Total model input width
    pub const FEATURE_VECTOR_LEN: usize = NUMERIC_FEATURE_COUNT + CONSTITUTION_COUNT;
}

/// Output label names as emitted by the model
pub mod labels {
    /// Iron deficiency label
    pub const IRON: &str = "iron_def";
    /// Vitamin C deficiency label
    pub const VITAMIN_C: &str = "vitc_def";
    /// Protein deficiency label
    pub const PROTEIN: &str = "protein_def";
    /// Model output order
    pub const OUTPUT_LABELS: [&str; 3] = [IRON, VITAMIN_C, PROTEIN];
}

/// Defaults applied to absent meal profile fields
pub mod profile_defaults {
    /// Default nutrient amount
    pub const NUTRIENT: f64 = 0.0;
    /// Default age in years
    pub const AGE: i64 = 30;
    /// Default gender indicator (0 female, 1 male)
    pub const GENDER: i64 = 0;
}

/// Fixed tiering thresholds
pub mod thresholds {
    /// Probabilities below this are low risk
    pub const RISK_MODERATE: f64 = 0.3;
    /// Probabilities at or above this are high risk
    pub const RISK_HIGH: f64 = 0.6;
    /// Undecided midpoint for confidence tiering
    pub const DECISION_BOUNDARY: f64 = 0.5;
    /// Distance from the boundary above which confidence is high
    pub const CONFIDENCE_HIGH_DISTANCE: f64 = 0.4;
    /// Distance from the boundary above which confidence is medium
    pub const CONFIDENCE_MEDIUM_DISTANCE: f64 = 0.2;
}

/// Weekly intake analysis
pub mod weekly {
    /// Averages are always taken over a full week
    pub const DAYS_PER_WEEK: f64 = 7.0;
    /// Max-min daily calorie spread that triggers a consistency insight
    pub const CALORIE_VARIATION_KCAL: f64 = 500.0;
    /// Average daily protein (g) below which a protein insight fires
    pub const LOW_PROTEIN_G: f64 = 50.0;
    /// Iron deficiency probability above which a deficiency insight fires
    pub const IRON_PROBABILITY: f64 = 0.6;
}

/// Food-list nutrient totals
pub mod food_portions {
    /// Reference amount the nutrient table is expressed per (g)
    pub const REFERENCE_PORTION_G: f64 = 100.0;
    /// Portion assumed when none is given, or the given one is zero (g)
    pub const DEFAULT_PORTION_G: f64 = 100.0;
}

/// Personalized recommendation and supplement rules
pub mod personalized {
    /// Iron deficiency probability above which iron advice is given
    pub const IRON_ADVICE_PROBABILITY: f64 = 0.5;
    /// Vitamin C deficiency probability above which vitamin C advice is given
    pub const VITAMIN_C_ADVICE_PROBABILITY: f64 = 0.5;
    /// Iron deficiency probability above which an iron supplement is suggested
    pub const IRON_SUPPLEMENT_PROBABILITY: f64 = 0.6;
    /// Vitamin C deficiency probability above which a vitamin C supplement is suggested
    pub const VITAMIN_C_SUPPLEMENT_PROBABILITY: f64 = 0.5;
    /// Health goal triggering weight management advice
    pub const GOAL_WEIGHT_LOSS: &str = "Weight Loss";
    /// Health goal triggering muscle building advice
    pub const GOAL_MUSCLE_BUILDING: &str = "Muscle Building";
    /// Health concerns triggering calming advice for Vata
    pub const VATA_CALMING_CONCERNS: [&str; 2] = ["Anxiety", "Insomnia"];
}

/// Environment variable names
pub mod env_config {
    /// Path to the JSON model artifact
    pub const MODEL_ARTIFACT: &str = "AHARA_MODEL_ARTIFACT";
    /// Toggle rayon evaluation of batch items
    pub const BATCH_PARALLEL: &str = "AHARA_BATCH_PARALLEL";
    /// Deployment environment label
    pub const ENVIRONMENT: &str = "ENVIRONMENT";
}

/// Built-in defaults for process configuration
pub mod defaults {
    /// Artifact location relative to the working directory
    pub const MODEL_ARTIFACT_PATH: &str = "models/model_artifact.json";
    /// Deployment environment
    pub const ENVIRONMENT: &str = "development";
}

/// Service identifiers used in structured logs
pub mod service_names {
    /// Main service name
    pub const AHARA: &str = "ahara";
}
