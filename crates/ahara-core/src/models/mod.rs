// ABOUTME: Core data models for the Ahara nutrient risk pipeline
// ABOUTME: Re-exports meal profiles, constitutions, assessments, and weekly intake logs
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Ahara Nutrition Intelligence

//! # Data Models
//!
//! - `MealProfile`: one meal plus the eater's attributes, the encoder's input
//! - `Constitution` / `ConstitutionInput`: resolved and caller-supplied dosha
//! - `InterpretedResult`: per-label risk and confidence tiers
//! - `WeeklyMealLog`: a week of meals for intake trend analysis
//! - `HealthProfile`: eater attributes plus health goals and concerns

mod assessment;
mod meal;
mod nutrition;

pub use assessment::{
    ConfidenceLevel, DeficiencyLabel, InterpretedResult, LabelAssessment, RiskLevel,
};
pub use meal::{Constitution, ConstitutionInput, MealProfile};
pub use nutrition::{
    ActivityLevel, DayLog, HealthProfile, MealEntry, MealType, UserProfile, WeeklyMealLog,
};
