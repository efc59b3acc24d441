// ABOUTME: Rule-based advisory synthesis from interpreted risk tiers and constitution
// ABOUTME: Produces a deterministic, ordered list of advice strings
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Ahara Nutrition Intelligence

//! Recommendation engine
//!
//! Output order is fixed:
//!
//! 1. iron, vitamin C, protein advice, each only when that deficiency is moderate or high
//! 2. general advice for the constitution, when one is recognised
//! 3. the constitution's conditional note, when its governing deficiency is not low
//!
//! A label absent from the interpreted result never triggers advice.

use crate::config::intelligence::RecommendationMessages;
use ahara_core::models::{Constitution, DeficiencyLabel, InterpretedResult};

/// Deficiency each constitution's conditional note is tied to
#[must_use]
pub const fn governing_deficiency(constitution: Constitution) -> DeficiencyLabel {
    match constitution {
        Constitution::Vata => DeficiencyLabel::Iron,
        Constitution::Pitta => DeficiencyLabel::VitaminC,
        Constitution::Kapha => DeficiencyLabel::Protein,
    }
}

/// Advice synthesizer over a message catalogue
#[derive(Debug, Clone, Default)]
pub struct RecommendationEngine {
    messages: RecommendationMessages,
}

impl RecommendationEngine {
    /// Create an engine with a custom message catalogue
    #[must_use]
    pub const fn new(messages: RecommendationMessages) -> Self {
        Self { messages }
    }

    /// Message catalogue in use
    #[must_use]
    pub const fn messages(&self) -> &RecommendationMessages {
        &self.messages
    }

    /// Build the ordered advice list
    ///
    /// `constitution` is the strict resolution of the caller's input: `None`
    /// means it was unrecognised, and only deficiency advice is produced.
    #[must_use]
    pub fn recommend(
        &self,
        interpreted: &InterpretedResult,
        constitution: Option<Constitution>,
    ) -> Vec<String> {
        let mut advice: Vec<String> = DeficiencyLabel::ALL
            .into_iter()
            .filter(|&label| interpreted.is_elevated(label))
            .map(|label| self.messages.deficiency(label).to_owned())
            .collect();

        if let Some(constitution) = constitution {
            let messages = self.messages.constitution(constitution);
            advice.push(messages.general.clone());
            if interpreted.is_elevated(governing_deficiency(constitution)) {
                advice.push(messages.conditional.clone());
            }
        }

        advice
    }
}

/// Build advice with the default message catalogue
#[must_use]
pub fn recommend(interpreted: &InterpretedResult, constitution: Option<Constitution>) -> Vec<String> {
    RecommendationEngine::default().recommend(interpreted, constitution)
}
