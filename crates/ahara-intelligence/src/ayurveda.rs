// ABOUTME: Constitution food guides, seasonal eating advice, and meal modifications
// ABOUTME: Static Ayurvedic reference tables keyed by constitution and season
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Ahara Nutrition Intelligence

use ahara_core::models::Constitution;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Fallback when the season is not recognised
pub const DEFAULT_SEASONAL_ADVICE: &str = "Follow seasonal eating principles";

/// Iron (mg) below which a meal gets an iron modification
const LOW_MEAL_IRON_MG: f64 = 10.0;
/// Vitamin C (mg) below which a meal gets a vitamin C modification
const LOW_MEAL_VITAMIN_C_MG: f64 = 30.0;

/// Foods and spices to favor or avoid for a constitution
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct FoodGuide {
    /// Foods that balance the constitution
    pub favor: [&'static str; 5],
    /// Foods that aggravate it
    pub avoid: [&'static str; 5],
    /// Recommended spices
    pub spices: [&'static str; 5],
}

const VATA_GUIDE: FoodGuide = FoodGuide {
    favor: ["Warm cooked grains", "Root vegetables", "Nuts and seeds", "Ghee", "Warm milk"],
    avoid: ["Raw vegetables", "Cold foods", "Dry foods", "Excessive beans", "Caffeine"],
    spices: ["Ginger", "Cinnamon", "Cardamom", "Fennel", "Cumin"],
};

const PITTA_GUIDE: FoodGuide = FoodGuide {
    favor: ["Sweet fruits", "Leafy greens", "Coconut", "Cooling herbs", "Basmati rice"],
    avoid: ["Spicy foods", "Sour foods", "Tomatoes", "Excessive salt", "Red meat"],
    spices: ["Coriander", "Fennel", "Mint", "Dill", "Turmeric (small amounts)"],
};

const KAPHA_GUIDE: FoodGuide = FoodGuide {
    favor: ["Light fruits", "Leafy greens", "Legumes", "Quinoa", "Herbal teas"],
    avoid: ["Heavy foods", "Dairy", "Sweet foods", "Oily foods", "Cold foods"],
    spices: ["Black pepper", "Ginger", "Turmeric", "Mustard seeds", "Chili"],
};

/// Food guide for a constitution
///
/// Callers holding raw input should resolve it leniently, so an unknown name
/// gets the Vata guide.
#[must_use]
pub const fn food_guide(constitution: Constitution) -> &'static FoodGuide {
    match constitution {
        Constitution::Vata => &VATA_GUIDE,
        Constitution::Pitta => &PITTA_GUIDE,
        Constitution::Kapha => &KAPHA_GUIDE,
    }
}

/// Season of the year
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Season {
    /// Spring
    Spring,
    /// Summer
    Summer,
    /// Fall
    Fall,
    /// Winter
    Winter,
}

impl Season {
    /// Case-insensitive parse; `None` for anything unrecognised
    #[must_use]
    pub fn parse(value: &str) -> Option<Self> {
        match value.to_lowercase().as_str() {
            "spring" => Some(Self::Spring),
            "summer" => Some(Self::Summer),
            "fall" => Some(Self::Fall),
            "winter" => Some(Self::Winter),
            _ => None,
        }
    }

    /// Lower-case name
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Spring => "spring",
            Self::Summer => "summer",
            Self::Fall => "fall",
            Self::Winter => "winter",
        }
    }

    const fn general_advice(self) -> &'static str {
        match self {
            Self::Spring => "Light, detoxifying foods to cleanse winter accumulation",
            Self::Summer => "Cool, hydrating foods to balance heat",
            Self::Fall => "Warm, grounding foods to prepare for winter",
            Self::Winter => "Nourishing, warming foods for strength",
        }
    }
}

impl fmt::Display for Season {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Seasonal eating advice
///
/// Falls back to the season's general line for an unrecognised constitution and
/// to [`DEFAULT_SEASONAL_ADVICE`] for an unrecognised season.
#[must_use]
pub const fn seasonal_advice(
    season: Option<Season>,
    constitution: Option<Constitution>,
) -> &'static str {
    let Some(season) = season else {
        return DEFAULT_SEASONAL_ADVICE;
    };
    let Some(constitution) = constitution else {
        return season.general_advice();
    };
    match (season, constitution) {
        (Season::Spring, Constitution::Vata) => "Gentle detox with warm, light foods",
        (Season::Spring, Constitution::Pitta) => "Bitter greens and cooling foods",
        (Season::Spring, Constitution::Kapha) => "Spicy, light foods to reduce excess kapha",
        (Season::Summer, Constitution::Vata) => "Sweet, cooling foods but not too cold",
        (Season::Summer, Constitution::Pitta) => "Very cooling foods, avoid heating spices",
        (Season::Summer, Constitution::Kapha) => "Light, cooling foods with some warming spices",
        (Season::Fall, Constitution::Vata) => "Warm, oily, grounding foods",
        (Season::Fall, Constitution::Pitta) => "Sweet, grounding foods, reduce heating foods",
        (Season::Fall, Constitution::Kapha) => "Warm, light foods with stimulating spices",
        (Season::Winter, Constitution::Vata) => "Heavy, warm, oily foods",
        (Season::Winter, Constitution::Pitta) => "Warm but not overly heating foods",
        (Season::Winter, Constitution::Kapha) => "Warm, light, spicy foods",
    }
}

/// Meal-level Ayurvedic modifications
///
/// Five constitution-specific habits (or one balanced-approach line when the
/// constitution is unrecognised), followed by iron and vitamin C additions
/// when the meal is low in either.
#[must_use]
pub fn meal_modifications(
    constitution: Option<Constitution>,
    iron_mg: f64,
    vitamin_c_mg: f64,
) -> Vec<&'static str> {
    let mut suggestions = match constitution {
        Some(Constitution::Vata) => vec![
            "Favor warm, cooked foods over raw foods",
            "Add ghee and warming spices like ginger and cinnamon",
            "Eat regular meals at consistent times",
            "Include sweet, sour, and salty tastes",
            "Avoid excessive cold or dry foods",
        ],
        Some(Constitution::Pitta) => vec![
            "Favor cooling foods like cucumber and mint",
            "Reduce spicy, oily, and acidic foods",
            "Include sweet, bitter, and astringent tastes",
            "Eat moderate portions at regular times",
            "Avoid excessive heat-generating foods",
        ],
        Some(Constitution::Kapha) => vec![
            "Favor light, dry, and warm foods",
            "Include pungent, bitter, and astringent tastes",
            "Reduce heavy, oily, and sweet foods",
            "Eat smaller portions and avoid overeating",
            "Include stimulating spices like black pepper and turmeric",
        ],
        None => vec!["Follow a balanced approach suitable for your constitution"],
    };

    if iron_mg < LOW_MEAL_IRON_MG {
        suggestions.push("Include iron-rich foods like sesame seeds and dark leafy greens");
    }
    if vitamin_c_mg < LOW_MEAL_VITAMIN_C_MG {
        suggestions.push("Add amla (Indian gooseberry) for natural vitamin C");
    }

    suggestions
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unknown_constitution_name_gets_vata_guide() {
        let guide = food_guide(Constitution::from_str_lossy("ether"));
        assert_eq!(guide, &VATA_GUIDE);
        assert_eq!(food_guide(Constitution::Pitta).spices[4], "Turmeric (small amounts)");
    }

    #[test]
    fn test_seasonal_fallbacks() {
        assert_eq!(
            seasonal_advice(Season::parse("Summer"), Constitution::parse("pitta")),
            "Very cooling foods, avoid heating spices"
        );
        assert_eq!(
            seasonal_advice(Season::parse("winter"), None),
            "Nourishing, warming foods for strength"
        );
        assert_eq!(
            seasonal_advice(Season::parse("monsoon"), Some(Constitution::Kapha)),
            DEFAULT_SEASONAL_ADVICE
        );
    }

    #[test]
    fn test_meal_modifications_add_nutrient_lines() {
        let suggestions = meal_modifications(None, 4.0, 45.0);
        assert_eq!(
            suggestions,
            vec![
                "Follow a balanced approach suitable for your constitution",
                "Include iron-rich foods like sesame seeds and dark leafy greens",
            ]
        );
        assert_eq!(meal_modifications(Some(Constitution::Kapha), 12.0, 31.0).len(), 5);
    }
}
