//! The generated weekly plan, mirrored from the model's wire format.
//!
//! Every field is required: the derives double as the response shape check,
//! so a missing or mis-typed field fails deserialization instead of leaking
//! a half-populated plan into the UI.

use serde::{Deserialize, Serialize};

/// One ingredient or spice line, e.g. ("Soy Sauce", "30ml").
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RecipeIngredient {
    pub name: String,
    pub amount: String,
}

/// One mise-en-place step shown before the numbered cooking steps.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PrepStep {
    pub title: String,
    pub instruction: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Recipe {
    pub id: String,
    pub name: String,
    /// Country or region of origin.
    pub origin: String,
    /// Active cooking time in minutes.
    pub time_minutes: u32,
    pub ingredients: Vec<RecipeIngredient>,
    pub spices: Vec<RecipeIngredient>,
    pub mise_en_place: Vec<PrepStep>,
    pub cooking_steps: Vec<String>,
    pub pro_tips: Vec<String>,
    pub is_freezable: bool,
    pub search_url: String,
}

/// A weekday with its two meals.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DayPlan {
    pub day: String,
    pub lunch: Recipe,
    pub dinner: Recipe,
}

/// A titled group of weekend batch-prep tasks.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PrepGroup {
    pub title: String,
    pub tasks: Vec<String>,
}

/// The full generated plan. Replaced wholesale on regeneration, never
/// partially mutated.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WeeklyPlan {
    pub meals: Vec<DayPlan>,
    pub weekend_prep: Vec<PrepGroup>,
}
