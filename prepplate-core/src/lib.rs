pub mod ai;
pub mod catalog;
pub mod plan;
pub mod selection;

pub use ai::{AiClient, AiError, PlanError, generate_meal_plan};
pub use catalog::{CARBS, Category, CategoryKind, IngredientGroup, PROTEIN_GROUPS, VEGGIES};
pub use catalog::{MAX_CARBS, MAX_PROTEINS, MAX_VEGGIES};
pub use plan::{DayPlan, PrepGroup, PrepStep, Recipe, RecipeIngredient, WeeklyPlan};
pub use selection::SelectionState;
