//! AI prompt templates.

pub mod meal_plan;

pub use meal_plan::{render_meal_plan_prompt, weekly_plan_schema};
