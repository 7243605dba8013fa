//! Weekly meal-plan prompt and the output contract sent with it.

use serde_json::{Value, json};

use crate::catalog::{MAX_CARBS, MAX_PROTEINS, MAX_VEGGIES};

/// Prompt name used to tag log lines.
pub const MEAL_PLAN_PROMPT_NAME: &str = "meal_plan";

/// Render the meal-plan directive.
///
/// Proteins must already be an exact pick of [`MAX_PROTEINS`] items; that
/// precondition belongs to the caller, not the builder. Empty optional
/// categories become an explicit "you choose" marker so the model fills the
/// gap instead of echoing an empty list.
pub fn render_meal_plan_prompt(proteins: &[String], veggies: &[String], carbs: &[String]) -> String {
    let veggie_list = if veggies.is_empty() {
        "None selected (you choose)".to_string()
    } else {
        veggies.join(", ")
    };
    let carb_list = if carbs.is_empty() {
        "None selected (you choose)".to_string()
    } else {
        carbs.join(", ")
    };

    format!(
        r#"Act as a world-class chef and meal prep expert. Generate a Monday to Friday (Lunch and Dinner) meal plan for 2 people.

CONTEXT:
- User Proteins: {proteins} (Strictly use these {max_proteins}).
- User Preferred Veggies: {veggies}.
- User Preferred Carbs: {carbs}.

CONSTRAINTS:
1. Supplement ingredients with additional global-appropriate choices to reach exactly {max_veggies} types of veggies and {max_carbs} types of carbs total across the entire 10-meal plan.
2. Each recipe MUST be distinct and unique, representing a wide variety of global cuisines (Asian, African, European, Latin, Mediterranean, etc.).
3. Include beginner-friendly mise en place steps.
4. Spices MUST include specific amounts in ml or g.
5. Weekend prep tasks must ensure daily active cooking is <30 minutes.
6. Provide a valid Google Search URL for the name of each dish in the format: https://www.google.com/search?q=[Recipe+Name+Encoded]

Output a JSON object matching the provided schema."#,
        proteins = proteins.join(", "),
        max_proteins = MAX_PROTEINS,
        veggies = veggie_list,
        carbs = carb_list,
        max_veggies = MAX_VEGGIES,
        max_carbs = MAX_CARBS,
    )
}

fn recipe_schema() -> Value {
    json!({
        "type": "object",
        "properties": {
            "id": { "type": "string" },
            "name": { "type": "string" },
            "origin": { "type": "string" },
            "timeMinutes": { "type": "number" },
            "ingredients": {
                "type": "array",
                "items": {
                    "type": "object",
                    "properties": {
                        "name": { "type": "string" },
                        "amount": { "type": "string" }
                    },
                    "required": ["name", "amount"]
                }
            },
            "spices": {
                "type": "array",
                "items": {
                    "type": "object",
                    "properties": {
                        "name": { "type": "string" },
                        "amount": { "type": "string" }
                    },
                    "required": ["name", "amount"]
                }
            },
            "miseEnPlace": {
                "type": "array",
                "items": {
                    "type": "object",
                    "properties": {
                        "title": { "type": "string" },
                        "instruction": { "type": "string" }
                    },
                    "required": ["title", "instruction"]
                }
            },
            "cookingSteps": { "type": "array", "items": { "type": "string" } },
            "proTips": { "type": "array", "items": { "type": "string" } },
            "isFreezable": { "type": "boolean" },
            "searchUrl": { "type": "string" }
        },
        "required": [
            "id",
            "name",
            "origin",
            "timeMinutes",
            "ingredients",
            "spices",
            "miseEnPlace",
            "cookingSteps",
            "proTips",
            "isFreezable",
            "searchUrl"
        ]
    })
}

/// The formal output contract: a list of day entries and a list of
/// weekend-prep groups, with every recipe field required. Sent as the
/// response format so the downstream parse is deterministic.
pub fn weekly_plan_schema() -> Value {
    json!({
        "type": "object",
        "properties": {
            "meals": {
                "type": "array",
                "items": {
                    "type": "object",
                    "properties": {
                        "day": { "type": "string" },
                        "lunch": recipe_schema(),
                        "dinner": recipe_schema()
                    },
                    "required": ["day", "lunch", "dinner"]
                }
            },
            "weekendPrep": {
                "type": "array",
                "items": {
                    "type": "object",
                    "properties": {
                        "title": { "type": "string" },
                        "tasks": { "type": "array", "items": { "type": "string" } }
                    },
                    "required": ["title", "tasks"]
                }
            }
        },
        "required": ["meals", "weekendPrep"]
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn labels(items: &[&str]) -> Vec<String> {
        items.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_render_prompt_embeds_selections() {
        let prompt = render_meal_plan_prompt(
            &labels(&["Shrimp", "Chicken Thigh", "Tempeh"]),
            &labels(&["Broccoli", "Kale"]),
            &labels(&["Farro"]),
        );

        assert!(prompt.contains("Shrimp, Chicken Thigh, Tempeh (Strictly use these 3)"));
        assert!(prompt.contains("User Preferred Veggies: Broccoli, Kale."));
        assert!(prompt.contains("User Preferred Carbs: Farro."));
        assert!(prompt.contains("Monday to Friday"));
    }

    #[test]
    fn test_render_prompt_marks_empty_optional_categories() {
        let prompt = render_meal_plan_prompt(
            &labels(&["Shrimp", "Chicken Thigh", "Tempeh"]),
            &[],
            &[],
        );

        assert!(prompt.contains("User Preferred Veggies: None selected (you choose)."));
        assert!(prompt.contains("User Preferred Carbs: None selected (you choose)."));
        // The variety targets are stated even when the user picked nothing.
        assert!(prompt.contains("exactly 6 types of veggies and 3 types of carbs"));
    }

    #[test]
    fn test_schema_requires_every_recipe_field() {
        let schema = weekly_plan_schema();

        let top_required: Vec<&str> = schema["required"]
            .as_array()
            .unwrap()
            .iter()
            .map(|v| v.as_str().unwrap())
            .collect();
        assert_eq!(top_required, ["meals", "weekendPrep"]);

        let recipe = &schema["properties"]["meals"]["items"]["properties"]["lunch"];
        let recipe_required: Vec<&str> = recipe["required"]
            .as_array()
            .unwrap()
            .iter()
            .map(|v| v.as_str().unwrap())
            .collect();
        for field in [
            "id",
            "name",
            "origin",
            "timeMinutes",
            "ingredients",
            "spices",
            "miseEnPlace",
            "cookingSteps",
            "proTips",
            "isFreezable",
            "searchUrl",
        ] {
            assert!(recipe_required.contains(&field), "{field} not required");
        }
    }
}
