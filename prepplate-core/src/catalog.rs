//! The static ingredient catalog.
//!
//! Three categories, each with its own selection maximum. Proteins carry
//! display subgroups ("Seafood", "Poultry", ...); veggies and carbs are flat
//! lists. The grouped/flat distinction is a tagged variant so rendering code
//! never has to sniff the shape at runtime.

use serde::{Deserialize, Serialize};

/// Maximum selectable proteins. Selection is only complete at exactly this count.
pub const MAX_PROTEINS: usize = 3;

/// Maximum selectable vegetables.
pub const MAX_VEGGIES: usize = 6;

/// Maximum selectable carbohydrates.
pub const MAX_CARBS: usize = 3;

/// The three ingredient categories.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CategoryKind {
    Protein,
    Veggie,
    Carb,
}

impl CategoryKind {
    /// All categories in display order.
    pub const ALL: &'static [CategoryKind] =
        &[CategoryKind::Protein, CategoryKind::Veggie, CategoryKind::Carb];

    /// Selection cap for this category.
    pub fn max(self) -> usize {
        match self {
            CategoryKind::Protein => MAX_PROTEINS,
            CategoryKind::Veggie => MAX_VEGGIES,
            CategoryKind::Carb => MAX_CARBS,
        }
    }

    /// Proteins require an explicit, exact pick; the optional categories
    /// may be completed randomly.
    pub fn is_auto_fillable(self) -> bool {
        matches!(self, CategoryKind::Veggie | CategoryKind::Carb)
    }

    pub fn as_str(self) -> &'static str {
        match self {
            CategoryKind::Protein => "protein",
            CategoryKind::Veggie => "veggie",
            CategoryKind::Carb => "carb",
        }
    }

    /// The catalog data for this category.
    pub fn catalog(self) -> Category {
        match self {
            CategoryKind::Protein => Category::Grouped(PROTEIN_GROUPS),
            CategoryKind::Veggie => Category::Flat(VEGGIES),
            CategoryKind::Carb => Category::Flat(CARBS),
        }
    }
}

/// A named subgroup of a grouped category. Grouping affects display only.
#[derive(Debug, Clone, Copy)]
pub struct IngredientGroup {
    pub label: &'static str,
    pub items: &'static [&'static str],
}

/// Catalog shape for one category.
#[derive(Debug, Clone, Copy)]
pub enum Category {
    Grouped(&'static [IngredientGroup]),
    Flat(&'static [&'static str]),
}

impl Category {
    /// Iterate every item label, ignoring grouping.
    pub fn iter(&self) -> impl Iterator<Item = &'static str> + '_ {
        let (groups, flat): (&'static [IngredientGroup], &'static [&'static str]) = match self {
            Category::Grouped(groups) => (groups, &[]),
            Category::Flat(items) => (&[], items),
        };
        groups
            .iter()
            .flat_map(|g| g.items.iter().copied())
            .chain(flat.iter().copied())
    }

    /// Total number of items across all groups.
    pub fn len(&self) -> usize {
        match self {
            Category::Grouped(groups) => groups.iter().map(|g| g.items.len()).sum(),
            Category::Flat(items) => items.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn contains(&self, label: &str) -> bool {
        self.iter().any(|item| item == label)
    }
}

pub const PROTEIN_GROUPS: &[IngredientGroup] = &[
    IngredientGroup {
        label: "Beef & Lamb",
        items: &[
            "Sirloin Steak",
            "Ribeye Steak",
            "Ground Beef",
            "Beef Brisket",
            "Flank Steak",
            "Lamb Loin",
            "Lamb Shank",
        ],
    },
    IngredientGroup {
        label: "Pork",
        items: &[
            "Pork Loin",
            "Pork Belly",
            "Ground Pork",
            "Smoked Ham",
            "Chorizo",
            "Pork Ribs",
            "Bacon",
        ],
    },
    IngredientGroup {
        label: "Poultry",
        items: &[
            "Chicken Breast",
            "Chicken Thigh",
            "Ground Turkey",
            "Turkey Breast",
            "Duck Breast",
            "Chicken Wings",
            "Ground Chicken",
            "Quail",
            "Goose",
            "Cornish Hen",
        ],
    },
    IngredientGroup {
        label: "Seafood",
        items: &[
            "Shrimp",
            "Salmon Fillet",
            "Sea Scallops",
            "Cod Fillet",
            "Tuna Steak",
            "Blue Mussels",
            "Chilean Sea Bass",
            "Lobster Tail",
            "Lump Crab Meat",
            "Rainbow Trout",
            "Octopus",
            "Sardines",
            "Atlantic Halibut",
            "Squid/Calamari",
            "Little Neck Clams",
        ],
    },
    IngredientGroup {
        label: "Plant-Based",
        items: &[
            "Tofu (Firm)",
            "Tempeh",
            "Seitan",
            "Chickpeas",
            "Red Lentils",
            "Black Beans",
            "Edamame",
            "Kidney Beans",
            "Fava Beans",
            "Cannellini Beans",
        ],
    },
    IngredientGroup {
        label: "Dairy & Eggs",
        items: &[
            "Large Eggs",
            "Paneer Cheese",
            "Greek Yogurt",
            "Cottage Cheese",
            "Halloumi Cheese",
        ],
    },
];

pub const VEGGIES: &[&str] = &[
    "Broccoli",
    "Spinach",
    "Bell Peppers",
    "Zucchini",
    "Carrots",
    "Cauliflower",
    "Kale",
    "Asparagus",
    "Green Beans",
    "Brussels Sprouts",
    "Mushrooms",
    "Onion",
    "Garlic",
    "Eggplant",
    "Cucumber",
    "Tomato",
    "Cabbage",
    "Bok Choy",
    "Peas",
    "Corn",
    "Celery",
    "Radish",
    "Butternut Squash",
    "Leek",
    "Arugula",
    "Fennel",
    "Okra",
    "Snow Peas",
    "Watercress",
    "Artichoke",
];

pub const CARBS: &[&str] = &[
    "White Rice",
    "Brown Rice",
    "Quinoa",
    "Whole Wheat Pasta",
    "Fusilli",
    "Sweet Potato",
    "Russet Potato",
    "Red Potato",
    "Couscous",
    "Bulgur",
    "Farro",
    "Barley",
    "Oats",
    "Sourdough Bread",
    "Baguette",
    "Corn Tortillas",
    "Rice Noodles",
    "Buckwheat",
    "Millet",
    "Polenta",
    "Potato Gnocchi",
    "Pita Bread",
    "Naan",
    "Orzo",
    "Vermicelli",
    "Udon Noodles",
    "Soba Noodles",
    "Basmati Rice",
    "Jasmine Rice",
    "Wild Rice",
];

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_no_duplicate_labels_within_a_category() {
        for kind in CategoryKind::ALL {
            let labels: Vec<&str> = kind.catalog().iter().collect();
            let unique: HashSet<&str> = labels.iter().copied().collect();
            assert_eq!(labels.len(), unique.len(), "duplicates in {}", kind.as_str());
        }
    }

    #[test]
    fn test_every_category_exceeds_its_max() {
        // Auto-fill must always be able to complete a category from empty.
        for kind in CategoryKind::ALL {
            assert!(kind.catalog().len() >= kind.max());
        }
    }

    #[test]
    fn test_grouped_iteration_matches_contains() {
        let proteins = CategoryKind::Protein.catalog();
        assert!(proteins.contains("Shrimp"));
        assert!(proteins.contains("Tofu (Firm)"));
        assert!(!proteins.contains("Broccoli"));

        let veggies = CategoryKind::Veggie.catalog();
        assert!(veggies.contains("Broccoli"));
        assert!(!veggies.contains("Shrimp"));
    }

    #[test]
    fn test_only_optional_categories_auto_fill() {
        assert!(!CategoryKind::Protein.is_auto_fillable());
        assert!(CategoryKind::Veggie.is_auto_fillable());
        assert!(CategoryKind::Carb.is_auto_fillable());
    }
}
