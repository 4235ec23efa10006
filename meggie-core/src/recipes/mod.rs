//! Local recipe table, resolution and formatting.
//!
//! The local path needs no network: a detected ingredient set resolves to one of
//! a handful of curated recipes, which are rendered as chat text.

mod table;

use std::fmt::Write as _;

use serde::{Deserialize, Serialize};

use crate::ingredients::{DetectedIngredients, Ingredient};

/// A complete recipe as shown to the user.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub struct Recipe {
    pub name: String,
    pub ingredients: Vec<String>,
    pub steps: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tips: Option<String>,
}

impl Recipe {
    pub fn new(name: &str, ingredients: &[&str], steps: &[&str], tips: Option<&str>) -> Self {
        Self {
            name: name.to_string(),
            ingredients: ingredients.iter().map(|s| s.to_string()).collect(),
            steps: steps.iter().map(|s| s.to_string()).collect(),
            tips: tips.map(str::to_string),
        }
    }
}

/// Keys into the local recipe table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RecipeKey {
    RiceTomato,
    EggRice,
    MaggiUpgrade,
}

impl RecipeKey {
    pub const ALL: &'static [RecipeKey] = &[
        RecipeKey::RiceTomato,
        RecipeKey::EggRice,
        RecipeKey::MaggiUpgrade,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            RecipeKey::RiceTomato => "rice_tomato",
            RecipeKey::EggRice => "egg_rice",
            RecipeKey::MaggiUpgrade => "maggi_upgrade",
        }
    }

    /// The recipe stored under this key.
    pub fn recipe(&self) -> &'static Recipe {
        match self {
            RecipeKey::RiceTomato => &table::RICE_TOMATO,
            RecipeKey::EggRice => &table::EGG_RICE,
            RecipeKey::MaggiUpgrade => &table::MAGGI_UPGRADE,
        }
    }
}

/// Pick a local recipe for the detected ingredients.
///
/// First match wins: rice+tomato, then rice+egg, then maggi. A message with
/// rice, tomato and egg always gets tomato rice.
pub fn resolve_local(detected: &DetectedIngredients) -> Option<RecipeKey> {
    let has_rice = detected.contains(Ingredient::Rice);

    if has_rice && detected.contains(Ingredient::Tomato) {
        return Some(RecipeKey::RiceTomato);
    }
    if has_rice && detected.contains(Ingredient::Egg) {
        return Some(RecipeKey::EggRice);
    }
    if detected.contains(Ingredient::Maggi) {
        return Some(RecipeKey::MaggiUpgrade);
    }
    None
}

/// Render a recipe as Meggie's chat reply.
pub fn format_recipe(recipe: &Recipe) -> String {
    let mut out = format!("Ooh, perfect! Let's make {}! 🌸\n\n", recipe.name);

    out.push_str("You'll need:\n");
    for ingredient in &recipe.ingredients {
        let _ = writeln!(out, "• {}", ingredient);
    }

    out.push_str("\nHere's how to make it:\n");
    for (i, step) in recipe.steps.iter().enumerate() {
        let _ = writeln!(out, "{}. {}", i + 1, step);
    }

    if let Some(tips) = &recipe.tips {
        let _ = write!(out, "\n💡 Meggie's tip: {}", tips);
    }

    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ingredients::detect;

    fn set(items: &[Ingredient]) -> DetectedIngredients {
        items.iter().copied().collect()
    }

    #[test]
    fn test_priority_order() {
        let all = set(&[Ingredient::Rice, Ingredient::Tomato, Ingredient::Egg]);
        assert_eq!(resolve_local(&all), Some(RecipeKey::RiceTomato));

        let rice_egg = set(&[Ingredient::Rice, Ingredient::Egg, Ingredient::Maggi]);
        assert_eq!(resolve_local(&rice_egg), Some(RecipeKey::EggRice));

        assert_eq!(
            resolve_local(&set(&[Ingredient::Maggi])),
            Some(RecipeKey::MaggiUpgrade)
        );
    }

    #[test]
    fn test_no_match() {
        assert_eq!(resolve_local(&DetectedIngredients::default()), None);
        assert_eq!(resolve_local(&set(&[Ingredient::Rice])), None);
        assert_eq!(resolve_local(&set(&[Ingredient::Tomato, Ingredient::Egg])), None);
    }

    #[test]
    fn test_resolve_from_message() {
        assert_eq!(
            resolve_local(&detect("I have rice, tomatoes and eggs")),
            Some(RecipeKey::RiceTomato)
        );
    }

    #[test]
    fn test_format_counts_lines() {
        for key in RecipeKey::ALL {
            let recipe = key.recipe();
            let text = format_recipe(recipe);

            let bullets = text.lines().filter(|l| l.starts_with("• ")).count();
            assert_eq!(bullets, recipe.ingredients.len(), "{}", key.as_str());

            let numbered: Vec<&str> = text
                .lines()
                .filter(|l| l.split_once(". ").is_some_and(|(n, _)| n.parse::<usize>().is_ok()))
                .collect();
            assert_eq!(numbered.len(), recipe.steps.len(), "{}", key.as_str());
            for (i, line) in numbered.iter().enumerate() {
                assert!(line.starts_with(&format!("{}. ", i + 1)));
                assert!(line.ends_with(recipe.steps[i].as_str()));
            }
        }
    }

    #[test]
    fn test_format_exact() {
        let recipe = Recipe::new("Chai", &["water", "tea"], &["Boil.", "Pour."], Some("Add ginger."));
        assert_eq!(
            format_recipe(&recipe),
            "Ooh, perfect! Let's make Chai! 🌸\n\n\
             You'll need:\n• water\n• tea\n\n\
             Here's how to make it:\n1. Boil.\n2. Pour.\n\n\
             💡 Meggie's tip: Add ginger."
        );
    }

    #[test]
    fn test_format_without_tip() {
        let recipe = Recipe::new("Toast", &["bread"], &["Toast it."], None);
        let text = format_recipe(&recipe);
        assert!(text.ends_with("1. Toast it.\n"));
        assert!(!text.contains("tip"));
    }
}
