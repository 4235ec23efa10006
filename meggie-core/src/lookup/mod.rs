//! Third-party ingredient-to-recipe lookup.
//!
//! Lookup results only enrich the generation prompt with real recipe titles.
//! The generator treats every failure here as "no inspiration" and carries on.

mod spoonacular;

pub use spoonacular::SpoonacularClient;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::error::LookupError;

/// A recipe suggested by the lookup service.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LookupRecipe {
    pub id: u64,
    pub title: String,
    #[serde(default, rename = "usedIngredientCount")]
    pub used_ingredient_count: u32,
    #[serde(default, rename = "missedIngredientCount")]
    pub missed_ingredient_count: u32,
}

/// Trait for ingredient lookup services, enabling mockability in tests.
#[async_trait]
pub trait RecipeLookup: Send + Sync {
    /// Find recipes that use the given (globally named) ingredients.
    async fn find_by_ingredients(
        &self,
        ingredients: &[String],
    ) -> Result<Vec<LookupRecipe>, LookupError>;
}

/// Canned lookup results for testing.
#[derive(Debug, Default)]
pub struct MockLookup {
    titles: Vec<String>,
    error: Option<String>,
}

impl MockLookup {
    pub fn with_titles(titles: &[&str]) -> Self {
        Self {
            titles: titles.iter().map(|t| t.to_string()).collect(),
            error: None,
        }
    }

    pub fn failing(error: &str) -> Self {
        Self {
            titles: Vec::new(),
            error: Some(error.to_string()),
        }
    }
}

#[async_trait]
impl RecipeLookup for MockLookup {
    async fn find_by_ingredients(
        &self,
        _ingredients: &[String],
    ) -> Result<Vec<LookupRecipe>, LookupError> {
        if let Some(error) = &self.error {
            return Err(LookupError::InvalidResponse(error.clone()));
        }
        Ok(self
            .titles
            .iter()
            .enumerate()
            .map(|(i, title)| LookupRecipe {
                id: i as u64 + 1,
                title: title.clone(),
                used_ingredient_count: 0,
                missed_ingredient_count: 0,
            })
            .collect())
    }
}
