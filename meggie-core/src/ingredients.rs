//! Ingredient detection for free-text chat messages.
//!
//! Maps a message to the canonical ingredient categories it mentions, based on
//! keyword containment against a fixed synonym table. Local Indian-English terms
//! ("aloo", "anda", "pyaz") are registered alongside the English names.

use std::collections::BTreeSet;
use std::fmt;

use serde::{Deserialize, Serialize};

/// Canonical ingredient categories, declared in synonym-table order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Ingredient {
    Rice,
    Tomato,
    Onion,
    Potato,
    Egg,
    Bread,
    Maggi,
    Dal,
    Oil,
    Salt,
    Spices,
}

impl Ingredient {
    /// All categories in table order.
    pub const ALL: &'static [Ingredient] = &[
        Ingredient::Rice,
        Ingredient::Tomato,
        Ingredient::Onion,
        Ingredient::Potato,
        Ingredient::Egg,
        Ingredient::Bread,
        Ingredient::Maggi,
        Ingredient::Dal,
        Ingredient::Oil,
        Ingredient::Salt,
        Ingredient::Spices,
    ];

    /// The canonical key, e.g. "rice".
    pub fn key(&self) -> &'static str {
        match self {
            Ingredient::Rice => "rice",
            Ingredient::Tomato => "tomato",
            Ingredient::Onion => "onion",
            Ingredient::Potato => "potato",
            Ingredient::Egg => "egg",
            Ingredient::Bread => "bread",
            Ingredient::Maggi => "maggi",
            Ingredient::Dal => "dal",
            Ingredient::Oil => "oil",
            Ingredient::Salt => "salt",
            Ingredient::Spices => "spices",
        }
    }

    /// Literal text variants that count as a mention of this category.
    /// All variants are lower-case.
    pub fn synonyms(&self) -> &'static [&'static str] {
        match self {
            Ingredient::Rice => &["rice", "basmati", "white rice", "brown rice"],
            Ingredient::Tomato => &["tomato", "tomatoes", "tomato sauce"],
            Ingredient::Onion => &["onion", "onions", "pyaz"],
            Ingredient::Potato => &["potato", "potatoes", "aloo"],
            Ingredient::Egg => &["egg", "eggs", "anda"],
            Ingredient::Bread => &["bread", "double roti", "pav"],
            Ingredient::Maggi => &["maggi", "noodles", "instant noodles"],
            Ingredient::Dal => &["dal", "lentils", "moong", "masoor", "toor"],
            Ingredient::Oil => &["oil", "cooking oil", "refined oil"],
            Ingredient::Salt => &["salt", "namak"],
            Ingredient::Spices => &[
                "turmeric",
                "haldi",
                "red chili",
                "garam masala",
                "jeera",
                "cumin",
            ],
        }
    }

    pub fn from_key(key: &str) -> Option<Self> {
        Self::ALL.iter().copied().find(|i| i.key() == key)
    }

    /// Whether any synonym occurs in already lower-cased text.
    fn mentioned_in(&self, lower: &str) -> bool {
        self.synonyms().iter().any(|s| lower.contains(s))
    }
}

impl fmt::Display for Ingredient {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

/// The set of categories detected in one message.
///
/// Iteration follows synonym-table order, so rendering is stable.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DetectedIngredients(BTreeSet<Ingredient>);

impl DetectedIngredients {
    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn contains(&self, ingredient: Ingredient) -> bool {
        self.0.contains(&ingredient)
    }

    pub fn iter(&self) -> impl Iterator<Item = Ingredient> + '_ {
        self.0.iter().copied()
    }

    /// Canonical keys as owned strings, the shape the generator expects.
    pub fn keys(&self) -> Vec<String> {
        self.iter().map(|i| i.key().to_string()).collect()
    }
}

impl FromIterator<Ingredient> for DetectedIngredients {
    fn from_iter<T: IntoIterator<Item = Ingredient>>(iter: T) -> Self {
        Self(iter.into_iter().collect())
    }
}

impl fmt::Display for DetectedIngredients {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, ingredient) in self.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            f.write_str(ingredient.key())?;
        }
        Ok(())
    }
}

/// Detect the ingredient categories mentioned in a message.
///
/// Matching is case-insensitive plain substring containment with no word
/// boundaries, so "oil" also matches inside "boil" and "Tomatoland" detects
/// tomato.
pub fn detect(text: &str) -> DetectedIngredients {
    let lower = text.to_lowercase();

    Ingredient::ALL
        .iter()
        .copied()
        .filter(|ingredient| ingredient.mentioned_in(&lower))
        .collect()
}
