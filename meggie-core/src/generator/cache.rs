//! Built-in hostel staples served before any provider call.
//!
//! A requested ingredient that contains one of the cache keys ("maggi noodles"
//! contains "maggi") gets the stored recipe back immediately.

use std::fmt::Write as _;

/// One pre-written staple recipe.
#[derive(Debug)]
pub struct CachedRecipe {
    pub key: &'static str,
    pub name: &'static str,
    pub ingredients: &'static [&'static str],
    pub steps: &'static [&'static str],
    pub time: &'static str,
    pub hostel_tip: &'static str,
}

/// Checked in order; the first key contained in any ingredient wins.
pub const HOSTEL_CACHE: &[CachedRecipe] = &[
    CachedRecipe {
        key: "maggi",
        name: "Hostel Special Maggi",
        ingredients: &["maggi noodles", "onion", "tomato", "green chilies", "garam masala", "oil"],
        steps: &[
            "Heat oil in pan, add chopped onions and green chilies",
            "Add tomatoes and cook until soft",
            "Add water and bring to boil",
            "Add maggi noodles and masala packet",
            "Cook for 2-3 minutes, add garam masala and serve hot",
        ],
        time: "8 minutes",
        hostel_tip: "Add an egg while cooking for extra protein! No veggies? Just use the masala packet.",
    },
    CachedRecipe {
        key: "poha",
        name: "Classic Poha",
        ingredients: &["poha", "onion", "mustard seeds", "curry leaves", "turmeric", "oil", "salt"],
        steps: &[
            "Rinse poha in water and drain well",
            "Heat oil, add mustard seeds and curry leaves",
            "Add chopped onions, cook until golden",
            "Add turmeric and drained poha",
            "Mix gently, add salt and cook for 3-4 minutes",
        ],
        time: "15 minutes",
        hostel_tip: "No curry leaves? Skip them! Add peanuts for crunch if available.",
    },
    CachedRecipe {
        key: "paneer",
        name: "Quick Paneer Butter Masala",
        ingredients: &["paneer", "butter", "tomato", "cream", "garam masala", "kasuri methi"],
        steps: &[
            "Fry paneer cubes in butter until golden",
            "Add chopped tomatoes and cook until soft",
            "Add cream, garam masala and kasuri methi",
            "Mix paneer into sauce and simmer for 5 minutes",
        ],
        time: "20 minutes",
        hostel_tip: "No cream? Use milk with a spoon of ghee. Frozen paneer works too!",
    },
];

/// Find a cached staple for the requested ingredients.
pub fn find_cached(ingredients: &[String]) -> Option<&'static CachedRecipe> {
    let lowered: Vec<String> = ingredients.iter().map(|i| i.to_lowercase()).collect();

    HOSTEL_CACHE
        .iter()
        .find(|cached| lowered.iter().any(|i| i.contains(cached.key)))
}

impl CachedRecipe {
    /// Render in the same markdown-ish layout the provider is asked for.
    pub fn render(&self) -> String {
        let mut out = format!(
            "**{}**\n*Perfect for hostel cooking! Let's make something delicious together! 🍳*\n\n",
            self.name
        );

        out.push_str("**Ingredients:**\n");
        let ingredients: Vec<String> = self.ingredients.iter().map(|i| format!("• {}", i)).collect();
        out.push_str(&ingredients.join("\n"));

        out.push_str("\n\n**Step-by-Step Instructions:**\n");
        let steps: Vec<String> = self
            .steps
            .iter()
            .enumerate()
            .map(|(i, s)| format!("{}. {}", i + 1, s))
            .collect();
        out.push_str(&steps.join("\n"));

        let _ = write!(
            out,
            "\n\n**Cooking Time:** {}\n\n**Meggie's Hostel Tip:**\n{}\n\nHappy cooking! 😊",
            self.time, self.hostel_tip
        );

        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn strings(items: &[&str]) -> Vec<String> {
        items.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_substring_hit() {
        let hit = find_cached(&strings(&["Maggi noodles", "egg"])).unwrap();
        assert_eq!(hit.key, "maggi");
    }

    #[test]
    fn test_table_order_wins() {
        let hit = find_cached(&strings(&["paneer", "poha"])).unwrap();
        assert_eq!(hit.key, "poha");
    }

    #[test]
    fn test_miss() {
        assert!(find_cached(&strings(&["rice", "egg"])).is_none());
        assert!(find_cached(&[]).is_none());
    }

    #[test]
    fn test_render_layout() {
        let text = find_cached(&strings(&["poha"])).unwrap().render();
        assert!(text.starts_with("**Classic Poha**\n"));
        assert!(text.contains("**Ingredients:**\n• poha\n• onion\n"));
        assert!(text.contains("\n5. Mix gently, add salt and cook for 3-4 minutes\n\n**Cooking Time:** 15 minutes"));
        assert!(text.ends_with("Happy cooking! 😊"));
    }
}
