//! The recipe generator behind `POST /generate-recipe`.
//!
//! Generation is a short linear pipeline:
//! 1. check the generative provider is configured
//! 2. serve a built-in staple if one matches
//! 3. map local ingredient names to global ones
//! 4. ask the lookup service for inspiration (best-effort)
//! 5. render the prompt and call the provider
//! 6. localize the generated text
//!
//! Every failure ends in a `GenerationOutcome::Fallback` with the static hostel
//! survival text, so callers always have something warm to show.

pub mod cache;
pub mod prompt;

use std::sync::Arc;

use async_trait::async_trait;

use crate::llm::{create_provider_from_env, LlmProvider};
use crate::localize::{localize_text, to_global_all};
use crate::lookup::{RecipeLookup, SpoonacularClient};
use crate::remote::RemoteGenerator;
use crate::types::{GenerationOutcome, GenerationRequest};

/// Shown whenever generation fails at any stage.
pub const FALLBACK_TEXT: &str = "I'm having trouble connecting to my recipe brain right now! 😅 But don't worry, here are some quick hostel cooking ideas:

**Quick & Easy Options:**
• **Maggi Special**: Add an egg and some vegetables to your maggi for a complete meal
• **Bread Omelette**: Beat eggs with onions and make a quick omelette sandwich
• **Dal Chawal**: Simple comfort food - just boil dal with turmeric and serve with rice
• **Poha**: Quick breakfast with flattened rice, onions, and basic spices

**Hostel Survival Tips:**
• Keep basic spices: salt, turmeric, garam masala, and red chili powder
• Onions and potatoes are versatile and last long
• Eggs are your best friend for protein
• Always have some maggi packets for emergency meals! 🍜

What ingredients do you have? I can suggest something specific! 😊";

/// Used when the provider answers but with no text.
pub const EMPTY_COMPLETION_TEXT: &str = "Hmm, I couldn't find an exact recipe, but here's a similar idea you can try! 🤔

Why don't you try making a simple stir-fry with whatever vegetables you have? Heat some oil, add your ingredients, and season with salt and garam masala. Cook for 10-15 minutes and you'll have a tasty meal! 😊";

/// Maximum number of lookup titles passed to the prompt.
const MAX_INSPIRATION: usize = 3;

/// Recipe generator combining the staple cache, lookup service and LLM provider.
pub struct RecipeGenerator {
    provider: Option<Arc<dyn LlmProvider>>,
    lookup: Option<Arc<dyn RecipeLookup>>,
}

impl RecipeGenerator {
    pub fn new(provider: Option<Arc<dyn LlmProvider>>, lookup: Option<Arc<dyn RecipeLookup>>) -> Self {
        Self { provider, lookup }
    }

    /// Build from the environment.
    ///
    /// A missing provider key does not fail construction: each request then
    /// returns the fallback, matching how the hosted function behaves.
    pub fn from_env() -> Self {
        let provider = match create_provider_from_env() {
            Ok(p) => {
                tracing::info!(
                    provider = p.provider_name(),
                    model = p.model_name(),
                    "recipe generator provider configured"
                );
                Some(p)
            }
            Err(e) => {
                tracing::warn!(error = %e, "recipe generator has no provider, requests will fall back");
                None
            }
        };

        let lookup = SpoonacularClient::from_env().map(|c| Arc::new(c) as Arc<dyn RecipeLookup>);
        if lookup.is_none() {
            tracing::debug!("SPOONACULAR_API_KEY not set, skipping recipe lookup");
        }

        Self::new(provider, lookup)
    }

    pub fn has_provider(&self) -> bool {
        self.provider.is_some()
    }

    /// Titles from the lookup service, or nothing if it is missing or fails.
    async fn inspiration(&self, global_ingredients: &[String]) -> Vec<String> {
        let Some(lookup) = &self.lookup else {
            return Vec::new();
        };
        if global_ingredients.is_empty() {
            return Vec::new();
        }

        match lookup.find_by_ingredients(global_ingredients).await {
            Ok(recipes) => recipes
                .into_iter()
                .take(MAX_INSPIRATION)
                .map(|r| r.title)
                .collect(),
            Err(e) => {
                tracing::warn!(error = %e, "recipe lookup failed, continuing without inspiration");
                Vec::new()
            }
        }
    }

    /// Run the generation pipeline for one request.
    pub async fn generate(&self, request: &GenerationRequest) -> GenerationOutcome {
        let Some(provider) = &self.provider else {
            return fallback("generative provider API key not configured");
        };

        if let Some(cached) = cache::find_cached(&request.ingredients) {
            tracing::debug!(key = cached.key, "hostel cache hit");
            return GenerationOutcome::Recipe(cached.render());
        }

        let global_ingredients = to_global_all(&request.ingredients);
        let inspiration = self.inspiration(&global_ingredients).await;
        let prompt = prompt::render_recipe_prompt(request, &inspiration);

        tracing::debug!(
            provider = provider.provider_name(),
            model = provider.model_name(),
            ingredients = request.ingredients.len(),
            inspiration = inspiration.len(),
            "calling recipe provider"
        );

        let text = match provider.complete(&prompt).await {
            Ok(text) => text,
            Err(e) => {
                tracing::error!(error = %e, provider = provider.provider_name(), "recipe provider failed");
                return fallback(&e.to_string());
            }
        };

        let text = if text.trim().is_empty() {
            EMPTY_COMPLETION_TEXT.to_string()
        } else {
            text
        };

        GenerationOutcome::Recipe(localize_text(&text))
    }
}

fn fallback(error: &str) -> GenerationOutcome {
    GenerationOutcome::Fallback {
        text: FALLBACK_TEXT.to_string(),
        error: error.to_string(),
    }
}

#[async_trait]
impl RemoteGenerator for RecipeGenerator {
    async fn generate(&self, request: &GenerationRequest) -> GenerationOutcome {
        RecipeGenerator::generate(self, request).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::llm::FakeProvider;
    use crate::lookup::MockLookup;

    fn request(ingredients: &[&str]) -> GenerationRequest {
        GenerationRequest::new(ingredients.iter().map(|s| s.to_string()).collect())
    }

    #[tokio::test]
    async fn test_missing_provider_falls_back() {
        let generator = RecipeGenerator::new(None, None);
        match generator.generate(&request(&["maggi"])).await {
            GenerationOutcome::Fallback { text, error } => {
                assert_eq!(text, FALLBACK_TEXT);
                assert!(error.contains("not configured"));
            }
            other => panic!("unexpected outcome: {other:?}"),
        }
    }

    #[tokio::test]
    async fn test_cache_hit_skips_provider() {
        let provider = Arc::new(FakeProvider::with_response("", "generated"));
        let generator = RecipeGenerator::new(Some(provider.clone()), None);

        let outcome = generator.generate(&request(&["maggi", "egg"])).await;
        assert!(outcome.text().starts_with("**Hostel Special Maggi**"));
        assert_eq!(provider.call_count(), 0);
    }

    #[tokio::test]
    async fn test_generated_text_is_localized() {
        let provider = Arc::new(FakeProvider::with_response(
            "",
            "**Potato Fry**\nFry the potato with onion and turmeric.",
        ));
        let generator = RecipeGenerator::new(Some(provider), None);

        let outcome = generator.generate(&request(&["aloo", "pyaz"])).await;
        assert_eq!(
            outcome,
            GenerationOutcome::Recipe("**aloo Fry**\nFry the aloo with pyaz and haldi.".to_string())
        );
    }

    #[tokio::test]
    async fn test_lookup_titles_reach_prompt() {
        let provider = Arc::new(FakeProvider::with_response("", "ok"));
        let lookup = Arc::new(MockLookup::with_titles(&["Aloo Gobi", "Jeera Rice", "Dum Aloo", "Extra"]));
        let generator = RecipeGenerator::new(Some(provider.clone()), Some(lookup));

        generator.generate(&request(&["aloo", "rice"])).await;
        let prompt = provider.last_prompt().unwrap();
        assert!(prompt.contains("Inspiration from real recipes: Aloo Gobi, Jeera Rice, Dum Aloo\n"));
        assert!(prompt.contains("LOCAL INDIAN ingredients: aloo, rice."));
    }

    #[tokio::test]
    async fn test_lookup_failure_is_ignored() {
        let provider = Arc::new(FakeProvider::with_response("", "still cooking"));
        let lookup = Arc::new(MockLookup::failing("402 payment required"));
        let generator = RecipeGenerator::new(Some(provider.clone()), Some(lookup));

        let outcome = generator.generate(&request(&["rice", "egg"])).await;
        assert_eq!(outcome, GenerationOutcome::Recipe("still cooking".to_string()));
        assert_eq!(provider.call_count(), 1);
        assert!(!provider.last_prompt().unwrap().contains("Inspiration"));
    }

    #[tokio::test]
    async fn test_provider_error_falls_back() {
        let provider = Arc::new(FakeProvider::failing("quota exceeded"));
        let generator = RecipeGenerator::new(Some(provider), None);

        match generator.generate(&request(&["rice", "egg"])).await {
            GenerationOutcome::Fallback { text, error } => {
                assert_eq!(text, FALLBACK_TEXT);
                assert!(error.contains("quota exceeded"));
            }
            other => panic!("unexpected outcome: {other:?}"),
        }
    }

    #[tokio::test]
    async fn test_empty_completion_uses_stir_fry_suggestion() {
        let provider = Arc::new(FakeProvider::with_response("", "   "));
        let generator = RecipeGenerator::new(Some(provider), None);

        let outcome = generator.generate(&request(&["rice", "egg"])).await;
        assert!(outcome.is_recipe());
        assert!(outcome.text().starts_with("Hmm, I couldn't find an exact recipe"));
    }
}
