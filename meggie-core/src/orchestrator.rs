//! Response orchestration: one user message in, one Meggie reply out.
//!
//! Replies are chosen by a fixed precedence:
//! generated recipe > local recipe > generator fallback text > canned topic
//! reply > partial acknowledgement > onboarding text. Every stage is total, so `respond`
//! always produces a reply.

use std::sync::Arc;

use tracing::Instrument;

use crate::ingredients::{detect, DetectedIngredients};
use crate::recipes::{format_recipe, resolve_local};
use crate::remote::RemoteGenerator;
use crate::replies;
use crate::types::{GenerationOutcome, GenerationRequest};

/// Words that ask for a generated recipe even with fewer than two ingredients.
const GENERATION_TRIGGERS: &[&str] = &["recipe", "cook", "make"];

/// Which stage produced a reply. Recorded on the `respond` span.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReplySource {
    Generated,
    GeneratorFallback,
    LocalRecipe,
    Breakfast,
    Budget,
    EmptyKitchen,
    Acknowledgement,
    Onboarding,
}

impl ReplySource {
    pub fn as_str(&self) -> &'static str {
        match self {
            ReplySource::Generated => "generated",
            ReplySource::GeneratorFallback => "generator_fallback",
            ReplySource::LocalRecipe => "local_recipe",
            ReplySource::Breakfast => "breakfast",
            ReplySource::Budget => "budget",
            ReplySource::EmptyKitchen => "empty_kitchen",
            ReplySource::Acknowledgement => "acknowledgement",
            ReplySource::Onboarding => "onboarding",
        }
    }
}

/// A reply together with the stage that produced it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Reply {
    pub text: String,
    pub source: ReplySource,
}

impl Reply {
    fn new(text: impl Into<String>, source: ReplySource) -> Self {
        Self {
            text: text.into(),
            source,
        }
    }
}

/// Meggie herself: decides how to answer each chat message.
#[derive(Clone)]
pub struct Meggie {
    generator: Arc<dyn RemoteGenerator>,
}

impl Meggie {
    pub fn new(generator: Arc<dyn RemoteGenerator>) -> Self {
        Self { generator }
    }

    /// Produce Meggie's reply to one message.
    pub async fn respond(&self, message: &str) -> String {
        self.reply(message).await.text
    }

    /// Like `respond`, but also reports which stage answered.
    pub async fn reply(&self, message: &str) -> Reply {
        let span = tracing::info_span!(
            "respond",
            message_len = message.len(),
            detected = tracing::field::Empty,
            source = tracing::field::Empty,
        );

        async {
            let lower = message.to_lowercase();
            let detected = detect(message);
            tracing::Span::current().record("detected", tracing::field::display(&detected));

            let reply = self.choose(&lower, &detected).await;
            tracing::Span::current().record("source", reply.source.as_str());
            tracing::debug!("reply chosen");
            reply
        }
        .instrument(span)
        .await
    }

    async fn choose(&self, lower: &str, detected: &DetectedIngredients) -> Reply {
        let mut generator_fallback = None;

        if wants_generation(lower, detected) {
            let request = build_request(lower, detected);
            match self.generator.generate(&request).await {
                GenerationOutcome::Recipe(text) if !text.trim().is_empty() => {
                    return Reply::new(text, ReplySource::Generated);
                }
                GenerationOutcome::Fallback { text, error } if !text.trim().is_empty() => {
                    tracing::warn!(error = %error, "generator fell back");
                    generator_fallback = Some(text);
                }
                outcome => {
                    tracing::info!(
                        outcome = outcome_kind(&outcome),
                        "generator gave nothing usable, using local replies"
                    );
                }
            }
        }

        // A tried-and-tested local recipe beats the generator's generic fallback.
        if let Some(key) = resolve_local(detected) {
            return Reply::new(format_recipe(key.recipe()), ReplySource::LocalRecipe);
        }

        if let Some(text) = generator_fallback {
            return Reply::new(text, ReplySource::GeneratorFallback);
        }

        if lower.contains("breakfast") {
            return Reply::new(replies::BREAKFAST, ReplySource::Breakfast);
        }
        if ["budget", "cheap", "₹50", "money"]
            .iter()
            .any(|w| lower.contains(w))
        {
            return Reply::new(replies::BUDGET, ReplySource::Budget);
        }
        if ["no ingredients", "nothing", "empty"]
            .iter()
            .any(|w| lower.contains(w))
        {
            return Reply::new(replies::EMPTY_KITCHEN, ReplySource::EmptyKitchen);
        }

        if !detected.is_empty() {
            return Reply::new(
                replies::partial_acknowledgement(detected),
                ReplySource::Acknowledgement,
            );
        }

        Reply::new(replies::DEFAULT, ReplySource::Onboarding)
    }
}

fn outcome_kind(outcome: &GenerationOutcome) -> &'static str {
    match outcome {
        GenerationOutcome::Recipe(_) => "empty_recipe",
        GenerationOutcome::Fallback { .. } => "empty_fallback",
        GenerationOutcome::Unavailable(_) => "unavailable",
    }
}

fn wants_generation(lower: &str, detected: &DetectedIngredients) -> bool {
    detected.len() >= 2 || GENERATION_TRIGGERS.iter().any(|w| lower.contains(w))
}

/// Pull generation constraints out of an already lower-cased message.
pub fn build_request(lower: &str, detected: &DetectedIngredients) -> GenerationRequest {
    let mut preferences = String::new();
    if lower.contains("vegetarian") || lower.contains("veg") {
        preferences.push_str("vegetarian ");
    }
    if lower.contains("spicy") {
        preferences.push_str("spicy ");
    }
    if lower.contains("mild") {
        preferences.push_str("mild ");
    }

    let time = (lower.contains("quick") || lower.contains("fast")).then(|| "15".to_string());
    let budget = (lower.contains("budget") || lower.contains("cheap")).then(|| "₹50".to_string());

    GenerationRequest {
        ingredients: detected.keys(),
        preferences: (!preferences.is_empty()).then_some(preferences),
        budget,
        time,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::remote::MockGenerator;

    fn meggie(generator: &Arc<MockGenerator>) -> Meggie {
        Meggie::new(generator.clone())
    }

    #[tokio::test]
    async fn test_generated_recipe_wins() {
        let generator = Arc::new(MockGenerator::recipe("Egg Fried Rice!"));
        let reply = meggie(&generator).reply("I have rice and eggs, quick please").await;

        assert_eq!(reply, Reply::new("Egg Fried Rice!", ReplySource::Generated));
        let requests = generator.requests();
        assert_eq!(requests.len(), 1);
        assert_eq!(requests[0].ingredients, vec!["rice", "egg"]);
        assert_eq!(requests[0].time.as_deref(), Some("15"));
        assert_eq!(requests[0].preferences, None);
        assert_eq!(requests[0].budget, None);
    }

    #[tokio::test]
    async fn test_fallback_text_is_surfaced() {
        let generator = Arc::new(MockGenerator::fallback("Try dal chawal!"));
        let reply = meggie(&generator).reply("dal and onion").await;

        assert_eq!(generator.requests().len(), 1);
        assert_eq!(reply, Reply::new("Try dal chawal!", ReplySource::GeneratorFallback));
    }

    #[tokio::test]
    async fn test_local_recipe_beats_generator_fallback() {
        let generator = Arc::new(MockGenerator::fallback("Try dal chawal!"));
        let reply = meggie(&generator).reply("I have rice and eggs").await;

        assert_eq!(generator.requests().len(), 1);
        assert_eq!(reply.source, ReplySource::LocalRecipe);
        assert_eq!(reply.text, format_recipe(crate::recipes::RecipeKey::EggRice.recipe()));
    }

    #[tokio::test]
    async fn test_fallback_beats_canned_replies() {
        let generator = Arc::new(MockGenerator::fallback("Try dal chawal!"));
        let reply = meggie(&generator).respond("cook a cheap breakfast").await;
        assert_eq!(reply, "Try dal chawal!");
    }

    #[tokio::test]
    async fn test_unavailable_falls_back_to_local_recipe() {
        let generator = Arc::new(MockGenerator::unavailable());
        let reply = meggie(&generator).reply("rice and tomato").await;

        assert_eq!(reply.source, ReplySource::LocalRecipe);
        assert!(reply.text.starts_with("Ooh, perfect! Let's make Aromatic Hostel-Style Tomato Rice!"));
    }

    #[tokio::test]
    async fn test_empty_recipe_is_ignored() {
        let generator = Arc::new(MockGenerator::recipe("  "));
        let reply = meggie(&generator).reply("cook me something with maggi").await;
        assert_eq!(reply.source, ReplySource::LocalRecipe);
    }

    #[tokio::test]
    async fn test_single_ingredient_skips_generator() {
        let generator = Arc::new(MockGenerator::recipe("should not be used"));
        let reply = meggie(&generator).reply("I only have eggs").await;

        assert!(generator.requests().is_empty());
        assert_eq!(reply.source, ReplySource::Acknowledgement);
        assert!(reply.text.contains("**Egg magic:**"));
    }

    #[tokio::test]
    async fn test_canned_replies() {
        let generator = Arc::new(MockGenerator::unavailable());
        let meggie = meggie(&generator);

        assert_eq!(meggie.respond("any breakfast ideas?").await, replies::BREAKFAST);
        assert_eq!(meggie.respond("I have no money").await, replies::BUDGET);
        assert_eq!(meggie.respond("my shelf is empty").await, replies::EMPTY_KITCHEN);
        assert_eq!(meggie.respond("").await, replies::DEFAULT);
        assert!(generator.requests().is_empty());
    }

    #[tokio::test]
    async fn test_breakfast_beats_budget() {
        let generator = Arc::new(MockGenerator::unavailable());
        let reply = meggie(&generator).respond("cheap breakfast").await;
        assert_eq!(reply, replies::BREAKFAST);
    }

    #[test]
    fn test_build_request_preferences() {
        let lower = "quick cheap spicy veg recipe";
        let request = build_request(lower, &detect(lower));

        assert!(request.ingredients.is_empty());
        assert_eq!(request.preferences.as_deref(), Some("vegetarian spicy "));
        assert_eq!(request.time.as_deref(), Some("15"));
        assert_eq!(request.budget.as_deref(), Some("₹50"));
    }

    #[test]
    fn test_build_request_no_constraints() {
        let request = build_request("make something", &detect("make something"));
        assert_eq!(request, GenerationRequest::default());
    }
}
