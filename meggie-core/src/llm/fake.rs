//! Fake LLM provider for testing.
//!
//! Returns canned recipe text based on prompt matching, so the generator
//! pipeline can be exercised without network access or API keys.

use super::{LlmError, LlmProvider};
use async_trait::async_trait;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Mutex;

/// A fake LLM provider for testing.
///
/// Responses are matched by checking whether the prompt contains a registered
/// substring, in registration order. Every prompt is recorded so tests can
/// assert on what the generator sent.
#[derive(Debug, Default)]
pub struct FakeProvider {
    /// (prompt substring, response) pairs, checked in order
    responses: Vec<(String, Result<String, String>)>,
    /// Response if no pattern matches
    default_response: Option<String>,
    prompts: Mutex<Vec<String>>,
    calls: AtomicUsize,
}

impl FakeProvider {
    /// Create a new FakeProvider with no registered responses.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a FakeProvider that returns a specific response for prompts containing a substring.
    pub fn with_response(prompt_contains: &str, response: &str) -> Self {
        Self::new().add_response(prompt_contains, response)
    }

    /// Create a FakeProvider that fails every call.
    pub fn failing(message: &str) -> Self {
        Self::new().add_error("", message)
    }

    /// Respond with `response` for prompts containing `prompt_contains`.
    pub fn add_response(mut self, prompt_contains: &str, response: &str) -> Self {
        self.responses
            .push((prompt_contains.to_lowercase(), Ok(response.to_string())));
        self
    }

    /// Fail with `message` for prompts containing `prompt_contains`.
    pub fn add_error(mut self, prompt_contains: &str, message: &str) -> Self {
        self.responses
            .push((prompt_contains.to_lowercase(), Err(message.to_string())));
        self
    }

    /// Set the default response when no pattern matches.
    pub fn with_default_response(mut self, response: &str) -> Self {
        self.default_response = Some(response.to_string());
        self
    }

    /// A provider with a generic hostel recipe for any prompt, used when
    /// `MEGGIE_LLM_PROVIDER=fake`.
    pub fn with_recipe_responses() -> Self {
        Self::new()
            .add_response(
                "egg",
                "**Masala Anda Bhurji**\n*Protein-packed and ready in minutes!*\n\n**Ingredients:**\n• 3 eggs\n• 1 onion\n• 1 tomato\n• salt and haldi\n\n**Step-by-Step Instructions:**\n1. Sauté the onion for 3 minutes.\n2. Add tomato and haldi, cook 2 minutes.\n3. Scramble in the eggs and season.",
            )
            .with_default_response(
                "**One-Pan Hostel Khichdi**\n*Comfort in a bowl!*\n\n**Ingredients:**\n• 1/2 cup rice\n• 1/2 cup dal\n• salt and haldi\n\n**Step-by-Step Instructions:**\n1. Rinse rice and dal together.\n2. Pressure cook with 3 cups water, salt and haldi for 3 whistles.\n3. Temper with jeera in ghee and serve hot.",
            )
    }

    /// Number of completions requested so far.
    pub fn call_count(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    /// The most recent prompt, if any.
    pub fn last_prompt(&self) -> Option<String> {
        self.prompts.lock().ok().and_then(|p| p.last().cloned())
    }
}

#[async_trait]
impl LlmProvider for FakeProvider {
    async fn complete(&self, prompt: &str) -> Result<String, LlmError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        if let Ok(mut prompts) = self.prompts.lock() {
            prompts.push(prompt.to_string());
        }

        let prompt_lower = prompt.to_lowercase();
        for (pattern, response) in &self.responses {
            if prompt_lower.contains(pattern.as_str()) {
                return response.clone().map_err(LlmError::RequestFailed);
            }
        }

        match &self.default_response {
            Some(response) => Ok(response.clone()),
            None => Err(LlmError::RequestFailed(format!(
                "FakeProvider: no response configured for prompt ({} chars)",
                prompt.len()
            ))),
        }
    }

    fn provider_name(&self) -> &'static str {
        "fake"
    }

    fn model_name(&self) -> &str {
        "fake-model"
    }
}
