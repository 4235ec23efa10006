//! The boundary between the chat orchestrator and whatever generates recipes.
//!
//! The orchestrator talks to a `RemoteGenerator`; in production that is either
//! the in-process `RecipeGenerator` or an `HttpGenerator` pointed at a hosted
//! `/generate-recipe` endpoint.

mod http;

pub use http::{HttpGenerator, HttpGeneratorBuilder, CONNECTION_TROUBLE_TEXT, GENERATOR_TROUBLE_TEXT};

use std::sync::Mutex;

use async_trait::async_trait;

use crate::types::{GenerationOutcome, GenerationRequest};

/// Something that turns ingredient constraints into recipe text.
///
/// Implementations must not fail: every error is folded into the outcome.
#[async_trait]
pub trait RemoteGenerator: Send + Sync {
    async fn generate(&self, request: &GenerationRequest) -> GenerationOutcome;
}

/// Mock generator for testing. Returns a fixed outcome and records requests.
pub struct MockGenerator {
    outcome: GenerationOutcome,
    requests: Mutex<Vec<GenerationRequest>>,
}

impl MockGenerator {
    pub fn new(outcome: GenerationOutcome) -> Self {
        Self {
            outcome,
            requests: Mutex::new(Vec::new()),
        }
    }

    pub fn recipe(text: &str) -> Self {
        Self::new(GenerationOutcome::Recipe(text.to_string()))
    }

    pub fn fallback(text: &str) -> Self {
        Self::new(GenerationOutcome::Fallback {
            text: text.to_string(),
            error: "mock failure".to_string(),
        })
    }

    pub fn unavailable() -> Self {
        Self::new(GenerationOutcome::Unavailable(
            CONNECTION_TROUBLE_TEXT.to_string(),
        ))
    }

    /// All requests received so far, oldest first.
    pub fn requests(&self) -> Vec<GenerationRequest> {
        self.requests
            .lock()
            .map(|r| r.clone())
            .unwrap_or_default()
    }
}

#[async_trait]
impl RemoteGenerator for MockGenerator {
    async fn generate(&self, request: &GenerationRequest) -> GenerationOutcome {
        if let Ok(mut requests) = self.requests.lock() {
            requests.push(request.clone());
        }
        self.outcome.clone()
    }
}
