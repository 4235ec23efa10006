//! LLM provider abstraction for recipe generation.
//!
//! The generator only needs "prompt in, text out", so providers (Gemini, Claude,
//! a fake for tests) are interchangeable behind the `LlmProvider` trait.

mod claude;
mod fake;
mod gemini;

pub use claude::ClaudeProvider;
pub use fake::FakeProvider;
pub use gemini::GeminiProvider;

use async_trait::async_trait;
use std::fmt;
use std::sync::Arc;
use std::time::Duration;
use thiserror::Error;

/// Default timeout for a single completion request.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

/// Error type for LLM operations.
#[derive(Debug, Error)]
pub enum LlmError {
    #[error("API request failed: {0}")]
    RequestFailed(String),

    #[error("API returned error: {status} - {message}")]
    ApiError { status: u16, message: String },

    #[error("Failed to parse response: {0}")]
    ParseError(String),

    #[error("Rate limited, retry after {retry_after_secs:?} seconds")]
    RateLimited { retry_after_secs: Option<u64> },

    #[error("Provider not configured: {0}")]
    NotConfigured(String),
}

/// Trait for LLM providers.
///
/// Implementations should be stateless and thread-safe. An `Ok` with empty text
/// means the model answered with nothing usable; callers decide what to do.
#[async_trait]
pub trait LlmProvider: Send + Sync + fmt::Debug {
    /// Send a prompt to the LLM and get a text response.
    async fn complete(&self, prompt: &str) -> Result<String, LlmError>;

    /// Get the provider name (e.g., "gemini", "claude", "fake").
    fn provider_name(&self) -> &'static str;

    /// Get the model name (e.g., "gemini-1.5-flash-latest").
    fn model_name(&self) -> &str;
}

fn env_timeout() -> Duration {
    std::env::var("MEGGIE_HTTP_TIMEOUT_SECS")
        .ok()
        .and_then(|v| v.parse().ok())
        .map(Duration::from_secs)
        .unwrap_or(DEFAULT_TIMEOUT)
}

/// Build the provider selected by the environment.
///
/// - `MEGGIE_LLM_PROVIDER`: "gemini" (default) | "claude" | "fake"
/// - `MEGGIE_LLM_MODEL`: model name (provider-specific)
/// - `GEMINI_API_KEY`, `MEGGIE_GEMINI_BASE_URL`: Gemini credentials/endpoint
/// - `ANTHROPIC_API_KEY`: Claude credentials
/// - `MEGGIE_HTTP_TIMEOUT_SECS`: per-request timeout (default 30)
///
/// A missing API key is `LlmError::NotConfigured`.
pub fn create_provider_from_env() -> Result<Arc<dyn LlmProvider>, LlmError> {
    let provider = std::env::var("MEGGIE_LLM_PROVIDER").unwrap_or_else(|_| "gemini".to_string());
    let model = std::env::var("MEGGIE_LLM_MODEL").ok();
    let timeout = env_timeout();

    match provider.as_str() {
        "gemini" => {
            let api_key = std::env::var("GEMINI_API_KEY")
                .map_err(|_| LlmError::NotConfigured("GEMINI_API_KEY not set".to_string()))?;
            let mut gemini = GeminiProvider::new(
                api_key,
                model.unwrap_or_else(|| gemini::DEFAULT_MODEL.to_string()),
            )
            .with_timeout(timeout);
            if let Ok(base_url) = std::env::var("MEGGIE_GEMINI_BASE_URL") {
                gemini = gemini.with_base_url(base_url);
            }
            Ok(Arc::new(gemini))
        }
        "claude" => {
            let api_key = std::env::var("ANTHROPIC_API_KEY")
                .map_err(|_| LlmError::NotConfigured("ANTHROPIC_API_KEY not set".to_string()))?;
            let claude = ClaudeProvider::new(
                api_key,
                model.unwrap_or_else(|| claude::DEFAULT_MODEL.to_string()),
            )
            .with_timeout(timeout);
            Ok(Arc::new(claude))
        }
        "fake" => Ok(Arc::new(FakeProvider::with_recipe_responses())),
        other => Err(LlmError::NotConfigured(format!(
            "Unknown provider: {}",
            other
        ))),
    }
}
