//! HTTP client for a hosted `/generate-recipe` endpoint.

use std::time::Duration;

use async_trait::async_trait;

use super::RemoteGenerator;
use crate::error::ConfigError;
use crate::types::{GenerateRecipeError, GenerateRecipeResponse, GenerationOutcome, GenerationRequest};

/// The endpoint answered with an error but no fallback text.
pub const GENERATOR_TROUBLE_TEXT: &str = "I'm having trouble with my recipe generator right now! Let me give you one of my tried-and-tested favorites instead. 😊";

/// The endpoint could not be reached or answered with garbage.
pub const CONNECTION_TROUBLE_TEXT: &str = "Sorry, I'm having trouble connecting to my recipe brain! 😅 But I can still help with some basic recipes. What specific dish are you thinking of?";

/// Builder for `HttpGenerator`.
#[derive(Debug, Clone)]
pub struct HttpGeneratorBuilder {
    endpoint: String,
    timeout: Duration,
}

impl HttpGeneratorBuilder {
    pub fn new(endpoint: impl Into<String>) -> Self {
        Self {
            endpoint: endpoint.into(),
            timeout: Duration::from_secs(60),
        }
    }

    /// Set the request timeout. Generation is slow, so the default is generous.
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    pub fn build(self) -> Result<HttpGenerator, ConfigError> {
        let endpoint = url::Url::parse(&self.endpoint).map_err(|_| ConfigError::InvalidValue {
            name: "endpoint".to_string(),
            value: self.endpoint.clone(),
        })?;

        let client = reqwest::Client::builder().timeout(self.timeout).build()?;

        Ok(HttpGenerator { endpoint, client })
    }
}

/// Calls a hosted recipe generator over HTTP.
#[derive(Debug)]
pub struct HttpGenerator {
    endpoint: url::Url,
    client: reqwest::Client,
}

impl HttpGenerator {
    pub fn builder(endpoint: impl Into<String>) -> HttpGeneratorBuilder {
        HttpGeneratorBuilder::new(endpoint)
    }

    pub fn endpoint(&self) -> &str {
        self.endpoint.as_str()
    }

    async fn call(&self, request: &GenerationRequest) -> Result<GenerationOutcome, reqwest::Error> {
        let response = self
            .client
            .post(self.endpoint.clone())
            .json(request)
            .send()
            .await?;

        let status = response.status();
        let body = response.text().await?;

        if status.is_success() {
            return Ok(match serde_json::from_str::<GenerateRecipeResponse>(&body) {
                Ok(parsed) => GenerationOutcome::Recipe(parsed.recipe),
                Err(e) => {
                    tracing::warn!(error = %e, "generator returned an unreadable success body");
                    GenerationOutcome::Unavailable(CONNECTION_TROUBLE_TEXT.to_string())
                }
            });
        }

        let outcome = match serde_json::from_str::<GenerateRecipeError>(&body) {
            Ok(GenerateRecipeError {
                error,
                fallback: Some(fallback),
            }) => {
                tracing::warn!(status = %status, error = %error, "generator reported failure");
                GenerationOutcome::Fallback {
                    text: fallback,
                    error,
                }
            }
            Ok(GenerateRecipeError { error, fallback: None }) => {
                tracing::warn!(status = %status, error = %error, "generator failed without fallback");
                GenerationOutcome::Unavailable(GENERATOR_TROUBLE_TEXT.to_string())
            }
            Err(_) => {
                tracing::warn!(status = %status, "generator failed with an unreadable body");
                GenerationOutcome::Unavailable(GENERATOR_TROUBLE_TEXT.to_string())
            }
        };

        Ok(outcome)
    }
}

#[async_trait]
impl RemoteGenerator for HttpGenerator {
    async fn generate(&self, request: &GenerationRequest) -> GenerationOutcome {
        match self.call(request).await {
            Ok(outcome) => outcome,
            Err(e) => {
                tracing::error!(endpoint = %self.endpoint, error = %e, "generator request failed");
                GenerationOutcome::Unavailable(CONNECTION_TROUBLE_TEXT.to_string())
            }
        }
    }
}
