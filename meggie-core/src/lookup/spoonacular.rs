//! Spoonacular `findByIngredients` client.

use std::time::Duration;

use async_trait::async_trait;

use super::{LookupRecipe, RecipeLookup};
use crate::error::LookupError;

const DEFAULT_BASE_URL: &str = "https://api.spoonacular.com";

/// How many suggestions to ask for.
const RESULT_COUNT: u32 = 3;

/// Spoonacular recipe lookup.
#[derive(Debug)]
pub struct SpoonacularClient {
    api_key: String,
    base_url: String,
    timeout: Duration,
    client: reqwest::Client,
}

impl SpoonacularClient {
    pub fn new(api_key: String) -> Self {
        Self {
            api_key,
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout: Duration::from_secs(10),
            client: reqwest::Client::new(),
        }
    }

    /// Build a client from `SPOONACULAR_API_KEY`, or `None` when it is unset.
    ///
    /// `MEGGIE_SPOONACULAR_BASE_URL` overrides the API root.
    pub fn from_env() -> Option<Self> {
        let api_key = std::env::var("SPOONACULAR_API_KEY")
            .ok()
            .filter(|k| !k.trim().is_empty())?;
        let mut client = Self::new(api_key);
        if let Ok(base_url) = std::env::var("MEGGIE_SPOONACULAR_BASE_URL") {
            client = client.with_base_url(base_url);
        }
        Some(client)
    }

    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into().trim_end_matches('/').to_string();
        self
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    fn search_url(&self, ingredients: &[String]) -> Result<url::Url, LookupError> {
        let mut url = url::Url::parse(&format!("{}/recipes/findByIngredients", self.base_url))
            .map_err(|e| LookupError::InvalidUrl(e.to_string()))?;
        url.query_pairs_mut()
            .append_pair("ingredients", &ingredients.join(","))
            .append_pair("number", &RESULT_COUNT.to_string())
            .append_pair("apiKey", &self.api_key);
        Ok(url)
    }
}

#[async_trait]
impl RecipeLookup for SpoonacularClient {
    async fn find_by_ingredients(
        &self,
        ingredients: &[String],
    ) -> Result<Vec<LookupRecipe>, LookupError> {
        let url = self.search_url(ingredients)?;

        tracing::debug!(ingredients = %ingredients.join(","), "lookup: searching recipes");
        let response = self
            .client
            .get(url)
            .timeout(self.timeout)
            .send()
            .await
            .map_err(|e| LookupError::RequestFailed(e.without_url()))?;

        if !response.status().is_success() {
            return Err(LookupError::Status(response.status().as_u16()));
        }

        let body = response
            .text()
            .await
            .map_err(|e| LookupError::RequestFailed(e.without_url()))?;

        serde_json::from_str(&body).map_err(|e| LookupError::InvalidResponse(e.to_string()))
    }
}
