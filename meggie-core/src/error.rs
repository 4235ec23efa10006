use thiserror::Error;

/// Errors from the third-party ingredient lookup service.
#[derive(Error, Debug)]
pub enum LookupError {
    #[error("Invalid URL: {0}")]
    InvalidUrl(String),

    #[error("HTTP request failed: {0}")]
    RequestFailed(#[from] reqwest::Error),

    #[error("Lookup service returned HTTP {0}")]
    Status(u16),

    #[error("Invalid lookup response: {0}")]
    InvalidResponse(String),
}

/// Missing or malformed configuration.
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Invalid value for {name}: {value}")]
    InvalidValue { name: String, value: String },

    #[error("Failed to build HTTP client: {0}")]
    HttpClient(#[from] reqwest::Error),
}
