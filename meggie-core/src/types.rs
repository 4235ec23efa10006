use serde::{Deserialize, Serialize};

/// Constraints sent to the recipe generator.
///
/// Field names match the JSON contract of `POST /generate-recipe`. Empty strings
/// are treated the same as absent values.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub struct GenerationRequest {
    #[serde(default)]
    pub ingredients: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub preferences: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub budget: Option<String>,
    /// Target cooking time in minutes, e.g. "15".
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub time: Option<String>,
}

impl GenerationRequest {
    pub fn new(ingredients: Vec<String>) -> Self {
        Self {
            ingredients,
            ..Default::default()
        }
    }

    pub fn preferences(&self) -> Option<&str> {
        non_blank(&self.preferences)
    }

    pub fn budget(&self) -> Option<&str> {
        non_blank(&self.budget)
    }

    pub fn time(&self) -> Option<&str> {
        non_blank(&self.time)
    }
}

fn non_blank(value: &Option<String>) -> Option<&str> {
    value.as_deref().map(str::trim).filter(|v| !v.is_empty())
}

/// Result of one generation attempt.
///
/// Success and failure are tagged explicitly so callers never have to sniff
/// the text for error-shaped wording.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GenerationOutcome {
    /// A recipe produced by the generator (cache, provider, or its own stand-in).
    Recipe(String),
    /// The generator failed and supplied user-facing fallback text.
    /// `error` is for logs only and must not be shown to the user.
    Fallback { text: String, error: String },
    /// The generator could not be reached at all.
    Unavailable(String),
}

impl GenerationOutcome {
    /// The user-facing text carried by this outcome.
    pub fn text(&self) -> &str {
        match self {
            GenerationOutcome::Recipe(text) => text,
            GenerationOutcome::Fallback { text, .. } => text,
            GenerationOutcome::Unavailable(text) => text,
        }
    }

    pub fn is_recipe(&self) -> bool {
        matches!(self, GenerationOutcome::Recipe(_))
    }
}

/// Success body of `POST /generate-recipe` (HTTP 200).
#[derive(Debug, Clone, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub struct GenerateRecipeResponse {
    pub recipe: String,
}

/// Failure body of `POST /generate-recipe` (HTTP 500).
#[derive(Debug, Clone, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub struct GenerateRecipeError {
    pub error: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub fallback: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_request_accepts_missing_and_empty_fields() {
        let request: GenerationRequest =
            serde_json::from_str(r#"{"ingredients": ["rice"], "preferences": "", "time": "15"}"#)
                .unwrap();
        assert_eq!(request.ingredients, vec!["rice"]);
        assert_eq!(request.preferences(), None);
        assert_eq!(request.budget(), None);
        assert_eq!(request.time(), Some("15"));
    }

    #[test]
    fn test_request_omits_absent_fields() {
        let json = serde_json::to_value(GenerationRequest::new(vec!["egg".to_string()])).unwrap();
        assert_eq!(json, serde_json::json!({"ingredients": ["egg"]}));
    }

    #[test]
    fn test_outcome_text() {
        let outcome = GenerationOutcome::Fallback {
            text: "try dal".to_string(),
            error: "boom".to_string(),
        };
        assert_eq!(outcome.text(), "try dal");
        assert!(!outcome.is_recipe());
    }
}
