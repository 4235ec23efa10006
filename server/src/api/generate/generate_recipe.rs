use crate::AppState;
use axum::extract::rejection::JsonRejection;
use axum::extract::State;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use meggie_core::generator::FALLBACK_TEXT;
use meggie_core::{GenerateRecipeError, GenerateRecipeResponse, GenerationOutcome, GenerationRequest};

#[utoipa::path(
    post,
    path = "/generate-recipe",
    tag = "generate",
    request_body(
        content = GenerationRequest,
        example = json!({"ingredients": ["rice", "egg"], "preferences": "spicy ", "time": "15"})
    ),
    responses(
        (status = 200, description = "Generated recipe", body = GenerateRecipeResponse),
        (status = 500, description = "Generation failed; fallback text is safe to show", body = GenerateRecipeError)
    )
)]
pub async fn generate_recipe(
    State(state): State<AppState>,
    payload: Result<Json<GenerationRequest>, JsonRejection>,
) -> Response {
    let request = match payload {
        Ok(Json(request)) => request,
        Err(rejection) => {
            tracing::warn!(error = %rejection.body_text(), "unreadable generate-recipe body");
            return failure(rejection.body_text(), FALLBACK_TEXT.to_string());
        }
    };

    tracing::info!(
        ingredients = request.ingredients.len(),
        preferences = request.preferences().unwrap_or(""),
        budget = request.budget().unwrap_or(""),
        time = request.time().unwrap_or(""),
        "generating recipe"
    );

    outcome_response(state.generator.generate(&request).await)
}

/// Map a generation outcome onto the wire contract.
pub fn outcome_response(outcome: GenerationOutcome) -> Response {
    match outcome {
        GenerationOutcome::Recipe(recipe) => {
            (StatusCode::OK, Json(GenerateRecipeResponse { recipe })).into_response()
        }
        GenerationOutcome::Fallback { text, error } => failure(error, text),
        GenerationOutcome::Unavailable(text) => failure("recipe generator unavailable".to_string(), text),
    }
}

fn failure(error: String, fallback: String) -> Response {
    (
        StatusCode::INTERNAL_SERVER_ERROR,
        Json(GenerateRecipeError {
            error,
            fallback: Some(fallback),
        }),
    )
        .into_response()
}
