pub mod generate_recipe;

use crate::AppState;
use axum::routing::post;
use axum::Router;
use utoipa::OpenApi;

/// Returns the router for the hosted generator endpoint
pub fn router() -> Router<AppState> {
    Router::new().route("/generate-recipe", post(generate_recipe::generate_recipe))
}

#[derive(OpenApi)]
#[openapi(
    paths(generate_recipe::generate_recipe),
    components(schemas(
        meggie_core::GenerationRequest,
        meggie_core::GenerateRecipeResponse,
        meggie_core::GenerateRecipeError,
    ))
)]
pub struct ApiDoc;
