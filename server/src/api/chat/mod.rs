pub mod send;

use crate::AppState;
use axum::routing::post;
use axum::Router;
use utoipa::OpenApi;

/// Returns the router for the chat endpoint
pub fn router() -> Router<AppState> {
    Router::new().route("/api/chat", post(send::send))
}

#[derive(OpenApi)]
#[openapi(
    paths(send::send),
    components(schemas(send::ChatRequest, send::ChatResponse))
)]
pub struct ApiDoc;
