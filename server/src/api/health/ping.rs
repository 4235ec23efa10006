use crate::AppState;
use axum::extract::State;
use axum::{response::IntoResponse, Json};
use serde::Serialize;
use utoipa::ToSchema;

#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct PingResponse {
    pub message: String,
    /// Whether a generative provider is configured. Without one every
    /// generation request returns the fallback.
    pub provider_configured: bool,
}

#[utoipa::path(
    get,
    path = "/api/ping",
    tag = "health",
    responses(
        (status = 200, description = "Ping response", body = PingResponse)
    )
)]
pub async fn ping(State(state): State<AppState>) -> impl IntoResponse {
    Json(PingResponse {
        message: "ping".to_string(),
        provider_configured: state.generator.has_provider(),
    })
}
