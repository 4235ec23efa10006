use crate::AppState;
use axum::extract::State;
use axum::Json;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Clone, Deserialize, ToSchema)]
pub struct ChatRequest {
    pub message: String,
}

#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct ChatResponse {
    pub reply: String,
    /// Which stage answered, e.g. "generated" or "local_recipe".
    pub source: String,
}

#[utoipa::path(
    post,
    path = "/api/chat",
    tag = "chat",
    request_body(content = ChatRequest, example = json!({"message": "I have rice and eggs, quick please"})),
    responses(
        (status = 200, description = "Meggie's reply", body = ChatResponse)
    )
)]
pub async fn send(State(state): State<AppState>, Json(req): Json<ChatRequest>) -> Json<ChatResponse> {
    let reply = state.meggie.reply(&req.message).await;

    Json(ChatResponse {
        reply: reply.text,
        source: reply.source.as_str().to_string(),
    })
}
