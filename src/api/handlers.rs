use axum::extract::{Json, State};
use serde_json::json;
use tracing::{error, info};

use crate::api::types::{ChatRequest, ChatResponse};
use crate::api::AppState;
use crate::error::GatewayError;

pub async fn health() -> Json<serde_json::Value> {
    Json(json!({ "status": "Backend is running" }))
}

pub async fn chat(
    State(state): State<AppState>,
    Json(req): Json<ChatRequest>,
) -> Result<Json<ChatResponse>, GatewayError> {
    info!(turns = req.history.len(), "chat request");

    match state.model.reply(&req.history, &req.message).await {
        Ok(text) => Ok(Json(ChatResponse { response: text })),
        Err(err) => {
            error!(%err, "chat request failed");
            Err(err)
        }
    }
}
