use axum::{
    extract::{Path, State},
    routing::{get, post},
    Json, Router,
};
use seams::models::content::Content;
use seams::models::tool::{ToolCall, ToolDescriptor};
use serde::Serialize;
use serde_json::Value;
use tracing::info;

use crate::error::ApiError;
use crate::state::AppState;

#[derive(Debug, Serialize)]
struct ToolCallResponse {
    tool: String,
    content: Vec<Content>,
}

async fn list_tools(State(state): State<AppState>) -> Json<Vec<ToolDescriptor>> {
    Json(state.registry.descriptors())
}

async fn call_tool(
    State(state): State<AppState>,
    Path(name): Path<String>,
    Json(arguments): Json<Value>,
) -> Result<Json<ToolCallResponse>, ApiError> {
    info!(tool = %name, "tool call request");
    let content = state
        .registry
        .call(ToolCall::new(name.clone(), arguments))
        .await?;
    Ok(Json(ToolCallResponse {
        tool: name,
        content,
    }))
}

pub fn routes(state: AppState) -> Router {
    Router::new()
        .route("/tools", get(list_tools))
        .route("/tools/:name", post(call_tool))
        .with_state(state)
}
