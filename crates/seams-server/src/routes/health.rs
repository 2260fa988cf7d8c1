use axum::{extract::State, routing::get, Json, Router};
use serde_json::{json, Value};

use crate::state::AppState;

const SERVICE_NAME: &str = "seams";

async fn health() -> Json<Value> {
    Json(json!({ "status": "healthy", "service": SERVICE_NAME }))
}

async fn root(State(state): State<AppState>) -> Json<Value> {
    let systems: Vec<Value> = state
        .registry
        .systems()
        .iter()
        .map(|system| {
            json!({
                "name": system.name(),
                "description": system.description(),
                "instructions": system.instructions(),
            })
        })
        .collect();

    Json(json!({
        "service": SERVICE_NAME,
        "version": env!("CARGO_PKG_VERSION"),
        "operations": ["add", "subtract", "multiply", "divide"],
        "systems": systems,
        "endpoints": {
            "calculate": "POST /calculate",
            "weather": "POST /weather",
            "tools": "GET /tools",
            "call_tool": "POST /tools/{name}",
            "health": "GET /health"
        }
    }))
}

pub fn routes(state: AppState) -> Router {
    Router::new()
        .route("/", get(root))
        .route("/health", get(health))
        .with_state(state)
}
