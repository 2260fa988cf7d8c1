use axum::{routing::post, Json, Router};
use seams::services::calculator::{calculate, CalculationRequest, CalculationResponse};
use tracing::info;

async fn calculate_handler(Json(request): Json<CalculationRequest>) -> Json<CalculationResponse> {
    info!(operation = %request.operation, "calculate request");
    Json(calculate(&request))
}

pub fn routes() -> Router {
    Router::new().route("/calculate", post(calculate_handler))
}
