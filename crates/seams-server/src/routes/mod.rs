pub mod calculator;
pub mod health;
pub mod tools;
pub mod weather;

use axum::Router;
use tower_http::cors::{Any, CorsLayer};

use crate::state::AppState;

pub fn configure(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .merge(health::routes(state.clone()))
        .merge(calculator::routes())
        .merge(weather::routes())
        .merge(tools::routes(state))
        .layer(cors)
}
