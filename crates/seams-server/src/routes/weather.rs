use axum::{routing::post, Json, Router};
use seams::services::weather::{lookup_weather, WeatherQuery, WeatherResponse};
use tracing::info;

use crate::error::ApiError;

async fn weather_handler(Json(query): Json<WeatherQuery>) -> Result<Json<WeatherResponse>, ApiError> {
    info!(location = %query.location, units = %query.units, "weather request");
    Ok(Json(lookup_weather(&query)?))
}

pub fn routes() -> Router {
    Router::new().route("/weather", post(weather_handler))
}
