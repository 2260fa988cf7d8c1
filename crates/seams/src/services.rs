//! The two domain operations every integration seam exposes.
//!
//! Both are plain synchronous functions over serde models, so the REST routes, the tool
//! systems and the CLI all share the same request and response shapes.
pub mod calculator;
pub mod weather;

pub use calculator::{calculate, CalculationRequest, CalculationResponse, Operation};
pub use weather::{lookup_weather, Units, WeatherForecast, WeatherQuery, WeatherResponse};
