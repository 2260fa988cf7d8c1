use anyhow::Result;

use seams::models::tool::ToolCall;
use seams::services::weather::{Units, WeatherQuery};

use crate::config::CliConfig;

pub async fn execute(
    location: String,
    units: Units,
    include_forecast: bool,
    config: &CliConfig,
) -> Result<()> {
    let query = WeatherQuery {
        location,
        units,
        include_forecast,
    };
    let call = ToolCall::new("get_weather", serde_json::to_value(query)?);
    super::invoke(call, config).await
}
