use anyhow::Result;
use serde_json::json;

use seams::models::tool::ToolCall;
use seams::services::calculator::Operation;

use crate::config::CliConfig;

pub async fn execute(operation: Operation, a: f64, b: f64, config: &CliConfig) -> Result<()> {
    let call = ToolCall::new(
        "calculate",
        json!({"operation": operation, "a": a, "b": b}),
    );
    super::invoke(call, config).await
}
