use async_trait::async_trait;
use serde_json::json;

use super::{decode_args, System};
use crate::errors::{AgentError, AgentResult};
use crate::models::content::Content;
use crate::models::tool::{Tool, ToolCall};
use crate::services::weather::{lookup_weather, WeatherQuery};

#[derive(Clone)]
pub struct WeatherSystem {
    tools: Vec<Tool>,
}

impl Default for WeatherSystem {
    fn default() -> Self {
        Self::new()
    }
}

impl WeatherSystem {
    pub fn new() -> Self {
        Self {
            tools: vec![Tool::new(
                "get_weather",
                "Get weather for location.\n\nReturns current conditions and, on request, a 3-day forecast.",
                json!({
                    "type": "object",
                    "properties": {
                        "location": {
                            "type": "string",
                            "description": "City name (e.g. 'NYC', 'London') or coordinates (e.g. '40.7,-74.0')"
                        },
                        "units": {
                            "type": "string",
                            "enum": ["celsius", "fahrenheit"],
                            "default": "celsius"
                        },
                        "include_forecast": {"type": "boolean", "default": false}
                    },
                    "required": ["location"]
                }),
            )],
        }
    }
}

#[async_trait]
impl System for WeatherSystem {
    fn name(&self) -> &str {
        "weather"
    }

    fn description(&self) -> &str {
        "Mock weather lookup"
    }

    fn instructions(&self) -> &str {
        "Use get_weather for any question about current or upcoming weather."
    }

    fn tools(&self) -> &[Tool] {
        &self.tools
    }

    async fn call(&self, tool_call: ToolCall) -> AgentResult<Vec<Content>> {
        match tool_call.name.as_str() {
            "get_weather" => {
                let query: WeatherQuery = decode_args(tool_call.arguments)?;
                let response = lookup_weather(&query)?;
                let value = serde_json::to_value(&response)
                    .map_err(|e| AgentError::Internal(e.to_string()))?;
                Ok(vec![Content::json(value)])
            }
            _ => Err(AgentError::ToolNotFound(tool_call.name)),
        }
    }
}
