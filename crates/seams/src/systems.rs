mod calculator;
mod weather;

pub use calculator::CalculatorSystem;
pub use weather::WeatherSystem;

use async_trait::async_trait;
use serde_json::Value;
use tracing::{debug, warn};

use crate::errors::{AgentError, AgentResult};
use crate::models::content::Content;
use crate::models::message::{Message, ToolStatus};
use crate::models::tool::{Tool, ToolCall, ToolDescriptor};

/// Transport tag for tools served by a system living in this process
pub const IN_PROCESS_TRANSPORT: &str = "in-process";

/// Core trait that defines a system exposing tools an agent can call
#[async_trait]
pub trait System: Send + Sync {
    /// Get the name of the system
    fn name(&self) -> &str;

    /// Get the system description
    fn description(&self) -> &str;

    /// Get system instructions
    fn instructions(&self) -> &str;

    /// Get available tools
    fn tools(&self) -> &[Tool];

    /// Call a tool with the given arguments
    async fn call(&self, tool_call: ToolCall) -> AgentResult<Vec<Content>>;
}

/// The systems reachable from one client, in registration order
#[derive(Default)]
pub struct SystemRegistry {
    systems: Vec<Box<dyn System>>,
}

impl SystemRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// A registry with the calculator and weather systems
    pub fn with_defaults() -> Self {
        let mut registry = Self::new();
        registry.add_system(Box::new(CalculatorSystem::new()));
        registry.add_system(Box::new(WeatherSystem::new()));
        registry
    }

    pub fn add_system(&mut self, system: Box<dyn System>) {
        self.systems.push(system);
    }

    pub fn systems(&self) -> &[Box<dyn System>] {
        &self.systems
    }

    /// Every tool of every system, tagged with the system that serves it.
    ///
    /// Names are not de-duplicated: a tool exposed by two systems is listed twice.
    pub fn descriptors(&self) -> Vec<ToolDescriptor> {
        self.systems
            .iter()
            .flat_map(|system| {
                system.tools().iter().map(move |tool| {
                    ToolDescriptor::from(tool)
                        .with_provider(system.name())
                        .with_transport(IN_PROCESS_TRANSPORT)
                })
            })
            .collect()
    }

    /// The first registered system exposing `tool_name`
    pub fn system_for_tool(&self, tool_name: &str) -> Option<&dyn System> {
        self.systems
            .iter()
            .find(|system| system.tools().iter().any(|tool| tool.name == tool_name))
            .map(|v| &**v)
    }

    pub async fn call(&self, tool_call: ToolCall) -> AgentResult<Vec<Content>> {
        let system = self
            .system_for_tool(&tool_call.name)
            .ok_or_else(|| AgentError::ToolNotFound(tool_call.name.clone()))?;
        debug!(system = system.name(), tool = %tool_call.name, "dispatching tool call");
        system.call(tool_call).await
    }

    /// Call a tool and record the outcome as a trace message
    pub async fn dispatch(&self, tool_call: ToolCall) -> Message {
        let name = tool_call.name.clone();
        let result = self.call(tool_call).await;
        if let Err(err) = &result {
            warn!(tool = %name, error = %err, "tool call failed");
        }
        tool_message(&name, &result)
    }
}

/// A tool result as a trace message: content summaries joined by newlines, error status
/// when the call failed
pub fn tool_message(name: &str, result: &AgentResult<Vec<Content>>) -> Message {
    match result {
        Ok(contents) => {
            let text = contents
                .iter()
                .map(Content::summary)
                .collect::<Vec<_>>()
                .join("\n");
            Message::tool_result(name, text).with_status(ToolStatus::Success)
        }
        Err(err) => Message::tool_result(name, format!("Error: {}", err)).with_status(ToolStatus::Error),
    }
}

/// Pull a numeric argument out of a tool call
pub(crate) fn number_arg(arguments: &Value, key: &str) -> AgentResult<f64> {
    arguments
        .get(key)
        .and_then(Value::as_f64)
        .ok_or_else(|| AgentError::InvalidParameters(format!("{} parameter required", key)))
}

/// Decode the whole argument object into a request model
pub(crate) fn decode_args<T: serde::de::DeserializeOwned>(arguments: Value) -> AgentResult<T> {
    serde_json::from_value(arguments).map_err(|e| AgentError::InvalidParameters(e.to_string()))
}
