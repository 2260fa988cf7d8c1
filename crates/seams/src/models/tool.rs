use serde::{Deserialize, Serialize};
use serde_json::Value;

/// A tool that can be used by a model.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Tool {
    /// The name of the tool
    pub name: String,
    /// A description of what the tool does
    pub description: String,
    /// A JSON Schema object describing the arguments the tool accepts
    pub input_schema: Value,
}

impl Tool {
    /// Create a new tool with the given name and description
    pub fn new<N, D>(name: N, description: D, input_schema: Value) -> Self
    where
        N: Into<String>,
        D: Into<String>,
    {
        Tool {
            name: name.into(),
            description: description.into(),
            input_schema,
        }
    }
}

/// A tool call request that a system can execute
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ToolCall {
    /// The name of the tool to execute
    pub name: String,
    /// The arguments for the execution
    pub arguments: Value,
}

impl ToolCall {
    /// Create a new ToolCall with the given name and arguments
    pub fn new<S: Into<String>>(name: S, arguments: Value) -> Self {
        Self {
            name: name.into(),
            arguments,
        }
    }
}

/// Display metadata for a tool enumerated from one of possibly several sources.
///
/// Every field is optional since remote manifests are not validated; the summary
/// renderer substitutes placeholders for whatever is missing.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct ToolDescriptor {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub provider: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub transport: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub endpoint: Option<String>,
}

impl ToolDescriptor {
    pub fn new<N, D>(name: N, description: D) -> Self
    where
        N: Into<String>,
        D: Into<String>,
    {
        ToolDescriptor {
            name: Some(name.into()),
            description: Some(description.into()),
            ..Default::default()
        }
    }

    pub fn with_provider<S: Into<String>>(mut self, provider: S) -> Self {
        self.provider = Some(provider.into());
        self
    }

    pub fn with_transport<S: Into<String>>(mut self, transport: S) -> Self {
        self.transport = Some(transport.into());
        self
    }

    pub fn with_endpoint<S: Into<String>>(mut self, endpoint: S) -> Self {
        self.endpoint = Some(endpoint.into());
        self
    }

    /// First line of the description, trimmed
    pub fn description_headline(&self) -> Option<&str> {
        self.description
            .as_deref()
            .map(|desc| desc.trim().lines().next().unwrap_or("").trim())
    }
}

impl From<&Tool> for ToolDescriptor {
    fn from(tool: &Tool) -> Self {
        ToolDescriptor::new(tool.name.clone(), tool.description.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_descriptor_from_tool() {
        let tool = Tool::new("add", "Add two numbers", json!({"type": "object"}));
        let descriptor = ToolDescriptor::from(&tool).with_provider("calculator");
        assert_eq!(descriptor.name.as_deref(), Some("add"));
        assert_eq!(descriptor.description.as_deref(), Some("Add two numbers"));
        assert_eq!(descriptor.provider.as_deref(), Some("calculator"));
        assert_eq!(descriptor.transport, None);
    }

    #[test]
    fn test_description_headline() {
        let descriptor = ToolDescriptor::new("get_weather", "\n  Get weather for location.\n\n  Args: ...");
        assert_eq!(descriptor.description_headline(), Some("Get weather for location."));

        let empty = ToolDescriptor::default();
        assert_eq!(empty.description_headline(), None);
    }

    #[test]
    fn test_descriptor_deserializes_partial_records() {
        let descriptor: ToolDescriptor = serde_json::from_value(json!({"name": "echo"})).unwrap();
        assert_eq!(descriptor.name.as_deref(), Some("echo"));
        assert_eq!(descriptor.description, None);
    }
}
