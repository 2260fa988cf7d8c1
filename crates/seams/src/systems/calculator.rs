use async_trait::async_trait;
use serde_json::json;

use super::{decode_args, number_arg, System};
use crate::errors::{AgentError, AgentResult};
use crate::models::content::Content;
use crate::models::tool::{Tool, ToolCall};
use crate::services::calculator::{calculate, CalculationRequest, Operation};

/// The calculator service as tools: the general `calculate` plus `add` and `multiply`
#[derive(Clone)]
pub struct CalculatorSystem {
    tools: Vec<Tool>,
}

impl Default for CalculatorSystem {
    fn default() -> Self {
        Self::new()
    }
}

impl CalculatorSystem {
    pub fn new() -> Self {
        let operands = json!({
            "type": "object",
            "properties": {
                "a": {"type": "number", "description": "First operand"},
                "b": {"type": "number", "description": "Second operand"}
            },
            "required": ["a", "b"]
        });

        Self {
            tools: vec![
                Tool::new(
                    "calculate",
                    "Perform a mathematical calculation.\n\nReturns the result, or an error message for division by zero.",
                    json!({
                        "type": "object",
                        "properties": {
                            "operation": {
                                "type": "string",
                                "enum": ["add", "subtract", "multiply", "divide"],
                                "description": "Math operation to perform"
                            },
                            "a": {"type": "number", "description": "First operand"},
                            "b": {"type": "number", "description": "Second operand"}
                        },
                        "required": ["operation", "a", "b"]
                    }),
                ),
                Tool::new("add", "Add two numbers", operands.clone()),
                Tool::new("multiply", "Multiply two numbers", operands),
            ],
        }
    }

    /// `add` and `multiply` answer with the bare number, like a math server would
    fn binary(&self, operation: Operation, tool_call: &ToolCall) -> AgentResult<Vec<Content>> {
        let a = number_arg(&tool_call.arguments, "a")?;
        let b = number_arg(&tool_call.arguments, "b")?;
        let response = calculate(&CalculationRequest::new(operation, a, b));
        match (response.result, response.error) {
            (Some(result), _) => Ok(vec![Content::text(result.to_string())]),
            (None, error) => Err(AgentError::ExecutionError(error.unwrap_or_default())),
        }
    }
}

#[async_trait]
impl System for CalculatorSystem {
    fn name(&self) -> &str {
        "calculator"
    }

    fn description(&self) -> &str {
        "Arithmetic on two operands"
    }

    fn instructions(&self) -> &str {
        "When users ask about mathematical calculations, use the calculate tool."
    }

    fn tools(&self) -> &[Tool] {
        &self.tools
    }

    async fn call(&self, tool_call: ToolCall) -> AgentResult<Vec<Content>> {
        match tool_call.name.as_str() {
            "calculate" => {
                let request: CalculationRequest = decode_args(tool_call.arguments)?;
                let response = calculate(&request);
                let value = serde_json::to_value(&response)
                    .map_err(|e| AgentError::Internal(e.to_string()))?;
                Ok(vec![Content::json(value)])
            }
            "add" => self.binary(Operation::Add, &tool_call),
            "multiply" => self.binary(Operation::Multiply, &tool_call),
            _ => Err(AgentError::ToolNotFound(tool_call.name)),
        }
    }
}
