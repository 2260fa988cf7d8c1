use async_trait::async_trait;
use serde_json::json;

use seams::errors::{AgentError, AgentResult};
use seams::models::content::Content;
use seams::models::message::{Message, ToolStatus};
use seams::models::tool::{Tool, ToolCall};
use seams::systems::{System, SystemRegistry};
use seams::trace::{final_answer, render_trace, RenderOptions};

struct EchoSystem {
    tools: Vec<Tool>,
}

impl EchoSystem {
    fn new() -> Self {
        Self {
            tools: vec![Tool::new(
                "add",
                "Echo the arguments back",
                json!({"type": "object"}),
            )],
        }
    }
}

#[async_trait]
impl System for EchoSystem {
    fn name(&self) -> &str {
        "echo"
    }

    fn description(&self) -> &str {
        "Echoes its input"
    }

    fn instructions(&self) -> &str {
        ""
    }

    fn tools(&self) -> &[Tool] {
        &self.tools
    }

    async fn call(&self, tool_call: ToolCall) -> AgentResult<Vec<Content>> {
        Ok(vec![Content::json(tool_call.arguments)])
    }
}

#[tokio::test]
async fn test_first_registered_system_serves_shared_name() {
    let mut registry = SystemRegistry::with_defaults();
    registry.add_system(Box::new(EchoSystem::new()));

    let descriptors = registry.descriptors();
    let adds: Vec<_> = descriptors
        .iter()
        .filter(|d| d.name.as_deref() == Some("add"))
        .map(|d| d.provider.as_deref().unwrap())
        .collect();
    assert_eq!(adds, vec!["calculator", "echo"]);

    let result = registry
        .call(ToolCall::new("add", json!({"a": 2, "b": 2})))
        .await
        .unwrap();
    assert_eq!(result, vec![Content::text("4")]);
}

#[tokio::test]
async fn test_dispatched_calls_render_as_trace() {
    let registry = SystemRegistry::with_defaults();
    let calls = vec![
        ToolCall::new("add", json!({"a": 15, "b": 27})),
        ToolCall::new("get_weather", json!({"location": ""})),
    ];

    let mut trace = vec![
        Message::user("What is 15 + 27, and how is the weather?"),
        Message::tool_calls(calls.clone()),
    ];
    for call in calls {
        trace.push(registry.dispatch(call).await);
    }
    trace.push(Message::answer("15 + 27 = 42. I could not look up the weather."));

    match &trace[3] {
        Message::Tool(tool) => {
            assert_eq!(tool.status, Some(ToolStatus::Error));
            assert!(tool.is_error());
        }
        other => panic!("Expected a tool message, got {:?}", other),
    }

    let mut sink = Vec::new();
    render_trace(&trace, RenderOptions::default(), &mut sink).unwrap();
    let output = String::from_utf8(sink).unwrap();
    assert!(output.contains("02. Assistant → 🔧 tool_call(s): add, get_weather"));
    assert!(output.contains("03. Tool [add]: ✓ 42"));
    assert!(output.contains("04. Tool [get_weather]: ❌ Error: Invalid parameters: Location cannot be empty"));
    assert_eq!(
        final_answer(&trace).as_deref(),
        Some("15 + 27 = 42. I could not look up the weather.")
    );
}

#[tokio::test]
async fn test_unknown_tool_is_reported() {
    let registry = SystemRegistry::new();
    let err = registry
        .call(ToolCall::new("add", json!({})))
        .await
        .unwrap_err();
    assert_eq!(err, AgentError::ToolNotFound("add".to_string()));
}
