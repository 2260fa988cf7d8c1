use serde::{Deserialize, Serialize};
use serde_json::{json, Map, Value};
use strum_macros::Display;

use super::tool::ToolCall;

/// Marker a tool result's content is checked for when no explicit status is set.
///
/// This is a heuristic: a successful result whose text legitimately contains the marker
/// is reported as an error.
pub const ERROR_MARKER: &str = "Error:";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Display)]
pub enum Role {
    User,
    Assistant,
    Tool,
    Other,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Usage {
    pub input_tokens: Option<i32>,
    pub output_tokens: Option<i32>,
    pub total_tokens: Option<i32>,
}

impl Usage {
    pub fn new(
        input_tokens: Option<i32>,
        output_tokens: Option<i32>,
        total_tokens: Option<i32>,
    ) -> Self {
        Self {
            input_tokens,
            output_tokens,
            total_tokens,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct UserMessage {
    pub content: String,
}

/// What an assistant turn did: either asked for tools or answered.
#[derive(Debug, Clone, PartialEq)]
pub enum AssistantTurn {
    /// Always holds at least one call
    Invoking(Vec<ToolCall>),
    Answering(String),
}

#[derive(Debug, Clone, PartialEq)]
pub struct AssistantMessage {
    pub turn: AssistantTurn,
    pub usage: Option<Usage>,
}

impl AssistantMessage {
    /// Pick the turn from the raw parts: any tool call makes the message an invocation
    pub fn from_parts<S: Into<String>>(content: S, tool_calls: Vec<ToolCall>) -> Self {
        let turn = if tool_calls.is_empty() {
            AssistantTurn::Answering(content.into())
        } else {
            AssistantTurn::Invoking(tool_calls)
        };
        AssistantMessage { turn, usage: None }
    }

    pub fn tool_calls(&self) -> &[ToolCall] {
        match &self.turn {
            AssistantTurn::Invoking(calls) => calls,
            AssistantTurn::Answering(_) => &[],
        }
    }

    /// The trimmed answer text, if this turn answers rather than invokes
    pub fn answer(&self) -> Option<&str> {
        match &self.turn {
            AssistantTurn::Answering(content) => Some(content.trim()),
            AssistantTurn::Invoking(_) => None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Display)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum ToolStatus {
    Success,
    Error,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ToolMessage {
    pub name: String,
    pub content: String,
    pub status: Option<ToolStatus>,
}

impl ToolMessage {
    /// Error status, or [`ERROR_MARKER`] anywhere in the content regardless of status
    pub fn is_error(&self) -> bool {
        self.status == Some(ToolStatus::Error) || self.content.contains(ERROR_MARKER)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct OtherMessage {
    /// Role label as found on the wire, `unknown` when there was none
    pub role: String,
    pub content: Value,
}

impl OtherMessage {
    /// Text form of the content: trimmed when it is a string, the JSON representation otherwise
    pub fn content_text(&self) -> String {
        match &self.content {
            Value::String(text) => text.trim().to_string(),
            other => other.to_string(),
        }
    }
}

/// A single turn in a conversation trace
///
/// The variant is decided once, when the message is built or decoded. Anything that does
/// not fit the first three shapes is kept as `Other` rather than rejected.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(from = "Value", into = "Value")]
pub enum Message {
    User(UserMessage),
    Assistant(AssistantMessage),
    Tool(ToolMessage),
    Other(OtherMessage),
}

impl Message {
    pub fn user<S: Into<String>>(content: S) -> Self {
        Message::User(UserMessage {
            content: content.into(),
        })
    }

    /// An assistant message that answers with text
    pub fn answer<S: Into<String>>(content: S) -> Self {
        Message::Assistant(AssistantMessage::from_parts(content, Vec::new()))
    }

    /// An assistant message invoking the given tools
    pub fn tool_calls(calls: Vec<ToolCall>) -> Self {
        Message::Assistant(AssistantMessage::from_parts("", calls))
    }

    pub fn tool_result<N: Into<String>, C: Into<String>>(name: N, content: C) -> Self {
        Message::Tool(ToolMessage {
            name: name.into(),
            content: content.into(),
            status: None,
        })
    }

    pub fn other<S: Into<String>>(role: S, content: Value) -> Self {
        Message::Other(OtherMessage {
            role: role.into(),
            content,
        })
    }

    /// Attach token usage; only assistant messages carry it, others are returned unchanged
    pub fn with_usage(mut self, usage: Usage) -> Self {
        if let Message::Assistant(assistant) = &mut self {
            assistant.usage = Some(usage);
        }
        self
    }

    /// Set an explicit status; only tool messages carry it, others are returned unchanged
    pub fn with_status(mut self, status: ToolStatus) -> Self {
        if let Message::Tool(tool) = &mut self {
            tool.status = Some(status);
        }
        self
    }

    pub fn role(&self) -> Role {
        match self {
            Message::User(_) => Role::User,
            Message::Assistant(_) => Role::Assistant,
            Message::Tool(_) => Role::Tool,
            Message::Other(_) => Role::Other,
        }
    }

    /// Label used when rendering the message
    pub fn label(&self) -> String {
        match self {
            Message::Other(other) => other.role.clone(),
            _ => self.role().to_string(),
        }
    }
}

impl From<Value> for Message {
    fn from(value: Value) -> Self {
        let value = unwrap_envelope(value);
        let decoded = match message_kind(&value) {
            Some("user") | Some("human") => decode_user(&value),
            Some("assistant") | Some("ai") => decode_assistant(&value),
            Some("tool") => decode_tool(&value),
            _ => None,
        };
        decoded.unwrap_or_else(|| degrade(value))
    }
}

/// `{"type": ..., "data": {...}}` as written by LangChain's `messages_to_dict`
fn unwrap_envelope(value: Value) -> Value {
    let mut outer = match value {
        Value::Object(outer) => outer,
        other => return other,
    };
    if !outer.contains_key("role") && outer.get("data").is_some_and(Value::is_object) {
        if let Some(Value::Object(mut data)) = outer.remove("data") {
            if !data.contains_key("type") {
                if let Some(kind) = outer.remove("type") {
                    data.insert("type".into(), kind);
                }
            }
            return Value::Object(data);
        }
    }
    Value::Object(outer)
}

/// The `role` key, or LangChain's `type` key when there is no role
fn message_kind(value: &Value) -> Option<&str> {
    value
        .get("role")
        .or_else(|| value.get("type"))
        .and_then(Value::as_str)
}

fn decode_user(value: &Value) -> Option<Message> {
    let content = value.get("content")?.as_str()?;
    Some(Message::user(content))
}

fn decode_assistant(value: &Value) -> Option<Message> {
    let mut calls = decode_tool_calls(value.get("tool_calls"));
    if calls.is_empty() {
        // Older producers nest the calls under additional_kwargs
        calls = decode_tool_calls(value.pointer("/additional_kwargs/tool_calls"));
    }

    let usage = value
        .get("usage")
        .filter(|usage| usage.is_object())
        .or_else(|| value.get("usage_metadata").filter(|usage| usage.is_object()))
        .and_then(|usage| serde_json::from_value::<Usage>(usage.clone()).ok());

    let mut assistant = if calls.is_empty() {
        AssistantMessage::from_parts(value.get("content")?.as_str()?, calls)
    } else {
        AssistantMessage::from_parts("", calls)
    };
    assistant.usage = usage;
    Some(Message::Assistant(assistant))
}

fn decode_tool_calls(value: Option<&Value>) -> Vec<ToolCall> {
    value
        .and_then(Value::as_array)
        .map(|entries| entries.iter().filter_map(decode_tool_call).collect())
        .unwrap_or_default()
}

/// Accepts both the flat `{name, arguments}` shape and the OpenAI `{function: {...}}` shape
fn decode_tool_call(entry: &Value) -> Option<ToolCall> {
    let (name, arguments) = match entry.get("function") {
        Some(function) => (function.get("name"), function.get("arguments")),
        None => (
            entry.get("name"),
            entry.get("arguments").or_else(|| entry.get("args")),
        ),
    };

    let arguments = match arguments {
        Some(Value::String(raw)) => {
            serde_json::from_str(raw).unwrap_or_else(|_| Value::String(raw.clone()))
        }
        Some(other) => other.clone(),
        None => Value::Object(Map::new()),
    };

    Some(ToolCall::new(name?.as_str()?, arguments))
}

fn decode_tool(value: &Value) -> Option<Message> {
    let name = value.get("name")?.as_str()?;
    let content = value.get("content")?.as_str()?;
    let status = value
        .get("status")
        .and_then(|status| serde_json::from_value::<ToolStatus>(status.clone()).ok());

    Some(Message::Tool(ToolMessage {
        name: name.to_string(),
        content: content.to_string(),
        status,
    }))
}

fn degrade(value: Value) -> Message {
    let role = message_kind(&value).unwrap_or("unknown").to_string();
    let content = match value.get("content") {
        Some(content) => content.clone(),
        None => value,
    };
    Message::other(role, content)
}

impl From<Message> for Value {
    fn from(message: Message) -> Self {
        match message {
            Message::User(user) => json!({"role": "user", "content": user.content}),
            Message::Assistant(assistant) => {
                let mut object = Map::new();
                object.insert("role".into(), json!("assistant"));
                match assistant.turn {
                    AssistantTurn::Answering(content) => {
                        object.insert("content".into(), json!(content));
                    }
                    AssistantTurn::Invoking(calls) => {
                        object.insert("content".into(), json!(""));
                        object.insert("tool_calls".into(), json!(calls));
                    }
                }
                if let Some(usage) = assistant.usage {
                    object.insert("usage".into(), json!(usage));
                }
                Value::Object(object)
            }
            Message::Tool(tool) => {
                let mut object = Map::new();
                object.insert("role".into(), json!("tool"));
                object.insert("name".into(), json!(tool.name));
                object.insert("content".into(), json!(tool.content));
                if let Some(status) = tool.status {
                    object.insert("status".into(), json!(status));
                }
                Value::Object(object)
            }
            Message::Other(other) => json!({"role": other.role, "content": other.content}),
        }
    }
}
