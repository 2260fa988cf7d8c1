//! Classification, rendering and final-answer extraction for agent response traces.
//!
//! Rendering and extraction are separate operations: [`render_trace`] only writes to the
//! sink it is given, [`final_answer`] only computes. A caller that wants both calls both.
use std::fmt;
use std::io::{self, Write};

use crate::models::message::{AssistantTurn, Message, Usage};

const RULE_WIDTH: usize = 70;
const TRACE_TITLE: &str = "AGENT RESPONSE TRACE";

/// Display switches for [`render_trace`]. The two flags are independent.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RenderOptions {
    /// Render every message; when off only the final answer line is written
    pub verbose: bool,
    /// Append token counts under assistant messages that carry them (verbose only)
    pub include_token_usage: bool,
}

impl Default for RenderOptions {
    fn default() -> Self {
        RenderOptions {
            verbose: true,
            include_token_usage: false,
        }
    }
}

/// What a single message contributes to a trace
#[derive(Debug, Clone, PartialEq)]
pub enum Classification<'a> {
    UserInput(&'a str),
    /// Tool names in call order
    ToolInvocation(Vec<&'a str>),
    ToolResult {
        name: &'a str,
        content: &'a str,
        is_error: bool,
    },
    /// A candidate final answer; the last one in the trace wins
    FinalAnswer(&'a str),
    Other {
        label: String,
        content: String,
    },
}

pub fn classify(message: &Message) -> Classification<'_> {
    match message {
        Message::User(user) => Classification::UserInput(user.content.trim()),
        Message::Assistant(assistant) => match &assistant.turn {
            AssistantTurn::Invoking(calls) => {
                Classification::ToolInvocation(calls.iter().map(|call| call.name.as_str()).collect())
            }
            AssistantTurn::Answering(content) => Classification::FinalAnswer(content.trim()),
        },
        Message::Tool(tool) => Classification::ToolResult {
            name: &tool.name,
            content: tool.content.trim(),
            is_error: tool.is_error(),
        },
        Message::Other(other) => Classification::Other {
            label: other.role.clone(),
            content: other.content_text(),
        },
    }
}

/// One rendered trace line: a 1-based ordinal plus the message's classification
struct TraceLine<'a> {
    ordinal: usize,
    classification: &'a Classification<'a>,
}

impl fmt::Display for TraceLine<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:02}. ", self.ordinal)?;
        match self.classification {
            Classification::UserInput(content) => write!(f, "User: {}", content),
            Classification::ToolInvocation(names) => {
                write!(f, "Assistant → 🔧 tool_call(s): {}", names.join(", "))
            }
            Classification::ToolResult {
                name,
                content,
                is_error,
            } => {
                let marker = if *is_error { "❌" } else { "✓" };
                write!(f, "Tool [{}]: {} {}", name, marker, content)
            }
            Classification::FinalAnswer(content) => write!(f, "Assistant: {}", content),
            Classification::Other { label, content } => write!(f, "{}: {}", label, content),
        }
    }
}

fn write_usage<W: Write>(sink: &mut W, usage: &Usage) -> io::Result<()> {
    writeln!(
        sink,
        "     └─ Tokens: input={}, output={}, total={}",
        usage.input_tokens.unwrap_or(0),
        usage.output_tokens.unwrap_or(0),
        usage.total_tokens.unwrap_or(0)
    )
}

/// Write a human-readable trace to `sink`.
///
/// Verbose mode frames one line per message with banners. Otherwise only a standalone
/// final-answer block is written, and only when the last answering assistant message has
/// non-empty text. Messages never cause a failure; the only error is the sink's own.
pub fn render_trace<W: Write>(
    trace: &[Message],
    options: RenderOptions,
    sink: &mut W,
) -> io::Result<()> {
    let rule = "=".repeat(RULE_WIDTH);

    if options.verbose {
        writeln!(sink)?;
        writeln!(sink, "{}", rule)?;
        writeln!(sink, "{}", TRACE_TITLE)?;
        writeln!(sink, "{}", rule)?;
        writeln!(sink)?;
    }

    let mut candidate: Option<&str> = None;

    for (index, message) in trace.iter().enumerate() {
        let classification = classify(message);
        if let Classification::FinalAnswer(answer) = &classification {
            candidate = Some(*answer);
        }

        if !options.verbose {
            continue;
        }

        let line = TraceLine {
            ordinal: index + 1,
            classification: &classification,
        };
        writeln!(sink, "{}", line)?;

        if options.include_token_usage {
            if let Message::Assistant(assistant) = message {
                if let Some(usage) = &assistant.usage {
                    write_usage(sink, usage)?;
                }
            }
        }
    }

    if options.verbose {
        writeln!(sink)?;
        writeln!(sink, "{}", rule)?;
        writeln!(sink)?;
    } else if let Some(answer) = candidate.filter(|answer| !answer.is_empty()) {
        writeln!(sink)?;
        writeln!(sink, "💡 Final Answer: {}", answer)?;
        writeln!(sink)?;
    }

    Ok(())
}

/// The most recent answering assistant message with non-empty text, trimmed.
pub fn final_answer(trace: &[Message]) -> Option<String> {
    trace
        .iter()
        .rev()
        .find_map(|message| match message {
            Message::Assistant(assistant) => assistant.answer().filter(|text| !text.is_empty()),
            _ => None,
        })
        .map(str::to_string)
}
