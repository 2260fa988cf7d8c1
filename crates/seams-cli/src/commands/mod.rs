pub mod answer;
pub mod calc;
pub mod configure;
pub mod tools;
pub mod trace;
pub mod version;
pub mod weather;

use std::io;

use anyhow::Result;

use seams::models::message::Message;
use seams::models::tool::ToolCall;
use seams::systems::{tool_message, SystemRegistry};
use seams::trace::{render_trace, RenderOptions};

use crate::config::CliConfig;
use crate::render::render_content;

/// Run one tool call against the built-in systems, print its result and the resulting trace
pub(crate) async fn invoke(tool_call: ToolCall, config: &CliConfig) -> Result<()> {
    let registry = SystemRegistry::with_defaults();
    let name = tool_call.name.clone();
    let result = registry.call(tool_call.clone()).await;

    if let Ok(contents) = &result {
        for content in contents {
            render_content(content, config.theme.as_deref())?;
        }
    }

    let trace = vec![Message::tool_calls(vec![tool_call]), tool_message(&name, &result)];
    render_trace(&trace, RenderOptions::default(), &mut io::stdout().lock())?;
    Ok(())
}
