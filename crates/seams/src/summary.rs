//! Listings of the tools aggregated from one or more sources.
//!
//! Descriptors are rendered as given: no validation and no de-duplication, so two
//! sources exposing the same tool name both show up.
use std::io::{self, Write};

use crate::models::tool::ToolDescriptor;

const RULE_WIDTH: usize = 70;
const METADATA_RULE_WIDTH: usize = 33;

const UNKNOWN: &str = "unknown";
const NO_DESCRIPTION: &str = "No description";
const NOT_AVAILABLE: &str = "n/a";

/// Enumerated listing: ordinal, name and the first line of each description
pub fn render_tools_summary<W: Write>(tools: &[ToolDescriptor], sink: &mut W) -> io::Result<()> {
    let rule = "=".repeat(RULE_WIDTH);

    writeln!(sink)?;
    writeln!(sink, "{}", rule)?;
    writeln!(sink, "AVAILABLE TOOLS ({} total)", tools.len())?;
    writeln!(sink, "{}", rule)?;
    writeln!(sink)?;

    for (index, tool) in tools.iter().enumerate() {
        writeln!(
            sink,
            "{:02}. {}",
            index + 1,
            tool.name.as_deref().unwrap_or(UNKNOWN)
        )?;
        writeln!(
            sink,
            "    └─ {}",
            tool.description_headline().unwrap_or(NO_DESCRIPTION)
        )?;
    }

    writeln!(sink)?;
    writeln!(sink, "{}", rule)?;
    writeln!(sink)?;
    Ok(())
}

/// Per-tool provenance listing: which provider serves it, over what transport and where
pub fn render_tools_metadata<W: Write>(tools: &[ToolDescriptor], sink: &mut W) -> io::Result<()> {
    writeln!(sink)?;
    writeln!(sink, "=== Tool Metadata Summary ===")?;

    for tool in tools {
        writeln!(sink, "• {}", tool.name.as_deref().unwrap_or(UNKNOWN))?;
        writeln!(sink, "  ↳ desc: {}", tool.description_headline().unwrap_or(""))?;
        writeln!(
            sink,
            "  ↳ provider: {}",
            tool.provider.as_deref().unwrap_or(UNKNOWN)
        )?;
        writeln!(
            sink,
            "  ↳ transport: {}",
            tool.transport.as_deref().unwrap_or(NOT_AVAILABLE)
        )?;
        writeln!(
            sink,
            "  ↳ endpoint: {}",
            tool.endpoint.as_deref().unwrap_or(NOT_AVAILABLE)
        )?;
    }

    writeln!(sink, "{}", "=".repeat(METADATA_RULE_WIDTH))?;
    writeln!(sink)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn summary(tools: &[ToolDescriptor]) -> String {
        let mut sink = Vec::new();
        render_tools_summary(tools, &mut sink).unwrap();
        String::from_utf8(sink).unwrap()
    }

    fn metadata(tools: &[ToolDescriptor]) -> String {
        let mut sink = Vec::new();
        render_tools_metadata(tools, &mut sink).unwrap();
        String::from_utf8(sink).unwrap()
    }

    #[test]
    fn test_empty_summary() {
        let rule = "=".repeat(70);
        assert_eq!(
            summary(&[]),
            format!("\n{rule}\nAVAILABLE TOOLS (0 total)\n{rule}\n\n\n{rule}\n\n")
        );
    }

    #[test]
    fn test_summary_entries() {
        let tools = vec![
            ToolDescriptor::new("add", "Add two numbers"),
            ToolDescriptor::new("get_weather", "Get weather for location.\n\nArgs:\n  location: ..."),
        ];

        let output = summary(&tools);
        assert!(output.contains("AVAILABLE TOOLS (2 total)"));
        let entries: Vec<_> = output
            .lines()
            .filter(|line| line.starts_with(|c: char| c.is_ascii_digit()) || line.starts_with("    └─"))
            .collect();
        assert_eq!(
            entries,
            vec![
                "01. add",
                "    └─ Add two numbers",
                "02. get_weather",
                "    └─ Get weather for location.",
            ]
        );
    }

    #[test]
    fn test_summary_placeholders() {
        let output = summary(&[ToolDescriptor::default()]);
        assert!(output.contains("01. unknown\n    └─ No description\n"));
    }

    #[test]
    fn test_colliding_names_are_kept() {
        let tools = vec![
            ToolDescriptor::new("add", "Add two numbers").with_provider("langchain_math"),
            ToolDescriptor::new("add", "Add two numbers").with_provider("calculator"),
        ];
        let output = summary(&tools);
        assert!(output.contains("AVAILABLE TOOLS (2 total)"));
        assert!(output.contains("01. add"));
        assert!(output.contains("02. add"));
    }

    #[test]
    fn test_metadata_listing() {
        let tools = vec![
            ToolDescriptor::new("get_weather", "  Get weather for location.\nmore")
                .with_provider("weather")
                .with_transport("streamable_http")
                .with_endpoint("http://localhost:8000/mcp"),
            ToolDescriptor {
                name: Some("now".to_string()),
                ..Default::default()
            },
        ];

        let output = metadata(&tools);
        let expected = [
            "",
            "=== Tool Metadata Summary ===",
            "• get_weather",
            "  ↳ desc: Get weather for location.",
            "  ↳ provider: weather",
            "  ↳ transport: streamable_http",
            "  ↳ endpoint: http://localhost:8000/mcp",
            "• now",
            "  ↳ desc: ",
            "  ↳ provider: unknown",
            "  ↳ transport: n/a",
            "  ↳ endpoint: n/a",
            "=================================",
            "",
        ];
        assert_eq!(output, format!("{}\n", expected.join("\n")));
    }
}
