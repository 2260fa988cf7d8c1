use anyhow::{anyhow, Result};
use bat::PrettyPrinter;

use seams::models::content::Content;

/// Print a tool result: JSON is pretty printed and highlighted, text goes out as is
pub fn render_content(content: &Content, theme: Option<&str>) -> Result<()> {
    match content {
        Content::Json(json) => {
            let pretty = serde_json::to_string_pretty(&json.value)?;
            let mut printer = PrettyPrinter::new();
            printer.input_from_bytes(pretty.as_bytes()).language("json");
            if let Some(theme) = theme {
                printer.theme(theme);
            }
            printer
                .print()
                .map_err(|e| anyhow!("Failed to render output: {}", e))?;
            println!();
        }
        Content::Text(text) => println!("{}", text.text),
    }
    Ok(())
}
