use std::path::Path;

use anyhow::{Context, Result};
use console::style;

use seams::session_file::load_trace;
use seams::trace::final_answer;

/// Prints the final answer. Returns false when the trace has none.
pub fn execute(path: &Path) -> Result<bool> {
    let trace = load_trace(path)
        .with_context(|| format!("Failed to load trace {}", path.display()))?;

    match final_answer(&trace) {
        Some(answer) => {
            println!("{}", answer);
            Ok(true)
        }
        None => {
            eprintln!("{}", style("no answer found").dim());
            Ok(false)
        }
    }
}
