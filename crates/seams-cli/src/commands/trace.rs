use std::io;
use std::path::Path;

use anyhow::{Context, Result};

use seams::session_file::load_trace;
use seams::trace::{render_trace, RenderOptions};

use crate::config::CliConfig;

pub fn execute(path: &Path, quiet: bool, tokens: bool, config: &CliConfig) -> Result<()> {
    let trace = load_trace(path)
        .with_context(|| format!("Failed to load trace {}", path.display()))?;

    let options = RenderOptions {
        verbose: !quiet,
        include_token_usage: tokens || config.show_token_usage,
    };
    render_trace(&trace, options, &mut io::stdout().lock())?;
    Ok(())
}
