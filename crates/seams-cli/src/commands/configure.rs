use std::path::{Path, PathBuf};

use anyhow::Result;
use console::style;

use crate::config::{config_path, load_config_from, save_config_to, CliConfig};

const DEFAULT_THEME: &str = "default";
const THEMES: &[(&str, &str, &str)] = &[
    (DEFAULT_THEME, "Default", "bat's own choice"),
    ("Monokai Extended", "Monokai Extended", "dark"),
    ("Dracula", "Dracula", "dark"),
    ("Nord", "Nord", "dark"),
    ("GitHub", "GitHub", "light"),
    ("OneHalfLight", "OneHalfLight", "light"),
];

pub fn execute() -> Result<()> {
    cliclack::intro(style(" configure-seams ").on_cyan().black())?;

    let path = config_path()?;
    let existing = existing_config(&path);

    let show_token_usage = cliclack::confirm("Show token usage in traces by default?")
        .initial_value(existing.show_token_usage)
        .interact()?;

    let theme = cliclack::select("Which theme should JSON output use?")
        .initial_value(existing.theme.as_deref().unwrap_or(DEFAULT_THEME))
        .items(THEMES)
        .interact()?;

    let mut manifests = existing.manifests;
    if !manifests.is_empty() {
        let _ = cliclack::log::info(format!(
            "Keeping {} existing tool manifest(s)",
            manifests.len()
        ));
    }
    while cliclack::confirm("Add a tool manifest?")
        .initial_value(false)
        .interact()?
    {
        let manifest: String = cliclack::input("Path to the manifest:")
            .placeholder("~/tools/langchain_math.json")
            .interact()?;
        manifests.push(PathBuf::from(manifest));
    }

    let config = CliConfig {
        show_token_usage,
        theme: (theme != DEFAULT_THEME).then(|| theme.to_string()),
        manifests,
    };

    let _ = match save_config_to(&path, &config) {
        Ok(()) => cliclack::outro(format!("Config saved to: {:?}", path)),
        Err(e) => cliclack::outro(format!("Failed to save config: {}", e)),
    };
    Ok(())
}

/// The current config, or the defaults when the file cannot be read
fn existing_config(path: &Path) -> CliConfig {
    match load_config_from(path) {
        Ok(config) => config,
        Err(e) => {
            let _ = cliclack::log::warning(format!(
                "Ignoring the existing config ({:#}); starting from defaults",
                e
            ));
            CliConfig::default()
        }
    }
}
