use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{anyhow, Context, Result};
use serde::{Deserialize, Serialize};

pub const CONFIG_PATH: &str = ".config/seams/config.yaml";

/// Settings read from the user's config file. Every field is optional in the file.
#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq)]
#[serde(default)]
pub struct CliConfig {
    /// Show token usage in `seams trace` without passing `--tokens`
    pub show_token_usage: bool,
    /// Syntax highlighting theme for JSON output
    #[serde(skip_serializing_if = "Option::is_none")]
    pub theme: Option<String>,
    /// Tool manifests always included by `seams tools`
    pub manifests: Vec<PathBuf>,
}

pub fn config_path() -> Result<PathBuf> {
    let home_dir = dirs::home_dir().ok_or(anyhow!("Could not determine home directory"))?;
    Ok(home_dir.join(CONFIG_PATH))
}

pub fn load_config() -> Result<CliConfig> {
    load_config_from(&config_path()?)
}

/// A missing file yields the defaults
pub fn load_config_from(path: &Path) -> Result<CliConfig> {
    if !path.exists() {
        return Ok(CliConfig::default());
    }
    let content = fs::read_to_string(path)
        .with_context(|| format!("Failed to read config {}", path.display()))?;
    let config = serde_yaml::from_str(&content)
        .with_context(|| format!("Invalid config {}", path.display()))?;
    Ok(config)
}

pub fn save_config_to(path: &Path, config: &CliConfig) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    let yaml_string = serde_yaml::to_string(config)?;
    fs::write(path, yaml_string)?;
    Ok(())
}
