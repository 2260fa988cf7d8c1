use std::io;
use std::path::PathBuf;

use anyhow::{Context, Result};

use seams::manifest::load_manifest;
use seams::models::tool::ToolDescriptor;
use seams::summary::{render_tools_metadata, render_tools_summary};
use seams::systems::SystemRegistry;

use crate::config::CliConfig;

pub fn execute(manifests: &[PathBuf], metadata: bool, config: &CliConfig) -> Result<()> {
    let tools = collect_tools(config.manifests.iter().chain(manifests))?;

    let mut stdout = io::stdout().lock();
    if metadata {
        render_tools_metadata(&tools, &mut stdout)?;
    } else {
        render_tools_summary(&tools, &mut stdout)?;
    }
    Ok(())
}

/// Built-in tools first, then each manifest in order
fn collect_tools<'a>(manifests: impl IntoIterator<Item = &'a PathBuf>) -> Result<Vec<ToolDescriptor>> {
    let mut tools = SystemRegistry::with_defaults().descriptors();
    for path in manifests {
        let descriptors = load_manifest(path)
            .with_context(|| format!("Failed to load manifest {}", path.display()))?;
        tools.extend(descriptors);
    }
    Ok(tools)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::tempdir;

    #[test]
    fn test_manifests_follow_builtin_tools() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("langchain_math.json");
        fs::write(
            &path,
            r#"[{"name": "add", "description": "Add two numbers", "transport": "stdio"}]"#,
        )
        .unwrap();

        let tools = collect_tools([&path]).unwrap();
        let last = tools.last().unwrap();
        assert_eq!(last.name.as_deref(), Some("add"));
        assert_eq!(last.provider.as_deref(), Some("langchain_math"));
        assert_eq!(
            tools.iter().filter(|t| t.name.as_deref() == Some("add")).count(),
            2
        );
    }

    #[test]
    fn test_missing_manifest() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("missing.json");
        assert!(collect_tools([&path]).is_err());
    }
}
