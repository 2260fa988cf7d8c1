//! Tool manifests: JSON arrays of descriptors exported by a tool source.
use std::fs::File;
use std::io::{self, Read};
use std::path::Path;

use crate::errors::TraceResult;
use crate::models::tool::ToolDescriptor;

/// Load a manifest file. Descriptors that do not name a provider are attributed to the
/// file stem, so tools from different manifests stay distinguishable in listings.
pub fn load_manifest<P: AsRef<Path>>(path: P) -> TraceResult<Vec<ToolDescriptor>> {
    let path = path.as_ref();
    let source = path
        .file_stem()
        .map(|stem| stem.to_string_lossy().into_owned());
    let file = File::open(path)?;
    read_manifest(io::BufReader::new(file), source.as_deref())
}

pub fn read_manifest<R: Read>(reader: R, source: Option<&str>) -> TraceResult<Vec<ToolDescriptor>> {
    let mut descriptors: Vec<ToolDescriptor> = serde_json::from_reader(reader)?;
    if let Some(source) = source {
        for descriptor in descriptors.iter_mut().filter(|d| d.provider.is_none()) {
            descriptor.provider = Some(source.to_string());
        }
    }
    Ok(descriptors)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::errors::TraceError;
    use std::io::Write;
    use tempfile::Builder;

    #[test]
    fn test_load_manifest_attributes_provider() -> anyhow::Result<()> {
        let mut file = Builder::new().prefix("weather").suffix(".json").tempfile()?;
        write!(
            file,
            r#"[
                {{"name": "get_weather", "description": "Get weather for location."}},
                {{"name": "forecast", "provider": "noaa", "transport": "stdio"}}
            ]"#
        )?;

        let descriptors = load_manifest(file.path())?;
        let stem = file
            .path()
            .file_stem()
            .unwrap()
            .to_string_lossy()
            .into_owned();

        assert_eq!(descriptors.len(), 2);
        assert_eq!(descriptors[0].provider.as_deref(), Some(stem.as_str()));
        assert_eq!(descriptors[1].provider.as_deref(), Some("noaa"));
        assert_eq!(descriptors[1].transport.as_deref(), Some("stdio"));
        Ok(())
    }

    #[test]
    fn test_read_manifest_without_source() -> anyhow::Result<()> {
        let descriptors = read_manifest(r#"[{"name": "echo"}, {}]"#.as_bytes(), None)?;
        assert_eq!(descriptors.len(), 2);
        assert!(descriptors.iter().all(|d| d.provider.is_none()));
        Ok(())
    }

    #[test]
    fn test_invalid_manifest() {
        let err = read_manifest(r#"{"name": "echo"}"#.as_bytes(), None).unwrap_err();
        assert!(matches!(err, TraceError::InvalidManifest(_)));
    }
}
