//! Export configuration file.
//!
//! An optional YAML file passed with `--config` that supplies defaults for
//! the destination folder and preset lists. Command-line flags win over it.
//! The file is only ever read.
//!
//! ```yaml
//! output: assets
//! android: [mdpi, hdpi, xhdpi]
//! ios: [1x, 2x, 3x]
//! ```

use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::error::{ExportError, Result};

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ExportConfig {
    /// Destination folder.
    pub output: Option<PathBuf>,

    /// Android density buckets to export.
    pub android: Vec<String>,

    /// iOS scales to export.
    pub ios: Vec<String>,
}

impl ExportConfig {
    /// Load configuration from a YAML file.
    ///
    /// A relative `output` is resolved against the file's directory.
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(|e| ExportError::Filesystem {
            path: path.to_path_buf(),
            message: format!("Failed to read config: {}", e),
        })?;

        let mut config = Self::parse(&content)?;

        if let (Some(output), Some(parent)) = (&config.output, path.parent()) {
            if output.is_relative() {
                config.output = Some(parent.join(output));
            }
        }

        Ok(config)
    }

    /// Parse configuration from a YAML string.
    pub fn parse(content: &str) -> Result<Self> {
        if content.trim().is_empty() {
            return Ok(Self::default());
        }

        serde_yaml::from_str(content).map_err(|e| ExportError::Parse {
            message: format!("Invalid config: {}", e),
            help: Some("Expected keys: output, android, ios".to_string()),
        })
    }

    /// Whether the file names any preset.
    pub fn has_presets(&self) -> bool {
        !self.android.is_empty() || !self.ios.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::tempdir;

    #[test]
    fn test_parse_full() {
        let config = ExportConfig::parse(
            "output: assets\nandroid: [mdpi, xhdpi]\nios:\n  - 2x\n",
        )
        .unwrap();

        assert_eq!(config.output, Some(PathBuf::from("assets")));
        assert_eq!(config.android, vec!["mdpi", "xhdpi"]);
        assert_eq!(config.ios, vec!["2x"]);
        assert!(config.has_presets());
    }

    #[test]
    fn test_parse_empty() {
        let config = ExportConfig::parse("").unwrap();
        assert_eq!(config, ExportConfig::default());
        assert!(!config.has_presets());
    }

    #[test]
    fn test_parse_unknown_key() {
        let err = ExportConfig::parse("scale: 2\n").unwrap_err();
        assert!(matches!(err, ExportError::Parse { .. }));
    }

    #[test]
    fn test_load_resolves_relative_output() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("abx.yaml");
        fs::write(&path, "output: build/assets\n").unwrap();

        let config = ExportConfig::load(&path).unwrap();
        assert_eq!(config.output, Some(dir.path().join("build/assets")));
    }

    #[test]
    fn test_load_missing_file() {
        let dir = tempdir().unwrap();
        let err = ExportConfig::load(&dir.path().join("nope.yaml")).unwrap_err();
        assert!(matches!(err, ExportError::Filesystem { .. }));
    }
}
