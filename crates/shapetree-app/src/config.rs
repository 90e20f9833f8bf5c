//! Editor configuration.

use serde::{Deserialize, Serialize};
use shapetree_core::ShapeColor;
use std::path::Path;
use thiserror::Error;

/// Default border around the canvas, in scene units.
pub const DEFAULT_PADDING: f64 = 10.0;

/// Configuration errors.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Parse error: {0}")]
    Parse(#[from] serde_json::Error),
}

/// Editor settings. Missing fields fall back to their defaults.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EditorConfig {
    /// Border between the window edge and the canvas.
    pub padding: f64,
    /// Window background.
    pub background: ShapeColor,
}

impl Default for EditorConfig {
    fn default() -> Self {
        Self {
            padding: DEFAULT_PADDING,
            background: ShapeColor::light_gray(),
        }
    }
}

impl EditorConfig {
    /// Load settings from a JSON file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path)?;
        let config = Self::from_json(&json)?;
        log::info!("Loaded editor config from {}", path.display());
        Ok(config)
    }

    /// Serialize the settings to JSON.
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }

    /// Deserialize settings from JSON.
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_defaults() {
        let config = EditorConfig::default();
        assert!((config.padding - DEFAULT_PADDING).abs() < f64::EPSILON);
        assert_eq!(config.background, ShapeColor::light_gray());
    }

    #[test]
    fn test_partial_json_uses_defaults() {
        let config = EditorConfig::from_json(r#"{ "padding": 4.0 }"#).unwrap();
        assert!((config.padding - 4.0).abs() < f64::EPSILON);
        assert_eq!(config.background, ShapeColor::light_gray());
    }

    #[test]
    fn test_json_roundtrip() {
        let config = EditorConfig {
            padding: 2.5,
            background: ShapeColor::white(),
        };
        let json = config.to_json().unwrap();
        assert_eq!(EditorConfig::from_json(&json).unwrap(), config);
    }

    #[test]
    fn test_load_from_file() {
        let mut file = NamedTempFile::new().unwrap();
        write!(
            file,
            r#"{{ "background": {{ "r": 1, "g": 2, "b": 3, "a": 255 }} }}"#
        )
        .unwrap();

        let config = EditorConfig::load(file.path()).unwrap();
        assert_eq!(config.background, ShapeColor::new(1, 2, 3, 255));
        assert!((config.padding - DEFAULT_PADDING).abs() < f64::EPSILON);
    }

    #[test]
    fn test_load_errors() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("missing.json");
        assert!(matches!(EditorConfig::load(&missing), Err(ConfigError::Io(_))));

        let mut file = NamedTempFile::new().unwrap();
        write!(file, "not json").unwrap();
        assert!(matches!(EditorConfig::load(file.path()), Err(ConfigError::Parse(_))));
    }
}
