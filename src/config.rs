//! Configuration types for the classifier and its host bridge.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Top-level configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct HeartlineConfig {
    /// Classifier settings.
    pub detector: DetectorConfig,
    /// Stdio host bridge settings.
    pub host: HostConfig,
}

/// Classifier configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct DetectorConfig {
    /// Optional TOML overlay whose buckets replace the built-in replies.
    /// The merged catalog is validated at startup.
    pub catalog_path: Option<PathBuf>,
}

/// Host bridge configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct HostConfig {
    /// Longest message (in characters) `emotion.detect` accepts.
    pub max_message_chars: usize,
}

impl Default for HostConfig {
    fn default() -> Self {
        Self {
            max_message_chars: 2000,
        }
    }
}

impl HeartlineConfig {
    /// Load configuration from a TOML file, falling back to defaults for missing fields.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or parsed.
    pub fn from_file(path: &std::path::Path) -> crate::error::Result<Self> {
        let content = std::fs::read_to_string(path)?;
        toml::from_str(&content).map_err(|e| crate::error::HeartlineError::Config(e.to_string()))
    }

    /// Save configuration to a TOML file, creating parent directories as needed.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be written or the config cannot be serialized.
    pub fn save_to_file(&self, path: &std::path::Path) -> crate::error::Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let content = toml::to_string_pretty(self)
            .map_err(|e| crate::error::HeartlineError::Config(e.to_string()))?;
        std::fs::write(path, content)?;
        Ok(())
    }

    /// Returns the default config file path: `~/.config/heartline/config.toml`.
    pub fn default_config_path() -> PathBuf {
        if let Some(config) = std::env::var_os("XDG_CONFIG_HOME") {
            PathBuf::from(config).join("heartline").join("config.toml")
        } else if let Some(home) = std::env::var_os("HOME") {
            PathBuf::from(home)
                .join(".config")
                .join("heartline")
                .join("config.toml")
        } else {
            PathBuf::from("/tmp/heartline-config/config.toml")
        }
    }

    /// Validates field values.
    ///
    /// # Errors
    ///
    /// Returns [`HeartlineError::Config`](crate::error::HeartlineError::Config)
    /// if `host.max_message_chars` is zero.
    pub fn validate(&self) -> crate::error::Result<()> {
        if self.host.max_message_chars == 0 {
            return Err(crate::error::HeartlineError::Config(
                "host.max_message_chars must be greater than 0".into(),
            ));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used, clippy::expect_used)]

    use super::*;

    #[test]
    fn default_config_is_valid() {
        let config = HeartlineConfig::default();
        assert!(config.detector.catalog_path.is_none());
        assert_eq!(config.host.max_message_chars, 2000);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn zero_message_limit_rejected() {
        let config = HeartlineConfig {
            host: HostConfig {
                max_message_chars: 0,
            },
            ..Default::default()
        };
        let err = config.validate().unwrap_err();
        assert!(err.to_string().contains("max_message_chars"));
    }

    #[test]
    fn save_and_load_round_trip() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join("nested").join("config.toml");

        let mut config = HeartlineConfig::default();
        config.detector.catalog_path = Some(PathBuf::from("/etc/heartline/replies.toml"));
        config.host.max_message_chars = 500;

        config.save_to_file(&path).expect("save");
        assert!(path.exists());

        let loaded = HeartlineConfig::from_file(&path).expect("load");
        assert_eq!(
            loaded.detector.catalog_path.as_deref(),
            Some(std::path::Path::new("/etc/heartline/replies.toml"))
        );
        assert_eq!(loaded.host.max_message_chars, 500);
    }

    #[test]
    fn partial_file_falls_back_to_defaults() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "[detector]\n").expect("write");
        let loaded = HeartlineConfig::from_file(&path).expect("load");
        assert_eq!(loaded.host.max_message_chars, 2000);
    }

    #[test]
    fn from_file_nonexistent_returns_error() {
        let result =
            HeartlineConfig::from_file(std::path::Path::new("/nonexistent/path/config.toml"));
        assert!(result.is_err());
    }

    #[test]
    fn from_file_invalid_toml_returns_error() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join("bad.toml");
        std::fs::write(&path, "this is not valid toml {{{").expect("write");
        let err = HeartlineConfig::from_file(&path).unwrap_err();
        assert!(err.to_string().starts_with("config error"));
    }

    #[test]
    fn default_config_path_ends_with_config_toml() {
        let path = HeartlineConfig::default_config_path();
        assert!(path.ends_with("heartline/config.toml"));
    }
}
