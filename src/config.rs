//! Persistent application configuration
//!
//! Stores the output device selection and sample rate in a JSON file at
//! `<data_dir>/hapticlab/config.json`.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

fn default_sample_rate() -> u32 {
    crate::DEFAULT_SAMPLE_RATE
}

/// Persistent application configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppConfig {
    /// Selected output device name (None = default device)
    #[serde(default)]
    pub device: Option<String>,
    /// Sample rate in Hz
    #[serde(default = "default_sample_rate")]
    pub sample_rate: u32,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            device: None,
            sample_rate: default_sample_rate(),
        }
    }
}

impl AppConfig {
    /// Config file path: `<data_dir>/hapticlab/config.json`
    pub fn path() -> PathBuf {
        dirs::data_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join("hapticlab")
            .join("config.json")
    }

    /// Load config from disk, falling back to defaults on any error
    pub fn load() -> Self {
        let path = Self::path();
        match std::fs::read_to_string(&path) {
            Ok(contents) => match serde_json::from_str(&contents) {
                Ok(config) => {
                    tracing::info!(path = %path.display(), "Loaded config from disk");
                    config
                }
                Err(e) => {
                    tracing::warn!(path = %path.display(), error = %e, "Failed to parse config, using defaults");
                    Self::default()
                }
            },
            Err(_) => {
                tracing::info!(path = %path.display(), "No config file found, using defaults");
                Self::default()
            }
        }
    }

    /// Save config to disk, creating parent directories if needed
    pub fn save(&self, path: &std::path::Path) -> anyhow::Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let json = serde_json::to_string_pretty(self)?;
        std::fs::write(path, json)?;
        tracing::info!(path = %path.display(), "Config saved to disk");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = AppConfig::default();
        assert_eq!(config.device, None);
        assert_eq!(config.sample_rate, 48000);
    }

    #[test]
    fn test_round_trip() {
        let config = AppConfig {
            device: Some("LRA Amp Out".to_string()),
            sample_rate: 44100,
        };
        let json = serde_json::to_string(&config).unwrap();
        let loaded: AppConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(loaded.device, Some("LRA Amp Out".to_string()));
        assert_eq!(loaded.sample_rate, 44100);
    }

    #[test]
    fn test_missing_fields_use_defaults() {
        let json = r#"{"device": "TestDevice"}"#;
        let config: AppConfig = serde_json::from_str(json).unwrap();
        assert_eq!(config.device, Some("TestDevice".to_string()));
        assert_eq!(config.sample_rate, 48000);
    }

    #[test]
    fn test_empty_json_uses_defaults() {
        let config: AppConfig = serde_json::from_str("{}").unwrap();
        assert_eq!(config.device, None);
        assert_eq!(config.sample_rate, 48000);
    }

    #[test]
    fn test_save_creates_parent_dirs() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("config.json");
        let config = AppConfig::default();
        config.save(&path).unwrap();
        assert!(path.exists());
        let loaded: AppConfig =
            serde_json::from_str(&std::fs::read_to_string(&path).unwrap()).unwrap();
        assert_eq!(loaded.sample_rate, config.sample_rate);
    }
}
