//! Split configuration
//!
//! Thresholds used by the splitters. Loadable from a JSON file so the CLI
//! can override them without recompiling.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{AudioCutError, Result};

/// Intervals shorter than this (seconds) are dropped in time-point mode (1ms)
pub const DEFAULT_MIN_INTERVAL_SECS: f64 = 0.001;

/// Smallest accepted uniform split duration in seconds (100ms)
pub const DEFAULT_MIN_SPLIT_SECS: f64 = 0.1;

/// Thresholds shared by the time-point and uniform splitters
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SplitConfig {
    /// Minimum interval between adjacent boundaries in time-point mode
    pub min_interval_secs: f64,
    /// Minimum split duration in uniform mode
    pub min_split_secs: f64,
}

impl Default for SplitConfig {
    fn default() -> Self {
        Self {
            min_interval_secs: DEFAULT_MIN_INTERVAL_SECS,
            min_split_secs: DEFAULT_MIN_SPLIT_SECS,
        }
    }
}

impl SplitConfig {
    /// Load a configuration from a JSON file
    ///
    /// Missing fields fall back to their defaults.
    ///
    /// # Errors
    /// * `FileNotFound` - If the file does not exist
    /// * `Serialization` - If the file is not valid JSON
    /// * `InvalidConfig` - If a threshold is negative or not finite
    pub fn load(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Err(AudioCutError::FileNotFound {
                path: path.to_path_buf(),
            });
        }

        let content = fs::read_to_string(path)?;
        let config: SplitConfig = serde_json::from_str(&content)?;
        config.validate()?;

        tracing::debug!(?config, path = %path.display(), "loaded split config");
        Ok(config)
    }

    /// Write the configuration as pretty-printed JSON
    pub fn save(&self, path: &Path) -> Result<()> {
        let content = serde_json::to_string_pretty(self)?;
        fs::write(path, content)?;
        Ok(())
    }

    /// Check that both thresholds are finite and non-negative
    pub fn validate(&self) -> Result<()> {
        for (name, value) in [
            ("min_interval_secs", self.min_interval_secs),
            ("min_split_secs", self.min_split_secs),
        ] {
            if !value.is_finite() || value < 0.0 {
                return Err(AudioCutError::InvalidConfig {
                    reason: format!("{} must be a non-negative number (got {})", name, value),
                });
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use tempfile::tempdir;

    #[test]
    fn test_defaults() {
        let config = SplitConfig::default();
        assert_eq!(config.min_interval_secs, 0.001);
        assert_eq!(config.min_split_secs, 0.1);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_load_partial_json_uses_defaults() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("split.json");
        fs::write(&path, r#"{ "min_interval_secs": 0.01 }"#).unwrap();

        let config = SplitConfig::load(&path).unwrap();
        assert_eq!(
            config,
            SplitConfig {
                min_interval_secs: 0.01,
                min_split_secs: DEFAULT_MIN_SPLIT_SECS,
            }
        );
    }

    #[test]
    fn test_save_load_roundtrip() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("split.json");
        let config = SplitConfig {
            min_interval_secs: 0.005,
            min_split_secs: 0.5,
        };
        config.save(&path).unwrap();
        assert_eq!(SplitConfig::load(&path).unwrap(), config);
    }

    #[test]
    fn test_load_missing_file() {
        let result = SplitConfig::load(Path::new("/nonexistent/split.json"));
        assert!(matches!(result, Err(AudioCutError::FileNotFound { .. })));
    }

    #[test]
    fn test_load_rejects_negative_threshold() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("split.json");
        fs::write(&path, r#"{ "min_split_secs": -1.0 }"#).unwrap();

        let result = SplitConfig::load(&path);
        assert!(matches!(result, Err(AudioCutError::InvalidConfig { .. })));
    }

    #[test]
    fn test_load_rejects_malformed_json() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("split.json");
        fs::write(&path, "not json").unwrap();

        let result = SplitConfig::load(&path);
        assert!(matches!(result, Err(AudioCutError::Serialization(_))));
    }
}
