//! Settings for the `tour` binary, read from TOML.

use std::fs;
use std::path::Path;
use std::time::Duration;

use serde::Deserialize;

use crate::error::{Error, Result};

const MAX_DELAY_MS: u64 = 60_000;

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct TourConfig {
    /// Upper bound for the counter walk.
    pub maximum: i64,
    /// Padding used when zipping sequences of unequal length.
    pub fill: i64,
    pub delay_ms: u64,
    /// Text whose characters get counted.
    pub word: String,
}

impl Default for TourConfig {
    fn default() -> Self {
        Self {
            maximum: 5,
            fill: 0,
            delay_ms: 10,
            word: "Deepak".to_string(),
        }
    }
}

impl TourConfig {
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let config: Self = toml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    /// Reads `path`, or falls back to defaults when no path is given.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let Some(path) = path else {
            log::debug!("no config file given, using defaults");
            return Ok(Self::default());
        };

        let content = fs::read_to_string(path).map_err(|err| Error::io(path, err))?;
        let config = Self::from_toml_str(&content)?;
        log::info!("loaded config from {}", path.display());
        Ok(config)
    }

    pub fn validate(&self) -> Result<()> {
        if self.maximum <= 0 {
            return Err(Error::InvalidBound {
                maximum: self.maximum,
            });
        }
        if self.delay_ms > MAX_DELAY_MS {
            return Err(Error::config(format!(
                "delay_ms {} exceeds {MAX_DELAY_MS}",
                self.delay_ms
            )));
        }
        Ok(())
    }

    pub fn delay(&self) -> Duration {
        Duration::from_millis(self.delay_ms)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_defaults_fill_missing_fields() {
        let config = TourConfig::from_toml_str("maximum = 7").unwrap();
        assert_eq!(config.maximum, 7);
        assert_eq!(config.word, "Deepak");
        assert_eq!(config.delay(), Duration::from_millis(10));
    }

    #[test]
    fn test_empty_document_is_default() {
        assert_eq!(TourConfig::from_toml_str("").unwrap(), TourConfig::default());
    }

    #[test]
    fn test_rejects_non_positive_maximum() {
        let err = TourConfig::from_toml_str("maximum = 0").unwrap_err();
        assert!(matches!(err, Error::InvalidBound { maximum: 0 }));
    }

    #[test]
    fn test_rejects_excessive_delay() {
        let err = TourConfig::from_toml_str("delay_ms = 600000").unwrap_err();
        assert!(matches!(err, Error::Config { .. }));
    }

    #[test]
    fn test_rejects_malformed_toml() {
        let err = TourConfig::from_toml_str("maximum = \"five\"").unwrap_err();
        assert!(matches!(err, Error::Config { .. }));

        let err = TourConfig::from_toml_str("colour = 1").unwrap_err();
        assert!(matches!(err, Error::Config { .. }));
    }

    #[test]
    fn test_load_from_file() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(file, "maximum = 3\nfill = -1\nword = \"banana\"").unwrap();

        let config = TourConfig::load(Some(file.path())).unwrap();
        assert_eq!(config.maximum, 3);
        assert_eq!(config.fill, -1);
        assert_eq!(config.word, "banana");
    }

    #[test]
    fn test_load_without_path_uses_defaults() {
        assert_eq!(TourConfig::load(None).unwrap(), TourConfig::default());
    }

    #[test]
    fn test_load_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("absent.toml");
        let err = TourConfig::load(Some(missing.as_path())).unwrap_err();
        assert!(matches!(err, Error::Io { .. }));
    }
}
