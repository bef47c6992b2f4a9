//! Engine configuration.
//!
//! Every field has a default, so an empty (or missing) file yields [`CatalogConfig::default`].
//!
//! ```toml
//! debounce_ms = 700
//! spinner_delay_ms = 150
//! mailbox_capacity = 32
//! sort_key = "price"
//! reset_page_on_sort = true
//! ```

use serde::Deserialize;
use std::path::{Path, PathBuf};
use std::time::Duration;
use thiserror::Error;
use tracing::{debug, info};

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("cannot read config file {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid config: {0}")]
    Parse(#[from] toml::de::Error),
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct CatalogConfig {
    /// Quiet period before a typed keyword is committed.
    #[serde(default = "default_debounce_ms")]
    pub debounce_ms: u64,

    /// How long a request must stay pending before the busy indicator shows.
    #[serde(default = "default_spinner_delay_ms")]
    pub spinner_delay_ms: u64,

    #[serde(default = "default_mailbox_capacity")]
    pub mailbox_capacity: usize,

    /// Fixed `sortBy` parameter sent with every listing request.
    #[serde(default = "default_sort_key")]
    pub sort_key: String,

    /// Whether toggling the sort order returns to page 1.
    #[serde(default = "default_true")]
    pub reset_page_on_sort: bool,
}

fn default_debounce_ms() -> u64 {
    700
}

fn default_spinner_delay_ms() -> u64 {
    150
}

fn default_mailbox_capacity() -> usize {
    32
}

fn default_sort_key() -> String {
    "price".into()
}

fn default_true() -> bool {
    true
}

impl Default for CatalogConfig {
    fn default() -> Self {
        Self {
            debounce_ms: default_debounce_ms(),
            spinner_delay_ms: default_spinner_delay_ms(),
            mailbox_capacity: default_mailbox_capacity(),
            sort_key: default_sort_key(),
            reset_page_on_sort: default_true(),
        }
    }
}

impl CatalogConfig {
    pub fn debounce(&self) -> Duration {
        Duration::from_millis(self.debounce_ms)
    }

    pub fn spinner_delay(&self) -> Duration {
        Duration::from_millis(self.spinner_delay_ms)
    }

    pub fn from_toml_str(raw: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(raw)?;
        debug!(?config, "Parsed config");
        Ok(config)
    }

    /// Loads `path`, or the defaults when the file does not exist.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        match std::fs::read_to_string(path) {
            Ok(raw) => {
                info!(path = %path.display(), "Loading config");
                Self::from_toml_str(&raw)
            }
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                info!(path = %path.display(), "No config file, using defaults");
                Ok(Self::default())
            }
            Err(source) => Err(ConfigError::Io {
                path: path.to_path_buf(),
                source,
            }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_config_uses_defaults() {
        let config = CatalogConfig::from_toml_str("").unwrap();
        assert_eq!(config, CatalogConfig::default());
        assert_eq!(config.debounce(), Duration::from_millis(700));
        assert_eq!(config.spinner_delay(), Duration::from_millis(150));
        assert_eq!(config.sort_key, "price");
        assert!(config.reset_page_on_sort);
    }

    #[test]
    fn test_partial_config_overrides_fields() {
        let config = CatalogConfig::from_toml_str(
            "debounce_ms = 300\nreset_page_on_sort = false\n",
        )
        .unwrap();
        assert_eq!(config.debounce_ms, 300);
        assert!(!config.reset_page_on_sort);
        assert_eq!(config.spinner_delay_ms, 150);
        assert_eq!(config.mailbox_capacity, 32);
    }

    #[test]
    fn test_invalid_config_is_error() {
        let err = CatalogConfig::from_toml_str("debounce_ms = \"soon\"").unwrap_err();
        assert!(matches!(err, ConfigError::Parse(_)));
    }

    #[test]
    fn test_missing_file_falls_back_to_defaults() {
        let config = CatalogConfig::load("/nonexistent/catalog-query.toml").unwrap();
        assert_eq!(config, CatalogConfig::default());
    }
}
