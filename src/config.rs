//! Service configuration
//!
//! Configuration is plain data with defaults for every field, loaded from
//! JSON by the host and validated before use.

use std::fs;
use std::path::Path;
use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

fn default_maxsize() -> usize {
    256
}

fn default_ttl_secs() -> u64 {
    600
}

/// Run-SG cache limits
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CacheConfig {
    /// Maximum number of cached runs
    #[serde(default = "default_maxsize")]
    pub maxsize: usize,
    /// Seconds an entry stays valid after its last `put`
    #[serde(default = "default_ttl_secs")]
    pub ttl_secs: u64,
}

impl Default for CacheConfig {
    fn default() -> Self {
        Self {
            maxsize: default_maxsize(),
            ttl_secs: default_ttl_secs(),
        }
    }
}

impl CacheConfig {
    pub fn ttl(&self) -> Duration {
        Duration::from_secs(self.ttl_secs)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.maxsize == 0 {
            return Err(ConfigError::ZeroMaxsize);
        }
        if self.ttl_secs == 0 {
            return Err(ConfigError::ZeroTtl);
        }
        Ok(())
    }
}

/// Configuration for [`crate::service::RunSgService`]
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ServiceConfig {
    #[serde(default)]
    pub cache: CacheConfig,
}

impl ServiceConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_cache_maxsize(mut self, maxsize: usize) -> Self {
        self.cache.maxsize = maxsize;
        self
    }

    pub fn with_cache_ttl(mut self, ttl: Duration) -> Self {
        self.cache.ttl_secs = ttl.as_secs();
        self
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        self.cache.validate()
    }

    /// Parse and validate a JSON document
    pub fn from_json_str(json: &str) -> Result<Self, ConfigError> {
        let config: ServiceConfig = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Load and validate a JSON config file
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let content = fs::read_to_string(path)?;
        Self::from_json_str(&content)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_defaults() {
        let config = ServiceConfig::default();
        assert_eq!(config.cache.maxsize, 256);
        assert_eq!(config.cache.ttl(), Duration::from_secs(600));
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_partial_json_uses_defaults() {
        let config = ServiceConfig::from_json_str(r#"{"cache": {"maxsize": 8}}"#).unwrap();
        assert_eq!(config.cache.maxsize, 8);
        assert_eq!(config.cache.ttl_secs, 600);

        let empty = ServiceConfig::from_json_str("{}").unwrap();
        assert_eq!(empty, ServiceConfig::default());
    }

    #[test]
    fn test_rejects_zero_values() {
        assert!(matches!(
            ServiceConfig::from_json_str(r#"{"cache": {"maxsize": 0}}"#),
            Err(ConfigError::ZeroMaxsize)
        ));
        assert!(matches!(
            ServiceConfig::new().with_cache_ttl(Duration::from_millis(500)).validate(),
            Err(ConfigError::ZeroTtl)
        ));
    }

    #[test]
    fn test_load_from_file() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("sg.json");
        fs::write(&path, r#"{"cache": {"maxsize": 32, "ttl_secs": 60}}"#).unwrap();

        let config = ServiceConfig::load(&path).unwrap();
        assert_eq!(config, ServiceConfig::new().with_cache_maxsize(32).with_cache_ttl(Duration::from_secs(60)));
    }

    #[test]
    fn test_load_reports_errors() {
        let temp_dir = TempDir::new().unwrap();
        assert!(matches!(
            ServiceConfig::load(temp_dir.path().join("missing.json")),
            Err(ConfigError::Io(_))
        ));

        let bad = temp_dir.path().join("bad.json");
        fs::write(&bad, "not json").unwrap();
        assert!(matches!(ServiceConfig::load(&bad), Err(ConfigError::Json(_))));
    }
}
