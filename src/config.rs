//! Construction-time configuration, loaded from TOML.
//!
//! ```toml
//! [pool]
//! capacity = 3
//!
//! [indexer]
//! direction = "descending"
//! since = 10
//! ```
//!
//! Both tables are optional. A missing `since` means the direction's own
//! default start (`0` ascending, `usize::MAX` descending).

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;
use crate::indexer::Direction;
use crate::pool::DEFAULT_CAPACITY;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct PoolConfig {
    pub capacity: usize,
}

impl Default for PoolConfig {
    fn default() -> Self {
        PoolConfig {
            capacity: DEFAULT_CAPACITY,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct IndexerConfig {
    pub direction: Direction,
    pub since: Option<usize>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    pub pool: PoolConfig,
    pub indexer: IndexerConfig,
}

impl Config {
    pub fn from_toml_str(content: &str) -> Result<Self, ConfigError> {
        let config: Config = toml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let content = fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml_str(&content)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.pool.capacity == 0 {
            return Err(ConfigError::ZeroCapacity);
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn empty_document_uses_defaults() {
        let config = Config::from_toml_str("").unwrap();
        assert_eq!(config.pool.capacity, 3);
        assert_eq!(config.indexer.direction, Direction::Ascending);
        assert_eq!(config.indexer.since, None);
    }

    #[test]
    fn parses_both_tables() {
        let config = Config::from_toml_str(
            r#"
            [pool]
            capacity = 5

            [indexer]
            direction = "descending"
            since = 10
            "#,
        )
        .unwrap();
        assert_eq!(config.pool.capacity, 5);
        assert_eq!(config.indexer.direction, Direction::Descending);
        assert_eq!(config.indexer.since, Some(10));
    }

    #[test]
    fn zero_capacity_is_rejected() {
        let result = Config::from_toml_str("[pool]\ncapacity = 0\n");
        assert!(matches!(result, Err(ConfigError::ZeroCapacity)));
    }

    #[test]
    fn negative_capacity_is_a_parse_error() {
        let result = Config::from_toml_str("[pool]\ncapacity = -1\n");
        assert!(matches!(result, Err(ConfigError::Parse(_))));
    }

    #[test]
    fn unknown_direction_is_a_parse_error() {
        let result = Config::from_toml_str("[indexer]\ndirection = \"sideways\"\n");
        assert!(matches!(result, Err(ConfigError::Parse(_))));
    }

    #[test]
    fn unknown_key_is_a_parse_error() {
        let result = Config::from_toml_str("[pool]\nsize = 4\n");
        assert!(matches!(result, Err(ConfigError::Parse(_))));
    }

    #[test]
    fn loads_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "[pool]\ncapacity = 7").unwrap();

        let config = Config::from_file(file.path()).unwrap();
        assert_eq!(config.pool.capacity, 7);
    }

    #[test]
    fn missing_file_is_an_io_error() {
        let dir = tempfile::tempdir().unwrap();
        let result = Config::from_file(dir.path().join("absent.toml"));
        assert!(matches!(result, Err(ConfigError::Io { .. })));
    }
}
