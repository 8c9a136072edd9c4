use std::{fs, num::NonZeroUsize, path::Path};

use anyhow::{Context, Result};

/// The lister configuration object
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Config {
    /// The number of columns used by the column grid layout
    #[serde(default = "default_columns")]
    pub columns: NonZeroUsize,

    /// The maximum number of entries collected from a single directory
    #[serde(default = "default_max_entries")]
    pub max_entries: usize,

    /// The level filter applied to diagnostic logs
    #[serde(default = "default_log_level")]
    pub log_level: String,
}

fn default_columns() -> NonZeroUsize {
    NonZeroUsize::new(3).expect("3 is not zero")
}

fn default_max_entries() -> usize {
    1024
}

fn default_log_level() -> String {
    "off".to_string()
}

impl Config {
    /// Read a configuration file from the given path
    pub fn read(path: &Path) -> Result<Config> {
        let raw = fs::read_to_string(path)
            .with_context(|| format!("failed to read config file {}", path.display()))?;
        toml::from_str(&raw)
            .with_context(|| format!("failed to parse config file {}", path.display()))
    }
}

impl Default for Config {
    /// The default configuration
    fn default() -> Self {
        toml::from_str("").expect("empty object should be valid")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_document_yields_defaults() {
        let config = Config::default();
        assert_eq!(config.columns.get(), 3);
        assert_eq!(config.max_entries, 1024);
        assert_eq!(config.log_level, "off");
    }

    #[test]
    fn reads_overrides_from_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("lister.toml");
        fs::write(&path, "columns = 5\nmax_entries = 10\nlog_level = \"debug\"\n").unwrap();

        let config = Config::read(&path).unwrap();
        assert_eq!(config.columns.get(), 5);
        assert_eq!(config.max_entries, 10);
        assert_eq!(config.log_level, "debug");
    }

    #[test]
    fn rejects_zero_columns() {
        assert!(toml::from_str::<Config>("columns = 0").is_err());
    }

    #[test]
    fn rejects_unknown_fields() {
        assert!(toml::from_str::<Config>("colour = true").is_err());
    }

    #[test]
    fn missing_file_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        assert!(Config::read(&dir.path().join("nope.toml")).is_err());
    }
}
