use anyhow::{Context, Result};
use config::{Config, Environment, File};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Prefix for environment overrides, e.g. `URL_INSPECTOR_HISTORY_FILE`
pub const ENV_PREFIX: &str = "URL_INSPECTOR";

/// Default number of URLs decomposed at once in batch mode
pub const BATCH_CONCURRENCY: usize = 10;

/// Configuration for the CLI
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// JSON file holding the URL history
    pub history_file: PathBuf,

    /// Directory for log files; logs go to stderr when unset
    pub log_dir: Option<String>,

    /// Whether successfully parsed URLs are recorded in the history
    pub record_history: bool,

    /// How many URLs batch mode decomposes at once
    pub batch_concurrency: usize,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            history_file: PathBuf::from("url_history.json"),
            log_dir: None,
            record_history: true,
            batch_concurrency: BATCH_CONCURRENCY,
        }
    }
}

impl AppConfig {
    /// Layers an optional config file and `URL_INSPECTOR_*` variables over the defaults
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let mut builder = Config::builder();
        if let Some(path) = path {
            builder = builder.add_source(File::from(path));
        }
        builder = builder.add_source(Environment::with_prefix(ENV_PREFIX));

        let settings = builder.build().context("Failed to load configuration")?;
        settings
            .try_deserialize()
            .context("Invalid configuration values")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_defaults_without_file() {
        let config = AppConfig::load(None).unwrap();
        assert_eq!(config.batch_concurrency, BATCH_CONCURRENCY);
    }

    #[test]
    fn test_file_overrides_defaults() {
        let mut file = tempfile::Builder::new().suffix(".toml").tempfile().unwrap();
        writeln!(file, "history_file = \"/tmp/urls.json\"").unwrap();
        writeln!(file, "record_history = false").unwrap();
        writeln!(file, "batch_concurrency = 4").unwrap();

        let config = AppConfig::load(Some(file.path())).unwrap();

        assert_eq!(config.history_file, PathBuf::from("/tmp/urls.json"));
        assert!(!config.record_history);
        assert_eq!(config.batch_concurrency, 4);
        assert_eq!(config.log_dir, None);
    }

    #[test]
    fn test_missing_file_is_an_error() {
        let result = AppConfig::load(Some(Path::new("/nonexistent/url_inspector.toml")));
        assert!(result.is_err());
    }
}
