//! Configuration loading utilities

use crate::Config;
use phrasebook_common::{PhrasebookError, Result as PhrasebookResult};
use std::env;
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::{debug, info};
use validator::Validate;

/// Environment variable naming an explicit config file.
pub const CONFIG_PATH_VAR: &str = "PHRASEBOOK_CONFIG";

/// Config file looked up in the working directory when no path is given.
pub const DEFAULT_CONFIG_FILE: &str = "phrasebook.toml";

/// Configuration loading errors
#[derive(Debug, Error)]
pub enum ConfigError {
    /// I/O error when reading configuration file
    #[error("Failed to read configuration file: {0}")]
    IoError(#[from] std::io::Error),

    /// TOML parsing error
    #[error("Failed to parse TOML configuration: {0}")]
    ParseError(#[from] toml::de::Error),

    /// Configuration validation error
    #[error("Configuration validation failed: {0}")]
    ValidationError(#[from] validator::ValidationErrors),

    /// Environment variable parsing error
    #[error("Failed to parse environment variable '{var}': {source}")]
    EnvParseError {
        var: String,
        #[source]
        source: Box<dyn std::error::Error + Send + Sync>,
    },
}

impl From<ConfigError> for PhrasebookError {
    fn from(err: ConfigError) -> Self {
        PhrasebookError::config_with_source("Configuration loading error", err)
    }
}

/// Configuration loader for the application
pub struct ConfigLoader;

impl ConfigLoader {
    /// Load configuration from a TOML file with environment variable overrides
    pub fn load_config<P: AsRef<Path>>(path: P) -> Result<Config, ConfigError> {
        Self::load_config_with(path, |var| env::var(var).ok())
    }

    /// Load configuration from a TOML file, resolving overrides through `lookup`
    pub fn load_config_with<P, F>(path: P, lookup: F) -> Result<Config, ConfigError>
    where
        P: AsRef<Path>,
        F: Fn(&str) -> Option<String>,
    {
        debug!("Loading configuration from {:?}", path.as_ref());
        let content = std::fs::read_to_string(path.as_ref())?;
        let mut config: Config = toml::from_str(&content)?;

        Self::apply_overrides(&mut config, lookup)?;
        config.validate()?;

        Ok(config)
    }

    /// Load configuration from the default sources
    ///
    /// Order: the file named by `PHRASEBOOK_CONFIG`, then `phrasebook.toml`
    /// in the working directory, then built-in defaults. Environment
    /// overrides apply in every case.
    pub fn load() -> PhrasebookResult<Config> {
        let config = match Self::discover(env::var(CONFIG_PATH_VAR).ok()) {
            Some(path) => {
                info!("Using configuration file {:?}", path);
                Self::load_config(&path)?
            }
            None => {
                info!("No configuration file found, using defaults");
                Self::from_defaults_with(|var| env::var(var).ok())?
            }
        };

        Ok(config)
    }

    /// Load configuration from a specific file
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> PhrasebookResult<Config> {
        Ok(Self::load_config(path)?)
    }

    /// Build the default configuration with overrides applied
    pub fn from_defaults_with<F>(lookup: F) -> Result<Config, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Config::default();
        Self::apply_overrides(&mut config, lookup)?;
        config.validate()?;
        Ok(config)
    }

    fn discover(explicit: Option<String>) -> Option<PathBuf> {
        if let Some(path) = explicit {
            return Some(PathBuf::from(path));
        }

        let local = PathBuf::from(DEFAULT_CONFIG_FILE);
        local.exists().then_some(local)
    }

    /// Apply `PHRASEBOOK_*` overrides to configuration
    fn apply_overrides<F>(config: &mut Config, lookup: F) -> Result<(), ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(locale) = lookup("PHRASEBOOK_DEFAULT_LOCALE") {
            config.i18n.default_locale = locale;
        }

        if let Some(dir) = lookup("PHRASEBOOK_PACKS_DIR") {
            config.i18n.packs_dir = PathBuf::from(dir);
        }

        if let Some(strict) = lookup("PHRASEBOOK_STRICT") {
            config.i18n.strict_coverage =
                strict.trim().parse().map_err(|e| ConfigError::EnvParseError {
                    var: "PHRASEBOOK_STRICT".to_string(),
                    source: Box::new(e),
                })?;
        }

        if let Some(level) = lookup("PHRASEBOOK_LOG_LEVEL") {
            config.logging.level = level;
        }

        if let Some(format) = lookup("PHRASEBOOK_LOG_FORMAT") {
            config.logging.format = format;
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn create_test_config_file(content: &str) -> NamedTempFile {
        let mut file = NamedTempFile::new().expect("Failed to create temp file");
        file.write_all(content.as_bytes()).expect("Failed to write to temp file");
        file
    }

    fn no_env(_: &str) -> Option<String> {
        None
    }

    #[test]
    fn test_load_valid_config() {
        let content = r#"
[i18n]
default_locale = "de"
packs_dir = "/srv/panel/locales"
strict_coverage = true

[logging]
level = "debug"
format = "json"
"#;
        let file = create_test_config_file(content);
        let config = ConfigLoader::load_config_with(file.path(), no_env).unwrap();

        assert_eq!(config.i18n.default_locale, "de");
        assert_eq!(config.i18n.packs_dir, PathBuf::from("/srv/panel/locales"));
        assert!(config.i18n.strict_coverage);
        assert_eq!(config.logging.level, "debug");
        assert_eq!(config.logging.format, "json");
    }

    #[test]
    fn test_invalid_toml() {
        let file = create_test_config_file("[i18n\ndefault_locale = ");
        let result = ConfigLoader::load_config_with(file.path(), no_env);
        assert!(matches!(result, Err(ConfigError::ParseError(_))));
    }

    #[test]
    fn test_validation_error() {
        let file = create_test_config_file("[i18n]\ndefault_locale = \"??\"\n");
        let result = ConfigLoader::load_config_with(file.path(), no_env);
        assert!(matches!(result, Err(ConfigError::ValidationError(_))));
    }

    #[test]
    fn test_environment_overrides() {
        let vars: HashMap<&str, &str> = [
            ("PHRASEBOOK_DEFAULT_LOCALE", "fr"),
            ("PHRASEBOOK_PACKS_DIR", "/opt/locales"),
            ("PHRASEBOOK_STRICT", "true"),
            ("PHRASEBOOK_LOG_LEVEL", "trace"),
        ]
        .into_iter()
        .collect();

        let file = create_test_config_file("[i18n]\ndefault_locale = \"de\"\n");
        let config = ConfigLoader::load_config_with(file.path(), |var| {
            vars.get(var).map(|v| (*v).to_string())
        })
        .unwrap();

        assert_eq!(config.i18n.default_locale, "fr");
        assert_eq!(config.i18n.packs_dir, PathBuf::from("/opt/locales"));
        assert!(config.i18n.strict_coverage);
        assert_eq!(config.logging.level, "trace");
    }

    #[test]
    fn test_env_parse_error() {
        let result = ConfigLoader::from_defaults_with(|var| {
            (var == "PHRASEBOOK_STRICT").then(|| "sometimes".to_string())
        });
        assert!(matches!(result, Err(ConfigError::EnvParseError { .. })));
    }

    #[test]
    fn test_missing_config_file() {
        let result = ConfigLoader::load_config_with("/nonexistent/path/phrasebook.toml", no_env);
        assert!(matches!(result, Err(ConfigError::IoError(_))));
    }

    #[test]
    fn test_defaults_without_file() {
        let config = ConfigLoader::from_defaults_with(no_env).unwrap();
        assert_eq!(config, Config::default());
    }

    #[test]
    fn test_explicit_path_wins_discovery() {
        let found = ConfigLoader::discover(Some("/etc/phrasebook/custom.toml".to_string()));
        assert_eq!(found, Some(PathBuf::from("/etc/phrasebook/custom.toml")));
    }

    #[test]
    fn test_error_converts_to_common_error() {
        let err = ConfigLoader::load_from_file("/nonexistent/phrasebook.toml").unwrap_err();
        assert!(err.to_string().contains("Configuration error"));
    }
}
