//! Configuration schema definitions using serde with validation attributes.

use phrasebook_common::{LogFormat, LoggingConfig};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use validator::Validate;

/// Main configuration structure for Phrasebook.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, Validate)]
#[serde(default)]
pub struct Config {
    /// Locale pack settings.
    #[validate]
    pub i18n: I18nSettings,
    /// Logging settings.
    #[validate]
    pub logging: LogSettings,
}

/// Locale pack settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate)]
#[serde(default)]
pub struct I18nSettings {
    /// Locale every lookup falls back to.
    #[validate(custom(
        function = "crate::validation::validate_locale_code",
        message = "Default locale must be a valid language tag"
    ))]
    pub default_locale: String,
    /// Directory holding `<locale>.json` / `<locale>.toml` pack files.
    pub packs_dir: PathBuf,
    /// Treat keys missing from a non-default pack as coverage failures.
    pub strict_coverage: bool,
}

impl Default for I18nSettings {
    fn default() -> Self {
        Self {
            default_locale: "en".to_string(),
            packs_dir: PathBuf::from("locales"),
            strict_coverage: false,
        }
    }
}

/// Logging settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate)]
#[serde(default)]
pub struct LogSettings {
    /// `EnvFilter` directive, e.g. `info` or `phrasebook_i18n=debug`.
    #[validate(length(min = 1, message = "Log level cannot be empty"))]
    pub level: String,
    /// One of `pretty`, `compact`, `json`.
    #[validate(custom(
        function = "crate::validation::validate_log_format",
        message = "Log format must be pretty, compact or json"
    ))]
    pub format: String,
    /// Optional log file; stderr when unset.
    pub file: Option<String>,
}

impl Default for LogSettings {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            format: LogFormat::Compact.as_str().to_string(),
            file: None,
        }
    }
}

impl LogSettings {
    /// Convert into the logging subsystem's configuration.
    pub fn to_logging_config(&self) -> LoggingConfig {
        LoggingConfig {
            level: self.level.clone(),
            format: LogFormat::from_name(&self.format).unwrap_or_default(),
            file_path: self.file.clone(),
            ..LoggingConfig::default()
        }
    }
}
