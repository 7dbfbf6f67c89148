//! Integration tests for phrasebook-config.

use phrasebook_config::{Config, ConfigCache, ConfigLoader};
use std::path::PathBuf;
use tempfile::TempDir;

#[test]
fn test_file_then_env_then_validation() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("phrasebook.toml");
    std::fs::write(
        &path,
        "[i18n]\ndefault_locale = \"de\"\npacks_dir = \"packs\"\n\n[logging]\nformat = \"pretty\"\n",
    )
    .unwrap();

    let config = ConfigLoader::load_config_with(&path, |var| {
        (var == "PHRASEBOOK_PACKS_DIR").then(|| "/var/lib/panel/locales".to_string())
    })
    .unwrap();

    assert_eq!(config.i18n.default_locale, "de");
    assert_eq!(config.i18n.packs_dir, PathBuf::from("/var/lib/panel/locales"));
    assert_eq!(config.logging.format, "pretty");
    // Unset sections keep their defaults.
    assert_eq!(config.logging.level, "info");
    assert!(!config.i18n.strict_coverage);
}

#[test]
fn test_env_override_is_validated() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("phrasebook.toml");
    std::fs::write(&path, "").unwrap();

    let result = ConfigLoader::load_config_with(&path, |var| {
        (var == "PHRASEBOOK_LOG_FORMAT").then(|| "xml".to_string())
    });
    assert!(result.is_err());
}

#[test]
fn test_config_cache() {
    let cache = ConfigCache::new(Config::default());
    let original = cache.get();

    let mut next = Config::default();
    next.i18n.default_locale = "pt-BR".to_string();
    cache.update(next).unwrap();

    assert_eq!(cache.get().i18n.default_locale, "pt-BR");
    assert_eq!(original.i18n.default_locale, "en");

    let mut invalid = Config::default();
    invalid.logging.level = String::new();
    assert!(cache.update(invalid).is_err());
    assert_eq!(cache.get().i18n.default_locale, "pt-BR");
}

#[test]
fn test_logging_settings_convert() {
    let mut config = Config::default();
    config.logging.format = "json".to_string();
    config.logging.file = Some("/tmp/phrasebook.log".to_string());

    let logging = config.logging.to_logging_config();
    assert_eq!(logging.format, phrasebook_common::LogFormat::Json);
    assert_eq!(logging.file_path.as_deref(), Some("/tmp/phrasebook.log"));
}
