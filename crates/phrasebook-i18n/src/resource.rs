//! Loading locale packs from a directory
//!
//! Each locale lives in `<dir>/<locale>.json` or `<dir>/<locale>.toml`. When
//! both exist the JSON file wins.

use crate::error::{I18nError, I18nResult};
use crate::locale::is_well_formed;
use crate::pack::LocalePack;
use crate::registry::PackRegistry;
use std::collections::BTreeSet;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, info, warn};

/// Supported pack file formats
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PackFormat {
    /// `key: "template"` / `key: ["one", "other"]` JSON object
    Json,
    /// `key = "template"` / `key = ["one", "other"]` TOML table
    Toml,
}

impl PackFormat {
    /// Lookup order when a locale has files in several formats
    pub const ALL: [PackFormat; 2] = [PackFormat::Json, PackFormat::Toml];

    /// File extension for this format
    pub fn extension(self) -> &'static str {
        match self {
            Self::Json => "json",
            Self::Toml => "toml",
        }
    }

    /// Format for a file extension
    pub fn from_extension(extension: &str) -> Option<Self> {
        match extension.to_ascii_lowercase().as_str() {
            "json" => Some(Self::Json),
            "toml" => Some(Self::Toml),
            _ => None,
        }
    }

    /// Parse `source` as a pack in this format
    pub fn parse(self, locale: &str, source: &str) -> I18nResult<LocalePack> {
        match self {
            Self::Json => LocalePack::from_json_str(locale, source),
            Self::Toml => LocalePack::from_toml_str(locale, source),
        }
    }
}

/// Reads locale packs from a base directory
#[derive(Debug, Clone)]
pub struct PackLoader {
    base_dir: PathBuf,
}

impl PackLoader {
    /// Create a loader rooted at `base_dir`
    pub fn new<P: AsRef<Path>>(base_dir: P) -> Self {
        Self {
            base_dir: base_dir.as_ref().to_path_buf(),
        }
    }

    /// Base directory for pack files
    pub fn base_dir(&self) -> &Path {
        &self.base_dir
    }

    /// Locale codes with a pack file in the base directory, sorted
    pub fn discover(&self) -> I18nResult<Vec<String>> {
        let entries = fs::read_dir(&self.base_dir).map_err(|e| load_error(&self.base_dir, e))?;

        let mut locales = BTreeSet::new();
        for entry in entries {
            let path = entry.map_err(|e| load_error(&self.base_dir, e))?.path();
            if !path.is_file() {
                continue;
            }

            let Some(extension) = path.extension().and_then(|e| e.to_str()) else {
                continue;
            };
            if PackFormat::from_extension(extension).is_none() {
                continue;
            }

            match path.file_stem().and_then(|s| s.to_str()) {
                Some(stem) if is_well_formed(stem) => {
                    locales.insert(stem.to_string());
                }
                _ => warn!("Skipping pack file with unusable locale name: {:?}", path),
            }
        }

        debug!("Discovered {} locale(s) in {:?}", locales.len(), self.base_dir);
        Ok(locales.into_iter().collect())
    }

    /// Path of the pack file used for `locale`, if any
    pub fn pack_path(&self, locale: &str) -> Option<(PathBuf, PackFormat)> {
        PackFormat::ALL.into_iter().find_map(|format| {
            let path = self
                .base_dir
                .join(format!("{locale}.{}", format.extension()));
            path.is_file().then_some((path, format))
        })
    }

    /// Load and validate the pack for `locale`
    pub fn load_locale(&self, locale: &str) -> I18nResult<LocalePack> {
        let (path, format) = self.pack_path(locale).ok_or_else(|| {
            warn!("No pack file for locale {} in {:?}", locale, self.base_dir);
            I18nError::unknown_locale(locale)
        })?;

        debug!("Loading pack file: {:?}", path);
        let source = fs::read_to_string(&path).map_err(|e| load_error(&path, e))?;
        let pack = format.parse(locale, &source)?;

        info!("Loaded pack for locale {} ({} keys)", locale, pack.len());
        Ok(pack)
    }

    /// Load every discovered pack; the first failure aborts the load
    pub fn load_all(&self) -> I18nResult<Vec<LocalePack>> {
        self.discover()?
            .iter()
            .map(|locale| self.load_locale(locale))
            .collect()
    }

    /// Load every pack and build a registry defaulting to `default_locale`
    pub fn load_registry(&self, default_locale: &str) -> I18nResult<PackRegistry> {
        PackRegistry::init(default_locale, self.load_all()?)
    }

    /// Re-read `locale` from disk and swap it into `registry`
    pub fn reload_into(&self, registry: &PackRegistry, locale: &str) -> I18nResult<()> {
        let pack = self.load_locale(locale)?;
        registry.reload(locale, pack)
    }
}

fn load_error(path: &Path, err: std::io::Error) -> I18nError {
    I18nError::PackLoad {
        path: path.display().to_string(),
        reason: err.to_string(),
    }
}

impl Default for PackLoader {
    fn default() -> Self {
        Self::new("locales")
    }
}
