//! Command line definition

use clap::{Parser, Subcommand};
use phrasebook_common::Result;
use phrasebook_config::ConfigCache;
use std::path::PathBuf;

/// Resolve phrases and check locale pack coverage
#[derive(Debug, Parser)]
#[command(name = "phrasebook", version, about)]
pub struct Cli {
    /// Configuration file (defaults to ./phrasebook.toml when present)
    #[arg(long, global = true, env = "PHRASEBOOK_CONFIG")]
    pub config: Option<PathBuf>,

    /// Directory holding the locale pack files
    #[arg(long, global = true)]
    pub packs: Option<PathBuf>,

    /// Locale every lookup falls back to
    #[arg(long, global = true)]
    pub default_locale: Option<String>,

    /// Log filter, e.g. `debug` or `phrasebook_i18n=trace`
    #[arg(long, global = true)]
    pub log_level: Option<String>,

    #[command(subcommand)]
    pub command: Command,
}

/// Subcommands
#[derive(Debug, Clone, PartialEq, Eq, Subcommand)]
pub enum Command {
    /// Render one key for a locale
    Resolve {
        /// Requested locale
        #[arg(long, short)]
        locale: String,
        /// Key to resolve
        key: String,
        /// Count for plural entries
        #[arg(long, allow_negative_numbers = true)]
        count: Option<i64>,
        /// Also print which locale supplied the text
        #[arg(long)]
        explain: bool,
        /// Positional arguments for `%s` placeholders
        args: Vec<String>,
    },
    /// Report pack coverage against the default locale
    Check {
        /// Fail on keys missing from a non-default pack
        #[arg(long)]
        strict: bool,
    },
    /// List loaded locales
    Locales,
}

impl Cli {
    /// Apply command line overrides on top of the loaded configuration
    pub fn apply_overrides(&self, cache: &ConfigCache) -> Result<()> {
        if self.packs.is_none() && self.default_locale.is_none() && self.log_level.is_none() {
            return Ok(());
        }

        cache.modify(|config| {
            if let Some(packs) = &self.packs {
                config.i18n.packs_dir.clone_from(packs);
            }
            if let Some(locale) = &self.default_locale {
                config.i18n.default_locale.clone_from(locale);
            }
            if let Some(level) = &self.log_level {
                config.logging.level.clone_from(level);
            }
        })
    }
}
