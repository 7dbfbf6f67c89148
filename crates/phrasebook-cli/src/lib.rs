//! # Phrasebook CLI
//!
//! Command line front end over the phrase resolution engine: resolve single
//! keys, list loaded locales and gate pack coverage in CI.

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

pub mod cli;

pub use cli::{Cli, Command};

use anyhow::{Context, Result};
use phrasebook_common::PhrasebookError;
use phrasebook_config::{Config, ConfigCache, ConfigLoader};
use phrasebook_i18n::{CoverageReport, PackLoader, PluralSelector, Resolver};
use std::io::Write;
use std::process::ExitCode;
use std::sync::Arc;
use tracing::{debug, info, warn};

/// Result of a command that ran to completion
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// Command succeeded
    Success,
    /// `check` found coverage defects
    CheckFailed,
}

impl From<Outcome> for ExitCode {
    fn from(outcome: Outcome) -> Self {
        match outcome {
            Outcome::Success => ExitCode::SUCCESS,
            Outcome::CheckFailed => ExitCode::from(2),
        }
    }
}

/// Load configuration from `--config` or the default search path, then apply command line overrides
pub fn load_config(cli: &Cli) -> Result<Arc<Config>> {
    let config = match &cli.config {
        Some(path) => ConfigLoader::load_from_file(path)
            .with_context(|| format!("loading configuration from {}", path.display()))?,
        None => ConfigLoader::load().context("loading configuration")?,
    };

    let cache = ConfigCache::new(config);
    cli.apply_overrides(&cache)
        .context("applying command line overrides")?;
    Ok(cache.get())
}

/// Loaded packs plus the settings they were loaded with
#[derive(Debug)]
pub struct App {
    config: Arc<Config>,
    resolver: Resolver,
}

impl App {
    /// Load every pack from the configured directory
    pub fn from_config(config: Arc<Config>) -> Result<Self> {
        let settings = &config.i18n;
        let registry = PackLoader::new(&settings.packs_dir)
            .load_registry(&settings.default_locale)
            .map_err(|e| PhrasebookError::localization_in(settings.default_locale.as_str(), e))
            .with_context(|| {
                format!(
                    "loading locale packs from {} (default locale {})",
                    settings.packs_dir.display(),
                    settings.default_locale
                )
            })?;

        info!(
            "Loaded {} locale(s) from {:?}",
            registry.locales().len(),
            settings.packs_dir
        );

        let resolver =
            Resolver::with_plural_rules(Arc::new(registry), PluralSelector::with_builtin_rules());
        Ok(Self { config, resolver })
    }

    /// Resolver over the loaded packs
    pub fn resolver(&self) -> &Resolver {
        &self.resolver
    }

    /// Run `command`, writing its output to `out`
    pub fn run<W: Write>(&self, command: &Command, out: &mut W) -> Result<Outcome> {
        match command {
            Command::Resolve {
                locale,
                key,
                count,
                explain,
                args,
            } => self.resolve(locale, key, *count, args, *explain, out),
            Command::Check { strict } => self.check(*strict || self.config.i18n.strict_coverage, out),
            Command::Locales => self.locales(out),
        }
    }

    fn resolve<W: Write>(
        &self,
        locale: &str,
        key: &str,
        count: Option<i64>,
        args: &[String],
        explain: bool,
        out: &mut W,
    ) -> Result<Outcome> {
        debug!("Resolving '{}' for locale {}", key, locale);
        let resolved = self
            .resolver
            .resolve_detailed(locale, key, count, args)
            .with_context(|| format!("resolving '{key}' for locale {locale}"))?;

        writeln!(out, "{}", resolved.text)?;
        if explain {
            if resolved.fell_back {
                writeln!(out, "# from {} (fallback for {locale})", resolved.used_locale)?;
            } else {
                writeln!(out, "# from {}", resolved.used_locale)?;
            }
        }
        Ok(Outcome::Success)
    }

    fn check<W: Write>(&self, strict: bool, out: &mut W) -> Result<Outcome> {
        let snapshot = self.resolver.registry().snapshot();
        let report = CoverageReport::build(&snapshot).context("registry has no default locale")?;

        write!(out, "{report}")?;
        if report.is_clean(strict) {
            return Ok(Outcome::Success);
        }

        warn!("Coverage check failed (strict: {})", strict);
        Ok(Outcome::CheckFailed)
    }

    fn locales<W: Write>(&self, out: &mut W) -> Result<Outcome> {
        let snapshot = self.resolver.registry().snapshot();
        let default = snapshot.default_locale();

        for locale in snapshot.locales() {
            let marker = if Some(locale) == default { '*' } else { ' ' };
            let keys = snapshot.pack(locale).map_or(0, |pack| pack.len());
            writeln!(out, "{marker} {locale} ({keys} keys)")?;
        }
        Ok(Outcome::Success)
    }
}
