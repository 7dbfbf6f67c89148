//! Translation coverage against the default pack
//!
//! Keys missing from a locale still resolve through fallback, so they are
//! reported but only fail a strict check. Orphan keys, placeholder count
//! differences and plain/plural disagreements fail every check: they either
//! can never be requested or render with the wrong argument shape.

use crate::pack::{Entry, LocalePack};
use crate::registry::RegistrySnapshot;
use crate::render::placeholder_count;
use std::fmt;

/// A key whose translation expects a different number of arguments
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlaceholderMismatch {
    /// Key in both packs
    pub key: String,
    /// Placeholders in the default template
    pub expected: usize,
    /// Placeholders in the translated template
    pub found: usize,
}

/// Coverage of one non-default locale
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LocaleCoverage {
    /// Locale code
    pub locale: String,
    /// Default-pack keys this locale translates
    pub translated: usize,
    /// Default-pack keys this locale lacks, sorted
    pub missing: Vec<String>,
    /// Keys only this locale has, sorted
    pub orphans: Vec<String>,
    /// Keys whose placeholder count differs from the default, sorted by key
    pub placeholder_mismatches: Vec<PlaceholderMismatch>,
    /// Keys that are plain in one pack and plural in the other, sorted
    pub kind_mismatches: Vec<String>,
}

impl LocaleCoverage {
    /// Share of default keys translated, in percent
    pub fn percent(&self, total: usize) -> f64 {
        if total == 0 {
            return 100.0;
        }
        #[allow(clippy::cast_precision_loss)]
        let ratio = self.translated as f64 / total as f64;
        ratio * 100.0
    }

    /// Whether the locale has no defects; `strict` also rejects missing keys
    pub fn is_clean(&self, strict: bool) -> bool {
        self.orphans.is_empty()
            && self.placeholder_mismatches.is_empty()
            && self.kind_mismatches.is_empty()
            && (!strict || self.missing.is_empty())
    }
}

/// Coverage of every registered locale against the default pack
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CoverageReport {
    /// Default locale the report compares against
    pub default_locale: String,
    /// Keys in the default pack
    pub total_keys: usize,
    /// One entry per non-default locale, sorted by locale
    pub locales: Vec<LocaleCoverage>,
}

impl CoverageReport {
    /// Build a report from a registry snapshot; `None` when no default is set
    pub fn build(snapshot: &RegistrySnapshot) -> Option<Self> {
        let default = snapshot.default_pack()?;

        let locales = snapshot
            .locales()
            .into_iter()
            .filter(|locale| *locale != default.locale())
            .filter_map(|locale| snapshot.pack(locale))
            .map(|pack| compare(default, pack))
            .collect();

        Some(Self {
            default_locale: default.locale().to_string(),
            total_keys: default.len(),
            locales,
        })
    }

    /// Whether every locale is clean
    pub fn is_clean(&self, strict: bool) -> bool {
        self.locales.iter().all(|locale| locale.is_clean(strict))
    }

    /// Coverage for one locale
    pub fn locale(&self, locale: &str) -> Option<&LocaleCoverage> {
        self.locales.iter().find(|c| c.locale == locale)
    }
}

fn max_placeholders(entry: &Entry) -> usize {
    entry.templates().map(placeholder_count).max().unwrap_or(0)
}

fn compare(default: &LocalePack, pack: &LocalePack) -> LocaleCoverage {
    let mut coverage = LocaleCoverage {
        locale: pack.locale().to_string(),
        translated: 0,
        missing: Vec::new(),
        orphans: Vec::new(),
        placeholder_mismatches: Vec::new(),
        kind_mismatches: Vec::new(),
    };

    for (key, reference) in default.iter() {
        let Some(translation) = pack.get(key) else {
            coverage.missing.push(key.to_string());
            continue;
        };
        coverage.translated += 1;

        if reference.is_plural() != translation.is_plural() {
            coverage.kind_mismatches.push(key.to_string());
            continue;
        }

        let expected = max_placeholders(reference);
        let found = max_placeholders(translation);
        if expected != found {
            coverage.placeholder_mismatches.push(PlaceholderMismatch {
                key: key.to_string(),
                expected,
                found,
            });
        }
    }

    coverage.orphans = pack
        .keys()
        .filter(|key| !default.contains_key(key))
        .map(str::to_string)
        .collect();

    coverage.missing.sort_unstable();
    coverage.orphans.sort_unstable();
    coverage.kind_mismatches.sort_unstable();
    coverage
        .placeholder_mismatches
        .sort_unstable_by(|a, b| a.key.cmp(&b.key));
    coverage
}

impl fmt::Display for CoverageReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "default locale: {} ({} keys)",
            self.default_locale, self.total_keys
        )?;

        for locale in &self.locales {
            writeln!(
                f,
                "{}: {}/{} translated ({:.1}%)",
                locale.locale,
                locale.translated,
                self.total_keys,
                locale.percent(self.total_keys)
            )?;
            for key in &locale.missing {
                writeln!(f, "  missing: {key}")?;
            }
            for key in &locale.orphans {
                writeln!(f, "  orphan: {key}")?;
            }
            for mismatch in &locale.placeholder_mismatches {
                writeln!(
                    f,
                    "  placeholders: {} expects {}, found {}",
                    mismatch.key, mismatch.expected, mismatch.found
                )?;
            }
            for key in &locale.kind_mismatches {
                writeln!(f, "  plain/plural mismatch: {key}")?;
            }
        }

        Ok(())
    }
}
