//! Plural variant selection
//!
//! Every locale uses the two-arm rule (`1` picks variant 0, anything else
//! picks variant 1) unless a rule is registered for its code or its primary
//! language. Rules map a count to a variant index; the selector checks the
//! index against the entry's arity.

use crate::error::{I18nError, I18nResult};
use crate::locale::{canonical, primary_language};
use std::collections::HashMap;
use std::fmt;
use std::sync::Arc;
use tracing::debug;

/// A named function from count to variant index
#[derive(Clone)]
pub struct PluralRule {
    name: String,
    select: Arc<dyn Fn(i64) -> usize + Send + Sync>,
}

impl fmt::Debug for PluralRule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PluralRule").field("name", &self.name).finish()
    }
}

impl PluralRule {
    /// Wrap a custom rule function
    pub fn new<F>(name: impl Into<String>, select: F) -> Self
    where
        F: Fn(i64) -> usize + Send + Sync + 'static,
    {
        Self {
            name: name.into(),
            select: Arc::new(select),
        }
    }

    /// Singular for exactly 1, plural for everything else (0 and negatives included)
    pub fn two_arm() -> Self {
        Self::new("two_arm", |count| usize::from(count != 1))
    }

    /// Singular for 0 and 1, plural otherwise (French-style)
    pub fn zero_one_singular() -> Self {
        Self::new("zero_one_singular", |count| usize::from(!matches!(count, 0 | 1)))
    }

    /// One / few / many (Russian, Ukrainian, Belarusian)
    pub fn east_slavic() -> Self {
        Self::new("east_slavic", |count| {
            let n = count.unsigned_abs();
            let (mod10, mod100) = (n % 10, n % 100);
            if mod10 == 1 && mod100 != 11 {
                0
            } else if (2..=4).contains(&mod10) && !(12..=14).contains(&mod100) {
                1
            } else {
                2
            }
        })
    }

    /// Rule name, for diagnostics
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Variant index this rule picks for `count`
    pub fn index_for(&self, count: i64) -> usize {
        (self.select)(count)
    }
}

/// Per-locale plural rules with a two-arm default
#[derive(Debug, Clone)]
pub struct PluralSelector {
    rules: HashMap<String, PluralRule>,
    fallback: PluralRule,
}

impl Default for PluralSelector {
    fn default() -> Self {
        Self::new()
    }
}

impl PluralSelector {
    /// Selector with no locale-specific rules
    pub fn new() -> Self {
        Self {
            rules: HashMap::new(),
            fallback: PluralRule::two_arm(),
        }
    }

    /// Selector preloaded with the built-in rules for common locales
    pub fn with_builtin_rules() -> Self {
        let mut selector = Self::new();
        for code in ["fr", "pt-BR"] {
            selector.register(code, PluralRule::zero_one_singular());
        }
        for code in ["ru", "uk", "be"] {
            selector.register(code, PluralRule::east_slavic());
        }
        selector
    }

    /// Register a rule for a locale code or a bare language (`"de"` covers `"de-AT"`)
    ///
    /// Codes are stored in canonical form, so `"pt_BR"` and `"pt-BR"` name the same rule.
    pub fn register(&mut self, locale: impl Into<String>, rule: PluralRule) {
        let locale = locale.into();
        let locale = canonical(&locale).unwrap_or(locale);
        debug!("Registering plural rule '{}' for locale {}", rule.name(), locale);
        self.rules.insert(locale, rule);
    }

    /// Rule applied for `locale`: exact code, then primary language, then two-arm
    pub fn rule_for(&self, locale: &str) -> &PluralRule {
        if let Some(rule) = self.rules.get(locale) {
            return rule;
        }
        if let Some(rule) = canonical(locale).and_then(|code| self.rules.get(&code)) {
            return rule;
        }
        primary_language(locale)
            .and_then(|language| self.rules.get(&language))
            .unwrap_or(&self.fallback)
    }

    /// Pick the variant of a plural entry for `count` under `locale`'s rule
    pub fn select<'a>(&self, locale: &str, variants: &'a [String], count: i64) -> I18nResult<&'a str> {
        let index = self.rule_for(locale).index_for(count);
        variants
            .get(index)
            .map(String::as_str)
            .ok_or(I18nError::ArityMismatch {
                index,
                arity: variants.len(),
            })
    }
}
