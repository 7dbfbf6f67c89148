//! Phrase resolution
//!
//! The resolver is the single entry point for turning `(locale, key, count,
//! args)` into text. It holds no mutable state: every call reads one registry
//! snapshot, picks a template and renders it.

use crate::error::{I18nError, I18nResult};
use crate::pack::Entry;
use crate::plural::PluralSelector;
use crate::registry::PackRegistry;
use crate::render::render;
use std::sync::Arc;
use tracing::debug;

/// A rendered phrase plus where it came from
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Resolved {
    /// Final text
    pub text: String,
    /// Locale whose pack supplied the template
    pub used_locale: String,
    /// Whether the default locale stood in for the requested one
    pub fell_back: bool,
}

/// Key, optional count and positional arguments for one resolution
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Request {
    key: String,
    count: Option<i64>,
    args: Vec<String>,
}

impl Request {
    /// Request for `key` with no count and no arguments
    pub fn new(key: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            ..Default::default()
        }
    }

    /// Set the count used for plural selection
    pub fn count(mut self, count: i64) -> Self {
        self.count = Some(count);
        self
    }

    /// Append one positional argument
    pub fn arg(mut self, value: impl ToString) -> Self {
        self.args.push(value.to_string());
        self
    }

    /// Append several positional arguments
    pub fn args<I, S>(mut self, values: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.args.extend(values.into_iter().map(Into::into));
        self
    }

    /// Plural count; the same value is commonly also passed as the first argument
    pub fn counted(count: i64, key: impl Into<String>) -> Self {
        Self::new(key).count(count).arg(count)
    }

    /// Requested key
    pub fn key(&self) -> &str {
        &self.key
    }

    /// Requested count
    pub fn count_value(&self) -> Option<i64> {
        self.count
    }

    /// Positional arguments
    pub fn arg_values(&self) -> &[String] {
        &self.args
    }
}

/// Resolves keys against a shared [`PackRegistry`]
#[derive(Debug, Clone)]
pub struct Resolver {
    registry: Arc<PackRegistry>,
    plurals: PluralSelector,
}

impl Resolver {
    /// Resolver using the two-arm plural rule for every locale
    pub fn new(registry: Arc<PackRegistry>) -> Self {
        Self::with_plural_rules(registry, PluralSelector::new())
    }

    /// Resolver with custom per-locale plural rules
    pub fn with_plural_rules(registry: Arc<PackRegistry>, plurals: PluralSelector) -> Self {
        Self { registry, plurals }
    }

    /// Registry this resolver reads from
    pub fn registry(&self) -> &Arc<PackRegistry> {
        &self.registry
    }

    /// Plural rules in use
    pub fn plural_rules(&self) -> &PluralSelector {
        &self.plurals
    }

    /// Render `key` for `locale`.
    ///
    /// Keys missing from `locale` fall back to the default pack. `count` is
    /// required for plural entries and ignored for plain ones.
    ///
    /// # Errors
    ///
    /// `UnknownKey` if neither pack has the key, `MissingCount` for a plural
    /// entry without a count, `ArityMismatch` if the plural rule picks a
    /// variant the entry lacks, `MissingArgument` if `args` runs short.
    pub fn resolve<S: AsRef<str>>(
        &self,
        locale: &str,
        key: &str,
        count: Option<i64>,
        args: &[S],
    ) -> I18nResult<String> {
        self.resolve_detailed(locale, key, count, args)
            .map(|resolved| resolved.text)
    }

    /// Like [`resolve`](Self::resolve), also reporting which locale supplied the text
    pub fn resolve_detailed<S: AsRef<str>>(
        &self,
        locale: &str,
        key: &str,
        count: Option<i64>,
        args: &[S],
    ) -> I18nResult<Resolved> {
        let snapshot = self.registry.snapshot();
        let (entry, used_locale) = snapshot.entry(locale, key)?;
        let fell_back = used_locale != locale;
        if fell_back {
            debug!(
                "Key '{}' missing from locale {}, falling back to {}",
                key, locale, used_locale
            );
        }

        let template = match entry {
            Entry::Plain(template) => template.as_str(),
            Entry::Plural(variants) => {
                let count = count.ok_or_else(|| I18nError::MissingCount {
                    key: key.to_string(),
                })?;
                self.plurals.select(used_locale, variants, count)?
            }
        };

        Ok(Resolved {
            text: render(template, args)?,
            used_locale: used_locale.to_string(),
            fell_back,
        })
    }

    /// Resolve a prepared [`Request`]
    pub fn resolve_request(&self, locale: &str, request: &Request) -> I18nResult<String> {
        self.resolve(locale, &request.key, request.count, &request.args)
    }

    /// Whether `key` resolves for `locale`, directly or through the default pack
    pub fn has_key(&self, locale: &str, key: &str) -> bool {
        self.registry.snapshot().entry(locale, key).is_ok()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pack::LocalePack;
    use crate::plural::PluralRule;

    const NO_ARGS: &[&str] = &[];

    fn resolver() -> Resolver {
        let en = LocalePack::builder("en")
            .plain("yes", "Yes")
            .plain("Welcome", "Welcome")
            .plain("LOGGED_IN_AS", "Logged in as %s")
            .plural("account", ["1 account", "%s accounts"])
            .build()
            .unwrap();
        let de = LocalePack::builder("de")
            .plain("yes", "Ja")
            .plain("LOGGED_IN_AS", "Angemeldet als %s")
            .plural("account", ["1 Konto", "%s Konten"])
            .build()
            .unwrap();
        Resolver::new(Arc::new(PackRegistry::init("en", [en, de]).unwrap()))
    }

    #[test]
    fn test_plain_key() {
        assert_eq!(resolver().resolve("de", "yes", None, NO_ARGS).unwrap(), "Ja");
    }

    #[test]
    fn test_count_ignored_for_plain_entry() {
        assert_eq!(resolver().resolve("de", "yes", Some(7), NO_ARGS).unwrap(), "Ja");
    }

    #[test]
    fn test_plural_key() {
        let resolver = resolver();
        assert_eq!(resolver.resolve("de", "account", Some(3), &["3"]).unwrap(), "3 Konten");
        assert_eq!(resolver.resolve("de", "account", Some(1), &["1"]).unwrap(), "1 Konto");
        assert_eq!(resolver.resolve("de", "account", Some(0), &["0"]).unwrap(), "0 Konten");
    }

    #[test]
    fn test_plural_without_count() {
        let err = resolver().resolve("de", "account", None, &["3"]).unwrap_err();
        assert_eq!(err, I18nError::MissingCount { key: "account".into() });
    }

    #[test]
    fn test_unknown_key_is_an_error() {
        let err = resolver().resolve("de", "nonexistent-key", None, NO_ARGS).unwrap_err();
        assert!(matches!(err, I18nError::UnknownKey { .. }));
    }

    #[test]
    fn test_missing_argument_propagates() {
        let err = resolver().resolve("de", "LOGGED_IN_AS", None, NO_ARGS).unwrap_err();
        assert_eq!(err, I18nError::MissingArgument { position: 1, supplied: 0 });
    }

    #[test]
    fn test_fallback_is_reported() {
        let resolved = resolver().resolve_detailed("de", "Welcome", None, NO_ARGS).unwrap();
        assert_eq!(resolved.text, "Welcome");
        assert_eq!(resolved.used_locale, "en");
        assert!(resolved.fell_back);

        let resolved = resolver().resolve_detailed("de", "yes", None, NO_ARGS).unwrap();
        assert_eq!(resolved.used_locale, "de");
        assert!(!resolved.fell_back);
    }

    #[test]
    fn test_unregistered_locale_uses_default() {
        let resolved = resolver().resolve_detailed("it", "yes", None, NO_ARGS).unwrap();
        assert_eq!(resolved.text, "Yes");
        assert_eq!(resolved.used_locale, "en");
    }

    #[test]
    fn test_request_builder() {
        let resolver = resolver();
        let request = Request::counted(5, "account");
        assert_eq!(resolver.resolve_request("de", &request).unwrap(), "5 Konten");

        let request = Request::new("LOGGED_IN_AS").args(["admin"]);
        assert_eq!(request.arg_values(), ["admin"]);
        assert_eq!(resolver.resolve_request("de", &request).unwrap(), "Angemeldet als admin");
    }

    #[test]
    fn test_plural_rule_follows_supplying_locale() {
        let en = LocalePack::builder("en")
            .plural("file", ["%s file", "%s files"])
            .build()
            .unwrap();
        let fr = LocalePack::builder("fr").plain("yes", "Oui").build().unwrap();
        let registry = Arc::new(PackRegistry::init("en", [en, fr]).unwrap());

        let mut rules = PluralSelector::new();
        rules.register("fr", PluralRule::zero_one_singular());
        let resolver = Resolver::with_plural_rules(registry, rules);

        // "file" comes from the English pack, so the English rule applies.
        assert_eq!(resolver.resolve("fr", "file", Some(0), &["0"]).unwrap(), "0 files");
    }

    #[test]
    fn test_has_key() {
        let resolver = resolver();
        assert!(resolver.has_key("de", "yes"));
        assert!(resolver.has_key("de", "Welcome"));
        assert!(!resolver.has_key("de", "nonexistent-key"));
    }
}
