//! Locale packs and their entries
//!
//! A pack is validated once, when it is built, so the render path never has
//! to inspect value shapes.

use crate::error::{I18nError, I18nResult};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Minimum number of variants a plural entry must carry
pub const MIN_PLURAL_ARITY: usize = 2;

/// A single pack entry
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Entry {
    /// A template used regardless of count
    Plain(String),
    /// Ordered plural variants, selected by count
    Plural(Vec<String>),
}

impl Entry {
    /// Whether the entry needs a count to resolve
    pub fn is_plural(&self) -> bool {
        matches!(self, Self::Plural(_))
    }

    /// All templates of the entry, in order
    pub fn templates(&self) -> impl Iterator<Item = &str> {
        let slice: &[String] = match self {
            Self::Plain(template) => std::slice::from_ref(template),
            Self::Plural(variants) => variants,
        };
        slice.iter().map(String::as_str)
    }
}

/// An immutable resource table for one locale
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LocalePack {
    locale: String,
    entries: HashMap<String, Entry>,
}

impl LocalePack {
    /// Build a pack, rejecting empty packs, empty keys and short plural entries.
    pub fn new(locale: impl Into<String>, entries: HashMap<String, Entry>) -> I18nResult<Self> {
        let locale = locale.into();

        if locale.is_empty() {
            return Err(I18nError::invalid_pack(locale, "locale code is empty"));
        }
        if entries.is_empty() {
            return Err(I18nError::invalid_pack(locale, "pack has no entries"));
        }

        for (key, entry) in &entries {
            if key.is_empty() {
                return Err(I18nError::invalid_pack(locale, "pack contains an empty key"));
            }
            if let Entry::Plural(variants) = entry {
                if variants.len() < MIN_PLURAL_ARITY {
                    return Err(I18nError::invalid_pack(
                        locale,
                        format!(
                            "plural entry '{key}' has {} variant(s), at least {MIN_PLURAL_ARITY} required",
                            variants.len()
                        ),
                    ));
                }
            }
        }

        Ok(Self { locale, entries })
    }

    /// Start building a pack in code
    pub fn builder(locale: impl Into<String>) -> LocalePackBuilder {
        LocalePackBuilder {
            locale: locale.into(),
            entries: HashMap::new(),
        }
    }

    /// Parse a pack from a JSON object of `key: "template"` or `key: ["one", "other"]`
    pub fn from_json_str(locale: impl Into<String>, source: &str) -> I18nResult<Self> {
        let locale = locale.into();
        let entries: HashMap<String, Entry> = serde_json::from_str(source)
            .map_err(|e| I18nError::invalid_pack(&locale, format!("malformed JSON: {e}")))?;
        Self::new(locale, entries)
    }

    /// Parse a pack from a TOML table of `key = "template"` or `key = ["one", "other"]`
    pub fn from_toml_str(locale: impl Into<String>, source: &str) -> I18nResult<Self> {
        let locale = locale.into();
        let entries: HashMap<String, Entry> = toml::from_str(source)
            .map_err(|e| I18nError::invalid_pack(&locale, format!("malformed TOML: {e}")))?;
        Self::new(locale, entries)
    }

    /// Locale code this pack belongs to
    pub fn locale(&self) -> &str {
        &self.locale
    }

    /// Look up an entry by key
    pub fn get(&self, key: &str) -> Option<&Entry> {
        self.entries.get(key)
    }

    /// Whether the pack has an entry for `key`
    pub fn contains_key(&self, key: &str) -> bool {
        self.entries.contains_key(key)
    }

    /// Number of entries
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the pack has no entries; never true for a built pack
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterate over all keys
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.entries.keys().map(String::as_str)
    }

    /// Iterate over all entries
    pub fn iter(&self) -> impl Iterator<Item = (&str, &Entry)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v))
    }

    /// Serialize back to a JSON object with keys in sorted order
    pub fn to_json_string(&self) -> I18nResult<String> {
        let sorted: std::collections::BTreeMap<&str, &Entry> = self.iter().collect();
        serde_json::to_string_pretty(&sorted)
            .map_err(|e| I18nError::invalid_pack(&self.locale, e.to_string()))
    }
}

/// Incremental builder for [`LocalePack`]
#[derive(Debug, Clone)]
pub struct LocalePackBuilder {
    locale: String,
    entries: HashMap<String, Entry>,
}

impl LocalePackBuilder {
    /// Add a plain template
    pub fn plain(mut self, key: impl Into<String>, template: impl Into<String>) -> Self {
        self.entries
            .insert(key.into(), Entry::Plain(template.into()));
        self
    }

    /// Add plural variants, singular first
    pub fn plural<I, S>(mut self, key: impl Into<String>, variants: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.entries.insert(
            key.into(),
            Entry::Plural(variants.into_iter().map(Into::into).collect()),
        );
        self
    }

    /// Validate and produce the pack
    pub fn build(self) -> I18nResult<LocalePack> {
        LocalePack::new(self.locale, self.entries)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builder_produces_tagged_entries() {
        let pack = LocalePack::builder("de")
            .plain("yes", "Ja")
            .plural("account", ["1 Konto", "%s Konten"])
            .build()
            .unwrap();

        assert_eq!(pack.locale(), "de");
        assert_eq!(pack.len(), 2);
        assert_eq!(pack.get("yes"), Some(&Entry::Plain("Ja".to_string())));
        assert!(pack.get("account").unwrap().is_plural());
        assert!(pack.get("Yes").is_none(), "keys are case-sensitive");
    }

    #[test]
    fn test_empty_pack_rejected() {
        let err = LocalePack::builder("de").build().unwrap_err();
        assert!(matches!(err, I18nError::InvalidPack { .. }));
    }

    #[test]
    fn test_short_plural_rejected() {
        let err = LocalePack::builder("de")
            .plural("account", ["1 Konto"])
            .build()
            .unwrap_err();
        match err {
            I18nError::InvalidPack { locale, reason } => {
                assert_eq!(locale, "de");
                assert!(reason.contains("account"));
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn test_empty_key_and_locale_rejected() {
        assert!(LocalePack::builder("de").plain("", "x").build().is_err());
        assert!(LocalePack::builder("").plain("yes", "Ja").build().is_err());
    }

    #[test]
    fn test_empty_template_is_valid() {
        let pack = LocalePack::builder("de").plain("RESET_NOTICE", "").build().unwrap();
        assert_eq!(pack.get("RESET_NOTICE"), Some(&Entry::Plain(String::new())));
    }

    #[test]
    fn test_from_json() {
        let pack = LocalePack::from_json_str(
            "de",
            r#"{"yes": "Ja", "account": ["1 Konto", "%s Konten"], "GREETINGS": "Hallo,\n"}"#,
        )
        .unwrap();

        assert_eq!(pack.len(), 3);
        assert_eq!(pack.get("GREETINGS"), Some(&Entry::Plain("Hallo,\n".to_string())));
        assert_eq!(
            pack.get("account"),
            Some(&Entry::Plural(vec!["1 Konto".to_string(), "%s Konten".to_string()]))
        );
    }

    #[test]
    fn test_from_json_rejects_bad_shapes() {
        for source in [
            r#"["yes"]"#,
            r#"{"yes": 1}"#,
            r#"{"account": ["1 Konto", 2]}"#,
            r#"{"account": {"one": "1 Konto"}}"#,
            r#"{"yes": "Ja""#,
        ] {
            let err = LocalePack::from_json_str("de", source).unwrap_err();
            assert!(
                matches!(err, I18nError::InvalidPack { .. }),
                "{source} gave {err:?}"
            );
        }
    }

    #[test]
    fn test_from_toml() {
        let pack = LocalePack::from_toml_str(
            "fr",
            "yes = \"Oui\"\naccount = [\"%s compte\", \"%s comptes\"]\n",
        )
        .unwrap();
        assert_eq!(pack.get("yes"), Some(&Entry::Plain("Oui".to_string())));
        assert!(pack.get("account").unwrap().is_plural());

        for source in ["yes = true\n", "account = [\"%s compte\", 2]\n", "[yes]\none = \"Oui\"\n"] {
            match LocalePack::from_toml_str("fr", source).unwrap_err() {
                I18nError::InvalidPack { locale, reason } => {
                    assert_eq!(locale, "fr");
                    assert!(reason.starts_with("malformed TOML"), "{source} gave {reason}");
                }
                other => panic!("unexpected error: {other:?}"),
            }
        }
    }

    #[test]
    fn test_json_output_reloads_identically() {
        let pack = LocalePack::builder("de")
            .plain("yes", "Ja")
            .plural("account", ["1 Konto", "%s Konten"])
            .build()
            .unwrap();
        let json = pack.to_json_string().unwrap();
        assert_eq!(LocalePack::from_json_str("de", &json).unwrap(), pack);
    }

    #[test]
    fn test_templates_iterates_variants() {
        let entry = Entry::Plural(vec!["1 Konto".into(), "%s Konten".into()]);
        assert_eq!(entry.templates().collect::<Vec<_>>(), ["1 Konto", "%s Konten"]);
        let entry = Entry::Plain("Ja".into());
        assert_eq!(entry.templates().count(), 1);
    }
}
