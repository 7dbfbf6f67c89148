//! Locale code helpers
//!
//! Locale codes stay opaque strings throughout the engine. These helpers only
//! derive the primary language subtag, which plural rule lookup falls back to.

use unic_langid::LanguageIdentifier;

/// Primary language subtag of a locale code, lower-cased.
///
/// `"de-AT"` and `"de_AT"` both yield `"de"`. Codes that are not valid
/// language identifiers yield `None`.
pub fn primary_language(code: &str) -> Option<String> {
    let langid: LanguageIdentifier = code.parse().ok()?;
    let language = langid.language.as_str();
    if language == "und" {
        return None;
    }
    Some(language.to_string())
}

/// Canonical BCP 47 form of a locale code.
///
/// `"pt_BR"`, `"pt-br"` and `"PT-BR"` all yield `"pt-BR"`. Codes that are not
/// valid language identifiers yield `None`.
pub fn canonical(code: &str) -> Option<String> {
    if code.is_empty() {
        return None;
    }
    code.parse::<LanguageIdentifier>()
        .ok()
        .map(|langid| langid.to_string())
}

/// Whether `code` parses as a language identifier.
pub fn is_well_formed(code: &str) -> bool {
    !code.is_empty() && code.parse::<LanguageIdentifier>().is_ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_primary_language() {
        assert_eq!(primary_language("de").as_deref(), Some("de"));
        assert_eq!(primary_language("de-AT").as_deref(), Some("de"));
        assert_eq!(primary_language("pt_BR").as_deref(), Some("pt"));
        assert_eq!(primary_language("RU").as_deref(), Some("ru"));
        assert_eq!(primary_language("not a locale"), None);
    }

    #[test]
    fn test_canonical() {
        assert_eq!(canonical("pt_BR").as_deref(), Some("pt-BR"));
        assert_eq!(canonical("pt-br").as_deref(), Some("pt-BR"));
        assert_eq!(canonical("ZH-hant-tw").as_deref(), Some("zh-Hant-TW"));
        assert_eq!(canonical(""), None);
        assert_eq!(canonical("not a locale"), None);
    }

    #[test]
    fn test_well_formed() {
        assert!(is_well_formed("en"));
        assert!(is_well_formed("zh-Hant-TW"));
        assert!(!is_well_formed(""));
        assert!(!is_well_formed("??"));
    }
}
