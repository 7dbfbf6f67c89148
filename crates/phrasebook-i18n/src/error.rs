//! Error types for phrase resolution

use thiserror::Error;

/// Errors that can occur while registering packs or resolving phrases
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum I18nError {
    /// A registry operation referenced a locale with no registered pack
    #[error("Unknown locale: {locale}")]
    UnknownLocale { locale: String },

    /// A pack was rejected at registration or load time
    #[error("Invalid pack for locale '{locale}': {reason}")]
    InvalidPack { locale: String, reason: String },

    /// Neither the requested locale nor the default locale has the key
    #[error("Unknown key '{key}' (requested locale: {locale})")]
    UnknownKey { locale: String, key: String },

    /// A plural entry was resolved without a count
    #[error("Key '{key}' has plural variants and needs a count")]
    MissingCount { key: String },

    /// The plural rule picked a variant the entry does not have
    #[error("Plural rule selected variant {index} but the entry has {arity} variants")]
    ArityMismatch { index: usize, arity: usize },

    /// The template has more placeholders than arguments were supplied
    #[error("Placeholder #{position} has no argument ({supplied} supplied)")]
    MissingArgument { position: usize, supplied: usize },

    /// The default locale cannot be unregistered
    #[error("Locale '{locale}' is the default and cannot be removed")]
    DefaultLocaleRemoval { locale: String },

    /// A pack file could not be read or parsed
    #[error("Failed to load pack file {path}: {reason}")]
    PackLoad { path: String, reason: String },
}

impl I18nError {
    pub(crate) fn invalid_pack(locale: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::InvalidPack {
            locale: locale.into(),
            reason: reason.into(),
        }
    }

    pub(crate) fn unknown_locale(locale: impl Into<String>) -> Self {
        Self::UnknownLocale {
            locale: locale.into(),
        }
    }

    /// Whether this error indicates a configuration defect that should stop startup
    pub fn is_startup_fatal(&self) -> bool {
        matches!(
            self,
            Self::UnknownLocale { .. } | Self::InvalidPack { .. } | Self::PackLoad { .. }
        )
    }
}

/// Result type for i18n operations
pub type I18nResult<T> = Result<T, I18nError>;
