//! Error types and utilities for Phrasebook

use thiserror::Error;

/// Result type alias for Phrasebook operations
pub type Result<T> = std::result::Result<T, PhrasebookError>;

/// Main error type for operations outside the resolution engine itself
#[derive(Error, Debug)]
pub enum PhrasebookError {
    /// Configuration related errors
    #[error("Configuration error: {message}")]
    Config {
        message: String,
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    /// I/O related errors
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Localization errors bubbled up from the engine
    #[error("Localization error: {message}")]
    Localization {
        message: String,
        locale: Option<String>,
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    /// Logging subsystem could not be initialised
    #[error("Logging error: {message}")]
    Logging {
        message: String,
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },
}

impl PhrasebookError {
    /// Create a new configuration error with source
    pub fn config_with_source(
        msg: impl Into<String>,
        source: impl std::error::Error + Send + Sync + 'static,
    ) -> Self {
        Self::Config {
            message: msg.into(),
            source: Some(Box::new(source)),
        }
    }

    /// Create a new localization error tied to a locale, keeping the engine error as source
    pub fn localization_in(
        locale: impl Into<String>,
        source: impl std::error::Error + Send + Sync + 'static,
    ) -> Self {
        Self::Localization {
            message: source.to_string(),
            locale: Some(locale.into()),
            source: Some(Box::new(source)),
        }
    }

    /// Create a new logging error with source
    pub fn logging_with_source(
        msg: impl Into<String>,
        source: impl std::error::Error + Send + Sync + 'static,
    ) -> Self {
        Self::Logging {
            message: msg.into(),
            source: Some(Box::new(source)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::{error::Error, io};

    #[test]
    fn test_config_error_message() {
        let inner = io::Error::new(io::ErrorKind::InvalidData, "bad value");
        let error = PhrasebookError::config_with_source("config issue", inner);
        assert_eq!(error.to_string(), "Configuration error: config issue");
        assert_eq!(error.source().unwrap().to_string(), "bad value");
    }

    #[test]
    fn test_localization_keeps_source() {
        let inner = io::Error::new(io::ErrorKind::NotFound, "pack missing");
        let error = PhrasebookError::localization_in("de", inner);

        assert!(error.to_string().contains("pack missing"));
        assert!(error.source().is_some());
        match error {
            PhrasebookError::Localization { locale, .. } => assert_eq!(locale.as_deref(), Some("de")),
            other => panic!("unexpected variant: {other:?}"),
        }
    }

    #[test]
    fn test_io_error_conversion() {
        let io_error = io::Error::new(io::ErrorKind::NotFound, "File not found");
        let error: PhrasebookError = io_error.into();

        assert!(error.to_string().contains("I/O error"));
        assert!(error.source().is_some());
    }

    #[test]
    fn test_error_chain_preservation() {
        let root_error = io::Error::new(io::ErrorKind::NotFound, "Root cause");
        let middle_error = PhrasebookError::config_with_source("Middle layer", root_error);
        let top_error = PhrasebookError::localization_in("en", middle_error);

        let mut current_error: &dyn std::error::Error = &top_error;
        let mut depth = 0;
        while let Some(source) = current_error.source() {
            current_error = source;
            depth += 1;
        }

        assert_eq!(depth, 2);
        assert_eq!(current_error.to_string(), "Root cause");
    }
}
