//! Custom field validators used by the configuration schema

use phrasebook_common::LogFormat;
use unic_langid::LanguageIdentifier;
use validator::ValidationError;

/// Validate that a locale code parses as a language identifier
pub fn validate_locale_code(code: &str) -> Result<(), ValidationError> {
    if code.is_empty() {
        return Err(ValidationError::new("empty_locale_code"));
    }

    code.parse::<LanguageIdentifier>()
        .map(|_| ())
        .map_err(|_| ValidationError::new("invalid_locale_code"))
}

/// Validate a log format name
pub fn validate_log_format(format: &str) -> Result<(), ValidationError> {
    match LogFormat::from_name(format) {
        Some(_) => Ok(()),
        None => Err(ValidationError::new("invalid_log_format")),
    }
}
