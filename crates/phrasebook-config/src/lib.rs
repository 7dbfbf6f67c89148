//! # Phrasebook Config
//!
//! Configuration loading, validation, and caching for Phrasebook.
//!
//! Settings come from a TOML file, are overridden by `PHRASEBOOK_*`
//! environment variables, and are validated before use.

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

pub mod cache;
pub mod loader;
pub mod schema;
pub mod validation;

pub use cache::ConfigCache;
pub use loader::{ConfigError, ConfigLoader};
pub use schema::{Config, I18nSettings, LogSettings};
