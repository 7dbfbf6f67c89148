//! # Phrasebook Common
//!
//! Shared error types, logging setup and test helpers used across the
//! Phrasebook workspace.

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

pub mod error;
pub mod logging;

#[cfg(any(test, feature = "testing"))]
pub mod test_utils;

pub use error::{PhrasebookError, Result};
pub use logging::{init_default_logging, init_logging, LogFormat, LoggingConfig};
