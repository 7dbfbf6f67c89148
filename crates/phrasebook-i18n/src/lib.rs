//! # Phrasebook I18n
//!
//! Locale packs, a thread-safe pack registry, plural selection and
//! positional `%s` rendering for control-panel UI strings.
//!
//! A [`Resolver`] turns `(locale, key, count, args)` into display text.
//! Keys missing from the requested locale fall back to the default locale;
//! keys missing from both are reported as [`I18nError::UnknownKey`].
//!
//! ```
//! use std::sync::Arc;
//! use phrasebook_i18n::{LocalePack, PackRegistry, Resolver};
//!
//! let en = LocalePack::builder("en")
//!     .plain("yes", "Yes")
//!     .plural("account", ["1 account", "%s accounts"])
//!     .build()?;
//! let de = LocalePack::builder("de")
//!     .plain("yes", "Ja")
//!     .plural("account", ["1 Konto", "%s Konten"])
//!     .build()?;
//!
//! let registry = Arc::new(PackRegistry::init("en", [en, de])?);
//! let resolver = Resolver::new(registry);
//!
//! assert_eq!(resolver.resolve("de", "yes", None, &[] as &[&str])?, "Ja");
//! assert_eq!(resolver.resolve("de", "account", Some(3), &["3"])?, "3 Konten");
//! # Ok::<(), phrasebook_i18n::I18nError>(())
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]
#![allow(clippy::module_name_repetitions)]

pub mod coverage;
pub mod error;
pub mod global;
pub mod locale;
pub mod pack;
pub mod plural;
pub mod registry;
pub mod render;
pub mod resolver;
pub mod resource;

pub use coverage::{CoverageReport, LocaleCoverage, PlaceholderMismatch};
pub use error::{I18nError, I18nResult};
pub use global::{global, install};
pub use pack::{Entry, LocalePack, LocalePackBuilder};
pub use plural::{PluralRule, PluralSelector};
pub use registry::{PackRegistry, RegistrySnapshot};
pub use render::{placeholder_count, render};
pub use resolver::{Request, Resolved, Resolver};
pub use resource::{PackFormat, PackLoader};
