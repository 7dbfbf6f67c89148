//! Process-wide resolver handle
//!
//! Applications that cannot thread a [`Resolver`] through every call site
//! install one at startup and read it back with [`global`].

use crate::resolver::Resolver;
use once_cell::sync::OnceCell;
use tracing::{info, warn};

static GLOBAL: OnceCell<Resolver> = OnceCell::new();

/// Install the process-wide resolver.
///
/// Only the first call wins; later calls hand their resolver back as `Err`.
/// Pack updates still reach the installed resolver through its registry.
pub fn install(resolver: Resolver) -> Result<(), Resolver> {
    match GLOBAL.set(resolver) {
        Ok(()) => {
            info!("Global resolver installed");
            Ok(())
        }
        Err(rejected) => {
            warn!("Global resolver already installed, ignoring replacement");
            Err(rejected)
        }
    }
}

/// The installed resolver, if any
pub fn global() -> Option<&'static Resolver> {
    GLOBAL.get()
}
