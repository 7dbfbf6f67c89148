//! Thread-safe configuration caching with arc-swap for lock-free reads.

use crate::schema::Config;
use arc_swap::ArcSwap;
use phrasebook_common::{PhrasebookError, Result};
use std::sync::Arc;
use tracing::info;
use validator::Validate;

/// Thread-safe configuration cache using arc-swap for lock-free reads.
pub struct ConfigCache {
    config: ArcSwap<Config>,
}

impl ConfigCache {
    /// Creates a new configuration cache with the given initial configuration.
    pub fn new(config: Config) -> Self {
        Self {
            config: ArcSwap::from_pointee(config),
        }
    }

    /// Gets the current configuration.
    pub fn get(&self) -> Arc<Config> {
        self.config.load_full()
    }

    /// Validates and publishes a new configuration atomically.
    ///
    /// The previous configuration stays in place when validation fails.
    pub fn update(&self, config: Config) -> Result<()> {
        config
            .validate()
            .map_err(|e| PhrasebookError::config_with_source("rejected configuration update", e))?;
        self.config.store(Arc::new(config));
        info!("Configuration updated");
        Ok(())
    }

    /// Applies `f` to a copy of the current configuration and publishes the result.
    pub fn modify<F>(&self, f: F) -> Result<()>
    where
        F: FnOnce(&mut Config),
    {
        let mut next = Config::clone(&self.config.load());
        f(&mut next);
        self.update(next)
    }
}

impl Default for ConfigCache {
    fn default() -> Self {
        Self::new(Config::default())
    }
}
