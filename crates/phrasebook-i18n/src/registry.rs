//! Registry of loaded locale packs
//!
//! The whole pack set lives in one immutable [`RegistrySnapshot`] behind an
//! `ArcSwap`. Readers load the current snapshot without locking; writers
//! serialize on a mutex, build a new snapshot and publish it with a single
//! store. A reader therefore sees either the old or the new pack in full.

use crate::error::{I18nError, I18nResult};
use crate::pack::{Entry, LocalePack};
use arc_swap::ArcSwap;
use parking_lot::Mutex;
use std::collections::HashMap;
use std::sync::Arc;
use tracing::{debug, info, warn};

/// Consistent view of the registry at one point in time
#[derive(Debug, Clone, Default)]
pub struct RegistrySnapshot {
    default_locale: Option<String>,
    packs: HashMap<String, Arc<LocalePack>>,
}

impl RegistrySnapshot {
    /// The default locale, once one has been set
    pub fn default_locale(&self) -> Option<&str> {
        self.default_locale.as_deref()
    }

    /// Registered locale codes, sorted
    pub fn locales(&self) -> Vec<&str> {
        let mut locales: Vec<&str> = self.packs.keys().map(String::as_str).collect();
        locales.sort_unstable();
        locales
    }

    /// Whether a pack is registered for `locale`
    pub fn contains(&self, locale: &str) -> bool {
        self.packs.contains_key(locale)
    }

    /// The pack registered for exactly `locale`
    pub fn pack(&self, locale: &str) -> Option<&Arc<LocalePack>> {
        self.packs.get(locale)
    }

    /// The default pack, once a default has been set
    pub fn default_pack(&self) -> Option<&Arc<LocalePack>> {
        self.default_locale
            .as_deref()
            .and_then(|locale| self.packs.get(locale))
    }

    /// The pack for `locale`, or the default pack when `locale` is not registered
    pub fn lookup(&self, locale: &str) -> I18nResult<&Arc<LocalePack>> {
        self.packs
            .get(locale)
            .or_else(|| self.default_pack())
            .ok_or_else(|| I18nError::unknown_locale(locale))
    }

    /// Entry for `key` from `locale`'s pack, else from the default pack.
    ///
    /// Returns the entry together with the locale that supplied it.
    pub fn entry<'a>(&'a self, locale: &str, key: &str) -> I18nResult<(&'a Entry, &'a str)> {
        if let Some(pack) = self.packs.get(locale) {
            if let Some(entry) = pack.get(key) {
                return Ok((entry, pack.locale()));
            }
        }

        if let Some(pack) = self.default_pack() {
            if let Some(entry) = pack.get(key) {
                return Ok((entry, pack.locale()));
            }
        }

        Err(I18nError::UnknownKey {
            locale: locale.to_string(),
            key: key.to_string(),
        })
    }
}

/// Thread-safe registry of locale packs with a designated default locale
#[derive(Debug, Default)]
pub struct PackRegistry {
    state: ArcSwap<RegistrySnapshot>,
    write_lock: Mutex<()>,
}

impl PackRegistry {
    /// Create an empty registry with no default locale
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a registry from a set of packs and mark `default_locale` as the fallback.
    ///
    /// Fails with `UnknownLocale` when none of the packs belongs to `default_locale`,
    /// and with `InvalidPack` when two packs claim the same locale.
    pub fn init<I>(default_locale: &str, packs: I) -> I18nResult<Self>
    where
        I: IntoIterator<Item = LocalePack>,
    {
        let mut snapshot = RegistrySnapshot::default();
        for pack in packs {
            let locale = pack.locale().to_string();
            if snapshot.packs.contains_key(&locale) {
                warn!("Two packs supplied for locale {}", locale);
                return Err(I18nError::invalid_pack(&locale, "duplicate pack for locale"));
            }
            snapshot.packs.insert(locale, Arc::new(pack));
        }

        if !snapshot.packs.contains_key(default_locale) {
            warn!("Default locale {} has no pack", default_locale);
            return Err(I18nError::unknown_locale(default_locale));
        }
        snapshot.default_locale = Some(default_locale.to_string());

        info!(
            "Pack registry initialized with {} locale(s), default {}",
            snapshot.packs.len(),
            default_locale
        );

        Ok(Self {
            state: ArcSwap::from_pointee(snapshot),
            write_lock: Mutex::new(()),
        })
    }

    /// Insert or atomically replace the pack for its locale
    ///
    /// Packs are validated when built, so an empty or malformed table fails
    /// with `InvalidPack` before it can reach the registry.
    pub fn register(&self, pack: LocalePack) -> I18nResult<()> {
        let locale = pack.locale().to_string();
        let keys = pack.len();

        let replaced = self.publish(|snapshot| {
            Ok(snapshot.packs.insert(locale.clone(), Arc::new(pack)).is_some())
        })?;

        if replaced {
            info!("Replaced pack for locale {} ({} keys)", locale, keys);
        } else {
            info!("Registered pack for locale {} ({} keys)", locale, keys);
        }
        Ok(())
    }

    /// Replace the pack for `locale`; same as [`register`](Self::register) with a locale check
    pub fn reload(&self, locale: &str, pack: LocalePack) -> I18nResult<()> {
        if pack.locale() != locale {
            return Err(I18nError::invalid_pack(
                locale,
                format!("pack is labelled '{}'", pack.locale()),
            ));
        }
        self.register(pack)
    }

    /// Mark `locale` as the fallback for every lookup
    pub fn set_default(&self, locale: &str) -> I18nResult<()> {
        self.publish(|snapshot| {
            if !snapshot.packs.contains_key(locale) {
                return Err(I18nError::unknown_locale(locale));
            }
            snapshot.default_locale = Some(locale.to_string());
            Ok(())
        })?;

        info!("Default locale set to {}", locale);
        Ok(())
    }

    /// Remove a non-default pack
    pub fn unregister(&self, locale: &str) -> I18nResult<()> {
        self.publish(|snapshot| {
            if snapshot.default_locale.as_deref() == Some(locale) {
                return Err(I18nError::DefaultLocaleRemoval {
                    locale: locale.to_string(),
                });
            }
            snapshot
                .packs
                .remove(locale)
                .map(|_| ())
                .ok_or_else(|| I18nError::unknown_locale(locale))
        })?;

        info!("Unregistered pack for locale {}", locale);
        Ok(())
    }

    /// Current consistent view of all packs
    pub fn snapshot(&self) -> Arc<RegistrySnapshot> {
        self.state.load_full()
    }

    /// Pack for `locale`, or the default pack when `locale` is not registered
    pub fn lookup(&self, locale: &str) -> I18nResult<Arc<LocalePack>> {
        self.state.load().lookup(locale).cloned()
    }

    /// Entry for `key` with per-key fallback, plus the locale that supplied it
    pub fn lookup_entry(&self, locale: &str, key: &str) -> I18nResult<(Entry, String)> {
        let state = self.state.load();
        let (entry, used) = state.entry(locale, key)?;
        if used != locale {
            debug!("Key '{}' not in locale {}, using {}", key, locale, used);
        }
        Ok((entry.clone(), used.to_string()))
    }

    /// The default locale, once set
    pub fn default_locale(&self) -> Option<String> {
        self.state.load().default_locale.clone()
    }

    /// Registered locale codes, sorted
    pub fn locales(&self) -> Vec<String> {
        self.state
            .load()
            .locales()
            .into_iter()
            .map(str::to_string)
            .collect()
    }

    /// Whether a pack is registered for `locale`
    pub fn contains(&self, locale: &str) -> bool {
        self.state.load().contains(locale)
    }

    /// Copy the current snapshot, apply `mutate`, and publish it if `mutate` succeeds.
    fn publish<T, F>(&self, mutate: F) -> I18nResult<T>
    where
        F: FnOnce(&mut RegistrySnapshot) -> I18nResult<T>,
    {
        let _guard = self.write_lock.lock();
        let mut next = RegistrySnapshot::clone(&self.state.load());
        let out = mutate(&mut next)?;
        self.state.store(Arc::new(next));
        Ok(out)
    }
}
