//! Theme preference persistence and application.
//!
//! Reads the stored preference, writes it back on every toggle, and applies
//! the matching class and `data-theme` attribute to the `<html>` element.
//!
//! TRADE-OFFS
//! ==========
//! Persistence is best-effort. Once the backing store fails, the store stops
//! touching it and keeps the preference in memory for the rest of the
//! session. SSR paths no-op so server rendering stays deterministic.

#[cfg(test)]
#[path = "theme_test.rs"]
mod theme_test;

use crate::state::theme::ThemePreference;
use crate::util::storage::{MemoryStorage, PreferenceStorage, StorageError};

/// Storage key holding the preference literal.
pub const STORAGE_KEY: &str = "theme";

/// Loads and persists the [`ThemePreference`].
///
/// The first storage failure swaps the backend for a session-only
/// [`MemoryStorage`]; later loads and toggles go through it.
#[derive(Debug)]
pub struct ThemeStore<S> {
    storage: S,
    fallback: Option<MemoryStorage>,
}

impl<S: PreferenceStorage> ThemeStore<S> {
    #[must_use]
    pub fn new(storage: S) -> Self {
        Self { storage, fallback: None }
    }

    /// Read the stored preference.
    ///
    /// Missing or unrecognized values yield [`ThemePreference::Dark`]. A
    /// storage failure yields `Dark` and switches the store to in-memory
    /// mode.
    pub fn load(&mut self) -> ThemePreference {
        let read = match &self.fallback {
            Some(memory) => memory.read(STORAGE_KEY),
            None => self.storage.read(STORAGE_KEY),
        };
        match read {
            Ok(Some(raw)) => ThemePreference::parse(&raw).unwrap_or_else(|| {
                leptos::logging::warn!("ignoring unrecognized theme preference {raw:?}");
                ThemePreference::default()
            }),
            Ok(None) => ThemePreference::default(),
            Err(e) => {
                self.degrade(&e);
                ThemePreference::default()
            }
        }
    }

    /// Return the complement of `current`, persisting it first.
    pub fn toggle(&mut self, current: ThemePreference) -> ThemePreference {
        let next = current.toggled();
        self.persist(next);
        next
    }

    /// Write `pref` to the active backend.
    pub fn persist(&mut self, pref: ThemePreference) {
        if self.fallback.is_none() {
            match self.storage.write(STORAGE_KEY, pref.as_str()) {
                Ok(()) => return,
                Err(e) => self.degrade(&e),
            }
        }
        if let Some(memory) = &mut self.fallback {
            memory.remember(STORAGE_KEY, pref.as_str());
        }
    }

    /// Whether storage failed and the preference is now session-only.
    #[must_use]
    pub fn is_degraded(&self) -> bool {
        self.fallback.is_some()
    }

    #[cfg(test)]
    pub(crate) fn storage(&self) -> &S {
        &self.storage
    }

    fn degrade(&mut self, error: &StorageError) {
        leptos::logging::warn!("theme preference will not persist: {error}");
        self.fallback = Some(MemoryStorage::new());
    }
}

/// Apply `pref` to the `<html>` element. Idempotent.
pub fn apply(pref: ThemePreference) {
    #[cfg(feature = "hydrate")]
    {
        if let Some(el) = web_sys::window().and_then(|w| w.document()).and_then(|d| d.document_element()) {
            let class_list = el.class_list();
            let _ = class_list.remove_1(pref.toggled().as_str());
            let _ = class_list.add_1(pref.as_str());
            let _ = el.set_attribute("data-theme", pref.as_str());
        }
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = pref;
    }
}
