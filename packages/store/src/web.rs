//! # Web Storage backend: browser-side persistence
//!
//! [`WebStorage`] is the [`KeyValueStore`] implementation used on the web
//! platform. It wraps the browser's `localStorage` / `sessionStorage` via
//! `web-sys`.
//!
//! ## Scopes
//!
//! | Constructor | Backing store | Lifetime |
//! |-------------|---------------|----------|
//! | [`WebStorage::local`] | `window.localStorage` | survives the browser session (locale, profile image, tags) |
//! | [`WebStorage::session`] | `window.sessionStorage` | one tab session (registration wizard record) |
//!
//! ## Error handling
//!
//! All trait methods silently swallow storage errors (returning `None` for
//! reads, doing nothing for writes). A browser with storage disabled
//! degrades to "no persisted state" rather than crashing the console.

use crate::kv::KeyValueStore;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Scope {
    Local,
    Session,
}

/// Browser Web Storage backed [`KeyValueStore`].
#[derive(Clone, Copy, Debug)]
pub struct WebStorage {
    scope: Scope,
}

impl WebStorage {
    /// Storage that survives the browser session (`localStorage`).
    pub fn local() -> Self {
        Self { scope: Scope::Local }
    }

    /// Storage scoped to one tab session (`sessionStorage`).
    pub fn session() -> Self {
        Self {
            scope: Scope::Session,
        }
    }

    fn storage(&self) -> Option<web_sys::Storage> {
        let window = web_sys::window()?;
        match self.scope {
            Scope::Local => window.local_storage().ok().flatten(),
            Scope::Session => window.session_storage().ok().flatten(),
        }
    }
}

impl KeyValueStore for WebStorage {
    fn get(&self, key: &str) -> Option<String> {
        self.storage()?.get_item(key).ok().flatten()
    }

    fn set(&self, key: &str, value: &str) {
        if let Some(storage) = self.storage() {
            let _ = storage.set_item(key, value);
        }
    }

    fn remove(&self, key: &str) {
        if let Some(storage) = self.storage() {
            let _ = storage.remove_item(key);
        }
    }
}
