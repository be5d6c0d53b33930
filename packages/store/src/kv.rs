//! Key-value storage abstraction for client-side state.
//!
//! Everything the console keeps in the browser (the locale, the cached
//! profile image URL, the tag list, the registration wizard record) goes
//! through the [`KeyValueStore`] trait, so the same logic works against an
//! in-memory map (native, tests) or the browser's Web Storage
//! ([`crate::WebStorage`]).

use std::collections::HashMap;
use std::sync::{Arc, Mutex};

/// Well-known storage keys shared across the console.
pub mod keys {
    /// Locale preference, persisted in local storage.
    pub const LANG: &str = "lang";
    /// Cached profile image URL for the signed-in user.
    pub const PROFILE_IMAGE_URL: &str = "profileImageUrl";
    /// Tag list maintained by the tags screen.
    pub const TAGS: &str = "tags";
    /// Registration wizard state record, session-scoped.
    pub const REGISTER_STATE: &str = "registerState";
}

/// String key-value storage.
pub trait KeyValueStore {
    fn get(&self, key: &str) -> Option<String>;
    fn set(&self, key: &str, value: &str);
    fn remove(&self, key: &str);
}

/// In-memory KeyValueStore for testing and native fallback.
#[derive(Clone, Debug, Default)]
pub struct MemoryStore {
    entries: Arc<Mutex<HashMap<String, String>>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> Option<String> {
        self.entries.lock().unwrap().get(key).cloned()
    }

    fn set(&self, key: &str, value: &str) {
        self.entries
            .lock()
            .unwrap()
            .insert(key.to_string(), value.to_string());
    }

    fn remove(&self, key: &str) {
        self.entries.lock().unwrap().remove(key);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_set_get_remove() {
        let store = MemoryStore::new();
        assert!(store.get(keys::LANG).is_none());

        store.set(keys::LANG, "pt");
        assert_eq!(store.get(keys::LANG).as_deref(), Some("pt"));

        store.set(keys::LANG, "en");
        assert_eq!(store.get(keys::LANG).as_deref(), Some("en"));

        store.remove(keys::LANG);
        assert!(store.get(keys::LANG).is_none());
    }
}
