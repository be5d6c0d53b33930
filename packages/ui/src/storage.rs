//! Shared storage constructors for all platforms.
//!
//! Returns a [`store::KeyValueStore`] backed by the appropriate store:
//! - **Web** (WASM): browser `localStorage` / `sessionStorage` via
//!   [`store::WebStorage`]
//! - **Native** (tests, desktop shells): process-wide in-memory maps

#[cfg(not(target_arch = "wasm32"))]
use std::sync::OnceLock;

#[cfg(not(target_arch = "wasm32"))]
static LOCAL: OnceLock<store::MemoryStore> = OnceLock::new();
#[cfg(not(target_arch = "wasm32"))]
static SESSION: OnceLock<store::MemoryStore> = OnceLock::new();

/// Storage that survives the browser session (locale, profile image,
/// tags).
pub fn local_store() -> impl store::KeyValueStore {
    #[cfg(target_arch = "wasm32")]
    {
        store::WebStorage::local()
    }
    #[cfg(not(target_arch = "wasm32"))]
    {
        LOCAL.get_or_init(store::MemoryStore::new).clone()
    }
}

/// Storage scoped to one tab session (registration wizard record).
pub fn session_store() -> impl store::KeyValueStore {
    #[cfg(target_arch = "wasm32")]
    {
        store::WebStorage::session()
    }
    #[cfg(not(target_arch = "wasm32"))]
    {
        SESSION.get_or_init(store::MemoryStore::new).clone()
    }
}
