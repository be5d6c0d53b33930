//! Client-side storage for the Pagecraft admin console: a key-value
//! abstraction over browser storage, the shared stale-while-revalidate
//! query cache, and the small persisted records the console keeps
//! (registration wizard state, tags, theme preferences).

pub mod cache;
pub mod kv;
pub mod register;
pub mod tags;
pub mod theme;
#[cfg(target_arch = "wasm32")]
mod web;

pub use cache::{FetchError, QueryCache, QueryKey};
pub use kv::{keys, KeyValueStore, MemoryStore};
pub use register::{RegistrationState, RegistrationStep};
pub use tags::{target_label, TagRecord, TagStore, TAG_TARGETS};
pub use theme::{Direction, MenuOrientation, ThemeConfig, ThemeMode, ThemeUpdate};
#[cfg(target_arch = "wasm32")]
pub use web::WebStorage;
