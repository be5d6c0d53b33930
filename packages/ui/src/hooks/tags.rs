//! Tag list hook over local storage.

use store::{KeyValueStore, TagStore};

use crate::storage::local_store;

/// Tag store backed by the platform's local storage.
pub fn use_tags() -> TagStore<impl KeyValueStore> {
    TagStore::new(local_store())
}
