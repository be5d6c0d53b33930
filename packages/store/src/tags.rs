//! Tag list persisted in local storage.
//!
//! The tags screen lets staff attach labels to site areas. The "for"
//! select submits a machine value (`"page"`, `"section"`, ...); the store
//! resolves it to its human-readable label before persisting, so the list
//! always displays what the user picked, not the raw option value.

use serde::{Deserialize, Serialize};

use crate::kv::{keys, KeyValueStore};

/// Selectable targets for a tag: (option value, human-readable label).
pub const TAG_TARGETS: &[(&str, &str)] = &[
    ("page", "Site Page"),
    ("section", "Page Section"),
    ("media", "Media Asset"),
    ("member", "Team Member"),
];

/// Resolve a target option value to its label. Unknown values fall back
/// to the raw value so nothing silently disappears from the list.
pub fn target_label(value: &str) -> &str {
    TAG_TARGETS
        .iter()
        .find(|(v, _)| *v == value)
        .map(|(_, label)| *label)
        .unwrap_or(value)
}

/// One persisted tag.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct TagRecord {
    pub name: String,
    /// Human-readable label of the selected target.
    pub target: String,
}

/// Tag list over any [`KeyValueStore`].
pub struct TagStore<S: KeyValueStore> {
    store: S,
}

impl<S: KeyValueStore> TagStore<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }

    /// All persisted tags; a missing or corrupt list is empty.
    pub fn list(&self) -> Vec<TagRecord> {
        self.store
            .get(keys::TAGS)
            .and_then(|raw| serde_json::from_str(&raw).ok())
            .unwrap_or_default()
    }

    /// Append a tag, resolving `for_value` to its display label.
    pub fn add(&self, name: &str, for_value: &str) {
        let mut tags = self.list();
        tags.push(TagRecord {
            name: name.to_string(),
            target: target_label(for_value).to_string(),
        });
        match serde_json::to_string(&tags) {
            Ok(raw) => self.store.set(keys::TAGS, &raw),
            Err(error) => tracing::error!(%error, "failed to serialize tags"),
        }
    }

    /// Remove the tag at `index`, ignoring out-of-range indexes.
    pub fn remove(&self, index: usize) {
        let mut tags = self.list();
        if index < tags.len() {
            tags.remove(index);
            if let Ok(raw) = serde_json::to_string(&tags) {
                self.store.set(keys::TAGS, &raw);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::kv::MemoryStore;

    #[test]
    fn test_add_persists_human_label() {
        let tags = TagStore::new(MemoryStore::new());
        assert!(tags.list().is_empty());

        tags.add("Spring launch", "section");

        let list = tags.list();
        assert_eq!(list.len(), 1);
        assert_eq!(list[0].name, "Spring launch");
        // The stored target is the label, not the raw option value.
        assert_eq!(list[0].target, "Page Section");
    }

    #[test]
    fn test_unknown_target_keeps_raw_value() {
        assert_eq!(target_label("banner"), "banner");
    }

    #[test]
    fn test_remove() {
        let tags = TagStore::new(MemoryStore::new());
        tags.add("a", "page");
        tags.add("b", "media");

        tags.remove(0);
        let list = tags.list();
        assert_eq!(list.len(), 1);
        assert_eq!(list[0].name, "b");

        // Out of range is a no-op.
        tags.remove(5);
        assert_eq!(tags.list().len(), 1);
    }
}
