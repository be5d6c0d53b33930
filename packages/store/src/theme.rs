//! Theme configuration with partial-update semantics.
//!
//! Pure UI preference: nothing here persists beyond the locale, which is
//! kept under the `lang` key in local storage so it survives reloads.

use serde::{Deserialize, Serialize};

use crate::kv::{keys, KeyValueStore};

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ThemeMode {
    #[default]
    Light,
    Dark,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Direction {
    #[default]
    Ltr,
    Rtl,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MenuOrientation {
    #[default]
    Vertical,
    Horizontal,
}

/// Full theme configuration.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ThemeConfig {
    pub mode: ThemeMode,
    pub direction: Direction,
    pub menu_orientation: MenuOrientation,
    pub mini_drawer: bool,
    pub preset_color: String,
    pub container: bool,
    /// Locale code, e.g. "en" or "pt".
    pub locale: String,
    pub font_family: String,
}

impl Default for ThemeConfig {
    fn default() -> Self {
        Self {
            mode: ThemeMode::default(),
            direction: Direction::default(),
            menu_orientation: MenuOrientation::default(),
            mini_drawer: false,
            preset_color: "default".to_string(),
            container: true,
            locale: "en".to_string(),
            font_family: "Inter".to_string(),
        }
    }
}

/// Partial update: only `Some` fields are applied.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ThemeUpdate {
    pub mode: Option<ThemeMode>,
    pub direction: Option<Direction>,
    pub menu_orientation: Option<MenuOrientation>,
    pub mini_drawer: Option<bool>,
    pub preset_color: Option<String>,
    pub container: Option<bool>,
    pub locale: Option<String>,
    pub font_family: Option<String>,
}

impl ThemeConfig {
    /// Load defaults, taking the persisted locale into account.
    pub fn load(store: &impl KeyValueStore) -> Self {
        let mut config = Self::default();
        if let Some(lang) = store.get(keys::LANG) {
            config.locale = lang;
        }
        config
    }

    /// Merge a partial update, persisting the locale when it changes.
    pub fn apply(&mut self, update: ThemeUpdate, store: &impl KeyValueStore) {
        if let Some(mode) = update.mode {
            self.mode = mode;
        }
        if let Some(direction) = update.direction {
            self.direction = direction;
        }
        if let Some(orientation) = update.menu_orientation {
            self.menu_orientation = orientation;
        }
        if let Some(mini) = update.mini_drawer {
            self.mini_drawer = mini;
        }
        if let Some(color) = update.preset_color {
            self.preset_color = color;
        }
        if let Some(container) = update.container {
            self.container = container;
        }
        if let Some(locale) = update.locale {
            store.set(keys::LANG, &locale);
            self.locale = locale;
        }
        if let Some(font) = update.font_family {
            self.font_family = font;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::kv::MemoryStore;

    #[test]
    fn test_partial_update_leaves_other_fields() {
        let store = MemoryStore::new();
        let mut config = ThemeConfig::default();

        config.apply(
            ThemeUpdate {
                mode: Some(ThemeMode::Dark),
                ..Default::default()
            },
            &store,
        );

        assert_eq!(config.mode, ThemeMode::Dark);
        assert_eq!(config.direction, Direction::Ltr);
        assert_eq!(config.locale, "en");
    }

    #[test]
    fn test_locale_persists_and_loads() {
        let store = MemoryStore::new();
        let mut config = ThemeConfig::default();

        config.apply(
            ThemeUpdate {
                locale: Some("pt".to_string()),
                ..Default::default()
            },
            &store,
        );
        assert_eq!(store.get(keys::LANG).as_deref(), Some("pt"));

        let reloaded = ThemeConfig::load(&store);
        assert_eq!(reloaded.locale, "pt");
        assert_eq!(reloaded.mode, ThemeMode::Light);
    }
}
