//! Theme context: UI configuration with partial-update semantics.

use dioxus::prelude::*;
use store::{ThemeConfig, ThemeUpdate};

use crate::storage::local_store;

/// Handle to the theme context.
#[derive(Clone, Copy)]
pub struct Theme {
    config: Signal<ThemeConfig>,
}

impl Theme {
    pub fn read(&self) -> ThemeConfig {
        (self.config)()
    }

    pub fn locale(&self) -> String {
        self.read().locale
    }

    /// Merge a partial update; the locale persists across reloads.
    pub fn update(&mut self, update: ThemeUpdate) {
        let mut config = self.read();
        config.apply(update, &local_store());
        self.config.set(config);
    }
}

/// Get the theme context.
pub fn use_theme() -> Theme {
    use_context::<Theme>()
}

/// Provider component for theme configuration. Outermost provider in the
/// tree so every screen can read the locale.
#[component]
pub fn ThemeProvider(children: Element) -> Element {
    let config = use_signal(|| ThemeConfig::load(&local_store()));
    use_context_provider(|| Theme { config });

    rsx! {
        {children}
    }
}
