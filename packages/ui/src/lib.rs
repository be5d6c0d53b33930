//! This crate contains all shared UI for the workspace: app-level
//! contexts (auth, loader, theme), data-fetch hooks over the query
//! cache, section editors, and the small form component kit.

pub mod components;
pub use components::{
    Alert, AlertKind, Button, ButtonVariant, Input, OtpInput, PasswordMeter,
};

mod auth;
pub use auth::{use_auth, Auth, AuthProvider, AuthState, AuthUpdate};

mod loader;
pub use loader::{use_loader, Loader, LoaderBar, LoaderProvider, LoaderState};

mod theme;
pub use theme::{use_theme, Theme, ThemeProvider};

pub mod hooks;
pub use hooks::{use_api, use_query, use_query_cache, use_tags, ApiProvider};

pub mod editors;
pub use editors::{
    BannerEditor, GalleryEditor, MissionEditor, TeamEditor, TestimonialEditor,
};

pub mod storage;
pub use storage::{local_store, session_store};

pub mod util;
pub mod validate;
pub use validate::{email_is_valid, otp_is_valid, PasswordStrength};
