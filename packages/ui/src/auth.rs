//! Authentication context and hooks for the console.

use std::sync::Arc;

use api::{ApiClient, TokenClaims, User};
use dioxus::prelude::*;
use store::{KeyValueStore, QueryCache, RegistrationState};

use crate::storage::{local_store, session_store};
use crate::util::redirect;

/// Authentication state for the application.
///
/// `is_authenticated` tracks `user.is_some()`; the partial-update escape
/// hatch can break that intentionally, so it stays a plain field.
#[derive(Clone, Debug, PartialEq)]
pub struct AuthState {
    pub is_authenticated: bool,
    pub user: Option<User>,
    pub is_loading: bool,
    pub error: Option<String>,
}

impl Default for AuthState {
    fn default() -> Self {
        Self {
            is_authenticated: false,
            user: None,
            is_loading: true,
            error: None,
        }
    }
}

impl AuthState {
    pub fn logged_in(user: User) -> Self {
        Self {
            is_authenticated: true,
            user: Some(user),
            is_loading: false,
            error: None,
        }
    }

    pub fn logged_out() -> Self {
        Self {
            is_authenticated: false,
            user: None,
            is_loading: false,
            error: None,
        }
    }

    /// State primed from token claims before any profile fetch.
    pub fn from_claims(claims: TokenClaims) -> Self {
        Self::logged_in(User {
            id: claims.sub,
            email: claims.email.unwrap_or_default(),
            role: claims.role,
            user_type: None,
            first_name: None,
            last_name: None,
            is_active: true,
            profile: None,
            is_email_verified: None,
            needs_completion: None,
            created_at: None,
            updated_at: None,
        })
    }

    /// Merge a partial update. No validation: this is the escape hatch.
    pub fn merged(mut self, update: AuthUpdate) -> Self {
        if let Some(is_authenticated) = update.is_authenticated {
            self.is_authenticated = is_authenticated;
        }
        if let Some(user) = update.user {
            self.user = user;
        }
        if let Some(is_loading) = update.is_loading {
            self.is_loading = is_loading;
        }
        if let Some(error) = update.error {
            self.error = error;
        }
        self
    }
}

/// Partial update for [`AuthState`]; only `Some` fields are applied.
#[derive(Clone, Debug, Default)]
pub struct AuthUpdate {
    pub is_authenticated: Option<bool>,
    pub user: Option<Option<User>>,
    pub is_loading: Option<bool>,
    pub error: Option<Option<String>>,
}

/// Handle to the auth context: the state signal plus the collaborators
/// the operations need.
#[derive(Clone)]
pub struct Auth {
    state: Signal<AuthState>,
    api: Arc<ApiClient>,
    cache: QueryCache,
}

impl Auth {
    pub fn read(&self) -> AuthState {
        (self.state)()
    }

    /// Set authenticated state synchronously from a fresh token + user.
    pub fn login(&mut self, token: &str, user: User) {
        api::set_access_token(token);
        if let Some(image_url) = user.profile.as_ref().and_then(|p| p.image_url.clone()) {
            local_store().set(store::keys::PROFILE_IMAGE_URL, &image_url);
        }
        self.state.set(AuthState::logged_in(user));
    }

    /// Call the backend logout, then clear local state regardless of the
    /// outcome. Safe to call repeatedly.
    pub async fn logout(&mut self) {
        if let Err(error) = self.api.logout().await {
            tracing::warn!(error = %error, "logout request failed, clearing local session anyway");
        }
        api::clear_access_token();
        local_store().remove(store::keys::PROFILE_IMAGE_URL);
        RegistrationState::clear(&session_store());
        self.cache.clear();
        self.state.set(AuthState::logged_out());
    }

    /// Redirect the browser to the OAuth entry URL.
    pub fn login_with_google(&self, source: &str) {
        redirect(&self.api.google_login_url(source));
    }

    /// Merge arbitrary partial updates. No validation.
    pub fn set_auth_state(&mut self, update: AuthUpdate) {
        let next = self.read().merged(update);
        self.state.set(next);
    }
}

/// Get the auth context.
pub fn use_auth() -> Auth {
    use_context::<Auth>()
}

/// Provider component that manages authentication state.
/// Wrap the app with this component, inside the API and cache providers.
#[component]
pub fn AuthProvider(children: Element) -> Element {
    let api = use_context::<Arc<ApiClient>>();
    let cache = use_context::<QueryCache>();
    let mut state = use_signal(AuthState::default);

    // Prime state once from a previously stored token, if any.
    use_hook(move || {
        let next = match api::access_token().as_deref().and_then(api::decode_claims) {
            Some(claims) => AuthState::from_claims(claims),
            None => AuthState::logged_out(),
        };
        state.set(next);
    });

    use_context_provider(|| Auth { state, api, cache });

    rsx! {
        {children}
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn user() -> User {
        User {
            id: "1".to_string(),
            email: "staff@example.com".to_string(),
            role: Some("admin".to_string()),
            user_type: None,
            first_name: None,
            last_name: None,
            is_active: true,
            profile: None,
            is_email_verified: Some(true),
            needs_completion: None,
            created_at: None,
            updated_at: None,
        }
    }

    #[test]
    fn test_logged_in_and_out_transitions() {
        let state = AuthState::logged_in(user());
        assert!(state.is_authenticated);
        assert!(state.user.is_some());
        assert!(!state.is_loading);

        let state = AuthState::logged_out();
        assert!(!state.is_authenticated);
        assert!(state.user.is_none());
    }

    #[test]
    fn test_logout_is_idempotent() {
        let first = AuthState::logged_in(user());
        let once = AuthState::logged_out();
        let twice = AuthState::logged_out();
        assert_ne!(first, once);
        assert_eq!(once, twice);
    }

    #[test]
    fn test_merged_applies_only_some_fields() {
        let state = AuthState::logged_in(user());
        let next = state.clone().merged(AuthUpdate {
            error: Some(Some("session expired".to_string())),
            ..Default::default()
        });
        assert!(next.is_authenticated);
        assert_eq!(next.user, state.user);
        assert_eq!(next.error.as_deref(), Some("session expired"));

        // `Some(None)` clears a field, `None` leaves it alone.
        let cleared = next.merged(AuthUpdate {
            user: Some(None),
            ..Default::default()
        });
        assert!(cleared.user.is_none());
    }
}
