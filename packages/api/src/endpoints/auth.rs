//! Session endpoints: login, logout, Google entry URL, registration
//! completion.

use serde::Serialize;

use crate::client::ApiClient;
use crate::endpoints::password::AuthSession;
use crate::error::ApiError;
use crate::models::User;

#[derive(Clone, Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct LoginPayload<'a> {
    email: &'a str,
    password: &'a str,
}

/// Compliance flags collected on the terminal registration step.
#[derive(Clone, Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CompleteRegistration {
    pub registered_with_securities: bool,
    pub pep: bool,
    pub accept_terms: bool,
}

impl ApiClient {
    /// Authenticate with email and password.
    pub async fn login(&self, email: &str, password: &str) -> Result<AuthSession, ApiError> {
        self.post("/auth/login", &LoginPayload { email, password })
            .await
    }

    /// Best-effort logout. Callers treat failure as non-fatal: the local
    /// session is cleared either way.
    pub async fn logout(&self) -> Result<(), ApiError> {
        self.post_unit("/auth/logout", &serde_json::json!({})).await
    }

    /// OAuth entry URL the browser is redirected to. `source` tells the
    /// backend which screen initiated the flow.
    pub fn google_login_url(&self, source: &str) -> String {
        format!("{}/auth/google?source={source}", self.base_url())
    }

    /// Finalize the account with the compliance flags from the details
    /// step.
    pub async fn complete_registration(
        &self,
        payload: &CompleteRegistration,
    ) -> Result<User, ApiError> {
        self.post("/auth/register/complete", payload).await
    }
}
