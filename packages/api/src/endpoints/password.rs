//! Password endpoints: set during registration, forgot/reset flow.

use serde::{Deserialize, Serialize};

use crate::client::ApiClient;
use crate::endpoints::otp::OtpVerification;
use crate::error::ApiError;
use crate::models::User;

#[derive(Clone, Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct SetPasswordPayload<'a> {
    email: &'a str,
    password: &'a str,
    confirm_password: &'a str,
}

#[derive(Clone, Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct EmailPayload<'a> {
    email: &'a str,
}

#[derive(Clone, Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct VerifyResetPayload<'a> {
    email: &'a str,
    code: &'a str,
}

#[derive(Clone, Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct ResetPasswordPayload<'a> {
    email: &'a str,
    code: &'a str,
    password: &'a str,
}

/// Session issued once a password is accepted.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AuthSession {
    #[serde(default)]
    pub token: Option<String>,
    #[serde(default)]
    pub user: Option<User>,
}

impl ApiClient {
    /// Set the password during registration.
    pub async fn set_password(
        &self,
        email: &str,
        password: &str,
        confirm_password: &str,
    ) -> Result<AuthSession, ApiError> {
        self.post(
            "/auth/password/set",
            &SetPasswordPayload {
                email,
                password,
                confirm_password,
            },
        )
        .await
    }

    /// Start the forgot-password flow by emailing a reset OTP.
    pub async fn forgot_password(&self, email: &str) -> Result<(), ApiError> {
        self.post_unit("/auth/password/forgot", &EmailPayload { email })
            .await
    }

    /// Verify the reset OTP before allowing a new password.
    pub async fn verify_reset_otp(
        &self,
        email: &str,
        code: &str,
    ) -> Result<OtpVerification, ApiError> {
        self.post(
            "/auth/password/verify-reset-otp",
            &VerifyResetPayload { email, code },
        )
        .await
    }

    /// Set a new password using a verified reset OTP.
    pub async fn reset_password(
        &self,
        email: &str,
        code: &str,
        password: &str,
    ) -> Result<(), ApiError> {
        self.post_unit(
            "/auth/password/reset",
            &ResetPasswordPayload {
                email,
                code,
                password,
            },
        )
        .await
    }
}
