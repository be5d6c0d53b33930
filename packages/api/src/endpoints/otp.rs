//! OTP endpoints for the registration flow.

use serde::{Deserialize, Serialize};

use crate::client::ApiClient;
use crate::error::ApiError;
use crate::models::User;

#[derive(Clone, Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct EmailPayload<'a> {
    email: &'a str,
}

#[derive(Clone, Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct VerifyPayload<'a> {
    email: &'a str,
    code: &'a str,
}

/// Result of issuing (or re-issuing) an OTP.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OtpIssued {
    /// Seconds until the code expires.
    #[serde(default)]
    pub expires_in_seconds: Option<i64>,
}

/// Result of verifying a submitted code.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OtpVerification {
    pub verified: bool,
    /// Issued when verification creates or resumes an account.
    #[serde(default)]
    pub token: Option<String>,
    #[serde(default)]
    pub user: Option<User>,
}

impl ApiClient {
    /// Issue an OTP for `email`. The backend creates the pending account
    /// row and emails the 6-digit code.
    pub async fn initiate_otp(&self, email: &str) -> Result<OtpIssued, ApiError> {
        self.post("/auth/otp/initiate", &EmailPayload { email }).await
    }

    /// Verify the submitted 6-digit code. A mismatch comes back as an
    /// envelope error carrying the server message, not as
    /// `verified: false`.
    pub async fn verify_otp(&self, email: &str, code: &str) -> Result<OtpVerification, ApiError> {
        self.post("/auth/otp/verify", &VerifyPayload { email, code })
            .await
    }

    /// Re-issue the OTP without changing the flow state.
    pub async fn resend_otp(&self, email: &str) -> Result<OtpIssued, ApiError> {
        self.post("/auth/otp/resend", &EmailPayload { email }).await
    }
}
