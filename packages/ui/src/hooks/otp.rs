//! OTP and password mutations for the registration wizard.
//!
//! These are not cached: the user resubmits on failure. Each helper also
//! records the wizard fact it establishes in the session-scoped
//! [`RegistrationState`], so the step guards stay in one place.

use api::{ApiClient, ApiError, AuthSession, OtpIssued, OtpVerification};
use store::{KeyValueStore, RegistrationState};

/// Submit the email step: issue an OTP and record the email.
pub async fn initiate_otp(
    api: &ApiClient,
    session: &impl KeyValueStore,
    email: &str,
) -> Result<OtpIssued, ApiError> {
    let issued = api.initiate_otp(email).await?;
    let mut state = RegistrationState::load(session);
    state.email = Some(email.to_string());
    state.save(session);
    Ok(issued)
}

/// Verify the submitted code; on success record the fact and any issued
/// token.
pub async fn verify_otp(
    api: &ApiClient,
    session: &impl KeyValueStore,
    email: &str,
    code: &str,
) -> Result<OtpVerification, ApiError> {
    let verification = api.verify_otp(email, code).await?;
    if verification.verified {
        let mut state = RegistrationState::load(session);
        state.otp_verified = true;
        state.save(session);
        if let Some(token) = &verification.token {
            api::set_access_token(token);
        }
    }
    Ok(verification)
}

/// Re-issue the OTP; the wizard state does not change.
pub async fn resend_otp(api: &ApiClient, email: &str) -> Result<OtpIssued, ApiError> {
    api.resend_otp(email).await
}

/// Submit the password step and record the fact.
pub async fn set_password(
    api: &ApiClient,
    session: &impl KeyValueStore,
    email: &str,
    password: &str,
    confirm_password: &str,
) -> Result<AuthSession, ApiError> {
    let auth = api.set_password(email, password, confirm_password).await?;
    let mut state = RegistrationState::load(session);
    state.password_set = true;
    state.save(session);
    if let Some(token) = &auth.token {
        api::set_access_token(token);
    }
    Ok(auth)
}
