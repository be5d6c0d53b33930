//! # Registration wizard state
//!
//! The registration flow is an ordered sequence of steps:
//! email → verify OTP → set password → details. Instead of guessing
//! progress from the presence of loose storage keys, the wizard keeps one
//! explicit [`RegistrationState`] record, serialized as JSON under
//! [`crate::kv::keys::REGISTER_STATE`] in session storage, so its lifetime
//! is bounded to one browser tab.
//!
//! Each wizard page calls [`RegistrationState::allows`] on mount. When a
//! prerequisite is missing the call returns the step to redirect back to,
//! which makes skipping forward by typing a URL impossible: the facts a
//! later step depends on simply are not recorded yet.
//!
//! Google-originated accounts arrive with a verified identity and no local
//! password, so they skip the set-password step.

use serde::{Deserialize, Serialize};

use crate::kv::{keys, KeyValueStore};

/// One step of the registration wizard, in order.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum RegistrationStep {
    Email,
    VerifyOtp,
    SetPassword,
    Details,
}

impl RegistrationStep {
    /// Route path for the step, used for redirects.
    pub fn path(self) -> &'static str {
        match self {
            Self::Email => "/register",
            Self::VerifyOtp => "/register/verify-otp",
            Self::SetPassword => "/register/set-password",
            Self::Details => "/register/details",
        }
    }
}

/// Facts recorded as the wizard advances. The record only ever grows
/// within a run; abandoning the tab discards it with the session.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct RegistrationState {
    /// Email submitted on the first step, shown on the OTP step.
    #[serde(default)]
    pub email: Option<String>,
    /// Set once the backend confirmed the 6-digit code.
    #[serde(default)]
    pub otp_verified: bool,
    /// Set once a password was accepted.
    #[serde(default)]
    pub password_set: bool,
    /// Google-originated accounts skip the password step.
    #[serde(default)]
    pub google: bool,
}

impl RegistrationState {
    /// Check whether `step` may be shown. Returns the step to redirect to
    /// when a prerequisite is missing.
    pub fn allows(&self, step: RegistrationStep) -> Result<(), RegistrationStep> {
        match step {
            RegistrationStep::Email => Ok(()),
            RegistrationStep::VerifyOtp => {
                if self.email.is_some() {
                    Ok(())
                } else {
                    Err(RegistrationStep::Email)
                }
            }
            RegistrationStep::SetPassword => {
                if self.email.is_none() {
                    Err(RegistrationStep::Email)
                } else if !self.otp_verified {
                    Err(RegistrationStep::VerifyOtp)
                } else {
                    Ok(())
                }
            }
            RegistrationStep::Details => {
                if self.email.is_none() {
                    Err(RegistrationStep::Email)
                } else if !self.otp_verified {
                    Err(RegistrationStep::VerifyOtp)
                } else if !self.password_set && !self.google {
                    Err(RegistrationStep::SetPassword)
                } else {
                    Ok(())
                }
            }
        }
    }

    /// The step the user should continue from.
    pub fn current_step(&self) -> RegistrationStep {
        if self.email.is_none() {
            RegistrationStep::Email
        } else if !self.otp_verified {
            RegistrationStep::VerifyOtp
        } else if !self.password_set && !self.google {
            RegistrationStep::SetPassword
        } else {
            RegistrationStep::Details
        }
    }

    /// The step that follows a successful OTP verification.
    pub fn step_after_otp(&self) -> RegistrationStep {
        if self.google {
            RegistrationStep::Details
        } else {
            RegistrationStep::SetPassword
        }
    }

    /// Load the record from session storage; missing or corrupt data is an
    /// empty record.
    pub fn load(store: &impl KeyValueStore) -> Self {
        store
            .get(keys::REGISTER_STATE)
            .and_then(|raw| serde_json::from_str(&raw).ok())
            .unwrap_or_default()
    }

    /// Persist the record to session storage.
    pub fn save(&self, store: &impl KeyValueStore) {
        match serde_json::to_string(self) {
            Ok(raw) => store.set(keys::REGISTER_STATE, &raw),
            Err(error) => tracing::error!(%error, "failed to serialize registration state"),
        }
    }

    /// Remove the record, on completion or logout.
    pub fn clear(store: &impl KeyValueStore) {
        store.remove(keys::REGISTER_STATE);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::kv::MemoryStore;

    #[test]
    fn test_direct_visit_redirects_to_email() {
        let state = RegistrationState::default();
        assert_eq!(
            state.allows(RegistrationStep::VerifyOtp),
            Err(RegistrationStep::Email)
        );
        assert_eq!(
            state.allows(RegistrationStep::SetPassword),
            Err(RegistrationStep::Email)
        );
        assert_eq!(
            state.allows(RegistrationStep::Details),
            Err(RegistrationStep::Email)
        );
    }

    #[test]
    fn test_steps_unlock_in_order() {
        let mut state = RegistrationState {
            email: Some("user@example.com".to_string()),
            ..Default::default()
        };
        assert_eq!(state.allows(RegistrationStep::VerifyOtp), Ok(()));
        assert_eq!(
            state.allows(RegistrationStep::SetPassword),
            Err(RegistrationStep::VerifyOtp)
        );

        state.otp_verified = true;
        assert_eq!(state.allows(RegistrationStep::SetPassword), Ok(()));
        assert_eq!(
            state.allows(RegistrationStep::Details),
            Err(RegistrationStep::SetPassword)
        );

        state.password_set = true;
        assert_eq!(state.allows(RegistrationStep::Details), Ok(()));
    }

    #[test]
    fn test_google_accounts_skip_password() {
        let state = RegistrationState {
            email: Some("user@example.com".to_string()),
            otp_verified: true,
            google: true,
            ..Default::default()
        };
        assert_eq!(state.allows(RegistrationStep::Details), Ok(()));
        assert_eq!(state.step_after_otp(), RegistrationStep::Details);
        assert_eq!(state.current_step(), RegistrationStep::Details);
    }

    #[test]
    fn test_persistence_roundtrip() {
        let store = MemoryStore::new();

        // Missing record is an empty one.
        assert_eq!(RegistrationState::load(&store), RegistrationState::default());

        let state = RegistrationState {
            email: Some("user@example.com".to_string()),
            otp_verified: true,
            ..Default::default()
        };
        state.save(&store);
        assert_eq!(RegistrationState::load(&store), state);

        RegistrationState::clear(&store);
        assert_eq!(RegistrationState::load(&store), RegistrationState::default());
    }

    #[test]
    fn test_corrupt_record_treated_as_empty() {
        let store = MemoryStore::new();
        store.set(crate::kv::keys::REGISTER_STATE, "{not json");
        assert_eq!(RegistrationState::load(&store), RegistrationState::default());
    }
}
