//! Error taxonomy for REST calls.
//!
//! Three kinds of failure reach the UI: per-field validation errors
//! (shown inline), business errors carrying a server message (shown above
//! or below the form), and transport or decode failures (mapped to one
//! generic fallback string).

use thiserror::Error;

use crate::envelope::ValidationError;

/// Fallback shown when no human-readable server message is available.
pub const GENERIC_ERROR: &str = "Something went wrong. Please try again.";

#[derive(Debug, Error)]
pub enum ApiError {
    /// Transport-level failure (network, TLS, timeout).
    #[error("request failed: {0}")]
    Http(#[from] reqwest::Error),
    /// The backend reported a failure in the response envelope.
    #[error("{}", message.as_deref().unwrap_or(GENERIC_ERROR))]
    Api {
        message: Option<String>,
        validation_errors: Vec<ValidationError>,
    },
    /// The response body did not match the envelope contract.
    #[error("malformed response: {0}")]
    Decode(String),
    /// A success envelope arrived without the expected `data` payload.
    #[error("response carried no data")]
    MissingData,
}

impl ApiError {
    /// Message suitable for inline display: the server-provided message
    /// when there is one, otherwise the generic fallback.
    pub fn user_message(&self) -> String {
        match self {
            Self::Api {
                message: Some(message),
                ..
            } => message.clone(),
            _ => GENERIC_ERROR.to_string(),
        }
    }

    /// Per-field validation errors, empty for non-validation failures.
    pub fn validation_errors(&self) -> &[ValidationError] {
        match self {
            Self::Api {
                validation_errors, ..
            } => validation_errors,
            _ => &[],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_user_message_prefers_server_message() {
        let error = ApiError::Api {
            message: Some("Invalid OTP code".to_string()),
            validation_errors: Vec::new(),
        };
        assert_eq!(error.user_message(), "Invalid OTP code");
    }

    #[test]
    fn test_user_message_falls_back_to_generic() {
        let error = ApiError::MissingData;
        assert_eq!(error.user_message(), GENERIC_ERROR);

        let error = ApiError::Api {
            message: None,
            validation_errors: Vec::new(),
        };
        assert_eq!(error.user_message(), GENERIC_ERROR);
    }
}
