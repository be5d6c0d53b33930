//! Shared response envelope for the Pagecraft REST API.
//!
//! Every endpoint answers with the same wrapper:
//!
//! ```json
//! {
//!   "version": "1.0",
//!   "code": 200,
//!   "status": "success",
//!   "message": "OK",
//!   "data": { ... },
//!   "validationErrors": []
//! }
//! ```

use serde::{Deserialize, Serialize};

/// The envelope around every API response body.
#[derive(Clone, Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Envelope<T> {
    #[serde(default)]
    pub version: Option<String>,
    pub code: i64,
    pub status: String,
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default = "Option::default")]
    pub data: Option<T>,
    #[serde(default)]
    pub validation_errors: Vec<ValidationError>,
}

impl<T> Envelope<T> {
    /// Whether the backend reports the operation as successful.
    pub fn is_success(&self) -> bool {
        self.status == "success"
    }
}

/// Per-field validation failure, surfaced inline under the offending
/// input.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ValidationError {
    pub field: String,
    pub message: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_success_envelope() {
        let raw = r#"{
            "version": "1.0",
            "code": 200,
            "status": "success",
            "message": "OK",
            "data": {"id": 7},
            "validationErrors": []
        }"#;
        let envelope: Envelope<serde_json::Value> = serde_json::from_str(raw).unwrap();
        assert!(envelope.is_success());
        assert_eq!(envelope.data.unwrap()["id"], 7);
        assert!(envelope.validation_errors.is_empty());
    }

    #[test]
    fn test_error_envelope_with_validation_errors() {
        let raw = r#"{
            "code": 422,
            "status": "error",
            "message": "Validation failed",
            "data": null,
            "validationErrors": [
                {"field": "email", "message": "Email is required"}
            ]
        }"#;
        let envelope: Envelope<serde_json::Value> = serde_json::from_str(raw).unwrap();
        assert!(!envelope.is_success());
        assert_eq!(envelope.message.as_deref(), Some("Validation failed"));
        assert_eq!(envelope.validation_errors[0].field, "email");
    }

    #[test]
    fn test_missing_optional_fields() {
        let raw = r#"{"code": 200, "status": "success"}"#;
        let envelope: Envelope<serde_json::Value> = serde_json::from_str(raw).unwrap();
        assert!(envelope.is_success());
        assert!(envelope.data.is_none());
        assert!(envelope.message.is_none());
    }
}
