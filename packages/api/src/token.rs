//! Process-wide access-token holder and claims decoding.
//!
//! The auth context is the single writer of the token; every request
//! function reads it when attaching the bearer header. The holder is the
//! one deliberately process-wide piece of state in the client.

use std::sync::RwLock;

use base64::engine::general_purpose::URL_SAFE_NO_PAD;
use base64::Engine;
use serde::Deserialize;

static ACCESS_TOKEN: RwLock<Option<String>> = RwLock::new(None);

/// Replace the stored access token.
pub fn set_access_token(token: &str) {
    *ACCESS_TOKEN.write().unwrap() = Some(token.to_string());
}

/// The current access token, if any.
pub fn access_token() -> Option<String> {
    ACCESS_TOKEN.read().unwrap().clone()
}

/// Drop the stored access token.
pub fn clear_access_token() {
    *ACCESS_TOKEN.write().unwrap() = None;
}

/// User claims carried in the signed token payload.
#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TokenClaims {
    pub sub: String,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub role: Option<String>,
    #[serde(default)]
    pub exp: Option<i64>,
}

/// Decode the claims from a JWT-shaped token without verifying the
/// signature. Verification happens server-side; the client only reads the
/// payload to prime its auth state.
pub fn decode_claims(token: &str) -> Option<TokenClaims> {
    let payload = token.split('.').nth(1)?;
    let bytes = URL_SAFE_NO_PAD.decode(payload).ok()?;
    serde_json::from_slice(&bytes).ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fake_token(payload: &str) -> String {
        let header = URL_SAFE_NO_PAD.encode(br#"{"alg":"HS256","typ":"JWT"}"#);
        let body = URL_SAFE_NO_PAD.encode(payload.as_bytes());
        format!("{header}.{body}.signature")
    }

    #[test]
    fn test_decode_claims() {
        let token = fake_token(
            r#"{"sub":"42","email":"staff@example.com","role":"admin","exp":1756166400}"#,
        );
        let claims = decode_claims(&token).unwrap();
        assert_eq!(claims.sub, "42");
        assert_eq!(claims.email.as_deref(), Some("staff@example.com"));
        assert_eq!(claims.role.as_deref(), Some("admin"));
    }

    #[test]
    fn test_decode_rejects_malformed_tokens() {
        assert!(decode_claims("not-a-token").is_none());
        assert!(decode_claims("a.b.c").is_none());
        assert!(decode_claims(&fake_token("not json")).is_none());
    }

    #[test]
    fn test_token_holder_roundtrip() {
        clear_access_token();
        assert!(access_token().is_none());

        set_access_token("abc");
        assert_eq!(access_token().as_deref(), Some("abc"));

        clear_access_token();
        assert!(access_token().is_none());
    }
}
