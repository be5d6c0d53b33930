//! User identity and profile record.

use serde::{Deserialize, Serialize};

/// Identity/profile record owned by the auth context for the lifetime of
/// a session. Replaced wholesale on login, cleared on logout.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub id: String,
    pub email: String,
    #[serde(default)]
    pub role: Option<String>,
    #[serde(default, rename = "type")]
    pub user_type: Option<String>,
    #[serde(default)]
    pub first_name: Option<String>,
    #[serde(default)]
    pub last_name: Option<String>,
    #[serde(default)]
    pub is_active: bool,
    #[serde(default)]
    pub profile: Option<Profile>,
    #[serde(default)]
    pub is_email_verified: Option<bool>,
    #[serde(default)]
    pub needs_completion: Option<bool>,
    #[serde(default)]
    pub created_at: Option<String>,
    #[serde(default)]
    pub updated_at: Option<String>,
}

impl User {
    /// Display name, falling back to the email address.
    pub fn display_name(&self) -> String {
        match (&self.first_name, &self.last_name) {
            (Some(first), Some(last)) => format!("{first} {last}"),
            (Some(first), None) => first.clone(),
            _ => self.email.clone(),
        }
    }
}

/// Optional profile details nested under the user record.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Profile {
    #[serde(default)]
    pub image_url: Option<String>,
    #[serde(default)]
    pub phone: Option<String>,
    #[serde(default)]
    pub registered_with_securities: Option<bool>,
    #[serde(default)]
    pub pep: Option<bool>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_name_fallback() {
        let mut user = User {
            id: "1".to_string(),
            email: "staff@example.com".to_string(),
            role: None,
            user_type: None,
            first_name: None,
            last_name: None,
            is_active: true,
            profile: None,
            is_email_verified: None,
            needs_completion: None,
            created_at: None,
            updated_at: None,
        };
        assert_eq!(user.display_name(), "staff@example.com");

        user.first_name = Some("Ana".to_string());
        assert_eq!(user.display_name(), "Ana");

        user.last_name = Some("Silva".to_string());
        assert_eq!(user.display_name(), "Ana Silva");
    }
}
