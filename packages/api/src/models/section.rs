//! Page sections and their localized text fields.
//!
//! A section's content is a map from field key (`"title"`, `"subtitle"`,
//! `"ctaLabel"`, ...) to per-locale text. Lookup follows a defined
//! fallback chain instead of indexing by arbitrary string and hoping:
//! requested locale → English → the raw key itself, so a missing
//! translation renders as the field key rather than as nothing.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// Text values per locale.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct LocalizedText {
    #[serde(default)]
    pub en: Option<String>,
    #[serde(default)]
    pub pt: Option<String>,
}

impl LocalizedText {
    pub fn new(en: impl Into<String>) -> Self {
        Self {
            en: Some(en.into()),
            pt: None,
        }
    }

    /// Value for `locale`, falling back to English.
    pub fn resolve(&self, locale: &str) -> Option<&str> {
        let preferred = match locale {
            "pt" => self.pt.as_deref(),
            _ => self.en.as_deref(),
        };
        preferred.or(self.en.as_deref())
    }
}

/// Field map of a section. Ordered so forms render fields stably.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SectionFields(pub BTreeMap<String, LocalizedText>);

impl SectionFields {
    /// Resolved text for `key`: locale → English → the raw key.
    pub fn text(&self, key: &str, locale: &str) -> String {
        self.0
            .get(key)
            .and_then(|value| value.resolve(locale))
            .unwrap_or(key)
            .to_string()
    }

    pub fn set(&mut self, key: impl Into<String>, value: LocalizedText) {
        self.0.insert(key.into(), value);
    }
}

/// Server-owned section record.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Section {
    pub id: String,
    pub page_id: String,
    /// Section kind key: "banner", "gallery", "team", "mission",
    /// "testimonial".
    pub key: String,
    #[serde(default)]
    pub fields: SectionFields,
    #[serde(default)]
    pub position: Option<i32>,
}

/// Payload for creating a section.
#[derive(Clone, Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateSection {
    pub page_id: String,
    pub key: String,
    pub fields: SectionFields,
}

/// Payload for updating a section.
#[derive(Clone, Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateSection {
    pub fields: SectionFields,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub position: Option<i32>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fallback_chain() {
        let mut fields = SectionFields::default();
        fields.set(
            "title",
            LocalizedText {
                en: Some("Our Team".to_string()),
                pt: Some("Nossa Equipe".to_string()),
            },
        );
        fields.set("subtitle", LocalizedText::new("Meet the people"));

        // Preferred locale wins.
        assert_eq!(fields.text("title", "pt"), "Nossa Equipe");
        // Missing translation falls back to English.
        assert_eq!(fields.text("subtitle", "pt"), "Meet the people");
        // Missing field falls back to the raw key.
        assert_eq!(fields.text("ctaLabel", "pt"), "ctaLabel");
    }

    #[test]
    fn test_wire_shape() {
        let raw = r#"{
            "id": "s1",
            "pageId": "p1",
            "key": "banner",
            "fields": {"title": {"en": "Welcome", "pt": "Bem-vindo"}}
        }"#;
        let section: Section = serde_json::from_str(raw).unwrap();
        assert_eq!(section.key, "banner");
        assert_eq!(section.fields.text("title", "en"), "Welcome");
    }
}
