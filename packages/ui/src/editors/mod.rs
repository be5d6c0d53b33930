//! Per-section-kind CRUD editors.
//!
//! Each editor seeds local state from the section's field map, splices an
//! in-memory vec of sub-items through add/remove/update, and submits the
//! whole map back through `update_section` on Save. List items are stored
//! under 1-based indexed keys (`"image1.url"`, `"member2.role"`, ...);
//! seeding walks the indexes until the first gap.

use api::{LocalizedText, SectionFields};

mod banner;
mod gallery;
mod mission;
mod team;
mod testimonial;

pub use banner::BannerEditor;
pub use gallery::GalleryEditor;
pub use mission::MissionEditor;
pub use team::TeamEditor;
pub use testimonial::TestimonialEditor;

pub(crate) fn indexed_key(prefix: &str, index: usize, field: &str) -> String {
    format!("{prefix}{}.{field}", index + 1)
}

pub(crate) fn field_en(fields: &SectionFields, key: &str) -> Option<String> {
    fields.0.get(key).and_then(|v| v.en.clone())
}

pub(crate) fn set_en(fields: &mut SectionFields, key: String, value: &str) {
    fields.set(key, LocalizedText::new(value));
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_indexed_key_is_one_based() {
        assert_eq!(indexed_key("image", 0, "url"), "image1.url");
        assert_eq!(indexed_key("member", 2, "name"), "member3.name");
    }
}
