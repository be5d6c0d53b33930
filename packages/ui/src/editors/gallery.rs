//! Gallery section editor: a spliceable list of images.

use api::{Section, SectionFields, UpdateSection};
use dioxus::prelude::*;

use crate::components::{Alert, AlertKind, Button, ButtonVariant, Input};
use crate::hooks::sections::update_section;
use crate::hooks::{use_api, use_query_cache};

use super::{field_en, indexed_key, set_en};

#[derive(Clone, Debug, Default, PartialEq)]
pub struct GalleryImage {
    pub url: String,
    pub caption: String,
}

impl GalleryImage {
    /// Seed the item list from indexed fields, stopping at the first gap.
    fn from_fields(fields: &SectionFields) -> Vec<Self> {
        let mut items = Vec::new();
        for index in 0.. {
            let Some(url) = field_en(fields, &indexed_key("image", index, "url")) else {
                break;
            };
            items.push(Self {
                url,
                caption: field_en(fields, &indexed_key("image", index, "caption"))
                    .unwrap_or_default(),
            });
        }
        items
    }

    fn to_fields(items: &[Self]) -> SectionFields {
        let mut fields = SectionFields::default();
        for (index, item) in items.iter().enumerate() {
            set_en(&mut fields, indexed_key("image", index, "url"), &item.url);
            set_en(
                &mut fields,
                indexed_key("image", index, "caption"),
                &item.caption,
            );
        }
        fields
    }
}

#[component]
pub fn GalleryEditor(section: Section) -> Element {
    let api = use_api();
    let cache = use_query_cache();
    let mut items = use_signal(|| GalleryImage::from_fields(&section.fields));
    let mut error = use_signal(|| Option::<String>::None);
    let mut saved = use_signal(|| false);
    let mut saving = use_signal(|| false);
    let section_id = section.id.clone();

    let on_save = move |_| {
        let api = api.clone();
        let cache = cache.clone();
        let id = section_id.clone();
        spawn(async move {
            saving.set(true);
            error.set(None);
            saved.set(false);

            let payload = UpdateSection {
                fields: GalleryImage::to_fields(&items()),
                position: None,
            };
            match update_section(&api, &cache, &id, &payload).await {
                Ok(_) => saved.set(true),
                Err(e) => error.set(Some(e.user_message())),
            }
            saving.set(false);
        });
    };

    rsx! {
        div {
            class: "flex flex-col gap-3",

            h2 { class: "text-lg font-semibold", "Gallery" }

            if let Some(err) = error() {
                Alert { message: err }
            }
            if saved() {
                Alert { kind: AlertKind::Success, message: "Gallery saved." }
            }

            for (i, item) in items().iter().cloned().enumerate() {
                div {
                    class: "flex gap-2 items-end",

                    Input {
                        class: "flex-1",
                        label: "Image URL",
                        value: item.url,
                        oninput: move |evt: FormEvent| items.write()[i].url = evt.value(),
                    }
                    Input {
                        class: "flex-1",
                        label: "Caption",
                        value: item.caption,
                        oninput: move |evt: FormEvent| items.write()[i].caption = evt.value(),
                    }
                    Button {
                        variant: ButtonVariant::Danger,
                        onclick: move |_| { items.write().remove(i); },
                        "Remove"
                    }
                }
            }

            div {
                class: "flex gap-2",

                Button {
                    variant: ButtonVariant::Secondary,
                    onclick: move |_| items.write().push(GalleryImage::default()),
                    "Add image"
                }
                Button {
                    variant: ButtonVariant::Primary,
                    disabled: saving(),
                    onclick: on_save,
                    if saving() { "Saving..." } else { "Save" }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fields_roundtrip() {
        let items = vec![
            GalleryImage {
                url: "https://cdn.example.com/a.jpg".to_string(),
                caption: "Lobby".to_string(),
            },
            GalleryImage {
                url: "https://cdn.example.com/b.jpg".to_string(),
                caption: String::new(),
            },
        ];
        let fields = GalleryImage::to_fields(&items);
        assert_eq!(GalleryImage::from_fields(&fields), items);
    }

    #[test]
    fn test_seeding_stops_at_first_gap() {
        let mut fields = SectionFields::default();
        set_en(&mut fields, "image1.url".to_string(), "a");
        // image2 missing: image3 must not be picked up.
        set_en(&mut fields, "image3.url".to_string(), "c");

        let items = GalleryImage::from_fields(&fields);
        assert_eq!(items.len(), 1);
        assert_eq!(items[0].url, "a");
    }
}
