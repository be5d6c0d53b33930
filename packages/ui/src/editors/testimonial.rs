//! Testimonial section editor: quotes with attribution.

use api::{Section, SectionFields, UpdateSection};
use dioxus::prelude::*;

use crate::components::{Alert, AlertKind, Button, ButtonVariant, Input};
use crate::hooks::sections::update_section;
use crate::hooks::{use_api, use_query_cache};

use super::{field_en, indexed_key, set_en};

#[derive(Clone, Debug, Default, PartialEq)]
pub struct Testimonial {
    pub quote: String,
    pub author: String,
}

impl Testimonial {
    fn from_fields(fields: &SectionFields) -> Vec<Self> {
        let mut quotes = Vec::new();
        for index in 0.. {
            let Some(quote) = field_en(fields, &indexed_key("quote", index, "text")) else {
                break;
            };
            quotes.push(Self {
                quote,
                author: field_en(fields, &indexed_key("quote", index, "author"))
                    .unwrap_or_default(),
            });
        }
        quotes
    }

    fn to_fields(quotes: &[Self]) -> SectionFields {
        let mut fields = SectionFields::default();
        for (index, item) in quotes.iter().enumerate() {
            set_en(&mut fields, indexed_key("quote", index, "text"), &item.quote);
            set_en(
                &mut fields,
                indexed_key("quote", index, "author"),
                &item.author,
            );
        }
        fields
    }
}

#[component]
pub fn TestimonialEditor(section: Section) -> Element {
    let api = use_api();
    let cache = use_query_cache();
    let mut quotes = use_signal(|| Testimonial::from_fields(&section.fields));
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
                fields: Testimonial::to_fields(&quotes()),
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

            h2 { class: "text-lg font-semibold", "Testimonials" }

            if let Some(err) = error() {
                Alert { message: err }
            }
            if saved() {
                Alert { kind: AlertKind::Success, message: "Testimonials saved." }
            }

            for (i, item) in quotes().iter().cloned().enumerate() {
                div {
                    class: "flex gap-2 items-end",

                    Input {
                        class: "flex-1",
                        label: "Quote",
                        value: item.quote,
                        oninput: move |evt: FormEvent| quotes.write()[i].quote = evt.value(),
                    }
                    Input {
                        class: "flex-1",
                        label: "Author",
                        value: item.author,
                        oninput: move |evt: FormEvent| quotes.write()[i].author = evt.value(),
                    }
                    Button {
                        variant: ButtonVariant::Danger,
                        onclick: move |_| { quotes.write().remove(i); },
                        "Remove"
                    }
                }
            }

            div {
                class: "flex gap-2",

                Button {
                    variant: ButtonVariant::Secondary,
                    onclick: move |_| quotes.write().push(Testimonial::default()),
                    "Add quote"
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
        let quotes = vec![
            Testimonial {
                quote: "Best launch we ever had.".to_string(),
                author: "R. Ames".to_string(),
            },
            Testimonial {
                quote: "Would recommend.".to_string(),
                author: String::new(),
            },
        ];
        let fields = Testimonial::to_fields(&quotes);
        assert_eq!(Testimonial::from_fields(&fields), quotes);
    }
}
