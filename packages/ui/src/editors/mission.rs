//! Mission section editor: statement plus a list of pillars.

use api::{Section, SectionFields, UpdateSection};
use dioxus::prelude::*;

use crate::components::{Alert, AlertKind, Button, ButtonVariant, Input};
use crate::hooks::sections::update_section;
use crate::hooks::{use_api, use_query_cache};

use super::{field_en, indexed_key, set_en};

#[derive(Clone, Debug, Default, PartialEq)]
pub struct MissionPillar {
    pub title: String,
    pub description: String,
}

impl MissionPillar {
    fn from_fields(fields: &SectionFields) -> Vec<Self> {
        let mut pillars = Vec::new();
        for index in 0.. {
            let Some(title) = field_en(fields, &indexed_key("pillar", index, "title")) else {
                break;
            };
            pillars.push(Self {
                title,
                description: field_en(fields, &indexed_key("pillar", index, "description"))
                    .unwrap_or_default(),
            });
        }
        pillars
    }

    fn write_fields(pillars: &[Self], fields: &mut SectionFields) {
        for (index, pillar) in pillars.iter().enumerate() {
            set_en(fields, indexed_key("pillar", index, "title"), &pillar.title);
            set_en(
                fields,
                indexed_key("pillar", index, "description"),
                &pillar.description,
            );
        }
    }
}

#[component]
pub fn MissionEditor(section: Section) -> Element {
    let api = use_api();
    let cache = use_query_cache();
    let mut title = use_signal(|| field_en(&section.fields, "title").unwrap_or_default());
    let mut body = use_signal(|| field_en(&section.fields, "body").unwrap_or_default());
    let mut pillars = use_signal(|| MissionPillar::from_fields(&section.fields));
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

            let mut fields = SectionFields::default();
            set_en(&mut fields, "title".to_string(), &title());
            set_en(&mut fields, "body".to_string(), &body());
            MissionPillar::write_fields(&pillars(), &mut fields);
            let payload = UpdateSection {
                fields,
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

            h2 { class: "text-lg font-semibold", "Mission" }

            if let Some(err) = error() {
                Alert { message: err }
            }
            if saved() {
                Alert { kind: AlertKind::Success, message: "Mission saved." }
            }

            Input {
                label: "Title",
                value: title(),
                oninput: move |evt: FormEvent| title.set(evt.value()),
            }
            Input {
                label: "Statement",
                value: body(),
                oninput: move |evt: FormEvent| body.set(evt.value()),
            }

            h3 { class: "text-sm font-medium text-neutral-500", "Pillars" }

            for (i, pillar) in pillars().iter().cloned().enumerate() {
                div {
                    class: "flex gap-2 items-end",

                    Input {
                        class: "flex-1",
                        label: "Pillar title",
                        value: pillar.title,
                        oninput: move |evt: FormEvent| pillars.write()[i].title = evt.value(),
                    }
                    Input {
                        class: "flex-1",
                        label: "Description",
                        value: pillar.description,
                        oninput: move |evt: FormEvent| {
                            pillars.write()[i].description = evt.value()
                        },
                    }
                    Button {
                        variant: ButtonVariant::Danger,
                        onclick: move |_| { pillars.write().remove(i); },
                        "Remove"
                    }
                }
            }

            div {
                class: "flex gap-2",

                Button {
                    variant: ButtonVariant::Secondary,
                    onclick: move |_| pillars.write().push(MissionPillar::default()),
                    "Add pillar"
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
    fn test_pillars_roundtrip_alongside_scalar_fields() {
        let pillars = vec![
            MissionPillar {
                title: "Craft".to_string(),
                description: "Ship carefully.".to_string(),
            },
            MissionPillar {
                title: "Care".to_string(),
                description: String::new(),
            },
        ];

        let mut fields = SectionFields::default();
        set_en(&mut fields, "title".to_string(), "Our mission");
        MissionPillar::write_fields(&pillars, &mut fields);

        assert_eq!(field_en(&fields, "title").as_deref(), Some("Our mission"));
        assert_eq!(MissionPillar::from_fields(&fields), pillars);
    }
}
