//! Team section editor: member bios.

use api::{Section, SectionFields, UpdateSection};
use dioxus::prelude::*;

use crate::components::{Alert, AlertKind, Button, ButtonVariant, Input};
use crate::hooks::sections::update_section;
use crate::hooks::{use_api, use_query_cache};

use super::{field_en, indexed_key, set_en};

#[derive(Clone, Debug, Default, PartialEq)]
pub struct TeamMember {
    pub name: String,
    pub role: String,
    pub bio: String,
    pub photo_url: String,
}

impl TeamMember {
    fn from_fields(fields: &SectionFields) -> Vec<Self> {
        let mut members = Vec::new();
        for index in 0.. {
            let Some(name) = field_en(fields, &indexed_key("member", index, "name")) else {
                break;
            };
            members.push(Self {
                name,
                role: field_en(fields, &indexed_key("member", index, "role")).unwrap_or_default(),
                bio: field_en(fields, &indexed_key("member", index, "bio")).unwrap_or_default(),
                photo_url: field_en(fields, &indexed_key("member", index, "photoUrl"))
                    .unwrap_or_default(),
            });
        }
        members
    }

    fn to_fields(members: &[Self]) -> SectionFields {
        let mut fields = SectionFields::default();
        for (index, member) in members.iter().enumerate() {
            set_en(&mut fields, indexed_key("member", index, "name"), &member.name);
            set_en(&mut fields, indexed_key("member", index, "role"), &member.role);
            set_en(&mut fields, indexed_key("member", index, "bio"), &member.bio);
            set_en(
                &mut fields,
                indexed_key("member", index, "photoUrl"),
                &member.photo_url,
            );
        }
        fields
    }
}

#[component]
pub fn TeamEditor(section: Section) -> Element {
    let api = use_api();
    let cache = use_query_cache();
    let mut members = use_signal(|| TeamMember::from_fields(&section.fields));
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
                fields: TeamMember::to_fields(&members()),
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

            h2 { class: "text-lg font-semibold", "Team" }

            if let Some(err) = error() {
                Alert { message: err }
            }
            if saved() {
                Alert { kind: AlertKind::Success, message: "Team saved." }
            }

            for (i, member) in members().iter().cloned().enumerate() {
                div {
                    class: "flex flex-col gap-2 p-3 border border-neutral-200 rounded",

                    div {
                        class: "flex gap-2",
                        Input {
                            class: "flex-1",
                            label: "Name",
                            value: member.name,
                            oninput: move |evt: FormEvent| members.write()[i].name = evt.value(),
                        }
                        Input {
                            class: "flex-1",
                            label: "Role",
                            value: member.role,
                            oninput: move |evt: FormEvent| members.write()[i].role = evt.value(),
                        }
                    }
                    Input {
                        label: "Bio",
                        value: member.bio,
                        oninput: move |evt: FormEvent| members.write()[i].bio = evt.value(),
                    }
                    Input {
                        label: "Photo URL",
                        value: member.photo_url,
                        oninput: move |evt: FormEvent| members.write()[i].photo_url = evt.value(),
                    }
                    Button {
                        variant: ButtonVariant::Danger,
                        onclick: move |_| { members.write().remove(i); },
                        "Remove member"
                    }
                }
            }

            div {
                class: "flex gap-2",

                Button {
                    variant: ButtonVariant::Secondary,
                    onclick: move |_| members.write().push(TeamMember::default()),
                    "Add member"
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
