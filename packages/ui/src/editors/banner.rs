//! Banner section editor: headline, subtitle, call-to-action.

use api::{Section, UpdateSection};
use dioxus::prelude::*;

use crate::components::{Alert, AlertKind, Button, ButtonVariant, Input};
use crate::hooks::sections::update_section;
use crate::hooks::{use_api, use_query_cache};

use super::{field_en, set_en};

const FIELDS: &[(&str, &str)] = &[
    ("title", "Headline"),
    ("subtitle", "Subtitle"),
    ("ctaLabel", "Button label"),
    ("ctaUrl", "Button URL"),
    ("imageUrl", "Background image URL"),
];

#[component]
pub fn BannerEditor(section: Section) -> Element {
    let api = use_api();
    let cache = use_query_cache();
    let mut values = use_signal(|| {
        FIELDS
            .iter()
            .map(|(key, _)| field_en(&section.fields, key).unwrap_or_default())
            .collect::<Vec<_>>()
    });
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

            let mut fields = api::SectionFields::default();
            for ((key, _), value) in FIELDS.iter().zip(values().iter()) {
                set_en(&mut fields, (*key).to_string(), value);
            }
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

            h2 { class: "text-lg font-semibold", "Banner" }

            if let Some(err) = error() {
                Alert { message: err }
            }
            if saved() {
                Alert { kind: AlertKind::Success, message: "Banner saved." }
            }

            for (i, (_, label)) in FIELDS.iter().enumerate() {
                Input {
                    label: label.to_string(),
                    value: values().get(i).cloned().unwrap_or_default(),
                    oninput: move |evt: FormEvent| values.write()[i] = evt.value(),
                }
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
