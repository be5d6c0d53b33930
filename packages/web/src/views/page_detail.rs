//! One page with its sections, each rendered through its kind's editor.

use api::{CreateSection, Section, SectionFields};
use dioxus::prelude::*;
use ui::{
    hooks::pages::use_page,
    hooks::sections::{create_section, delete_section, use_sections},
    use_api, use_query_cache, Alert, BannerEditor, Button, ButtonVariant,
    GalleryEditor, MissionEditor, TeamEditor, TestimonialEditor,
};

use super::shell::Shell;

const SECTION_KINDS: &[(&str, &str)] = &[
    ("banner", "Banner"),
    ("gallery", "Gallery"),
    ("team", "Team"),
    ("mission", "Mission"),
    ("testimonial", "Testimonials"),
];

#[component]
pub fn PageDetail(id: String) -> Element {
    let api = use_api();
    let cache = use_query_cache();
    let page = use_page(id.clone());
    let mut sections = use_sections(id.clone());
    let mut kind = use_signal(|| SECTION_KINDS[0].0.to_string());
    let mut error = use_signal(|| Option::<String>::None);

    let page_id = id.clone();
    let on_add = move |_| {
        let api = api.clone();
        let cache = cache.clone();
        let page_id = page_id.clone();
        spawn(async move {
            error.set(None);
            let payload = CreateSection {
                page_id,
                key: kind(),
                fields: SectionFields::default(),
            };
            match create_section(&api, &cache, &payload).await {
                Ok(_) => sections.restart(),
                Err(e) => error.set(Some(e.user_message())),
            }
        });
    };

    let title = match page() {
        Some(Ok(page)) => page.name,
        _ => "Page".to_string(),
    };

    rsx! {
        Shell {
            h1 { class: "text-xl font-bold mb-4", "{title}" }

            if let Some(err) = error() {
                Alert { message: err }
            }

            div {
                class: "flex gap-2 items-center mb-6",

                select {
                    class: "px-2.5 py-2 border border-neutral-300 rounded text-[0.9375rem]",
                    value: "{kind}",
                    oninput: move |evt: FormEvent| kind.set(evt.value()),

                    for (value, label) in SECTION_KINDS {
                        option { value: *value, "{label}" }
                    }
                }
                Button {
                    onclick: on_add,
                    "Add section"
                }
            }

            match sections() {
                Some(Ok(list)) if list.is_empty() => rsx! {
                    p { class: "text-neutral-500", "This page has no sections yet." }
                },
                Some(Ok(list)) => rsx! {
                    div {
                        class: "flex flex-col gap-6",

                        for section in list {
                            SectionCard {
                                section,
                                on_deleted: move |_| sections.restart(),
                            }
                        }
                    }
                },
                Some(Err(message)) => rsx! {
                    Alert { message }
                },
                None => rsx! {
                    p { class: "text-neutral-500", "Loading..." }
                },
            }
        }
    }
}

#[component]
fn SectionCard(section: Section, on_deleted: EventHandler<()>) -> Element {
    let api = use_api();
    let cache = use_query_cache();
    let mut deleting = use_signal(|| false);
    let id = section.id.clone();
    let key = section.key.clone();

    let on_delete = move |_| {
        let api = api.clone();
        let cache = cache.clone();
        let id = id.clone();
        spawn(async move {
            deleting.set(true);
            if delete_section(&api, &cache, &id).await.is_ok() {
                on_deleted.call(());
            }
            deleting.set(false);
        });
    };

    rsx! {
        div {
            class: "bg-white border border-neutral-200 rounded p-4",

            match key.as_str() {
                "banner" => rsx! { BannerEditor { section } },
                "gallery" => rsx! { GalleryEditor { section } },
                "team" => rsx! { TeamEditor { section } },
                "mission" => rsx! { MissionEditor { section } },
                "testimonial" => rsx! { TestimonialEditor { section } },
                other => rsx! {
                    p {
                        class: "text-neutral-500 text-sm",
                        "No editor for section kind \"{other}\"."
                    }
                },
            }

            div {
                class: "flex justify-end mt-3",
                Button {
                    variant: ButtonVariant::Danger,
                    disabled: deleting(),
                    onclick: on_delete,
                    "Delete section"
                }
            }
        }
    }
}
