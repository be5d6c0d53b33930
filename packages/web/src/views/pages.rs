//! Pages index: list, create, delete.

use api::CreatePage;
use dioxus::prelude::*;
use ui::{
    hooks::pages::{create_page, delete_page, use_pages_list},
    use_api, use_query_cache, Alert, Button, ButtonVariant, Input,
};

use super::shell::Shell;
use crate::Route;

#[component]
pub fn Pages() -> Element {
    let api = use_api();
    let cache = use_query_cache();
    let mut pages = use_pages_list();
    let mut name = use_signal(String::new);
    let mut slug = use_signal(String::new);
    let mut error = use_signal(|| Option::<String>::None);

    let create_api = api.clone();
    let create_cache = cache.clone();
    let on_create = move |_| {
        if name().trim().is_empty() {
            error.set(Some("Give the page a name.".to_string()));
            return;
        }
        let api = create_api.clone();
        let cache = create_cache.clone();
        spawn(async move {
            error.set(None);
            let payload = CreatePage {
                name: name().trim().to_string(),
                slug: Some(slug().trim().to_string()).filter(|s| !s.is_empty()),
            };
            match create_page(&api, &cache, &payload).await {
                Ok(_) => {
                    name.set(String::new());
                    slug.set(String::new());
                    pages.restart();
                }
                Err(e) => error.set(Some(e.user_message())),
            }
        });
    };

    rsx! {
        Shell {
            h1 { class: "text-xl font-bold mb-4", "Pages" }

            if let Some(err) = error() {
                Alert { message: err }
            }

            div {
                class: "flex gap-2 items-end mb-6",

                Input {
                    class: "flex-1",
                    label: "Name",
                    value: name(),
                    oninput: move |evt: FormEvent| name.set(evt.value()),
                }
                Input {
                    class: "flex-1",
                    label: "Slug (optional)",
                    value: slug(),
                    oninput: move |evt: FormEvent| slug.set(evt.value()),
                }
                Button {
                    onclick: on_create,
                    "Create page"
                }
            }

            match pages() {
                Some(Ok(list)) if list.is_empty() => rsx! {
                    p { class: "text-neutral-500", "No pages yet." }
                },
                Some(Ok(list)) => rsx! {
                    ul {
                        class: "flex flex-col divide-y divide-neutral-200 bg-white border border-neutral-200 rounded",

                        for page in list {
                            PageRow {
                                page,
                                on_deleted: move |_| pages.restart(),
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
fn PageRow(page: api::Page, on_deleted: EventHandler<()>) -> Element {
    let api = use_api();
    let cache = use_query_cache();
    let mut deleting = use_signal(|| false);
    let id = page.id.clone();
    let slug = page.slug.clone().unwrap_or_default();
    let published = if page.is_published { "Published" } else { "Draft" };

    let on_delete = move |_| {
        let api = api.clone();
        let cache = cache.clone();
        let id = id.clone();
        spawn(async move {
            deleting.set(true);
            if delete_page(&api, &cache, &id).await.is_ok() {
                on_deleted.call(());
            }
            deleting.set(false);
        });
    };

    rsx! {
        li {
            class: "flex items-center gap-3 px-4 py-3",

            div {
                class: "flex flex-col",
                Link {
                    to: Route::PageDetail { id: page.id.clone() },
                    class: "font-medium",
                    "{page.name}"
                }
                span { class: "text-sm text-neutral-500", "/{slug}" }
            }

            span {
                class: "ml-auto text-sm text-neutral-500",
                "{published}"
            }
            Button {
                variant: ButtonVariant::Danger,
                disabled: deleting(),
                onclick: on_delete,
                "Delete"
            }
        }
    }
}
