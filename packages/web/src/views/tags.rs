//! Tags screen: label site areas, persisted locally.

use dioxus::prelude::*;
use store::TAG_TARGETS;
use ui::{use_tags, Alert, Button, ButtonVariant, Input};

use super::shell::Shell;

#[component]
pub fn Tags() -> Element {
    let mut name = use_signal(String::new);
    let mut target = use_signal(|| TAG_TARGETS[0].0.to_string());
    let mut error = use_signal(|| Option::<String>::None);
    // Bumped after every mutation so the list re-reads storage.
    let mut version = use_signal(|| 0u32);

    let list = use_memo(move || {
        version();
        use_tags().list()
    });

    let on_add = move |_| {
        if name().trim().is_empty() {
            error.set(Some("Give the tag a name.".to_string()));
            return;
        }
        error.set(None);
        use_tags().add(name().trim(), &target());
        name.set(String::new());
        version += 1;
    };

    rsx! {
        Shell {
            h1 { class: "text-xl font-bold mb-4", "Tags" }

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
                div {
                    class: "flex flex-col gap-1",
                    label { class: "text-sm text-neutral-700", "For" }
                    select {
                        class: "px-2.5 py-2 border border-neutral-300 rounded text-[0.9375rem]",
                        value: "{target}",
                        oninput: move |evt: FormEvent| target.set(evt.value()),

                        for (value, label) in TAG_TARGETS {
                            option { value: *value, "{label}" }
                        }
                    }
                }
                Button {
                    onclick: on_add,
                    "Add tag"
                }
            }

            if list().is_empty() {
                p { class: "text-neutral-500", "No tags yet." }
            } else {
                ul {
                    class: "flex flex-col divide-y divide-neutral-200 bg-white border border-neutral-200 rounded",

                    for (i, tag) in list().iter().cloned().enumerate() {
                        li {
                            class: "flex items-center gap-3 px-4 py-3",

                            span { class: "font-medium", "{tag.name}" }
                            span { class: "text-sm text-neutral-500", "{tag.target}" }

                            div {
                                class: "ml-auto",
                                Button {
                                    variant: ButtonVariant::Danger,
                                    onclick: move |_| {
                                        use_tags().remove(i);
                                        version += 1;
                                    },
                                    "Remove"
                                }
                            }
                        }
                    }
                }
            }
        }
    }
}
