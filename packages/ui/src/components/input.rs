//! Text input with an optional label and inline validation error.

use dioxus::prelude::*;

#[component]
pub fn Input(
    #[props(default = "text".to_string())] r#type: String,
    #[props(default = "".to_string())] placeholder: String,
    #[props(default = "".to_string())] label: String,
    #[props(default = "".to_string())] class: String,
    value: String,
    oninput: EventHandler<FormEvent>,
    #[props(default)] error: Option<String>,
) -> Element {
    let input_type = r#type;
    rsx! {
        div {
            class: "flex flex-col gap-1 {class}",

            if !label.is_empty() {
                label {
                    class: "text-sm text-neutral-700",
                    "{label}"
                }
            }

            input {
                class: "px-2.5 py-2 border rounded text-[0.9375rem]",
                class: if error.is_some() { "border-red-400" } else { "border-neutral-300" },
                r#type: "{input_type}",
                placeholder: "{placeholder}",
                value: "{value}",
                oninput: move |evt| oninput.call(evt),
            }

            if let Some(ref err) = error {
                span {
                    class: "text-red-600 text-[0.8125rem]",
                    "{err}"
                }
            }
        }
    }
}
