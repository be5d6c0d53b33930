//! Button with the console's visual variants.

use dioxus::prelude::*;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ButtonVariant {
    #[default]
    Primary,
    Secondary,
    Danger,
}

impl ButtonVariant {
    fn class(self) -> &'static str {
        match self {
            Self::Primary => "bg-primary-600 text-white hover:bg-primary-700",
            Self::Secondary => "bg-neutral-100 text-neutral-800 hover:bg-neutral-200",
            Self::Danger => "bg-red-600 text-white hover:bg-red-700",
        }
    }
}

#[component]
pub fn Button(
    #[props(default)] variant: ButtonVariant,
    #[props(default = "button".to_string())] r#type: String,
    #[props(default = "".to_string())] class: String,
    #[props(default = false)] disabled: bool,
    #[props(default)] onclick: Option<EventHandler<MouseEvent>>,
    children: Element,
) -> Element {
    let variant_class = variant.class();
    let button_type = r#type;

    rsx! {
        button {
            class: "px-4 py-2 rounded text-[0.9375rem] font-medium disabled:opacity-50 disabled:cursor-not-allowed {variant_class} {class}",
            r#type: "{button_type}",
            disabled,
            onclick: move |evt| {
                if let Some(handler) = &onclick {
                    handler.call(evt);
                }
            },
            {children}
        }
    }
}
