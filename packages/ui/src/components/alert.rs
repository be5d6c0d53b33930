//! Inline alert for business errors and confirmations.

use dioxus::prelude::*;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum AlertKind {
    #[default]
    Error,
    Success,
    Info,
}

impl AlertKind {
    fn class(self) -> &'static str {
        match self {
            Self::Error => "bg-red-50 border-red-200 text-red-600",
            Self::Success => "bg-green-50 border-green-200 text-green-700",
            Self::Info => "bg-blue-50 border-blue-200 text-blue-700",
        }
    }
}

#[component]
pub fn Alert(
    #[props(default)] kind: AlertKind,
    message: String,
) -> Element {
    let kind_class = kind.class();

    rsx! {
        div {
            class: "px-2.5 py-2.5 border rounded text-[0.8125rem] {kind_class}",
            "{message}"
        }
    }
}
