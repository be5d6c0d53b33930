//! Strength meter shown under the password inputs.

use dioxus::prelude::*;

use crate::validate::PasswordStrength;

#[component]
pub fn PasswordMeter(password: String) -> Element {
    let strength = PasswordStrength::classify(&password);
    let label = strength.label();
    let width = u32::from(strength.score()) * 25;
    let color = match strength {
        PasswordStrength::VeryWeak | PasswordStrength::Weak => "bg-red-500",
        PasswordStrength::Fair => "bg-yellow-500",
        PasswordStrength::Good => "bg-blue-500",
        PasswordStrength::Strong => "bg-green-500",
    };

    rsx! {
        div {
            class: "flex flex-col gap-1",

            div {
                class: "h-1.5 bg-neutral-200 rounded",
                div {
                    class: "h-1.5 rounded {color}",
                    style: "width: {width}%;",
                }
            }

            span {
                class: "text-[0.8125rem] text-neutral-600",
                "{label}"
            }
        }
    }
}
