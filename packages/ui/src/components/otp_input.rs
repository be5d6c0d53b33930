//! Six-digit code input for the OTP steps.
//!
//! Non-digits are dropped and the value is capped at six characters, so
//! the submit gate only has to check [`crate::validate::otp_is_valid`].

use dioxus::prelude::*;

#[component]
pub fn OtpInput(value: String, oninput: EventHandler<String>) -> Element {
    rsx! {
        input {
            class: "px-2.5 py-2 border border-neutral-300 rounded text-center text-xl tracking-[0.5em] w-full",
            r#type: "text",
            inputmode: "numeric",
            autocomplete: "one-time-code",
            maxlength: 6,
            placeholder: "000000",
            value: "{value}",
            oninput: move |evt: FormEvent| {
                let cleaned: String = evt
                    .value()
                    .chars()
                    .filter(char::is_ascii_digit)
                    .take(6)
                    .collect();
                oninput.call(cleaned);
            },
        }
    }
}
