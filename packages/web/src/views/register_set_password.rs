//! Third wizard step: choose a password.

use dioxus::prelude::*;
use store::{RegistrationState, RegistrationStep};
use ui::{
    hooks::otp::set_password, session_store, use_api, use_loader, util, Alert, Button,
    Input, PasswordMeter, PasswordStrength,
};

use super::guard_step;

#[component]
pub fn RegisterSetPassword() -> Element {
    let api = use_api();
    let mut loader = use_loader();
    let mut password = use_signal(String::new);
    let mut confirm = use_signal(String::new);
    let mut error = use_signal(|| Option::<String>::None);
    let mut submitting = use_signal(|| false);

    let guarded = use_hook(|| guard_step(RegistrationStep::SetPassword));
    if !guarded {
        return rsx! {};
    }

    let email = RegistrationState::load(&session_store())
        .email
        .unwrap_or_default();

    let on_submit = move |_| {
        if PasswordStrength::classify(&password()) == PasswordStrength::VeryWeak {
            error.set(Some(
                "Password must be at least 8 characters long.".to_string(),
            ));
            return;
        }
        if password() != confirm() {
            error.set(Some("Passwords do not match.".to_string()));
            return;
        }
        let api = api.clone();
        let email = email.clone();
        spawn(async move {
            submitting.set(true);
            error.set(None);
            loader.simulate();
            match set_password(&api, &session_store(), &email, &password(), &confirm()).await {
                Ok(_) => util::redirect_with_query(RegistrationStep::Details.path()),
                Err(e) => error.set(Some(e.user_message())),
            }
            loader.finish();
            submitting.set(false);
        });
    };

    rsx! {
        div {
            class: "flex flex-col items-center justify-center min-h-screen p-8",

            div {
                class: "flex flex-col gap-3 w-full max-w-sm",

                h1 { class: "text-2xl font-bold", "Choose a password" }

                if let Some(err) = error() {
                    Alert { message: err }
                }

                Input {
                    label: "Password",
                    r#type: "password",
                    value: password(),
                    oninput: move |evt: FormEvent| password.set(evt.value()),
                }
                PasswordMeter { password: password() }
                Input {
                    label: "Confirm password",
                    r#type: "password",
                    value: confirm(),
                    oninput: move |evt: FormEvent| confirm.set(evt.value()),
                }

                Button {
                    disabled: submitting(),
                    onclick: on_submit,
                    if submitting() { "Saving..." } else { "Continue" }
                }
            }
        }
    }
}
