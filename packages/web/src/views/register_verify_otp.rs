//! Second wizard step: verify the 6-digit code.

use dioxus::prelude::*;
use store::{RegistrationState, RegistrationStep};
use ui::{
    hooks::otp::{resend_otp, verify_otp},
    otp_is_valid, session_store, use_api, use_loader, util, Alert, AlertKind, Button,
    ButtonVariant, OtpInput,
};

use super::guard_step;

#[component]
pub fn RegisterVerifyOtp() -> Element {
    let api = use_api();
    let mut loader = use_loader();
    let mut code = use_signal(String::new);
    let mut error = use_signal(|| Option::<String>::None);
    let mut notice = use_signal(|| Option::<String>::None);
    let mut submitting = use_signal(|| false);

    let guarded = use_hook(|| guard_step(RegistrationStep::VerifyOtp));
    if !guarded {
        return rsx! {};
    }

    let email = RegistrationState::load(&session_store())
        .email
        .unwrap_or_default();

    let submit_email = email.clone();
    let submit_api = api.clone();
    let on_submit = move |_| {
        let api = submit_api.clone();
        let email = submit_email.clone();
        spawn(async move {
            submitting.set(true);
            error.set(None);
            loader.simulate();
            match verify_otp(&api, &session_store(), &email, &code()).await {
                Ok(verification) if verification.verified => {
                    let next = RegistrationState::load(&session_store()).step_after_otp();
                    util::redirect_with_query(next.path());
                }
                Ok(_) => error.set(Some(
                    "That code is not valid. Check it and try again.".to_string(),
                )),
                Err(e) => error.set(Some(e.user_message())),
            }
            loader.finish();
            submitting.set(false);
        });
    };

    let resend_email = email.clone();
    let on_resend = move |_| {
        let api = api.clone();
        let email = resend_email.clone();
        spawn(async move {
            error.set(None);
            notice.set(None);
            match resend_otp(&api, &email).await {
                Ok(_) => notice.set(Some("A new code is on its way.".to_string())),
                Err(e) => error.set(Some(e.user_message())),
            }
        });
    };

    let code_ready = otp_is_valid(&code());

    rsx! {
        div {
            class: "flex flex-col items-center justify-center min-h-screen p-8",

            div {
                class: "flex flex-col gap-3 w-full max-w-sm",

                h1 { class: "text-2xl font-bold", "Check your inbox" }
                p {
                    class: "text-neutral-500 text-sm",
                    "Enter the 6-digit code sent to {email}."
                }

                if let Some(err) = error() {
                    Alert { message: err }
                }
                if let Some(msg) = notice() {
                    Alert { kind: AlertKind::Info, message: msg }
                }

                OtpInput {
                    value: code(),
                    oninput: move |value| code.set(value),
                }

                Button {
                    disabled: submitting() || !code_ready,
                    onclick: on_submit,
                    if submitting() { "Verifying..." } else { "Verify" }
                }
                Button {
                    variant: ButtonVariant::Secondary,
                    onclick: on_resend,
                    "Resend code"
                }
            }
        }
    }
}
