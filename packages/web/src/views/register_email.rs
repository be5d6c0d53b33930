//! First wizard step: collect the email and issue an OTP.

use dioxus::prelude::*;
use store::RegistrationStep;
use ui::{
    email_is_valid, hooks::otp::initiate_otp, session_store, use_api, use_auth,
    use_loader, util, Alert, Button, ButtonVariant, Input,
};

use crate::Route;

#[component]
pub fn RegisterEmail() -> Element {
    let api = use_api();
    let auth = use_auth();
    let mut loader = use_loader();
    let mut email = use_signal(String::new);
    let mut error = use_signal(|| Option::<String>::None);
    let mut submitting = use_signal(|| false);

    let google_auth = auth.clone();
    let on_submit = move |_| {
        if !email_is_valid(&email()) {
            error.set(Some("Enter a valid email address.".to_string()));
            return;
        }
        let api = api.clone();
        spawn(async move {
            submitting.set(true);
            error.set(None);
            loader.simulate();
            match initiate_otp(&api, &session_store(), &email()).await {
                Ok(_) => util::redirect_with_query(RegistrationStep::VerifyOtp.path()),
                Err(e) => error.set(Some(e.user_message())),
            }
            loader.finish();
            submitting.set(false);
        });
    };

    let on_google = move |_| google_auth.login_with_google("register");

    rsx! {
        div {
            class: "flex flex-col items-center justify-center min-h-screen p-8",

            div {
                class: "flex flex-col gap-3 w-full max-w-sm",

                h1 { class: "text-2xl font-bold", "Create your account" }
                p {
                    class: "text-neutral-500 text-sm",
                    "We will send a one-time code to verify your email."
                }

                if let Some(err) = error() {
                    Alert { message: err }
                }

                Input {
                    label: "Email",
                    r#type: "email",
                    value: email(),
                    oninput: move |evt: FormEvent| email.set(evt.value()),
                }

                Button {
                    disabled: submitting(),
                    onclick: on_submit,
                    if submitting() { "Sending code..." } else { "Continue" }
                }
                Button {
                    variant: ButtonVariant::Secondary,
                    onclick: on_google,
                    "Continue with Google"
                }

                p {
                    class: "text-sm text-neutral-600",
                    "Already registered? "
                    Link { to: Route::Login {}, "Sign in" }
                }
            }
        }
    }
}
