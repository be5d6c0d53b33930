//! Login page: email and password, or the Google entry point.

use dioxus::prelude::*;
use ui::{
    email_is_valid, use_api, use_auth, util, Alert, Button, ButtonVariant, Input,
};

use crate::Route;

#[component]
pub fn Login() -> Element {
    let api = use_api();
    let auth = use_auth();
    let mut email = use_signal(String::new);
    let mut password = use_signal(String::new);
    let mut error = use_signal(|| Option::<String>::None);
    let mut submitting = use_signal(|| false);

    // Already signed in: straight to the console.
    let state = auth.read();
    if !state.is_loading && state.is_authenticated {
        util::redirect("/pages");
    }

    let google_auth = auth.clone();
    let on_submit = move |_| {
        if !email_is_valid(&email()) {
            error.set(Some("Enter a valid email address.".to_string()));
            return;
        }
        let api = api.clone();
        let mut auth = auth.clone();
        spawn(async move {
            submitting.set(true);
            error.set(None);
            match api.login(&email(), &password()).await {
                Ok(session) => match (session.token, session.user) {
                    (Some(token), Some(user)) => {
                        auth.login(&token, user);
                        util::redirect("/pages");
                    }
                    _ => error.set(Some(api::GENERIC_ERROR.to_string())),
                },
                Err(e) => error.set(Some(e.user_message())),
            }
            submitting.set(false);
        });
    };

    let on_google = move |_| google_auth.login_with_google("login");

    rsx! {
        div {
            class: "flex flex-col items-center justify-center min-h-screen p-8",

            div {
                class: "flex flex-col gap-3 w-full max-w-sm",

                h1 { class: "text-2xl font-bold", "Pagecraft" }
                p { class: "text-neutral-500 text-sm", "Sign in to the admin console." }

                if let Some(err) = error() {
                    Alert { message: err }
                }

                Input {
                    label: "Email",
                    r#type: "email",
                    value: email(),
                    oninput: move |evt: FormEvent| email.set(evt.value()),
                }
                Input {
                    label: "Password",
                    r#type: "password",
                    value: password(),
                    oninput: move |evt: FormEvent| password.set(evt.value()),
                }

                Button {
                    disabled: submitting(),
                    onclick: on_submit,
                    if submitting() { "Signing in..." } else { "Sign in" }
                }
                Button {
                    variant: ButtonVariant::Secondary,
                    onclick: on_google,
                    "Continue with Google"
                }

                p {
                    class: "text-sm text-neutral-600",
                    "No account yet? "
                    Link { to: Route::RegisterEmail {}, "Register" }
                }
            }
        }
    }
}
