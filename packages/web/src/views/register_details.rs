//! Terminal wizard step: compliance flags, then into the console.

use api::CompleteRegistration;
use dioxus::prelude::*;
use store::{RegistrationState, RegistrationStep};
use ui::{session_store, use_api, use_auth, use_loader, util, Alert, Button};

use super::guard_step;

#[component]
pub fn RegisterDetails() -> Element {
    let api = use_api();
    let auth = use_auth();
    let mut loader = use_loader();
    let mut registered_with_securities = use_signal(|| false);
    let mut pep = use_signal(|| false);
    let mut accept_terms = use_signal(|| false);
    let mut error = use_signal(|| Option::<String>::None);
    let mut submitting = use_signal(|| false);

    let guarded = use_hook(|| guard_step(RegistrationStep::Details));
    if !guarded {
        return rsx! {};
    }

    let on_submit = move |_| {
        if !accept_terms() {
            error.set(Some("You must accept the terms to continue.".to_string()));
            return;
        }
        let api = api.clone();
        let mut auth = auth.clone();
        spawn(async move {
            submitting.set(true);
            error.set(None);
            loader.simulate();

            let payload = CompleteRegistration {
                registered_with_securities: registered_with_securities(),
                pep: pep(),
                accept_terms: accept_terms(),
            };
            match api.complete_registration(&payload).await {
                Ok(user) => {
                    // The wizard is done; its record must not outlive it.
                    RegistrationState::clear(&session_store());
                    if let Some(token) = api::access_token() {
                        auth.login(&token, user);
                    }
                    util::redirect("/pages");
                }
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

                h1 { class: "text-2xl font-bold", "Almost there" }
                p {
                    class: "text-neutral-500 text-sm",
                    "A few declarations before we finish."
                }

                if let Some(err) = error() {
                    Alert { message: err }
                }

                label {
                    class: "flex items-center gap-2 text-sm",
                    input {
                        r#type: "checkbox",
                        checked: registered_with_securities(),
                        oninput: move |evt: FormEvent| {
                            registered_with_securities.set(evt.checked())
                        },
                    }
                    "I am registered with a securities authority"
                }
                label {
                    class: "flex items-center gap-2 text-sm",
                    input {
                        r#type: "checkbox",
                        checked: pep(),
                        oninput: move |evt: FormEvent| pep.set(evt.checked()),
                    }
                    "I am a politically exposed person"
                }
                label {
                    class: "flex items-center gap-2 text-sm",
                    input {
                        r#type: "checkbox",
                        checked: accept_terms(),
                        oninput: move |evt: FormEvent| accept_terms.set(evt.checked()),
                    }
                    "I accept the terms of service"
                }

                Button {
                    disabled: submitting(),
                    onclick: on_submit,
                    if submitting() { "Finishing..." } else { "Finish registration" }
                }
            }
        }
    }
}
