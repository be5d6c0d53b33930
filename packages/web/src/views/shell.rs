//! Console chrome: top bar with navigation and the session menu.

use dioxus::prelude::*;
use store::ThemeUpdate;
use ui::{use_auth, use_theme, util, Button, ButtonVariant};

use crate::Route;

#[component]
pub fn Shell(children: Element) -> Element {
    let auth = use_auth();
    let mut theme = use_theme();
    let locale = theme.locale();
    let state = auth.read();
    let display_name = state
        .user
        .as_ref()
        .map(|user| user.display_name())
        .unwrap_or_default();

    // The console is staff-only; unauthenticated visitors go to login.
    if !state.is_loading && !state.is_authenticated {
        util::redirect("/login");
    }

    let on_logout = move |_| {
        let mut auth = auth.clone();
        spawn(async move {
            auth.logout().await;
            util::redirect("/login");
        });
    };

    rsx! {
        header {
            class: "flex items-center gap-6 px-6 py-3 bg-white border-b border-neutral-200",

            span { class: "font-bold text-lg", "Pagecraft" }

            nav {
                class: "flex gap-4 text-sm",
                Link { to: Route::Pages {}, "Pages" }
                Link { to: Route::Tags {}, "Tags" }
            }

            div {
                class: "ml-auto flex items-center gap-3",

                select {
                    class: "px-2 py-1.5 border border-neutral-300 rounded text-sm",
                    value: "{locale}",
                    oninput: move |evt: FormEvent| {
                        theme.update(ThemeUpdate {
                            locale: Some(evt.value()),
                            ..Default::default()
                        });
                    },
                    option { value: "en", "English" }
                    option { value: "pt", "Português" }
                }

                span { class: "text-sm text-neutral-600", "{display_name}" }
                Button {
                    variant: ButtonVariant::Secondary,
                    onclick: on_logout,
                    "Log out"
                }
            }
        }

        main {
            class: "max-w-4xl mx-auto px-6 py-8",
            {children}
        }
    }
}
