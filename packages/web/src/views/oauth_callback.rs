//! Landing route for the Google flow. The backend redirects here with
//! the issued token in the query string.

use dioxus::prelude::*;
use store::{RegistrationState, RegistrationStep};
use ui::{
    session_store, use_auth,
    util::{self, query_param},
};

#[component]
pub fn OauthCallback() -> Element {
    let auth = use_auth();

    use_hook(move || {
        let Some(token) = query_param("token") else {
            tracing::error!("oauth callback reached without a token");
            util::redirect("/login");
            return;
        };

        api::set_access_token(&token);
        let Some(claims) = api::decode_claims(&token) else {
            tracing::error!("oauth callback token is not decodable");
            api::clear_access_token();
            util::redirect("/login");
            return;
        };

        let mut auth = auth.clone();
        let primed = ui::AuthState::from_claims(claims.clone());
        auth.set_auth_state(ui::AuthUpdate {
            is_authenticated: Some(true),
            user: Some(primed.user),
            is_loading: Some(false),
            error: Some(None),
        });

        // A Google sign-up arrives verified and without a local password;
        // it continues the wizard at the details step.
        if query_param("source").as_deref() == Some("register") {
            let state = RegistrationState {
                email: claims.email,
                otp_verified: true,
                password_set: false,
                google: true,
            };
            state.save(&session_store());
            util::redirect(RegistrationStep::Details.path());
        } else {
            util::redirect("/pages");
        }
    });

    rsx! {
        p { class: "text-neutral-500 p-8", "Signing you in..." }
    }
}
