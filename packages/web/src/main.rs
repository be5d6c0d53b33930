use dioxus::prelude::*;

use ui::{ApiProvider, AuthProvider, LoaderBar, LoaderProvider, ThemeProvider};
use views::{
    Login, OauthCallback, PageDetail, Pages, RegisterDetails, RegisterEmail,
    RegisterSetPassword, RegisterVerifyOtp, Tags,
};

mod views;

#[derive(Debug, Clone, Routable, PartialEq)]
#[rustfmt::skip]
enum Route {
    #[route("/")]
    Root {},
    #[route("/login")]
    Login {},
    #[route("/register")]
    RegisterEmail {},
    #[route("/register/verify-otp")]
    RegisterVerifyOtp {},
    #[route("/register/set-password")]
    RegisterSetPassword {},
    #[route("/register/details")]
    RegisterDetails {},
    #[route("/pages")]
    Pages {},
    #[route("/pages/:id")]
    PageDetail { id: String },
    #[route("/tags")]
    Tags {},
    #[route("/auth/callback")]
    OauthCallback {},
}

const FAVICON: Asset = asset!("/assets/favicon.ico");
const MAIN_CSS: Asset = asset!("/assets/main.css");

const API_BASE_URL: &str = match option_env!("PAGECRAFT_API_URL") {
    Some(url) => url,
    None => "http://localhost:8080/api/v1",
};

fn main() {
    dioxus::launch(App);
}

#[component]
fn App() -> Element {
    rsx! {
        // Global app resources
        document::Link { rel: "icon", href: FAVICON }
        document::Link { rel: "stylesheet", href: MAIN_CSS }

        ThemeProvider {
            ApiProvider {
                base_url: API_BASE_URL.to_string(),
                AuthProvider {
                    LoaderProvider {
                        LoaderBar {}
                        Router::<Route> {}
                    }
                }
            }
        }
    }
}

/// Redirect `/` to the pages console.
#[component]
fn Root() -> Element {
    let nav = use_navigator();
    nav.replace(Route::Pages {});
    rsx! {}
}
