mod login;
pub use login::Login;

mod register_email;
pub use register_email::RegisterEmail;

mod register_verify_otp;
pub use register_verify_otp::RegisterVerifyOtp;

mod register_set_password;
pub use register_set_password::RegisterSetPassword;

mod register_details;
pub use register_details::RegisterDetails;

mod pages;
pub use pages::Pages;

mod page_detail;
pub use page_detail::PageDetail;

mod tags;
pub use tags::Tags;

mod oauth_callback;
pub use oauth_callback::OauthCallback;

mod shell;

use store::{RegistrationState, RegistrationStep};
use ui::{session_store, util};

/// Mount guard for a wizard step: redirect back to the first step whose
/// prerequisite is missing.
pub(crate) fn guard_step(step: RegistrationStep) -> bool {
    let state = RegistrationState::load(&session_store());
    match state.allows(step) {
        Ok(()) => true,
        Err(back) => {
            util::redirect_with_query(back.path());
            false
        }
    }
}
