//! Shared form components.

mod alert;
mod button;
mod input;
mod otp_input;
mod password_meter;

pub use alert::{Alert, AlertKind};
pub use button::{Button, ButtonVariant};
pub use input::Input;
pub use otp_input::OtpInput;
pub use password_meter::PasswordMeter;
