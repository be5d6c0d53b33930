//! Typed endpoint functions, one module per REST resource.

mod auth;
mod otp;
mod pages;
mod password;
mod sections;

pub use auth::CompleteRegistration;
pub use otp::{OtpIssued, OtpVerification};
pub use password::AuthSession;
