//! # API crate: typed REST client for the Pagecraft admin console
//!
//! The console talks to an external REST backend; this crate is the only
//! place that knows the wire contract. It exposes one typed async
//! function per operation, grouped by resource.
//!
//! ## Modules
//!
//! | Module | Purpose |
//! |--------|---------|
//! | [`client`] | [`ApiClient`]: HTTP core, bearer-token attachment, envelope decoding |
//! | [`envelope`] | Shared `{version, code, status, message, data, validationErrors}` wrapper |
//! | [`error`] | [`ApiError`] taxonomy and the generic fallback message |
//! | [`token`] | Process-wide access-token holder and JWT claims decoding |
//! | [`models`] | Wire models: users, pages, sections, localized fields |
//! | `endpoints` | Pages and sections CRUD, OTP, password, session calls |

pub mod client;
pub mod endpoints;
pub mod envelope;
pub mod error;
pub mod models;
pub mod token;

pub use client::ApiClient;
pub use endpoints::{AuthSession, CompleteRegistration, OtpIssued, OtpVerification};
pub use envelope::{Envelope, ValidationError};
pub use error::{ApiError, GENERIC_ERROR};
pub use models::{
    CreatePage, CreateSection, LocalizedText, Page, PageContent, Profile, Section, SectionFields,
    UpdatePage, UpdateSection, User,
};
pub use token::{access_token, clear_access_token, decode_claims, set_access_token, TokenClaims};
