//! Data-fetch hooks, one module per REST resource.

pub mod otp;
pub mod pages;
pub mod query;
pub mod sections;
pub mod tags;

pub use query::{use_api, use_query, use_query_cache, ApiProvider};
pub use tags::use_tags;
