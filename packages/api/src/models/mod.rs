//! Wire models shared between the REST client and the UI.

mod page;
mod section;
mod user;

pub use page::{CreatePage, Page, PageContent, UpdatePage};
pub use section::{CreateSection, LocalizedText, Section, SectionFields, UpdateSection};
pub use user::{Profile, User};
