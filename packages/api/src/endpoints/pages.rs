//! Page endpoints: public content reads plus admin CRUD.

use crate::client::ApiClient;
use crate::error::ApiError;
use crate::models::{CreatePage, Page, PageContent, UpdatePage};

impl ApiClient {
    /// Published content of a page by name or slug, with fields for `lang`.
    pub async fn get_page_content(
        &self,
        name_or_slug: &str,
        lang: &str,
    ) -> Result<PageContent, ApiError> {
        self.get(&format!("/content/pages/{name_or_slug}?lang={lang}"))
            .await
    }

    /// Public list of pages, optionally filtered by a search query.
    pub async fn get_pages_list(&self, query: Option<&str>) -> Result<Vec<Page>, ApiError> {
        match query {
            Some(q) => self.get(&format!("/content/pages?q={q}")).await,
            None => self.get("/content/pages").await,
        }
    }

    pub async fn list_pages(&self) -> Result<Vec<Page>, ApiError> {
        self.get("/admin/pages").await
    }

    pub async fn get_page_by_id(&self, id: &str) -> Result<Page, ApiError> {
        self.get(&format!("/admin/pages/{id}")).await
    }

    pub async fn create_page(&self, payload: &CreatePage) -> Result<Page, ApiError> {
        self.post("/admin/pages", payload).await
    }

    pub async fn update_page(&self, id: &str, payload: &UpdatePage) -> Result<Page, ApiError> {
        self.put(&format!("/admin/pages/{id}"), payload).await
    }

    pub async fn delete_page(&self, id: &str) -> Result<(), ApiError> {
        self.delete(&format!("/admin/pages/{id}")).await
    }
}
