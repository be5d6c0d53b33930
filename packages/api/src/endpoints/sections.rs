//! Section endpoints: admin CRUD scoped to a page.

use crate::client::ApiClient;
use crate::error::ApiError;
use crate::models::{CreateSection, Section, UpdateSection};

impl ApiClient {
    pub async fn list_sections(&self, page_id: &str) -> Result<Vec<Section>, ApiError> {
        self.get(&format!("/admin/pages/{page_id}/sections")).await
    }

    pub async fn get_section_by_id(&self, id: &str) -> Result<Section, ApiError> {
        self.get(&format!("/admin/sections/{id}")).await
    }

    pub async fn create_section(&self, payload: &CreateSection) -> Result<Section, ApiError> {
        self.post("/admin/sections", payload).await
    }

    pub async fn update_section(
        &self,
        id: &str,
        payload: &UpdateSection,
    ) -> Result<Section, ApiError> {
        self.put(&format!("/admin/sections/{id}"), payload).await
    }

    pub async fn delete_section(&self, id: &str) -> Result<(), ApiError> {
        self.delete(&format!("/admin/sections/{id}")).await
    }
}
