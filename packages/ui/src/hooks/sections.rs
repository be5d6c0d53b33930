//! Section queries and mutations, keyed under their page.

use api::{ApiClient, ApiError, CreateSection, Section, UpdateSection};
use dioxus::prelude::*;
use store::{QueryCache, QueryKey};

use super::query::use_query;

pub fn use_sections(page_id: String) -> Resource<Result<Vec<Section>, String>> {
    let key = QueryKey::new(["sections", page_id.as_str()]);
    use_query(key, move |api| {
        let page_id = page_id.clone();
        async move { api.list_sections(&page_id).await }
    })
}

pub fn use_section(id: String) -> Resource<Result<Section, String>> {
    let key = QueryKey::new(["sections", "byId", id.as_str()]);
    use_query(key, move |api| {
        let id = id.clone();
        async move { api.get_section_by_id(&id).await }
    })
}

pub async fn create_section(
    api: &ApiClient,
    cache: &QueryCache,
    payload: &CreateSection,
) -> Result<Section, ApiError> {
    let section = api.create_section(payload).await?;
    cache.invalidate(&["sections"]);
    Ok(section)
}

pub async fn update_section(
    api: &ApiClient,
    cache: &QueryCache,
    id: &str,
    payload: &UpdateSection,
) -> Result<Section, ApiError> {
    let section = api.update_section(id, payload).await?;
    cache.invalidate(&["sections"]);
    cache.invalidate(&["content"]);
    Ok(section)
}

pub async fn delete_section(
    api: &ApiClient,
    cache: &QueryCache,
    id: &str,
) -> Result<(), ApiError> {
    api.delete_section(id).await?;
    cache.invalidate(&["sections"]);
    cache.invalidate(&["content"]);
    Ok(())
}
