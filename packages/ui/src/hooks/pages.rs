//! Page queries and mutations.

use api::{ApiClient, ApiError, CreatePage, Page, PageContent, UpdatePage};
use dioxus::prelude::*;
use store::{QueryCache, QueryKey};

use super::query::use_query;

pub fn use_pages_list() -> Resource<Result<Vec<Page>, String>> {
    use_query(QueryKey::new(["pages"]), |api| async move {
        api.list_pages().await
    })
}

pub fn use_page(id: String) -> Resource<Result<Page, String>> {
    let key = QueryKey::new(["pages", id.as_str()]);
    use_query(key, move |api| {
        let id = id.clone();
        async move { api.get_page_by_id(&id).await }
    })
}

/// Published content of a page, localized.
pub fn use_page_content(name_or_slug: String, lang: String) -> Resource<Result<PageContent, String>> {
    let key = QueryKey::new(["content", name_or_slug.as_str(), lang.as_str()]);
    use_query(key, move |api| {
        let name_or_slug = name_or_slug.clone();
        let lang = lang.clone();
        async move { api.get_page_content(&name_or_slug, &lang).await }
    })
}

pub async fn create_page(
    api: &ApiClient,
    cache: &QueryCache,
    payload: &CreatePage,
) -> Result<Page, ApiError> {
    let page = api.create_page(payload).await?;
    cache.invalidate(&["pages"]);
    Ok(page)
}

pub async fn update_page(
    api: &ApiClient,
    cache: &QueryCache,
    id: &str,
    payload: &UpdatePage,
) -> Result<Page, ApiError> {
    let page = api.update_page(id, payload).await?;
    cache.invalidate(&["pages"]);
    Ok(page)
}

pub async fn delete_page(api: &ApiClient, cache: &QueryCache, id: &str) -> Result<(), ApiError> {
    api.delete_page(id).await?;
    cache.invalidate(&["pages"]);
    cache.invalidate(&["sections"]);
    Ok(())
}
