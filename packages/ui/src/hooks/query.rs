//! Generic query hook over the shared [`QueryCache`].
//!
//! Each resource hook pairs a [`QueryKey`] with a fetch function; the
//! cache coalesces in-flight requests per key and applies the
//! stale-while-revalidate windows. A stale hit resolves immediately with
//! the retained value and the revalidation is spawned here, off the
//! render path. Mutation helpers invalidate the owning resource prefix
//! on success so dependent queries refetch.

use std::future::Future;
use std::sync::Arc;

use api::{ApiClient, ApiError};
use dioxus::prelude::*;
use serde::de::DeserializeOwned;
use serde::Serialize;
use store::{QueryCache, QueryKey};

use crate::loader::Loader;

/// Provides the API client and the query cache to the whole tree.
#[component]
pub fn ApiProvider(base_url: String, children: Element) -> Element {
    let url = base_url.clone();
    use_context_provider(move || Arc::new(ApiClient::new(url.clone())));
    use_context_provider(QueryCache::new);

    rsx! {
        {children}
    }
}

/// Get the shared API client.
pub fn use_api() -> Arc<ApiClient> {
    use_context::<Arc<ApiClient>>()
}

/// Get the shared query cache.
pub fn use_query_cache() -> QueryCache {
    use_context::<QueryCache>()
}

/// Run `fetcher` through the cache under `key`. Errors are mapped to
/// their user-facing message. Drives the top-bar loader while the fetch
/// is outstanding, and kicks off a background refresh after a stale hit.
pub fn use_query<T, F, Fut>(key: QueryKey, fetcher: F) -> Resource<Result<T, String>>
where
    T: Serialize + DeserializeOwned + Clone + 'static,
    F: Fn(Arc<ApiClient>) -> Fut + Clone + 'static,
    Fut: Future<Output = Result<T, ApiError>> + 'static,
{
    let api = use_api();
    let cache = use_query_cache();
    // The loader is optional so the hook also works under a bare test
    // tree without a LoaderProvider.
    let loader = use_hook(try_consume_context::<Loader>);

    use_resource(move || {
        let api = api.clone();
        let cache = cache.clone();
        let fetcher = fetcher.clone();
        let key = key.clone();
        async move {
            if let Some(mut loader) = loader {
                loader.start();
            }
            let result = cache
                .fetch(&key, || {
                    let api = api.clone();
                    let fetcher = fetcher.clone();
                    async move { fetcher(api).await.map_err(|e| e.user_message()) }
                })
                .await;
            if let Some(mut loader) = loader {
                loader.finish();
            }

            if cache.needs_refresh(&key) {
                spawn_refresh::<T, _, _>(api, cache, key.clone(), fetcher);
            }

            result.map_err(|e| e.to_string())
        }
    })
}

/// Revalidate `key` in the background; the retained value already
/// answered the read, so failures are only logged.
fn spawn_refresh<T, F, Fut>(api: Arc<ApiClient>, cache: QueryCache, key: QueryKey, fetcher: F)
where
    T: Serialize + DeserializeOwned + 'static,
    F: Fn(Arc<ApiClient>) -> Fut + Clone + 'static,
    Fut: Future<Output = Result<T, ApiError>> + 'static,
{
    spawn(async move {
        let refreshed: Result<T, _> = cache
            .refresh(&key, || {
                let api = api.clone();
                let fetcher = fetcher.clone();
                async move { fetcher(api).await.map_err(|e| e.user_message()) }
            })
            .await;
        if let Err(error) = refreshed {
            tracing::warn!(key = %key, error = %error, "background revalidation failed");
        }
    });
}
