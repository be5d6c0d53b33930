//! # Query cache: stale-while-revalidate request caching
//!
//! [`QueryCache`] is the shared cache behind every data-fetch hook in the
//! console. Server responses are stored under a [`QueryKey`] (resource name
//! plus identifying parameters, e.g. `["sections", "12"]`) as type-erased
//! JSON, so one cache serves every resource type.
//!
//! ## Policy
//!
//! | Window | Duration | Effect |
//! |--------|----------|--------|
//! | Staleness | 5 minutes | Within the window a hit is served without any fetch. |
//! | Retention | 30 minutes | Past the window the entry is evicted on access and the read is a miss. |
//!
//! A stale hit still serves the retained value: [`QueryCache::fetch`]
//! never blocks a read that has a value to give. The caller checks
//! [`QueryCache::needs_refresh`] afterwards and drives the revalidation
//! through [`QueryCache::refresh`] from wherever it can spawn a task; if
//! the refresh (plus its single automatic retry) fails, the retained
//! value stays in place. Mutations never go through the cache; their
//! success handlers call [`QueryCache::invalidate`] with the owning
//! resource prefix, which marks every matching entry stale so the next
//! read revalidates.
//!
//! ## Coalescing
//!
//! At most one fetch is in flight per key. The in-flight marker is a flag
//! on the entry, not a lock: a caller that finds the flag set is served
//! the cached value when one exists, and otherwise parks on a oneshot
//! channel until the owning fetch lands.

use std::collections::HashMap;
use std::future::Future;
use std::sync::{Arc, Mutex};

use futures::channel::oneshot;
use serde::de::DeserializeOwned;
use serde::Serialize;
use thiserror::Error;

/// Identifier under which a cached server response is stored and
/// invalidated. Segmented so that `invalidate(&["pages"])` covers
/// `["pages"]`, `["pages", "7"]`, and so on.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct QueryKey(Vec<String>);

impl QueryKey {
    pub fn new<I, S>(segments: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self(segments.into_iter().map(Into::into).collect())
    }

    pub fn segments(&self) -> &[String] {
        &self.0
    }

    fn joined(&self) -> String {
        self.0.join("/")
    }

    fn starts_with(&self, prefix: &[&str]) -> bool {
        self.0.len() >= prefix.len()
            && self.0.iter().zip(prefix).all(|(seg, pre)| seg == pre)
    }
}

impl std::fmt::Display for QueryKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.joined())
    }
}

#[derive(Debug, Error)]
pub enum FetchError {
    /// The fetch function failed and no retained value could stand in.
    #[error("{0}")]
    Fetch(String),
    /// A cached value no longer deserializes into the requested type.
    #[error("cached value is corrupt: {0}")]
    Decode(#[from] serde_json::Error),
}

#[derive(Debug)]
struct Entry {
    value: Option<serde_json::Value>,
    key: QueryKey,
    updated_at: u64,
    stale: bool,
    fetching: bool,
    /// Callers parked on a cold key while another caller owns the fetch.
    waiters: Vec<oneshot::Sender<Result<serde_json::Value, String>>>,
}

impl Entry {
    fn in_flight(key: &QueryKey, now: u64) -> Self {
        Self {
            value: None,
            key: key.clone(),
            updated_at: now,
            stale: true,
            fetching: true,
            waiters: Vec::new(),
        }
    }
}

/// How a read resolves once the entry table has been consulted.
enum Plan {
    /// Serve this cached value, no request.
    Hit(serde_json::Value),
    /// Another caller owns the fetch and there is nothing cached yet;
    /// park until its result lands.
    Wait(oneshot::Receiver<Result<serde_json::Value, String>>),
    /// This caller owns the fetch.
    Fetch,
}

/// Shared stale-while-revalidate cache. Cheap to clone.
#[derive(Clone, Default)]
pub struct QueryCache {
    entries: Arc<Mutex<HashMap<String, Entry>>>,
    windows: Windows,
}

#[derive(Clone, Copy, Debug)]
struct Windows {
    stale_after: u64,
    retain_for: u64,
}

impl Default for Windows {
    fn default() -> Self {
        Self {
            stale_after: 5 * 60 * 1000,
            retain_for: 30 * 60 * 1000,
        }
    }
}

impl QueryCache {
    pub fn new() -> Self {
        Self::default()
    }

    /// Read through the cache. Any retained value within the retention
    /// window is served as-is, stale or not; `fetcher` only runs on a
    /// miss (at most twice, one automatic retry). After a stale hit the
    /// caller revalidates via [`Self::refresh`].
    pub async fn fetch<T, E, F, Fut>(&self, key: &QueryKey, fetcher: F) -> Result<T, FetchError>
    where
        T: Serialize + DeserializeOwned,
        E: std::fmt::Display,
        F: Fn() -> Fut,
        Fut: Future<Output = Result<T, E>>,
    {
        self.fetch_at(now_ms(), key, fetcher).await
    }

    /// Revalidate `key` now, regardless of freshness. On failure the
    /// retained value is served and kept. Coalesces with any in-flight
    /// fetch for the key.
    pub async fn refresh<T, E, F, Fut>(&self, key: &QueryKey, fetcher: F) -> Result<T, FetchError>
    where
        T: Serialize + DeserializeOwned,
        E: std::fmt::Display,
        F: Fn() -> Fut,
        Fut: Future<Output = Result<T, E>>,
    {
        self.refresh_at(now_ms(), key, fetcher).await
    }

    /// Whether a read of `key` just served a stale value that still needs
    /// revalidating (and nobody is already fetching it).
    pub fn needs_refresh(&self, key: &QueryKey) -> bool {
        self.needs_refresh_at(now_ms(), key)
    }

    async fn fetch_at<T, E, F, Fut>(
        &self,
        now: u64,
        key: &QueryKey,
        fetcher: F,
    ) -> Result<T, FetchError>
    where
        T: Serialize + DeserializeOwned,
        E: std::fmt::Display,
        F: Fn() -> Fut,
        Fut: Future<Output = Result<T, E>>,
    {
        self.run(now, key, fetcher, false).await
    }

    async fn refresh_at<T, E, F, Fut>(
        &self,
        now: u64,
        key: &QueryKey,
        fetcher: F,
    ) -> Result<T, FetchError>
    where
        T: Serialize + DeserializeOwned,
        E: std::fmt::Display,
        F: Fn() -> Fut,
        Fut: Future<Output = Result<T, E>>,
    {
        self.run(now, key, fetcher, true).await
    }

    fn needs_refresh_at(&self, now: u64, key: &QueryKey) -> bool {
        let entries = self.entries.lock().unwrap();
        let Some(entry) = entries.get(&key.joined()) else {
            return false;
        };
        let age = now.saturating_sub(entry.updated_at);
        entry.value.is_some()
            && !entry.fetching
            && age <= self.windows.retain_for
            && (entry.stale || age > self.windows.stale_after)
    }

    async fn run<T, E, F, Fut>(
        &self,
        now: u64,
        key: &QueryKey,
        fetcher: F,
        revalidate: bool,
    ) -> Result<T, FetchError>
    where
        T: Serialize + DeserializeOwned,
        E: std::fmt::Display,
        F: Fn() -> Fut,
        Fut: Future<Output = Result<T, E>>,
    {
        let plan = self.plan(now, key, revalidate);

        match plan {
            Plan::Hit(value) => Ok(serde_json::from_value(value)?),
            Plan::Wait(receiver) => match receiver.await {
                Ok(Ok(value)) => Ok(serde_json::from_value(value)?),
                Ok(Err(message)) => Err(FetchError::Fetch(message)),
                Err(_) => Err(FetchError::Fetch("query was canceled".to_string())),
            },
            Plan::Fetch => self.run_fetch(now, key, fetcher).await,
        }
    }

    fn plan(&self, now: u64, key: &QueryKey, revalidate: bool) -> Plan {
        let mut entries = self.entries.lock().unwrap();
        let id = key.joined();

        if let Some(entry) = entries.get_mut(&id) {
            let age = now.saturating_sub(entry.updated_at);
            if age > self.windows.retain_for && !entry.fetching {
                entries.remove(&id);
            } else if entry.fetching {
                if let Some(value) = &entry.value {
                    // Coalesced: another caller owns the refetch.
                    return Plan::Hit(value.clone());
                }
                let (sender, receiver) = oneshot::channel();
                entry.waiters.push(sender);
                return Plan::Wait(receiver);
            } else if let Some(value) = &entry.value {
                let fresh = !entry.stale && age <= self.windows.stale_after;
                if fresh || !revalidate {
                    // A stale hit serves the retained value; the caller
                    // revalidates separately.
                    return Plan::Hit(value.clone());
                }
                entry.fetching = true;
                return Plan::Fetch;
            } else {
                entry.fetching = true;
                return Plan::Fetch;
            }
        }

        entries.insert(id, Entry::in_flight(key, now));
        Plan::Fetch
    }

    /// Owner path: call the fetcher (with one retry), store the result,
    /// and wake anyone parked on this key.
    async fn run_fetch<T, E, F, Fut>(
        &self,
        now: u64,
        key: &QueryKey,
        fetcher: F,
    ) -> Result<T, FetchError>
    where
        T: Serialize + DeserializeOwned,
        E: std::fmt::Display,
        F: Fn() -> Fut,
        Fut: Future<Output = Result<T, E>>,
    {
        let result = match fetcher().await {
            Ok(value) => Ok(value),
            Err(first) => {
                tracing::debug!(key = %key, error = %first, "query failed, retrying once");
                fetcher().await
            }
        };

        let mut entries = self.entries.lock().unwrap();
        let id = key.joined();
        let waiters = entries
            .get_mut(&id)
            .map(|entry| std::mem::take(&mut entry.waiters))
            .unwrap_or_default();

        match result {
            Ok(value) => {
                let json = match serde_json::to_value(&value) {
                    Ok(json) => json,
                    Err(error) => {
                        if let Some(entry) = entries.get_mut(&id) {
                            entry.fetching = false;
                        }
                        return Err(error.into());
                    }
                };
                entries.insert(
                    id,
                    Entry {
                        value: Some(json.clone()),
                        key: key.clone(),
                        updated_at: now,
                        stale: false,
                        fetching: false,
                        waiters: Vec::new(),
                    },
                );
                for waiter in waiters {
                    let _ = waiter.send(Ok(json.clone()));
                }
                Ok(value)
            }
            Err(error) => {
                if let Some(entry) = entries.get_mut(&id) {
                    entry.fetching = false;
                }
                match entries.get(&id).and_then(|e| e.value.clone()) {
                    Some(retained_value) => {
                        tracing::warn!(key = %key, error = %error, "refetch failed, serving retained value");
                        for waiter in waiters {
                            let _ = waiter.send(Ok(retained_value.clone()));
                        }
                        Ok(serde_json::from_value(retained_value)?)
                    }
                    None => {
                        let message = error.to_string();
                        for waiter in waiters {
                            let _ = waiter.send(Err(message.clone()));
                        }
                        Err(FetchError::Fetch(message))
                    }
                }
            }
        }
    }

    /// Mark every entry under `prefix` stale so the next read revalidates.
    pub fn invalidate(&self, prefix: &[&str]) {
        let mut entries = self.entries.lock().unwrap();
        for entry in entries.values_mut() {
            if entry.key.starts_with(prefix) {
                entry.stale = true;
            }
        }
    }

    /// Drop every cached entry (used on logout).
    pub fn clear(&self) {
        self.entries.lock().unwrap().clear();
    }
}

fn now_ms() -> u64 {
    #[cfg(target_arch = "wasm32")]
    {
        js_sys::Date::now() as u64
    }
    #[cfg(not(target_arch = "wasm32"))]
    {
        std::time::SystemTime::now()
            .duration_since(std::time::UNIX_EPOCH)
            .map(|d| d.as_millis() as u64)
            .unwrap_or(0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicUsize, Ordering};

    struct Counter(AtomicUsize);

    impl Counter {
        fn new() -> Self {
            Self(AtomicUsize::new(0))
        }

        fn calls(&self) -> usize {
            self.0.load(Ordering::SeqCst)
        }

        async fn fetch_ok(&self) -> Result<String, String> {
            let n = self.0.fetch_add(1, Ordering::SeqCst) + 1;
            Ok(format!("value-{n}"))
        }

        /// Yields once mid-fetch so a concurrent caller gets polled while
        /// this fetch is in flight.
        async fn fetch_ok_slow(&self) -> Result<String, String> {
            let n = self.0.fetch_add(1, Ordering::SeqCst) + 1;
            tokio::task::yield_now().await;
            Ok(format!("value-{n}"))
        }

        async fn fetch_err(&self) -> Result<String, String> {
            self.0.fetch_add(1, Ordering::SeqCst);
            Err("boom".to_string())
        }
    }

    const MIN: u64 = 60 * 1000;

    #[tokio::test]
    async fn test_fresh_hit_skips_fetch() {
        let cache = QueryCache::new();
        let key = QueryKey::new(["pages"]);
        let counter = Counter::new();

        let first: String = cache
            .fetch_at(0, &key, || counter.fetch_ok())
            .await
            .unwrap();
        assert_eq!(first, "value-1");

        // Within the 5 minute window: served from cache, no fetch.
        let second: String = cache
            .fetch_at(4 * MIN, &key, || counter.fetch_ok())
            .await
            .unwrap();
        assert_eq!(second, "value-1");
        assert_eq!(counter.calls(), 1);
    }

    #[tokio::test]
    async fn test_stale_hit_serves_retained_value_without_fetching() {
        let cache = QueryCache::new();
        let key = QueryKey::new(["pages"]);
        let counter = Counter::new();

        let _: String = cache
            .fetch_at(0, &key, || counter.fetch_ok())
            .await
            .unwrap();

        // Past the staleness window the read still serves the retained
        // value and does not block on the network.
        let served: String = cache
            .fetch_at(6 * MIN, &key, || counter.fetch_ok())
            .await
            .unwrap();
        assert_eq!(served, "value-1");
        assert_eq!(counter.calls(), 1);
        assert!(cache.needs_refresh_at(6 * MIN, &key));
    }

    #[tokio::test]
    async fn test_refresh_updates_stale_entry() {
        let cache = QueryCache::new();
        let key = QueryKey::new(["pages"]);
        let counter = Counter::new();

        let _: String = cache
            .fetch_at(0, &key, || counter.fetch_ok())
            .await
            .unwrap();

        let refreshed: String = cache
            .refresh_at(6 * MIN, &key, || counter.fetch_ok())
            .await
            .unwrap();
        assert_eq!(refreshed, "value-2");
        assert_eq!(counter.calls(), 2);

        // The entry is fresh again: reads hit the cache.
        let read: String = cache
            .fetch_at(6 * MIN + 1, &key, || counter.fetch_ok())
            .await
            .unwrap();
        assert_eq!(read, "value-2");
        assert_eq!(counter.calls(), 2);
        assert!(!cache.needs_refresh_at(6 * MIN + 1, &key));
    }

    #[tokio::test]
    async fn test_retention_evicts() {
        let cache = QueryCache::new();
        let key = QueryKey::new(["pages"]);
        let counter = Counter::new();

        let _: String = cache
            .fetch_at(0, &key, || counter.fetch_ok())
            .await
            .unwrap();

        // Past the 30 minute retention window the entry is gone, so a
        // failing fetch has nothing retained to fall back on.
        let result: Result<String, _> = cache
            .fetch_at(31 * MIN, &key, || counter.fetch_err())
            .await;
        assert!(result.is_err());
    }

    #[tokio::test]
    async fn test_single_retry_on_failure() {
        let cache = QueryCache::new();
        let key = QueryKey::new(["sections", "7"]);
        let counter = Counter::new();

        let result: Result<String, _> = cache.fetch_at(0, &key, || counter.fetch_err()).await;
        assert!(result.is_err());
        // Initial attempt plus exactly one retry.
        assert_eq!(counter.calls(), 2);
    }

    #[tokio::test]
    async fn test_failed_refresh_serves_retained_value() {
        let cache = QueryCache::new();
        let key = QueryKey::new(["pages"]);
        let counter = Counter::new();

        let _: String = cache
            .fetch_at(0, &key, || counter.fetch_ok())
            .await
            .unwrap();

        let served: String = cache
            .refresh_at(6 * MIN, &key, || counter.fetch_err())
            .await
            .unwrap();
        assert_eq!(served, "value-1");
        // Initial fill plus the failed refresh and its retry.
        assert_eq!(counter.calls(), 3);
    }

    #[tokio::test]
    async fn test_invalidate_prefix() {
        let cache = QueryCache::new();
        let pages = QueryKey::new(["pages"]);
        let page7 = QueryKey::new(["pages", "7"]);
        let sections = QueryKey::new(["sections"]);
        let counter = Counter::new();

        let _: String = cache.fetch_at(0, &pages, || counter.fetch_ok()).await.unwrap();
        let _: String = cache.fetch_at(0, &page7, || counter.fetch_ok()).await.unwrap();
        let _: String = cache
            .fetch_at(0, &sections, || counter.fetch_ok())
            .await
            .unwrap();
        assert_eq!(counter.calls(), 3);

        cache.invalidate(&["pages"]);

        // Both pages keys now need revalidating, sections is still fresh.
        assert!(cache.needs_refresh_at(1, &pages));
        assert!(cache.needs_refresh_at(1, &page7));
        assert!(!cache.needs_refresh_at(1, &sections));

        let _: String = cache.refresh_at(1, &pages, || counter.fetch_ok()).await.unwrap();
        let _: String = cache.refresh_at(1, &page7, || counter.fetch_ok()).await.unwrap();
        let _: String = cache
            .fetch_at(1, &sections, || counter.fetch_ok())
            .await
            .unwrap();
        assert_eq!(counter.calls(), 5);
    }

    #[tokio::test]
    async fn test_coalesced_caller_served_cached_value() {
        let cache = QueryCache::new();
        let key = QueryKey::new(["pages"]);
        let counter = Counter::new();

        let _: String = cache
            .fetch_at(0, &key, || counter.fetch_ok())
            .await
            .unwrap();

        // Simulate an in-flight refetch owned by another caller.
        cache
            .entries
            .lock()
            .unwrap()
            .get_mut("pages")
            .unwrap()
            .fetching = true;

        let served: String = cache
            .fetch_at(6 * MIN, &key, || counter.fetch_ok())
            .await
            .unwrap();
        assert_eq!(served, "value-1");
        assert_eq!(counter.calls(), 1);
    }

    #[tokio::test]
    async fn test_cold_key_concurrent_callers_share_one_fetch() {
        let cache = QueryCache::new();
        let key = QueryKey::new(["pages"]);
        let counter = Counter::new();

        let first = cache.fetch_at(0, &key, || counter.fetch_ok_slow());
        let second = cache.fetch_at(0, &key, || counter.fetch_ok_slow());
        let (first, second) = tokio::join!(first, second);

        let first: String = first.unwrap();
        let second: String = second.unwrap();
        assert_eq!(first, "value-1");
        // The second caller parked and was handed the owner's result.
        assert_eq!(second, "value-1");
        assert_eq!(counter.calls(), 1);
    }

    #[tokio::test]
    async fn test_cold_key_waiters_see_the_owners_failure() {
        let cache = QueryCache::new();
        let key = QueryKey::new(["pages"]);
        let counter = Counter::new();

        async fn failing(counter: &Counter) -> Result<String, String> {
            counter.0.fetch_add(1, Ordering::SeqCst);
            tokio::task::yield_now().await;
            Err("boom".to_string())
        }

        let first = cache.fetch_at(0, &key, || failing(&counter));
        let second = cache.fetch_at(0, &key, || failing(&counter));
        let (first, second) = tokio::join!(first, second);

        assert!(matches!(first, Err(FetchError::Fetch(_))));
        assert!(matches!(second, Err(FetchError::Fetch(_))));
        // One owner, one retry; the waiter issued nothing.
        assert_eq!(counter.calls(), 2);
    }
}
