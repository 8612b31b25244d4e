// ABOUTME: Integration tests for the widget refresh cache.
// ABOUTME: Freshness window, key isolation, failure propagation, and miss deduplication.

use std::collections::HashMap;
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::time::Duration;

use async_trait::async_trait;
use portside::api::{ApiError, ContainerSummary, Endpoint};
use portside::types::{ConnectionId, ContainerId, EndpointId};
use portside::widget::{ConnectionInfo, WidgetCache, WidgetFetch};

fn connection(id: &str) -> ConnectionInfo {
    ConnectionInfo {
        id: ConnectionId::new(id),
        base_url: format!("https://{id}.example"),
        api_key: "ptr_test".to_string(),
        endpoint_id: None,
    }
}

fn endpoint(id: i64) -> Endpoint {
    Endpoint {
        id: EndpointId(id),
        name: format!("env-{id}"),
        status: Some(1),
        url: None,
    }
}

fn container(name: &str) -> ContainerSummary {
    ContainerSummary {
        id: ContainerId::new(format!("{name}-id")),
        names: vec![format!("/{name}")],
        image: "nginx:latest".to_string(),
        state: "running".to_string(),
        status: "Up 2 minutes".to_string(),
        labels: HashMap::new(),
    }
}

#[derive(Default)]
struct MockFetch {
    endpoint_calls: AtomicUsize,
    container_calls: AtomicUsize,
    fail: AtomicBool,
    delay: Option<Duration>,
}

impl MockFetch {
    fn failing(&self, on: bool) {
        self.fail.store(on, Ordering::SeqCst);
    }

    async fn simulate_latency(&self) {
        if let Some(delay) = self.delay {
            tokio::time::sleep(delay).await;
        }
    }

    fn check_failure(&self) -> Result<(), ApiError> {
        if self.fail.load(Ordering::SeqCst) {
            return Err(ApiError::Status {
                status: 500,
                message: "injected failure".to_string(),
            });
        }
        Ok(())
    }
}

#[async_trait]
impl WidgetFetch for MockFetch {
    async fn endpoints(&self, _connection: &ConnectionInfo) -> Result<Vec<Endpoint>, ApiError> {
        self.endpoint_calls.fetch_add(1, Ordering::SeqCst);
        self.simulate_latency().await;
        self.check_failure()?;
        Ok(vec![endpoint(1), endpoint(2)])
    }

    async fn containers(
        &self,
        _connection: &ConnectionInfo,
        endpoint: &EndpointId,
    ) -> Result<Vec<ContainerSummary>, ApiError> {
        self.container_calls.fetch_add(1, Ordering::SeqCst);
        self.simulate_latency().await;
        self.check_failure()?;
        Ok(vec![container(&format!("c{endpoint}"))])
    }
}

#[tokio::test]
async fn fresh_entry_serves_without_refetching() {
    let cache = WidgetCache::new(MockFetch::default());
    let conn = connection("home");

    let first = cache.endpoints(&conn).await.unwrap();
    let second = cache.endpoints(&conn).await.unwrap();

    assert_eq!(first.len(), 2);
    assert_eq!(second.len(), 2);
    assert_eq!(cache_calls(&cache), 1);
}

#[tokio::test]
async fn expired_entry_triggers_a_second_fetch() {
    let cache = WidgetCache::with_ttl(MockFetch::default(), Duration::from_millis(40));
    let conn = connection("home");

    cache.endpoints(&conn).await.unwrap();
    cache.endpoints(&conn).await.unwrap();
    assert_eq!(cache_calls(&cache), 1);

    tokio::time::sleep(Duration::from_millis(80)).await;
    cache.endpoints(&conn).await.unwrap();
    assert_eq!(cache_calls(&cache), 2);
}

#[tokio::test]
async fn container_keys_are_isolated_per_endpoint() {
    let cache = WidgetCache::new(MockFetch::default());
    let conn = connection("home");

    let one = cache.containers(&conn, &EndpointId(1)).await.unwrap();
    let two = cache.containers(&conn, &EndpointId(2)).await.unwrap();
    assert_eq!(one[0].display_name(), "c1");
    assert_eq!(two[0].display_name(), "c2");

    // Both keys are now cached independently.
    let one_again = cache.containers(&conn, &EndpointId(1)).await.unwrap();
    assert_eq!(one_again[0].display_name(), "c1");
    assert_eq!(container_calls(&cache), 2);
}

#[tokio::test]
async fn connection_keys_are_isolated() {
    let cache = WidgetCache::new(MockFetch::default());

    cache.endpoints(&connection("home")).await.unwrap();
    cache.endpoints(&connection("work")).await.unwrap();
    assert_eq!(cache_calls(&cache), 2);
}

#[tokio::test]
async fn failed_fetch_propagates_and_does_not_populate() {
    let cache = WidgetCache::new(MockFetch::default());
    let conn = connection("home");

    cache.fetch_ref().failing(true);
    let err = cache.endpoints(&conn).await.unwrap_err();
    assert_eq!(err.kind(), portside::api::ApiErrorKind::Protocol);

    // The failure was not cached: the next call fetches again.
    cache.fetch_ref().failing(false);
    cache.endpoints(&conn).await.unwrap();
    assert_eq!(cache_calls(&cache), 2);
}

#[tokio::test]
async fn stale_entry_is_not_served_on_failure() {
    let cache = WidgetCache::with_ttl(MockFetch::default(), Duration::from_millis(40));
    let conn = connection("home");

    cache.endpoints(&conn).await.unwrap();
    tokio::time::sleep(Duration::from_millis(80)).await;

    cache.fetch_ref().failing(true);
    // Fail-fast: no stale fallback.
    assert!(cache.endpoints(&conn).await.is_err());
}

#[tokio::test]
async fn clear_forces_a_refetch() {
    let cache = WidgetCache::new(MockFetch::default());
    let conn = connection("home");

    cache.endpoints(&conn).await.unwrap();
    cache.containers(&conn, &EndpointId(1)).await.unwrap();
    cache.clear().await;

    cache.endpoints(&conn).await.unwrap();
    cache.containers(&conn, &EndpointId(1)).await.unwrap();
    assert_eq!(cache_calls(&cache), 2);
    assert_eq!(container_calls(&cache), 2);
}

#[tokio::test]
async fn concurrent_misses_issue_a_single_fetch() {
    let fetch = MockFetch {
        delay: Some(Duration::from_millis(50)),
        ..MockFetch::default()
    };
    let cache = Arc::new(WidgetCache::new(fetch));
    let conn = connection("home");

    let a = tokio::spawn({
        let cache = Arc::clone(&cache);
        let conn = conn.clone();
        async move { cache.endpoints(&conn).await }
    });
    let b = tokio::spawn({
        let cache = Arc::clone(&cache);
        let conn = conn.clone();
        async move { cache.endpoints(&conn).await }
    });

    a.await.unwrap().unwrap();
    b.await.unwrap().unwrap();
    // The second task waited on the mutex and hit the cache.
    assert_eq!(cache_calls(&cache), 1);
}

fn cache_calls(cache: &WidgetCache<MockFetch>) -> usize {
    cache.fetch_ref().endpoint_calls.load(Ordering::SeqCst)
}

fn container_calls(cache: &WidgetCache<MockFetch>) -> usize {
    cache.fetch_ref().container_calls.load(Ordering::SeqCst)
}
