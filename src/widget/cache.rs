// ABOUTME: Time-boxed memoization of widget fetches, serialized behind one mutex.
// ABOUTME: Fresh entries short-circuit the network; failures propagate and never poison the cache.

use async_trait::async_trait;
use std::collections::HashMap;
use std::time::{Duration, Instant};
use tokio::sync::Mutex;

use crate::api::{ApiClient, ApiError, ContainerSummary, Endpoint};
use crate::types::{ConnectionId, EndpointId};

use super::handoff::ConnectionInfo;

/// How long a fetched result stays fresh.
const DEFAULT_TTL: Duration = Duration::from_secs(60);

/// The upstream fetches the widget cache memoizes.
#[async_trait]
pub trait WidgetFetch: Send + Sync {
    async fn endpoints(&self, connection: &ConnectionInfo) -> Result<Vec<Endpoint>, ApiError>;

    async fn containers(
        &self,
        connection: &ConnectionInfo,
        endpoint: &EndpointId,
    ) -> Result<Vec<ContainerSummary>, ApiError>;
}

/// Production fetcher: builds a client per connection from the handoff data.
pub struct PortainerFetch {
    timeout: Duration,
}

impl PortainerFetch {
    pub fn new(timeout: Duration) -> Self {
        Self { timeout }
    }

    fn client(&self, connection: &ConnectionInfo) -> Result<ApiClient, ApiError> {
        ApiClient::new(&connection.base_url, &connection.api_key, self.timeout)
    }
}

#[async_trait]
impl WidgetFetch for PortainerFetch {
    async fn endpoints(&self, connection: &ConnectionInfo) -> Result<Vec<Endpoint>, ApiError> {
        self.client(connection)?.list_endpoints().await
    }

    async fn containers(
        &self,
        connection: &ConnectionInfo,
        endpoint: &EndpointId,
    ) -> Result<Vec<ContainerSummary>, ApiError> {
        self.client(connection)?.list_containers(endpoint).await
    }
}

struct CacheEntry<T> {
    value: T,
    fetched_at: Instant,
}

impl<T> CacheEntry<T> {
    fn new(value: T) -> Self {
        Self {
            value,
            fetched_at: Instant::now(),
        }
    }

    fn fresh_within(&self, ttl: Duration) -> bool {
        self.fetched_at.elapsed() < ttl
    }
}

#[derive(Default)]
struct CacheState {
    endpoints: HashMap<ConnectionId, CacheEntry<Vec<Endpoint>>>,
    containers: HashMap<(ConnectionId, EndpointId), CacheEntry<Vec<ContainerSummary>>>,
}

/// Memoizing fetch wrapper for widget refresh cycles.
///
/// Widget reloads race: a periodic timer, a user-initiated refresh, and a
/// system reload can all fire at once. One mutex serializes the whole
/// read-check-fetch-write sequence, so two concurrent misses on the same key
/// issue a single upstream request. The trade-off is that an in-flight fetch
/// blocks unrelated cache lookups; at widget scale (one connection, a
/// handful of keys) that is acceptable.
///
/// A failed fetch propagates its error and leaves the cache untouched;
/// stale entries are never served as a fallback.
pub struct WidgetCache<F> {
    fetch: F,
    ttl: Duration,
    state: Mutex<CacheState>,
}

impl<F: WidgetFetch> WidgetCache<F> {
    pub fn new(fetch: F) -> Self {
        Self::with_ttl(fetch, DEFAULT_TTL)
    }

    pub fn with_ttl(fetch: F, ttl: Duration) -> Self {
        Self {
            fetch,
            ttl,
            state: Mutex::new(CacheState::default()),
        }
    }

    /// Access the wrapped fetcher.
    pub fn fetch_ref(&self) -> &F {
        &self.fetch
    }

    /// Endpoints for a connection, memoized per connection ID.
    pub async fn endpoints(
        &self,
        connection: &ConnectionInfo,
    ) -> Result<Vec<Endpoint>, ApiError> {
        let mut state = self.state.lock().await;
        if let Some(entry) = state.endpoints.get(&connection.id)
            && entry.fresh_within(self.ttl)
        {
            tracing::debug!(connection = %connection.id, "endpoint cache hit");
            return Ok(entry.value.clone());
        }

        // Lock is held across the fetch: concurrent misses on this key wait
        // here instead of duplicating the request.
        let value = self.fetch.endpoints(connection).await?;
        state
            .endpoints
            .insert(connection.id.clone(), CacheEntry::new(value.clone()));
        Ok(value)
    }

    /// Containers for a connection and endpoint, memoized per composite key.
    pub async fn containers(
        &self,
        connection: &ConnectionInfo,
        endpoint: &EndpointId,
    ) -> Result<Vec<ContainerSummary>, ApiError> {
        let key = (connection.id.clone(), *endpoint);

        let mut state = self.state.lock().await;
        if let Some(entry) = state.containers.get(&key)
            && entry.fresh_within(self.ttl)
        {
            tracing::debug!(connection = %connection.id, %endpoint, "container cache hit");
            return Ok(entry.value.clone());
        }

        let value = self.fetch.containers(connection, endpoint).await?;
        state.containers.insert(key, CacheEntry::new(value.clone()));
        Ok(value)
    }

    /// Unconditionally empty both maps. Used on sign-out.
    pub async fn clear(&self) {
        let mut state = self.state.lock().await;
        *state = CacheState::default();
    }
}
