// ABOUTME: Thin typed client for the Portainer API and the proxied Docker Engine API.
// ABOUTME: Explicit context object; no global connection state.

mod client;
mod error;
mod types;

pub use client::ApiClient;
pub use error::{ApiError, ApiErrorKind};
pub use types::{ContainerSummary, Endpoint, LogQuery};
