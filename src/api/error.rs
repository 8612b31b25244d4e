// ABOUTME: API error types with SNAFU pattern.
// ABOUTME: Maps transport failures and Portainer/Docker status codes for programmatic handling.

use snafu::Snafu;

/// Unified error for Portainer API calls.
#[derive(Debug, Snafu)]
#[snafu(visibility(pub))]
pub enum ApiError {
    #[snafu(display("failed to build HTTP client: {source}"))]
    Client { source: reqwest::Error },

    #[snafu(display("request to {url} failed: {source}"))]
    Transport { url: String, source: reqwest::Error },

    #[snafu(display("authentication rejected ({status}): check the API key for {url}"))]
    Unauthorized { url: String, status: u16 },

    #[snafu(display("{resource} not found: {message}"))]
    NotFound {
        resource: &'static str,
        message: String,
    },

    #[snafu(display("conflict: {message}"))]
    Conflict { message: String },

    #[snafu(display("not modified: {message}"))]
    NotModified { message: String },

    #[snafu(display("API returned {status}: {message}"))]
    Status { status: u16, message: String },

    #[snafu(display("invalid response body: {source}"))]
    Decode { source: reqwest::Error },
}

/// Error kind for programmatic handling.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ApiErrorKind {
    /// Network-level failure (DNS, TLS, timeout, connect).
    Transport,
    /// 401/403 from Portainer.
    Unauthorized,
    /// 404 for the addressed resource.
    NotFound,
    /// 409, e.g. container name already in use.
    Conflict,
    /// 304, e.g. starting an already-started container.
    NotModified,
    /// Any other protocol-level failure.
    Protocol,
}

impl ApiError {
    /// Returns the error kind for programmatic handling.
    pub fn kind(&self) -> ApiErrorKind {
        match self {
            ApiError::Client { .. } | ApiError::Transport { .. } => ApiErrorKind::Transport,
            ApiError::Unauthorized { .. } => ApiErrorKind::Unauthorized,
            ApiError::NotFound { .. } => ApiErrorKind::NotFound,
            ApiError::Conflict { .. } => ApiErrorKind::Conflict,
            ApiError::NotModified { .. } => ApiErrorKind::NotModified,
            ApiError::Status { .. } | ApiError::Decode { .. } => ApiErrorKind::Protocol,
        }
    }
}
