// ABOUTME: Response shapes for the Portainer and proxied Docker APIs.
// ABOUTME: Endpoint listings, container summaries, and log request parameters.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

use crate::types::{ContainerId, EndpointId};

/// One Portainer endpoint (a managed Docker environment).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Endpoint {
    #[serde(rename = "Id")]
    pub id: EndpointId,
    #[serde(rename = "Name")]
    pub name: String,
    /// 1 = up, 2 = down, per the Portainer API.
    #[serde(rename = "Status", default)]
    pub status: Option<i64>,
    #[serde(rename = "URL", default)]
    pub url: Option<String>,
}

impl Endpoint {
    pub fn status_label(&self) -> &'static str {
        match self.status {
            Some(1) => "up",
            Some(2) => "down",
            _ => "unknown",
        }
    }
}

/// One row of `GET /containers/json`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ContainerSummary {
    #[serde(rename = "Id")]
    pub id: ContainerId,
    #[serde(rename = "Names", default)]
    pub names: Vec<String>,
    #[serde(rename = "Image", default)]
    pub image: String,
    #[serde(rename = "State", default)]
    pub state: String,
    #[serde(rename = "Status", default)]
    pub status: String,
    #[serde(rename = "Labels", default)]
    pub labels: HashMap<String, String>,
}

impl ContainerSummary {
    /// First name without the Docker API's leading slash, falling back to
    /// the short ID for nameless containers.
    pub fn display_name(&self) -> &str {
        self.names
            .first()
            .map(|n| n.trim_start_matches('/'))
            .filter(|n| !n.is_empty())
            .unwrap_or_else(|| self.id.short())
    }
}

/// Request parameters for a log fetch. These are caller concerns; the frame
/// decoder itself is parameter-free.
#[derive(Debug, Clone, Default)]
pub struct LogQuery {
    pub timestamps: bool,
    /// Number of lines from the end (None = all).
    pub tail: Option<u64>,
    /// Only lines logged after this time.
    pub since: Option<DateTime<Utc>>,
}

impl LogQuery {
    /// Tail the last `n` lines.
    pub fn tail(n: u64) -> Self {
        Self {
            tail: Some(n),
            ..Self::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn display_name_strips_leading_slash() {
        let summary: ContainerSummary = serde_json::from_value(json!({
            "Id": "0123456789abcdef",
            "Names": ["/web"]
        }))
        .unwrap();
        assert_eq!(summary.display_name(), "web");
    }

    #[test]
    fn display_name_falls_back_to_short_id() {
        let summary: ContainerSummary = serde_json::from_value(json!({
            "Id": "0123456789abcdef0123"
        }))
        .unwrap();
        assert_eq!(summary.display_name(), "0123456789ab");
    }

    #[test]
    fn endpoint_status_labels() {
        let endpoint: Endpoint =
            serde_json::from_value(json!({ "Id": 1, "Name": "local", "Status": 1 })).unwrap();
        assert_eq!(endpoint.status_label(), "up");
    }
}
