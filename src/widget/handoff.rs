// ABOUTME: App-to-widget data handoff: the shared-storage snapshot and deep links.
// ABOUTME: The widget extension reads this snapshot; it never calls back into the app.

use serde::{Deserialize, Serialize};

use crate::api::ContainerSummary;
use crate::types::{ConnectionId, ContainerId, EndpointId};

/// Fixed key under which the snapshot is stored in platform shared storage
/// (App Group on iOS, SharedPreferences on Android).
pub const WIDGET_STORAGE_KEY: &str = "portside.widget.snapshot";

/// A saved Portainer connection as handed to the widget extension.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ConnectionInfo {
    pub id: ConnectionId,
    pub base_url: String,
    pub api_key: String,
    #[serde(default)]
    pub endpoint_id: Option<EndpointId>,
}

/// Minimal container summary for widget display.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContainerStub {
    pub id: ContainerId,
    pub name: String,
}

/// What the app writes to shared storage for the widget to render.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WidgetSnapshot {
    pub connection: ConnectionInfo,
    pub containers: Vec<ContainerStub>,
}

impl WidgetSnapshot {
    pub fn new(connection: ConnectionInfo, summaries: &[ContainerSummary]) -> Self {
        let containers = summaries
            .iter()
            .map(|s| ContainerStub {
                id: s.id.clone(),
                name: s.display_name().to_string(),
            })
            .collect();
        Self {
            connection,
            containers,
        }
    }

    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string(self)
    }

    pub fn from_json(json: &str) -> serde_json::Result<Self> {
        serde_json::from_str(json)
    }
}

/// Deep link routing a widget tap back to a container detail screen.
pub fn deep_link(
    container: &ContainerId,
    connection: &ConnectionId,
    endpoint: &EndpointId,
) -> String {
    format!(
        "portside://container/{}?connectionId={}&endpointId={}",
        urlencoding::encode(container.as_str()),
        urlencoding::encode(connection.as_str()),
        endpoint
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn connection() -> ConnectionInfo {
        ConnectionInfo {
            id: ConnectionId::new("home"),
            base_url: "https://portainer.example".to_string(),
            api_key: "ptr_secret".to_string(),
            endpoint_id: Some(EndpointId(2)),
        }
    }

    #[test]
    fn snapshot_round_trips_through_json() {
        let summary: ContainerSummary = serde_json::from_value(json!({
            "Id": "abc123",
            "Names": ["/web"]
        }))
        .unwrap();
        let snapshot = WidgetSnapshot::new(connection(), &[summary]);

        let restored = WidgetSnapshot::from_json(&snapshot.to_json().unwrap()).unwrap();
        assert_eq!(restored.connection, snapshot.connection);
        assert_eq!(restored.containers.len(), 1);
        assert_eq!(restored.containers[0].name, "web");
    }

    #[test]
    fn snapshot_uses_camel_case_field_names() {
        let snapshot = WidgetSnapshot::new(connection(), &[]);
        let json = snapshot.to_json().unwrap();
        assert!(json.contains("\"baseUrl\""));
        assert!(json.contains("\"endpointId\""));
    }

    #[test]
    fn deep_link_percent_encodes_components() {
        let link = deep_link(
            &ContainerId::new("abc/def"),
            &ConnectionId::new("my home"),
            &EndpointId(3),
        );
        assert_eq!(
            link,
            "portside://container/abc%2Fdef?connectionId=my%20home&endpointId=3"
        );
    }
}
