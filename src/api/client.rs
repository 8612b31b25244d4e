// ABOUTME: ApiClient context object for one Portainer instance.
// ABOUTME: Carries base URL, API key, and the HTTP client; passed explicitly to callers.

use reqwest::StatusCode;
use snafu::ResultExt;
use std::time::Duration;

use crate::edit::{ContainerCreateRequest, ContainerEditForm, ContainerInspect};
use crate::logs::decode_multiplexed;
use crate::types::{ContainerId, EndpointId};

use super::error::{ApiError, ClientSnafu, DecodeSnafu, TransportSnafu};
use super::types::{ContainerSummary, Endpoint, LogQuery};

const API_KEY_HEADER: &str = "X-API-Key";

/// A client bound to one Portainer instance.
///
/// Every API-calling function receives this context explicitly; there is no
/// global connection state.
pub struct ApiClient {
    base_url: String,
    api_key: String,
    http: reqwest::Client,
}

impl ApiClient {
    pub fn new(
        base_url: impl Into<String>,
        api_key: impl Into<String>,
        timeout: Duration,
    ) -> Result<Self, ApiError> {
        let http = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .context(ClientSnafu)?;
        let base_url: String = base_url.into();
        Ok(Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            api_key: api_key.into(),
            http,
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn api_url(&self, path: &str) -> String {
        format!("{}/api{}", self.base_url, path)
    }

    /// Path to a Docker Engine API route proxied through an endpoint.
    fn docker_path(endpoint: &EndpointId, path: &str) -> String {
        format!("/endpoints/{endpoint}/docker{path}")
    }

    async fn send(
        &self,
        request: reqwest::RequestBuilder,
        url: &str,
        resource: &'static str,
    ) -> Result<reqwest::Response, ApiError> {
        let response = request
            .header(API_KEY_HEADER, &self.api_key)
            .send()
            .await
            .context(TransportSnafu { url })?;

        let status = response.status();
        if status.is_success() {
            return Ok(response);
        }
        let message = error_message(&response.text().await.unwrap_or_default());
        Err(fault(status, url, resource, message))
    }

    /// `GET /api/endpoints` — list the instance's Docker environments.
    pub async fn list_endpoints(&self) -> Result<Vec<Endpoint>, ApiError> {
        let url = self.api_url("/endpoints");
        tracing::debug!(%url, "listing endpoints");
        let response = self.send(self.http.get(&url), &url, "endpoint").await?;
        response.json().await.context(DecodeSnafu)
    }

    /// `GET …/containers/json?all=true` — list containers on an endpoint.
    pub async fn list_containers(
        &self,
        endpoint: &EndpointId,
    ) -> Result<Vec<ContainerSummary>, ApiError> {
        let url = self.api_url(&Self::docker_path(endpoint, "/containers/json"));
        tracing::debug!(%url, "listing containers");
        let response = self
            .send(
                self.http.get(&url).query(&[("all", "true")]),
                &url,
                "endpoint",
            )
            .await?;
        response.json().await.context(DecodeSnafu)
    }

    /// `GET …/containers/{id}/json` — the full inspect document.
    pub async fn inspect_container(
        &self,
        endpoint: &EndpointId,
        id: &ContainerId,
    ) -> Result<ContainerInspect, ApiError> {
        let path = Self::docker_path(endpoint, &format!("/containers/{id}/json"));
        let url = self.api_url(&path);
        let response = self.send(self.http.get(&url), &url, "container").await?;
        response.json().await.context(DecodeSnafu)
    }

    /// `GET …/containers/{id}/logs` — fetch and decode the multiplexed log
    /// stream into display text.
    pub async fn container_logs(
        &self,
        endpoint: &EndpointId,
        id: &ContainerId,
        query: &LogQuery,
    ) -> Result<String, ApiError> {
        let path = Self::docker_path(endpoint, &format!("/containers/{id}/logs"));
        let url = self.api_url(&path);

        let mut params: Vec<(&str, String)> = vec![
            ("stdout", "true".to_string()),
            ("stderr", "true".to_string()),
            ("timestamps", query.timestamps.to_string()),
        ];
        if let Some(tail) = query.tail {
            params.push(("tail", tail.to_string()));
        }
        if let Some(since) = query.since {
            params.push(("since", since.timestamp().to_string()));
        }

        let response = self
            .send(self.http.get(&url).query(&params), &url, "container")
            .await?;
        let bytes = response.bytes().await.context(DecodeSnafu)?;
        tracing::debug!(container = %id.short(), bytes = bytes.len(), "decoding log stream");
        Ok(decode_multiplexed(&bytes))
    }

    /// `POST …/containers/create?name=…` — create a container from an edit
    /// form's output.
    pub async fn create_container(
        &self,
        endpoint: &EndpointId,
        request: ContainerCreateRequest,
    ) -> Result<ContainerId, ApiError> {
        let path = Self::docker_path(endpoint, "/containers/create");
        let url = self.api_url(&path);
        let response = self
            .send(
                self.http
                    .post(&url)
                    .query(&[("name", request.name.as_str())])
                    .json(&request.body),
                &url,
                "container",
            )
            .await?;
        let created: CreatedResponse = response.json().await.context(DecodeSnafu)?;
        Ok(created.id)
    }

    pub async fn start_container(
        &self,
        endpoint: &EndpointId,
        id: &ContainerId,
    ) -> Result<(), ApiError> {
        self.container_action(endpoint, id, "start").await
    }

    pub async fn stop_container(
        &self,
        endpoint: &EndpointId,
        id: &ContainerId,
    ) -> Result<(), ApiError> {
        self.container_action(endpoint, id, "stop").await
    }

    pub async fn restart_container(
        &self,
        endpoint: &EndpointId,
        id: &ContainerId,
    ) -> Result<(), ApiError> {
        self.container_action(endpoint, id, "restart").await
    }

    /// `DELETE …/containers/{id}?force=…`
    pub async fn remove_container(
        &self,
        endpoint: &EndpointId,
        id: &ContainerId,
        force: bool,
    ) -> Result<(), ApiError> {
        let path = Self::docker_path(endpoint, &format!("/containers/{id}"));
        let url = self.api_url(&path);
        self.send(
            self.http.delete(&url).query(&[("force", force.to_string())]),
            &url,
            "container",
        )
        .await?;
        Ok(())
    }

    /// Apply an edited form: stop and remove the old container, then create
    /// and start its replacement. Returns the new container's ID.
    ///
    /// An already-stopped container (304 on stop) is not an error here.
    pub async fn redeploy_container(
        &self,
        endpoint: &EndpointId,
        id: &ContainerId,
        form: ContainerEditForm,
    ) -> Result<ContainerId, ApiError> {
        match self.stop_container(endpoint, id).await {
            Ok(()) | Err(ApiError::NotModified { .. }) => {}
            Err(e) => return Err(e),
        }
        self.remove_container(endpoint, id, true).await?;

        let new_id = self
            .create_container(endpoint, form.into_create_request())
            .await?;
        self.start_container(endpoint, &new_id).await?;
        tracing::debug!(old = %id.short(), new = %new_id.short(), "container redeployed");
        Ok(new_id)
    }

    async fn container_action(
        &self,
        endpoint: &EndpointId,
        id: &ContainerId,
        action: &str,
    ) -> Result<(), ApiError> {
        let path = Self::docker_path(endpoint, &format!("/containers/{id}/{action}"));
        let url = self.api_url(&path);
        self.send(self.http.post(&url), &url, "container").await?;
        Ok(())
    }
}

#[derive(Debug, serde::Deserialize)]
struct CreatedResponse {
    #[serde(rename = "Id")]
    id: ContainerId,
}

/// Map a non-success status to the matching error variant.
fn fault(status: StatusCode, url: &str, resource: &'static str, message: String) -> ApiError {
    match status.as_u16() {
        401 | 403 => ApiError::Unauthorized {
            url: url.to_string(),
            status: status.as_u16(),
        },
        404 => ApiError::NotFound { resource, message },
        409 => ApiError::Conflict { message },
        304 => ApiError::NotModified { message },
        s => ApiError::Status { status: s, message },
    }
}

/// Docker error bodies are JSON `{"message": "…"}`; fall back to the raw
/// text for anything else.
fn error_message(body: &str) -> String {
    serde_json::from_str::<serde_json::Value>(body)
        .ok()
        .and_then(|v| v.get("message").and_then(|m| m.as_str()).map(String::from))
        .unwrap_or_else(|| body.trim().to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fault_maps_docker_status_codes() {
        use crate::api::ApiErrorKind;

        let cases = [
            (StatusCode::UNAUTHORIZED, ApiErrorKind::Unauthorized),
            (StatusCode::NOT_FOUND, ApiErrorKind::NotFound),
            (StatusCode::CONFLICT, ApiErrorKind::Conflict),
            (StatusCode::NOT_MODIFIED, ApiErrorKind::NotModified),
            (StatusCode::INTERNAL_SERVER_ERROR, ApiErrorKind::Protocol),
        ];
        for (status, kind) in cases {
            let err = fault(status, "http://p.example", "container", "boom".to_string());
            assert_eq!(err.kind(), kind, "status {status}");
        }
    }

    #[test]
    fn error_message_unwraps_docker_json() {
        assert_eq!(
            error_message(r#"{"message": "No such container: abc"}"#),
            "No such container: abc"
        );
        assert_eq!(error_message("plain text\n"), "plain text");
    }

    #[test]
    fn base_url_trailing_slash_is_normalized() {
        let client =
            ApiClient::new("https://portainer.example/", "key", Duration::from_secs(5)).unwrap();
        assert_eq!(client.api_url("/endpoints"), "https://portainer.example/api/endpoints");
    }
}
