// ABOUTME: Deserialized shape of a Docker container inspect response.
// ABOUTME: Surfaced keys are typed; everything else collects into flattened rest maps.

use serde::Deserialize;
use serde_json::Value;

pub type JsonMap = serde_json::Map<String, Value>;

/// A container inspect response (`GET /containers/{id}/json`), reduced to
/// the parts the edit form surfaces plus passthrough remainders.
///
/// The surfaced keys are pulled into typed fields; every other `Config` and
/// `HostConfig` key lands in the `rest` maps via `#[serde(flatten)]`. That
/// split is what guarantees the form's raw buckets never duplicate a key
/// that is also independently represented on the form.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct ContainerInspect {
    pub id: String,
    pub name: String,
    pub config: Option<InspectConfig>,
    pub host_config: Option<InspectHostConfig>,
    pub mounts: Option<Vec<MountPoint>>,
    pub network_settings: Option<NetworkSettings>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct InspectConfig {
    pub image: Option<String>,
    pub cmd: Option<Vec<String>>,
    pub entrypoint: Option<Vec<String>>,
    pub env: Option<Vec<String>>,
    pub labels: Option<JsonMap>,
    pub working_dir: Option<String>,
    pub user: Option<String>,
    pub attach_stdin: Option<bool>,
    pub attach_stdout: Option<bool>,
    pub attach_stderr: Option<bool>,
    pub tty: Option<bool>,
    pub open_stdin: Option<bool>,
    pub stdin_once: Option<bool>,
    #[serde(flatten)]
    pub rest: JsonMap,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct InspectHostConfig {
    pub restart_policy: Option<RestartPolicySpec>,
    pub port_bindings: Option<JsonMap>,
    pub binds: Option<Vec<String>>,
    pub log_config: Option<LogConfigSpec>,
    pub memory: Option<i64>,
    #[serde(flatten)]
    pub rest: JsonMap,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct RestartPolicySpec {
    pub name: Option<String>,
    pub maximum_retry_count: Option<i64>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct LogConfigSpec {
    #[serde(rename = "Type")]
    pub driver: Option<String>,
    pub config: Option<JsonMap>,
}

/// One entry of `HostConfig.PortBindings` values.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct PortBindingSpec {
    pub host_ip: Option<String>,
    pub host_port: Option<String>,
}

/// One entry of the top-level `Mounts` array.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct MountPoint {
    #[serde(rename = "Type")]
    pub mount_type: Option<String>,
    /// Volume name, for volume-type mounts.
    pub name: Option<String>,
    /// Host path, for bind-type mounts.
    pub source: Option<String>,
    pub destination: Option<String>,
    #[serde(rename = "RW")]
    pub rw: Option<bool>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct NetworkSettings {
    pub networks: Option<JsonMap>,
}
