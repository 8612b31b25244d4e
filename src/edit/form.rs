// ABOUTME: The flattened container edit form and its field group types.
// ABOUTME: Created once per edit session, mutated in place, consumed into a create request.

use super::console_mode::ConsoleMode;
use super::inspect::JsonMap;
use super::restart_policy::RestartPolicy;

/// A UI-facing flattened view of a container's configuration.
///
/// Built from an inspect response by [`ContainerEditForm::from_inspect`],
/// edited in place, and consumed exactly once by
/// [`ContainerEditForm::into_create_request`]. Never persisted.
#[derive(Debug, Clone, Default)]
pub struct ContainerEditForm {
    pub basic: BasicSettings,
    pub ports: Vec<PortMapping>,
    pub commands: CommandSettings,
    pub env: Vec<KeyValueEntry>,
    pub labels: Vec<KeyValueEntry>,
    pub volumes: Vec<VolumeMapping>,
    pub raw: RawConfig,
}

#[derive(Debug, Clone)]
pub struct BasicSettings {
    pub name: String,
    pub image: String,
    pub log_driver: String,
    pub restart_policy: RestartPolicy,
}

impl Default for BasicSettings {
    fn default() -> Self {
        Self {
            name: String::new(),
            image: String::new(),
            log_driver: "json-file".to_string(),
            restart_policy: RestartPolicy::default(),
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct CommandSettings {
    pub command: Vec<String>,
    pub entrypoint: Vec<String>,
    pub working_dir: String,
    pub user: String,
    pub console: ConsoleMode,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PortProtocol {
    #[default]
    Tcp,
    Udp,
}

impl PortProtocol {
    pub fn as_str(&self) -> &'static str {
        match self {
            PortProtocol::Tcp => "tcp",
            PortProtocol::Udp => "udp",
        }
    }

    /// Lenient parse: anything that isn't `udp` is treated as `tcp`.
    pub fn parse(s: &str) -> Self {
        if s.eq_ignore_ascii_case("udp") {
            PortProtocol::Udp
        } else {
            PortProtocol::Tcp
        }
    }
}

/// One published port. A container port with several host bindings fans out
/// into several entries.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PortMapping {
    pub host_port: String,
    pub container_port: String,
    pub protocol: PortProtocol,
}

/// One env or label row. Entries with an empty key are dropped when the form
/// is consumed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeyValueEntry {
    pub key: String,
    pub value: String,
}

impl KeyValueEntry {
    pub fn new(key: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            value: value.into(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum MountKind {
    Volume,
    #[default]
    Bind,
}

/// One mount row. `host_path` is the volume name for volume-kind entries and
/// the host path for bind-kind entries.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VolumeMapping {
    pub container_path: String,
    pub host_path: String,
    pub kind: MountKind,
    pub read_only: bool,
}

/// Passthrough buckets for every config key the form does not surface.
///
/// Invariant: these never contain a key that is also independently
/// represented by the typed form fields. The inspect deserializer enforces
/// this structurally (surfaced keys are pulled out before flattening).
#[derive(Debug, Clone, Default)]
pub struct RawConfig {
    pub container_config: JsonMap,
    pub host_config: JsonMap,
    pub networking_config: JsonMap,
}

/// The payload for `POST /containers/create`. The name travels as a query
/// parameter, the body as JSON.
#[derive(Debug, Clone)]
pub struct ContainerCreateRequest {
    pub name: String,
    pub body: JsonMap,
}
