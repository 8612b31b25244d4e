// ABOUTME: The two transform directions: inspect response -> edit form -> create request.
// ABOUTME: Total over well-typed input; degrades to defaults instead of failing.

use serde_json::{Value, json};

use super::console_mode::ConsoleMode;
use super::form::{
    BasicSettings, CommandSettings, ContainerCreateRequest, ContainerEditForm, KeyValueEntry,
    MountKind, PortMapping, PortProtocol, RawConfig, VolumeMapping,
};
use super::inspect::{
    ContainerInspect, InspectConfig, InspectHostConfig, JsonMap, MountPoint, NetworkSettings,
    PortBindingSpec,
};
use super::restart_policy::RestartPolicy;

impl ContainerEditForm {
    /// Flatten an inspect response into the editable form.
    ///
    /// Absent `Config`/`HostConfig` sections and missing fields fall back to
    /// safe defaults; nothing here can fail. Unsurfaced keys are carried in
    /// `raw` and re-emitted verbatim on the way back out.
    pub fn from_inspect(inspect: ContainerInspect) -> Self {
        let InspectConfig {
            image,
            cmd,
            entrypoint,
            env,
            labels,
            working_dir,
            user,
            attach_stdin,
            attach_stdout: _,
            attach_stderr: _,
            tty,
            open_stdin: _,
            stdin_once: _,
            rest: config_rest,
        } = inspect.config.unwrap_or_default();

        let InspectHostConfig {
            restart_policy,
            port_bindings,
            binds: _,
            log_config,
            memory: _,
            rest: host_rest,
        } = inspect.host_config.unwrap_or_default();

        let basic = BasicSettings {
            name: inspect.name.trim_start_matches('/').to_string(),
            image: image.unwrap_or_default(),
            log_driver: log_config
                .and_then(|l| l.driver)
                .unwrap_or_else(|| "json-file".to_string()),
            restart_policy: RestartPolicy::from_docker(
                restart_policy.as_ref().and_then(|r| r.name.as_deref()),
            ),
        };

        let commands = CommandSettings {
            command: cmd.unwrap_or_default(),
            entrypoint: entrypoint.unwrap_or_default(),
            working_dir: working_dir.unwrap_or_default(),
            user: user.unwrap_or_default(),
            console: ConsoleMode::derive(attach_stdin.unwrap_or(false), tty.unwrap_or(false)),
        };

        ContainerEditForm {
            basic,
            ports: port_mappings(port_bindings),
            commands,
            env: env_entries(env),
            labels: label_entries(labels),
            volumes: volume_mappings(inspect.mounts),
            raw: RawConfig {
                container_config: config_rest,
                host_config: host_rest,
                networking_config: networking_config(inspect.network_settings),
            },
        }
    }

    /// Consume the form into a create-request payload.
    ///
    /// The preserved raw buckets form the base object and the UI-derived
    /// fields overlay them, so an edited field always wins. Documented lossy
    /// spots: console mode re-derives the stdin flags, volume-kind mounts do
    /// not survive into `Binds`, and per-binding fields beyond `HostPort`
    /// are dropped.
    pub fn into_create_request(self) -> ContainerCreateRequest {
        let ContainerEditForm {
            basic,
            ports,
            commands,
            env,
            labels,
            volumes,
            raw,
        } = self;

        let (attach_stdin, tty) = commands.console.flags();

        let mut body = raw.container_config;
        body.insert("Image".to_string(), json!(basic.image));
        body.insert("Cmd".to_string(), json!(commands.command));
        body.insert("Entrypoint".to_string(), json!(commands.entrypoint));
        body.insert("Env".to_string(), env_strings(&env));
        body.insert("Labels".to_string(), label_object(&labels));
        body.insert("WorkingDir".to_string(), json!(commands.working_dir));
        body.insert("User".to_string(), json!(commands.user));
        body.insert("AttachStdin".to_string(), json!(attach_stdin));
        body.insert("AttachStdout".to_string(), json!(true));
        body.insert("AttachStderr".to_string(), json!(true));
        body.insert("Tty".to_string(), json!(tty));
        body.insert("OpenStdin".to_string(), json!(attach_stdin));
        body.insert("StdinOnce".to_string(), json!(false));

        let mut host_config = raw.host_config;
        host_config.insert(
            "RestartPolicy".to_string(),
            restart_policy_value(basic.restart_policy),
        );
        host_config.insert("PortBindings".to_string(), port_bindings_value(&ports));
        host_config.insert("Binds".to_string(), binds_value(&volumes));
        host_config.insert(
            "LogConfig".to_string(),
            json!({ "Type": basic.log_driver, "Config": {} }),
        );
        // Required by the create schema even when the inspect response
        // carried no limit.
        host_config.entry("Memory").or_insert(json!(0));

        body.insert("HostConfig".to_string(), Value::Object(host_config));
        body.insert(
            "NetworkingConfig".to_string(),
            Value::Object(raw.networking_config),
        );

        ContainerCreateRequest {
            name: basic.name,
            body,
        }
    }
}

/// Fan out `PortBindings` entries: one mapping per non-null `HostPort`.
fn port_mappings(bindings: Option<JsonMap>) -> Vec<PortMapping> {
    let mut ports = Vec::new();
    for (key, value) in bindings.unwrap_or_default() {
        let (container_port, protocol) = match key.split_once('/') {
            Some((port, proto)) => (port.to_string(), PortProtocol::parse(proto)),
            None => (key.clone(), PortProtocol::Tcp),
        };
        // A null or malformed binding list carries no host ports.
        let Ok(specs) = serde_json::from_value::<Vec<PortBindingSpec>>(value) else {
            continue;
        };
        for spec in specs {
            if let Some(host_port) = spec.host_port {
                ports.push(PortMapping {
                    host_port,
                    container_port: container_port.clone(),
                    protocol,
                });
            }
        }
    }
    ports
}

/// Split each `KEY=VALUE` string on the first `=`; the value keeps any
/// embedded `=` characters.
fn env_entries(env: Option<Vec<String>>) -> Vec<KeyValueEntry> {
    env.unwrap_or_default()
        .into_iter()
        .map(|pair| match pair.split_once('=') {
            Some((key, value)) => KeyValueEntry::new(key, value),
            None => KeyValueEntry::new(pair.as_str(), ""),
        })
        .collect()
}

fn label_entries(labels: Option<JsonMap>) -> Vec<KeyValueEntry> {
    labels
        .unwrap_or_default()
        .into_iter()
        .map(|(key, value)| {
            let value = match value {
                Value::String(s) => s,
                other => other.to_string(),
            };
            KeyValueEntry { key, value }
        })
        .collect()
}

fn volume_mappings(mounts: Option<Vec<MountPoint>>) -> Vec<VolumeMapping> {
    mounts
        .unwrap_or_default()
        .into_iter()
        .map(|mount| {
            // Anything that isn't explicitly a volume (tmpfs included) is
            // treated as a bind mount.
            let kind = if mount.mount_type.as_deref() == Some("volume") {
                MountKind::Volume
            } else {
                MountKind::Bind
            };
            let host_path = match kind {
                MountKind::Volume => mount.name.unwrap_or_default(),
                MountKind::Bind => mount.source.unwrap_or_default(),
            };
            VolumeMapping {
                container_path: mount.destination.unwrap_or_default(),
                host_path,
                kind,
                read_only: mount.rw == Some(false),
            }
        })
        .collect()
}

/// Build the create request's `NetworkingConfig` from the live network map.
fn networking_config(settings: Option<NetworkSettings>) -> JsonMap {
    let networks = settings.and_then(|s| s.networks).unwrap_or_default();
    let mut map = JsonMap::new();
    map.insert("EndpointsConfig".to_string(), Value::Object(networks));
    map
}

fn restart_policy_value(policy: RestartPolicy) -> Value {
    if policy == RestartPolicy::OnFailure {
        json!({ "Name": policy.docker_name(), "MaximumRetryCount": 0 })
    } else {
        json!({ "Name": policy.docker_name() })
    }
}

fn env_strings(entries: &[KeyValueEntry]) -> Value {
    let env: Vec<String> = entries
        .iter()
        .filter(|e| !e.key.is_empty())
        .map(|e| format!("{}={}", e.key, e.value))
        .collect();
    json!(env)
}

fn label_object(entries: &[KeyValueEntry]) -> Value {
    let mut map = JsonMap::new();
    for entry in entries.iter().filter(|e| !e.key.is_empty()) {
        map.insert(entry.key.clone(), json!(entry.value));
    }
    Value::Object(map)
}

/// Rebuild `PortBindings` keyed by `"containerPort/protocol"`, preserving
/// fan-out (several host ports per key collect into one list).
fn port_bindings_value(ports: &[PortMapping]) -> Value {
    let mut map = JsonMap::new();
    for port in ports {
        let key = format!("{}/{}", port.container_port, port.protocol.as_str());
        let bindings = map
            .entry(key)
            .or_insert_with(|| Value::Array(Vec::new()));
        if let Value::Array(list) = bindings {
            list.push(json!({ "HostPort": port.host_port }));
        }
    }
    Value::Object(map)
}

/// Rebuild `Binds` strings for bind-kind entries with both paths set.
/// Volume-kind entries do not survive into the create request.
fn binds_value(volumes: &[VolumeMapping]) -> Value {
    let binds: Vec<String> = volumes
        .iter()
        .filter(|v| {
            v.kind == MountKind::Bind && !v.host_path.is_empty() && !v.container_path.is_empty()
        })
        .map(|v| {
            if v.read_only {
                format!("{}:{}:ro", v.host_path, v.container_path)
            } else {
                format!("{}:{}", v.host_path, v.container_path)
            }
        })
        .collect();
    json!(binds)
}
