// ABOUTME: Configuration types and parsing for portside.yml.
// ABOUTME: Handles YAML parsing, API key interpolation, and instance lookup.

mod api_key;

pub use api_key::ApiKey;

use crate::error::{Error, Result};
use crate::types::EndpointId;
use nonempty::NonEmpty;
use serde::Deserialize;
use std::path::Path;
use std::time::Duration;

pub const CONFIG_FILENAME: &str = "portside.yml";
pub const CONFIG_FILENAME_ALT: &str = "portside.yaml";
pub const CONFIG_FILENAME_DIR: &str = ".portside/config.yml";

#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    #[serde(deserialize_with = "deserialize_instances")]
    pub instances: NonEmpty<InstanceConfig>,
}

/// One saved Portainer instance.
#[derive(Debug, Clone, Deserialize)]
pub struct InstanceConfig {
    pub name: String,

    pub url: String,

    pub api_key: ApiKey,

    /// Default endpoint (environment) within the instance.
    #[serde(default)]
    pub endpoint: Option<EndpointId>,

    #[serde(default = "default_timeout", with = "humantime_serde")]
    pub timeout: Duration,
}

fn default_timeout() -> Duration {
    Duration::from_secs(30)
}

impl Config {
    pub fn from_yaml(yaml: &str) -> Result<Self> {
        serde_yaml::from_str(yaml).map_err(Error::from)
    }

    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        Self::from_yaml(&content)
    }

    pub fn discover(dir: &Path) -> Result<Self> {
        let candidates = [
            dir.join(CONFIG_FILENAME),
            dir.join(CONFIG_FILENAME_ALT),
            dir.join(CONFIG_FILENAME_DIR),
        ];

        for path in &candidates {
            if path.exists() {
                return Self::load(path);
            }
        }

        Err(Error::ConfigNotFound(dir.to_path_buf()))
    }

    /// Select an instance by name, or the first one when no name is given.
    pub fn instance(&self, name: Option<&str>) -> Result<&InstanceConfig> {
        match name {
            None => Ok(self.instances.first()),
            Some(name) => self
                .instances
                .iter()
                .find(|i| i.name == name)
                .ok_or_else(|| Error::UnknownInstance(name.to_string())),
        }
    }
}

pub fn init_config(
    dir: &Path,
    name: Option<&str>,
    url: Option<&str>,
    force: bool,
) -> Result<()> {
    let config_path = dir.join(CONFIG_FILENAME);

    if config_path.exists() && !force {
        return Err(Error::AlreadyExists(config_path));
    }

    let yaml = template_yaml(
        name.unwrap_or("home"),
        url.unwrap_or("https://portainer.example.com"),
    );
    std::fs::write(&config_path, yaml)?;

    Ok(())
}

fn template_yaml(name: &str, url: &str) -> String {
    format!(
        r#"instances:
  - name: {name}
    url: {url}
    api_key:
      env: PORTAINER_API_KEY
    # endpoint: 1
"#
    )
}

fn deserialize_instances<'de, D>(
    deserializer: D,
) -> std::result::Result<NonEmpty<InstanceConfig>, D::Error>
where
    D: serde::Deserializer<'de>,
{
    let values: Vec<InstanceConfig> = Vec::deserialize(deserializer)?;
    NonEmpty::from_vec(values)
        .ok_or_else(|| serde::de::Error::custom("at least one instance is required"))
}
