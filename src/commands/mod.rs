// ABOUTME: Command module aggregator for the portside CLI.
// ABOUTME: Shared instance/client resolution plus the command handlers.

mod containers;
mod endpoints;
mod logs;

pub use containers::{ContainerAction, control, ps, recreate};
pub use endpoints::endpoints;
pub use logs::logs;

use portside::api::ApiClient;
use portside::config::{Config, InstanceConfig};
use portside::error::{Error, Result};
use portside::types::EndpointId;

/// Load portside.yml from the working directory and pick an instance.
pub(crate) fn load_instance(name: Option<&str>) -> Result<InstanceConfig> {
    let cwd = std::env::current_dir()?;
    let config = Config::discover(&cwd)?;
    Ok(config.instance(name)?.clone())
}

pub(crate) fn client_for(instance: &InstanceConfig) -> Result<ApiClient> {
    let api_key = instance.api_key.resolve()?;
    Ok(ApiClient::new(&instance.url, api_key, instance.timeout)?)
}

/// Endpoint from the flag, falling back to the instance's configured default.
pub(crate) fn resolve_endpoint(
    instance: &InstanceConfig,
    flag: Option<i64>,
) -> Result<EndpointId> {
    flag.map(EndpointId)
        .or(instance.endpoint)
        .ok_or_else(|| Error::NoEndpoint(instance.name.clone()))
}
