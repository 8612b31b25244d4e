// ABOUTME: Endpoints command implementation.
// ABOUTME: Lists the Docker environments of a Portainer instance.

use portside::error::Result;
use portside::output::Output;

use super::{client_for, load_instance};

/// List the instance's endpoints.
pub async fn endpoints(instance: Option<&str>, output: &Output) -> Result<()> {
    let instance = load_instance(instance)?;
    let client = client_for(&instance)?;

    let endpoints = client.list_endpoints().await?;
    for endpoint in &endpoints {
        output.row(
            &format!(
                "{:<6} {:<28} {:<8} {}",
                endpoint.id,
                endpoint.name,
                endpoint.status_label(),
                endpoint.url.as_deref().unwrap_or("-")
            ),
            endpoint,
        );
    }
    Ok(())
}
