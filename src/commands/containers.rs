// ABOUTME: Container listing and control command implementations.
// ABOUTME: ps plus start/stop/restart against a selected endpoint.

use portside::api::ApiError;
use portside::edit::{ContainerEditForm, RestartPolicy};
use portside::error::Result;
use portside::output::Output;
use portside::types::ContainerId;

use super::{client_for, load_instance, resolve_endpoint};

/// List containers on the selected endpoint.
pub async fn ps(instance: Option<&str>, endpoint: Option<i64>, output: &Output) -> Result<()> {
    let instance = load_instance(instance)?;
    let client = client_for(&instance)?;
    let endpoint = resolve_endpoint(&instance, endpoint)?;

    let containers = client.list_containers(&endpoint).await?;
    for container in &containers {
        output.row(
            &format!(
                "{:<14} {:<28} {:<32} {}",
                container.id.short(),
                container.display_name(),
                container.image,
                container.status
            ),
            container,
        );
    }
    Ok(())
}

#[derive(Debug, Clone, Copy)]
pub enum ContainerAction {
    Start,
    Stop,
    Restart,
}

impl ContainerAction {
    fn verb(&self) -> &'static str {
        match self {
            ContainerAction::Start => "started",
            ContainerAction::Stop => "stopped",
            ContainerAction::Restart => "restarted",
        }
    }
}

/// Start, stop, or restart a container.
pub async fn control(
    instance: Option<&str>,
    endpoint: Option<i64>,
    container: &str,
    action: ContainerAction,
    output: &Output,
) -> Result<()> {
    let instance = load_instance(instance)?;
    let client = client_for(&instance)?;
    let endpoint = resolve_endpoint(&instance, endpoint)?;

    // The Docker API accepts names as well as IDs in the path.
    let id = ContainerId::new(container);
    let result = match action {
        ContainerAction::Start => client.start_container(&endpoint, &id).await,
        ContainerAction::Stop => client.stop_container(&endpoint, &id).await,
        ContainerAction::Restart => client.restart_container(&endpoint, &id).await,
    };

    match result {
        Ok(()) => {
            output.success(&format!("{container} {}", action.verb()));
            Ok(())
        }
        // 304: the container was already in the requested state.
        Err(ApiError::NotModified { .. }) => {
            output.warning(&format!("{container} was already {}", action.verb()));
            Ok(())
        }
        Err(e) => Err(e.into()),
    }
}

/// Recreate a container, optionally overriding fields of its edit form.
///
/// The old container is stopped and removed; everything not overridden is
/// carried over from its inspect document.
pub async fn recreate(
    instance: Option<&str>,
    endpoint: Option<i64>,
    container: &str,
    image: Option<String>,
    restart: Option<String>,
    output: &Output,
) -> Result<()> {
    let instance = load_instance(instance)?;
    let client = client_for(&instance)?;
    let endpoint = resolve_endpoint(&instance, endpoint)?;

    let id = ContainerId::new(container);
    let inspect = client.inspect_container(&endpoint, &id).await?;
    let mut form = ContainerEditForm::from_inspect(inspect);

    if let Some(image) = image {
        form.basic.image = image;
    }
    if let Some(restart) = restart {
        form.basic.restart_policy = RestartPolicy::from_docker(Some(&restart));
    }

    output.progress(&format!("recreating {}", form.basic.name));
    let new_id = client.redeploy_container(&endpoint, &id, form).await?;
    output.success(&format!("recreated as {}", new_id.short()));
    Ok(())
}
