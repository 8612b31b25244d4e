// ABOUTME: Container edit pipeline: inspect response -> editable form -> create request.
// ABOUTME: Total, lossy-where-documented mapping between API shapes and the flat UI form.

mod console_mode;
mod form;
mod inspect;
mod restart_policy;
mod transform;

pub use console_mode::ConsoleMode;
pub use form::{
    BasicSettings, CommandSettings, ContainerCreateRequest, ContainerEditForm, KeyValueEntry,
    MountKind, PortMapping, PortProtocol, RawConfig, VolumeMapping,
};
pub use inspect::{
    ContainerInspect, InspectConfig, InspectHostConfig, LogConfigSpec, MountPoint,
    NetworkSettings, PortBindingSpec, RestartPolicySpec,
};
pub use restart_policy::RestartPolicy;
