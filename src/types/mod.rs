// ABOUTME: Type-safe identifiers for Portainer resources.
// ABOUTME: Uses phantom types to prevent ID confusion at compile time.

mod id;

pub use id::{ConnectionId, ContainerId, EndpointId};
