// ABOUTME: Container listing trait for container runtimes.
// ABOUTME: Returns raw per-container records as the runtime reports them.

use super::sealed::Sealed;
use crate::types::{ContainerId, ImageId};
use async_trait::async_trait;

/// Read-only container operations.
#[async_trait]
pub trait ContainerOps: Sealed + Send + Sync {
    /// List containers matching the given filters.
    async fn list_containers(
        &self,
        filters: &ContainerFilters,
    ) -> Result<Vec<ContainerRecord>, ContainerError>;
}

/// Filters for listing containers.
#[derive(Debug, Clone, Default)]
pub struct ContainerFilters {
    /// Include stopped containers.
    pub all: bool,
}

impl ContainerFilters {
    /// Every container, whatever its lifecycle state.
    pub fn all() -> Self {
        Self { all: true }
    }
}

/// One container as reported by the runtime, before any normalization.
#[derive(Debug, Clone)]
pub struct ContainerRecord {
    /// Full container ID.
    pub id: ContainerId,
    /// Primary name, possibly with the runtime's leading `/`.
    pub name: String,
    /// Image reference the container was created from.
    pub image: String,
    /// ID of the image backing the container.
    pub image_id: ImageId,
    /// Lifecycle state ("running", "exited", ...).
    pub state: String,
}

/// Errors from container operations.
#[derive(Debug, thiserror::Error)]
pub enum ContainerError {
    #[error("connection failed: {0}")]
    ConnectionFailed(String),

    #[error("runtime error: {0}")]
    Runtime(String),
}
