// ABOUTME: Container runtime access for Docker and Podman.
// ABOUTME: Auto-detects the local runtime and wraps bollard behind capability traits.

mod bollard;
mod detection;
mod error;
pub mod traits;
mod types;

pub use self::bollard::BollardRuntime;
pub use detection::{DetectionError, detect_local, resolve_runtime};
pub use error::{RuntimeError, RuntimeErrorKind};
pub use traits::{
    ContainerError, ContainerFilters, ContainerOps, ContainerRecord, ContainerSource, ImageError,
    ImageOps, RuntimeInfo as RuntimeInfoTrait, RuntimeInfoError, RuntimeMetadata,
};
pub use types::{RuntimeConfig, RuntimeInfo, RuntimeType};

/// Resolve the configured runtime and open a client for it.
pub fn connect(config: &RuntimeConfig) -> Result<BollardRuntime, RuntimeError> {
    let info = resolve_runtime(config)?;
    Ok(BollardRuntime::connect(&info)?)
}
