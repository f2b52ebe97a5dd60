// ABOUTME: Composable capability traits for container runtimes.
// ABOUTME: Defines ContainerOps, ImageOps, RuntimeInfo and the ContainerSource bundle.

mod container;
mod image;
mod runtime_info;
pub(crate) mod sealed;

pub use container::{ContainerError, ContainerFilters, ContainerOps, ContainerRecord};
pub use image::{ImageError, ImageOps};
pub use runtime_info::{RuntimeInfo, RuntimeInfoError, RuntimeMetadata};

/// Everything needed to build container summaries.
///
/// Automatically implemented for any type with both capabilities.
pub trait ContainerSource: ContainerOps + ImageOps {}

impl<T: ContainerOps + ImageOps> ContainerSource for T {}
