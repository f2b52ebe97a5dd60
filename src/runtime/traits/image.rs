// ABOUTME: Image lookup trait for container runtimes.
// ABOUTME: Resolves an image ID to the tags the runtime knows it by.

use super::sealed::Sealed;
use crate::types::ImageId;
use async_trait::async_trait;

/// Image operations.
#[async_trait]
pub trait ImageOps: Sealed + Send + Sync {
    /// Repository tags of a local image, in the order the runtime reports them.
    async fn image_tags(&self, id: &ImageId) -> Result<Vec<String>, ImageError>;
}

/// Errors from image operations.
#[derive(Debug, thiserror::Error)]
pub enum ImageError {
    #[error("image not found: {0}")]
    NotFound(String),

    #[error("connection failed: {0}")]
    ConnectionFailed(String),

    #[error("runtime error: {0}")]
    Runtime(String),
}
