// ABOUTME: Runtime error types with SNAFU pattern.
// ABOUTME: Unifies detection, connection and query errors for programmatic handling.

use snafu::Snafu;

use super::detection::DetectionError;
use super::traits::{ContainerError, ImageError, RuntimeInfoError};

/// Unified runtime error for everything that can go wrong talking to a runtime.
#[derive(Debug, Snafu)]
#[snafu(visibility(pub))]
pub enum RuntimeError {
    #[snafu(display("runtime detection failed: {source}"))]
    Detection { source: DetectionError },

    #[snafu(display("runtime connection failed: {source}"))]
    Connection { source: RuntimeInfoError },

    #[snafu(display("listing containers failed: {source}"))]
    ListContainers { source: ContainerError },

    #[snafu(display("reading tags of image {image} failed: {source}"))]
    ImageLookup { image: String, source: ImageError },
}

/// Error kind for programmatic handling.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RuntimeErrorKind {
    /// No container runtime found on the system.
    NoRuntimeFound,
    /// Failed to reach the runtime socket.
    ConnectionFailed,
    /// The runtime answered with an error.
    RuntimeOperation,
}

impl RuntimeError {
    /// Returns the error kind for programmatic handling.
    pub fn kind(&self) -> RuntimeErrorKind {
        match self {
            RuntimeError::Detection { source } => match source {
                DetectionError::NoRuntimeFound => RuntimeErrorKind::NoRuntimeFound,
            },
            RuntimeError::Connection { source } => match source {
                RuntimeInfoError::ConnectionFailed(_) => RuntimeErrorKind::ConnectionFailed,
            },
            RuntimeError::ListContainers { source } => match source {
                ContainerError::ConnectionFailed(_) => RuntimeErrorKind::ConnectionFailed,
                ContainerError::Runtime(_) => RuntimeErrorKind::RuntimeOperation,
            },
            RuntimeError::ImageLookup { source, .. } => match source {
                ImageError::ConnectionFailed(_) => RuntimeErrorKind::ConnectionFailed,
                ImageError::NotFound(_) | ImageError::Runtime(_) => {
                    RuntimeErrorKind::RuntimeOperation
                }
            },
        }
    }
}

impl From<DetectionError> for RuntimeError {
    fn from(source: DetectionError) -> Self {
        RuntimeError::Detection { source }
    }
}

impl From<RuntimeInfoError> for RuntimeError {
    fn from(source: RuntimeInfoError) -> Self {
        RuntimeError::Connection { source }
    }
}

impl From<ContainerError> for RuntimeError {
    fn from(source: ContainerError) -> Self {
        RuntimeError::ListContainers { source }
    }
}
