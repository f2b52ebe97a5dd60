// ABOUTME: Type-safe identifiers for runtime objects.
// ABOUTME: Uses phantom types to prevent ID confusion at compile time.

mod id;

pub use id::{ContainerId, ImageId, SHORT_ID_LEN, truncate_chars};
