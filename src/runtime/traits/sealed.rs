// ABOUTME: Seal for the runtime capability traits.
// ABOUTME: Only types inside this crate may implement ContainerOps, ImageOps or RuntimeInfo.

/// Supertrait of every runtime capability trait.
///
/// It lives in a crate-private module, so outside code can name the
/// capability traits in bounds but cannot implement them.
pub trait Sealed {}
