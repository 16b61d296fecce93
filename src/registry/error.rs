//! Error types for the resource registry.

use thiserror::Error;

/// Errors raised by registry operations.
///
/// Name collisions are not errors; they are reported as
/// [`CollisionResult`](super::CollisionResult) data.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum RegistryError {
    /// An argument was empty, ill-typed or referred to an unreachable target.
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),
}
