//! # Framework Errors
//!
//! Errors raised while talking to the registry actor. Registry failures travel inside
//! [`FrameworkError::Registry`] so that callers match on a single type.

use crate::registry::RegistryError;

/// Errors that can occur between a client and the registry actor.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum FrameworkError {
    #[error("Actor closed")]
    ActorClosed,
    #[error("Actor dropped response channel")]
    ActorDropped,
    #[error("Actor task failed: {0}")]
    ActorPanicked(String),
    #[error(transparent)]
    Registry(#[from] RegistryError),
}
