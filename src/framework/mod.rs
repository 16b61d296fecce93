//! Actor plumbing around the resource registry.
//!
//! The registry is driven from one task at a time. This module provides that task and the
//! handles used to reach it.
//!
//! # Main Components
//!
//! - [`RegistryActor`] - Owns the [`ResourceRegistry`](crate::registry::ResourceRegistry) and applies requests in order
//! - [`RegistryClient`] - Cloneable async handle that sends requests to the actor
//! - [`RegistryRequest`] - The message enum exchanged between them
//! - [`Subscription`] - Scoped handle to change notifications
//! - [`FrameworkError`] - Transport errors, plus registry errors carried through
//!
//! # Testing
//!
//! See the [`mock`] module for utilities to test clients without running the registry.

pub mod actor;
pub mod client;
pub mod error;
pub mod events;
pub mod message;
pub mod mock;

pub use actor::RegistryActor;
pub use client::RegistryClient;
pub use error::FrameworkError;
pub use events::{RegistryEvent, Subscription};
pub use message::{RegistryRequest, Response};
