//! # Lifecycle, Configuration & Observability
//!
//! This module owns everything around the registry that is not the registry itself:
//!
//! 1. **Configuration** - [`RegistryConfig`], loaded from defaults or JSON
//! 2. **Composition** - [`RegistrySystem`] builds the registry, spawns the actor and exposes
//!    the client
//! 3. **Graceful Shutdown** - [`RegistrySystem::shutdown`] closes the channel and awaits the
//!    actor
//! 4. **Observability** - [`setup_tracing`] installs the log subscriber
//!
//! ## Explicit Wiring
//!
//! There is no process-wide registry. Whoever composes the application creates a
//! [`RegistrySystem`] and passes clones of its client to the components that need one:
//!
//! ```rust
//! use resource_registry::lifecycle::{RegistryConfig, RegistrySystem};
//! use resource_registry::model::Target;
//!
//! #[tokio::main]
//! async fn main() {
//!     let system = RegistrySystem::new(RegistryConfig::default()).unwrap();
//!     let inspector_client = system.client.clone();
//!
//!     let visible = inspector_client
//!         .resources_for_target(Target::new("Button"))
//!         .await
//!         .unwrap();
//!     assert!(!visible.is_empty());
//!
//!     drop(inspector_client);
//!     system.shutdown().await.unwrap();
//! }
//! ```
//!
//! ## Shutdown
//!
//! 1. **Drop all clients** - Closes the sender side of the channel
//! 2. **Actor detects closure** - `receiver.recv()` returns `None`
//! 3. **Actor finishes** - Remaining requests are answered, final size is logged
//! 4. **Await completion** - [`RegistrySystem::shutdown`] joins the task
//!
//! ## Tracing
//!
//! ```bash
//! RUST_LOG=info cargo run      # Creates and lifecycle only
//! RUST_LOG=debug cargo run     # Every request with its payload
//! ```

pub mod config;
pub mod registry_system;
pub mod tracing;

pub use config::*;
pub use registry_system::*;
pub use self::tracing::setup_tracing;
