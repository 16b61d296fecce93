#![doc(html_logo_url = "https://www.rust-lang.org/logos/rust-logo-128x128.png")]
#![doc(html_favicon_url = "https://www.rust-lang.org/favicon.ico")]
//! # Resource Registry
//!
//! > **Scoped, typed, named resources for a visual designer.**
//!
//! A property inspector needs to answer three questions about the object it is editing:
//! which resource scopes can this object see, which resources there fit a given property, and
//! may I create a new resource under this name? This crate answers them.
//!
//! ## 🏗️ Design
//!
//! ### Scopes
//! Resources live in sources of five kinds. From most to least specific: the object itself,
//! the document, shared dictionaries, the application, the system. A name in a more specific
//! scope shadows the same name further out, so creating it there is allowed but reported.
//!
//! ### Types
//! Values are drawn from a closed set ([`ValueType`](model::ValueType)): colors, solid and
//! gradient brushes, text, numbers, flags. Compatibility is covariant; a `Brush` property
//! accepts both brush kinds.
//!
//! ### One Writer
//! The registry is a plain synchronous store. A [`RegistryActor`](framework::RegistryActor)
//! owns it inside a Tokio task, and every read and write arrives through a cloneable
//! [`RegistryClient`](framework::RegistryClient). No locks, no lost creates.
//!
//! ### Explicit Wiring
//! There is no global registry. [`RegistrySystem`](lifecycle::RegistrySystem) builds one from a
//! [`RegistryConfig`](lifecycle::RegistryConfig) and hands out the client.
//!
//! ## 🗺️ Module Tour
//!
//! - [`model`] - targets, values, sources, resources, property descriptors
//! - [`registry`] - the store, name checks and suggestions, the built-in seed
//! - [`framework`] - actor, client, messages, change events, mocks
//! - [`clients`] - [`ResourceProvider`](clients::ResourceProvider), the inspector-facing trait
//! - [`lifecycle`] - configuration, system composition, tracing
//!
//! ## 🚀 Quick Start
//!
//! ```bash
//! RUST_LOG=info cargo run
//! cargo test
//! ```

pub mod clients;
pub mod framework;
pub mod lifecycle;
pub mod model;
pub mod registry;
