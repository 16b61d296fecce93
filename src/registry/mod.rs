//! # Resource Registry
//!
//! The scoped store of named, typed resources.
//!
//! ## Structure
//!
//! - [`store`] - [`ResourceRegistry`], the synchronous store and its queries
//! - [`collision`] - [`CollisionResult`], the verdict of a name check, and the
//!   [`OverridePolicy`] / [`CreateOutcome`] of a checked create
//! - [`seed`] - built-in sources and resources
//! - [`error`] - [`RegistryError`]
//!
//! ## Scopes and Shadowing
//!
//! Every resource belongs to a [`ResourceSource`](crate::model::ResourceSource). Sources are
//! ranked from most to least specific: an object's own resources, then the document, shared
//! dictionaries, the application, and finally the system. A resource in a more specific scope
//! shadows a same-named resource in a less specific one.
//!
//! ```rust
//! use resource_registry::model::{Target, ValueType, PropertyInfo};
//! use resource_registry::registry::{CollisionResult, ResourceRegistry};
//!
//! let registry = ResourceRegistry::with_builtin_seed();
//! let button = Target::new("Button");
//!
//! // Same scope: hard error. Less specific scope: warning.
//! let system = registry.system_source();
//! let application = registry.application_source();
//! assert!(registry.check_name_collision(&button, system, "HighlightBrush").unwrap().is_error());
//! assert!(registry.check_name_collision(&button, application, "HighlightBrush").unwrap().is_warning());
//!
//! let background = PropertyInfo::new("Background", ValueType::Brush);
//! let brushes = registry.resources_for_property(&button, &background).unwrap();
//! assert!(brushes.iter().all(|r| ValueType::Brush.is_assignable_from(r.value_type())));
//! ```

pub mod collision;
pub mod error;
pub mod seed;
pub mod store;

pub use collision::*;
pub use error::*;
pub use store::*;

/// Default depth of the request queue.
pub const DEFAULT_CHANNEL_CAPACITY: usize = 32;

/// Default per-subscriber buffer for change events.
pub const DEFAULT_EVENT_CAPACITY: usize = 64;
