//! Data types shared by the registry, the actor and its clients.

pub mod property;
pub mod resource;
pub mod source;
pub mod target;
pub mod value;

pub use property::*;
pub use resource::*;
pub use source::*;
pub use target::*;
pub use value::*;
