//! Consumer-facing interfaces over [`RegistryClient`](crate::framework::RegistryClient).

pub mod provider;

pub use provider::*;
