//! # Registry Messages
//!
//! The requests a [`RegistryClient`](super::RegistryClient) sends to the
//! [`RegistryActor`](super::RegistryActor). Each request carries the oneshot sender the actor
//! answers on.

use super::error::FrameworkError;
use crate::model::{PropertyInfo, Resource, ResourceSource, ResourceValue, Target, ValueType};
use crate::registry::{CollisionResult, CreateOutcome, OverridePolicy};
use tokio::sync::oneshot;

/// Type alias for the one-shot response channel used by the actor.
pub type Response<T> = oneshot::Sender<Result<T, FrameworkError>>;

/// One variant per registry operation.
///
/// Queries (`ListSources`, `ResourcesForTarget`, ...) never change state. `Create`,
/// `CreateChecked` and `Prune` are the mutations; because the actor handles one message at a
/// time, every query observes either all of a mutation or none of it, and `CreateChecked`
/// checks and creates without another request in between.
#[derive(Debug)]
pub enum RegistryRequest {
    ListSources {
        target: Target,
        respond_to: Response<Vec<ResourceSource>>,
    },
    ResourcesForTarget {
        target: Target,
        respond_to: Response<Vec<Resource>>,
    },
    ResourcesForProperty {
        target: Target,
        property: PropertyInfo,
        respond_to: Response<Vec<Resource>>,
    },
    CheckName {
        target: Target,
        source: ResourceSource,
        name: String,
        respond_to: Response<CollisionResult>,
    },
    Create {
        source: ResourceSource,
        name: String,
        value: ResourceValue,
        respond_to: Response<Resource>,
    },
    CreateChecked {
        target: Target,
        source: ResourceSource,
        name: String,
        value: ResourceValue,
        policy: OverridePolicy,
        respond_to: Response<CreateOutcome>,
    },
    Prune {
        respond_to: Response<usize>,
    },
    SuggestName {
        base: String,
        respond_to: Response<String>,
    },
    SuggestNameForType {
        ty: ValueType,
        respond_to: Response<String>,
    },
    CanCreate {
        respond_to: Response<bool>,
    },
}
