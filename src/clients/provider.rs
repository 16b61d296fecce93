//! # Resource Provider
//!
//! The interface a property inspector consumes. It mirrors the registry operations and adds
//! provided methods that compose them. [`ResourceProvider::create_checked`] runs the collision
//! check and the create as one operation, so no other caller can take the name in between.
use crate::framework::{FrameworkError, RegistryClient};
use crate::model::{PropertyInfo, Resource, ResourceSource, ResourceValue, Target};
use crate::registry::CollisionResult;
use async_trait::async_trait;
use tracing::{info, instrument};

pub use crate::registry::{CreateOutcome, OverridePolicy};

/// Async access to a resource registry.
///
/// Implementors provide the primitive operations; the grouped flows come for free.
///
/// # Example
///
/// ```rust
/// use resource_registry::clients::{CreateOutcome, OverridePolicy, ResourceProvider};
/// use resource_registry::lifecycle::{RegistryConfig, RegistrySystem};
/// use resource_registry::model::{SolidBrush, Target};
///
/// #[tokio::main]
/// async fn main() {
///     let system = RegistrySystem::new(RegistryConfig::default()).unwrap();
///     let button = Target::new("Button");
///     let sources = system.client.resource_sources(&button).await.unwrap();
///
///     // "HighlightBrush" exists in System; creating it in Application only warns.
///     let outcome = system
///         .client
///         .create_checked(&button, sources[1].clone(), "HighlightBrush", SolidBrush::rgb(1, 1, 1).into(), OverridePolicy::Allow)
///         .await
///         .unwrap();
///     assert!(matches!(outcome, CreateOutcome::Created { warning: Some(_), .. }));
///
///     system.shutdown().await.unwrap();
/// }
/// ```
#[async_trait]
pub trait ResourceProvider: Send + Sync {
    async fn can_create(&self) -> Result<bool, FrameworkError>;

    async fn resource_sources(
        &self,
        target: &Target,
    ) -> Result<Vec<ResourceSource>, FrameworkError>;

    async fn visible_resources(&self, target: &Target) -> Result<Vec<Resource>, FrameworkError>;

    async fn assignable_resources(
        &self,
        target: &Target,
        property: &PropertyInfo,
    ) -> Result<Vec<Resource>, FrameworkError>;

    async fn check_name(
        &self,
        target: &Target,
        source: &ResourceSource,
        name: &str,
    ) -> Result<CollisionResult, FrameworkError>;

    async fn create(
        &self,
        source: ResourceSource,
        name: &str,
        value: ResourceValue,
    ) -> Result<Resource, FrameworkError>;

    async fn suggest_resource_name(&self, base: &str) -> Result<String, FrameworkError>;

    /// Sources offered for `property`: the target's sources, once the property is known to
    /// take values.
    async fn resource_sources_for_property(
        &self,
        target: &Target,
        property: &PropertyInfo,
    ) -> Result<Vec<ResourceSource>, FrameworkError> {
        property.require_type()?;
        self.resource_sources(target).await
    }

    /// Suggests a name derived from the property's declared type, e.g. `SolidBrush1`.
    async fn suggest_name_for_property(
        &self,
        property: &PropertyInfo,
    ) -> Result<String, FrameworkError> {
        let ty = property.require_type()?;
        self.suggest_resource_name(ty.name()).await
    }

    /// Checks `name` against `source` and its less specific scopes, then creates.
    ///
    /// Same-scope collisions are always rejected. Override warnings are rejected under
    /// [`OverridePolicy::Deny`] and reported alongside the created resource otherwise.
    /// Implementations must make the check and the create atomic.
    async fn create_checked(
        &self,
        target: &Target,
        source: ResourceSource,
        name: &str,
        value: ResourceValue,
        policy: OverridePolicy,
    ) -> Result<CreateOutcome, FrameworkError>;
}

#[async_trait]
impl ResourceProvider for RegistryClient {
    async fn can_create(&self) -> Result<bool, FrameworkError> {
        self.can_create_resources().await
    }

    async fn resource_sources(
        &self,
        target: &Target,
    ) -> Result<Vec<ResourceSource>, FrameworkError> {
        self.list_sources(target.clone()).await
    }

    async fn visible_resources(&self, target: &Target) -> Result<Vec<Resource>, FrameworkError> {
        self.resources_for_target(target.clone()).await
    }

    async fn assignable_resources(
        &self,
        target: &Target,
        property: &PropertyInfo,
    ) -> Result<Vec<Resource>, FrameworkError> {
        self.resources_for_property(target.clone(), property.clone())
            .await
    }

    async fn check_name(
        &self,
        target: &Target,
        source: &ResourceSource,
        name: &str,
    ) -> Result<CollisionResult, FrameworkError> {
        self.check_name_collision(target.clone(), source.clone(), name)
            .await
    }

    async fn create(
        &self,
        source: ResourceSource,
        name: &str,
        value: ResourceValue,
    ) -> Result<Resource, FrameworkError> {
        self.create_resource(source, name, value).await
    }

    async fn suggest_resource_name(&self, base: &str) -> Result<String, FrameworkError> {
        self.suggest_name(base).await
    }

    #[instrument(skip(self, target, value))]
    async fn create_checked(
        &self,
        target: &Target,
        source: ResourceSource,
        name: &str,
        value: ResourceValue,
        policy: OverridePolicy,
    ) -> Result<CreateOutcome, FrameworkError> {
        let outcome = self
            .create_resource_checked(target.clone(), source, name, value, policy)
            .await?;
        if let CreateOutcome::Created { warning, .. } = &outcome {
            info!(overrides = warning.is_some(), "Created checked resource");
        }
        Ok(outcome)
    }
}
