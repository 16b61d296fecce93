//! # Registry Client
//!
//! This module defines the client half of the registry actor.

use super::error::FrameworkError;
use super::events::{RegistryEvent, Subscription};
use super::message::RegistryRequest;
use crate::model::{PropertyInfo, Resource, ResourceSource, ResourceValue, Target, ValueType};
use crate::registry::{CollisionResult, CreateOutcome, OverridePolicy};
use tokio::sync::{broadcast, mpsc, oneshot};

/// ## RegistryClient
///
/// The `RegistryClient` provides an async API for a running
/// [`RegistryActor`](super::RegistryActor). Every method sends one request over a Tokio mpsc
/// channel and awaits the answer on a oneshot channel.
///
/// * **Cloneable** - holds only channel senders, so cloning is inexpensive.
/// * **Ordered** - requests from one client are applied in the order they were sent.
/// * **Observable** - [`subscribe`](Self::subscribe) hands out change notifications.
#[derive(Clone, Debug)]
pub struct RegistryClient {
    sender: mpsc::Sender<RegistryRequest>,
    events: broadcast::Sender<RegistryEvent>,
}

impl RegistryClient {
    pub fn new(
        sender: mpsc::Sender<RegistryRequest>,
        events: broadcast::Sender<RegistryEvent>,
    ) -> Self {
        Self { sender, events }
    }

    async fn request<T>(
        &self,
        build: impl FnOnce(oneshot::Sender<Result<T, FrameworkError>>) -> RegistryRequest,
    ) -> Result<T, FrameworkError> {
        let (respond_to, response) = oneshot::channel();
        self.sender
            .send(build(respond_to))
            .await
            .map_err(|_| FrameworkError::ActorClosed)?;
        response.await.map_err(|_| FrameworkError::ActorDropped)?
    }

    pub async fn list_sources(
        &self,
        target: Target,
    ) -> Result<Vec<ResourceSource>, FrameworkError> {
        self.request(|respond_to| RegistryRequest::ListSources { target, respond_to })
            .await
    }

    pub async fn resources_for_target(
        &self,
        target: Target,
    ) -> Result<Vec<Resource>, FrameworkError> {
        self.request(|respond_to| RegistryRequest::ResourcesForTarget { target, respond_to })
            .await
    }

    pub async fn resources_for_property(
        &self,
        target: Target,
        property: PropertyInfo,
    ) -> Result<Vec<Resource>, FrameworkError> {
        self.request(|respond_to| RegistryRequest::ResourcesForProperty {
            target,
            property,
            respond_to,
        })
        .await
    }

    pub async fn check_name_collision(
        &self,
        target: Target,
        source: ResourceSource,
        name: impl Into<String>,
    ) -> Result<CollisionResult, FrameworkError> {
        let name = name.into();
        self.request(|respond_to| RegistryRequest::CheckName {
            target,
            source,
            name,
            respond_to,
        })
        .await
    }

    pub async fn create_resource(
        &self,
        source: ResourceSource,
        name: impl Into<String>,
        value: impl Into<ResourceValue>,
    ) -> Result<Resource, FrameworkError> {
        let name = name.into();
        let value = value.into();
        self.request(|respond_to| RegistryRequest::Create {
            source,
            name,
            value,
            respond_to,
        })
        .await
    }

    /// Checks `name` and creates it in one step; no other request runs in between.
    pub async fn create_resource_checked(
        &self,
        target: Target,
        source: ResourceSource,
        name: impl Into<String>,
        value: impl Into<ResourceValue>,
        policy: OverridePolicy,
    ) -> Result<CreateOutcome, FrameworkError> {
        let name = name.into();
        let value = value.into();
        self.request(|respond_to| RegistryRequest::CreateChecked {
            target,
            source,
            name,
            value,
            policy,
            respond_to,
        })
        .await
    }

    /// Releases object sources whose target has been dropped. Returns how many went.
    pub async fn prune(&self) -> Result<usize, FrameworkError> {
        self.request(|respond_to| RegistryRequest::Prune { respond_to })
            .await
    }

    pub async fn suggest_name(&self, base: impl Into<String>) -> Result<String, FrameworkError> {
        let base = base.into();
        self.request(|respond_to| RegistryRequest::SuggestName { base, respond_to })
            .await
    }

    pub async fn suggest_name_for_type(&self, ty: ValueType) -> Result<String, FrameworkError> {
        self.request(|respond_to| RegistryRequest::SuggestNameForType { ty, respond_to })
            .await
    }

    pub async fn can_create_resources(&self) -> Result<bool, FrameworkError> {
        self.request(|respond_to| RegistryRequest::CanCreate { respond_to })
            .await
    }

    /// Starts receiving change notifications. Drop the returned guard to stop.
    ///
    /// Only events published after this call are delivered.
    pub fn subscribe(&self) -> Subscription {
        Subscription::new(self.events.subscribe())
    }
}
