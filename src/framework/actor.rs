//! # Registry Actor
//!
//! This module defines the [`RegistryActor`], the server half of the registry. It owns the
//! [`ResourceRegistry`] and the receiving end of the request channel, and processes requests
//! strictly one at a time.

use super::client::RegistryClient;
use super::events::RegistryEvent;
use super::message::RegistryRequest;
use crate::registry::{CreateOutcome, ResourceRegistry};
use tokio::sync::{broadcast, mpsc};
use tracing::{debug, info, warn};

/// The actor that owns the resource registry.
///
/// # Concurrency Model
///
/// The registry itself has no locks. Exclusive ownership inside this task is what makes it
/// safe: any number of [`RegistryClient`] clones may send requests concurrently, but they
/// are queued on the channel and applied in arrival order. A create is therefore a single
/// atomic append from the point of view of every other request.
///
/// # Usage Pattern
///
/// ```rust
/// use resource_registry::framework::RegistryActor;
/// use resource_registry::model::Target;
/// use resource_registry::registry::ResourceRegistry;
///
/// #[tokio::main]
/// async fn main() {
///     // 1. Create
///     let (actor, client) = RegistryActor::new(ResourceRegistry::with_builtin_seed(), 8, 8);
///
///     // 2. Run
///     tokio::spawn(actor.run());
///
///     // 3. Use
///     let sources = client.list_sources(Target::new("Button")).await.unwrap();
///     assert_eq!(sources.len(), 5);
/// }
/// ```
pub struct RegistryActor {
    receiver: mpsc::Receiver<RegistryRequest>,
    registry: ResourceRegistry,
    events: broadcast::Sender<RegistryEvent>,
}

impl RegistryActor {
    /// Creates the actor and its client.
    ///
    /// # Arguments
    ///
    /// * `registry` - The store the actor takes ownership of.
    /// * `buffer_size` - Capacity of the request channel. When full, clients wait for space.
    /// * `event_capacity` - Events buffered per subscriber before it starts lagging.
    ///
    /// Both capacities must be non-zero.
    pub fn new(
        registry: ResourceRegistry,
        buffer_size: usize,
        event_capacity: usize,
    ) -> (Self, RegistryClient) {
        let (sender, receiver) = mpsc::channel(buffer_size);
        let (events, _) = broadcast::channel(event_capacity);
        let client = RegistryClient::new(sender, events.clone());
        let actor = Self {
            receiver,
            registry,
            events,
        };
        (actor, client)
    }

    /// Runs the event loop until every client has been dropped.
    pub async fn run(mut self) {
        info!(
            sources = self.registry.source_count(),
            size = self.registry.len(),
            "Registry started"
        );

        while let Some(msg) = self.receiver.recv().await {
            self.handle(msg);
        }

        info!(size = self.registry.len(), "Shutdown");
    }

    fn handle(&mut self, msg: RegistryRequest) {
        match msg {
            RegistryRequest::ListSources { target, respond_to } => {
                debug!(%target, "ListSources");
                let _ = respond_to.send(Ok(self.registry.list_sources(&target)));
            }
            RegistryRequest::ResourcesForTarget { target, respond_to } => {
                let resources = self.registry.resources_for_target(&target);
                debug!(%target, found = resources.len(), "ResourcesForTarget");
                let _ = respond_to.send(Ok(resources));
            }
            RegistryRequest::ResourcesForProperty {
                target,
                property,
                respond_to,
            } => {
                let result = self.registry.resources_for_property(&target, &property);
                let property = property.name();
                match &result {
                    Ok(resources) => {
                        debug!(%target, property, found = resources.len(), "ResourcesForProperty")
                    }
                    Err(e) => warn!(%target, property, error = %e, "ResourcesForProperty failed"),
                }
                let _ = respond_to.send(result.map_err(Into::into));
            }
            RegistryRequest::CheckName {
                target,
                source,
                name,
                respond_to,
            } => {
                let result = self.registry.check_name_collision(&target, &source, &name);
                match &result {
                    Ok(verdict) => debug!(%source, %name, ?verdict, "CheckName"),
                    Err(e) => warn!(%source, %name, error = %e, "CheckName failed"),
                }
                let _ = respond_to.send(result.map_err(Into::into));
            }
            RegistryRequest::Create {
                source,
                name,
                value,
                respond_to,
            } => {
                debug!(%source, %name, ?value, "Create");
                match self.registry.create_resource(source, name, value) {
                    Ok(resource) => {
                        info!(
                            source = %resource.source(),
                            name = resource.name(),
                            size = self.registry.len(),
                            "Created"
                        );
                        // No subscribers is fine.
                        let _ = self
                            .events
                            .send(RegistryEvent::ResourceCreated(resource.clone()));
                        let _ = respond_to.send(Ok(resource));
                        self.prune();
                    }
                    Err(e) => {
                        warn!(error = %e, "Create failed");
                        let _ = respond_to.send(Err(e.into()));
                    }
                }
            }
            RegistryRequest::CreateChecked {
                target,
                source,
                name,
                value,
                policy,
                respond_to,
            } => {
                debug!(%target, %source, %name, ?value, ?policy, "CreateChecked");
                let result = self
                    .registry
                    .create_checked(&target, source, name, value, policy);
                match &result {
                    Ok(CreateOutcome::Created { resource, warning }) => {
                        info!(
                            source = %resource.source(),
                            name = resource.name(),
                            overrides = warning.is_some(),
                            size = self.registry.len(),
                            "Created"
                        );
                        let _ = self
                            .events
                            .send(RegistryEvent::ResourceCreated(resource.clone()));
                        self.prune();
                    }
                    Ok(CreateOutcome::Rejected(verdict)) => {
                        debug!(?verdict, "CreateChecked rejected")
                    }
                    Err(e) => warn!(error = %e, "CreateChecked failed"),
                }
                let _ = respond_to.send(result.map_err(Into::into));
            }
            RegistryRequest::Prune { respond_to } => {
                let _ = respond_to.send(Ok(self.prune()));
            }
            RegistryRequest::SuggestName { base, respond_to } => {
                let result = self.registry.suggest_name(&base);
                debug!(%base, ?result, "SuggestName");
                let _ = respond_to.send(result.map_err(Into::into));
            }
            RegistryRequest::SuggestNameForType { ty, respond_to } => {
                let result = self.registry.suggest_name_for_type(ty);
                debug!(%ty, ?result, "SuggestNameForType");
                let _ = respond_to.send(result.map_err(Into::into));
            }
            RegistryRequest::CanCreate { respond_to } => {
                let _ = respond_to.send(Ok(self.registry.can_create_resources()));
            }
        }
    }

    /// Releases object sources whose target is gone. Runs after every create.
    fn prune(&mut self) -> usize {
        let removed = self.registry.prune();
        if removed > 0 {
            debug!(removed, sources = self.registry.source_count(), "Pruned");
        }
        removed
    }
}
