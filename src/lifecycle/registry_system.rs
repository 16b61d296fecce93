use super::config::{ConfigError, RegistryConfig};
use crate::framework::{FrameworkError, RegistryActor, RegistryClient};
use tracing::{error, info};

/// Composition root for a running registry.
///
/// `RegistrySystem` is responsible for:
/// - **Construction**: building the [`ResourceRegistry`](crate::registry::ResourceRegistry) from a [`RegistryConfig`]
/// - **Lifecycle**: spawning the actor and shutting it down
/// - **Wiring**: handing the [`RegistryClient`] to whoever composes the UI, instead of
///   publishing it through a global
///
/// # Example
///
/// ```ignore
/// let system = RegistrySystem::new(RegistryConfig::default())?;
///
/// let sources = system.client.list_sources(target.clone()).await?;
/// let resource = system.client.create_resource(sources[1].clone(), "Accent", color).await?;
///
/// system.shutdown().await?;
/// ```
pub struct RegistrySystem {
    /// Client for the registry actor. Clone it for every consumer.
    pub client: RegistryClient,

    /// Task handle of the actor (used for graceful shutdown)
    handle: tokio::task::JoinHandle<()>,
}

impl RegistrySystem {
    /// Validates `config`, builds the registry and spawns its actor.
    ///
    /// Must be called from within a Tokio runtime.
    pub fn new(config: RegistryConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        let registry = config.build_registry();
        let (actor, client) =
            RegistryActor::new(registry, config.channel_capacity, config.event_capacity);
        let handle = tokio::spawn(actor.run());
        Ok(Self { client, handle })
    }

    /// Gracefully shuts down the registry.
    ///
    /// Dropping the system's client closes the request channel once every other clone is
    /// gone as well; the actor then drains its queue and exits. Clones held elsewhere keep
    /// the actor alive, so drop them first.
    pub async fn shutdown(self) -> Result<(), FrameworkError> {
        info!("Shutting down registry...");
        drop(self.client);

        if let Err(e) = self.handle.await {
            error!("Actor task failed: {:?}", e);
            return Err(FrameworkError::ActorPanicked(e.to_string()));
        }

        info!("Registry shutdown complete.");
        Ok(())
    }
}
