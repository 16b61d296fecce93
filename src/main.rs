//! # Resource Registry Demo
//!
//! Walks through what a property inspector does with the registry:
//! 1. Starting a [`RegistrySystem`] and subscribing to changes.
//! 2. Listing the scopes and resources a `Button` can see.
//! 3. Creating a brush under a suggested name, then one that shadows a system brush.
//! 4. Assigning the new brush to the button's `Background`.

use resource_registry::clients::{CreateOutcome, OverridePolicy, ResourceProvider};
use resource_registry::framework::RegistryEvent;
use resource_registry::lifecycle::{setup_tracing, RegistryConfig, RegistrySystem};
use resource_registry::model::{PropertyInfo, PropertyValues, SolidBrush, Target, ValueType};
use tracing::{info, warn, Instrument};

#[tokio::main]
async fn main() -> Result<(), String> {
    setup_tracing();

    info!("Starting resource registry demo");

    let system = RegistrySystem::new(RegistryConfig::default()).map_err(|e| e.to_string())?;
    let mut changes = system.client.subscribe();

    let button = Target::new("Button");
    let background = PropertyInfo::new("Background", ValueType::Brush);

    let sources = system
        .client
        .resource_sources_for_property(&button, &background)
        .await
        .map_err(|e| e.to_string())?;
    for source in &sources {
        info!(source = %source, kind = ?source.kind(), "Visible source");
    }

    let brushes = system
        .client
        .assignable_resources(&button, &background)
        .await
        .map_err(|e| e.to_string())?;
    info!(count = brushes.len(), "Resources assignable to Background");

    let application = sources
        .iter()
        .find(|source| source.name() == "App resources")
        .cloned()
        .ok_or("application source missing")?;

    let span = tracing::info_span!("new_brush");
    let created = async {
        let name = system
            .client
            .suggest_name_for_property(&background)
            .await
            .map_err(|e| e.to_string())?;
        info!(%name, "Suggested name");
        system
            .client
            .create_checked(
                &button,
                application.clone(),
                &name,
                SolidBrush::rgb(30, 144, 255).into(),
                OverridePolicy::Deny,
            )
            .await
            .map_err(|e| e.to_string())
    }
    .instrument(span)
    .await?;

    let resource = match created {
        CreateOutcome::Created { resource, .. } => resource,
        CreateOutcome::Rejected(verdict) => return Err(format!("create rejected: {verdict:?}")),
    };

    // Shadowing a system brush is allowed but reported.
    match system
        .client
        .create_checked(
            &button,
            application,
            "HighlightBrush",
            SolidBrush::rgb(255, 0, 255).into(),
            OverridePolicy::Allow,
        )
        .await
        .map_err(|e| e.to_string())?
    {
        CreateOutcome::Created {
            warning: Some(message),
            ..
        } => warn!(%message, "HighlightBrush now shadows the system brush"),
        outcome => info!(?outcome, "HighlightBrush created"),
    }

    while let Some(RegistryEvent::ResourceCreated(created)) = changes.try_next() {
        info!(source = %created.source(), name = created.name(), "Change notification");
    }
    drop(changes);

    let mut values = PropertyValues::new();
    values
        .set(&button, &background, resource.value().clone())
        .map_err(|e| e.to_string())?;
    info!(
        property = background.name(),
        resource = resource.name(),
        "Assigned resource to property"
    );

    system.shutdown().await.map_err(|e| e.to_string())?;

    info!("Demo completed successfully");
    Ok(())
}
