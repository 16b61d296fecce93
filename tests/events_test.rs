use resource_registry::framework::RegistryEvent;
use resource_registry::lifecycle::{RegistryConfig, RegistrySystem};
use resource_registry::model::{Color, Target};

#[tokio::test]
async fn test_subscribers_see_creates() {
    let system = RegistrySystem::new(RegistryConfig::default()).unwrap();
    let mut subscription = system.client.subscribe();
    let application = system
        .client
        .list_sources(Target::new("Button"))
        .await
        .unwrap()[1]
        .clone();

    let created = system
        .client
        .create_resource(application, "Accent", Color::rgb(0, 120, 215))
        .await
        .unwrap();

    assert_eq!(
        subscription.next().await,
        Some(RegistryEvent::ResourceCreated(created))
    );
    assert_eq!(subscription.try_next(), None);

    system.shutdown().await.unwrap();
    assert_eq!(subscription.next().await, None);
}

#[tokio::test]
async fn test_failed_create_is_not_published() {
    let system = RegistrySystem::new(RegistryConfig::default()).unwrap();
    let mut subscription = system.client.subscribe();
    let application = system
        .client
        .list_sources(Target::new("Button"))
        .await
        .unwrap()[1]
        .clone();

    assert!(system
        .client
        .create_resource(application, "  ", Color::rgb(0, 0, 0))
        .await
        .is_err());
    assert_eq!(subscription.try_next(), None);

    system.shutdown().await.unwrap();
}

#[tokio::test]
async fn test_late_subscriber_misses_earlier_events() {
    let system = RegistrySystem::new(RegistryConfig::default()).unwrap();
    let application = system
        .client
        .list_sources(Target::new("Button"))
        .await
        .unwrap()[1]
        .clone();
    system
        .client
        .create_resource(application.clone(), "Before", true)
        .await
        .unwrap();

    let mut subscription = system.client.subscribe();
    let after = system
        .client
        .create_resource(application, "After", false)
        .await
        .unwrap();
    assert_eq!(
        subscription.next().await,
        Some(RegistryEvent::ResourceCreated(after))
    );

    drop(subscription);
    system.shutdown().await.unwrap();
}
