use resource_registry::clients::{CreateOutcome, OverridePolicy, ResourceProvider};
use resource_registry::framework::FrameworkError;
use resource_registry::lifecycle::{RegistryConfig, RegistrySystem, SeedEntry};
use resource_registry::model::{
    Color, GradientBrush, GradientStop, PropertyInfo, ResourceSource, ResourceValue, SolidBrush,
    SourceKind, Target, ValueType,
};
use resource_registry::registry::{CollisionResult, RegistryError};

fn empty_config() -> RegistryConfig {
    RegistryConfig {
        include_builtin_seed: false,
        ..RegistryConfig::default()
    }
}

/// Full end-to-end test through the real actor, starting from the built-in seed.
#[tokio::test]
async fn test_full_registry_system_integration() {
    let system = RegistrySystem::new(RegistryConfig::default()).expect("Failed to start");
    let button = Target::new("Button");

    let resources = system
        .client
        .resources_for_target(button.clone())
        .await
        .expect("Failed to list resources");
    assert_eq!(resources.len(), 15);
    assert_eq!(resources[0].name(), "ControlTextBrush");
    assert_eq!(resources[0].source().kind(), SourceKind::System);
    let last = resources.last().expect("Seed is not empty");
    assert_eq!(last.name(), "CustomHighlightBrush");
    assert_eq!(last.source().kind(), SourceKind::Application);
    assert_eq!(last.value(), &ResourceValue::from(SolidBrush::rgb(255, 165, 0)));

    // Idempotent without intervening creates
    let again = system
        .client
        .resources_for_target(button.clone())
        .await
        .expect("Failed to list resources");
    assert_eq!(resources, again);

    let sources = system
        .client
        .list_sources(button.clone())
        .await
        .expect("Failed to list sources");
    let application = sources[1].clone();
    let created = system
        .client
        .create_resource(application, "Accent", Color::rgb(0, 120, 215))
        .await
        .expect("Failed to create resource");
    assert_eq!(created.value_type(), ValueType::Color);

    let after = system
        .client
        .resources_for_target(button)
        .await
        .expect("Failed to list resources");
    assert_eq!(after.len(), 16);
    assert_eq!(after.last(), Some(&created));

    system.shutdown().await.expect("Shutdown failed");
}

#[tokio::test]
async fn test_sources_have_fixed_order_regardless_of_content() {
    for config in [RegistryConfig::default(), empty_config()] {
        let system = RegistrySystem::new(config).unwrap();
        let target = Target::new("Window");

        let sources = system.client.list_sources(target.clone()).await.unwrap();
        let kinds: Vec<_> = sources.iter().map(|s| s.kind()).collect();
        assert_eq!(
            kinds,
            vec![
                SourceKind::System,
                SourceKind::Application,
                SourceKind::SharedDictionary,
                SourceKind::Document,
                SourceKind::Object,
            ]
        );
        assert!(sources[4].is_visible_to(&target));

        // Same target, equal object source
        let repeated = system.client.list_sources(target).await.unwrap();
        assert_eq!(sources, repeated);

        system.shutdown().await.unwrap();
    }
}

#[tokio::test]
async fn test_object_resources_stay_with_their_target() {
    let system = RegistrySystem::new(RegistryConfig::default()).unwrap();
    let first = Target::new("Button");
    let second = Target::new("Button");

    system
        .client
        .create_resource(ResourceSource::for_target(&first), "Local", SolidBrush::rgb(9, 9, 9))
        .await
        .unwrap();

    let own = system.client.resources_for_target(first.clone()).await.unwrap();
    assert!(own.iter().any(|r| r.name() == "Local"));

    let other = system.client.resources_for_target(second.clone()).await.unwrap();
    assert!(other.iter().all(|r| r.name() != "Local"));

    // The name is only taken in the first target's scope.
    let verdict = system
        .client
        .check_name_collision(second.clone(), ResourceSource::for_target(&second), "Local")
        .await
        .unwrap();
    assert_eq!(verdict, CollisionResult::Clear);

    system.shutdown().await.unwrap();
}

#[tokio::test]
async fn test_collision_severity_follows_scope() {
    let system = RegistrySystem::new(RegistryConfig::default()).unwrap();
    let button = Target::new("Button");
    let sources = system.client.list_sources(button.clone()).await.unwrap();
    let (system_source, application, document) =
        (sources[0].clone(), sources[1].clone(), sources[3].clone());

    let same_scope = system
        .client
        .check_name_collision(button.clone(), system_source, "HighlightBrush")
        .await
        .unwrap();
    assert_eq!(same_scope, CollisionResult::Error("Name in use".to_string()));

    let shadowing = system
        .client
        .check_name_collision(button.clone(), application.clone(), "HighlightBrush")
        .await
        .unwrap();
    assert_eq!(
        shadowing,
        CollisionResult::Warning("Resource would override another resource".to_string())
    );

    // Application resources are less specific than the document.
    let from_document = system
        .client
        .check_name_collision(button.clone(), document, "CustomHighlightBrush")
        .await
        .unwrap();
    assert!(from_document.is_warning());

    let fresh = system
        .client
        .check_name_collision(button.clone(), application, "NeverSeenBrush")
        .await
        .unwrap();
    assert!(fresh.is_clear());

    let invalid = system
        .client
        .check_name_collision(button, sources[0].clone(), "   ")
        .await;
    assert!(matches!(
        invalid,
        Err(FrameworkError::Registry(RegistryError::InvalidArgument(_)))
    ));

    system.shutdown().await.unwrap();
}

#[tokio::test]
async fn test_suggested_names_never_collide() {
    let system = RegistrySystem::new(RegistryConfig::default()).unwrap();
    let target = Target::new("Button");
    let application = system.client.list_sources(target.clone()).await.unwrap()[1].clone();

    let first = system.client.suggest_name("Color").await.unwrap();
    assert_eq!(first, "Color1");
    let verdict = system
        .client
        .check_name_collision(target, application.clone(), first.clone())
        .await
        .unwrap();
    assert!(verdict.is_clear());

    system
        .client
        .create_resource(application, first, Color::rgb(1, 1, 1))
        .await
        .unwrap();
    assert_eq!(system.client.suggest_name("Color").await.unwrap(), "Color2");
    assert_eq!(
        system
            .client
            .suggest_name_for_type(ValueType::SolidBrush)
            .await
            .unwrap(),
        "SolidBrush1"
    );

    system.shutdown().await.unwrap();
}

#[tokio::test]
async fn test_property_listing_is_assignable_subset() {
    let config = RegistryConfig {
        application_resources: vec![SeedEntry {
            name: "Sunset".to_string(),
            value: GradientBrush {
                stops: vec![
                    GradientStop {
                        color: Color::rgb(255, 94, 77),
                        offset: 0.0,
                    },
                    GradientStop {
                        color: Color::rgb(255, 195, 113),
                        offset: 1.0,
                    },
                ],
            }
            .into(),
        }],
        ..RegistryConfig::default()
    };
    let system = RegistrySystem::new(config).unwrap();
    let target = Target::new("Border");
    let visible = system.client.resources_for_target(target.clone()).await.unwrap();

    for (property, expected) in [
        (PropertyInfo::new("Background", ValueType::Brush), 14),
        (PropertyInfo::new("Fill", ValueType::SolidBrush), 13),
        (PropertyInfo::new("Tint", ValueType::Color), 2),
        (PropertyInfo::new("Tag", ValueType::Object), 16),
    ] {
        let declared = property.real_type().unwrap();
        let listed = system
            .client
            .resources_for_property(target.clone(), property)
            .await
            .unwrap();
        assert_eq!(listed.len(), expected, "{declared}");
        assert!(listed.iter().all(|r| visible.contains(r)));
        assert!(listed
            .iter()
            .all(|r| declared.is_assignable_from(r.value_type())));
    }

    let untyped = system
        .client
        .resources_for_property(target, PropertyInfo::event("Click"))
        .await;
    assert!(matches!(untyped, Err(FrameworkError::Registry(_))));

    system.shutdown().await.unwrap();
}

#[tokio::test]
async fn test_creation_can_be_disabled() {
    let config = RegistryConfig::from_json(r#"{ "can_create_resources": false }"#).unwrap();
    let system = RegistrySystem::new(config).unwrap();
    let application = system
        .client
        .list_sources(Target::new("Button"))
        .await
        .unwrap()[1]
        .clone();

    assert!(!system.client.can_create_resources().await.unwrap());
    let result = system.client.create_resource(application, "Accent", 1.0).await;
    assert!(matches!(
        result,
        Err(FrameworkError::Registry(RegistryError::InvalidArgument(_)))
    ));

    system.shutdown().await.unwrap();
}

#[tokio::test]
async fn test_dead_target_source_rejected() {
    let system = RegistrySystem::new(empty_config()).unwrap();
    let source = {
        let transient = Target::new("Popup");
        ResourceSource::for_target(&transient)
    };

    let result = system.client.create_resource(source, "Ghost", true).await;
    assert!(matches!(
        result,
        Err(FrameworkError::Registry(RegistryError::InvalidArgument(_)))
    ));

    system.shutdown().await.unwrap();
}

#[tokio::test]
async fn test_invalid_config_rejected() {
    let config = RegistryConfig {
        event_capacity: 0,
        ..RegistryConfig::default()
    };
    assert!(RegistrySystem::new(config).is_err());
}

#[tokio::test]
async fn test_racing_checked_creates_yield_one_resource() {
    let system = RegistrySystem::new(RegistryConfig::default()).unwrap();
    let button = Target::new("Button");
    let application = system.client.list_sources(button.clone()).await.unwrap()[1].clone();
    let first = system.client.clone();
    let second = system.client.clone();

    let (a, b) = tokio::join!(
        first.create_checked(
            &button,
            application.clone(),
            "Dup",
            SolidBrush::rgb(1, 1, 1).into(),
            OverridePolicy::Deny,
        ),
        second.create_checked(
            &button,
            application.clone(),
            "Dup",
            SolidBrush::rgb(2, 2, 2).into(),
            OverridePolicy::Deny,
        ),
    );
    let outcomes = [a.unwrap(), b.unwrap()];
    let created = outcomes
        .iter()
        .filter(|o| matches!(o, CreateOutcome::Created { .. }))
        .count();
    assert_eq!(created, 1);
    assert!(outcomes.contains(&CreateOutcome::Rejected(CollisionResult::name_in_use())));

    let listed = system.client.resources_for_target(button).await.unwrap();
    let duplicates = listed
        .iter()
        .filter(|r| r.source() == &application && r.name() == "Dup")
        .count();
    assert_eq!(duplicates, 1);

    drop((first, second));
    system.shutdown().await.unwrap();
}

#[tokio::test]
async fn test_dropped_targets_release_their_sources() {
    let system = RegistrySystem::new(empty_config()).unwrap();
    for _ in 0..1000 {
        let transient = Target::new("Popup");
        system
            .client
            .create_resource(ResourceSource::for_target(&transient), "Local", true)
            .await
            .unwrap();
    }

    // Creates prune as they go; only the last dropped target is still registered.
    assert_eq!(system.client.prune().await.unwrap(), 1);
    let visible = system
        .client
        .resources_for_target(Target::new("Popup"))
        .await
        .unwrap();
    assert!(visible.is_empty());

    system.shutdown().await.unwrap();
}
