//! # Registry Configuration
//!
//! [`RegistryConfig`] collects the knobs of a [`RegistrySystem`](super::RegistrySystem).
//! Every field has a default, so a JSON document only needs the fields it changes:
//!
//! ```rust
//! use resource_registry::lifecycle::RegistryConfig;
//!
//! let config = RegistryConfig::from_json(r#"{
//!     "can_create_resources": false,
//!     "application_resources": [
//!         { "name": "Accent", "value": { "type": "color", "value": { "r": 0, "g": 120, "b": 215 } } }
//!     ]
//! }"#).unwrap();
//! assert!(!config.can_create_resources);
//! assert_eq!(config.channel_capacity, 32);
//! ```
use crate::model::{Resource, ResourceValue};
use crate::registry::{ResourceRegistry, DEFAULT_CHANNEL_CAPACITY, DEFAULT_EVENT_CAPACITY};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Errors raised while loading a configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Invalid registry configuration: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("{0} must be greater than zero")]
    ZeroCapacity(&'static str),
}

/// An extra application resource to seed the registry with.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SeedEntry {
    pub name: String,
    pub value: ResourceValue,
}

/// Settings for building and running a registry.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RegistryConfig {
    /// Depth of the request queue.
    pub channel_capacity: usize,
    /// Events buffered per subscriber.
    pub event_capacity: usize,
    pub can_create_resources: bool,
    /// Start with the built-in system brushes and colors.
    pub include_builtin_seed: bool,
    /// Appended to the application source after the built-in seed.
    pub application_resources: Vec<SeedEntry>,
}

impl Default for RegistryConfig {
    fn default() -> Self {
        Self {
            channel_capacity: DEFAULT_CHANNEL_CAPACITY,
            event_capacity: DEFAULT_EVENT_CAPACITY,
            can_create_resources: true,
            include_builtin_seed: true,
            application_resources: Vec::new(),
        }
    }
}

impl RegistryConfig {
    /// Parses and validates a JSON document.
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.channel_capacity == 0 {
            return Err(ConfigError::ZeroCapacity("channel_capacity"));
        }
        if self.event_capacity == 0 {
            return Err(ConfigError::ZeroCapacity("event_capacity"));
        }
        Ok(())
    }

    /// Builds the registry this configuration describes.
    pub fn build_registry(&self) -> ResourceRegistry {
        let mut registry = if self.include_builtin_seed {
            ResourceRegistry::with_builtin_seed()
        } else {
            ResourceRegistry::new()
        };
        let application = registry.application_source().clone();
        registry.seed(self.application_resources.iter().map(|entry| {
            Resource::new(application.clone(), entry.name.clone(), entry.value.clone())
        }));
        registry.set_can_create_resources(self.can_create_resources);
        registry
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{Color, Target};

    #[test]
    fn test_empty_document_is_default() {
        assert_eq!(RegistryConfig::from_json("{}").unwrap(), RegistryConfig::default());
    }

    #[test]
    fn test_zero_capacity_rejected() {
        let err = RegistryConfig::from_json(r#"{"channel_capacity": 0}"#).unwrap_err();
        assert!(matches!(err, ConfigError::ZeroCapacity("channel_capacity")));
        assert!(matches!(
            RegistryConfig::from_json("not json"),
            Err(ConfigError::Parse(_))
        ));
    }

    #[test]
    fn test_build_registry_applies_seed_and_switch() {
        let config = RegistryConfig {
            include_builtin_seed: false,
            can_create_resources: false,
            application_resources: vec![SeedEntry {
                name: "Accent".to_string(),
                value: Color::rgb(0, 120, 215).into(),
            }],
            ..RegistryConfig::default()
        };
        let registry = config.build_registry();

        let listed = registry.resources_for_target(&Target::new("Window"));
        assert_eq!(listed.len(), 1);
        assert_eq!(listed[0].name(), "Accent");
        assert_eq!(listed[0].source(), registry.application_source());
        assert!(!registry.can_create_resources());
        assert_eq!(registry.suggest_name("Accent").unwrap(), "Accent1");
    }
}
