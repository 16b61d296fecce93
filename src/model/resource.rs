use super::source::ResourceSource;
use super::value::{ResourceValue, ValueType};

/// A named, typed value owned by a [`ResourceSource`].
#[derive(Debug, Clone, PartialEq)]
pub struct Resource {
    source: ResourceSource,
    name: String,
    value: ResourceValue,
}

impl Resource {
    /// Creates a resource from any concrete payload convertible into a [`ResourceValue`].
    pub fn new(
        source: ResourceSource,
        name: impl Into<String>,
        value: impl Into<ResourceValue>,
    ) -> Self {
        Self {
            source,
            name: name.into(),
            value: value.into(),
        }
    }

    pub fn source(&self) -> &ResourceSource {
        &self.source
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn value(&self) -> &ResourceValue {
        &self.value
    }

    pub fn value_type(&self) -> ValueType {
        self.value.value_type()
    }
}
