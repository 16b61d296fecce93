//! Property descriptors and per-target property values.
//!
//! A [`PropertyInfo`] resolves its [`PropertyKind`] once, when it is built. Everything
//! downstream (resource filtering, value assignment) matches on that tag instead of
//! inspecting values at access time.
use super::target::{Target, TargetRef};
use super::value::{ResourceValue, ValueType};
use crate::registry::RegistryError;
use std::collections::HashMap;

/// What a property holds.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PropertyKind {
    /// A value property with a declared type.
    Value(ValueType),
    /// An event hook. Events carry no underlying value type and cannot take resources.
    Event,
}

/// Describes one property of an inspected object.
#[derive(Debug, Clone, PartialEq)]
pub struct PropertyInfo {
    name: String,
    kind: PropertyKind,
}

impl PropertyInfo {
    pub fn new(name: impl Into<String>, declared: ValueType) -> Self {
        Self {
            name: name.into(),
            kind: PropertyKind::Value(declared),
        }
    }

    pub fn event(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            kind: PropertyKind::Event,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn kind(&self) -> PropertyKind {
        self.kind
    }

    /// The declared type, `None` for events.
    pub fn real_type(&self) -> Option<ValueType> {
        match self.kind {
            PropertyKind::Value(ty) => Some(ty),
            PropertyKind::Event => None,
        }
    }

    /// Same as [`real_type`](Self::real_type), but reports untyped properties as
    /// [`RegistryError::InvalidArgument`].
    pub fn require_type(&self) -> Result<ValueType, RegistryError> {
        self.real_type().ok_or_else(|| {
            RegistryError::InvalidArgument(format!(
                "property '{}' has no underlying type",
                self.name
            ))
        })
    }

    pub fn accepts(&self, value: &ResourceValue) -> bool {
        self.real_type()
            .is_some_and(|ty| ty.is_assignable_from(value.value_type()))
    }
}

/// Explicit get/set store for property values, keyed by target identity.
///
/// Holds targets weakly; call [`prune`](Self::prune) to drop entries of unreachable targets.
#[derive(Debug, Default)]
pub struct PropertyValues {
    values: HashMap<(TargetRef, String), ResourceValue>,
}

impl PropertyValues {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, target: &Target, property: &PropertyInfo) -> Option<&ResourceValue> {
        self.values
            .get(&(target.downgrade(), property.name().to_string()))
    }

    /// Stores `value`, returning the previous one.
    ///
    /// Fails with [`RegistryError::InvalidArgument`] when the property is an event or the
    /// value's type is not assignable to the declared type.
    pub fn set(
        &mut self,
        target: &Target,
        property: &PropertyInfo,
        value: ResourceValue,
    ) -> Result<Option<ResourceValue>, RegistryError> {
        let declared = property.require_type()?;
        if !declared.is_assignable_from(value.value_type()) {
            return Err(RegistryError::InvalidArgument(format!(
                "a {} value cannot be assigned to '{}' ({})",
                value.value_type(),
                property.name(),
                declared
            )));
        }
        Ok(self
            .values
            .insert((target.downgrade(), property.name().to_string()), value))
    }

    /// Removes values whose target is no longer reachable. Returns how many were dropped.
    pub fn prune(&mut self) -> usize {
        let before = self.values.len();
        self.values.retain(|(target, _), _| target.is_alive());
        before - self.values.len()
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}
