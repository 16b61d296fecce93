//! Typed resource payloads.
//!
//! Every resource carries a [`ResourceValue`]. Values are built from their concrete payload
//! types ([`Color`], [`SolidBrush`], ...) and erased to the enum when they enter the registry.
//! The [`ValueType`] lattice answers the "can this resource feed that property?" question
//! without any runtime type introspection.
use serde::{Deserialize, Serialize};
use std::fmt::Display;

/// The declared type of a resource value or property.
///
/// `Object` is the root of the lattice. Brush types share the `Brush` parent so that a
/// property declared as `Brush` accepts both solid and gradient brushes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ValueType {
    Object,
    Brush,
    SolidBrush,
    GradientBrush,
    Color,
    Text,
    Number,
    Flag,
}

impl ValueType {
    /// Short type name, used as the base for suggested resource names.
    pub fn name(self) -> &'static str {
        match self {
            ValueType::Object => "Object",
            ValueType::Brush => "Brush",
            ValueType::SolidBrush => "SolidBrush",
            ValueType::GradientBrush => "GradientBrush",
            ValueType::Color => "Color",
            ValueType::Text => "Text",
            ValueType::Number => "Number",
            ValueType::Flag => "Flag",
        }
    }

    /// The direct parent in the lattice, `None` for `Object`.
    pub fn base(self) -> Option<ValueType> {
        match self {
            ValueType::Object => None,
            ValueType::SolidBrush | ValueType::GradientBrush => Some(ValueType::Brush),
            ValueType::Brush
            | ValueType::Color
            | ValueType::Text
            | ValueType::Number
            | ValueType::Flag => Some(ValueType::Object),
        }
    }

    /// Returns true when a value of type `other` may be stored where `self` is declared.
    ///
    /// Covariant: a subtype satisfies any of its ancestors.
    pub fn is_assignable_from(self, other: ValueType) -> bool {
        let mut current = Some(other);
        while let Some(ty) = current {
            if ty == self {
                return true;
            }
            current = ty.base();
        }
        false
    }
}

impl Display for ValueType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

fn opaque() -> u8 {
    255
}

/// An RGBA color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    #[serde(default = "opaque")]
    pub a: u8,
}

impl Color {
    /// Fully opaque color.
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: 255 }
    }

    pub const fn rgba(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }
}

/// A brush painting a single color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SolidBrush {
    pub color: Color,
}

impl SolidBrush {
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self {
            color: Color::rgb(r, g, b),
        }
    }

    pub const fn rgba(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self {
            color: Color::rgba(r, g, b, a),
        }
    }
}

/// A single stop of a [`GradientBrush`]. `offset` is in `0.0..=1.0`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GradientStop {
    pub color: Color,
    pub offset: f64,
}

/// A brush interpolating between color stops.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct GradientBrush {
    pub stops: Vec<GradientStop>,
}

/// Type-erased resource payload.
///
/// Serialized adjacently tagged, e.g. `{"type": "solid_brush", "value": {"color": {...}}}`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", content = "value", rename_all = "snake_case")]
pub enum ResourceValue {
    Color(Color),
    SolidBrush(SolidBrush),
    GradientBrush(GradientBrush),
    Text(String),
    Number(f64),
    Flag(bool),
}

impl ResourceValue {
    pub fn value_type(&self) -> ValueType {
        match self {
            ResourceValue::Color(_) => ValueType::Color,
            ResourceValue::SolidBrush(_) => ValueType::SolidBrush,
            ResourceValue::GradientBrush(_) => ValueType::GradientBrush,
            ResourceValue::Text(_) => ValueType::Text,
            ResourceValue::Number(_) => ValueType::Number,
            ResourceValue::Flag(_) => ValueType::Flag,
        }
    }
}

impl From<Color> for ResourceValue {
    fn from(value: Color) -> Self {
        ResourceValue::Color(value)
    }
}

impl From<SolidBrush> for ResourceValue {
    fn from(value: SolidBrush) -> Self {
        ResourceValue::SolidBrush(value)
    }
}

impl From<GradientBrush> for ResourceValue {
    fn from(value: GradientBrush) -> Self {
        ResourceValue::GradientBrush(value)
    }
}

impl From<String> for ResourceValue {
    fn from(value: String) -> Self {
        ResourceValue::Text(value)
    }
}

impl From<&str> for ResourceValue {
    fn from(value: &str) -> Self {
        ResourceValue::Text(value.to_string())
    }
}

impl From<f64> for ResourceValue {
    fn from(value: f64) -> Self {
        ResourceValue::Number(value)
    }
}

impl From<bool> for ResourceValue {
    fn from(value: bool) -> Self {
        ResourceValue::Flag(value)
    }
}
