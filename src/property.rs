//! Accessory properties
//!
//! Typed values and writes as they arrive from the accessory-protocol layer.
//! Each property accepts one value type; anything else is dropped by
//! [`ColorRequest::apply`](crate::ColorRequest::apply).

const PROPERTY_NAME_ON: &str = "on";
const PROPERTY_NAME_BRIGHTNESS: &str = "brightness";
const PROPERTY_NAME_HUE: &str = "hue";
const PROPERTY_NAME_SATURATION: &str = "saturation";

/// Property value as delivered by the accessory layer
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PropertyValue {
    Bool(bool),
    Int(i32),
    Float(f32),
}

/// Lightbulb service properties the light reacts to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Property {
    /// Power state, boolean
    On,
    /// Brightness in percent, integer
    Brightness,
    /// Hue in degrees, float
    Hue,
    /// Saturation in percent, float
    Saturation,
}

impl Property {
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::On => PROPERTY_NAME_ON,
            Self::Brightness => PROPERTY_NAME_BRIGHTNESS,
            Self::Hue => PROPERTY_NAME_HUE,
            Self::Saturation => PROPERTY_NAME_SATURATION,
        }
    }
}

/// A single property write
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PropertyWrite {
    pub property: Property,
    pub value: PropertyValue,
}

impl PropertyWrite {
    pub const fn new(property: Property, value: PropertyValue) -> Self {
        Self { property, value }
    }

    pub const fn on(on: bool) -> Self {
        Self::new(Property::On, PropertyValue::Bool(on))
    }

    pub const fn brightness(percent: i32) -> Self {
        Self::new(Property::Brightness, PropertyValue::Int(percent))
    }

    pub const fn hue(degrees: f32) -> Self {
        Self::new(Property::Hue, PropertyValue::Float(degrees))
    }

    pub const fn saturation(percent: f32) -> Self {
        Self::new(Property::Saturation, PropertyValue::Float(percent))
    }
}
