//! Light state owned by the controller
//!
//! [`ColorRequest`] is the single record the render step reads.
//! [`SharedRequest`] wraps it for hosts that write it from another context.

use core::cell::Cell;

use critical_section::Mutex;

use crate::property::{Property, PropertyValue, PropertyWrite};

/// Requested light color in perceptual terms
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ColorRequest {
    /// Hue in degrees
    pub hue: f32,
    /// Saturation in percent
    pub saturation: f32,
    /// Intensity (brightness) in percent
    pub intensity: f32,
    /// Power state
    pub on: bool,
}

impl ColorRequest {
    /// State at power-up
    pub const DEFAULT: Self = Self::new(0.0, 59.0, 100.0, false);

    pub const fn new(hue: f32, saturation: f32, intensity: f32, on: bool) -> Self {
        Self {
            hue,
            saturation,
            intensity,
            on,
        }
    }

    /// Apply a property write
    ///
    /// Returns false and leaves the state untouched if the value has the
    /// wrong format for the property.
    #[allow(clippy::cast_precision_loss)]
    pub fn apply(&mut self, write: PropertyWrite) -> bool {
        match (write.property, write.value) {
            (Property::On, PropertyValue::Bool(on)) => self.on = on,
            (Property::Brightness, PropertyValue::Int(percent)) => {
                self.intensity = percent as f32;
            }
            (Property::Hue, PropertyValue::Float(degrees)) => self.hue = degrees,
            (Property::Saturation, PropertyValue::Float(percent)) => {
                self.saturation = percent;
            }
            _ => return false,
        }
        true
    }

    /// Read a property back in its accessory format
    #[allow(clippy::cast_possible_truncation)]
    pub fn get(&self, property: Property) -> PropertyValue {
        match property {
            Property::On => PropertyValue::Bool(self.on),
            Property::Brightness => PropertyValue::Int(self.intensity as i32),
            Property::Hue => PropertyValue::Float(self.hue),
            Property::Saturation => PropertyValue::Float(self.saturation),
        }
    }
}

impl Default for ColorRequest {
    fn default() -> Self {
        Self::DEFAULT
    }
}

/// Color request shared between contexts
///
/// Reads and writes always move the whole record inside a critical section,
/// so a reader never sees half of an update.
pub struct SharedRequest {
    inner: Mutex<Cell<ColorRequest>>,
}

impl SharedRequest {
    pub const fn new(request: ColorRequest) -> Self {
        Self {
            inner: Mutex::new(Cell::new(request)),
        }
    }

    /// Copy of the current request
    pub fn load(&self) -> ColorRequest {
        critical_section::with(|cs| self.inner.borrow(cs).get())
    }

    /// Replace the current request
    pub fn store(&self, request: ColorRequest) {
        critical_section::with(|cs| self.inner.borrow(cs).set(request));
    }

    /// Apply a property write atomically
    ///
    /// Returns false if the write was dropped.
    pub fn apply(&self, write: PropertyWrite) -> bool {
        critical_section::with(|cs| {
            let cell = self.inner.borrow(cs);
            let mut request = cell.get();
            let accepted = request.apply(write);
            if accepted {
                cell.set(request);
            }
            accepted
        })
    }
}

impl Default for SharedRequest {
    fn default() -> Self {
        Self::new(ColorRequest::DEFAULT)
    }
}
