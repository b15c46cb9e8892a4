use crate::color::{BLACK, IntensityShaping, Rgbw, hsi2rgbw};
use crate::state::ColorRequest;

/// Color kernel - turns a [`ColorRequest`] into the color sent to the strip
///
/// The intensity shaping is fixed per kernel. [`IntensityShaping::Linear`] is
/// the default.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ColorKernel {
    shaping: IntensityShaping,
}

impl ColorKernel {
    pub const fn new(shaping: IntensityShaping) -> Self {
        Self { shaping }
    }

    pub const fn shaping(&self) -> IntensityShaping {
        self.shaping
    }

    /// Convert hue (degrees), saturation and intensity (percent) to RGBW
    pub fn convert(&self, hue: f32, saturation: f32, intensity: f32) -> Rgbw {
        hsi2rgbw(hue, saturation, intensity, self.shaping)
    }

    /// Color for the given request, black when the light is off
    pub fn render(&self, state: &ColorRequest) -> Rgbw {
        if !state.on {
            return BLACK;
        }
        self.convert(state.hue, state.saturation, state.intensity)
    }
}
