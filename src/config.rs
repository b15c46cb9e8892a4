//! Light configuration

use crate::color::IntensityShaping;
use crate::state::ColorRequest;
use crate::strip::StripConfig;

/// Configuration for the light controller
#[derive(Debug, Clone, Copy)]
pub struct LightConfig {
    /// Intensity curve of the color kernel
    pub shaping: IntensityShaping,
    /// State at power-up
    pub initial: ColorRequest,
    /// Strip layout and output limit
    pub strip: StripConfig,
}

impl LightConfig {
    /// Defaults for a strip of `len` pixels
    pub const fn new(len: usize) -> Self {
        Self {
            shaping: IntensityShaping::Linear,
            initial: ColorRequest::DEFAULT,
            strip: StripConfig::full(len),
        }
    }
}
