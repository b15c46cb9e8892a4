//! HSI to RGBW conversion
//!
//! The hue circle is split into three 120° sectors. Inside a sector two of the
//! colored channels share the saturated part of the intensity and the third
//! stays dark. The unsaturated part goes to the white sub-pixel, so
//! `r + g + b + w` stays at `255 * I` whatever the saturation is.

use core::f32::consts::PI;

use super::{Rgbw, rgbw};

/// Width of one hue sector in radians (120°)
const SECTOR: f32 = 2.0 * PI / 3.0;

/// Half a sector in radians (60°)
const HALF_SECTOR: f32 = PI / 3.0;

/// Exponent of the perceptual intensity curve
const PERCEPTUAL_EXPONENT: f32 = 1.5;

/// Mapping of the intensity percentage onto the channel multiplier
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum IntensityShaping {
    /// Intensity percent maps directly to the 0-1 multiplier
    #[default]
    Linear,
    /// Intensity is raised to the power of 1.5, giving finer steps near the
    /// dark end of the range
    Perceptual,
}

impl IntensityShaping {
    /// Shape a normalized (0-1) intensity
    pub fn apply(self, intensity: f32) -> f32 {
        match self {
            Self::Linear => intensity,
            Self::Perceptual => libm::powf(intensity, PERCEPTUAL_EXPONENT),
        }
    }
}

/// Hue sector, named after the channels it mixes (leading first)
#[derive(Clone, Copy)]
enum Sector {
    RedGreen,
    GreenBlue,
    BlueRed,
}

/// Wrap a hue in degrees into `[0, 360)`
///
/// Negative hues wrap upward, so `-120` becomes `240`. Non-finite values map
/// to `0`.
pub fn wrap_hue(hue: f32) -> f32 {
    if !hue.is_finite() {
        return 0.0;
    }
    let mut wrapped = libm::fmodf(hue, 360.0);
    if wrapped < 0.0 {
        wrapped += 360.0;
    }
    // A tiny negative remainder can round up to exactly 360
    if wrapped >= 360.0 { 0.0 } else { wrapped }
}

/// Normalize a percentage into `[0, 1]`
fn unit(percent: f32) -> f32 {
    if percent.is_nan() {
        return 0.0;
    }
    (percent / 100.0).clamp(0.0, 1.0)
}

/// Clamp a raw channel value and truncate it toward zero
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
fn channel(value: f32) -> u8 {
    value.clamp(0.0, 255.0) as u8
}

/// Convert hue (degrees), saturation (percent) and intensity (percent) to a
/// four-channel device color
///
/// Out of range inputs are wrapped or clamped, never rejected.
pub fn hsi2rgbw(hue: f32, saturation: f32, intensity: f32, shaping: IntensityShaping) -> Rgbw {
    let h = wrap_hue(hue) * PI / 180.0;
    let s = unit(saturation);
    let i = shaping.apply(unit(intensity));

    let (sector, offset) = if h < SECTOR {
        (Sector::RedGreen, h)
    } else if h < 2.0 * SECTOR {
        (Sector::GreenBlue, h - SECTOR)
    } else {
        (Sector::BlueRed, h - 2.0 * SECTOR)
    };

    let ratio = libm::cosf(offset) / libm::cosf(HALF_SECTOR - offset);
    let scale = s * 255.0 * i / 3.0;
    let leading = channel(scale * (1.0 + ratio));
    let trailing = channel(scale * (1.0 + (1.0 - ratio)));
    let w = channel(255.0 * (1.0 - s) * i);

    match sector {
        Sector::RedGreen => rgbw(leading, trailing, 0, w),
        Sector::GreenBlue => rgbw(0, leading, trailing, w),
        Sector::BlueRed => rgbw(trailing, 0, leading, w),
    }
}
