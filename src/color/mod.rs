mod hsi;
mod rgbw;

pub use hsi::{IntensityShaping, hsi2rgbw, wrap_hue};
pub use rgbw::{BLACK, FULL, Rgbw, rgbw};
