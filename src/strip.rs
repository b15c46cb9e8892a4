//! Pixel strip buffer
//!
//! The light only ever shows one color, so the strip is always filled
//! uniformly and handed to the [`OutputDriver`] as a whole.

use crate::OutputDriver;
use crate::color::{BLACK, Rgbw, rgbw};
use crate::math8::scale8;

/// Brightness limit that leaves colors untouched
pub const NO_BRIGHTNESS_LIMIT: u8 = 255;

/// Overwrite every pixel with the same color
///
/// An empty slice is left as is.
pub fn fill(pixels: &mut [Rgbw], color: Rgbw) {
    pixels.fill(color);
}

/// Strip configuration
#[derive(Debug, Clone, Copy)]
pub struct StripConfig {
    /// Number of pixels actually wired, capped at the buffer capacity
    pub len: usize,
    /// Output scale applied on transmit (0-255 = 0.0-1.0)
    pub brightness_limit: u8,
}

impl StripConfig {
    /// Use the whole buffer with no brightness limit
    pub const fn full(len: usize) -> Self {
        Self {
            len,
            brightness_limit: NO_BRIGHTNESS_LIMIT,
        }
    }
}

/// Fixed-capacity strip of `N` pixels
#[derive(Debug, Clone)]
pub struct Strip<const N: usize> {
    pixels: [Rgbw; N],
    len: usize,
    brightness_limit: u8,
}

impl<const N: usize> Strip<N> {
    /// Create a dark strip using all `N` pixels
    pub const fn new() -> Self {
        Self::with_config(&StripConfig::full(N))
    }

    /// Create a dark strip from a config
    pub const fn with_config(config: &StripConfig) -> Self {
        let len = if config.len < N { config.len } else { N };
        Self {
            pixels: [BLACK; N],
            len,
            brightness_limit: config.brightness_limit,
        }
    }

    /// Active pixels
    pub fn pixels(&self) -> &[Rgbw] {
        &self.pixels[..self.len]
    }

    pub const fn len(&self) -> usize {
        self.len
    }

    pub const fn is_empty(&self) -> bool {
        self.len == 0
    }

    pub const fn brightness_limit(&self) -> u8 {
        self.brightness_limit
    }

    /// Fill every active pixel with `color`
    pub fn fill(&mut self, color: Rgbw) {
        fill(&mut self.pixels[..self.len], color);
    }

    /// Transmit the active pixels through the driver
    ///
    /// The brightness limit is applied to the transmitted copy only; the
    /// strip keeps the unscaled colors.
    pub fn show<D: OutputDriver>(&self, driver: &mut D) {
        if self.brightness_limit == NO_BRIGHTNESS_LIMIT {
            driver.transmit(self.pixels());
        } else {
            let mut frame = self.pixels;
            for pixel in &mut frame[..self.len] {
                *pixel = limit(*pixel, self.brightness_limit);
            }
            driver.transmit(&frame[..self.len]);
        }
    }
}

impl<const N: usize> Default for Strip<N> {
    fn default() -> Self {
        Self::new()
    }
}

const fn limit(color: Rgbw, scale: u8) -> Rgbw {
    rgbw(
        scale8(color.r, scale),
        scale8(color.g, scale),
        scale8(color.b, scale),
        scale8(color.a.0, scale),
    )
}
