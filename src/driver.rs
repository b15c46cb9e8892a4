//! Output driver adapter for `smart-leds` writers

use smart_leds::SmartLedsWrite;

#[cfg(feature = "log")]
use esp_println::println;

use crate::OutputDriver;
use crate::color::Rgbw;

/// Adapts any [`SmartLedsWrite`] RGBW writer to [`OutputDriver`]
///
/// Transmission errors are dropped; the next frame simply retries.
pub struct SmartLedsDriver<W> {
    writer: W,
}

impl<W> SmartLedsDriver<W>
where
    W: SmartLedsWrite<Color = Rgbw>,
{
    pub const fn new(writer: W) -> Self {
        Self { writer }
    }

    pub fn writer(&self) -> &W {
        &self.writer
    }

    pub fn into_inner(self) -> W {
        self.writer
    }
}

impl<W> OutputDriver for SmartLedsDriver<W>
where
    W: SmartLedsWrite<Color = Rgbw>,
{
    fn transmit(&mut self, pixels: &[Rgbw]) {
        if self.writer.write(pixels.iter().copied()).is_err() {
            #[cfg(feature = "log")]
            println!("[SmartLedsDriver.transmit] write failed, frame dropped");
        }
    }
}
