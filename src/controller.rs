use embassy_time::Instant;

#[cfg(feature = "log")]
use esp_println::println;

use crate::OutputDriver;
use crate::color::Rgbw;
use crate::config::LightConfig;
use crate::identify::IdentifyBlink;
use crate::kernel::ColorKernel;
use crate::property::PropertyWrite;
use crate::queue::PropertyReceiver;
use crate::state::ColorRequest;
use crate::strip::Strip;

/// Light controller - the main orchestrator
///
/// Owns the color request and the strip. Property writes are pulled from the
/// queue on every [`tick`](Self::tick); each accepted write re-renders the
/// color and pushes a uniform frame to the driver.
pub struct LightController<'a, D: OutputDriver, const MAX_LEDS: usize, const QUEUE_SIZE: usize> {
    // External dependencies and configuration
    writes: PropertyReceiver<'a, QUEUE_SIZE>,
    driver: D,
    kernel: ColorKernel,

    // Internal state
    state: ColorRequest,
    color: Rgbw,
    strip: Strip<MAX_LEDS>,
    identify: Option<IdentifyBlink>,
    /// Last frame handed to the driver
    shown: Option<Rgbw>,
}

impl<'a, D: OutputDriver, const MAX_LEDS: usize, const QUEUE_SIZE: usize>
    LightController<'a, D, MAX_LEDS, QUEUE_SIZE>
{
    /// Create a new controller
    ///
    /// Nothing is sent to the driver until the first [`refresh`](Self::refresh)
    /// or accepted write.
    pub fn new(writes: PropertyReceiver<'a, QUEUE_SIZE>, driver: D, config: &LightConfig) -> Self {
        let kernel = ColorKernel::new(config.shaping);
        Self {
            writes,
            driver,
            kernel,
            state: config.initial,
            color: kernel.render(&config.initial),
            strip: Strip::with_config(&config.strip),
            identify: None,
            shown: None,
        }
    }

    /// Process pending writes and advance the identify sequence
    ///
    /// Call this periodically. Returns true if a frame was sent to the
    /// driver.
    pub fn tick(&mut self, now: Instant) -> bool {
        let changed = self.process_writes();

        if let Some(blink) = self.identify {
            if let Some(frame) = blink.frame_at(now) {
                return self.show_if_changed(frame);
            }
            #[cfg(feature = "log")]
            println!("[LightController.tick] identify done, restoring color");
            self.identify = None;
            self.show(self.color);
            return true;
        }

        if changed {
            self.show(self.color);
        }
        changed
    }

    /// Apply a single write immediately
    ///
    /// Returns false if the write was dropped for having the wrong value
    /// format. While identify runs the new color is held back until the
    /// sequence ends.
    pub fn apply(&mut self, write: PropertyWrite) -> bool {
        if !self.accept(write) {
            return false;
        }
        self.update_color();
        if self.identify.is_none() {
            self.show(self.color);
        }
        true
    }

    /// Start the identify sequence, restarting it if already running
    pub fn identify(&mut self, now: Instant) {
        #[cfg(feature = "log")]
        println!("[LightController.identify] starting identify sequence");
        self.identify = Some(IdentifyBlink::start(now));
    }

    /// Render the current state and send it regardless of changes
    pub fn refresh(&mut self) {
        self.update_color();
        self.show(self.color);
    }

    pub const fn state(&self) -> &ColorRequest {
        &self.state
    }

    /// Color the light shows outside of identify
    pub const fn color(&self) -> Rgbw {
        self.color
    }

    pub const fn strip(&self) -> &Strip<MAX_LEDS> {
        &self.strip
    }

    pub const fn kernel(&self) -> &ColorKernel {
        &self.kernel
    }

    pub const fn is_identifying(&self) -> bool {
        self.identify.is_some()
    }

    pub const fn driver(&self) -> &D {
        &self.driver
    }

    pub fn driver_mut(&mut self) -> &mut D {
        &mut self.driver
    }

    /// Drain the queue (non-blocking)
    ///
    /// Returns true if any write changed the state.
    fn process_writes(&mut self) -> bool {
        let mut changed = false;
        while let Some(write) = self.writes.receive() {
            changed |= self.accept(write);
        }
        if changed {
            self.update_color();
        }
        changed
    }

    fn accept(&mut self, write: PropertyWrite) -> bool {
        let accepted = self.state.apply(write);
        if !accepted {
            #[cfg(feature = "log")]
            println!(
                "[LightController.accept] dropping {} write with value {:?}",
                write.property.as_str(),
                write.value
            );
        }
        accepted
    }

    fn update_color(&mut self) {
        self.color = self.kernel.render(&self.state);
        #[cfg(feature = "log")]
        {
            println!(
                "Requested color h={}, s={}, b={}",
                self.state.hue, self.state.saturation, self.state.intensity
            );
            println!(
                "Color set to r={}, g={}, b={}, w={}",
                self.color.r, self.color.g, self.color.b, self.color.a.0
            );
        }
    }

    fn show_if_changed(&mut self, color: Rgbw) -> bool {
        if self.shown == Some(color) {
            return false;
        }
        self.show(color);
        true
    }

    fn show(&mut self, color: Rgbw) {
        self.strip.fill(color);
        self.strip.show(&mut self.driver);
        self.shown = Some(color);
    }
}
