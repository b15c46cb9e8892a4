#![no_std]

pub mod color;
pub mod config;
pub mod controller;
pub mod driver;
pub mod frame_scheduler;
pub mod identify;
pub mod kernel;
pub mod math8;
pub mod network;
pub mod property;
pub mod queue;
pub mod state;
pub mod strip;

pub use config::LightConfig;
pub use controller::LightController;
pub use driver::SmartLedsDriver;
pub use frame_scheduler::FrameScheduler;
pub use identify::IdentifyBlink;
pub use kernel::ColorKernel;
pub use network::{LinkEvent, NetworkHooks};
pub use property::{Property, PropertyValue, PropertyWrite};
pub use queue::{PropertyQueue, PropertyReceiver, PropertySender, QueueFull};
pub use state::{ColorRequest, SharedRequest};
pub use strip::{Strip, StripConfig, fill};

pub use color::{BLACK, FULL, IntensityShaping, Rgbw, hsi2rgbw, rgbw};
pub use embassy_time::{Duration, Instant};

/// Abstract pixel output trait
///
/// Implement this trait to support different hardware platforms.
/// The pixel buffer itself is the [`Strip`]; the driver only moves a filled
/// buffer to the hardware.
pub trait OutputDriver {
    /// Send the pixel buffer to the strip
    fn transmit(&mut self, pixels: &[Rgbw]);
}
