//! Frame scheduling and timing utilities.
//!
//! Provides portable pacing without async/await or platform-specific timers.
//! The caller is responsible for sleeping/waiting between ticks.

use embassy_time::{Duration, Instant};

use crate::{LightController, OutputDriver};

/// Default tick rate. Fast enough for the 100 ms identify pulses.
pub const DEFAULT_FPS: u32 = 50;

/// Default tick period based on `DEFAULT_FPS`.
pub const DEFAULT_FRAME_DURATION: Duration = Duration::from_millis(1000 / DEFAULT_FPS as u64);

/// Result of a frame tick operation.
#[derive(Debug, Clone, Copy)]
pub struct FrameResult {
    /// Whether a frame was sent to the driver.
    pub written: bool,
    /// The deadline for the next tick.
    pub next_deadline: Instant,
    /// How long to wait until the next tick (zero if behind schedule).
    pub sleep_duration: Duration,
}

/// Portable scheduler that drives a [`LightController`] at a fixed rate.
///
/// Falling behind by more than two periods resets the schedule to `now`
/// instead of bursting to catch up.
///
/// ```ignore
/// let mut scheduler = FrameScheduler::new(controller);
///
/// loop {
///     let result = scheduler.tick(Instant::now());
///     Timer::after(result.sleep_duration).await;
/// }
/// ```
pub struct FrameScheduler<'a, D: OutputDriver, const MAX_LEDS: usize, const QUEUE_SIZE: usize> {
    controller: LightController<'a, D, MAX_LEDS, QUEUE_SIZE>,
    next_frame: Instant,
    frame_duration: Duration,
}

impl<'a, D: OutputDriver, const MAX_LEDS: usize, const QUEUE_SIZE: usize>
    FrameScheduler<'a, D, MAX_LEDS, QUEUE_SIZE>
{
    /// Create a new scheduler ticking at `DEFAULT_FPS`.
    pub fn new(controller: LightController<'a, D, MAX_LEDS, QUEUE_SIZE>) -> Self {
        Self::with_frame_duration(controller, DEFAULT_FRAME_DURATION)
    }

    /// Create a new scheduler with a custom tick period.
    pub fn with_frame_duration(
        controller: LightController<'a, D, MAX_LEDS, QUEUE_SIZE>,
        frame_duration: Duration,
    ) -> Self {
        Self {
            controller,
            next_frame: Instant::from_millis(0),
            frame_duration,
        }
    }

    /// Tick the controller and return timing information.
    pub fn tick(&mut self, now: Instant) -> FrameResult {
        if now > self.next_frame + self.frame_duration * 2 {
            self.next_frame = now;
        }

        let written = self.controller.tick(now);
        self.next_frame += self.frame_duration;

        FrameResult {
            written,
            next_deadline: self.next_frame,
            sleep_duration: self
                .next_frame
                .checked_duration_since(now)
                .unwrap_or(Duration::from_ticks(0)),
        }
    }

    pub fn controller(&self) -> &LightController<'a, D, MAX_LEDS, QUEUE_SIZE> {
        &self.controller
    }

    pub fn controller_mut(&mut self) -> &mut LightController<'a, D, MAX_LEDS, QUEUE_SIZE> {
        &mut self.controller
    }
}
