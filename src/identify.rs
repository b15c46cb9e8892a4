//! Identify ("locate me") blink sequence
//!
//! Three groups of two pulses. Each pulse is 100 ms at full power followed by
//! 100 ms dark, and the groups are separated by a 250 ms dark gap:
//!
//! ```text
//! group:  on off on off gap
//! ms:     100 100 100 100 250   (x3 = 1950 ms)
//! ```
//!
//! The sequence only yields override frames; restoring the light color is
//! up to the caller.

use embassy_time::{Duration, Instant};

use crate::color::{BLACK, FULL, Rgbw};

/// Length of each on and off phase of a pulse
pub const PULSE_MS: u64 = 100;
/// Pulses per group
pub const PULSES_PER_GROUP: u64 = 2;
/// Number of groups
pub const GROUPS: u64 = 3;
/// Dark gap after each group
pub const GROUP_GAP_MS: u64 = 250;

const PULSES_MS: u64 = PULSES_PER_GROUP * 2 * PULSE_MS;
const GROUP_MS: u64 = PULSES_MS + GROUP_GAP_MS;

/// Total length of the identify sequence
pub const IDENTIFY_DURATION: Duration = Duration::from_millis(GROUPS * GROUP_MS);

/// Running identify sequence
#[derive(Debug, Clone, Copy)]
pub struct IdentifyBlink {
    started: Instant,
}

impl IdentifyBlink {
    /// Start the sequence at `now`
    pub const fn start(now: Instant) -> Self {
        Self { started: now }
    }

    pub const fn started(&self) -> Instant {
        self.started
    }

    /// Override frame at `now`, or `None` once the sequence is over
    pub fn frame_at(&self, now: Instant) -> Option<Rgbw> {
        let elapsed = now.as_millis().saturating_sub(self.started.as_millis());
        if elapsed >= IDENTIFY_DURATION.as_millis() {
            return None;
        }

        let in_group = elapsed % GROUP_MS;
        if in_group >= PULSES_MS {
            return Some(BLACK);
        }

        let phase = in_group / PULSE_MS;
        if phase.is_multiple_of(2) {
            Some(FULL)
        } else {
            Some(BLACK)
        }
    }

    /// Returns true once the sequence has run to completion
    pub fn is_finished(&self, now: Instant) -> bool {
        self.frame_at(now).is_none()
    }
}
