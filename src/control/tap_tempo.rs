//! Tap tempo.
//!
//! Measures the interval between rising edges of the trigger input. Intervals between 50 ms
//! and 3 s take over the delay time for 5 s after the last accepted tap.

use crate::utils::edge::{EdgeDetector, GateState};
use crate::utils::reached;
use crate::{MAX_DELAY, MIN_DELAY};

/// Shortest accepted tap interval in samples (50 ms).
pub const MIN_TAP_INTERVAL: u32 = 2400;

/// Longest accepted tap interval in samples (3 s).
pub const MAX_TAP_INTERVAL: u32 = 144000;

/// Time after the last accepted tap before the knob takes over again (5 s).
pub const TAP_TIMEOUT: u32 = 240000;

#[derive(Debug)]
pub struct TapTempo {
    trigger: EdgeDetector,
    last_tap_time: u32,
    tap_interval: u32,
    timeout_deadline: u32,
    active: bool,
    sample_counter: u32,
}

impl Default for TapTempo {
    fn default() -> Self {
        Self::new()
    }
}

impl TapTempo {
    pub fn new() -> Self {
        Self {
            trigger: EdgeDetector::new(),
            last_tap_time: 0,
            tap_interval: 24000,
            timeout_deadline: 0,
            active: false,
            sample_counter: 0,
        }
    }

    pub fn init(&mut self) {
        *self = Self::new();
    }

    /// Processes one cycle of the trigger input.
    ///
    /// Returns the delay time in samples while tap tempo overrides the knob.
    #[inline]
    pub fn process(&mut self, trigger: bool) -> Option<i32> {
        let now = self.sample_counter;

        if self.trigger.process(trigger) == GateState::RisingEdge {
            let interval = now.wrapping_sub(self.last_tap_time);
            if (MIN_TAP_INTERVAL..=MAX_TAP_INTERVAL).contains(&interval) {
                self.tap_interval = interval;
                self.timeout_deadline = now.wrapping_add(TAP_TIMEOUT);
                if !self.active {
                    log::debug!("Tap tempo engaged: {} samples", interval);
                }
                self.active = true;
            }
            self.last_tap_time = now;
        }

        if self.active && reached(now, self.timeout_deadline) {
            self.active = false;
            log::debug!("Tap tempo timed out");
        }

        self.sample_counter = self.sample_counter.wrapping_add(1);

        self.target()
    }

    /// Delay time in samples while active.
    #[inline]
    pub fn target(&self) -> Option<i32> {
        if self.active {
            Some(self.tap_interval.min(MAX_DELAY as u32).max(MIN_DELAY as u32) as i32)
        } else {
            None
        }
    }

    #[inline]
    pub fn is_active(&self) -> bool {
        self.active
    }

    #[inline]
    pub fn tap_interval(&self) -> u32 {
        self.tap_interval
    }

    #[inline]
    pub fn sample_counter(&self) -> u32 {
        self.sample_counter
    }

    /// Moves the sample counter, e.g. to resume a counter kept by the host.
    pub fn set_sample_counter(&mut self, counter: u32) {
        self.sample_counter = counter;
    }
}
