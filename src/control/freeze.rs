//! Freeze/hold.
//!
//! While the gate is high nothing is recorded and playback loops over the audio that was in
//! the store when the gate went high. The loop length is taken from the left delay and
//! shared by both channels. The loop phase is counted once per sample, independent of the live
//! cursor.

use crate::utils::edge::{EdgeDetector, GateState};
use crate::DELAY_FRACTION_BITS;

/// Where and how far behind to read in the current cycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ReadPosition {
    /// Cursor the delays are measured from.
    pub cursor: usize,
    /// Left delay, 7 fractional bits.
    pub delay_left: i32,
    /// Right delay, 7 fractional bits.
    pub delay_right: i32,
    /// Whether the feedback path may record into the store.
    pub record: bool,
}

#[derive(Debug, Default)]
pub struct Freeze {
    gate: EdgeDetector,
    active: bool,
    frozen_write_cursor: usize,
    frozen_delay_left: i32,
    frozen_delay_right: i32,
    phase: usize,
}

impl Freeze {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn init(&mut self) {
        *self = Self::default();
    }

    /// Resolves the read position for this cycle.
    ///
    /// `write_cursor` is the live cursor of a store with `size` slots, `delay_left` and
    /// `delay_right` are the live delays. Call once per sample.
    #[inline]
    pub fn process(
        &mut self,
        gate: bool,
        write_cursor: usize,
        size: usize,
        delay_left: i32,
        delay_right: i32,
    ) -> ReadPosition {
        match self.gate.process(gate) {
            GateState::RisingEdge => {
                self.frozen_write_cursor = write_cursor;
                self.frozen_delay_left = delay_left;
                self.frozen_delay_right = delay_right;
                self.phase = 0;
                self.active = true;
                log::debug!(
                    "Freeze engaged at {} with {} samples",
                    write_cursor,
                    delay_left >> DELAY_FRACTION_BITS
                );
            }
            GateState::FallingEdge => {
                self.active = false;
                log::debug!("Freeze released");
            }
            GateState::High => {
                if self.active {
                    self.phase = (self.phase + 1) % self.loop_length();
                }
            }
            GateState::Low => {}
        }

        if !self.active {
            return ReadPosition {
                cursor: write_cursor,
                delay_left,
                delay_right,
                record: true,
            };
        }

        ReadPosition {
            cursor: (self.frozen_write_cursor + self.phase) % size,
            delay_left: self.frozen_delay_left,
            delay_right: self.frozen_delay_right,
            record: false,
        }
    }

    #[inline]
    pub fn is_active(&self) -> bool {
        self.active
    }

    #[inline]
    pub fn frozen_write_cursor(&self) -> usize {
        self.frozen_write_cursor
    }

    /// Samples played since the start of the current loop pass.
    #[inline]
    pub fn phase(&self) -> usize {
        self.phase
    }

    /// Loop length in samples while frozen.
    #[inline]
    pub fn loop_length(&self) -> usize {
        (self.frozen_delay_left >> DELAY_FRACTION_BITS) as usize + 1
    }
}
