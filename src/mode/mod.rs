//! Effect modes.
//!
//! Every mode is a [`ModeProcessor`] strategy deciding on pitch modulation, stereo spread,
//! feedback shaping and whether the delay control uses hysteresis. All processors live for the
//! whole run, so filter and envelope state carries over when the mode changes.

pub mod clean;
pub mod saturation;
pub mod shimmer;

use crate::config::Config;
use crate::control::SwitchPosition;
use crate::utils::edge::{Debouncer, EdgeDetector, GateState};
use crate::{DELAY_FRACTION_BITS, MAX_DELAY, MIN_DELAY};

use clean::{Clean, LoFi};
use saturation::Saturation;
use shimmer::Shimmer;

pub const NUM_MODES: usize = 4;

const MIN_DELAY_FINE: i32 = MIN_DELAY << DELAY_FRACTION_BITS;
const MAX_DELAY_FINE: i32 = MAX_DELAY << DELAY_FRACTION_BITS;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Mode {
    #[default]
    Clean = 0,
    Saturation = 1,
    Shimmer = 2,
    LoFi = 3,
}

impl Mode {
    /// Mode following this one in the cycling order.
    pub fn next(self) -> Self {
        match self {
            Self::Clean => Self::Saturation,
            Self::Saturation => Self::Shimmer,
            Self::Shimmer => Self::LoFi,
            Self::LoFi => Self::Clean,
        }
    }

    pub fn index(self) -> usize {
        self as usize
    }
}

/// Per-mode behaviour of the delay.
///
/// Delays are passed with 7 fractional bits. Results are clamped by the caller.
pub trait ModeProcessor {
    /// Delay used inside the feedback loop, derived from the smoothed delay.
    fn modulate_delay(&self, delay: i32) -> i32 {
        delay
    }

    /// Right channel delay derived from the left one.
    fn stereo_offset(&self, delay_left: i32) -> i32 {
        delay_left
    }

    /// Shapes the gain scaled feedback signal before it is mixed with the input.
    fn shape_feedback(&mut self, feedback: i32) -> i32 {
        feedback
    }

    /// Whether small movements of the delay control are suppressed.
    fn hysteresis(&self) -> bool {
        true
    }
}

#[derive(Debug)]
pub struct ModeUnit {
    mode: Mode,
    switch_debouncer: Debouncer,
    switch_edge: EdgeDetector,
    clean: Clean,
    saturation: Saturation,
    shimmer: Shimmer,
    lofi: LoFi,
}

impl Default for ModeUnit {
    fn default() -> Self {
        Self::new(&Config::default())
    }
}

impl ModeUnit {
    pub fn new(config: &Config) -> Self {
        Self {
            mode: Mode::Clean,
            switch_debouncer: Debouncer::new(config.switch_debounce),
            switch_edge: EdgeDetector::new(),
            clean: Clean,
            saturation: Saturation::new(config),
            shimmer: Shimmer::new(config),
            lofi: LoFi,
        }
    }

    /// Resets to `Clean` and seeds the switch edge detector with the current position.
    pub fn init(&mut self, switch: SwitchPosition) {
        let down = switch == SwitchPosition::Down;
        self.mode = Mode::Clean;
        self.switch_debouncer.init(down);
        self.switch_edge.init(down);
        self.saturation.init();
        self.shimmer.init();
    }

    /// Advances the mode once for every debounced press of the switch into `Down`.
    #[inline]
    pub fn process_switch(&mut self, switch: SwitchPosition) -> Mode {
        let down = self
            .switch_debouncer
            .process(switch == SwitchPosition::Down);
        if self.switch_edge.process(down) == GateState::RisingEdge {
            self.mode = self.mode.next();
            log::debug!("Mode: {:?}", self.mode);
        }

        self.mode
    }

    #[inline]
    pub fn mode(&self) -> Mode {
        self.mode
    }

    pub fn set_mode(&mut self, mode: Mode) {
        self.mode = mode;
    }

    #[inline]
    pub fn processor(&mut self) -> &mut dyn ModeProcessor {
        let processor: &mut dyn ModeProcessor = match self.mode {
            Mode::Clean => &mut self.clean,
            Mode::Saturation => &mut self.saturation,
            Mode::Shimmer => &mut self.shimmer,
            Mode::LoFi => &mut self.lofi,
        };

        processor
    }

    #[inline]
    pub fn hysteresis(&mut self) -> bool {
        self.processor().hysteresis()
    }

    /// Left and right delays for the smoothed delay, both clamped to the valid range.
    #[inline]
    pub fn delays(&mut self, smoothed_delay: i32) -> (i32, i32) {
        let processor = self.processor();
        let left = processor
            .modulate_delay(smoothed_delay)
            .clamp(MIN_DELAY_FINE, MAX_DELAY_FINE);
        let right = processor
            .stereo_offset(left)
            .clamp(MIN_DELAY_FINE, MAX_DELAY_FINE);

        (left, right)
    }

    #[inline]
    pub fn shape_feedback(&mut self, feedback: i32) -> i32 {
        self.processor().shape_feedback(feedback)
    }

    pub fn saturation(&self) -> &Saturation {
        &self.saturation
    }
}
