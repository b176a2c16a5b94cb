//! Feedback crossfade, DC blocking and dry/wet output.

use crate::utils::filter::OnePoleHighpass;
use crate::utils::{clip_12, clip_control, scale_12};
use crate::CONTROL_MAX;

/// Input and feedback gains for one feedback setting, both in `0..=4095`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CrossfadeGains {
    pub input: i32,
    pub feedback: i32,
}

/// Quadratic crossfade between input and feedback.
///
/// The input gain never drops below `min_input_gain`, so fresh signal always reaches the loop.
#[inline]
pub fn crossfade_gains(feedback: i32, min_input_gain: i32) -> CrossfadeGains {
    let feedback = clip_control(feedback);
    let inverse = CONTROL_MAX - feedback;

    CrossfadeGains {
        input: (CONTROL_MAX - ((feedback * feedback + 2048) >> 12)).max(min_input_gain),
        feedback: CONTROL_MAX - ((inverse * inverse + 2048) >> 12),
    }
}

/// Blends dry input and delayed signal with a single mix control.
#[inline]
pub fn dry_wet(input: i32, delayed: i32, mix: i32) -> i32 {
    let wet_gain = clip_control(mix);
    let dry_gain = CONTROL_MAX - wet_gain;

    clip_12((input * dry_gain + delayed * wet_gain + 2048) >> 12)
}

/// Builds the signal recorded into the store.
#[derive(Debug)]
pub struct FeedbackMixer {
    min_input_gain: i32,
    dc_blocker: OnePoleHighpass,
}

impl Default for FeedbackMixer {
    fn default() -> Self {
        Self::new(205, 200)
    }
}

impl FeedbackMixer {
    pub fn new(min_input_gain: i32, dc_blocker_coefficient: i32) -> Self {
        Self {
            min_input_gain,
            dc_blocker: OnePoleHighpass::new(dc_blocker_coefficient),
        }
    }

    pub fn init(&mut self) {
        self.dc_blocker.reset();
    }

    #[inline]
    pub fn gains(&self, feedback: i32) -> CrossfadeGains {
        crossfade_gains(feedback, self.min_input_gain)
    }

    /// Mixes the input with the already shaped feedback signal, removes DC and clamps.
    #[inline]
    pub fn process(&mut self, input: i32, feedback: i32, gains: CrossfadeGains) -> i32 {
        let mixed = scale_12(input, gains.input) + feedback;

        clip_12(self.dc_blocker.process(mixed))
    }
}
