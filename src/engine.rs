//! The delay engine.
//!
//! [`DelayEngine::process`] is the single per-sample step. It is meant to be called from the
//! audio interrupt of the host, either directly or through [`DelayEngine::run`] with a
//! [`SampleHost`] implementation.

use crate::config::{Config, ConfigError};
use crate::control::conditioner::{control_to_delay, ControlConditioner};
use crate::control::freeze::Freeze;
use crate::control::tap_tempo::TapTempo;
use crate::control::{combine, SwitchPosition};
use crate::indicators::{IndicatorState, Indicators};
use crate::mixer::{dry_wet, FeedbackMixer};
use crate::mode::{Mode, ModeUnit};
use crate::utils::delay_line::SampleStore;
use crate::utils::{average, clip_12, scale_12};
use crate::{DELAY_FRACTION_BITS, STORE_SIZE};

/// Control and audio readings for one sample.
#[derive(Debug, Clone, Copy, Default)]
pub struct Controls {
    /// Audio inputs in the range from `-2048` to `2047`. Both are averaged to one mono input.
    pub audio_in: [i16; 2],

    /// Delay time knob in the range from `0` to `4095`.
    pub delay: i32,

    /// Delay time CV, added to the knob. Nominal range is `-2048` to `2047`.
    pub delay_cv: i32,

    /// Feedback knob in the range from `0` to `4095`.
    pub feedback: i32,

    /// Feedback CV, added to the knob. Nominal range is `-2048` to `2047`.
    pub feedback_cv: i32,

    /// Dry/wet mix in the range from `0` (dry) to `4095` (wet).
    pub mix: i32,

    /// Mode switch. Pressing it into `Down` selects the next mode.
    pub switch: SwitchPosition,

    /// Tap tempo trigger level.
    pub tap: bool,

    /// Freeze gate level.
    pub freeze: bool,
}

/// Result of one processing step.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Frame {
    /// Left and right output in the range from `-2047` to `2047`.
    pub audio_out: [i16; 2],

    pub indicators: Indicators,
}

/// Scheduler interface of the host.
///
/// The host fills in the readings for the next sample and receives the processed frame.
pub trait SampleHost {
    /// Fills `controls` for the next sample. Returns `false` to stop [`DelayEngine::run`].
    fn poll(&mut self, controls: &mut Controls) -> bool;

    fn emit(&mut self, frame: &Frame);
}

#[derive(Debug)]
pub struct DelayEngine {
    config: Config,
    store: SampleStore<i16, STORE_SIZE>,
    conditioner: ControlConditioner,
    tap_tempo: TapTempo,
    freeze: Freeze,
    modes: ModeUnit,
    mixer: FeedbackMixer,
    indicators: IndicatorState,
}

impl Default for DelayEngine {
    fn default() -> Self {
        Self::new()
    }
}

impl DelayEngine {
    pub fn new() -> Self {
        Self::build(Config::default())
    }

    /// Creates an engine with custom tuning.
    pub fn with_config(config: Config) -> Result<Self, ConfigError> {
        config.validate().map_err(|error| {
            log::warn!("Rejected configuration: {}", error);
            error
        })?;

        Ok(Self::build(config))
    }

    fn build(config: Config) -> Self {
        Self {
            config,
            store: SampleStore::new(),
            conditioner: ControlConditioner::new(config.hysteresis_threshold),
            tap_tempo: TapTempo::new(),
            freeze: Freeze::new(),
            modes: ModeUnit::new(&config),
            mixer: FeedbackMixer::new(config.min_input_gain, config.dc_blocker_coefficient),
            indicators: IndicatorState::new(),
        }
    }

    /// Clears the store and all state. `switch` is the mode switch position at startup.
    pub fn init(&mut self, switch: SwitchPosition) {
        self.store.init();
        self.conditioner.init();
        self.tap_tempo.init();
        self.freeze.init();
        self.modes.init(switch);
        self.mixer.init();
        self.indicators.init();
    }

    /// Processes one sample.
    #[inline]
    pub fn process(&mut self, controls: &Controls) -> Frame {
        let input = clip_12(average(
            controls.audio_in[0] as i32,
            controls.audio_in[1] as i32,
        ));

        let mode = self.modes.process_switch(controls.switch);
        let tap_target = self.tap_tempo.process(controls.tap);

        let delay_control = combine(controls.delay, controls.delay_cv);
        let held = self
            .conditioner
            .hold(delay_control, self.modes.hysteresis());
        let target = tap_target.unwrap_or_else(|| control_to_delay(held));
        let smoothed = self.conditioner.smooth(target);
        let (delay_left, delay_right) = self.modes.delays(smoothed);

        let position = self.freeze.process(
            controls.freeze,
            self.store.write_cursor(),
            self.store.size(),
            delay_left,
            delay_right,
        );
        let delayed_left = self
            .store
            .read_interpolated(position.cursor, position.delay_left);
        let delayed_right = self
            .store
            .read_interpolated(position.cursor, position.delay_right);

        let feedback = combine(controls.feedback, controls.feedback_cv);
        let gains = self.mixer.gains(feedback);
        let feedback_signal = self
            .modes
            .shape_feedback(scale_12(delayed_left, gains.feedback));
        let recorded = self.mixer.process(input, feedback_signal, gains);

        if position.record {
            self.store.write(recorded);
        }
        self.store.advance();

        let out_left = dry_wet(input, delayed_left, controls.mix);
        let out_right = dry_wet(input, delayed_right, controls.mix);

        let indicators = self.indicators.process(
            position.delay_left >> DELAY_FRACTION_BITS,
            feedback,
            mode,
        );

        Frame {
            audio_out: [out_left as i16, out_right as i16],
            indicators,
        }
    }

    /// Processes samples from `host` until it stops delivering them.
    pub fn run<H: SampleHost>(&mut self, host: &mut H) {
        let mut controls = Controls::default();
        while host.poll(&mut controls) {
            let frame = self.process(&controls);
            host.emit(&frame);
        }
    }

    #[inline]
    pub fn mode(&self) -> Mode {
        self.modes.mode()
    }

    pub fn set_mode(&mut self, mode: Mode) {
        self.modes.set_mode(mode);
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn store(&self) -> &SampleStore<i16, STORE_SIZE> {
        &self.store
    }

    pub fn conditioner(&self) -> &ControlConditioner {
        &self.conditioner
    }

    pub fn tap_tempo(&self) -> &TapTempo {
        &self.tap_tempo
    }

    pub fn freeze(&self) -> &Freeze {
        &self.freeze
    }

    pub fn modes(&self) -> &ModeUnit {
        &self.modes
    }
}
