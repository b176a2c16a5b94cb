//! Test signals and engine setup

use feedback_delay_dsp::control::SwitchPosition;
use feedback_delay_dsp::{Controls, DelayEngine, Frame};

/// Returns an initialized engine on the heap.
pub fn engine() -> Box<DelayEngine> {
    let mut engine = Box::new(DelayEngine::new());
    engine.init(SwitchPosition::Middle);

    engine
}

/// Returns controls with both inputs set to `input`.
pub fn controls(input: i16, delay: i32, feedback: i32, mix: i32) -> Controls {
    Controls {
        audio_in: [input, input],
        delay,
        feedback,
        mix,
        ..Default::default()
    }
}

/// Single sample of `level` at sample 0.
pub fn impulse(n: usize, level: i16) -> i16 {
    if n == 0 {
        level
    } else {
        0
    }
}

/// Deterministic broadband test signal in range -2000..=2000.
pub fn noise(n: usize) -> i16 {
    ((n * 7919) % 4001) as i16 - 2000
}

/// Triangle wave with a period of `period` samples in range -level..=level.
pub fn triangle(n: usize, period: usize, level: i16) -> i16 {
    let phase = (n % period) as i32;
    let half = (period / 2) as i32;
    let level = level as i32;
    let value = if phase < half {
        -level + 2 * level * phase / half
    } else {
        level - 2 * level * (phase - half) / half
    };

    value as i16
}

/// Renders `length` samples with controls built per sample.
pub fn render(
    engine: &mut DelayEngine,
    length: usize,
    mut controls: impl FnMut(usize) -> Controls,
) -> Vec<Frame> {
    (0..length).map(|n| engine.process(&controls(n))).collect()
}

/// Index of the sample with the largest magnitude within `range`.
pub fn peak(samples: &[i16], range: core::ops::Range<usize>) -> usize {
    range
        .max_by_key(|&n| (samples[n] as i32).abs())
        .unwrap()
}

pub fn left(frames: &[Frame]) -> Vec<i16> {
    frames.iter().map(|frame| frame.audio_out[0]).collect()
}

pub fn right(frames: &[Frame]) -> Vec<i16> {
    frames.iter().map(|frame| frame.audio_out[1]).collect()
}
