//! Live delay with MIDI parameter control.
//!
//! Note on messages play a short decaying square burst into the delay.

use audio_midi_shell::{AudioGenerator, AudioMidiShell};
use simple_logger::SimpleLogger;

use feedback_delay_dsp::control::SwitchPosition;
use feedback_delay_dsp::{Controls, DelayEngine, SAMPLE_RATE};

const BLOCK_SIZE: usize = 32;
const BURST_LENGTH: u32 = 4800;

fn main() -> ! {
    SimpleLogger::new()
        .with_level(log::LevelFilter::Debug)
        .init()
        .unwrap();

    AudioMidiShell::run_forever(SAMPLE_RATE, BLOCK_SIZE, App::new());
}

#[derive(Debug)]
struct App {
    engine: Box<DelayEngine>,
    controls: Controls,
    burst_period: u32,
    burst_remaining: u32,
    burst_level: i32,
}

impl App {
    pub fn new() -> Self {
        Self {
            engine: Box::new(DelayEngine::new()),
            controls: Controls {
                delay: 1024,
                feedback: 2048,
                mix: 2048,
                ..Default::default()
            },
            burst_period: 100,
            burst_remaining: 0,
            burst_level: 0,
        }
    }

    fn next_input(&mut self) -> i16 {
        if self.burst_remaining == 0 {
            return 0;
        }
        self.burst_remaining -= 1;

        let elapsed = BURST_LENGTH - self.burst_remaining;
        let level = self.burst_level * self.burst_remaining as i32 / BURST_LENGTH as i32;
        if (elapsed % self.burst_period) < self.burst_period / 2 {
            level as i16
        } else {
            -level as i16
        }
    }
}

impl AudioGenerator for App {
    fn init(&mut self, _block_size: usize) {
        self.engine.init(SwitchPosition::Middle);
    }

    fn process(&mut self, samples_left: &mut [f32], samples_right: &mut [f32]) {
        for (left, right) in samples_left.iter_mut().zip(samples_right.iter_mut()) {
            let input = self.next_input();
            self.controls.audio_in = [input, input];

            let frame = self.engine.process(&self.controls);

            // The switch is momentary, release it after one sample.
            self.controls.switch = SwitchPosition::Middle;
            self.controls.tap = false;

            *left = frame.audio_out[0] as f32 / 2048.0;
            *right = frame.audio_out[1] as f32 / 2048.0;
        }
    }

    fn process_midi(&mut self, message: Vec<u8>) {
        match message[0] & 0xF0 {
            0x90 if message[2] != 0 => {
                // Note on
                let frequency = 440.0 * 2.0_f32.powf((message[1] as f32 - 69.0) / 12.0);
                self.burst_period = ((SAMPLE_RATE as f32 / frequency) as u32).max(2);
                self.burst_remaining = BURST_LENGTH;
                self.burst_level = message[2] as i32 * 12;
                log::info!("Note on: {}", message[1]);
            }
            0xB0 => {
                // Control change
                let value = message[2] as i32 * 4095 / 127;
                match message[1] {
                    21 => {
                        self.controls.delay = value;
                        log::info!("Delay: {}", value);
                    }
                    22 => {
                        self.controls.feedback = value;
                        log::info!("Feedback: {}", value);
                    }
                    23 => {
                        self.controls.mix = value;
                        log::info!("Mix: {}", value);
                    }
                    24 => {
                        self.controls.delay_cv = value - 2048;
                        log::info!("Delay CV: {}", value - 2048);
                    }
                    25 => {
                        self.controls.feedback_cv = value - 2048;
                        log::info!("Feedback CV: {}", value - 2048);
                    }
                    26 if message[2] != 0 => {
                        self.controls.switch = SwitchPosition::Down;
                    }
                    27 if message[2] != 0 => {
                        self.controls.tap = true;
                    }
                    28 => {
                        self.controls.freeze = message[2] >= 64;
                    }
                    _ => {}
                }
            }
            _ => {}
        }
    }
}
