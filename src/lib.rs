#![doc = include_str!("../README.md")]
#![cfg_attr(not(test), no_std)]

pub mod config;
pub mod control;
pub mod engine;
pub mod indicators;
pub mod mixer;
pub mod mode;
pub mod utils;

pub use config::{Config, ConfigError};
pub use engine::{Controls, DelayEngine, Frame, SampleHost};
pub use mode::Mode;

/// Audio sample rate in Hz.
pub const SAMPLE_RATE: u32 = 48000;

/// Number of slots in the sample store, 2 seconds at [`SAMPLE_RATE`].
pub const STORE_SIZE: usize = 96000;

/// Shortest delay in samples (~2 ms).
pub const MIN_DELAY: i32 = 100;

/// Longest delay in samples (~2 s).
pub const MAX_DELAY: i32 = 95000;

/// Number of fractional bits used for delay times.
pub const DELAY_FRACTION_BITS: u32 = 7;

/// Positive full scale of the 12-bit audio path.
pub const FULL_SCALE: i32 = 2047;

/// Full scale of knob and CV readings.
pub const CONTROL_MAX: i32 = 4095;
