//! Writer for WAV files

use std::path::Path;

use hound::*;

use feedback_delay_dsp::{Frame, SAMPLE_RATE};

/// Writes rendered frames as stereo WAV file in 16-bit integer format.
///
/// The 12-bit engine output is scaled up to use the full 16-bit range.
pub fn write(
    filename: impl AsRef<std::path::Path> + core::fmt::Display,
    frames: &[Frame],
) -> std::io::Result<()> {
    let path = format!("out/{filename}");
    let path = Path::new(path.as_str());

    // Create parent directories to the path if they don't exist.
    let parent = path.parent().unwrap();
    std::fs::create_dir_all(parent).ok();

    let spec = WavSpec {
        channels: 2,
        sample_rate: SAMPLE_RATE,
        bits_per_sample: 16,
        sample_format: SampleFormat::Int,
    };
    let mut writer = WavWriter::create(path, spec).map_err(to_io_error)?;

    for frame in frames {
        for sample in frame.audio_out {
            writer.write_sample(sample << 4).map_err(to_io_error)?;
        }
    }

    writer.finalize().map_err(to_io_error)
}

fn to_io_error(error: hound::Error) -> std::io::Error {
    match error {
        hound::Error::IoError(error) => error,
        other => std::io::Error::other(other.to_string()),
    }
}
