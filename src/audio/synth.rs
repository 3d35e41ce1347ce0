use std::f64::consts::TAU;
use std::fs;
use std::path::Path;

use super::tone::FreqAmp;
use crate::foundation::error::{SonogridError, SonogridResult};

/// Default output sample rate in Hz.
pub const SAMPLE_RATE_HZ: u32 = 44_100;

/// Render one tone as a sine buffer of exactly `sample_rate` samples.
///
/// Samples are spaced evenly over `[0, duration_sec]` with both endpoints
/// included, so the buffer length is fixed by the sample rate alone and the
/// sample at t=0 is always the zero crossing. Each value is
/// `amp * sin(2π · hz · t)` cast to `i16`; amplitudes within [`AMP_MAX`]
/// cannot overflow the cast, and that bound is a caller invariant, not a
/// guard.
///
/// [`AMP_MAX`]: crate::audio::tone::AMP_MAX
pub fn synthesize(tone: FreqAmp, sample_rate: u32, duration_sec: f64) -> Vec<i16> {
    let n = sample_rate as usize;
    let step = if n > 1 {
        duration_sec / (n - 1) as f64
    } else {
        0.0
    };
    (0..n)
        .map(|i| {
            let t = step * i as f64;
            (tone.amp * (TAU * tone.hz * t).sin()) as i16
        })
        .collect()
}

/// Write mono 16-bit PCM samples as a WAV file.
///
/// The file is assembled under a temp name and renamed into place, so a
/// failed run never leaves a truncated artifact at the destination.
pub fn write_wav(samples: &[i16], sample_rate: u32, out: &Path) -> SonogridResult<()> {
    if let Some(parent) = out.parent()
        && !parent.as_os_str().is_empty()
    {
        fs::create_dir_all(parent).map_err(|e| {
            SonogridError::synthesis(format!(
                "cannot create output directory '{}': {e}",
                parent.display()
            ))
        })?;
    }

    let spec = hound::WavSpec {
        channels: 1,
        sample_rate,
        bits_per_sample: 16,
        sample_format: hound::SampleFormat::Int,
    };
    let tmp = out.with_extension("wav.tmp");
    let mut writer = hound::WavWriter::create(&tmp, spec).map_err(|e| {
        SonogridError::synthesis(format!("cannot create '{}': {e}", tmp.display()))
    })?;
    for &sample in samples {
        writer
            .write_sample(sample)
            .map_err(|e| SonogridError::synthesis(format!("cannot write sample: {e}")))?;
    }
    writer
        .finalize()
        .map_err(|e| SonogridError::synthesis(format!("cannot finalize '{}': {e}", tmp.display())))?;
    fs::rename(&tmp, out).map_err(|e| {
        SonogridError::synthesis(format!("cannot publish '{}': {e}", out.display()))
    })
}

#[cfg(test)]
#[path = "../../tests/unit/audio/synth.rs"]
mod tests;
