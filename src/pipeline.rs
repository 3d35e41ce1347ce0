use std::path::Path;

use rayon::prelude::*;

use crate::{
    audio::synth,
    audio::tone::{self, FreqAmp},
    curve::cache::PathProvider,
    curve::hilbert::GridPath,
    foundation::error::{SonogridError, SonogridResult},
    frame::grid::{self, FrameRgba},
    frame::source::{self, FrameSource, ImageSource, VideoSource},
};

/// Default grid edge length.
pub const DEFAULT_GRID_SIZE: u32 = 256;
/// Default seconds of audio synthesized per frame.
pub const DEFAULT_FRAME_DURATION_SEC: f64 = 0.5;

/// Tunables for one sonification run.
#[derive(Clone, Copy, Debug)]
pub struct PipelineConfig {
    /// Grid edge length; every frame is resized to this square. Power of two.
    pub grid_size: u32,
    /// Output sample rate in Hz.
    pub sample_rate: u32,
    /// Seconds of audio per frame; also the video sampling interval.
    pub frame_duration_sec: f64,
}

impl Default for PipelineConfig {
    fn default() -> Self {
        Self {
            grid_size: DEFAULT_GRID_SIZE,
            sample_rate: synth::SAMPLE_RATE_HZ,
            frame_duration_sec: DEFAULT_FRAME_DURATION_SEC,
        }
    }
}

/// Totals reported after a successful run.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct SonifyStats {
    /// Frames drained from the source.
    pub frames: u64,
    /// Samples in the concatenated output buffer.
    pub samples: u64,
}

/// Reduce one frame to its aggregate tone.
///
/// Streaming fold over the path walk; the per-pixel tone list is never
/// materialized.
pub fn frame_tone(frame: &FrameRgba, path: &GridPath) -> SonogridResult<FreqAmp> {
    let mut acc = tone::ToneAccumulator::new();
    for px in grid::sample_pixels(frame, path)? {
        acc.push(tone::map_pixel(px));
    }
    acc.finish()
}

/// Drain a frame source into one concatenated audio buffer.
///
/// Tone mapping and synthesis run in parallel across frames; each frame's own
/// accumulation stays a fixed-order sequential fold, and the order-preserving
/// collect re-imposes strict frame order on the output.
pub fn sonify_source(
    source: &mut dyn FrameSource,
    path: &GridPath,
    config: &PipelineConfig,
) -> SonogridResult<(Vec<i16>, SonifyStats)> {
    if source.grid_size() != path.size() {
        return Err(SonogridError::validation(format!(
            "frame source grid {} does not match path grid {}",
            source.grid_size(),
            path.size()
        )));
    }

    let mut frames = Vec::new();
    while let Some(frame) = source.next_frame()? {
        frames.push(frame);
    }
    if frames.is_empty() {
        return Err(SonogridError::input("frame source yielded no frames"));
    }
    tracing::info!(frames = frames.len(), "mapping frames to tones");

    let buffers = frames
        .par_iter()
        .map(|frame| {
            let tone = frame_tone(frame, path)?;
            tracing::debug!(hz = tone.hz, amp = tone.amp, "frame tone");
            Ok(synth::synthesize(
                tone,
                config.sample_rate,
                config.frame_duration_sec,
            ))
        })
        .collect::<SonogridResult<Vec<_>>>()?;

    let total = buffers.iter().map(Vec::len).sum();
    let mut samples = Vec::with_capacity(total);
    for buffer in &buffers {
        samples.extend_from_slice(buffer);
    }

    let stats = SonifyStats {
        frames: frames.len() as u64,
        samples: samples.len() as u64,
    };
    Ok((samples, stats))
}

/// End-to-end driver: open the input, run the pipeline, write the WAV.
///
/// Videos are picked out by extension; everything else goes through the image
/// decoder. The traversal comes from `provider`, so the path cache location
/// stays a caller decision.
pub fn sonify_to_wav(
    input: &Path,
    out: &Path,
    config: &PipelineConfig,
    provider: &PathProvider,
) -> SonogridResult<SonifyStats> {
    let path = provider.obtain(config.grid_size)?;

    let mut frame_source: Box<dyn FrameSource> = if source::is_video_path(input) {
        if !source::is_ffmpeg_on_path() {
            return Err(SonogridError::input(
                "video inputs require `ffmpeg` on PATH",
            ));
        }
        tracing::info!(
            input = %input.display(),
            fps = 1.0 / config.frame_duration_sec,
            "sampling video frames"
        );
        Box::new(VideoSource::open(
            input,
            config.grid_size,
            config.frame_duration_sec,
        )?)
    } else {
        tracing::info!(input = %input.display(), "decoding still image");
        Box::new(ImageSource::open(input, config.grid_size)?)
    };

    let (samples, stats) = sonify_source(frame_source.as_mut(), &path, config)?;
    tracing::info!(out = %out.display(), samples = stats.samples, "writing wav");
    synth::write_wav(&samples, config.sample_rate, out)?;
    Ok(stats)
}

#[cfg(test)]
#[path = "../tests/unit/pipeline.rs"]
mod tests;
