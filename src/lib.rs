//! Sonogrid turns pictures into sound.
//!
//! Pixels are visited along a Hilbert space-filling curve so that spatially
//! close pixels stay close in time, each pixel becomes a (frequency,
//! amplitude) tone, every frame collapses to one aggregate tone, and each
//! tone is rendered as a fixed-length sine buffer. Video inputs are sampled
//! at a fixed interval and their buffers concatenated in frame order into a
//! mono 16-bit WAV file.
//!
//! # Pipeline overview
//!
//! 1. **Trace**: [`hilbert_path`] computes the traversal; [`PathProvider`]
//!    caches it on disk so the cost is paid once per grid size
//! 2. **Sample**: [`sample_pixels`] walks a frame in path order
//! 3. **Map**: [`map_pixel`] turns each pixel into a [`FreqAmp`] tone
//! 4. **Aggregate**: [`ToneAccumulator`] reduces a frame to one tone
//! 5. **Synthesize**: [`synthesize`] and [`write_wav`] produce the output
//!
//! The key design constraints:
//!
//! - **No unsafe**: `unsafe` is forbidden in this crate.
//! - **Deterministic-by-default**: curve generation, mapping, aggregation and
//!   synthesis are pure and stable for a given input.
//! - **No IO in the numeric core**: decoding and resizing happen in
//!   [`FrameSource`] implementations; the pipeline only sees fixed-size
//!   RGBA grids.
#![forbid(unsafe_code)]

mod audio;
mod curve;
mod foundation;
mod frame;
mod pipeline;

pub use audio::synth::{SAMPLE_RATE_HZ, synthesize, write_wav};
pub use audio::tone::{
    AMP_MAX, FREQ_MAX_HZ, FREQ_MIN_HZ, FreqAmp, ToneAccumulator, aggregate_tones, map_pixel,
};
pub use curve::cache::{PathCache, PathProvider};
pub use curve::hilbert::{GridPath, hilbert_path};
pub use foundation::error::{SonogridError, SonogridResult};
pub use frame::grid::{FrameRgba, sample_pixels};
pub use frame::source::{FrameSource, ImageSource, VideoSource, is_ffmpeg_on_path, is_video_path};
pub use pipeline::{
    DEFAULT_FRAME_DURATION_SEC, DEFAULT_GRID_SIZE, PipelineConfig, SonifyStats, frame_tone,
    sonify_source, sonify_to_wav,
};
