use std::collections::VecDeque;
use std::path::Path;
use std::process::Command;

use super::grid::FrameRgba;
use crate::foundation::error::{SonogridError, SonogridResult};

/// Extensions routed to the video pipeline.
const VIDEO_EXTENSIONS: &[&str] = &["mp4", "mov", "mkv", "webm", "avi", "m4v"];

/// Whether the input path should be treated as a video.
pub fn is_video_path(path: &Path) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| VIDEO_EXTENSIONS.iter().any(|v| ext.eq_ignore_ascii_case(v)))
}

/// Whether `ffmpeg` can be spawned from the current environment.
pub fn is_ffmpeg_on_path() -> bool {
    Command::new("ffmpeg")
        .arg("-version")
        .output()
        .map(|out| out.status.success())
        .unwrap_or(false)
}

/// A sequence of fixed-size RGBA frames feeding the tone pipeline.
///
/// The pipeline is agnostic to decoding and resizing; it only consumes
/// `grid_size` x `grid_size` frames in order.
pub trait FrameSource {
    /// Edge length of every frame this source yields.
    fn grid_size(&self) -> u32;

    /// Next frame in order, or `None` once the source is drained.
    fn next_frame(&mut self) -> SonogridResult<Option<FrameRgba>>;
}

/// Single still image, decoded and resized up front.
pub struct ImageSource {
    size: u32,
    frame: Option<FrameRgba>,
}

impl ImageSource {
    /// Decode `path` and resize to `size` x `size`. Aspect ratio is discarded.
    pub fn open(path: &Path, size: u32) -> SonogridResult<Self> {
        let bytes = std::fs::read(path).map_err(|e| {
            SonogridError::input(format!("cannot read '{}': {e}", path.display()))
        })?;
        let decoded = image::load_from_memory(&bytes).map_err(|e| {
            SonogridError::input(format!("cannot decode '{}': {e}", path.display()))
        })?;
        let resized =
            image::imageops::resize(&decoded.to_rgba8(), size, size, image::imageops::FilterType::Triangle);
        let frame = FrameRgba::new(size, resized.into_raw())?;
        Ok(Self {
            size,
            frame: Some(frame),
        })
    }
}

impl FrameSource for ImageSource {
    fn grid_size(&self) -> u32 {
        self.size
    }

    fn next_frame(&mut self) -> SonogridResult<Option<FrameRgba>> {
        Ok(self.frame.take())
    }
}

/// Video sampled at a fixed interval via the system `ffmpeg` binary.
///
/// ffmpeg performs the sampling and the resize in one pass; all sampled
/// frames are decoded up front and held in memory.
pub struct VideoSource {
    size: u32,
    frames: VecDeque<FrameRgba>,
}

impl VideoSource {
    /// Sample one frame every `frame_duration_sec` of source time, resized to
    /// `size` x `size`.
    pub fn open(path: &Path, size: u32, frame_duration_sec: f64) -> SonogridResult<Self> {
        if !frame_duration_sec.is_finite() || frame_duration_sec <= 0.0 {
            return Err(SonogridError::validation(format!(
                "frame duration must be a positive number of seconds, got {frame_duration_sec}"
            )));
        }

        let fps = 1.0 / frame_duration_sec;
        let out = Command::new("ffmpeg")
            .args(["-v", "error", "-i"])
            .arg(path)
            .args([
                "-vf",
                &format!("fps={fps:.9},scale={size}:{size}"),
                "-f",
                "rawvideo",
                "-pix_fmt",
                "rgba",
                "pipe:1",
            ])
            .output()
            .map_err(|e| SonogridError::input(format!("failed to run ffmpeg: {e}")))?;

        if !out.status.success() {
            return Err(SonogridError::input(format!(
                "ffmpeg failed for '{}': {}",
                path.display(),
                String::from_utf8_lossy(&out.stderr).trim()
            )));
        }

        let frame_len = size as usize * size as usize * 4;
        if frame_len == 0 || out.stdout.is_empty() || !out.stdout.len().is_multiple_of(frame_len) {
            return Err(SonogridError::input(format!(
                "ffmpeg produced {} bytes for '{}', expected a positive multiple of {frame_len}",
                out.stdout.len(),
                path.display()
            )));
        }

        let mut frames = VecDeque::with_capacity(out.stdout.len() / frame_len);
        for chunk in out.stdout.chunks_exact(frame_len) {
            frames.push_back(FrameRgba::new(size, chunk.to_vec())?);
        }
        tracing::info!(
            frames = frames.len(),
            fps,
            "sampled video frames via ffmpeg"
        );
        Ok(Self { size, frames })
    }
}

impl FrameSource for VideoSource {
    fn grid_size(&self) -> u32 {
        self.size
    }

    fn next_frame(&mut self) -> SonogridResult<Option<FrameRgba>> {
        Ok(self.frames.pop_front())
    }
}
