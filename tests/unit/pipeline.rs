use super::*;

use std::collections::VecDeque;

use crate::curve::hilbert::hilbert_path;

struct VecSource {
    size: u32,
    frames: VecDeque<FrameRgba>,
}

impl VecSource {
    fn solid_frames(size: u32, colors: &[[u8; 4]]) -> Self {
        Self {
            size,
            frames: colors
                .iter()
                .map(|&rgba| FrameRgba::solid(size, rgba))
                .collect(),
        }
    }
}

impl FrameSource for VecSource {
    fn grid_size(&self) -> u32 {
        self.size
    }

    fn next_frame(&mut self) -> SonogridResult<Option<FrameRgba>> {
        Ok(self.frames.pop_front())
    }
}

fn config(size: u32) -> PipelineConfig {
    PipelineConfig {
        grid_size: size,
        sample_rate: 4_000,
        frame_duration_sec: 0.5,
    }
}

#[test]
fn black_frame_collapses_to_silence() {
    let path = hilbert_path(16).unwrap();
    let mut source = VecSource::solid_frames(16, &[[0, 0, 0, 255]]);

    let (samples, stats) = sonify_source(&mut source, &path, &config(16)).unwrap();
    assert_eq!(stats, SonifyStats { frames: 1, samples: 4_000 });
    assert!(samples.iter().all(|&s| s == 0));
}

#[test]
fn black_frame_tone_sits_at_the_range_floor() {
    let path = hilbert_path(16).unwrap();
    let tone = frame_tone(&FrameRgba::solid(16, [0, 0, 0, 255]), &path).unwrap();
    assert!((tone.hz - 25.0).abs() < 1e-6);
    assert!(tone.amp.abs() < 1e-6);
}

#[test]
fn white_frame_tone_hits_the_range_ceiling() {
    let path = hilbert_path(16).unwrap();
    let tone = frame_tone(&FrameRgba::solid(16, [255, 255, 255, 255]), &path).unwrap();
    assert!((tone.hz - 16_000.0).abs() < 1e-6);
    assert!((tone.amp - 60.0).abs() < 1e-6);
}

#[test]
fn video_buffers_concatenate_in_frame_order() {
    let path = hilbert_path(8).unwrap();
    let cfg = config(8);
    let black = [0, 0, 0, 255];
    let white = [255, 255, 255, 255];

    let (black_only, _) =
        sonify_source(&mut VecSource::solid_frames(8, &[black]), &path, &cfg).unwrap();
    let (white_only, _) =
        sonify_source(&mut VecSource::solid_frames(8, &[white]), &path, &cfg).unwrap();
    let (both, stats) =
        sonify_source(&mut VecSource::solid_frames(8, &[black, white]), &path, &cfg).unwrap();

    assert_eq!(stats.frames, 2);
    assert_eq!(both.len(), black_only.len() + white_only.len());
    assert_eq!(&both[..black_only.len()], black_only.as_slice());
    assert_eq!(&both[black_only.len()..], white_only.as_slice());
}

#[test]
fn empty_source_is_an_input_error() {
    let path = hilbert_path(8).unwrap();
    let mut source = VecSource::solid_frames(8, &[]);
    assert!(matches!(
        sonify_source(&mut source, &path, &config(8)),
        Err(SonogridError::Input(_))
    ));
}

#[test]
fn source_grid_must_match_path_grid() {
    let path = hilbert_path(8).unwrap();
    let mut source = VecSource::solid_frames(16, &[[0, 0, 0, 255]]);
    assert!(matches!(
        sonify_source(&mut source, &path, &config(16)),
        Err(SonogridError::Validation(_))
    ));
}
