use crate::curve::hilbert::GridPath;
use crate::foundation::error::{SonogridError, SonogridResult};

/// Square RGBA8 frame, row-major, tightly packed.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FrameRgba {
    size: u32,
    data: Vec<u8>,
}

impl FrameRgba {
    /// Wrap raw pixel bytes, validating the length against the edge size.
    pub fn new(size: u32, data: Vec<u8>) -> SonogridResult<Self> {
        let expected = size as usize * size as usize * 4;
        if data.len() != expected {
            return Err(SonogridError::validation(format!(
                "frame data is {} bytes, expected {expected} for a {size}x{size} grid",
                data.len()
            )));
        }
        Ok(Self { size, data })
    }

    /// Uniform frame of one color.
    pub fn solid(size: u32, rgba: [u8; 4]) -> Self {
        let cells = size as usize * size as usize;
        Self {
            size,
            data: rgba.repeat(cells),
        }
    }

    /// Grid edge length.
    pub fn size(&self) -> u32 {
        self.size
    }

    /// Raw RGBA8 bytes, row-major.
    pub fn data(&self) -> &[u8] {
        &self.data
    }

    /// Read one pixel.
    ///
    /// Panics if the coordinate lies outside the grid; callers hold the
    /// grid-size contract, so an out-of-range read is a programming error.
    pub fn pixel(&self, x: u32, y: u32) -> [u8; 4] {
        assert!(
            x < self.size && y < self.size,
            "pixel ({x},{y}) outside {0}x{0} frame",
            self.size
        );
        let i = (y as usize * self.size as usize + x as usize) * 4;
        [self.data[i], self.data[i + 1], self.data[i + 2], self.data[i + 3]]
    }
}

/// Walk `frame` in `path` order, yielding every pixel exactly once.
///
/// Fails with a validation error if the frame edge differs from the path's
/// grid size; after that check every lookup is in range.
pub fn sample_pixels<'a>(
    frame: &'a FrameRgba,
    path: &'a GridPath,
) -> SonogridResult<impl Iterator<Item = [u8; 4]> + 'a> {
    if frame.size() != path.size() {
        return Err(SonogridError::validation(format!(
            "frame edge {} does not match path grid size {}",
            frame.size(),
            path.size()
        )));
    }
    Ok(path.iter().map(move |(x, y)| frame.pixel(x, y)))
}
