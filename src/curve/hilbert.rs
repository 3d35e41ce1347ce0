use crate::foundation::error::{SonogridError, SonogridResult};

/// Ordered visit sequence over an N x N grid.
///
/// A `GridPath` is a bijection onto the grid: every cell appears exactly
/// once, and consecutive entries are grid-adjacent. Immutable once built.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GridPath {
    size: u32,
    points: Vec<(u32, u32)>,
}

impl GridPath {
    /// Wrap a precomputed point sequence, validating the bijection.
    ///
    /// Used when a path comes from outside the generator (the on-disk cache),
    /// so a tampered or truncated entry can never reach the sampler.
    pub fn from_points(size: u32, points: Vec<(u32, u32)>) -> SonogridResult<Self> {
        let cells = size as usize * size as usize;
        if points.len() != cells {
            return Err(SonogridError::validation(format!(
                "path has {} points, expected {cells} for a {size}x{size} grid",
                points.len()
            )));
        }
        let mut seen = vec![false; cells];
        for &(x, y) in &points {
            if x >= size || y >= size {
                return Err(SonogridError::validation(format!(
                    "path point ({x},{y}) lies outside the {size}x{size} grid"
                )));
            }
            let idx = y as usize * size as usize + x as usize;
            if seen[idx] {
                return Err(SonogridError::validation(format!(
                    "path visits cell ({x},{y}) more than once"
                )));
            }
            seen[idx] = true;
        }
        Ok(Self { size, points })
    }

    /// Grid edge length.
    pub fn size(&self) -> u32 {
        self.size
    }

    /// Number of visited cells (always `size * size`).
    pub fn len(&self) -> usize {
        self.points.len()
    }

    /// Whether the path covers no cells.
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// The full coordinate sequence in visit order.
    pub fn points(&self) -> &[(u32, u32)] {
        &self.points
    }

    /// Iterate the coordinates in visit order.
    pub fn iter(&self) -> impl Iterator<Item = (u32, u32)> + '_ {
        self.points.iter().copied()
    }
}

/// Compute the Hilbert traversal of a `size` x `size` grid.
///
/// `size` must be a power of two. The result is deterministic and pure;
/// cost grows with `size^2`, so callers should go through
/// [`PathProvider`](crate::curve::cache::PathProvider) instead of calling
/// this on every run.
pub fn hilbert_path(size: u32) -> SonogridResult<GridPath> {
    if size == 0 || !size.is_power_of_two() {
        return Err(SonogridError::grid_size(format!(
            "grid size must be a power of two, got {size}"
        )));
    }

    let n = u64::from(size);
    let cells = n * n;
    let mut points = Vec::with_capacity(cells as usize);
    for d in 0..cells {
        points.push(distance_to_xy(n, d));
    }
    // The construction visits every cell exactly once; no need to revalidate.
    Ok(GridPath { size, points })
}

/// Convert a distance along the curve to grid coordinates.
///
/// Iterative quadrant descent: each level reads two bits of `d`, reflects and
/// transposes the partial coordinate into the right sub-square, then doubles
/// the square. Consecutive distances land on grid-adjacent cells.
fn distance_to_xy(n: u64, d: u64) -> (u32, u32) {
    let (mut x, mut y) = (0u64, 0u64);
    let mut t = d;
    let mut s = 1u64;
    while s < n {
        let rx = (t / 2) & 1;
        let ry = (t ^ rx) & 1;
        if ry == 0 {
            if rx == 1 {
                x = s - 1 - x;
                y = s - 1 - y;
            }
            std::mem::swap(&mut x, &mut y);
        }
        x += s * rx;
        y += s * ry;
        t /= 4;
        s *= 2;
    }
    (x as u32, y as u32)
}

#[cfg(test)]
#[path = "../../tests/unit/curve/hilbert.rs"]
mod tests;
