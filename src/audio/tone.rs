use crate::foundation::error::{SonogridError, SonogridResult};

/// Lowest frequency the mapping can produce, in Hz.
pub const FREQ_MIN_HZ: f64 = 25.0;
/// Highest frequency the mapping can produce, in Hz.
pub const FREQ_MAX_HZ: f64 = 16_000.0;
/// Upper bound of the linear amplitude scale.
pub const AMP_MAX: f64 = 60.0;

const CHANNEL_MAX: f64 = 255.0;
const COLOR_SUM_MAX: f64 = 3.0 * CHANNEL_MAX;

/// One tone: a frequency in `[25, 16000]` Hz and a linear amplitude in
/// `[0, 60]`. Represents a single pixel's contribution or a frame's
/// aggregate.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct FreqAmp {
    /// Sine frequency in Hz.
    pub hz: f64,
    /// Linear amplitude (not decibels, despite the historical range).
    pub amp: f64,
}

/// Map one pixel to its tone. Alpha is ignored.
///
/// Brightness drives amplitude, the channel sum drives frequency. These
/// coefficients are the system's audible contract; do not retune them.
pub fn map_pixel(rgba: [u8; 4]) -> FreqAmp {
    let r = f64::from(rgba[0]);
    let g = f64::from(rgba[1]);
    let b = f64::from(rgba[2]);

    let brightness = (r + g + b) / 3.0;
    let amp = brightness * (AMP_MAX / CHANNEL_MAX);

    let color_sum = r + g + b;
    let hz = color_sum * ((FREQ_MAX_HZ - FREQ_MIN_HZ) / COLOR_SUM_MAX) + FREQ_MIN_HZ;

    FreqAmp { hz, amp }
}

/// Running reduction of per-pixel tones into one frame tone.
///
/// Only the two sums and the visit count are carried, so a frame reduces
/// without materializing its tone list, and partial accumulators can be
/// merged in any grouping: the reduction is commutative and associative
/// modulo floating-point rounding.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct ToneAccumulator {
    sum_hz: f64,
    sum_amp: f64,
    count: u64,
}

impl ToneAccumulator {
    /// Empty accumulator.
    pub fn new() -> Self {
        Self::default()
    }

    /// Fold one tone into the running sums.
    pub fn push(&mut self, tone: FreqAmp) {
        self.sum_hz += tone.hz;
        self.sum_amp += tone.amp;
        self.count += 1;
    }

    /// Combine two partial reductions.
    pub fn merge(self, other: Self) -> Self {
        Self {
            sum_hz: self.sum_hz + other.sum_hz,
            sum_amp: self.sum_amp + other.sum_amp,
            count: self.count + other.count,
        }
    }

    /// Number of tones folded in so far.
    pub fn count(&self) -> u64 {
        self.count
    }

    /// Collapse the sums back into the single-pixel ranges.
    ///
    /// Normalizing by the visit count keeps the aggregate inside
    /// `[FREQ_MIN_HZ, FREQ_MAX_HZ] x [0, AMP_MAX]` and makes a uniform frame
    /// collapse to exactly the tone of its pixel.
    pub fn finish(self) -> SonogridResult<FreqAmp> {
        if self.count == 0 {
            return Err(SonogridError::validation(
                "cannot aggregate an empty tone sequence",
            ));
        }
        let n = self.count as f64;
        Ok(FreqAmp {
            hz: self.sum_hz / n,
            amp: self.sum_amp / n,
        })
    }
}

/// Reduce a full tone sequence in one call.
pub fn aggregate_tones(tones: impl IntoIterator<Item = FreqAmp>) -> SonogridResult<FreqAmp> {
    let mut acc = ToneAccumulator::new();
    for tone in tones {
        acc.push(tone);
    }
    acc.finish()
}

#[cfg(test)]
#[path = "../../tests/unit/audio/tone.rs"]
mod tests;
