// crates/slicenav-core/src/slices.rs
//
// Slice arithmetic: the mapping between continuous playback time and the
// 1-based 30-second windows a reviewer scores one at a time.
//
// Everything here is a pure function of (time, duration, slice_secs). The
// grid holds no playback state — the timeline owns time and duration, the
// grid only converts.

use thiserror::Error;

/// Length of one review window. Overnight recordings are conventionally
/// scored in 30-second pages, so that is the default grid.
pub const DEFAULT_SLICE_SECS: f64 = 30.0;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SliceGrid {
    slice_secs: f64,
}

impl Default for SliceGrid {
    fn default() -> Self {
        Self { slice_secs: DEFAULT_SLICE_SECS }
    }
}

impl SliceGrid {
    /// `slice_secs` must be positive; a zero-length slice has no meaning.
    pub fn new(slice_secs: f64) -> Self {
        debug_assert!(slice_secs > 0.0);
        Self { slice_secs }
    }

    pub fn slice_secs(&self) -> f64 {
        self.slice_secs
    }

    /// Total number of slices covering `[0, duration]`. A video shorter than
    /// one slice still has one slice; an unloaded timeline (duration 0)
    /// reports one so the label never shows "0 / 0".
    pub fn total_slices(&self, duration: f64) -> u32 {
        if duration <= 0.0 {
            return 1;
        }
        (duration / self.slice_secs).ceil() as u32
    }

    /// Slice containing `time`. Capped at the last slice so that
    /// `time == duration` on an exact boundary belongs to the final slice
    /// rather than a phantom one past the end.
    pub fn slice_at(&self, time: f64, duration: f64) -> u32 {
        if duration <= 0.0 {
            return 1;
        }
        let raw = (time.max(0.0) / self.slice_secs) as u32 + 1;
        raw.min(self.total_slices(duration))
    }

    /// Start time of slice `n` (1-based).
    pub fn slice_start(&self, n: u32) -> f64 {
        (n.saturating_sub(1)) as f64 * self.slice_secs
    }

    /// Clamp a user-entered slice number into `[1, total_slices]`.
    pub fn clamp_slice(&self, n: i64, duration: f64) -> u32 {
        n.clamp(1, self.total_slices(duration) as i64) as u32
    }
}

/// The go-to-slice entry accepted something that isn't an integer.
#[derive(Debug, Error, PartialEq, Eq)]
#[error("invalid slice number: {input:?}")]
pub struct SliceParseError {
    pub input: String,
}

/// Parse a user-entered slice number. Whitespace is tolerated; anything
/// that isn't a whole number is rejected so the caller can re-prompt.
pub fn parse_slice_number(text: &str) -> Result<i64, SliceParseError> {
    text.trim()
        .parse::<i64>()
        .map_err(|_| SliceParseError { input: text.to_string() })
}
