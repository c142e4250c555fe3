// crates/slicenav-core/src/helpers/time.rs
//
// Shared time-formatting utilities for the navigation bar and slice labels.

/// Format a position in seconds as `H:MM:SS`.
///
/// Overnight recordings run past an hour almost immediately, so hours are
/// always shown (without zero-padding — "7:59:30" reads better than
/// "07:59:30" on a narrow transport bar).
///
/// ```
/// use slicenav_core::helpers::time::format_clock;
/// assert_eq!(format_clock(0.0),     "0:00:00");
/// assert_eq!(format_clock(61.5),    "0:01:01");
/// assert_eq!(format_clock(28770.0), "7:59:30");
/// ```
pub fn format_clock(secs: f64) -> String {
    let t = secs.max(0.0) as u64;
    format!("{}:{:02}:{:02}", t / 3600, (t % 3600) / 60, t % 60)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn whole_values() {
        assert_eq!(format_clock(0.0), "0:00:00");
        assert_eq!(format_clock(59.0), "0:00:59");
        assert_eq!(format_clock(60.0), "0:01:00");
        assert_eq!(format_clock(3600.0), "1:00:00");
    }

    #[test]
    fn fractional_seconds_truncate() {
        assert_eq!(format_clock(29.999), "0:00:29");
    }

    #[test]
    fn negative_clamps_to_zero() {
        assert_eq!(format_clock(-5.0), "0:00:00");
    }
}
