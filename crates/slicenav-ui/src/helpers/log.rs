// src/helpers/log.rs
//
// Unified logging for the UI crate.
//
// In release builds with `windows_subsystem = "windows"` (double-click
// launch) there is no console attached, so `eprintln!` output is silently
// discarded. All log calls go to a temp file instead so click-simulation and
// flush failures are visible regardless of launch mode.
//
// File: %TEMP%\slicenav.log — append-only, created on first write per session.
//
// Usage:
//   nav_log!("[click] forward at (500, 500) failed: {e}");

use std::io::Write;

/// Write `msg` to the SliceNav log file in the OS temp directory.
/// Never panics; failures are silently ignored.
pub fn write_log(msg: &str) {
    if let Ok(mut f) = std::fs::OpenOptions::new()
        .create(true)
        .append(true)
        .open(std::env::temp_dir().join("slicenav.log"))
    {
        let ts = std::time::SystemTime::now()
            .duration_since(std::time::UNIX_EPOCH)
            .map(|d| d.as_secs())
            .unwrap_or(0);
        let _ = writeln!(f, "[{ts}] {msg}");
    }
}

/// Convenience macro — formats like `eprintln!` but routes through `write_log`.
#[macro_export]
macro_rules! nav_log {
    ($($arg:tt)*) => {
        $crate::helpers::log::write_log(&format!($($arg)*))
    };
}
