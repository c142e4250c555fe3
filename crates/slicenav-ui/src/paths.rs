// src/paths.rs
// Single source of truth for where SliceNav stores its click-target file.

use std::path::PathBuf;

/// `%APPDATA%\SliceNav\clicks.json` on Windows,
/// `~/.local/share/slicenav/clicks.json` elsewhere.
pub fn click_config_path() -> PathBuf {
    #[cfg(target_os = "windows")]
    let base = std::env::var("APPDATA")
        .map(PathBuf::from)
        .unwrap_or_else(|_| std::env::temp_dir())
        .join("SliceNav");
    #[cfg(not(target_os = "windows"))]
    let base = std::env::var("HOME")
        .map(|h| PathBuf::from(h).join(".local").join("share"))
        .unwrap_or_else(|_| std::env::temp_dir())
        .join("slicenav");
    base.join("clicks.json")
}
