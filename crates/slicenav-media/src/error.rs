// crates/slicenav-media/src/error.rs

use std::path::PathBuf;
use thiserror::Error;

/// Errors a video load can surface to the user. Decode hiccups after a
/// successful open (end-of-stream, a frame that won't scale) are NOT errors —
/// they resolve to an absent frame.
#[derive(Debug, Error)]
pub enum MediaError {
    /// The path does not exist or is not a readable file.
    #[error("video file not found: {}", .0.display())]
    NotFound(PathBuf),

    /// FFmpeg could not initialize a decoder for the file (unsupported
    /// container/codec, corrupt header, no video stream).
    #[error("could not open video: {0}")]
    Open(String),
}
