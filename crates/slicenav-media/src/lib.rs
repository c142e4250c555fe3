// crates/slicenav-media/src/lib.rs
//
// No egui dependency — the UI crate sees frames and errors, never ffmpeg
// types. Call `init()` once at startup before opening any source.

pub mod error;
pub mod source;
pub mod timeline;

pub use error::MediaError;
pub use source::{FfmpegSource, Frame, FrameSource};
pub use timeline::VideoTimeline;

/// Initialize FFmpeg. Must run once before the first `VideoTimeline::load`.
pub fn init() -> Result<(), ffmpeg_the_third::Error> {
    ffmpeg_the_third::init()
}
