// crates/slicenav-core/src/lib.rs
//
// Pure data and math — no egui, no ffmpeg, no runtime handles.
// Slice arithmetic, the click-target store, and the command vocabulary
// shared between the UI shell and the controller.

pub mod clicks;
pub mod commands;
pub mod helpers;
pub mod slices;

pub use clicks::ClickStore;
pub use commands::{NavAction, NavigatorCommand, NAV_STEP_SECS};
pub use slices::{SliceGrid, SliceParseError, DEFAULT_SLICE_SECS};
