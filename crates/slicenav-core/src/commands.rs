// crates/slicenav-core/src/commands.rs
//
// Every user action in SliceNav is expressed as a NavigatorCommand.
// Panels emit these; app.rs processes them after the UI pass.
// Adding a new feature = add a variant here + one match arm in app.rs.

use std::path::PathBuf;

/// Forward/backward step for the transport buttons and the post-scoring
/// advance. Deliberately a separate constant from the slice length — the two
/// happen to both be 30 s today, but the step is a transport setting while
/// the slice length defines the scoring grid.
pub const NAV_STEP_SECS: f64 = 30.0;

/// The closed set of transport actions. Resolved from the UI once; the
/// controller matches exhaustively instead of comparing strings, so an
/// unknown action cannot silently fall through.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum NavAction {
    Start,
    Backward,
    Forward,
    End,
}

impl NavAction {
    /// Store key of the click fired after this action lands.
    pub fn click_key(self) -> &'static str {
        match self {
            NavAction::Start    => "start",
            NavAction::Backward => "backward",
            NavAction::Forward  => "forward",
            NavAction::End      => "end",
        }
    }
}

#[derive(Debug, Clone)]
pub enum NavigatorCommand {
    // ── Video ────────────────────────────────────────────────────────────────
    /// Load the video at `path` (from the picker or drag-and-drop).
    LoadVideo(PathBuf),
    Navigate(NavAction),
    /// Raw text from the go-to-slice entry; parsed by the controller.
    GoToSlice(String),

    // ── Clicks ───────────────────────────────────────────────────────────────
    /// Fire the synthetic click bound to `key` (scoring keys also advance).
    SimulateClick(String),
    /// Raw entry text; parsed and confirmed (or rejected) by app.rs.
    SetClickTarget { key: String, x_text: String, y_text: String },
    ResetClickTargets,
    SaveClickTargets,

    // ── Status ───────────────────────────────────────────────────────────────
    /// Emitted when the user dismisses the status window.
    ClearStatus,
}
