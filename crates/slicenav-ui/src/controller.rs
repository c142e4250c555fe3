// src/controller.rs
//
// NavigationController: turns transport intents into timeline seeks, then
// pushes the refreshed frame + slice label to the view and fires the click
// bound to the action. The view and the pointer are seams (`NavView`,
// `PointerSim`) so the egui shell and the tests drive the same code.

use std::path::Path;

use slicenav_core::clicks::ClickStore;
use slicenav_core::commands::{NavAction, NAV_STEP_SECS};
use slicenav_core::slices::{parse_slice_number, SliceGrid, SliceParseError};
use slicenav_media::{Frame, MediaError, VideoTimeline};

use crate::input::PointerSim;
use crate::nav_log;

/// What the controller needs from the display. Both calls are
/// fire-and-forget; an absent frame must be tolerated as a no-op.
pub trait NavView {
    fn refresh_frame(&mut self, frame: Option<&Frame>);
    fn refresh_slice_label(&mut self, current: u32, total: u32);
}

pub struct NavigationController {
    timeline:  VideoTimeline,
    grid:      SliceGrid,
    clicks:    ClickStore,
    pointer:   Box<dyn PointerSim>,
    step_secs: f64,
}

impl NavigationController {
    pub fn new(grid: SliceGrid, clicks: ClickStore, pointer: Box<dyn PointerSim>) -> Self {
        Self { timeline: VideoTimeline::new(), grid, clicks, pointer, step_secs: NAV_STEP_SECS }
    }

    pub fn is_loaded(&self) -> bool {
        self.timeline.is_loaded()
    }

    pub fn current_time(&self) -> f64 {
        self.timeline.current_time()
    }

    pub fn duration(&self) -> f64 {
        self.timeline.duration()
    }

    pub fn clicks(&self) -> &ClickStore {
        &self.clicks
    }

    /// `(current, total)` slice position for the label.
    pub fn slice_position(&self) -> (u32, u32) {
        let (t, d) = (self.timeline.current_time(), self.timeline.duration());
        (self.grid.slice_at(t, d), self.grid.total_slices(d))
    }

    // ── Video ─────────────────────────────────────────────────────────────────

    pub fn load_video(&mut self, path: &Path, view: &mut dyn NavView) -> Result<(), MediaError> {
        self.timeline.load(path)?;
        self.refresh(view);
        Ok(())
    }

    /// Test/alternate-source entry point; same post-load behavior as `load_video`.
    pub fn attach_source(
        &mut self,
        source: Box<dyn slicenav_media::FrameSource>,
        view: &mut dyn NavView,
    ) {
        self.timeline.attach(source);
        self.refresh(view);
    }

    // ── Navigation ────────────────────────────────────────────────────────────

    /// Transport action. Without a loaded video this is a silent no-op — an
    /// empty player is a normal pre-load state, not a failure.
    pub fn navigate(&mut self, action: NavAction, view: &mut dyn NavView) {
        if !self.timeline.is_loaded() {
            return;
        }
        let target = match action {
            NavAction::Start    => 0.0,
            NavAction::End      => self.timeline.duration(),
            NavAction::Forward  => self.timeline.current_time() + self.step_secs,
            NavAction::Backward => self.timeline.current_time() - self.step_secs,
        };
        self.timeline.seek(target);
        self.refresh(view);
        self.click(action.click_key());
    }

    /// Jump to a user-entered slice number. Out-of-range numbers clamp; text
    /// that isn't an integer is rejected with no state change. Fires no
    /// click — only the transport actions drive the external app.
    pub fn go_to_slice(&mut self, text: &str, view: &mut dyn NavView) -> Result<(), SliceParseError> {
        if !self.timeline.is_loaded() {
            return Ok(());
        }
        let n = parse_slice_number(text)?;
        let slice = self.grid.clamp_slice(n, self.timeline.duration());
        self.timeline.seek(self.grid.slice_start(slice));
        self.refresh(view);
        Ok(())
    }

    // ── Clicks ────────────────────────────────────────────────────────────────

    /// Fire the click bound to `key`. Scoring keys additionally advance
    /// playback one step so the reviewer lands on the next window with the
    /// score already registered.
    pub fn simulate_click(&mut self, key: &str, view: &mut dyn NavView) {
        self.click(key);
        if ClickStore::advances_playback(key) && self.timeline.is_loaded() {
            self.timeline.seek(self.timeline.current_time() + self.step_secs);
            self.refresh(view);
        }
    }

    /// Parse and store new coordinates for `key`. Returns the parsed pair
    /// for the confirmation message.
    pub fn set_click_target(
        &mut self,
        key: &str,
        x_text: &str,
        y_text: &str,
    ) -> anyhow::Result<(i32, i32)> {
        let (Ok(x), Ok(y)) = (x_text.trim().parse::<i32>(), y_text.trim().parse::<i32>()) else {
            anyhow::bail!("invalid x,y values");
        };
        self.clicks.set(key, x, y);
        Ok((x, y))
    }

    pub fn reset_clicks(&mut self) {
        self.clicks.reset();
    }

    /// Explicit flush of the click-target file.
    pub fn save_clicks(&self) -> std::io::Result<()> {
        self.clicks.save()
    }

    fn click(&mut self, key: &str) {
        let (x, y) = self.clicks.get(key);
        if let Err(e) = self.pointer.click_at(x, y) {
            nav_log!("[click] {key} at ({x}, {y}) failed: {e}");
        }
    }

    fn refresh(&mut self, view: &mut dyn NavView) {
        view.refresh_frame(self.timeline.current_frame());
        let (current, total) = self.slice_position();
        view.refresh_slice_label(current, total);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use slicenav_media::FrameSource;
    use std::cell::RefCell;
    use std::rc::Rc;

    struct FakeSource {
        fps:    f64,
        frames: i64,
    }

    impl FrameSource for FakeSource {
        fn frames_per_second(&self) -> f64 {
            self.fps
        }
        fn frame_count(&self) -> i64 {
            self.frames
        }
        fn seek_to_frame(&mut self, _index: i64) -> Option<Frame> {
            Some(Frame { width: 2, height: 2, data: vec![0; 12] })
        }
    }

    #[derive(Default)]
    struct RecordingView {
        frames: usize,
        labels: Vec<(u32, u32)>,
    }

    impl NavView for RecordingView {
        fn refresh_frame(&mut self, _frame: Option<&Frame>) {
            self.frames += 1;
        }
        fn refresh_slice_label(&mut self, current: u32, total: u32) {
            self.labels.push((current, total));
        }
    }

    struct RecordingPointer(Rc<RefCell<Vec<(i32, i32)>>>);

    impl PointerSim for RecordingPointer {
        fn click_at(&mut self, x: i32, y: i32) -> anyhow::Result<()> {
            self.0.borrow_mut().push((x, y));
            Ok(())
        }
    }

    fn controller(grid: SliceGrid) -> (NavigationController, Rc<RefCell<Vec<(i32, i32)>>>) {
        let clicks_dir = tempfile::tempdir().unwrap();
        let clicks = ClickStore::load(clicks_dir.path().join("clicks.json"));
        let recorded = Rc::new(RefCell::new(Vec::new()));
        let pointer = Box::new(RecordingPointer(recorded.clone()));
        (NavigationController::new(grid, clicks, pointer), recorded)
    }

    /// 120-second video at 25 fps.
    fn with_video(ctl: &mut NavigationController, view: &mut RecordingView) {
        ctl.attach_source(Box::new(FakeSource { fps: 25.0, frames: 3000 }), view);
    }

    #[test]
    fn forward_steps_by_nav_step() {
        let (mut ctl, _) = controller(SliceGrid::default());
        let mut view = RecordingView::default();
        with_video(&mut ctl, &mut view);
        ctl.go_to_slice("1", &mut view).unwrap();
        ctl.navigate(NavAction::Forward, &mut view);
        assert_eq!(ctl.current_time(), NAV_STEP_SECS);
        ctl.navigate(NavAction::Forward, &mut view);
        assert_eq!(ctl.current_time(), 2.0 * NAV_STEP_SECS);
    }

    #[test]
    fn backward_clamps_to_zero_and_end_to_duration() {
        let (mut ctl, _) = controller(SliceGrid::default());
        let mut view = RecordingView::default();
        with_video(&mut ctl, &mut view);
        ctl.navigate(NavAction::Backward, &mut view);
        assert_eq!(ctl.current_time(), 0.0);
        ctl.navigate(NavAction::End, &mut view);
        assert_eq!(ctl.current_time(), 120.0);
        ctl.navigate(NavAction::Start, &mut view);
        assert_eq!(ctl.current_time(), 0.0);
    }

    #[test]
    fn end_position_reports_last_slice() {
        let (mut ctl, _) = controller(SliceGrid::default());
        let mut view = RecordingView::default();
        with_video(&mut ctl, &mut view);
        ctl.navigate(NavAction::End, &mut view);
        assert_eq!(ctl.slice_position(), (4, 4));
    }

    #[test]
    fn nothing_happens_without_a_video() {
        let (mut ctl, clicks) = controller(SliceGrid::default());
        let mut view = RecordingView::default();
        ctl.navigate(NavAction::Forward, &mut view);
        ctl.navigate(NavAction::End, &mut view);
        assert!(ctl.go_to_slice("3", &mut view).is_ok());
        assert_eq!(ctl.current_time(), 0.0);
        assert_eq!(view.frames, 0);
        assert!(view.labels.is_empty());
        assert!(clicks.borrow().is_empty());
    }

    #[test]
    fn nav_actions_fire_their_configured_click() {
        let (mut ctl, clicks) = controller(SliceGrid::default());
        let mut view = RecordingView::default();
        with_video(&mut ctl, &mut view);
        ctl.navigate(NavAction::Forward, &mut view);
        assert_eq!(clicks.borrow().last().copied(), Some((500, 500)));
        ctl.navigate(NavAction::Start, &mut view);
        assert_eq!(clicks.borrow().last().copied(), Some((700, 700)));
    }

    #[test]
    fn go_to_slice_seeks_slice_start() {
        // 1-second slices over a 120 s video: slice 2 starts at 1.0 s.
        let (mut ctl, _) = controller(SliceGrid::new(1.0));
        let mut view = RecordingView::default();
        with_video(&mut ctl, &mut view);
        ctl.go_to_slice("2", &mut view).unwrap();
        assert_eq!(ctl.current_time(), 1.0);
    }

    #[test]
    fn go_to_slice_clamps_out_of_range() {
        let (mut ctl, _) = controller(SliceGrid::default());
        let mut view = RecordingView::default();
        with_video(&mut ctl, &mut view);
        ctl.go_to_slice("0", &mut view).unwrap();
        assert_eq!(ctl.current_time(), 0.0);
        ctl.go_to_slice("999", &mut view).unwrap();
        assert_eq!(ctl.current_time(), 90.0); // last slice of 4 starts at 90 s
    }

    #[test]
    fn go_to_slice_rejects_garbage_without_moving() {
        let (mut ctl, _) = controller(SliceGrid::default());
        let mut view = RecordingView::default();
        with_video(&mut ctl, &mut view);
        ctl.navigate(NavAction::Forward, &mut view);
        let before = ctl.current_time();
        assert!(ctl.go_to_slice("abc", &mut view).is_err());
        assert_eq!(ctl.current_time(), before);
    }

    #[test]
    fn go_to_slice_fires_no_click() {
        let (mut ctl, clicks) = controller(SliceGrid::default());
        let mut view = RecordingView::default();
        with_video(&mut ctl, &mut view);
        clicks.borrow_mut().clear();
        ctl.go_to_slice("2", &mut view).unwrap();
        assert!(clicks.borrow().is_empty());
    }

    #[test]
    fn scoring_click_advances_one_step() {
        let (mut ctl, clicks) = controller(SliceGrid::default());
        let mut view = RecordingView::default();
        with_video(&mut ctl, &mut view);
        ctl.navigate(NavAction::Forward, &mut view); // now at 30 s
        let frames_before = view.frames;
        ctl.simulate_click("rem", &mut view);
        assert_eq!(clicks.borrow().last().copied(), Some((400, 400)));
        assert_eq!(ctl.current_time(), 60.0);
        assert!(view.frames > frames_before);
    }

    #[test]
    fn transport_click_keys_do_not_advance() {
        let (mut ctl, clicks) = controller(SliceGrid::default());
        let mut view = RecordingView::default();
        with_video(&mut ctl, &mut view);
        let frames_before = view.frames;
        ctl.simulate_click("lock", &mut view);
        assert_eq!(clicks.borrow().last().copied(), Some((900, 900)));
        assert_eq!(ctl.current_time(), 0.0);
        assert_eq!(view.frames, frames_before);
    }

    #[test]
    fn scoring_click_without_video_clicks_but_stays_put() {
        let (mut ctl, clicks) = controller(SliceGrid::default());
        let mut view = RecordingView::default();
        ctl.simulate_click("click1", &mut view);
        assert_eq!(clicks.borrow().last().copied(), Some((100, 100)));
        assert_eq!(ctl.current_time(), 0.0);
        assert_eq!(view.frames, 0);
    }

    #[test]
    fn unknown_click_key_targets_origin() {
        let (mut ctl, clicks) = controller(SliceGrid::default());
        let mut view = RecordingView::default();
        ctl.simulate_click("mystery", &mut view);
        assert_eq!(clicks.borrow().last().copied(), Some((0, 0)));
    }

    #[test]
    fn set_click_target_parses_and_stores() {
        let (mut ctl, _) = controller(SliceGrid::default());
        assert_eq!(ctl.set_click_target("click1", " 512", "640 ").unwrap(), (512, 640));
        assert_eq!(ctl.clicks().get("click1"), (512, 640));
        assert!(ctl.set_click_target("click1", "12", "oops").is_err());
        assert_eq!(ctl.clicks().get("click1"), (512, 640));
    }
}
