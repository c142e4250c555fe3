// crates/slicenav-media/src/timeline.rs
//
// VideoTimeline: owns the decoder for one file, its duration, and the
// current playback position. All time arithmetic is in seconds; conversion
// to a frame index truncates so a seek never overshoots the requested time.

use std::path::Path;

use crate::error::MediaError;
use crate::source::{FfmpegSource, Frame, FrameSource};

#[derive(Default)]
pub struct VideoTimeline {
    source:       Option<Box<dyn FrameSource>>,
    duration:     f64,
    current_time: f64,
    frame:        Option<Frame>,
}

impl VideoTimeline {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_loaded(&self) -> bool {
        self.source.is_some()
    }

    pub fn duration(&self) -> f64 {
        self.duration
    }

    pub fn current_time(&self) -> f64 {
        self.current_time
    }

    /// The most recently decoded frame, or `None` when nothing is loaded or
    /// the decoder produced nothing at the current position.
    pub fn current_frame(&self) -> Option<&Frame> {
        self.frame.as_ref()
    }

    /// Open the video at `path`, replacing any currently loaded one.
    ///
    /// Atomic with respect to failure: the new source is opened first and
    /// only swapped in on success, so a failed load leaves the previous
    /// video fully usable.
    pub fn load(&mut self, path: &Path) -> Result<(), MediaError> {
        if !path.is_file() {
            return Err(MediaError::NotFound(path.to_path_buf()));
        }
        let source = FfmpegSource::open(path)?;
        self.attach(Box::new(source));
        Ok(())
    }

    /// Take ownership of an already-open source. The previous source (and
    /// its decoder) is dropped here, after the replacement exists. Position
    /// resets to the first frame.
    pub fn attach(&mut self, mut source: Box<dyn FrameSource>) {
        let fps = source.frames_per_second();
        self.duration = if fps > 0.0 {
            source.frame_count() as f64 / fps
        } else {
            0.0
        };
        self.current_time = 0.0;
        self.frame = source.seek_to_frame(0);
        self.source = Some(source);
    }

    /// Clamp `target_secs` into `[0, duration]`, store it, and reposition
    /// the decoder at `floor(time * fps)`. No-op when nothing is loaded.
    pub fn seek(&mut self, target_secs: f64) {
        let Some(source) = self.source.as_mut() else { return };
        self.current_time = target_secs.clamp(0.0, self.duration);
        let index = (self.current_time * source.frames_per_second()).floor() as i64;
        self.frame = source.seek_to_frame(index);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;
    use std::rc::Rc;

    /// Deterministic source: fixed fps and frame count, records every frame
    /// index it is asked to land on.
    struct FakeSource {
        fps:    f64,
        frames: i64,
        seeks:  Rc<RefCell<Vec<i64>>>,
    }

    impl FakeSource {
        fn new(fps: f64, frames: i64) -> (Self, Rc<RefCell<Vec<i64>>>) {
            let seeks = Rc::new(RefCell::new(Vec::new()));
            (Self { fps, frames, seeks: seeks.clone() }, seeks)
        }
    }

    impl FrameSource for FakeSource {
        fn frames_per_second(&self) -> f64 {
            self.fps
        }
        fn frame_count(&self) -> i64 {
            self.frames
        }
        fn seek_to_frame(&mut self, index: i64) -> Option<Frame> {
            self.seeks.borrow_mut().push(index);
            Some(Frame { width: 2, height: 2, data: vec![0; 12] })
        }
    }

    #[test]
    fn attach_computes_duration_and_rewinds() {
        let mut tl = VideoTimeline::new();
        let (src, seeks) = FakeSource::new(25.0, 100);
        tl.attach(Box::new(src));
        assert!(tl.is_loaded());
        assert_eq!(tl.duration(), 4.0);
        assert_eq!(tl.current_time(), 0.0);
        assert!(tl.current_frame().is_some());
        assert_eq!(*seeks.borrow(), vec![0]);
    }

    #[test]
    fn seek_clamps_both_ends() {
        let mut tl = VideoTimeline::new();
        let (src, _) = FakeSource::new(25.0, 100);
        tl.attach(Box::new(src));
        tl.seek(10.0);
        assert_eq!(tl.current_time(), 4.0);
        tl.seek(-1.0);
        assert_eq!(tl.current_time(), 0.0);
    }

    #[test]
    fn seek_converts_time_to_frame_index_by_truncation() {
        let mut tl = VideoTimeline::new();
        let (src, seeks) = FakeSource::new(25.0, 100);
        tl.attach(Box::new(src));
        tl.seek(2.0);
        assert_eq!(seeks.borrow().last().copied(), Some(50));
        tl.seek(2.039); // 50.975 frames — must floor, not round
        assert_eq!(seeks.borrow().last().copied(), Some(50));
    }

    #[test]
    fn seek_without_video_is_a_no_op() {
        let mut tl = VideoTimeline::new();
        tl.seek(5.0);
        assert_eq!(tl.current_time(), 0.0);
        assert!(tl.current_frame().is_none());
        assert!(!tl.is_loaded());
    }

    #[test]
    fn zero_fps_source_has_zero_duration() {
        let mut tl = VideoTimeline::new();
        let (src, _) = FakeSource::new(0.0, 100);
        tl.attach(Box::new(src));
        assert_eq!(tl.duration(), 0.0);
        tl.seek(10.0); // must not divide by zero or move
        assert_eq!(tl.current_time(), 0.0);
    }

    #[test]
    fn replacing_a_source_resets_position() {
        let mut tl = VideoTimeline::new();
        let (first, _) = FakeSource::new(25.0, 100);
        tl.attach(Box::new(first));
        tl.seek(3.0);
        assert_eq!(tl.current_time(), 3.0);

        let (second, _) = FakeSource::new(30.0, 300);
        tl.attach(Box::new(second));
        assert_eq!(tl.duration(), 10.0);
        assert_eq!(tl.current_time(), 0.0);
    }

    #[test]
    fn load_missing_file_reports_not_found_and_keeps_state() {
        let mut tl = VideoTimeline::new();
        let (src, _) = FakeSource::new(25.0, 100);
        tl.attach(Box::new(src));
        tl.seek(2.0);

        let err = tl.load(Path::new("/definitely/not/here.mp4")).unwrap_err();
        assert!(matches!(err, MediaError::NotFound(_)));
        // Previous video untouched.
        assert!(tl.is_loaded());
        assert_eq!(tl.duration(), 4.0);
        assert_eq!(tl.current_time(), 2.0);
    }
}
