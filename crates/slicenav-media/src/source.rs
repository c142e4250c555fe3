// crates/slicenav-media/src/source.rs
//
// FrameSource: the opaque-decoder boundary the timeline drives.
// FfmpegSource: stateful per-file decoder that avoids re-open on every seek.

use std::path::{Path, PathBuf};

use ffmpeg_the_third as ffmpeg;
use ffmpeg::format::{input, Pixel};
use ffmpeg::media::Type;
use ffmpeg::software::scaling::{context::Context as SwsContext, flag::Flags};

use crate::error::MediaError;

/// One decoded picture, tightly packed RGB24 (stride padding removed).
pub struct Frame {
    pub width:  u32,
    pub height: u32,
    pub data:   Vec<u8>,
}

/// What the timeline needs from a decoder: its frame geometry in time and a
/// way to land on a specific frame. Production uses `FfmpegSource`; tests
/// substitute synthetic sources.
pub trait FrameSource {
    fn frames_per_second(&self) -> f64;
    fn frame_count(&self) -> i64;
    /// Position the decoder at frame `index` and decode it. `None` means the
    /// decoder produced nothing there (past the last packet) — a normal
    /// outcome, not an error.
    fn seek_to_frame(&mut self, index: i64) -> Option<Frame>;
}

// ── FFmpeg-backed source ──────────────────────────────────────────────────────

pub struct FfmpegSource {
    path:      PathBuf,
    ictx:      ffmpeg::format::context::Input,
    decoder:   ffmpeg::decoder::video::Video,
    scaler:    SwsContext,
    video_idx: usize,
    fps:       f64,
    nb_frames: i64,
    tb_num:    i32,
    tb_den:    i32,
    out_w:     u32,
    out_h:     u32,
    last_pts:  i64,
}

impl FfmpegSource {
    pub fn open(path: &Path) -> Result<Self, MediaError> {
        let open_err = |e: ffmpeg::Error| MediaError::Open(e.to_string());

        let ictx = input(&path).map_err(open_err)?;
        let video_idx = ictx
            .streams()
            .best(Type::Video)
            .ok_or_else(|| MediaError::Open("no video stream".into()))?
            .index();

        let (fps, nb_frames, tb_num, tb_den) = {
            let stream = ictx
                .stream(video_idx)
                .ok_or_else(|| MediaError::Open("stream gone".into()))?;
            let rate = stream.avg_frame_rate();
            let fps = if rate.denominator() != 0 {
                rate.numerator() as f64 / rate.denominator() as f64
            } else {
                0.0
            };
            let tb = stream.time_base();

            // nb_frames is absent from many containers — fall back to the
            // stream duration, then the container duration, scaled by fps.
            let mut frames = stream.frames();
            if frames <= 0 && fps > 0.0 {
                let stream_secs =
                    stream.duration() as f64 * tb.numerator() as f64 / tb.denominator() as f64;
                let secs = if stream_secs > 0.0 {
                    stream_secs
                } else {
                    ictx.duration() as f64 / ffmpeg::ffi::AV_TIME_BASE as f64
                };
                if secs > 0.0 {
                    frames = (secs * fps) as i64;
                }
            }
            (fps, frames.max(0), tb.numerator(), tb.denominator())
        };

        // Second context for decoder construction (Parameters borrows from
        // Stream/ictx).
        let ictx2 = input(&path).map_err(open_err)?;
        let stream2 = ictx2
            .stream(video_idx)
            .ok_or_else(|| MediaError::Open("stream gone".into()))?;
        let dec_ctx = ffmpeg::codec::context::Context::from_parameters(stream2.parameters())
            .map_err(open_err)?;
        let decoder = dec_ctx.decoder().video().map_err(open_err)?;

        let (out_w, out_h) = (decoder.width().max(2), decoder.height().max(2));
        let scaler = SwsContext::get(
            decoder.format(), decoder.width(), decoder.height(),
            Pixel::RGB24, out_w, out_h, Flags::BILINEAR,
        )
        .map_err(open_err)?;

        Ok(Self {
            path: path.to_path_buf(),
            ictx,
            decoder,
            scaler,
            video_idx,
            fps,
            nb_frames,
            tb_num,
            tb_den,
            out_w,
            out_h,
            last_pts: 0,
        })
    }

    fn ts_to_pts(&self, secs: f64) -> i64 {
        (secs * self.tb_den as f64 / self.tb_num as f64) as i64
    }

    /// Format-level seek in AV_TIME_BASE units. Backward (`..=ts`) so we land
    /// on the keyframe BEFORE the target; the pts filter in `seek_to_frame`
    /// discards the pre-roll. Soft-fails with a console warning — the
    /// demuxer then decodes from wherever it is and the filter still applies.
    fn seek_format(&mut self, target_secs: f64) {
        let seek_ts = (target_secs * ffmpeg::ffi::AV_TIME_BASE as f64) as i64;
        if let Err(e) = self.ictx.seek(seek_ts, ..=seek_ts) {
            eprintln!(
                "[media] seek soft-fail at {target_secs:.3}s in {}: {e}",
                self.path.display()
            );
        }
    }

}

impl FrameSource for FfmpegSource {
    fn frames_per_second(&self) -> f64 {
        self.fps
    }

    fn frame_count(&self) -> i64 {
        self.nb_frames
    }

    fn seek_to_frame(&mut self, index: i64) -> Option<Frame> {
        let target_secs = if self.fps > 0.0 {
            index.max(0) as f64 / self.fps
        } else {
            0.0
        };
        let target_pts = self.ts_to_pts(target_secs);

        self.seek_format(target_secs);
        self.decoder.flush();

        // last_good covers the EOF edge: asking for the final frame can run
        // out of packets before a frame at/past target_pts appears.
        let mut last_good: Option<Frame> = None;

        for (stream, packet) in self.ictx.packets().flatten() {
            if stream.index() != self.video_idx {
                continue;
            }
            if self.decoder.send_packet(&packet).is_err() {
                continue;
            }
            let mut decoded = ffmpeg::util::frame::video::Video::empty();
            while self.decoder.receive_frame(&mut decoded).is_ok() {
                let pts = decoded.pts().unwrap_or(self.last_pts + 1);
                self.last_pts = pts;
                let mut out = ffmpeg::util::frame::video::Video::empty();
                if self.scaler.run(&decoded, &mut out).is_err() {
                    return last_good;
                }
                let stride = out.stride(0);
                let raw = out.data(0);
                let row_bytes = self.out_w as usize * 3;
                let data: Vec<u8> = (0..self.out_h as usize)
                    .flat_map(|row| &raw[row * stride..row * stride + row_bytes])
                    .copied()
                    .collect();
                let frame = Frame { width: self.out_w, height: self.out_h, data };
                // Keyframe-aligned seek lands early; skip pre-roll frames
                // (small tolerance for containers with off-by-a-tick pts).
                if pts + 2 < target_pts {
                    last_good = Some(frame);
                    continue;
                }
                return Some(frame);
            }
        }

        last_good
    }
}
