// src/modules/mod.rs
//
// Panel registry. To add a new panel:
//   1. Create modules/mypanel.rs implementing PanelModule
//   2. Add `pub mod mypanel;` below
//   3. Show it from the matching egui panel in app.rs

pub mod click_panel;
pub mod nav_bar;
pub mod preview;

use egui::{TextureHandle, TextureOptions, Ui};
use slicenav_core::clicks::ClickStore;
use slicenav_core::commands::NavigatorCommand;
use slicenav_media::Frame;

use crate::controller::NavView;

/// Every panel implements this trait.
/// Panels read state, emit commands — they never mutate the controller directly.
pub trait PanelModule {
    fn name(&self) -> &str;
    fn ui(
        &mut self,
        ui:     &mut Ui,
        view:   &ViewState,
        clicks: &ClickStore,
        cmd:    &mut Vec<NavigatorCommand>,
    );
}

/// Display-side state the controller refreshes and the panels read.
/// Owns the GPU texture of the current frame; `loaded`, `current_time`, and
/// `duration` are synced from the controller once per frame by app.rs.
pub struct ViewState {
    ctx:              egui::Context,
    pub texture:      Option<TextureHandle>,
    pub current_slice: u32,
    pub total_slices:  u32,
    pub loaded:        bool,
    pub current_time:  f64,
    pub duration:      f64,
}

impl ViewState {
    pub fn new(ctx: egui::Context) -> Self {
        Self {
            ctx,
            texture:       None,
            current_slice: 1,
            total_slices:  1,
            loaded:        false,
            current_time:  0.0,
            duration:      0.0,
        }
    }
}

impl NavView for ViewState {
    fn refresh_frame(&mut self, frame: Option<&Frame>) {
        // Absent frame (end-of-stream edge): keep showing the last texture.
        let Some(frame) = frame else { return };
        let image = egui::ColorImage::from_rgb(
            [frame.width as usize, frame.height as usize],
            &frame.data,
        );
        match &mut self.texture {
            Some(tex) => tex.set(image, TextureOptions::LINEAR),
            None => {
                self.texture = Some(self.ctx.load_texture("video-frame", image, TextureOptions::LINEAR));
            }
        }
    }

    fn refresh_slice_label(&mut self, current: u32, total: u32) {
        self.current_slice = current;
        self.total_slices = total;
    }
}
