// src/modules/preview.rs
use egui::{Color32, Pos2, Rect, Sense, Stroke, Ui, Vec2};
use slicenav_core::clicks::ClickStore;
use slicenav_core::commands::NavigatorCommand;

use super::{PanelModule, ViewState};
use crate::theme::{DARK_BORDER, DARK_TEXT_DIM};

/// Central video canvas: the current frame letterboxed into the available
/// space, or a placeholder when nothing is loaded.
pub struct PreviewModule;

impl PanelModule for PreviewModule {
    fn name(&self) -> &str {
        "Preview"
    }

    fn ui(
        &mut self,
        ui:      &mut Ui,
        view:    &ViewState,
        _clicks: &ClickStore,
        _cmd:    &mut Vec<NavigatorCommand>,
    ) {
        let panel_w = ui.available_width();
        let panel_h = ui.available_height().max(80.0);

        // Frame aspect when we have one, 4:3 for the placeholder.
        let ratio = view
            .texture
            .as_ref()
            .map(|t| {
                let s = t.size_vec2();
                if s.y > 0.0 { s.x / s.y } else { 4.0 / 3.0 }
            })
            .unwrap_or(4.0 / 3.0);

        let (canvas_w, canvas_h) = {
            let h = panel_w / ratio;
            if h <= panel_h { (panel_w, h) } else { (panel_h * ratio, panel_h) }
        };

        let (outer_rect, _) = ui.allocate_exact_size(Vec2::new(panel_w, panel_h), Sense::hover());
        let canvas = Rect::from_center_size(outer_rect.center(), Vec2::new(canvas_w, canvas_h));
        let painter = ui.painter();

        painter.rect_stroke(canvas.expand(1.0), 4, Stroke::new(1.0, DARK_BORDER),
            egui::StrokeKind::Outside);
        painter.rect_filled(canvas, 3.0, Color32::BLACK);

        if let Some(tex) = &view.texture {
            painter.image(
                tex.id(),
                canvas,
                Rect::from_min_max(Pos2::ZERO, Pos2::new(1.0, 1.0)),
                Color32::WHITE,
            );
        } else {
            painter.text(
                canvas.center(),
                egui::Align2::CENTER_CENTER,
                "NO VIDEO LOADED",
                egui::FontId::monospace(14.0),
                Color32::from_gray(40),
            );
            painter.text(
                canvas.center() + egui::vec2(0.0, 24.0),
                egui::Align2::CENTER_CENTER,
                "Open a recording or drop a file here",
                egui::FontId::proportional(12.0),
                DARK_TEXT_DIM,
            );
            // Faint scanlines so the empty canvas reads as a monitor.
            let mut y = canvas.min.y;
            while y < canvas.max.y {
                painter.line_segment(
                    [Pos2::new(canvas.min.x, y), Pos2::new(canvas.max.x, y)],
                    Stroke::new(0.5, Color32::from_rgba_unmultiplied(255, 255, 255, 3)),
                );
                y += 4.0;
            }
        }
    }
}
