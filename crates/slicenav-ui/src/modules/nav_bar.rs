// src/modules/nav_bar.rs
use egui::{RichText, Ui};
use slicenav_core::clicks::ClickStore;
use slicenav_core::commands::{NavAction, NavigatorCommand};
use slicenav_core::helpers::time::format_clock;

use super::{PanelModule, ViewState};
use crate::theme::{ACCENT, DARK_TEXT_DIM};

/// Bottom transport bar: Start / step back / step forward / End, the
/// slice position label, the timecode, and the go-to-slice entry.
///
/// Buttons stay enabled with no video loaded — the controller treats
/// navigation before load as a silent no-op, matching the empty-player state.
#[derive(Default)]
pub struct NavBarModule {
    slice_entry: String,
}

impl PanelModule for NavBarModule {
    fn name(&self) -> &str {
        "Transport"
    }

    fn ui(
        &mut self,
        ui:      &mut Ui,
        view:    &ViewState,
        _clicks: &ClickStore,
        cmd:     &mut Vec<NavigatorCommand>,
    ) {
        ui.horizontal_centered(|ui| {
            if ui.button("⏮ Start").clicked() {
                cmd.push(NavigatorCommand::Navigate(NavAction::Start));
            }
            if ui.button("◀ −30 s").clicked() {
                cmd.push(NavigatorCommand::Navigate(NavAction::Backward));
            }
            if ui.button("+30 s ▶").clicked() {
                cmd.push(NavigatorCommand::Navigate(NavAction::Forward));
            }
            if ui.button("End ⏭").clicked() {
                cmd.push(NavigatorCommand::Navigate(NavAction::End));
            }

            ui.separator();

            ui.label(
                RichText::new(format!("Slice {} / {}", view.current_slice, view.total_slices))
                    .strong()
                    .color(ACCENT),
            );
            ui.label(
                RichText::new(format!(
                    "{} / {}",
                    format_clock(view.current_time),
                    format_clock(view.duration)
                ))
                .monospace()
                .color(DARK_TEXT_DIM),
            );
            if !view.loaded {
                ui.label(RichText::new("(no video)").size(11.0).weak());
            }

            ui.separator();

            ui.label("Go to slice:");
            let entry = ui.add(
                egui::TextEdit::singleline(&mut self.slice_entry)
                    .desired_width(56.0)
                    .hint_text("n"),
            );
            let submitted =
                entry.lost_focus() && ui.input(|i| i.key_pressed(egui::Key::Enter));
            if (ui.button("Go").clicked() || submitted) && !self.slice_entry.is_empty() {
                cmd.push(NavigatorCommand::GoToSlice(self.slice_entry.clone()));
            }
        });
    }
}
