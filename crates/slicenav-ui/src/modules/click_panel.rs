// src/modules/click_panel.rs
use egui::{RichText, Ui};
use slicenav_core::clicks::{ClickStore, DEFAULT_TARGETS, SCORING_KEYS};
use slicenav_core::commands::NavigatorCommand;

use super::{PanelModule, ViewState};
use crate::theme::{ACCENT, DARK_TEXT_DIM};

fn key_label(key: &str) -> &'static str {
    match key {
        "click1"   => "Click 1",
        "click2"   => "Click 2",
        "click3"   => "Click 3",
        "rem"      => "REM",
        "forward"  => "Forward",
        "backward" => "Backward",
        "start"    => "Start",
        "end"      => "End",
        "lock"     => "Lock",
        _          => "?",
    }
}

/// Side panel for the click targets: per-key coordinate entries, the manual
/// scoring buttons, and reset/save.
///
/// The text entries are owned here (panels own their edit buffers, the store
/// owns the truth); they are re-seeded from the store on construction and
/// after a reset.
pub struct ClickPanelModule {
    entries: Vec<(&'static str, String, String)>,
}

impl ClickPanelModule {
    pub fn new(store: &ClickStore) -> Self {
        let mut panel = Self { entries: Vec::new() };
        panel.sync_entries(store);
        panel
    }

    /// Re-seed every entry pair from the store's current values.
    pub fn sync_entries(&mut self, store: &ClickStore) {
        self.entries = DEFAULT_TARGETS
            .iter()
            .map(|(key, _)| {
                let (x, y) = store.get(key);
                (*key, x.to_string(), y.to_string())
            })
            .collect();
    }
}

impl PanelModule for ClickPanelModule {
    fn name(&self) -> &str {
        "Click targets"
    }

    fn ui(
        &mut self,
        ui:     &mut Ui,
        _view:  &ViewState,
        clicks: &ClickStore,
        cmd:    &mut Vec<NavigatorCommand>,
    ) {
        ui.add_space(4.0);
        ui.label(RichText::new("Click targets").strong().color(ACCENT));
        ui.label(
            RichText::new("Screen position each action clicks in the scoring app")
                .size(11.0)
                .color(DARK_TEXT_DIM),
        );
        ui.separator();

        egui::Grid::new("click_targets")
            .num_columns(4)
            .spacing([6.0, 4.0])
            .show(ui, |ui| {
                for (key, x_text, y_text) in &mut self.entries {
                    ui.label(key_label(key));
                    ui.add(egui::TextEdit::singleline(x_text).desired_width(44.0));
                    ui.add(egui::TextEdit::singleline(y_text).desired_width(44.0));
                    if ui.small_button("Set").clicked() {
                        cmd.push(NavigatorCommand::SetClickTarget {
                            key:    key.to_string(),
                            x_text: x_text.clone(),
                            y_text: y_text.clone(),
                        });
                    }
                    ui.end_row();
                }
            });

        ui.separator();
        ui.label(RichText::new("Score current slice").strong().color(ACCENT));
        ui.horizontal_wrapped(|ui| {
            for key in SCORING_KEYS {
                let (x, y) = clicks.get(key);
                let btn = ui
                    .button(key_label(key))
                    .on_hover_text(format!("click ({x}, {y}), then advance 30 s"));
                if btn.clicked() {
                    cmd.push(NavigatorCommand::SimulateClick(key.to_string()));
                }
            }
            if ui.button("Lock").clicked() {
                cmd.push(NavigatorCommand::SimulateClick("lock".to_string()));
            }
        });

        ui.separator();
        ui.horizontal(|ui| {
            if ui.button("Reset defaults").clicked() {
                cmd.push(NavigatorCommand::ResetClickTargets);
            }
            if ui.button("Save").clicked() {
                cmd.push(NavigatorCommand::SaveClickTargets);
            }
        });
        ui.label(
            RichText::new(format!("saved to {}", clicks.path().display()))
                .size(10.0)
                .color(DARK_TEXT_DIM),
        );
    }
}
