// src/app.rs (slicenav-ui)
use eframe::egui;
use rfd::FileDialog;

use slicenav_core::clicks::ClickStore;
use slicenav_core::commands::NavigatorCommand;
use slicenav_core::slices::SliceGrid;

use crate::controller::NavigationController;
use crate::input::{EnigoPointer, NoopPointer, PointerSim};
use crate::modules::{
    click_panel::ClickPanelModule, nav_bar::NavBarModule, preview::PreviewModule, PanelModule,
    ViewState,
};
use crate::nav_log;
use crate::paths::click_config_path;
use crate::theme::{configure_style, ACCENT};

/// Dismissable message shown centered over the canvas — the original
/// messagebox role. Errors never close the app; the user dismisses and
/// carries on.
enum Status {
    Info(String),
    Error(String),
}

// ── App ───────────────────────────────────────────────────────────────────────

pub struct NavigatorApp {
    controller:   NavigationController,
    view:         ViewState,
    // Panels as concrete types — no name-string lookup, typos are compile errors.
    preview:      PreviewModule,
    nav_bar:      NavBarModule,
    click_panel:  ClickPanelModule,
    /// Commands emitted by panels each frame, processed after the UI pass.
    pending_cmds: Vec<NavigatorCommand>,
    status:       Option<Status>,
}

impl NavigatorApp {
    pub fn new(cc: &eframe::CreationContext<'_>) -> Self {
        configure_style(&cc.egui_ctx);
        // Pin to dark mode — prevents egui overwriting the theme on OS
        // light/dark changes.
        cc.egui_ctx.options_mut(|o| {
            o.theme_preference = egui::ThemePreference::Dark;
        });

        let clicks = ClickStore::load(click_config_path());
        let click_panel = ClickPanelModule::new(&clicks);

        // Headless sessions (CI, no display server) get a logging stand-in
        // instead of a startup failure.
        let pointer: Box<dyn PointerSim> = match EnigoPointer::new() {
            Ok(p) => Box::new(p),
            Err(e) => {
                nav_log!("[input] pointer backend unavailable: {e}");
                Box::new(NoopPointer)
            }
        };

        Self {
            controller:   NavigationController::new(SliceGrid::default(), clicks, pointer),
            view:         ViewState::new(cc.egui_ctx.clone()),
            preview:      PreviewModule,
            nav_bar:      NavBarModule::default(),
            click_panel,
            pending_cmds: Vec::new(),
            status:       None,
        }
    }

    fn process_command(&mut self, cmd: NavigatorCommand) {
        match cmd {
            // ── Video ────────────────────────────────────────────────────────
            NavigatorCommand::LoadVideo(path) => {
                if let Err(e) = self.controller.load_video(&path, &mut self.view) {
                    self.status = Some(Status::Error(e.to_string()));
                }
            }
            NavigatorCommand::Navigate(action) => {
                self.controller.navigate(action, &mut self.view);
            }
            NavigatorCommand::GoToSlice(text) => {
                if let Err(e) = self.controller.go_to_slice(&text, &mut self.view) {
                    self.status = Some(Status::Error(e.to_string()));
                }
            }

            // ── Clicks ───────────────────────────────────────────────────────
            NavigatorCommand::SimulateClick(key) => {
                self.controller.simulate_click(&key, &mut self.view);
            }
            NavigatorCommand::SetClickTarget { key, x_text, y_text } => {
                match self.controller.set_click_target(&key, &x_text, &y_text) {
                    Ok((x, y)) => {
                        self.status =
                            Some(Status::Info(format!("position for {key} set to ({x}, {y})")));
                    }
                    Err(e) => self.status = Some(Status::Error(e.to_string())),
                }
            }
            NavigatorCommand::ResetClickTargets => {
                self.controller.reset_clicks();
                self.click_panel.sync_entries(self.controller.clicks());
                self.status = Some(Status::Info("click targets reset to defaults".into()));
            }
            NavigatorCommand::SaveClickTargets => match self.controller.save_clicks() {
                Ok(()) => self.status = Some(Status::Info("click targets saved".into())),
                Err(e) => self.status = Some(Status::Error(format!("save failed: {e}"))),
            },

            // ── Status ───────────────────────────────────────────────────────
            NavigatorCommand::ClearStatus => {
                self.status = None;
            }
        }
    }

    fn handle_drag_and_drop(&mut self, ctx: &egui::Context) {
        let files = ctx.input(|i| i.raw.dropped_files.clone());
        for file in files {
            if let Some(path) = file.path {
                self.pending_cmds.push(NavigatorCommand::LoadVideo(path));
            }
        }
    }

    fn status_window(&mut self, ctx: &egui::Context) {
        let Some(status) = &self.status else { return };
        let (title, text) = match status {
            Status::Info(t)  => ("SliceNav", t.clone()),
            Status::Error(t) => ("Error", t.clone()),
        };
        let mut dismissed = false;
        egui::Window::new(title)
            .collapsible(false)
            .resizable(false)
            .anchor(egui::Align2::CENTER_CENTER, egui::vec2(0.0, 0.0))
            .show(ctx, |ui| {
                ui.label(text);
                ui.vertical_centered(|ui| {
                    if ui.button("OK").clicked() {
                        dismissed = true;
                    }
                });
            });
        if dismissed {
            self.pending_cmds.push(NavigatorCommand::ClearStatus);
        }
    }
}

// ── eframe::App ───────────────────────────────────────────────────────────────

impl eframe::App for NavigatorApp {
    fn on_exit(&mut self, _gl: Option<&eframe::glow::Context>) {
        // Explicit flush on the way out — mutations never write on their own.
        if let Err(e) = self.controller.save_clicks() {
            nav_log!("[clicks] flush on exit failed: {e}");
        }
    }

    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.handle_drag_and_drop(ctx);

        // Sync the pieces of display state the controller doesn't push.
        self.view.loaded = self.controller.is_loaded();
        self.view.current_time = self.controller.current_time();
        self.view.duration = self.controller.duration();

        egui::TopBottomPanel::top("top_panel")
            .exact_height(36.0)
            .show(ctx, |ui| {
                ui.horizontal_centered(|ui| {
                    ui.label(
                        egui::RichText::new("SliceNav")
                            .strong()
                            .size(15.0)
                            .color(ACCENT),
                    );
                    ui.separator();
                    if ui.button("Open Video…").clicked() {
                        // Cancelled picker is a no-op, not an error.
                        if let Some(path) = FileDialog::new()
                            .add_filter("Video", &["avi", "mp4", "mkv", "mov"])
                            .pick_file()
                        {
                            self.pending_cmds.push(NavigatorCommand::LoadVideo(path));
                        }
                    }
                    ui.label(
                        egui::RichText::new("or drop a file anywhere")
                            .size(12.0)
                            .weak(),
                    );
                });
            });

        egui::TopBottomPanel::bottom("nav_panel")
            .exact_height(44.0)
            .show(ctx, |ui| {
                self.nav_bar
                    .ui(ui, &self.view, self.controller.clicks(), &mut self.pending_cmds);
            });

        egui::SidePanel::right("click_panel")
            .resizable(true)
            .default_width(240.0)
            .min_width(200.0)
            .show(ctx, |ui| {
                self.click_panel
                    .ui(ui, &self.view, self.controller.clicks(), &mut self.pending_cmds);
            });

        egui::CentralPanel::default().show(ctx, |ui| {
            self.preview
                .ui(ui, &self.view, self.controller.clicks(), &mut self.pending_cmds);
        });

        self.status_window(ctx);

        // ── Process commands emitted by panels this frame ─────────────────────
        let cmds: Vec<NavigatorCommand> = self.pending_cmds.drain(..).collect();
        for cmd in cmds {
            self.process_command(cmd);
        }
    }
}
