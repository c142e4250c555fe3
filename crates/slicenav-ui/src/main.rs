#![cfg_attr(not(debug_assertions), windows_subsystem = "windows")]

mod app;
mod controller;
mod helpers;
mod input;
mod modules;
mod paths;
mod theme;

fn main() -> eframe::Result {
    slicenav_media::init().expect("FFmpeg init failed");

    let native_options = eframe::NativeOptions {
        centered: true,
        viewport: egui::ViewportBuilder::default()
            .with_title("SliceNav")
            .with_inner_size([1100.0, 760.0])
            .with_min_inner_size([760.0, 520.0]),
        ..Default::default()
    };

    eframe::run_native(
        "SliceNav",
        native_options,
        Box::new(|cc| Ok(Box::new(app::NavigatorApp::new(cc)))),
    )
}
