#![cfg_attr(not(debug_assertions), windows_subsystem = "windows")]

use sketchpad::SketchpadApp;

fn main() -> eframe::Result<()> {
    env_logger::init();

    let native_options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([480.0, 360.0])
            .with_title("Sketchpad"),
        ..Default::default()
    };
    eframe::run_native(
        "sketchpad",
        native_options,
        Box::new(|cc| Ok(Box::new(SketchpadApp::new(cc)))),
    )
}
