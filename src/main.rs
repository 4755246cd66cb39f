#![deny(missing_docs)]
#![deny(warnings)]

//! Entry point for the egui-based under-reporting map viewer.

use eframe::egui;
use subnota::config;
use subnota::egui_app::ui::{MIN_VIEWPORT_SIZE, SubnotaApp};
use subnota::logging;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    if let Err(err) = logging::init() {
        eprintln!("Logging disabled: {err}");
    }

    let config = config::load_or_default();

    let viewport = egui::ViewportBuilder::default()
        .with_min_inner_size(MIN_VIEWPORT_SIZE)
        .with_inner_size(egui::vec2(1100.0, 720.0));
    let native_options = eframe::NativeOptions {
        viewport,
        ..Default::default()
    };

    eframe::run_native(
        "Mensurando o Invisível",
        native_options,
        Box::new(move |_cc| Ok(Box::new(SubnotaApp::new(&config)))),
    )?;
    Ok(())
}
