//! egui renderer for the application UI.

mod detail_panel;
mod map_math;
mod map_view;
pub(crate) mod style;

use crate::config::AppConfig;
use crate::egui_app::controller::AppController;
use eframe::egui;

/// Minimum window size the layout stays usable at.
pub const MIN_VIEWPORT_SIZE: egui::Vec2 = egui::vec2(760.0, 520.0);

/// Renders the egui UI using the shared controller state.
pub struct SubnotaApp {
    controller: AppController,
    visuals_set: bool,
}

impl SubnotaApp {
    /// Create the app and run both startup loads.
    pub fn new(config: &AppConfig) -> Self {
        let mut controller = AppController::new();
        controller.load_startup(config);
        Self {
            controller,
            visuals_set: false,
        }
    }

    fn apply_visuals(&mut self, ctx: &egui::Context) {
        if self.visuals_set {
            return;
        }
        let mut visuals = egui::Visuals::dark();
        style::apply_visuals(&mut visuals);
        ctx.set_visuals(visuals);
        self.visuals_set = true;
    }
}

impl eframe::App for SubnotaApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.apply_visuals(ctx);

        // The cancel key is one of the three equivalent close paths.
        if ctx.input(|i| i.key_pressed(egui::Key::Escape)) {
            self.controller.close_panel();
        }

        let palette = style::palette();
        egui::CentralPanel::default()
            .frame(egui::Frame::none().fill(palette.bg_primary))
            .show(ctx, |ui| {
                map_view::render_map(ui, &mut self.controller);
            });

        detail_panel::render(ctx, &mut self.controller);
    }
}
