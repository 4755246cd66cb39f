//! Side panel with region detail and municipality drill-down.
//!
//! Rendered as a modal overlay: a dimmed backdrop that closes on click, with
//! the panel anchored to the right edge above it. Both are driven by the same
//! `PanelState`, so they appear and disappear together.

use eframe::egui::{
    self, Align2, Area, Frame, Id, Order, RichText, ScrollArea, Sense, Stroke,
};

use super::style;
use crate::egui_app::controller::AppController;
use crate::egui_app::state::{
    MunicipalityDetailView, PanelBodyView, PanelState, PanelView, RegionDetailView, SelectorView,
};
use crate::egui_app::view_model;

const PANEL_WIDTH: f32 = 340.0;

/// Action reported back from the rendered widgets.
enum PanelAction {
    None,
    Close,
    Select(Option<usize>),
}

pub(super) fn render(ctx: &egui::Context, controller: &mut AppController) {
    let PanelState::Open(view) = &controller.ui.panel else {
        return;
    };
    let view = view.clone();

    let mut action = if backdrop(ctx) {
        PanelAction::Close
    } else {
        PanelAction::None
    };

    let palette = style::palette();
    Area::new(Id::new("state_panel"))
        .order(Order::Tooltip)
        .anchor(Align2::RIGHT_TOP, egui::Vec2::ZERO)
        .show(ctx, |ui| {
            let height = ctx.viewport_rect().height();
            ui.set_min_size(egui::vec2(PANEL_WIDTH, height));
            ui.set_max_width(PANEL_WIDTH);
            Frame::none()
                .fill(palette.bg_panel)
                .stroke(Stroke::new(1.0, palette.panel_outline))
                .inner_margin(16.0)
                .show(ui, |ui| {
                    ui.set_min_height(height - 32.0);
                    ScrollArea::vertical().show(ui, |ui| {
                        if let PanelAction::Close = render_header(ui, &view) {
                            action = PanelAction::Close;
                        }
                        if let PanelAction::Select(choice) = render_body(ui, &view) {
                            action = PanelAction::Select(choice);
                        }
                    });
                });
        });

    match action {
        PanelAction::Close => controller.close_panel(),
        PanelAction::Select(choice) => controller.select_municipality(choice),
        PanelAction::None => {}
    }
}

/// Paint the dimmed backdrop and capture clicks behind the panel.
fn backdrop(ctx: &egui::Context) -> bool {
    let palette = style::palette();
    let rect = ctx.viewport_rect();
    let painter = ctx.layer_painter(egui::LayerId::new(
        Order::Tooltip,
        Id::new("panel_overlay_paint"),
    ));
    painter.rect_filled(rect, 0.0, palette.overlay_dim);
    Area::new(Id::new("panel_overlay_blocker"))
        .order(Order::Tooltip)
        .fixed_pos(rect.min)
        .show(ctx, |ui| ui.allocate_rect(rect, Sense::click()).clicked())
        .inner
}

fn render_header(ui: &mut egui::Ui, view: &PanelView) -> PanelAction {
    let palette = style::palette();
    let mut action = PanelAction::None;
    ui.horizontal(|ui| {
        ui.vertical(|ui| {
            if view.header.benchmark {
                ui.label(
                    RichText::new("★ Benchmark")
                        .color(palette.benchmark)
                        .strong(),
                );
            }
            ui.heading(RichText::new(&view.header.title).color(palette.text_primary));
            ui.label(RichText::new(&view.header.subtitle).color(palette.text_muted));
        });
        ui.with_layout(egui::Layout::right_to_left(egui::Align::Min), |ui| {
            if ui.button(RichText::new("×").size(18.0)).clicked() {
                action = PanelAction::Close;
            }
        });
    });
    ui.separator();
    action
}

fn render_body(ui: &mut egui::Ui, view: &PanelView) -> PanelAction {
    let palette = style::palette();
    match &view.body {
        PanelBodyView::NoData { reason } => {
            ui.add_space(24.0);
            ui.label(RichText::new("📭").size(32.0));
            ui.add_space(8.0);
            ui.label(RichText::new(*reason).color(palette.text_muted));
            PanelAction::None
        }
        PanelBodyView::Region(region) => render_region(ui, region),
    }
}

fn render_region(ui: &mut egui::Ui, region: &RegionDetailView) -> PanelAction {
    let palette = style::palette();
    ui.add_space(8.0);
    for metric in &region.metrics {
        ui.label(
            RichText::new(&metric.value)
                .size(22.0)
                .color(style::metric_color(metric.tone))
                .strong(),
        );
        ui.label(RichText::new(&metric.label).color(palette.text_muted));
        ui.add_space(6.0);
    }
    if let Some(note) = region.note {
        ui.add_space(4.0);
        ui.label(RichText::new(note).color(palette.text_muted));
    }

    ui.add_space(12.0);
    let action = match &region.selector {
        Some(selector) => render_selector(ui, selector),
        None => {
            ui.label(RichText::new(view_model::NO_MUNICIPALITIES).color(palette.text_muted));
            PanelAction::None
        }
    };

    if let Some(detail) = &region.detail {
        render_detail(ui, detail);
    }
    action
}

fn render_selector(ui: &mut egui::Ui, selector: &SelectorView) -> PanelAction {
    let palette = style::palette();
    let mut action = PanelAction::None;
    ui.label(
        RichText::new("CONSULTAR MUNICÍPIO")
            .size(11.0)
            .color(palette.text_muted),
    );
    let current = selector
        .selected
        .and_then(|pos| selector.options.get(pos))
        .map(|option| option.label.as_str())
        .unwrap_or(view_model::SELECTOR_PROMPT);
    egui::ComboBox::from_id_salt("select_municipio")
        .width(PANEL_WIDTH - 48.0)
        .selected_text(current)
        .show_ui(ui, |ui| {
            if ui
                .selectable_label(selector.selected.is_none(), view_model::SELECTOR_PROMPT)
                .clicked()
            {
                action = PanelAction::Select(None);
            }
            for (pos, option) in selector.options.iter().enumerate() {
                if ui
                    .selectable_label(selector.selected == Some(pos), &option.label)
                    .clicked()
                {
                    action = PanelAction::Select(Some(option.index));
                }
            }
        });
    action
}

fn render_detail(ui: &mut egui::Ui, detail: &MunicipalityDetailView) {
    let palette = style::palette();
    ui.add_space(12.0);
    match detail {
        MunicipalityDetailView::NoAnnualData { name } => {
            ui.label(
                RichText::new(format!("📍 {name}"))
                    .color(palette.text_primary)
                    .strong(),
            );
            ui.label(RichText::new(view_model::NO_ANNUAL_DATA).color(palette.text_muted));
        }
        MunicipalityDetailView::Table(table) => {
            ui.label(
                RichText::new(format!("📍 {}", table.name))
                    .color(palette.text_primary)
                    .strong(),
            );
            if let Some(population) = &table.population {
                ui.label(RichText::new(population).color(palette.text_muted));
            }
            ui.add_space(6.0);
            egui::Grid::new("muni_table")
                .striped(true)
                .min_col_width(56.0)
                .show(ui, |ui| {
                    for column in &table.columns {
                        ui.label(RichText::new(*column).color(palette.text_muted).strong());
                    }
                    ui.end_row();
                    for row in &table.rows {
                        for (idx, cell) in row.cells.iter().enumerate() {
                            let color = if idx == 0 {
                                palette.text_primary
                            } else if idx == table.columns.len() - 1 && table.columns.len() > 2 {
                                palette.alert
                            } else {
                                palette.text_primary
                            };
                            ui.label(RichText::new(cell).color(color));
                        }
                        ui.end_row();
                    }
                });
        }
    }
}
