//! Choropleth map canvas: projection, hover, click dispatch, rendering.

use eframe::egui;
use egui::epaint::{PathShape, PathStroke};

use super::map_math::{self, Projection};
use super::style;
use crate::egui_app::controller::AppController;
use crate::join::JoinedFeature;

/// Message shown when the geometry resource could not be loaded.
const MAP_UNAVAILABLE: &str = "Não foi possível carregar o mapa.";

pub(super) fn render_map(ui: &mut egui::Ui, controller: &mut AppController) {
    let palette = style::palette();
    if controller.ui.map.unavailable {
        ui.centered_and_justified(|ui| {
            ui.label(egui::RichText::new(MAP_UNAVAILABLE).color(palette.text_muted));
        });
        return;
    }

    let available = ui.available_size();
    let (rect, response) = ui.allocate_exact_size(available, egui::Sense::click());
    let Some(bounds) = controller.ui.map.bounds else {
        return;
    };
    let projection = Projection::fit(rect, bounds);

    let pointer = response.hover_pos();
    let hovered = find_hover_feature(controller.features(), &projection, rect, pointer);
    controller.hover_feature(hovered);
    if response.clicked() {
        if let Some(index) = hovered {
            controller.click_feature(index);
        }
    }

    let painter = ui.painter_at(rect);
    for (index, feature) in controller.features().iter().enumerate() {
        if hovered == Some(index) {
            continue;
        }
        paint_feature(&painter, &projection, feature, false);
    }
    // The hovered feature paints last so its emphasized stroke stays on top.
    if let Some(index) = hovered {
        if let Some(feature) = controller.features().get(index) {
            paint_feature(&painter, &projection, feature, true);
            show_tooltip(ui, feature);
        }
    }
}

fn find_hover_feature(
    features: &[JoinedFeature],
    projection: &Projection,
    rect: egui::Rect,
    pointer: Option<egui::Pos2>,
) -> Option<usize> {
    let pointer = pointer?;
    if !rect.contains(pointer) {
        return None;
    }
    let (x, y) = projection.to_world(pointer);
    features
        .iter()
        .position(|feature| map_math::point_in_rings(&feature.rings, x, y))
}

fn paint_feature(
    painter: &egui::Painter,
    projection: &Projection,
    feature: &JoinedFeature,
    hovered: bool,
) {
    let opacity = if hovered {
        style::HOVER_FILL_OPACITY
    } else {
        style::FILL_OPACITY
    };
    let fill = style::category_fill(feature.category).gamma_multiply(opacity);
    let stroke = if hovered {
        style::hover_stroke()
    } else {
        style::base_stroke()
    };
    for ring in &feature.rings {
        if ring.len() < 3 {
            continue;
        }
        let points: Vec<egui::Pos2> = ring
            .iter()
            .map(|&(lon, lat)| projection.to_screen(lon, lat))
            .collect();
        painter.add(egui::Shape::Path(PathShape {
            points,
            closed: true,
            fill,
            stroke: PathStroke::new(stroke.width, stroke.color),
        }));
    }
}

fn show_tooltip(ui: &egui::Ui, feature: &JoinedFeature) {
    let palette = style::palette();
    egui::Tooltip::always_open(
        ui.ctx().clone(),
        ui.layer_id(),
        egui::Id::new("map_hover_tooltip"),
        egui::PopupAnchor::Pointer,
    )
    .show(|ui| {
        let mut lines = feature.tooltip.iter();
        if let Some(name) = lines.next() {
            ui.label(
                egui::RichText::new(name)
                    .color(palette.text_primary)
                    .strong(),
            );
        }
        for line in lines {
            ui.label(egui::RichText::new(line).color(palette.text_muted));
        }
    });
}
