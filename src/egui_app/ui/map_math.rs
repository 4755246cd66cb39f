//! Projection and hit-testing math for the map canvas.

use eframe::egui;

use crate::egui_app::state::MapBounds;

/// Linear lon/lat to screen transform that fits the bounds into a rect.
/// Latitude grows north while screen y grows down, so y is flipped.
#[derive(Clone, Copy, Debug)]
pub(super) struct Projection {
    rect_center: egui::Pos2,
    world_center_x: f64,
    world_center_y: f64,
    scale: f64,
}

impl Projection {
    const FIT_MARGIN: f64 = 0.94;

    pub(super) fn fit(rect: egui::Rect, bounds: MapBounds) -> Self {
        let world_w = (bounds.max_x - bounds.min_x).max(1e-6);
        let world_h = (bounds.max_y - bounds.min_y).max(1e-6);
        let scale_x = rect.width() as f64 / world_w;
        let scale_y = rect.height() as f64 / world_h;
        Self {
            rect_center: rect.center(),
            world_center_x: (bounds.min_x + bounds.max_x) * 0.5,
            world_center_y: (bounds.min_y + bounds.max_y) * 0.5,
            scale: scale_x.min(scale_y) * Self::FIT_MARGIN,
        }
    }

    pub(super) fn to_screen(&self, lon: f64, lat: f64) -> egui::Pos2 {
        let dx = (lon - self.world_center_x) * self.scale;
        let dy = (lat - self.world_center_y) * self.scale;
        egui::pos2(
            self.rect_center.x + dx as f32,
            self.rect_center.y - dy as f32,
        )
    }

    pub(super) fn to_world(&self, pos: egui::Pos2) -> (f64, f64) {
        let dx = (pos.x - self.rect_center.x) as f64 / self.scale;
        let dy = (pos.y - self.rect_center.y) as f64 / self.scale;
        (self.world_center_x + dx, self.world_center_y - dy)
    }
}

/// Even-odd test across all rings, so interior holes count as outside.
pub(super) fn point_in_rings(rings: &[Vec<(f64, f64)>], x: f64, y: f64) -> bool {
    let mut inside = false;
    for ring in rings {
        let n = ring.len();
        if n < 3 {
            continue;
        }
        let mut j = n - 1;
        for i in 0..n {
            let (xi, yi) = ring[i];
            let (xj, yj) = ring[j];
            if (yi > y) != (yj > y) && x < (xj - xi) * (y - yi) / (yj - yi) + xi {
                inside = !inside;
            }
            j = i;
        }
    }
    inside
}
