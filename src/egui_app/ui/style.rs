//! Palette and choropleth colors.

use eframe::egui::{Color32, Stroke, Visuals};

use crate::classify::{RateBand, RegionCategory};
use crate::egui_app::state::MetricTone;

#[derive(Clone, Copy)]
pub(crate) struct Palette {
    pub bg_primary: Color32,
    pub bg_panel: Color32,
    pub panel_outline: Color32,
    pub text_primary: Color32,
    pub text_muted: Color32,
    pub benchmark: Color32,
    pub alert: Color32,
    pub overlay_dim: Color32,
}

pub(crate) fn palette() -> Palette {
    Palette {
        bg_primary: Color32::from_rgb(15, 23, 42),
        bg_panel: Color32::from_rgb(21, 30, 48),
        panel_outline: Color32::from_rgb(30, 41, 59),
        text_primary: Color32::from_rgb(241, 245, 249),
        text_muted: Color32::from_rgb(100, 116, 139),
        benchmark: BENCHMARK_FILL,
        alert: Color32::from_rgb(248, 113, 113),
        overlay_dim: Color32::from_rgba_premultiplied(0, 0, 0, 160),
    }
}

/// Fixed no-data fill (#374151).
pub(crate) const NO_DATA_FILL: Color32 = Color32::from_rgb(0x37, 0x41, 0x51);
/// Fixed benchmark fill (#3b82f6).
pub(crate) const BENCHMARK_FILL: Color32 = Color32::from_rgb(0x3b, 0x82, 0xf6);
/// Rate bin fills in increasing severity.
pub(crate) const RATE_FILLS: [Color32; 5] = [
    Color32::from_rgb(0xfb, 0xbf, 0x24),
    Color32::from_rgb(0xf5, 0x9e, 0x0b),
    Color32::from_rgb(0xef, 0x44, 0x44),
    Color32::from_rgb(0xdc, 0x26, 0x26),
    Color32::from_rgb(0x99, 0x1b, 0x1b),
];

/// Base feature opacity.
pub(crate) const FILL_OPACITY: f32 = 0.85;
/// Opacity while hovered.
pub(crate) const HOVER_FILL_OPACITY: f32 = 0.95;

/// Fill color for a classified region.
pub(crate) fn category_fill(category: RegionCategory) -> Color32 {
    match category {
        RegionCategory::NoData => NO_DATA_FILL,
        RegionCategory::Benchmark => BENCHMARK_FILL,
        RegionCategory::Rated(band) => RATE_FILLS[band as usize],
    }
}

/// Base feature stroke (#1e293b, weight 1).
pub(crate) fn base_stroke() -> Stroke {
    Stroke::new(1.0, Color32::from_rgb(0x1e, 0x29, 0x3b))
}

/// Hover stroke (#22d3ee, weight 2).
pub(crate) fn hover_stroke() -> Stroke {
    Stroke::new(2.0, Color32::from_rgb(0x22, 0xd3, 0xee))
}

/// Color for a metric value in the panel.
pub(crate) fn metric_color(tone: MetricTone) -> Color32 {
    let palette = palette();
    match tone {
        MetricTone::Neutral => palette.text_primary,
        MetricTone::Benchmark => palette.benchmark,
        MetricTone::Alert => palette.alert,
    }
}

pub(crate) fn apply_visuals(visuals: &mut Visuals) {
    let palette = palette();
    visuals.window_fill = palette.bg_panel;
    visuals.panel_fill = palette.bg_primary;
    visuals.override_text_color = Some(palette.text_primary);
    visuals.widgets.noninteractive.bg_fill = palette.bg_panel;
    visuals.widgets.noninteractive.fg_stroke = Stroke::new(1.0, palette.text_primary);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::classify::rate_band;

    #[test]
    fn category_fills_are_fixed() {
        assert_eq!(category_fill(RegionCategory::NoData), NO_DATA_FILL);
        assert_eq!(category_fill(RegionCategory::Benchmark), BENCHMARK_FILL);
        assert_eq!(
            category_fill(RegionCategory::Rated(RateBand::Extreme)),
            Color32::from_rgb(0x99, 0x1b, 0x1b)
        );
    }

    #[test]
    fn boundary_rates_step_through_every_fill() {
        let expected = [
            (49.0, RATE_FILLS[0]),
            (50.0, RATE_FILLS[1]),
            (65.0, RATE_FILLS[2]),
            (75.0, RATE_FILLS[3]),
            (85.0, RATE_FILLS[4]),
        ];
        for (rate, fill) in expected {
            assert_eq!(
                category_fill(RegionCategory::Rated(rate_band(rate))),
                fill,
                "rate {rate}"
            );
        }
    }
}
