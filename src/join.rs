//! Joins geometry features against the dataset for rendering and interaction.
//!
//! The join is pure: it resolves each feature name to a UF code, classifies
//! the region, and precomputes tooltip lines and the click target. The
//! presentation layer does the actual hit-testing, styling, and event
//! dispatch from this table.

use crate::classify::{self, RegionCategory};
use crate::dataset::DatasetStore;
use crate::format;
use crate::geo::{FeatureCollection, names};

/// What a click on a feature should open.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ClickTarget {
    /// Index into the store for a record with metrics.
    Region(usize),
    /// Region without a usable record; the panel shows a reason instead.
    NoData {
        name: String,
        code: Option<&'static str>,
    },
}

/// One geometry feature with everything the map needs attached.
#[derive(Debug, Clone)]
pub struct JoinedFeature {
    /// Display name from the geometry resource.
    pub name: String,
    /// Resolved UF code; `None` for unmatched names.
    pub code: Option<&'static str>,
    /// Visual category driving the fill color.
    pub category: RegionCategory,
    /// Polygon rings in `(lon, lat)`.
    pub rings: Vec<Vec<(f64, f64)>>,
    /// Hover tooltip lines: name first, then a category-specific line.
    pub tooltip: Vec<String>,
    /// Panel target when the feature is clicked.
    pub click: ClickTarget,
}

/// Join every feature in the collection against the store.
pub fn join_features(store: &DatasetStore, collection: &FeatureCollection) -> Vec<JoinedFeature> {
    collection
        .features
        .iter()
        .map(|feature| {
            let name = feature.properties.name.clone();
            let code = names::uf_code(&name);
            let record = code.and_then(|code| store.find_by_code(code));
            let category = classify::classify(code, record);
            let tooltip = tooltip_lines(&name, category, record.and_then(|r| r.underreporting_rate()));
            let click = click_target(store, &name, code);
            JoinedFeature {
                name,
                code,
                category,
                rings: feature.rings(),
                tooltip,
                click,
            }
        })
        .collect()
}

/// A click opens the full record only when it exists and carries metrics;
/// everything else routes to the no-data panel. This is independent of the
/// coloring category.
fn click_target(store: &DatasetStore, name: &str, code: Option<&'static str>) -> ClickTarget {
    let with_metrics = code
        .and_then(|code| store.index_of(code))
        .filter(|&index| store.states()[index].metrics.is_some());
    match with_metrics {
        Some(index) => ClickTarget::Region(index),
        None => ClickTarget::NoData {
            name: name.to_string(),
            code,
        },
    }
}

fn tooltip_lines(name: &str, category: RegionCategory, rate: Option<f64>) -> Vec<String> {
    let detail = match category {
        RegionCategory::Benchmark => "★ Benchmark".to_string(),
        RegionCategory::Rated(_) => format!("Subnotificação: {}", format::rate1(rate)),
        RegionCategory::NoData => "Dados não disponíveis".to_string(),
    };
    vec![name.to_string(), detail]
}
