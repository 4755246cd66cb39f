//! Maintains app state and bridges core logic to the egui UI.
//!
//! The controller owns the dataset store and the joined features; UI modules
//! report interactions (hover, click, selector changes, close requests) and
//! render whatever state results. All transitions are synchronous.

use crate::config::AppConfig;
use crate::dataset::{DatasetSource, DatasetStore};
use crate::egui_app::state::*;
use crate::egui_app::view_model;
use crate::geo::{self, FeatureCollection};
use crate::join::{self, ClickTarget, JoinedFeature};

/// Owns the dataset, the joined geometry, and all UI state.
#[derive(Default)]
pub struct AppController {
    pub ui: UiState,
    store: DatasetStore,
    geometry: Option<FeatureCollection>,
    features: Vec<JoinedFeature>,
}

impl AppController {
    pub fn new() -> Self {
        Self::default()
    }

    /// Run both startup loads. The loads are independent: a dataset failure
    /// leaves an empty store (the map renders all no-data), a geometry
    /// failure marks the map unavailable (the panel machinery still works).
    pub fn load_startup(&mut self, config: &AppConfig) {
        self.load_dataset(&config.dataset_source());
        match geo::fetch(&config.geometry_url) {
            Ok(collection) => self.install_geometry(collection),
            Err(error) => {
                tracing::error!("Geometry load failed, map unavailable: {error}");
                self.mark_geometry_unavailable();
            }
        }
    }

    /// Load (or reload) the dataset, degrading to empty on failure.
    pub fn load_dataset(&mut self, source: &DatasetSource) {
        self.store = DatasetStore::load(source);
        self.rejoin();
    }

    /// Install parsed geometry and join it against the store.
    pub fn install_geometry(&mut self, collection: FeatureCollection) {
        self.ui.map.unavailable = false;
        self.geometry = Some(collection);
        self.rejoin();
    }

    /// Record that the geometry resource could not be loaded.
    pub fn mark_geometry_unavailable(&mut self) {
        self.ui.map.unavailable = true;
        self.geometry = None;
        self.features.clear();
        self.ui.map.bounds = None;
        self.ui.map.hovered = None;
    }

    fn rejoin(&mut self) {
        let Some(collection) = &self.geometry else {
            return;
        };
        self.features = join::join_features(&self.store, collection);
        self.ui.map.bounds = feature_bounds(&self.features);
        self.ui.map.hovered = None;
    }

    pub fn store(&self) -> &DatasetStore {
        &self.store
    }

    pub fn features(&self) -> &[JoinedFeature] {
        &self.features
    }

    /// Update the hovered feature index from the map canvas.
    pub fn hover_feature(&mut self, index: Option<usize>) {
        self.ui.map.hovered = index;
    }

    /// Dispatch a click on a feature to the panel state machine.
    pub fn click_feature(&mut self, index: usize) {
        let Some(feature) = self.features.get(index) else {
            return;
        };
        match feature.click.clone() {
            ClickTarget::Region(region_index) => self.open_region(region_index),
            ClickTarget::NoData { name, code } => self.open_no_data(&name, code),
        }
    }

    /// Open the panel for a region with metrics.
    pub fn open_region(&mut self, region_index: usize) {
        let Some(record) = self.store.states().get(region_index) else {
            return;
        };
        tracing::debug!("Opening panel for {}", record.code);
        self.ui.panel = PanelState::Open(view_model::region_panel(region_index, record));
    }

    /// Open the panel for a region without usable metrics.
    pub fn open_no_data(&mut self, name: &str, code: Option<&str>) {
        tracing::debug!("Opening no-data panel for {name}");
        self.ui.panel = PanelState::Open(view_model::no_data_panel(name, code));
    }

    /// Apply a municipality selector change.
    ///
    /// `choice` is an index into the open record's municipality list (the
    /// selector option value). `None` or an out-of-range index clears the
    /// detail area without closing the panel.
    pub fn select_municipality(&mut self, choice: Option<usize>) {
        let PanelState::Open(panel) = &mut self.ui.panel else {
            return;
        };
        let PanelBodyView::Region(region) = &mut panel.body else {
            return;
        };
        let Some(record) = self.store.states().get(region.region_index) else {
            return;
        };

        let municipality = choice.and_then(|index| record.municipalities.get(index));
        match (choice, municipality) {
            (Some(index), Some(mun)) => {
                region.detail = Some(view_model::municipality_detail(mun, region.benchmark));
                if let Some(selector) = &mut region.selector {
                    selector.selected = selector.options.iter().position(|o| o.index == index);
                }
            }
            _ => {
                region.detail = None;
                if let Some(selector) = &mut region.selector {
                    selector.selected = None;
                }
            }
        }
    }

    /// Close the panel. All close paths (control, overlay click, Escape) call
    /// this; it is a no-op when already closed.
    pub fn close_panel(&mut self) {
        self.ui.panel.close();
    }
}

fn feature_bounds(features: &[JoinedFeature]) -> Option<MapBounds> {
    let mut bounds: Option<MapBounds> = None;
    for feature in features {
        for ring in &feature.rings {
            for &(x, y) in ring {
                bounds = Some(match bounds {
                    None => MapBounds {
                        min_x: x,
                        max_x: x,
                        min_y: y,
                        max_y: y,
                    },
                    Some(b) => MapBounds {
                        min_x: b.min_x.min(x),
                        max_x: b.max_x.max(x),
                        min_y: b.min_y.min(y),
                        max_y: b.max_y.max(y),
                    },
                });
            }
        }
    }
    bounds
}
