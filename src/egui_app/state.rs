//! Shared state types for the egui UI.
//!
//! The detail panel is a small state machine: `Closed` or `Open` with a fully
//! built view model. Overlay visibility is derived from the same value, so
//! panel and overlay can never disagree.

/// Top-level UI model consumed by the egui renderer.
#[derive(Clone, Debug, Default)]
pub struct UiState {
    pub map: MapState,
    pub panel: PanelState,
}

/// Map canvas state.
#[derive(Clone, Debug, Default)]
pub struct MapState {
    /// Lon/lat bounds of the joined features, for the fit transform.
    pub bounds: Option<MapBounds>,
    /// Feature index currently under the pointer.
    pub hovered: Option<usize>,
    /// Geometry fetch failed; show the apology message instead of the map.
    pub unavailable: bool,
}

/// Lon/lat bounding box of the rendered features.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct MapBounds {
    pub min_x: f64,
    pub max_x: f64,
    pub min_y: f64,
    pub max_y: f64,
}

/// Detail panel states. `Closed` is initial and terminal.
#[derive(Clone, Debug, Default)]
pub enum PanelState {
    #[default]
    Closed,
    Open(PanelView),
}

impl PanelState {
    pub fn is_open(&self) -> bool {
        matches!(self, Self::Open(_))
    }

    /// Close the panel. Idempotent; closing an already-closed panel is a
    /// no-op.
    pub fn close(&mut self) {
        *self = Self::Closed;
    }
}

/// Everything the panel renderer needs, display-ready.
#[derive(Clone, Debug, PartialEq)]
pub struct PanelView {
    pub header: PanelHeaderView,
    pub body: PanelBodyView,
}

/// Panel header: state name plus the UF/municipality subtitle.
#[derive(Clone, Debug, PartialEq)]
pub struct PanelHeaderView {
    pub title: String,
    pub subtitle: String,
    /// Shows the benchmark badge next to the title.
    pub benchmark: bool,
}

/// Panel body variants.
#[derive(Clone, Debug, PartialEq)]
pub enum PanelBodyView {
    /// Region without usable metrics: fixed explanatory text.
    NoData { reason: &'static str },
    /// Region with metrics and optional drill-down.
    Region(RegionDetailView),
}

/// Metrics block plus municipality drill-down for an open region.
#[derive(Clone, Debug, PartialEq)]
pub struct RegionDetailView {
    /// Index of the record in the dataset store, for selector lookups.
    pub region_index: usize,
    pub benchmark: bool,
    pub metrics: Vec<MetricView>,
    /// Benchmark explanation shown under the metrics block.
    pub note: Option<&'static str>,
    /// Present when the region lists municipalities.
    pub selector: Option<SelectorView>,
    /// Detail for the currently selected municipality.
    pub detail: Option<MunicipalityDetailView>,
}

/// One formatted metric with its label.
#[derive(Clone, Debug, PartialEq)]
pub struct MetricView {
    pub value: String,
    pub label: String,
    pub tone: MetricTone,
}

/// Color tone for a metric value.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MetricTone {
    Neutral,
    Benchmark,
    Alert,
}

/// Municipality drop-down: alphabetical labels carrying original indices.
#[derive(Clone, Debug, PartialEq)]
pub struct SelectorView {
    pub options: Vec<SelectorOption>,
    /// Selected option position within `options`, not a municipality index.
    pub selected: Option<usize>,
}

/// One selectable municipality.
#[derive(Clone, Debug, PartialEq)]
pub struct SelectorOption {
    /// Index into the record's municipality list.
    pub index: usize,
    pub label: String,
}

/// Municipality detail area content.
#[derive(Clone, Debug, PartialEq)]
pub enum MunicipalityDetailView {
    /// The record has no yearly entries at all.
    NoAnnualData { name: String },
    /// Per-year table.
    Table(MunicipalityTableView),
}

/// Formatted per-year table. Benchmark tables have two columns, normal
/// tables four.
#[derive(Clone, Debug, PartialEq)]
pub struct MunicipalityTableView {
    pub name: String,
    /// Formatted population line when known.
    pub population: Option<String>,
    pub columns: Vec<&'static str>,
    pub rows: Vec<YearRowView>,
}

/// One table row; `cells` aligns with `columns`.
#[derive(Clone, Debug, PartialEq)]
pub struct YearRowView {
    pub cells: Vec<String>,
}
