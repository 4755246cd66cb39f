//! Pure builders that turn dataset records into panel view models.
//!
//! Everything display-facing is formatted here so the renderer only places
//! widgets and the tests can assert on structured data instead of markup.

use crate::classify::{self, REASON_BENCHMARK};
use crate::dataset::{MunicipalityRecord, StateRecord};
use crate::egui_app::state::{
    MetricTone, MetricView, MunicipalityDetailView, MunicipalityTableView, PanelBodyView,
    PanelHeaderView, PanelView, RegionDetailView, SelectorOption, SelectorView, YearRowView,
};
use crate::format;

/// Line shown instead of the selector when a region lists no municipalities.
pub const NO_MUNICIPALITIES: &str = "Nenhum município disponível.";
/// Message shown for a municipality without any yearly entries.
pub const NO_ANNUAL_DATA: &str = "Sem dados anuais disponíveis.";
/// Null option label of the municipality selector.
pub const SELECTOR_PROMPT: &str = "Selecione um município…";

const BENCHMARK_COLUMNS: [&str; 2] = ["Ano", "BOs Registrados"];
const NORMAL_COLUMNS: [&str; 4] = ["Ano", "BOs", "Previsto", "Taxa"];

/// Build the panel for a region with metrics.
pub fn region_panel(region_index: usize, record: &StateRecord) -> PanelView {
    let benchmark = record.is_benchmark();
    let metrics = record.metrics.as_ref();
    let metric_views = if benchmark {
        vec![MetricView {
            value: format::count(metrics.and_then(|m| m.reported_count)),
            label: "BOs Registrados (2021-2024)".into(),
            tone: MetricTone::Benchmark,
        }]
    } else {
        vec![
            MetricView {
                value: format::count(metrics.and_then(|m| m.reported_count)),
                label: "BOs Registrados".into(),
                tone: MetricTone::Neutral,
            },
            MetricView {
                value: format::count_rounded(metrics.and_then(|m| m.predicted_count)),
                label: "BOs Previstos".into(),
                tone: MetricTone::Neutral,
            },
            MetricView {
                value: format::rate2(metrics.and_then(|m| m.underreporting_rate)),
                label: "Taxa de Subnotificação".into(),
                tone: MetricTone::Alert,
            },
        ]
    };

    PanelView {
        header: PanelHeaderView {
            title: record.name.clone(),
            subtitle: format!(
                "UF: {} · {} municípios",
                record.code,
                record.municipality_count()
            ),
            benchmark,
        },
        body: PanelBodyView::Region(RegionDetailView {
            region_index,
            benchmark,
            metrics: metric_views,
            note: benchmark.then_some(REASON_BENCHMARK),
            selector: selector(record),
            detail: None,
        }),
    }
}

/// Build the panel for a region without usable metrics.
pub fn no_data_panel(name: &str, code: Option<&str>) -> PanelView {
    PanelView {
        header: PanelHeaderView {
            title: name.to_string(),
            subtitle: format!("UF: {}", code.unwrap_or(format::PLACEHOLDER)),
            benchmark: false,
        },
        body: PanelBodyView::NoData {
            reason: classify::no_data_reason(code),
        },
    }
}

/// Build the drill-down detail for one municipality.
pub fn municipality_detail(mun: &MunicipalityRecord, benchmark: bool) -> MunicipalityDetailView {
    let years = mun.sorted_years();
    if years.is_empty() {
        return MunicipalityDetailView::NoAnnualData {
            name: mun.name.clone(),
        };
    }

    let columns: Vec<&'static str> = if benchmark {
        BENCHMARK_COLUMNS.to_vec()
    } else {
        NORMAL_COLUMNS.to_vec()
    };
    let rows = years
        .into_iter()
        .map(|(year, metrics)| {
            let mut cells = vec![year.to_string(), format::count(metrics.reported_count)];
            if !benchmark {
                cells.push(format::count_rounded(metrics.predicted_count));
                cells.push(format::rate1(metrics.rate));
            }
            YearRowView { cells }
        })
        .collect();

    MunicipalityDetailView::Table(MunicipalityTableView {
        name: mun.name.clone(),
        population: mun
            .population
            .map(|pop| format!("População: {}", format::group_int(pop))),
        columns,
        rows,
    })
}

/// Selector options: labels alphabetical, values the original indices.
fn selector(record: &StateRecord) -> Option<SelectorView> {
    if record.municipalities.is_empty() {
        return None;
    }
    let mut options: Vec<SelectorOption> = record
        .municipalities
        .iter()
        .enumerate()
        .map(|(index, mun)| SelectorOption {
            index,
            label: mun.name.clone(),
        })
        .collect();
    options.sort_by(|a, b| a.label.cmp(&b.label));
    Some(SelectorView {
        options,
        selected: None,
    })
}
