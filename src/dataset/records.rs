//! Serde model for the under-reporting dataset.
//!
//! The dataset is a JSON array of state objects. Everything here is a
//! read-only view after load; display ordering concerns (year sorting) live
//! on the records so the UI never re-derives them.

use std::collections::HashMap;

use serde::Deserialize;

/// One federative unit and its metrics.
#[derive(Debug, Clone, Deserialize)]
pub struct StateRecord {
    /// Two-letter UF code, unique across the dataset.
    pub code: String,
    /// Display name.
    pub name: String,
    /// Whether the state's data calibrated the model.
    #[serde(default)]
    pub status: RegionStatus,
    /// State-level metrics; absent for states without usable data.
    #[serde(default)]
    pub metrics: Option<StateMetrics>,
    /// Municipalities in dataset order.
    #[serde(default)]
    pub municipalities: Vec<MunicipalityRecord>,
}

/// Role of a state's data in the predictive model.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RegionStatus {
    /// Regular state, colored by its under-reporting rate.
    #[default]
    Normal,
    /// Calibration reference; only reported counts are meaningful.
    Benchmark,
}

/// Aggregate state-level metrics.
#[derive(Debug, Clone, Deserialize)]
pub struct StateMetrics {
    /// Police reports actually registered.
    #[serde(default)]
    pub reported_count: Option<u64>,
    /// Reports the model predicts should exist.
    #[serde(default)]
    pub predicted_count: Option<f64>,
    /// Under-reporting percentage, assumed within [0, 100].
    #[serde(default)]
    pub underreporting_rate: Option<f64>,
    /// Total municipality count when it differs from the listed ones.
    #[serde(default)]
    pub municipality_count: Option<usize>,
}

/// One municipality within a state.
#[derive(Debug, Clone, Deserialize)]
pub struct MunicipalityRecord {
    /// Display name.
    pub name: String,
    /// IBGE code, unique within the state.
    pub ibge_code: u64,
    /// Resident population when known.
    #[serde(default)]
    pub population: Option<u64>,
    /// Metrics keyed by year (e.g. "2021"). Insertion order is irrelevant.
    #[serde(default)]
    pub yearly: HashMap<String, YearMetrics>,
}

/// Per-year metrics for a municipality. Every field is independently optional.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct YearMetrics {
    /// Police reports registered that year.
    #[serde(default)]
    pub reported_count: Option<u64>,
    /// Predicted report count.
    #[serde(default)]
    pub predicted_count: Option<f64>,
    /// Under-reporting percentage for the year.
    #[serde(default)]
    pub rate: Option<f64>,
}

impl StateRecord {
    /// True when this state calibrated the model.
    pub fn is_benchmark(&self) -> bool {
        self.status == RegionStatus::Benchmark
    }

    /// Whether the state has a usable rate for choropleth coloring.
    pub fn underreporting_rate(&self) -> Option<f64> {
        self.metrics.as_ref().and_then(|m| m.underreporting_rate)
    }

    /// Municipality count for the header: the explicit total when present,
    /// otherwise the number of listed municipalities.
    pub fn municipality_count(&self) -> usize {
        self.metrics
            .as_ref()
            .and_then(|m| m.municipality_count)
            .unwrap_or(self.municipalities.len())
    }
}

impl MunicipalityRecord {
    /// Year entries in ascending year order, parsed from the key.
    ///
    /// Keys that do not parse as integers sort after all parsed years, in
    /// lexicographic order, and display verbatim.
    pub fn sorted_years(&self) -> Vec<(&str, &YearMetrics)> {
        let mut entries: Vec<(&str, &YearMetrics)> = self
            .yearly
            .iter()
            .map(|(key, metrics)| (key.as_str(), metrics))
            .collect();
        entries.sort_by(|(a, _), (b, _)| {
            let ka = a.parse::<i32>().ok();
            let kb = b.parse::<i32>().ok();
            match (ka, kb) {
                (Some(a_year), Some(b_year)) => a_year.cmp(&b_year),
                (Some(_), None) => std::cmp::Ordering::Less,
                (None, Some(_)) => std::cmp::Ordering::Greater,
                (None, None) => a.cmp(b),
            }
        });
        entries
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn municipality_with_years(years: &[&str]) -> MunicipalityRecord {
        MunicipalityRecord {
            name: "Teste".into(),
            ibge_code: 4_205_407,
            population: None,
            yearly: years
                .iter()
                .map(|year| (year.to_string(), YearMetrics::default()))
                .collect(),
        }
    }

    #[test]
    fn years_sort_ascending_regardless_of_insertion_order() {
        let mun = municipality_with_years(&["2021", "2023", "2022"]);
        let order: Vec<&str> = mun.sorted_years().into_iter().map(|(y, _)| y).collect();
        assert_eq!(order, vec!["2021", "2022", "2023"]);
    }

    #[test]
    fn unparsable_year_keys_sort_last() {
        let mun = municipality_with_years(&["total", "2022", "2021"]);
        let order: Vec<&str> = mun.sorted_years().into_iter().map(|(y, _)| y).collect();
        assert_eq!(order, vec!["2021", "2022", "total"]);
    }

    #[test]
    fn municipality_count_prefers_explicit_total() {
        let record: StateRecord = serde_json::from_str(
            r#"{
                "code": "SP",
                "name": "São Paulo",
                "metrics": { "reported_count": 10, "municipality_count": 645 },
                "municipalities": [
                    { "name": "Campinas", "ibge_code": 3509502 }
                ]
            }"#,
        )
        .unwrap();
        assert_eq!(record.municipality_count(), 645);
    }

    #[test]
    fn municipality_count_falls_back_to_list_length() {
        let record: StateRecord = serde_json::from_str(
            r#"{
                "code": "SP",
                "name": "São Paulo",
                "municipalities": [
                    { "name": "Campinas", "ibge_code": 3509502 },
                    { "name": "Santos", "ibge_code": 3548500 }
                ]
            }"#,
        )
        .unwrap();
        assert_eq!(record.municipality_count(), 2);
    }

    #[test]
    fn status_defaults_to_normal() {
        let record: StateRecord =
            serde_json::from_str(r#"{ "code": "GO", "name": "Goiás" }"#).unwrap();
        assert_eq!(record.status, RegionStatus::Normal);
        assert!(!record.is_benchmark());
        assert!(record.underreporting_rate().is_none());
    }
}
