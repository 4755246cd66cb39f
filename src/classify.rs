//! Region classification: visual category and no-data reasons.
//!
//! Classification is ordered rule evaluation, first match wins. The excluded
//! set is checked before everything else, so a hypothetical benchmark-status
//! record inside it still classifies as no-data.

use crate::dataset::StateRecord;

/// UF codes structurally excluded from the analysis.
pub const EXCLUDED_CODES: [&str; 6] = ["AC", "AL", "AP", "AM", "RJ", "TO"];

/// Rate bins, in increasing severity. Boundary values belong to the higher
/// bin: 50.0 is `Under65`, 85.0 is `Extreme`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum RateBand {
    /// rate < 50
    Under50,
    /// 50 <= rate < 65
    Under65,
    /// 65 <= rate < 75
    Under75,
    /// 75 <= rate < 85
    Under85,
    /// rate >= 85
    Extreme,
}

/// Visual category assigned to a region on the map.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RegionCategory {
    /// Structurally excluded, unknown, or missing a usable rate.
    NoData,
    /// Calibration reference, fixed blue.
    Benchmark,
    /// Rated region colored by its bin.
    Rated(RateBand),
}

/// Classify a region from its resolved code and optional record.
pub fn classify(code: Option<&str>, record: Option<&StateRecord>) -> RegionCategory {
    let excluded = code.is_some_and(|code| EXCLUDED_CODES.contains(&code));
    let Some(record) = record.filter(|_| !excluded) else {
        return RegionCategory::NoData;
    };
    if record.is_benchmark() {
        return RegionCategory::Benchmark;
    }
    match record.underreporting_rate() {
        Some(rate) => RegionCategory::Rated(rate_band(rate)),
        None => RegionCategory::NoData,
    }
}

/// Bucket a rate into its severity bin.
pub fn rate_band(rate: f64) -> RateBand {
    if rate < 50.0 {
        RateBand::Under50
    } else if rate < 65.0 {
        RateBand::Under65
    } else if rate < 75.0 {
        RateBand::Under75
    } else if rate < 85.0 {
        RateBand::Under85
    } else {
        RateBand::Extreme
    }
}

/// Reason shown when the state has been used to calibrate the model.
pub const REASON_BENCHMARK: &str = "Santa Catarina foi utilizada como benchmark para o modelo. \
     Os dados de SC serviram como referência para projetar a subnotificação nos demais estados.";
const REASON_CYBER_ONLY: &str = "Este estado forneceu apenas dados de crimes cibernéticos \
     próprios (cyber-dependent), não permitindo a análise completa.";
const REASON_INSUFFICIENT: &str =
    "Os dados deste estado estavam indisponíveis ou insuficientes para inclusão na análise.";
const REASON_NO_RESPONSE: &str =
    "Tocantins não respondeu à solicitação de dados dentro do prazo estabelecido.";
const REASON_GENERIC: &str = "Dados não disponíveis para esta Unidade Federativa.";

/// Explanatory text for a region opened without usable metrics.
///
/// Subsets are checked in order; anything unmatched (including a missing
/// code) falls back to the generic text. Never empty.
pub fn no_data_reason(code: Option<&str>) -> &'static str {
    match code {
        Some("SC") => REASON_BENCHMARK,
        Some("AC") | Some("AL") | Some("AP") => REASON_CYBER_ONLY,
        Some("AM") | Some("RJ") => REASON_INSUFFICIENT,
        Some("TO") => REASON_NO_RESPONSE,
        _ => REASON_GENERIC,
    }
}
