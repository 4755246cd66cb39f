//! Number formatting for panel display.
//!
//! Counts render as pt-BR grouped integers (dot thousands separator, no
//! fractional digits). Rates render with a fixed number of decimal places and
//! a percent sign. Missing values always render as a placeholder dash, never
//! as `0` or `null`.

/// Placeholder shown for any missing numeric field.
pub const PLACEHOLDER: &str = "—";

/// Group an integer with pt-BR dot thousands separators.
pub fn group_int(value: u64) -> String {
    let digits = value.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (idx, ch) in digits.chars().enumerate() {
        if idx > 0 && (digits.len() - idx) % 3 == 0 {
            out.push('.');
        }
        out.push(ch);
    }
    out
}

/// Format an optional count, falling back to the placeholder dash.
pub fn count(value: Option<u64>) -> String {
    value.map(group_int).unwrap_or_else(|| PLACEHOLDER.to_string())
}

/// Format an optional fractional count by rounding to the nearest integer.
pub fn count_rounded(value: Option<f64>) -> String {
    value
        .map(|v| group_int(v.round().max(0.0) as u64))
        .unwrap_or_else(|| PLACEHOLDER.to_string())
}

/// Format an optional percentage with one decimal place.
pub fn rate1(value: Option<f64>) -> String {
    value
        .map(|v| format!("{v:.1}%"))
        .unwrap_or_else(|| PLACEHOLDER.to_string())
}

/// Format an optional percentage with two decimal places.
pub fn rate2(value: Option<f64>) -> String {
    value
        .map(|v| format!("{v:.2}%"))
        .unwrap_or_else(|| PLACEHOLDER.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn groups_thousands_with_dots() {
        assert_eq!(group_int(0), "0");
        assert_eq!(group_int(999), "999");
        assert_eq!(group_int(1_000), "1.000");
        assert_eq!(group_int(1_234_567), "1.234.567");
    }

    #[test]
    fn missing_values_render_as_dash() {
        assert_eq!(count(None), PLACEHOLDER);
        assert_eq!(count_rounded(None), PLACEHOLDER);
        assert_eq!(rate1(None), PLACEHOLDER);
        assert_eq!(rate2(None), PLACEHOLDER);
    }

    #[test]
    fn rounds_fractional_counts_before_grouping() {
        assert_eq!(count_rounded(Some(1499.6)), "1.500");
        assert_eq!(count_rounded(Some(1499.4)), "1.499");
    }

    #[test]
    fn rates_keep_fixed_decimal_places() {
        assert_eq!(rate1(Some(63.0)), "63.0%");
        assert_eq!(rate2(Some(63.456)), "63.46%");
    }
}
