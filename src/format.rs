//! Attribute value formatting.
//!
//! Converts polymorphic custom-column payloads into display strings. Total
//! and deterministic: every input, including missing payloads and unknown
//! kinds, produces a string (possibly empty) and never an error.

use crate::catalog::ColumnData;

/// Formats a column payload for display.
///
/// Bounded columns join their option names with `", "`, metric columns join
/// fixed-point values with `", "`, text columns return the stored value.
/// Missing payloads and unknown kinds yield the empty string.
pub fn format_column(data: Option<&ColumnData>) -> String {
    let Some(data) = data else {
        return String::new();
    };
    match data {
        ColumnData::Bounded { options } => options
            .iter()
            .map(|o| o.name.as_str())
            .collect::<Vec<_>>()
            .join(", "),
        ColumnData::Metric {
            values,
            decimal_count,
        } => values
            .iter()
            .map(|m| format_fixed(m.value, *decimal_count))
            .collect::<Vec<_>>()
            .join(", "),
        ColumnData::Text { value } => value.clone().unwrap_or_default(),
        ColumnData::Unknown => String::new(),
    }
}

/// Fixed-point formatting with exactly `decimals` fractional digits,
/// rounding halves away from zero.
pub fn format_fixed(value: f64, decimals: usize) -> String {
    let factor = 10f64.powi(decimals as i32);
    // f64::round is half-away-from-zero; the std formatter alone is not.
    let rounded = (value * factor).round() / factor;
    format!("{:.*}", decimals, rounded)
}
