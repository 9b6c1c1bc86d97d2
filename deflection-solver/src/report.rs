//! Display strings for a deflection curve
//!
//! The calculator shows two text outputs: a one-line maximum deflection and
//! a two-column table of the sampled curve. Numbers use C-style scientific
//! notation (`9.920635e-06`), not Rust's default `9.920635e-6`.

use serde::{Deserialize, Serialize};

use crate::results::DeflectionCurve;

/// Header line of the curve table
pub const TABLE_HEADER: &str = "x(m)   deflection(m)";

const COLUMN_GAP: &str = "   ";

/// Scientific notation with 6 fractional digits and a signed exponent of at
/// least two digits.
pub fn format_scientific(value: f64) -> String {
    if let Some(s) = non_finite(value) {
        return s.to_string();
    }

    let raw = format!("{:.6e}", value);
    let Some((mantissa, exponent)) = raw.split_once('e') else {
        return raw;
    };
    match exponent.parse::<i32>() {
        Ok(exp) => {
            let sign = if exp < 0 { '-' } else { '+' };
            format!("{}e{}{:02}", mantissa, sign, exp.abs())
        }
        Err(_) => raw.clone(),
    }
}

/// Fixed-point notation with `decimals` fractional digits
pub fn format_fixed(value: f64, decimals: usize) -> String {
    match non_finite(value) {
        Some(s) => s.to_string(),
        None => format!("{:.*}", decimals, value),
    }
}

fn non_finite(value: f64) -> Option<&'static str> {
    if value.is_nan() {
        Some("nan")
    } else if value == f64::INFINITY {
        Some("inf")
    } else if value == f64::NEG_INFINITY {
        Some("-inf")
    } else {
        None
    }
}

/// `Maximum Deflection: <value> m`
pub fn summary_line(curve: &DeflectionCurve) -> String {
    format!(
        "Maximum Deflection: {} m",
        format_scientific(curve.max_deflection)
    )
}

/// Header followed by one newline-terminated line per sample
pub fn curve_table(curve: &DeflectionCurve) -> String {
    let mut table = String::with_capacity(24 * (curve.len() + 1));
    table.push_str(TABLE_HEADER);
    table.push('\n');

    for point in curve.points() {
        table.push_str(&format_fixed(point.x, 2));
        table.push_str(COLUMN_GAP);
        table.push_str(&format_scientific(point.y));
        table.push('\n');
    }
    table
}

/// The two display outputs of the calculator
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeflectionReport {
    /// Single-line maximum deflection label
    pub summary: String,
    /// Multi-line curve table
    pub table: String,
}

impl DeflectionReport {
    pub fn from_curve(curve: &DeflectionCurve) -> Self {
        Self {
            summary: summary_line(curve),
            table: curve_table(curve),
        }
    }
}
