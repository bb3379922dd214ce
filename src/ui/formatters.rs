//! Shared formatting utilities for UI components.

/// Format a count with `,` between groups of three digits.
pub fn format_number(n: usize) -> String {
    let digits = n.to_string();
    let lead = match digits.len() % 3 {
        0 => 3,
        r => r,
    };

    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    out.push_str(&digits[..lead]);
    for group in digits.as_bytes()[lead..].chunks(3) {
        out.push(',');
        out.extend(group.iter().map(|&b| b as char));
    }
    out
}

/// Decimal places by magnitude: `(lower bound of |v|, places)`, largest first.
type PrecisionTable = [(f64, usize); 3];

const STAT_PRECISION: PrecisionTable = [(100.0, 2), (1.0, 4), (0.0, 5)];
const AXIS_PRECISION: PrecisionTable = [(100.0, 0), (1.0, 1), (0.0, 2)];

fn format_scaled(
    val: f64,
    fixed_range: std::ops::Range<f64>,
    exp_places: usize,
    table: &PrecisionTable,
) -> String {
    let magnitude = val.abs();
    if magnitude == 0.0 {
        return "0".to_string();
    }
    if !fixed_range.contains(&magnitude) {
        return format!("{:.*e}", exp_places, val);
    }
    let places = table
        .iter()
        .find(|(floor, _)| magnitude >= *floor)
        .map_or(0, |&(_, places)| places);
    format!("{:.*}", places, val)
}

/// Format a summary value (status bar ranges).
pub fn format_stat_value(val: f64) -> String {
    match val {
        v if v.is_nan() => "NaN".to_string(),
        v if v == f64::INFINITY => "+Inf".to_string(),
        v if v == f64::NEG_INFINITY => "-Inf".to_string(),
        v => format_scaled(v, 1e-3..1e6, 3, &STAT_PRECISION),
    }
}

/// Format an axis tick label; shorter than [`format_stat_value`].
pub fn format_axis_label(val: f64) -> String {
    if val.is_finite() {
        format_scaled(val, 1e-2..1e5, 1, &AXIS_PRECISION)
    } else {
        "?".to_string()
    }
}
