//! Axis bounds computation.

use super::PlotLayoutConfig;
use ndarray::ArrayView1;

/// Min/max over the finite entries of `values`.
pub fn finite_range(values: ArrayView1<'_, f64>) -> Option<(f64, f64)> {
    values
        .iter()
        .copied()
        .filter(|v| v.is_finite())
        .fold(None, |acc, v| match acc {
            None => Some((v, v)),
            Some((min, max)) => Some((min.min(v), max.max(v))),
        })
}

/// Chart bounds for a data range, padded so lines don't touch the frame.
///
/// A zero-width range is widened around its value so the axis always has
/// extent. No range at all falls back to `[0, 1]`.
pub fn axis_bounds(range: Option<(f64, f64)>, config: &PlotLayoutConfig) -> [f64; 2] {
    let Some((min, max)) = range else {
        return [0.0, 1.0];
    };

    let span = max - min;
    if span > 0.0 {
        let padding = span * config.axis_padding_factor;
        [min - padding, max + padding]
    } else {
        let half = (min.abs() * config.axis_padding_factor).max(config.degenerate_half_width);
        [min - half, max + half]
    }
}

/// Evenly spaced label positions across `bounds`, inclusive of both ends.
pub fn label_positions(bounds: [f64; 2], count: usize) -> Vec<f64> {
    match count {
        0 => Vec::new(),
        1 => vec![(bounds[0] + bounds[1]) / 2.0],
        n => {
            let step = (bounds[1] - bounds[0]) / (n - 1) as f64;
            (0..n).map(|i| bounds[0] + step * i as f64).collect()
        },
    }
}
