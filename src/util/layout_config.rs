//! Layout configuration constants for the plot view.

/// Configuration for the line plot layout.
#[derive(Debug, Clone)]
pub struct PlotLayoutConfig {
    /// Padding factor applied to each side of an axis (0.05 = 5% margin).
    pub axis_padding_factor: f64,
    /// Half-width used when an axis has zero extent.
    pub degenerate_half_width: f64,
    /// Number of labels drawn per axis.
    pub label_count: usize,
}

impl Default for PlotLayoutConfig {
    fn default() -> Self {
        Self {
            axis_padding_factor: 0.05,
            degenerate_half_width: 1.0,
            label_count: 3,
        }
    }
}
