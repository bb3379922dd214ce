//! Utility modules.

pub mod bounds;
pub mod layout_config;

pub use bounds::{axis_bounds, finite_range};
pub use layout_config::PlotLayoutConfig;
