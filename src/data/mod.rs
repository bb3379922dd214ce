//! Data reading and representation.
//!
//! This module handles reading two-column text files and representing their
//! contents as an ordered set of points.

mod dataset;
mod point;
mod reader;

pub use dataset::Dataset;
pub use point::DataPoint;
pub use reader::{parse_line, DataReader};
