//! xyplot - plot two-column numeric data in the terminal.
//!
//! xyplot reads a text file of whitespace-separated `x y` pairs, one pair per
//! line, and draws them as a line chart connecting the points in file order.
//!
//! # Example
//!
//! ```no_run
//! use xyplot::data::DataReader;
//! use std::path::Path;
//!
//! let dataset = DataReader::read_file(Path::new("xy.dat"))?;
//! let (xs, ys) = dataset.columns();
//! println!("{} points, first x = {:?}", dataset.len(), xs.get(0));
//! # let _ = ys;
//! # Ok::<(), xyplot::XyPlotError>(())
//! ```

#![warn(
    missing_docs,
    missing_debug_implementations,
    rust_2018_idioms,
    unreachable_pub
)]
#![deny(unsafe_code)]

pub mod app;
pub mod data;
pub mod error;
pub mod ui;
pub mod util;

pub use error::{Result, XyPlotError};
