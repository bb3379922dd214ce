//! Dataset information.

use super::DataPoint;
use crate::util::finite_range;
use ndarray::Array1;
use std::path::{Path, PathBuf};

/// The ordered points of one input file.
///
/// Built once by [`DataReader`](super::DataReader) and never modified
/// afterwards; point order is the file's line order.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Dataset {
    file_path: PathBuf,
    points: Vec<DataPoint>,
}

impl Dataset {
    /// Create a new dataset.
    pub fn new(file_path: impl Into<PathBuf>, points: Vec<DataPoint>) -> Self {
        Self {
            file_path: file_path.into(),
            points,
        }
    }

    /// Path to the source file.
    pub fn file_path(&self) -> &Path {
        &self.file_path
    }

    /// File name for display, falling back to the full path.
    pub fn display_name(&self) -> String {
        self.file_path
            .file_name()
            .map(|n| n.to_string_lossy().to_string())
            .unwrap_or_else(|| self.file_path.display().to_string())
    }

    /// Points in file order.
    pub fn points(&self) -> &[DataPoint] {
        &self.points
    }

    /// Number of points.
    pub fn len(&self) -> usize {
        self.points.len()
    }

    /// Whether the dataset has no points.
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// X values in file order.
    pub fn xs(&self) -> Vec<f64> {
        self.points.iter().map(|p| p.x).collect()
    }

    /// Y values in file order.
    pub fn ys(&self) -> Vec<f64> {
        self.points.iter().map(|p| p.y).collect()
    }

    /// Both columns as numeric arrays.
    pub fn columns(&self) -> (Array1<f64>, Array1<f64>) {
        let xs = self.points.iter().map(|p| p.x).collect::<Array1<f64>>();
        let ys = self.points.iter().map(|p| p.y).collect::<Array1<f64>>();
        (xs, ys)
    }

    /// Points as tuples for the chart widget, in input order.
    ///
    /// Points with a non-finite coordinate are dropped; the line joins
    /// their neighbours.
    pub fn chart_points(&self) -> Vec<(f64, f64)> {
        self.points
            .iter()
            .filter(|p| p.is_finite())
            .map(|&p| p.into())
            .collect()
    }

    /// Columns of the points that are drawn, those with both coordinates finite.
    pub fn finite_columns(&self) -> (Array1<f64>, Array1<f64>) {
        let finite = || self.points.iter().filter(|p| p.is_finite());
        let xs = finite().map(|p| p.x).collect::<Array1<f64>>();
        let ys = finite().map(|p| p.y).collect::<Array1<f64>>();
        (xs, ys)
    }

    /// Min/max x over the drawn points.
    pub fn x_range(&self) -> Option<(f64, f64)> {
        finite_range(self.finite_columns().0.view())
    }

    /// Min/max y over the drawn points.
    pub fn y_range(&self) -> Option<(f64, f64)> {
        finite_range(self.finite_columns().1.view())
    }
}
