//! Rectangular point-cloud matrix shared by the sampler, optimizer, and
//! composer.
//!
//! A [`PointCloud`] is `num_points` rows of `dimension` f64 coordinates.
//! Row order is insertion order from generation and carries no semantic
//! meaning; points are exchangeable. The row width is fixed at
//! construction, so the matrix stays rectangular, the one format
//! guarantee the downstream persistent-homology engine relies on.

use serde::{Deserialize, Serialize};

/// An ordered set of points with a fixed coordinate width.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PointCloud {
    dimension: usize,
    points: Vec<Vec<f64>>,
}

impl PointCloud {
    /// Create an empty cloud of the given width, pre-allocating row slots.
    pub fn with_capacity(dimension: usize, num_points: usize) -> Self {
        Self {
            dimension,
            points: Vec::with_capacity(num_points),
        }
    }

    /// Append a point. The row must match the cloud's width.
    pub(crate) fn push(&mut self, point: Vec<f64>) {
        debug_assert_eq!(point.len(), self.dimension, "row width mismatch");
        self.points.push(point);
    }

    /// Coordinate width of every row.
    pub fn dimension(&self) -> usize {
        self.dimension
    }

    /// Number of points in the cloud.
    pub fn num_points(&self) -> usize {
        self.points.len()
    }

    /// True if the cloud holds no points.
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// All rows, in insertion order.
    pub fn points(&self) -> &[Vec<f64>] {
        &self.points
    }

    /// Iterate over rows as coordinate slices.
    pub fn iter(&self) -> impl Iterator<Item = &[f64]> {
        self.points.iter().map(|p| p.as_slice())
    }

    /// Flatten to a row-major coordinate buffer.
    ///
    /// This is the wire format handed to the downstream engine: a
    /// rectangular matrix of finite floats, `num_points * dimension` long.
    pub fn to_row_major(&self) -> Vec<f64> {
        let mut flat = Vec::with_capacity(self.points.len() * self.dimension);
        for point in &self.points {
            flat.extend_from_slice(point);
        }
        flat
    }

    /// Concatenate clouds column-wise, pairing rows by positional index.
    ///
    /// All blocks must have the same number of points; the result's width
    /// is the sum of the block widths.
    pub(crate) fn hstack(blocks: &[PointCloud]) -> PointCloud {
        debug_assert!(!blocks.is_empty(), "hstack of zero blocks");
        let num_points = blocks[0].num_points();
        debug_assert!(
            blocks.iter().all(|b| b.num_points() == num_points),
            "hstack blocks disagree on row count"
        );

        let dimension = blocks.iter().map(|b| b.dimension()).sum();
        let mut cloud = PointCloud::with_capacity(dimension, num_points);
        for row in 0..num_points {
            let mut point = Vec::with_capacity(dimension);
            for block in blocks {
                point.extend_from_slice(&block.points[row]);
            }
            cloud.push(point);
        }
        cloud
    }
}
