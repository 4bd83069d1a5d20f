//! Exact nearest-neighbor statistics for trial scoring.
//!
//! The optimizer ranks candidate clouds by summary statistics of each
//! point's distance to its nearest other point. The scan is the full
//! O(num_points^2) pairwise computation, no approximation: candidate
//! clouds are benchmark-sized, and an approximate neighbor structure would
//! feed noise into the very statistic being optimized.

use rayon::prelude::*;

use crate::cloud::PointCloud;

/// L2 norm (Euclidean length) of a coordinate row.
#[inline]
pub fn l2_norm(v: &[f64]) -> f64 {
    v.iter().map(|x| x * x).sum::<f64>().sqrt()
}

/// Euclidean distance between two equal-length rows.
#[inline]
pub fn euclidean_distance(a: &[f64], b: &[f64]) -> f64 {
    debug_assert_eq!(a.len(), b.len(), "distance between unequal widths");
    a.iter()
        .zip(b.iter())
        .map(|(x, y)| (x - y) * (x - y))
        .sum::<f64>()
        .sqrt()
}

/// Distance from each point to its nearest other point in the same cloud.
///
/// Rows are scanned in parallel; output order matches row order. A
/// single-point cloud yields `+inf` (minimum over an empty candidate set).
pub fn nearest_neighbor_distances(cloud: &PointCloud) -> Vec<f64> {
    let points = cloud.points();
    points
        .par_iter()
        .enumerate()
        .map(|(i, p)| {
            let mut best = f64::INFINITY;
            for (j, q) in points.iter().enumerate() {
                if i == j {
                    continue;
                }
                let d = euclidean_distance(p, q);
                if d < best {
                    best = d;
                }
            }
            best
        })
        .collect()
}

/// Arithmetic mean. Zero for an empty slice.
pub fn mean(values: &[f64]) -> f64 {
    if values.is_empty() {
        return 0.0;
    }
    values.iter().sum::<f64>() / values.len() as f64
}

/// Population standard deviation. Zero for an empty slice.
pub fn std_dev(values: &[f64]) -> f64 {
    if values.is_empty() {
        return 0.0;
    }
    let m = mean(values);
    let variance = values
        .iter()
        .map(|&x| {
            let diff = x - m;
            diff * diff
        })
        .sum::<f64>()
        / values.len() as f64;
    variance.sqrt()
}
