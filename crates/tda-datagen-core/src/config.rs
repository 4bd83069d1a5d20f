//! Generation configuration.
//!
//! Configs are created per call and never mutated once generation begins.
//! Defaults mirror the reference dataset generator this crate replaces:
//! a 3-dimensional unit sphere, 20000 points, 8 trials, min-NN selection.
//! Every config carries an explicit seed so datasets are reproducible and
//! parallel trials can derive independent streams from it.

use serde::{Deserialize, Serialize};

use crate::error::{DatagenError, Result};
use crate::optimizer::Selection;
use crate::sampler;

/// Configuration for generating one d-sphere point cloud.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SphereConfig {
    /// Euclidean dimension of the ambient space; a circle is dimension 2,
    /// a sphere dimension 3, and so on. Must be >= 2.
    pub dimension: usize,

    /// Number of points in the output cloud. Must be >= 1.
    pub num_points: usize,

    /// Inner radius bound. Must satisfy 0 <= r1 <= r2.
    pub r1: f64,

    /// Outer radius bound. r1 == r2 means a pure boundary with no shell
    /// thickness.
    pub r2: f64,

    /// Number of independent candidate clouds the optimizer selects
    /// from. Must be >= 1.
    pub trials: usize,

    /// Criterion for choosing among candidates.
    pub selection: Selection,

    /// Random seed for reproducibility.
    pub seed: u64,
}

impl Default for SphereConfig {
    fn default() -> Self {
        Self {
            dimension: 3,
            num_points: 20000,
            r1: 1.0,
            r2: 1.0,
            trials: 8,
            selection: Selection::Min,
            seed: 42,
        }
    }
}

impl SphereConfig {
    /// Validate every field before any sampling begins.
    pub fn validate(&self) -> Result<()> {
        sampler::validate_args(self.dimension, self.num_points, self.r1, self.r2)?;
        if self.trials < 1 {
            return Err(DatagenError::InvalidTrialCount {
                trials: self.trials,
            });
        }
        Ok(())
    }
}

/// Configuration for generating a product-of-spheres point cloud.
///
/// The shared fields have the same meaning as on [`SphereConfig`]; each
/// entry of `dimensions` produces one independently optimized sub-sphere.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SphereProductConfig {
    /// Dimension of each sphere in the product, in output column order.
    pub dimensions: Vec<usize>,

    /// Number of points in the output cloud (shared by every sub-sphere).
    pub num_points: usize,

    /// Inner radius bound for every sub-sphere.
    pub r1: f64,

    /// Outer radius bound for every sub-sphere.
    pub r2: f64,

    /// Trials per sub-sphere.
    pub trials: usize,

    /// Criterion for choosing among candidates.
    pub selection: Selection,

    /// Random seed for reproducibility.
    pub seed: u64,
}

impl Default for SphereProductConfig {
    fn default() -> Self {
        Self {
            dimensions: vec![2, 2],
            num_points: 20000,
            r1: 1.0,
            r2: 1.0,
            trials: 8,
            selection: Selection::Min,
            seed: 42,
        }
    }
}

impl SphereProductConfig {
    /// Configuration for the flat torus with the given intrinsic
    /// dimension: the product of n circles.
    pub fn torus(intrinsic_dimension: usize) -> Self {
        Self {
            dimensions: vec![2; intrinsic_dimension],
            ..Self::default()
        }
    }
}
