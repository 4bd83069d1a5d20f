//! Product composer: concatenate independently optimized spheres into one
//! wider dataset.
//!
//! Each requested sub-dimension gets its own optimized sphere; the winning
//! clouds are concatenated column-wise in input order. Rows are paired
//! purely by positional index: the result is a component-wise pairing of
//! independent marginal samples, NOT a geometrically faithful sample of
//! the true Cartesian-product manifold (that would require joint
//! coordinate generation). Downstream consumers depend on this
//! approximation, so it is preserved as documented behavior.
//!
//! Products of circles generalize the flat torus: `dimensions = [2; n]`
//! yields the torus with intrinsic dimension n.

use rand::{Rng, SeedableRng};
use rayon::prelude::*;
use tracing::debug;

use crate::cloud::PointCloud;
use crate::error::{DatagenError, Result};
use crate::optimizer::{optimize, Selection};
use crate::sampler;

/// Base seed for one sub-sphere's trials.
///
/// Sub-sphere index goes in the high bits; trial indices occupy the low
/// bits, so streams never collide between sub-spheres.
fn sub_sphere_seed(base: u64, index: usize) -> u64 {
    base.wrapping_add((index as u64) << 32)
}

/// Generate a point cloud for the product of spheres of the given
/// dimensions.
///
/// Every sub-sphere shares `num_points`, the radius bounds, the trial
/// count, and the selection criterion, but is optimized independently
/// with its own random draws. The output has `num_points` rows and
/// `sum(dimensions)` columns.
///
/// # Errors
/// - `DatagenError::DimensionListEmpty` if `dimensions` is empty
/// - `DatagenError::InvalidTrialCount` if trials < 1
/// - `DatagenError::SubSphere` wrapping the underlying error, with the
///   offending entry's index, if any sub-sphere configuration is invalid
///
/// All validation happens before any sampling begins.
pub fn compose<R>(
    dimensions: &[usize],
    num_points: usize,
    r1: f64,
    r2: f64,
    trials: usize,
    selection: Selection,
    seed: u64,
) -> Result<PointCloud>
where
    R: Rng + SeedableRng,
{
    if dimensions.is_empty() {
        return Err(DatagenError::DimensionListEmpty);
    }
    if trials < 1 {
        return Err(DatagenError::InvalidTrialCount { trials });
    }
    for (index, &dimension) in dimensions.iter().enumerate() {
        sampler::validate_args(dimension, num_points, r1, r2).map_err(|source| {
            DatagenError::SubSphere {
                index,
                dimension,
                source: Box::new(source),
            }
        })?;
    }

    let sub_clouds: Vec<Result<PointCloud>> = dimensions
        .par_iter()
        .enumerate()
        .map(|(index, &dimension)| {
            let winner = optimize::<R, _>(
                move |rng| sampler::sample_cloud(rng, dimension, num_points, r1, r2),
                trials,
                selection,
                sub_sphere_seed(seed, index),
            )
            .map_err(|source| DatagenError::SubSphere {
                index,
                dimension,
                source: Box::new(source),
            })?;
            debug!(index, dimension, "sub-sphere optimized");
            Ok(winner.cloud)
        })
        .collect();

    let sub_clouds = sub_clouds.into_iter().collect::<Result<Vec<_>>>()?;
    Ok(PointCloud::hstack(&sub_clouds))
}
