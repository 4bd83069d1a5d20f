//! Deviate sampler: uniform random points on a d-sphere boundary.
//!
//! Uses Muller's method: draw a standard-normal vector per point,
//! normalize it onto the unit sphere (uniform over the surface by the
//! rotational symmetry of the multivariate normal), then scale by a
//! per-point radius. With distinct radii r1 < r2 the radius is drawn
//! uniformly with respect to ambient *volume* between the shells;
//! uniform-in-radius would cluster points toward the inner shell.
//!
//! The random source is always a caller-supplied [`Rng`]; this module owns
//! no entropy state.

use rand::Rng;
use rand_distr::{Distribution, StandardNormal};

use crate::cloud::PointCloud;
use crate::error::{DatagenError, Result};
use crate::neighbors::l2_norm;

/// Normal draws at or below this norm are redrawn before projection.
const DEGENERATE_NORM: f64 = 1e-12;

/// Validate sampler arguments. Shared with the product composer so every
/// sub-sphere is checked before any sampling starts.
pub(crate) fn validate_args(
    dimension: usize,
    num_points: usize,
    r1: f64,
    r2: f64,
) -> Result<()> {
    if dimension <= 1 {
        return Err(DatagenError::InvalidDimension { dimension });
    }
    // Written as a single positive predicate so NaN radii fail too.
    if !(r1 >= 0.0 && r1 <= r2) {
        return Err(DatagenError::InvalidRadiusRange { r1, r2 });
    }
    if num_points < 1 {
        return Err(DatagenError::InvalidPointCount { num_points });
    }
    Ok(())
}

/// Generate a random direction vector on the unit d-sphere.
///
/// Samples each component from N(0, 1) and normalizes to unit length.
/// A degenerate near-zero draw is redrawn from the same stream, so the
/// function is total for dimension >= 2 and deterministic per RNG state.
///
/// # Arguments
/// * `rng` - Random number generator
/// * `dimension` - Width of the direction vector
///
/// # Returns
/// Unit vector in R^dimension.
pub fn random_direction<R: Rng + ?Sized>(rng: &mut R, dimension: usize) -> Vec<f64> {
    let normal = StandardNormal;
    loop {
        let mut direction: Vec<f64> = (0..dimension).map(|_| normal.sample(rng)).collect();
        let norm = l2_norm(&direction);
        if norm > DEGENERATE_NORM {
            for x in direction.iter_mut() {
                *x /= norm;
            }
            return direction;
        }
    }
}

/// Draw a radius for one point.
///
/// For r1 == r2 the radius is the constant r1. Otherwise draws
/// u ~ U[r1^d, r2^d] and returns u^(1/d): the volume of a d-ball scales
/// as radius^d, so this makes the point density uniform across the shell
/// volume rather than across radius.
fn draw_radius<R: Rng + ?Sized>(rng: &mut R, dimension: usize, r1: f64, r2: f64) -> f64 {
    if r1 == r2 {
        return r1;
    }
    let d = dimension as f64;
    let lo = r1.powf(d);
    let hi = r2.powf(d);
    if lo < hi && hi.is_finite() {
        rng.gen_range(lo..hi).powf(1.0 / d)
    } else {
        // powf underflowed or overflowed the interval away (tiny radii or
        // very high dimension); fall back to radius-uniform draws.
        rng.gen_range(r1..r2)
    }
}

/// Draw one candidate point cloud on the boundary of a d-sphere.
///
/// # Arguments
/// * `rng` - Random number generator
/// * `dimension` - Euclidean dimension of the ambient space (>= 2)
/// * `num_points` - Number of points to generate (>= 1)
/// * `r1` - Inner radius bound (>= 0)
/// * `r2` - Outer radius bound (>= r1)
///
/// # Returns
/// A `num_points` x `dimension` cloud with every point's norm in
/// [r1, r2].
///
/// # Errors
/// - `DatagenError::InvalidDimension` if dimension <= 1
/// - `DatagenError::InvalidRadiusRange` if r1 > r2 or r1 < 0
/// - `DatagenError::InvalidPointCount` if num_points < 1
///
/// Validation happens before any sampling; on error no entropy is
/// consumed and no partial cloud exists.
pub fn sample_cloud<R: Rng + ?Sized>(
    rng: &mut R,
    dimension: usize,
    num_points: usize,
    r1: f64,
    r2: f64,
) -> Result<PointCloud> {
    validate_args(dimension, num_points, r1, r2)?;

    let mut cloud = PointCloud::with_capacity(dimension, num_points);
    for _ in 0..num_points {
        let mut point = random_direction(rng, dimension);
        let radius = draw_radius(rng, dimension, r1, r2);
        for x in point.iter_mut() {
            *x *= radius;
        }
        cloud.push(point);
    }
    Ok(cloud)
}
