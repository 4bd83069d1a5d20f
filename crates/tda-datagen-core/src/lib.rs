//! Synthetic d-sphere point clouds for benchmarking TDA pipelines.
//!
//! Generates point-cloud datasets that approximate the boundary of a
//! d-dimensional sphere (or a Cartesian product of such spheres) for
//! use as inputs to persistent-homology engines.
//!
//! # Architecture
//!
//! Three components, leaves first:
//! - [`sampler`]: draws one candidate cloud via Muller's method (radial
//!   projection of standard-normal vectors).
//! - [`optimizer`]: runs the sampler N times in parallel, scores each
//!   candidate by a nearest-neighbor statistic, keeps the winner.
//! - [`product`]: one optimized sphere per requested sub-dimension,
//!   concatenated column-wise.
//!
//! All randomness flows from explicit seeds: the same config always
//! produces the same cloud, and parallel trials draw from independent
//! ChaCha streams.
//!
//! # Example
//!
//! ```
//! use tda_datagen_core::{generate_sphere, SphereConfig};
//!
//! let config = SphereConfig {
//!     dimension: 3,
//!     num_points: 200,
//!     trials: 2,
//!     ..SphereConfig::default()
//! };
//! let cloud = generate_sphere(&config).unwrap();
//! assert_eq!(cloud.num_points(), 200);
//! assert_eq!(cloud.dimension(), 3);
//! ```

pub mod cloud;
pub mod config;
pub mod error;
pub mod neighbors;
pub mod optimizer;
pub mod product;
pub mod sampler;

// Re-exports for convenience
pub use cloud::PointCloud;
pub use config::{SphereConfig, SphereProductConfig};
pub use error::{DatagenError, Result};
pub use optimizer::{Selection, TrialResult};

use rand_chacha::ChaCha8Rng;
use tracing::debug;

/// Generate an optimized point cloud on the boundary of a d-sphere.
///
/// Runs `config.trials` independent sampler draws and returns the winner
/// under `config.selection`. The output has `config.num_points` rows of
/// `config.dimension` columns; every row's norm lies in
/// [`config.r1`, `config.r2`].
///
/// # Errors
/// Any validation failure from [`SphereConfig::validate`]; no partial
/// output is produced.
pub fn generate_sphere(config: &SphereConfig) -> Result<PointCloud> {
    config.validate()?;
    debug!(
        dimension = config.dimension,
        num_points = config.num_points,
        trials = config.trials,
        "generating d-sphere point cloud"
    );
    let winner = optimizer::optimize::<ChaCha8Rng, _>(
        |rng| {
            sampler::sample_cloud(
                rng,
                config.dimension,
                config.num_points,
                config.r1,
                config.r2,
            )
        },
        config.trials,
        config.selection,
        config.seed,
    )?;
    Ok(winner.cloud)
}

/// Generate a point cloud for the Cartesian product of spheres.
///
/// One independently optimized sphere per entry of `config.dimensions`,
/// concatenated column-wise in input order: `config.num_points` rows of
/// `sum(config.dimensions)` columns. See [`product::compose`] for the
/// positional-pairing caveat.
///
/// # Errors
/// [`DatagenError::DimensionListEmpty`] for an empty dimension list;
/// otherwise the underlying sub-sphere error annotated with its index.
pub fn generate_sphere_product(config: &SphereProductConfig) -> Result<PointCloud> {
    debug!(
        dimensions = ?config.dimensions,
        num_points = config.num_points,
        trials = config.trials,
        "generating sphere-product point cloud"
    );
    product::compose::<ChaCha8Rng>(
        &config.dimensions,
        config.num_points,
        config.r1,
        config.r2,
        config.trials,
        config.selection,
        config.seed,
    )
}
