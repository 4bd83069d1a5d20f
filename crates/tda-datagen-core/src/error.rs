//! Error types for tda-datagen-core.
//!
//! Every failure is a caller misconfiguration detected by upfront
//! validation, before any sampling begins. Nothing here is transient, so
//! nothing is retried and no default is substituted silently.

use thiserror::Error;

/// Crate-wide result alias.
pub type Result<T> = std::result::Result<T, DatagenError>;

/// Errors from point-cloud generation.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum DatagenError {
    /// Requested sphere dimension is degenerate for Muller's method.
    ///
    /// A 0- or 1-sphere has no meaningful boundary to project onto;
    /// generation requires dimension >= 2.
    #[error("invalid dimension {dimension}: a d-sphere needs dimension >= 2")]
    InvalidDimension {
        /// The rejected dimension
        dimension: usize,
    },

    /// Inner radius exceeds outer radius, or the inner radius is negative.
    #[error("invalid radius range [{r1}, {r2}]: need 0 <= r1 <= r2")]
    InvalidRadiusRange {
        /// Inner radius bound
        r1: f64,
        /// Outer radius bound
        r2: f64,
    },

    /// A cloud must contain at least one point.
    #[error("invalid point count {num_points}: at least one point is required")]
    InvalidPointCount {
        /// The rejected point count
        num_points: usize,
    },

    /// The optimizer needs at least one trial to select from.
    #[error("invalid trial count {trials}: at least one trial is required")]
    InvalidTrialCount {
        /// The rejected trial count
        trials: usize,
    },

    /// Selection criterion string is not one of the recognized values.
    #[error("unrecognized selection criterion {0:?}: expected \"min\", \"mean\", or \"stdev\"")]
    InvalidSelection(String),

    /// The product composer was called with no sub-dimensions.
    #[error("sphere product requires at least one sub-dimension")]
    DimensionListEmpty,

    /// A sub-sphere of a product failed; carries the offending entry's
    /// position in the dimension list.
    #[error("sub-sphere {index} (dimension {dimension}): {source}")]
    SubSphere {
        /// Position of the failing entry in the dimension list
        index: usize,
        /// The failing entry's dimension
        dimension: usize,
        /// The underlying sampler/optimizer error
        #[source]
        source: Box<DatagenError>,
    },
}
