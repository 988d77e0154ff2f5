//! Error types for geotour.

use crate::geo::LocationId;
use thiserror::Error;

/// Errors surfaced before an annealing run enters its loop.
///
/// The loop itself cannot fail: inputs are validated up front and the
/// engine performs no I/O.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum Error {
    /// A tour needs at least two distinct locations.
    #[error("location set has {0} entries, need at least 2")]
    TooFewLocations(usize),

    /// Two locations share the same id.
    #[error("duplicate location id {0}")]
    DuplicateId(LocationId),

    /// A coordinate is outside its valid range (or NaN).
    #[error("location {id}: {axis} {value} out of range")]
    CoordinateOutOfRange {
        /// Id of the offending location.
        id: LocationId,
        /// `"latitude"` or `"longitude"`.
        axis: &'static str,
        /// The rejected value.
        value: f64,
    },

    /// A configuration field has an invalid value.
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),

    /// The requested anchor id is not part of the tour.
    ///
    /// Unreachable when the tour is a permutation of the location set
    /// the anchor was drawn from; surfaced rather than ignored.
    #[error("anchor id {0} not present in tour")]
    AnchorNotFound(LocationId),
}

/// Result alias used across the crate.
pub type Result<T> = std::result::Result<T, Error>;
