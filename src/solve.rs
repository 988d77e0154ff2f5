//! End-to-end tour construction: matrix build, annealing, anchoring.

use crate::anneal::{AnnealConfig, AnnealResult, AnnealRunner};
use crate::error::{Error, Result};
use crate::geo::{DistanceMatrix, LocationId, LocationSet};
use crate::tour::rotate_to_anchor;

/// A finished tour over a location set.
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TourSolution {
    /// Visit order, one entry per location, closing back to the first.
    /// Starts at the anchor when one was requested.
    pub route: Vec<LocationId>,

    /// Total cycle length in miles, wrap-around edge included.
    pub length: f64,

    /// The underlying annealing run, for inspection.
    pub result: AnnealResult,
}

/// Computes a closed tour over `locations`.
///
/// Builds the distance matrix, anneals from a shuffled permutation, and
/// rotates the final cycle so `anchor` (when given) is first. Rotation
/// changes the starting index only, never the edge set, so the reported
/// length is unaffected.
///
/// The anchor is resolved against `locations` before the run starts;
/// an unknown anchor fails fast with [`Error::AnchorNotFound`].
///
/// # Examples
///
/// ```
/// use geotour::anneal::AnnealConfig;
/// use geotour::geo::{Location, LocationSet};
///
/// let set = LocationSet::new(vec![
///     Location::new(1, 40.72, -74.00),
///     Location::new(2, 34.05, -118.25),
///     Location::new(3, 41.88, -87.63),
///     Location::new(4, 29.77, -95.38),
/// ])?;
/// let config = AnnealConfig::default().with_seed(42);
///
/// let solution = geotour::solve(&set, &config, Some(1.into()))?;
/// assert_eq!(solution.route[0], 1.into());
/// assert_eq!(solution.route.len(), 4);
/// # Ok::<(), geotour::Error>(())
/// ```
pub fn solve(
    locations: &LocationSet,
    config: &AnnealConfig,
    anchor: Option<LocationId>,
) -> Result<TourSolution> {
    if let Some(anchor) = anchor {
        if !locations.contains(anchor) {
            return Err(Error::AnchorNotFound(anchor));
        }
    }

    #[cfg(feature = "parallel")]
    let matrix = DistanceMatrix::build_parallel(locations);
    #[cfg(not(feature = "parallel"))]
    let matrix = DistanceMatrix::build(locations);

    let result = AnnealRunner::run(&matrix, config)?;

    let mut route: Vec<LocationId> = result
        .order
        .iter()
        .map(|&index| locations.location(index).id)
        .collect();
    if let Some(anchor) = anchor {
        route = rotate_to_anchor(&route, anchor)?;
    }

    Ok(TourSolution {
        route,
        length: result.energy,
        result,
    })
}
