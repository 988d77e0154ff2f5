//! Anchor rotation of a finished tour.

use crate::error::{Error, Result};
use crate::geo::LocationId;

/// Rotates the cyclic `route` so `anchor` sits at position 0.
///
/// The cycle itself is unchanged: same edges, same total length, only
/// the starting index moves. Errors with [`Error::AnchorNotFound`] when
/// `anchor` is absent; for a route that is a permutation of the set the
/// anchor came from, that indicates a caller-side contract violation.
pub fn rotate_to_anchor(route: &[LocationId], anchor: LocationId) -> Result<Vec<LocationId>> {
    let pos = route
        .iter()
        .position(|&id| id == anchor)
        .ok_or(Error::AnchorNotFound(anchor))?;

    let mut rotated = Vec::with_capacity(route.len());
    rotated.extend_from_slice(&route[pos..]);
    rotated.extend_from_slice(&route[..pos]);
    Ok(rotated)
}
