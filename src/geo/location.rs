//! Location identity and the validated location set.

use std::collections::HashMap;
use std::fmt;

use crate::error::{Error, Result};

/// Opaque location identifier.
///
/// Wraps the numeric id assigned by the upstream data preparation step
/// (e.g. a GeoNames gid). Only identity matters here; the value is
/// never interpreted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct LocationId(pub u64);

impl fmt::Display for LocationId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

impl From<u64> for LocationId {
    fn from(raw: u64) -> Self {
        LocationId(raw)
    }
}

/// A geographic point to visit.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Location {
    /// Unique identifier.
    pub id: LocationId,
    /// Latitude in degrees, [-90, 90].
    pub latitude: f64,
    /// Longitude in degrees, [-180, 180].
    pub longitude: f64,
}

impl Location {
    /// Creates a location.
    pub fn new(id: impl Into<LocationId>, latitude: f64, longitude: f64) -> Self {
        Self {
            id: id.into(),
            latitude,
            longitude,
        }
    }
}

/// An immutable, deduplicated set of locations.
///
/// Enumeration order is fixed at construction (insertion order) and
/// doubles as the dense index assignment used by the distance matrix
/// and the tour permutation: the k-th location in iteration order has
/// dense index k.
///
/// # Examples
///
/// ```
/// use geotour::geo::{Location, LocationSet};
///
/// let set = LocationSet::new(vec![
///     Location::new(1, 40.72, -74.00),
///     Location::new(2, 34.05, -118.25),
/// ])?;
/// assert_eq!(set.len(), 2);
/// assert_eq!(set.index_of(2.into()), Some(1));
/// # Ok::<(), geotour::Error>(())
/// ```
#[derive(Debug, Clone)]
pub struct LocationSet {
    locations: Vec<Location>,
    by_id: HashMap<LocationId, usize>,
}

impl LocationSet {
    /// Validates and builds the set.
    ///
    /// Rejects fewer than two entries, duplicate ids, and coordinates
    /// outside their valid ranges (NaN fails the range checks too).
    pub fn new(locations: Vec<Location>) -> Result<Self> {
        if locations.len() < 2 {
            return Err(Error::TooFewLocations(locations.len()));
        }

        let mut by_id = HashMap::with_capacity(locations.len());
        for (index, loc) in locations.iter().enumerate() {
            if !(-90.0..=90.0).contains(&loc.latitude) {
                return Err(Error::CoordinateOutOfRange {
                    id: loc.id,
                    axis: "latitude",
                    value: loc.latitude,
                });
            }
            if !(-180.0..=180.0).contains(&loc.longitude) {
                return Err(Error::CoordinateOutOfRange {
                    id: loc.id,
                    axis: "longitude",
                    value: loc.longitude,
                });
            }
            if by_id.insert(loc.id, index).is_some() {
                return Err(Error::DuplicateId(loc.id));
            }
        }

        Ok(Self { locations, by_id })
    }

    /// Number of locations. Always at least 2.
    pub fn len(&self) -> usize {
        self.locations.len()
    }

    /// Never true for a successfully constructed set.
    pub fn is_empty(&self) -> bool {
        self.locations.is_empty()
    }

    /// Locations in enumeration (dense index) order.
    pub fn iter(&self) -> impl Iterator<Item = &Location> {
        self.locations.iter()
    }

    /// Location at dense index `index`.
    ///
    /// # Panics
    ///
    /// Panics if `index >= len()`.
    pub fn location(&self, index: usize) -> &Location {
        &self.locations[index]
    }

    /// Dense index of `id`, if present.
    pub fn index_of(&self, id: LocationId) -> Option<usize> {
        self.by_id.get(&id).copied()
    }

    /// Whether `id` is part of the set.
    pub fn contains(&self, id: LocationId) -> bool {
        self.by_id.contains_key(&id)
    }
}
