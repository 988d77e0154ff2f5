//! Geographic primitives.
//!
//! A [`LocationSet`] is the validated input to the whole pipeline: a
//! deduplicated collection of latitude/longitude points with a stable
//! enumeration order. [`great_circle`] is the pure distance model, and
//! [`DistanceMatrix`] caches it densely for every pair so the annealing
//! loop never touches trigonometry.

mod distance;
mod location;
mod matrix;

pub use distance::{great_circle, EARTH_RADIUS_MILES};
pub use location::{Location, LocationId, LocationSet};
pub use matrix::DistanceMatrix;
