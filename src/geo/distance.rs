//! Great-circle distance on a spherical Earth.

use super::Location;

/// Earth radius in miles.
pub const EARTH_RADIUS_MILES: f64 = 3963.0;

/// Great-circle distance between two locations, in miles.
///
/// Spherical law of cosines:
/// `acos(sin φ₁ sin φ₂ + cos φ₁ cos φ₂ cos Δλ) · R`.
///
/// The `acos` argument is clamped to [-1, 1]; floating-point overshoot
/// at tiny angular separations would otherwise leave the domain.
/// Identical coordinates short-circuit to exactly 0.
///
/// # Examples
///
/// ```
/// use geotour::geo::{great_circle, Location};
///
/// let new_york = Location::new(1, 40.72, -74.00);
/// let los_angeles = Location::new(2, 34.05, -118.25);
///
/// let miles = great_circle(&new_york, &los_angeles);
/// assert!(miles > 2400.0 && miles < 2500.0);
/// ```
pub fn great_circle(a: &Location, b: &Location) -> f64 {
    if a.latitude == b.latitude && a.longitude == b.longitude {
        return 0.0;
    }

    let lat1 = a.latitude.to_radians();
    let lat2 = b.latitude.to_radians();
    let dlon = (a.longitude - b.longitude).to_radians();

    let cos_angle = lat1.sin() * lat2.sin() + lat1.cos() * lat2.cos() * dlon.cos();
    cos_angle.clamp(-1.0, 1.0).acos() * EARTH_RADIUS_MILES
}
