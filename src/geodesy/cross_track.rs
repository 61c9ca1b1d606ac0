//! Cross-track deviation from a planned route leg
//!
//! Two entry points are exposed on purpose. The legacy variant reproduces
//! the historical formula bit-for-bit, including its two known quirks:
//! the bearing difference is a plain absolute integer difference with no
//! circular wraparound near 0/360, and that degree-valued difference is
//! fed straight into the radians-domain sine without unit conversion. The
//! unit mismatch is very likely an unnoticed defect in the original
//! formula rather than an intentional simplification; it is preserved here
//! because downstream consumers compare against its exact output. The
//! corrected variant applies the radian conversion and is the one to use
//! for an actual geodesic deviation.

use crate::angle::deg_to_rad;
use crate::core::Waypoint;
use crate::geodesy::bearing::calculate_bearing;
use crate::geodesy::distance::distance_between_points;

/// Cross-track error against the leg `from -> to`, legacy formula
///
/// Distance in nautical miles from the current position to the route
/// line, computed as `|sin(angle) * d|` where `angle` is the absolute
/// integer-degree difference between the route bearing and the bearing to
/// the current position, and `d` is the distance from `from` to the
/// current position.
///
/// Bit-compatible with the historical implementation: `angle` is passed
/// to the sine as a raw degree magnitude in radian-expecting units, and
/// the difference ignores 0/360 wraparound. See the module docs; use
/// [`cross_track_error`] for the unit-corrected result.
pub fn cross_track_error_legacy(
    from: &Waypoint,
    to: &Waypoint,
    current_lat: f64,
    current_lon: f64,
) -> f64 {
    let (angle, distance) = leg_geometry(from, to, current_lat, current_lon);

    ((angle as f64).sin() * distance).abs()
}

/// Cross-track error against the leg `from -> to`, unit-corrected
///
/// Same pipeline as [`cross_track_error_legacy`], but the integer-degree
/// bearing difference is converted to radians before the sine. The
/// absolute (non-circular) bearing difference is still used, matching the
/// legacy geometry; only the unit mismatch is fixed.
pub fn cross_track_error(
    from: &Waypoint,
    to: &Waypoint,
    current_lat: f64,
    current_lon: f64,
) -> f64 {
    let (angle, distance) = leg_geometry(from, to, current_lat, current_lon);

    (deg_to_rad(angle as f64).sin() * distance).abs()
}

/// Shared geometry: absolute bearing difference (whole degrees) and
/// distance from `from` to the current position (nautical miles)
fn leg_geometry(from: &Waypoint, to: &Waypoint, current_lat: f64, current_lon: f64) -> (i32, f64) {
    let distance_from_leg_start =
        distance_between_points(from.latitude, from.longitude, current_lat, current_lon);

    let route_bearing =
        calculate_bearing(from.latitude, from.longitude, to.latitude, to.longitude);
    let bearing_to_current =
        calculate_bearing(from.latitude, from.longitude, current_lat, current_lon);

    let angle = (route_bearing - bearing_to_current).abs();

    (angle, distance_from_leg_start)
}
