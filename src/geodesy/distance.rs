//! Great-circle distance between two points

use crate::angle::deg_to_rad;
use crate::core::{EARTH_RADIUS_KM, KM_PER_STATUTE_MILE, NM_PER_STATUTE_MILE};

/// Great-circle distance between two points, in nautical miles
///
/// Haversine formula on a spherical Earth of radius
/// [`EARTH_RADIUS_KM`]. The longitude delta is taken as
/// `from_lon - to_lon`; the sign is immaterial because only its squared
/// sine feeds the formula. The kilometer result is converted to nautical
/// miles through statute miles.
///
/// Inputs are accepted as given: there is no bounds validation and no
/// wraparound handling for coordinates outside the usual
/// latitude/longitude ranges.
pub fn distance_between_points(from_lat: f64, from_lon: f64, to_lat: f64, to_lon: f64) -> f64 {
    let d_lat = deg_to_rad(to_lat - from_lat);
    let d_lon = deg_to_rad(from_lon - to_lon);

    let a = (d_lat / 2.0).sin() * (d_lat / 2.0).sin()
        + deg_to_rad(from_lat).cos() * deg_to_rad(to_lat).cos()
            * (d_lon / 2.0).sin() * (d_lon / 2.0).sin();
    let c = 2.0 * a.sqrt().atan2((1.0 - a).sqrt());

    let kilometers = EARTH_RADIUS_KM * c;

    (kilometers / KM_PER_STATUTE_MILE) * NM_PER_STATUTE_MILE
}
