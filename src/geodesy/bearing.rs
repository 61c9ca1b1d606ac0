//! Initial bearing between two points and turn direction

use crate::angle::{deg_to_rad, normalize, rad_to_deg};
use crate::core::Turn;

/// Initial great-circle bearing from point A toward point B
///
/// Returns whole degrees clockwise from true north, always in `[0, 360)`.
/// The floating-point bearing is normalized and then truncated toward
/// zero, not rounded; callers needing sub-degree precision must not use
/// this integer result.
pub fn calculate_bearing(lat_a: f64, lon_a: f64, lat_b: f64, lon_b: f64) -> i32 {
    let lat1 = deg_to_rad(lat_a);
    let lat2 = deg_to_rad(lat_b);

    let d_lon = deg_to_rad(lon_b - lon_a);

    let y = d_lon.sin() * lat2.cos();
    let x = lat1.cos() * lat2.sin() - lat1.sin() * lat2.cos() * d_lon.cos();

    normalize(rad_to_deg(y.atan2(x))) as i32
}

/// Turn direction from a current heading toward a required bearing
///
/// `Left` if `heading < bearing`, `Right` if `heading > bearing`,
/// `Straight` if equal. The comparison is a plain integer ordering with no
/// 0/360 wraparound handling: heading 359 toward bearing 1 yields `Right`
/// even though the 2-degree change across north would read as `Left`
/// anywhere else on the dial. That is the documented legacy behavior,
/// kept literally; see [`crate::angle::circular_difference`] for a
/// wrap-aware separation.
pub fn calculate_turn(heading: i32, bearing: i32) -> Turn {
    if heading < bearing {
        Turn::Left
    } else if heading > bearing {
        Turn::Right
    } else {
        Turn::Straight
    }
}
