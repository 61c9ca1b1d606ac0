//! Compass-rose and hemisphere cardinal derivation

use crate::core::{CompassPoint, LatHemisphere, LonHemisphere};

/// Map a whole-degree bearing onto the 16-point compass rose
///
/// Exact multiples of 45 return the principal and intercardinal points
/// (0/360 → N, 45 → NE, 90 → E, ...); the half-open integer ranges
/// between them return the secondary-intercardinal labels. Input is
/// clamped to the documented `0..=360` domain; anything outside it must
/// be run through [`crate::angle::normalize`] first.
pub fn cardinal_from_bearing(bearing: i32) -> CompassPoint {
    match bearing.clamp(0, 360) {
        0 | 360 => CompassPoint::N,
        1..=44 => CompassPoint::Nne,
        45 => CompassPoint::Ne,
        46..=89 => CompassPoint::Ene,
        90 => CompassPoint::E,
        91..=134 => CompassPoint::Ese,
        135 => CompassPoint::Se,
        136..=179 => CompassPoint::Sse,
        180 => CompassPoint::S,
        181..=224 => CompassPoint::Ssw,
        225 => CompassPoint::Sw,
        226..=269 => CompassPoint::Wsw,
        270 => CompassPoint::W,
        271..=314 => CompassPoint::Wnw,
        315 => CompassPoint::Nw,
        _ => CompassPoint::Nnw, // 316..=359
    }
}

/// Hemisphere letter source for a latitude: `North` if positive, else `South`
///
/// Zero maps to `South`; the strict `> 0` comparison has no equator case.
pub fn latitude_cardinal(latitude: f64) -> LatHemisphere {
    if latitude > 0.0 {
        LatHemisphere::North
    } else {
        LatHemisphere::South
    }
}

/// Hemisphere letter source for a longitude: `East` if positive, else `West`
///
/// Zero maps to `West`; the strict `> 0` comparison has no
/// prime-meridian case.
pub fn longitude_cardinal(longitude: f64) -> LonHemisphere {
    if longitude > 0.0 {
        LonHemisphere::East
    } else {
        LonHemisphere::West
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_principal_points() {
        assert_eq!(cardinal_from_bearing(0), CompassPoint::N);
        assert_eq!(cardinal_from_bearing(90), CompassPoint::E);
        assert_eq!(cardinal_from_bearing(180), CompassPoint::S);
        assert_eq!(cardinal_from_bearing(270), CompassPoint::W);
        assert_eq!(cardinal_from_bearing(360), CompassPoint::N);
    }

    #[test]
    fn test_intercardinal_points() {
        assert_eq!(cardinal_from_bearing(45), CompassPoint::Ne);
        assert_eq!(cardinal_from_bearing(135), CompassPoint::Se);
        assert_eq!(cardinal_from_bearing(225), CompassPoint::Sw);
        assert_eq!(cardinal_from_bearing(315), CompassPoint::Nw);
    }

    #[test]
    fn test_secondary_ranges() {
        assert_eq!(cardinal_from_bearing(1), CompassPoint::Nne);
        assert_eq!(cardinal_from_bearing(44), CompassPoint::Nne);
        assert_eq!(cardinal_from_bearing(46), CompassPoint::Ene);
        assert_eq!(cardinal_from_bearing(134), CompassPoint::Ese);
        assert_eq!(cardinal_from_bearing(181), CompassPoint::Ssw);
        assert_eq!(cardinal_from_bearing(269), CompassPoint::Wsw);
        assert_eq!(cardinal_from_bearing(314), CompassPoint::Wnw);
        assert_eq!(cardinal_from_bearing(316), CompassPoint::Nnw);
        assert_eq!(cardinal_from_bearing(359), CompassPoint::Nnw);
    }

    #[test]
    fn test_out_of_domain_clamps() {
        assert_eq!(cardinal_from_bearing(-5), CompassPoint::N);
        assert_eq!(cardinal_from_bearing(500), CompassPoint::N);
    }

    #[test]
    fn test_latitude_hemisphere() {
        assert_eq!(latitude_cardinal(51.5), LatHemisphere::North);
        assert_eq!(latitude_cardinal(-33.9), LatHemisphere::South);
        // Zero has no dedicated case and falls south.
        assert_eq!(latitude_cardinal(0.0), LatHemisphere::South);
    }

    #[test]
    fn test_longitude_hemisphere() {
        assert_eq!(longitude_cardinal(2.35), LonHemisphere::East);
        assert_eq!(longitude_cardinal(-0.13), LonHemisphere::West);
        // Zero has no dedicated case and falls west.
        assert_eq!(longitude_cardinal(0.0), LonHemisphere::West);
    }
}
