//! Angle normalization and degree/radian conversion
//!
//! Leaf helpers used by every geodesy function. Angles at rest are plain
//! `f64` degrees and are not kept normalized; [`normalize`] is applied
//! only at the output boundary of bearing computation.

use std::f64::consts::PI;

/// Normalize an angle in degrees into `[0, 360)`
///
/// Adds 360 while the value is negative, then reduces modulo 360.
/// Idempotent: an already-normalized value passes through unchanged.
pub fn normalize(degrees: f64) -> f64 {
    let mut degs = degrees;

    while degs < 0.0 {
        degs += 360.0;
    }

    degs % 360.0
}

/// Convert degrees to radians
pub fn deg_to_rad(degrees: f64) -> f64 {
    degrees * (PI / 180.0)
}

/// Convert radians to degrees
pub fn rad_to_deg(radians: f64) -> f64 {
    radians * (180.0 / PI)
}

/// Shortest angular separation between two normalized headings, in degrees
///
/// Returns `min(|a - b|, 360 - |a - b|)`, always in `[0, 180]`. Inputs are
/// assumed to already lie in `[0, 360)`; run them through [`normalize`]
/// first otherwise. This is the circular-distance helper offered alongside
/// the legacy absolute-difference comparisons in
/// [`crate::geodesy::calculate_turn`] and the cross-track functions, which
/// deliberately do not use it.
pub fn circular_difference(a: f64, b: f64) -> f64 {
    let diff = (a - b).abs();
    diff.min(360.0 - diff)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_negative_values() {
        assert_eq!(normalize(-90.0), 270.0);
        assert_eq!(normalize(-725.0), 355.0);
        assert_eq!(normalize(-360.0), 0.0);
    }

    #[test]
    fn test_normalize_reduces_large_positive() {
        assert_eq!(normalize(720.0), 0.0);
        assert_eq!(normalize(365.0), 5.0);
    }

    #[test]
    fn test_normalize_idempotent() {
        for &d in &[-1234.5, -90.0, 0.0, 359.99, 1000.25] {
            let once = normalize(d);
            assert_eq!(normalize(once), once);
            assert!((0.0..360.0).contains(&once));
        }
    }

    #[test]
    fn test_degree_radian_round_trip() {
        assert_eq!(deg_to_rad(180.0), PI);
        assert_eq!(rad_to_deg(PI), 180.0);
        assert!((rad_to_deg(deg_to_rad(57.3)) - 57.3).abs() < 1e-12);
    }

    #[test]
    fn test_circular_difference_wraps() {
        assert_eq!(circular_difference(350.0, 10.0), 20.0);
        assert_eq!(circular_difference(10.0, 350.0), 20.0);
        assert_eq!(circular_difference(90.0, 270.0), 180.0);
        assert_eq!(circular_difference(45.0, 45.0), 0.0);
    }
}
