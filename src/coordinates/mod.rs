//! Decimal-degree ⇄ NMEA coordinate notation conversion
//!
//! NMEA encodes latitude/longitude as `ddmm.mmmm`: whole degrees times
//! 100 plus decimal minutes. The magnitude-only conversions here drop the
//! sign, matching the wire format, where hemisphere travels in a separate
//! field; the paired [`latitude_to_nmea`]/[`longitude_to_nmea`] helpers
//! model that sign explicitly.

use crate::core::{LatHemisphere, LonHemisphere};
use crate::geodesy::{latitude_cardinal, longitude_cardinal};

/// Convert a decimal-degree coordinate to NMEA `ddmm.mmmm` magnitude
///
/// Degrees are truncated toward zero, the remainder becomes decimal
/// minutes, and the composed value is returned as an absolute magnitude.
/// Sign information is dropped; track the hemisphere separately via
/// [`latitude_to_nmea`]/[`longitude_to_nmea`] or the cardinal functions
/// in [`crate::geodesy`].
pub fn decimal_to_nmea(position: f64) -> f64 {
    let degrees = position as i32;
    let minutes = (position - degrees as f64) * 60.0;
    let result = (degrees * 100) as f64 + minutes;

    result.abs()
}

/// Convert an NMEA `ddmm.mmmm` magnitude back to decimal degrees
///
/// Inverse of [`decimal_to_nmea`]; the round trip is exact to within
/// floating tolerance for non-negative input only, because the forward
/// conversion discards the sign.
pub fn nmea_to_decimal(value: f64) -> f64 {
    let degrees = value as i32 / 100;
    let minutes = value - (degrees * 100) as f64;

    degrees as f64 + minutes / 60.0
}

/// NMEA magnitude plus hemisphere for a signed latitude
pub fn latitude_to_nmea(latitude: f64) -> (f64, LatHemisphere) {
    (decimal_to_nmea(latitude), latitude_cardinal(latitude))
}

/// NMEA magnitude plus hemisphere for a signed longitude
pub fn longitude_to_nmea(longitude: f64) -> (f64, LonHemisphere) {
    (decimal_to_nmea(longitude), longitude_cardinal(longitude))
}
