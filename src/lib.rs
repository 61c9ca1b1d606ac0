//! Marine GPS navigation functions
//!
//! A stateless computation library for marine and light-aviation GPS
//! navigation: coordinate-notation conversion, great-circle distance and
//! initial bearing, compass-rose derivation, cross-track deviation from a
//! planned route, and NMEA-0183 sentence fragment processing (checksum,
//! sentence extraction, date/time field reformatting).
//!
//! Every function is pure and synchronous. Nothing is cached or shared
//! between calls, so the whole surface is safe to use from any number of
//! threads without synchronization. The library sits below a transport
//! layer: it consumes raw sentence strings and caller-owned
//! [`Waypoint`] values, performs no I/O and persists nothing.

pub mod angle;
pub mod coordinates;
pub mod core;
pub mod geodesy;
pub mod nmea;
pub mod units;

// Re-export the common surface
pub use crate::core::{CompassPoint, LatHemisphere, LonHemisphere, Turn, Waypoint};
pub use crate::coordinates::{decimal_to_nmea, latitude_to_nmea, longitude_to_nmea, nmea_to_decimal};
pub use crate::geodesy::{
    calculate_bearing, calculate_turn, cardinal_from_bearing, cross_track_error,
    cross_track_error_legacy, distance_between_points, latitude_cardinal, longitude_cardinal,
};
pub use crate::nmea::{checksum, extract_sentence, find_sentence, SentenceType};
