//! Value types shared across the navigation modules

use serde::{Deserialize, Serialize};
use std::fmt;

/// A named route point in decimal degrees
///
/// Latitude and longitude are plain decimal degrees, not NMEA-encoded.
/// This is an immutable value object owned by the caller for the duration
/// of a route computation; the library never stores one.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Waypoint {
    pub identifier: String,
    pub altitude: f64,
    pub latitude: f64,
    pub longitude: f64,
}

impl Waypoint {
    pub fn new(identifier: impl Into<String>, altitude: f64, latitude: f64, longitude: f64) -> Self {
        Self {
            identifier: identifier.into(),
            altitude,
            latitude,
            longitude,
        }
    }
}

/// Turn direction from a current heading toward a required bearing
///
/// `Straight` is returned when heading and bearing are equal. The
/// comparison behind this type does not account for 0/360 wraparound;
/// see [`crate::geodesy::calculate_turn`] for the exact rule and its
/// documented limitation near north.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Turn {
    Left,
    Right,
    Straight,
}

impl Turn {
    /// Single-letter rendering: `L`, `R`, or `None` for no turn
    pub fn as_char(self) -> Option<char> {
        match self {
            Turn::Left => Some('L'),
            Turn::Right => Some('R'),
            Turn::Straight => None,
        }
    }
}

/// One of the 16 compass-rose points
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum CompassPoint {
    N,
    Nne,
    Ne,
    Ene,
    E,
    Ese,
    Se,
    Sse,
    S,
    Ssw,
    Sw,
    Wsw,
    W,
    Wnw,
    Nw,
    Nnw,
}

impl CompassPoint {
    /// Conventional uppercase label, e.g. `"NNE"`
    pub fn as_str(self) -> &'static str {
        match self {
            CompassPoint::N => "N",
            CompassPoint::Nne => "NNE",
            CompassPoint::Ne => "NE",
            CompassPoint::Ene => "ENE",
            CompassPoint::E => "E",
            CompassPoint::Ese => "ESE",
            CompassPoint::Se => "SE",
            CompassPoint::Sse => "SSE",
            CompassPoint::S => "S",
            CompassPoint::Ssw => "SSW",
            CompassPoint::Sw => "SW",
            CompassPoint::Wsw => "WSW",
            CompassPoint::W => "W",
            CompassPoint::Wnw => "WNW",
            CompassPoint::Nw => "NW",
            CompassPoint::Nnw => "NNW",
        }
    }
}

impl fmt::Display for CompassPoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Hemisphere of a latitude value
///
/// Zero latitude maps to `South` (the underlying comparison is strictly
/// `> 0`; there is no dedicated equator case).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum LatHemisphere {
    North,
    South,
}

impl LatHemisphere {
    /// NMEA hemisphere letter, `N` or `S`
    pub fn as_char(self) -> char {
        match self {
            LatHemisphere::North => 'N',
            LatHemisphere::South => 'S',
        }
    }
}

impl fmt::Display for LatHemisphere {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_char())
    }
}

/// Hemisphere of a longitude value
///
/// Zero longitude maps to `West` (strict `> 0` comparison, no dedicated
/// prime-meridian case).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum LonHemisphere {
    East,
    West,
}

impl LonHemisphere {
    /// NMEA hemisphere letter, `E` or `W`
    pub fn as_char(self) -> char {
        match self {
            LonHemisphere::East => 'E',
            LonHemisphere::West => 'W',
        }
    }
}

impl fmt::Display for LonHemisphere {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_char())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_waypoint_serde_round_trip() {
        let waypoint = Waypoint::new("WPT01", 120.0, 51.5074, -0.1278);
        let json = serde_json::to_string(&waypoint).unwrap();
        let back: Waypoint = serde_json::from_str(&json).unwrap();
        assert_eq!(back, waypoint);
    }

    #[test]
    fn test_turn_char_rendering() {
        assert_eq!(Turn::Left.as_char(), Some('L'));
        assert_eq!(Turn::Right.as_char(), Some('R'));
        assert_eq!(Turn::Straight.as_char(), None);
    }

    #[test]
    fn test_compass_point_labels() {
        assert_eq!(CompassPoint::N.as_str(), "N");
        assert_eq!(CompassPoint::Ssw.to_string(), "SSW");
        assert_eq!(CompassPoint::Wnw.to_string(), "WNW");
    }

    #[test]
    fn test_hemisphere_letters() {
        assert_eq!(LatHemisphere::North.as_char(), 'N');
        assert_eq!(LatHemisphere::South.to_string(), "S");
        assert_eq!(LonHemisphere::East.as_char(), 'E');
        assert_eq!(LonHemisphere::West.to_string(), "W");
    }
}
