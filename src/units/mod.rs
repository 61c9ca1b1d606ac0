//! Speed and distance unit conversions
//!
//! Simple constant-factor conversions used around the geodesy results,
//! with the factors shared from [`crate::core::constants`].

use crate::core::{FEET_PER_METER, KPH_PER_KNOT, MPH_PER_KNOT};

/// Statute miles per hour to knots
pub fn mph_to_knots(mph: f64) -> f64 {
    mph / MPH_PER_KNOT
}

/// Kilometers per hour to knots
pub fn kph_to_knots(kph: f64) -> f64 {
    kph / KPH_PER_KNOT
}

/// Knots to statute miles per hour
pub fn knots_to_mph(knots: f64) -> f64 {
    knots * MPH_PER_KNOT
}

/// Knots to kilometers per hour
pub fn knots_to_kph(knots: f64) -> f64 {
    knots * KPH_PER_KNOT
}

/// Nautical miles to statute miles
pub fn nautical_miles_to_statute_miles(nautical_miles: f64) -> f64 {
    nautical_miles * MPH_PER_KNOT
}

/// Nautical miles to kilometers
pub fn nautical_miles_to_km(nautical_miles: f64) -> f64 {
    nautical_miles * KPH_PER_KNOT
}

/// Kilometers to nautical miles
pub fn km_to_nautical_miles(kilometers: f64) -> f64 {
    kilometers / KPH_PER_KNOT
}

/// Meters to feet
pub fn meters_to_feet(meters: f64) -> f64 {
    meters * FEET_PER_METER
}

/// Feet to meters
pub fn feet_to_meters(feet: f64) -> f64 {
    feet / FEET_PER_METER
}
