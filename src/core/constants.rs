//! Physical constants and unit-conversion factors

/// Mean Earth radius (kilometers), spherical model
pub const EARTH_RADIUS_KM: f64 = 6371.0;

/// Mean Earth diameter (kilometers), spherical model
pub const EARTH_DIAMETER_KM: f64 = 12742.0;

/// Kilometers per statute mile
pub const KM_PER_STATUTE_MILE: f64 = 1.609344;

/// Nautical miles per statute mile
pub const NM_PER_STATUTE_MILE: f64 = 0.8684;

/// Statute miles per hour per knot
pub const MPH_PER_KNOT: f64 = 1.15077945;

/// Kilometers per hour per knot (one nautical mile per hour)
pub const KPH_PER_KNOT: f64 = 1.85200;

/// Feet per meter
pub const FEET_PER_METER: f64 = 3.2808399;
