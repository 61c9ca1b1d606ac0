//! Reformatting of raw NMEA date/time/coordinate fields
//!
//! These helpers do no validation: field widths are fixed by the NMEA
//! grammar and screening malformed fragments is the caller's job. Inputs
//! shorter than the expected width are programming errors and panic.

/// Reformat an NMEA `hhmmss` time field as `hh:mm:ss`
///
/// # Panics
///
/// Panics if the field is shorter than six bytes or a separator index
/// falls inside a multi-byte character.
pub fn time_field_to_string(nmea_time: &str) -> String {
    format!(
        "{}:{}:{}",
        &nmea_time[0..2],
        &nmea_time[2..4],
        &nmea_time[4..6]
    )
}

/// Reformat an NMEA `ddmmyy` date field as `dd/mm/20yy`
///
/// The century is fixed at 20, as in the historical implementation.
///
/// # Panics
///
/// Panics if the field is shorter than six bytes or a separator index
/// falls inside a multi-byte character.
pub fn date_field_to_string(nmea_date: &str) -> String {
    format!(
        "{}/{}/20{}",
        &nmea_date[0..2],
        &nmea_date[2..4],
        &nmea_date[4..6]
    )
}

/// Render a coordinate magnitude as a zero-padded `0000.0000` field
///
/// Display formatting for NMEA coordinate magnitudes produced by
/// [`crate::coordinates::decimal_to_nmea`]: at least four integer digits
/// and exactly four decimal places.
pub fn coordinate_field(value: f64) -> String {
    format!("{value:09.4}")
}
