//! NMEA-0183 sentence fragment processing
//!
//! Checksum computation, sentence-type extraction from a raw receiver
//! stream, and date/time field reformatting. Sentences are treated as
//! opaque strings; nothing here validates field contents against the
//! NMEA grammar.

pub mod fields;
pub mod sentence;

pub use fields::{coordinate_field, date_field_to_string, time_field_to_string};
pub use sentence::{checksum, extract_sentence, find_sentence, SentenceType};
