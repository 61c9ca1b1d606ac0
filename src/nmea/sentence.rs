//! NMEA checksum and sentence-type extraction

use serde::{Deserialize, Serialize};
use std::fmt;

/// Sentence types this library knows how to pick out of a raw stream
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SentenceType {
    /// Recommended minimum position, velocity and time
    Gprmc,
    /// Global positioning fix data
    Gpgga,
    /// DOP and active satellites
    Gpgsa,
}

impl SentenceType {
    /// Five-character talker-plus-type code, e.g. `"GPRMC"`
    pub fn code(self) -> &'static str {
        match self {
            SentenceType::Gprmc => "GPRMC",
            SentenceType::Gpgga => "GPGGA",
            SentenceType::Gpgsa => "GPGSA",
        }
    }

    /// Literal sentinel emitted when no sentence of this type is present
    pub fn missing_sentinel(self) -> &'static str {
        match self {
            SentenceType::Gprmc => "[NO_GPRMC_SENTENCE_PRESENT]",
            SentenceType::Gpgga => "[NO_GPGGA_SENTENCE_PRESENT]",
            SentenceType::Gpgsa => "[NO_GPGSA_SENTENCE_PRESENT]",
        }
    }
}

impl fmt::Display for SentenceType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

/// Two-hex-digit uppercase NMEA checksum of a sentence
///
/// Running XOR over every byte of the sentence, skipping `$` and `*`.
/// Two literal conventions of the historical implementation are kept
/// bit-exactly, because these checksums are compared against
/// device-emitted values:
///
/// - the accumulator is seeded with the first contributing byte rather
///   than 0, XOR applying from the second contributing byte onward;
/// - `*` is skipped but iteration does not stop there, so any trailing
///   characters after it are folded into the result.
///
/// Callers wanting the checksum of the payload alone must pass the
/// sentence ending at `*`.
pub fn checksum(sentence: &str) -> String {
    let mut checksum: u8 = 0;

    for byte in sentence.bytes() {
        match byte {
            b'$' | b'*' => continue,
            _ => {
                if checksum == 0 {
                    checksum = byte;
                } else {
                    checksum ^= byte;
                }
            }
        }
    }

    format!("{checksum:02X}")
}

/// Extract the first sentence of the given type from a raw receiver stream
///
/// The stream is split on `$` and fragments are scanned in order; the
/// first fragment beginning with the five-character type code wins
/// (case-sensitive prefix test, no checksum validation) and is returned
/// re-prefixed with `$GP`, exactly as the historical implementation
/// emitted it. When no fragment matches, the literal sentinel
/// `"[NO_<TYPE>_SENTENCE_PRESENT]"` is returned; [`find_sentence`] offers
/// the structured alternative.
pub fn extract_sentence(gps_data: &str, sentence_type: SentenceType) -> String {
    match find_sentence(gps_data, sentence_type) {
        Some(sentence) => sentence,
        None => sentence_type.missing_sentinel().to_string(),
    }
}

/// Structured variant of [`extract_sentence`]
///
/// Identical matching and identical bytes for a found sentence, but
/// absence is reported as `None` instead of the sentinel string.
pub fn find_sentence(gps_data: &str, sentence_type: SentenceType) -> Option<String> {
    gps_data
        .split('$')
        .find(|fragment| fragment.starts_with(sentence_type.code()))
        .map(|fragment| format!("$GP{fragment}"))
}

#[cfg(test)]
mod tests {
    use super::*;

    const STREAM: &str = "$GPRMC,123519,A,4807.038,N,01131.000,E,022.4,084.4,230394,003.1,W*6A\r\n\
                          $GPGGA,123519,4807.038,N,01131.000,E,1,08,0.9,545.4,M,46.9,M,,*47\r\n";

    #[test]
    fn test_checksum_reference_vector() {
        // Canonical GPRMC example; XOR over the payload between $ and *.
        let sentence = "$GPRMC,123519,A,4807.038,N,01131.000,E,022.4,084.4,230394,003.1,W*";
        assert_eq!(checksum(sentence), "6A");
    }

    #[test]
    fn test_checksum_gga_vector() {
        let sentence = "$GPGGA,123519,4807.038,N,01131.000,E,1,08,0.9,545.4,M,46.9,M,,*";
        assert_eq!(checksum(sentence), "47");
    }

    #[test]
    fn test_checksum_folds_in_trailing_characters() {
        // Iteration does not stop at '*': an appended checksum changes
        // the result. 0x6A ^ '6' ^ 'A' = 0x1D.
        let sentence = "$GPRMC,123519,A,4807.038,N,01131.000,E,022.4,084.4,230394,003.1,W*6A";
        assert_eq!(checksum(sentence), "1D");
    }

    #[test]
    fn test_checksum_pads_to_two_digits() {
        // "HH" xors to zero.
        assert_eq!(checksum("HH"), "00");
        assert_eq!(checksum("$K*N"), "05"); // 'K' ^ 'N'
    }

    #[test]
    fn test_extract_first_match_wins() {
        let doubled = format!("{STREAM}$GPGGA,000000,0000.000,N,00000.000,E,0,00,,,M,,M,,*00\r\n");
        let extracted = extract_sentence(&doubled, SentenceType::Gpgga);
        assert!(extracted.starts_with("$GPGPGGA,123519"));
    }

    #[test]
    fn test_extract_reprefixes_with_gp() {
        // Splitting on '$' leaves the fragment starting at the type code;
        // the historical re-prefix is the literal "$GP".
        let extracted = extract_sentence(STREAM, SentenceType::Gprmc);
        assert_eq!(
            extracted.trim_end(),
            "$GPGPRMC,123519,A,4807.038,N,01131.000,E,022.4,084.4,230394,003.1,W*6A"
        );
    }

    #[test]
    fn test_extract_missing_sentinel() {
        let rmc_only = "$GPRMC,123519,A,4807.038,N,01131.000,E,022.4,084.4,230394,003.1,W*6A";
        assert_eq!(
            extract_sentence(rmc_only, SentenceType::Gpgga),
            "[NO_GPGGA_SENTENCE_PRESENT]"
        );
        assert_eq!(
            extract_sentence("", SentenceType::Gpgsa),
            "[NO_GPGSA_SENTENCE_PRESENT]"
        );
    }

    #[test]
    fn test_find_sentence_structured_absence() {
        assert_eq!(find_sentence(STREAM, SentenceType::Gpgsa), None);
        let found = find_sentence(STREAM, SentenceType::Gprmc);
        assert_eq!(
            found.as_deref().map(str::trim_end),
            Some("$GPGPRMC,123519,A,4807.038,N,01131.000,E,022.4,084.4,230394,003.1,W*6A")
        );
    }

    #[test]
    fn test_matching_is_case_sensitive() {
        let lower = "$gprmc,123519,A*00";
        assert_eq!(find_sentence(lower, SentenceType::Gprmc), None);
    }
}
