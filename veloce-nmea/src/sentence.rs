//! Sentence lines and kind classification

use heapless::Vec;

/// Maximum sentence length in bytes, delimiter excluded
pub const SENTENCE_MAX_LEN: usize = 80;

/// Fixed prefixes of the three modeled sentence kinds
pub const GGA_PREFIX: &str = "$GPGGA";
pub const RMC_PREFIX: &str = "$GPRMC";
pub const VTG_PREFIX: &str = "$GPVTG";

/// One complete, delimiter-free sentence carved from the byte stream
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SentenceLine {
    bytes: Vec<u8, SENTENCE_MAX_LEN>,
}

impl SentenceLine {
    /// Build a line directly from text, for host tests and simulators.
    /// The firmware path always goes through [`crate::framer`].
    ///
    /// Returns `None` if `text` exceeds capacity or contains a delimiter.
    pub fn new(text: &str) -> Option<Self> {
        if text.bytes().any(|b| b == b'\r' || b == b'\n') {
            return None;
        }
        let mut bytes = Vec::new();
        bytes.extend_from_slice(text.as_bytes()).ok()?;
        Some(Self { bytes })
    }

    pub(crate) fn from_bytes(bytes: Vec<u8, SENTENCE_MAX_LEN>) -> Self {
        Self { bytes }
    }

    /// View the line as text. Non-ASCII garbage degrades to an empty
    /// (and therefore unclassifiable) line.
    pub fn as_str(&self) -> &str {
        core::str::from_utf8(&self.bytes).unwrap_or("")
    }

    pub fn as_bytes(&self) -> &[u8] {
        &self.bytes
    }

    pub fn len(&self) -> usize {
        self.bytes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }
}

/// Sentence kinds the pipeline recognizes
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum SentenceKind {
    /// Global positioning system fix data
    Gga,
    /// Recommended minimum specific GPS/Transit data
    Rmc,
    /// Track made good and ground speed
    Vtg,
    /// Anything whose prefix is none of the above
    Unknown,
}

impl SentenceKind {
    /// Name the parser responsible for a complete sentence line.
    ///
    /// Only the fixed six-character prefix is inspected; GGA is checked
    /// first, then RMC, then VTG. Lines shorter than the prefix are
    /// `Unknown`.
    pub fn classify(line: &str) -> Self {
        if line.starts_with(GGA_PREFIX) {
            SentenceKind::Gga
        } else if line.starts_with(RMC_PREFIX) {
            SentenceKind::Rmc
        } else if line.starts_with(VTG_PREFIX) {
            SentenceKind::Vtg
        } else {
            SentenceKind::Unknown
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_classify_known_kinds() {
        assert_eq!(
            SentenceKind::classify("$GPGGA,123519,4807.038,N"),
            SentenceKind::Gga
        );
        assert_eq!(
            SentenceKind::classify("$GPRMC,225446,A,4916.45,N"),
            SentenceKind::Rmc
        );
        assert_eq!(
            SentenceKind::classify("$GPVTG,054.7,T"),
            SentenceKind::Vtg
        );
    }

    #[test]
    fn test_classify_missing_dollar() {
        // A sentence that lost its `$` must not match any parser
        assert_eq!(
            SentenceKind::classify("GPVTG,054.7,T,034.4,M"),
            SentenceKind::Unknown
        );
    }

    #[test]
    fn test_classify_short_line() {
        assert_eq!(SentenceKind::classify(""), SentenceKind::Unknown);
        assert_eq!(SentenceKind::classify("$GPVT"), SentenceKind::Unknown);
    }

    #[test]
    fn test_classify_other_talker() {
        assert_eq!(
            SentenceKind::classify("$GPGSV,3,1,11,03,03,111,00"),
            SentenceKind::Unknown
        );
    }

    #[test]
    fn test_classify_prefix_only() {
        // Exactly six characters is enough to classify
        assert_eq!(SentenceKind::classify("$GPGGA"), SentenceKind::Gga);
    }

    #[test]
    fn test_line_rejects_delimiters() {
        assert!(SentenceLine::new("$GPVTG,054.7\r\n").is_none());
        assert!(SentenceLine::new("$GPVTG,054.7").is_some());
    }

    #[test]
    fn test_line_rejects_oversized() {
        let mut text = heapless::String::<128>::new();
        for _ in 0..(SENTENCE_MAX_LEN + 1) {
            text.push('A').unwrap();
        }
        assert!(SentenceLine::new(text.as_str()).is_none());
    }
}
