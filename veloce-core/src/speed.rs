//! Speed field interpretation for the display side
//!
//! Records keep speed as the exact text the receiver sent; turning it
//! into a number is a separate, fallible step that belongs to the display
//! side, not the parser.

use heapless::String;

use veloce_nmea::FIELD_MAX_LEN;

/// Owned copy of a speed field, sized like any sentence field
pub type SpeedText = String<FIELD_MAX_LEN>;

/// Copy a speed field into an owned buffer for hand-off to the display
pub fn to_text(field: &str) -> SpeedText {
    let mut text = SpeedText::new();
    for c in field.chars().take(FIELD_MAX_LEN) {
        let _ = text.push(c);
    }
    text
}

/// Interpret a ground-speed field such as `"010.2"` as km/h.
///
/// Returns `None` for empty or non-numeric text - typically a record
/// whose speed field never bound.
pub fn parse_kph(text: &str) -> Option<f32> {
    if text.is_empty() {
        return None;
    }
    text.parse().ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_kph() {
        assert_eq!(parse_kph("010.2"), Some(10.2));
        assert_eq!(parse_kph("0.0"), Some(0.0));
    }

    #[test]
    fn test_parse_kph_rejects_junk() {
        assert_eq!(parse_kph(""), None);
        assert_eq!(parse_kph("K"), None);
        assert_eq!(parse_kph("1 2"), None);
    }

    #[test]
    fn test_to_text_is_bounded() {
        let text = to_text("010.2");
        assert_eq!(text.as_str(), "010.2");
        assert_eq!(to_text("01234567890123").as_str(), "0123456789");
    }
}
