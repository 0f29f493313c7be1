//! Typed records and field binding for the three parsed sentence kinds
//!
//! Binding is lenient, scanf style: fields bind left to right, the first
//! field that is missing, empty, or unconvertible stops the scan, and
//! everything after it keeps whatever the record already held. A parse
//! succeeds whenever the prefix matches, however few fields bound;
//! callers that care can compare the returned count against the kind's
//! field count.

use heapless::String;

use crate::sentence::{GGA_PREFIX, RMC_PREFIX, VTG_PREFIX};

/// Maximum bytes kept per text field
pub const FIELD_MAX_LEN: usize = 10;

/// Bounded text field; longer input is truncated on copy
pub type SentenceField = String<FIELD_MAX_LEN>;

/// Positional field counts per grammar
pub const RMC_FIELD_COUNT: usize = 11;
pub const VTG_FIELD_COUNT: usize = 8;
pub const GGA_FIELD_COUNT: usize = 12;

/// Errors that can occur while binding a sentence's fields
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ParseError {
    /// The line's prefix does not belong to the requested parser
    WrongSentenceKind,
}

/// Recommended minimum specific GPS/Transit data (`$GPRMC`)
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RmcRecord {
    /// UTC time, `hhmmss[.ss]`
    pub time: SentenceField,
    /// `A` = active, `V` = void
    pub status: char,
    /// `ddmm.mmmm`
    pub latitude: SentenceField,
    /// `N` or `S`
    pub latitude_direction: char,
    /// `dddmm.mmmm`
    pub longitude: SentenceField,
    /// `E` or `W`
    pub longitude_direction: char,
    /// Speed over ground in knots
    pub speed: SentenceField,
    /// Course over ground in degrees
    pub course: SentenceField,
    /// `ddmmyy`
    pub date: SentenceField,
    /// Magnetic variation in degrees
    pub magnetic_variation: SentenceField,
    /// `E` or `W`
    pub magnetic_variation_direction: char,
}

/// Track made good and ground speed (`$GPVTG`)
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct VtgRecord {
    /// True track made good, degrees
    pub true_track: SentenceField,
    /// Fixed `T`
    pub true_track_indicator: char,
    /// Magnetic track made good, degrees
    pub magnetic_track: SentenceField,
    /// Fixed `M`
    pub magnetic_track_indicator: char,
    /// Ground speed in knots
    pub ground_speed_knots: SentenceField,
    /// Fixed `N`
    pub ground_speed_knots_unit: char,
    /// Ground speed in kilometers per hour
    pub ground_speed_kph: SentenceField,
    /// Fixed `K`
    pub ground_speed_kph_unit: char,
}

/// Global positioning system fix data (`$GPGGA`)
#[derive(Debug, Clone, Default, PartialEq)]
pub struct GgaRecord {
    /// UTC time, `hhmmss[.ss]`
    pub time: SentenceField,
    /// `ddmm.mmmm`
    pub latitude: SentenceField,
    /// `N` or `S`
    pub latitude_direction: char,
    /// `dddmm.mmmm`
    pub longitude: SentenceField,
    /// `E` or `W`
    pub longitude_direction: char,
    /// 0 = invalid, 1 = GPS fix, 2 = DGPS fix
    pub fix_quality: u8,
    /// Number of satellites in use
    pub num_satellites: u8,
    /// Horizontal dilution of precision
    pub hdop: f32,
    /// Altitude above mean sea level, meters
    pub altitude: f32,
    /// Fixed `M`
    pub altitude_unit: char,
    /// Height of geoid above the WGS84 ellipsoid, meters
    pub geoid_height: f32,
    /// Fixed `M`
    pub geoid_height_unit: char,
}

/// Sequential field binder with stop-on-first-failure semantics
struct Fields<'a> {
    iter: core::str::Split<'a, char>,
    bound: usize,
    stopped: bool,
}

impl<'a> Fields<'a> {
    fn new(rest: &'a str) -> Self {
        Self {
            iter: rest.split(','),
            bound: 0,
            stopped: false,
        }
    }

    fn next_token(&mut self) -> Option<&'a str> {
        if self.stopped {
            return None;
        }
        match self.iter.next() {
            Some(tok) if !tok.is_empty() => Some(tok),
            _ => {
                self.stopped = true;
                None
            }
        }
    }

    fn text(&mut self, slot: &mut SentenceField) {
        if let Some(tok) = self.next_token() {
            slot.clear();
            for c in tok.chars().take(FIELD_MAX_LEN) {
                let _ = slot.push(c);
            }
            self.bound += 1;
        }
    }

    /// A one-character field at the end of a sentence arrives glued to the
    /// checksum (e.g. `K*48`); the first character is the field, the rest
    /// is ignored.
    fn chr(&mut self, slot: &mut char) {
        if let Some(tok) = self.next_token() {
            if let Some(c) = tok.chars().next() {
                *slot = c;
                self.bound += 1;
            }
        }
    }

    fn int(&mut self, slot: &mut u8) {
        match self.next_token().and_then(scan_int) {
            Some(v) => {
                *slot = v;
                self.bound += 1;
            }
            None => self.stopped = true,
        }
    }

    fn float(&mut self, slot: &mut f32) {
        match self.next_token().and_then(scan_float) {
            Some(v) => {
                *slot = v;
                self.bound += 1;
            }
            None => self.stopped = true,
        }
    }
}

/// Longest-prefix integer scan: `"08"` binds 8, `"1abc"` binds 1,
/// `"abc"` fails.
fn scan_int(tok: &str) -> Option<u8> {
    let digits = tok
        .as_bytes()
        .iter()
        .take_while(|b| b.is_ascii_digit())
        .count();
    if digits == 0 {
        return None;
    }
    tok[..digits].parse().ok()
}

/// Longest-prefix float scan: `"46.9"` binds 46.9, `"545.4M"` binds 545.4
fn scan_float(tok: &str) -> Option<f32> {
    let bytes = tok.as_bytes();
    let mut end = 0;
    if matches!(bytes.first(), Some(&(b'+' | b'-'))) {
        end = 1;
    }
    let mut seen_digit = false;
    let mut seen_dot = false;
    while end < bytes.len() {
        match bytes[end] {
            b'0'..=b'9' => {
                seen_digit = true;
                end += 1;
            }
            b'.' if !seen_dot => {
                seen_dot = true;
                end += 1;
            }
            _ => break,
        }
    }
    if !seen_digit {
        return None;
    }
    tok[..end].parse().ok()
}

/// Strip a sentence prefix and position the cursor on the field list.
///
/// The prefix must be followed by a comma for any field to bind, but a
/// bare prefix still parses (to zero fields).
fn field_list<'a>(line: &'a str, prefix: &str) -> Result<Option<&'a str>, ParseError> {
    let rest = line
        .strip_prefix(prefix)
        .ok_or(ParseError::WrongSentenceKind)?;
    Ok(rest.strip_prefix(','))
}

/// Bind the fields of a `$GPRMC` sentence into `data`.
///
/// Returns the number of fields bound; fields past the first failure are
/// left untouched.
pub fn parse_rmc(line: &str, data: &mut RmcRecord) -> Result<usize, ParseError> {
    let Some(rest) = field_list(line, RMC_PREFIX)? else {
        return Ok(0);
    };
    let mut fields = Fields::new(rest);
    fields.text(&mut data.time);
    fields.chr(&mut data.status);
    fields.text(&mut data.latitude);
    fields.chr(&mut data.latitude_direction);
    fields.text(&mut data.longitude);
    fields.chr(&mut data.longitude_direction);
    fields.text(&mut data.speed);
    fields.text(&mut data.course);
    fields.text(&mut data.date);
    fields.text(&mut data.magnetic_variation);
    fields.chr(&mut data.magnetic_variation_direction);
    Ok(fields.bound)
}

/// Bind the fields of a `$GPVTG` sentence into `data`.
pub fn parse_vtg(line: &str, data: &mut VtgRecord) -> Result<usize, ParseError> {
    let Some(rest) = field_list(line, VTG_PREFIX)? else {
        return Ok(0);
    };
    let mut fields = Fields::new(rest);
    fields.text(&mut data.true_track);
    fields.chr(&mut data.true_track_indicator);
    fields.text(&mut data.magnetic_track);
    fields.chr(&mut data.magnetic_track_indicator);
    fields.text(&mut data.ground_speed_knots);
    fields.chr(&mut data.ground_speed_knots_unit);
    fields.text(&mut data.ground_speed_kph);
    fields.chr(&mut data.ground_speed_kph_unit);
    Ok(fields.bound)
}

/// Bind the fields of a `$GPGGA` sentence into `data`.
pub fn parse_gga(line: &str, data: &mut GgaRecord) -> Result<usize, ParseError> {
    let Some(rest) = field_list(line, GGA_PREFIX)? else {
        return Ok(0);
    };
    let mut fields = Fields::new(rest);
    fields.text(&mut data.time);
    fields.text(&mut data.latitude);
    fields.chr(&mut data.latitude_direction);
    fields.text(&mut data.longitude);
    fields.chr(&mut data.longitude_direction);
    fields.int(&mut data.fix_quality);
    fields.int(&mut data.num_satellites);
    fields.float(&mut data.hdop);
    fields.float(&mut data.altitude);
    fields.chr(&mut data.altitude_unit);
    fields.float(&mut data.geoid_height);
    fields.chr(&mut data.geoid_height_unit);
    Ok(fields.bound)
}

#[cfg(test)]
mod tests {
    use super::*;
    use core::fmt::Write as _;

    const VTG_EXAMPLE: &str = "$GPVTG,054.7,T,034.4,M,005.5,N,010.2,K*48";
    const RMC_EXAMPLE: &str = "$GPRMC,225446,A,4916.45,N,12311.12,W,000.5,054.7,191194,020.3,E*68";
    const GGA_EXAMPLE: &str = "$GPGGA,123519,4807.038,N,01131.000,E,1,08,0.9,545.4,M,46.9,M,,*47";

    #[test]
    fn test_parse_vtg_example() {
        let mut rec = VtgRecord::default();
        let bound = parse_vtg(VTG_EXAMPLE, &mut rec).unwrap();
        assert_eq!(bound, VTG_FIELD_COUNT);
        assert_eq!(rec.true_track.as_str(), "054.7");
        assert_eq!(rec.true_track_indicator, 'T');
        assert_eq!(rec.magnetic_track.as_str(), "034.4");
        assert_eq!(rec.magnetic_track_indicator, 'M');
        assert_eq!(rec.ground_speed_knots.as_str(), "005.5");
        assert_eq!(rec.ground_speed_knots_unit, 'N');
        assert_eq!(rec.ground_speed_kph.as_str(), "010.2");
        // Final char field absorbs the checksum: `K*48` binds as 'K'
        assert_eq!(rec.ground_speed_kph_unit, 'K');
    }

    #[test]
    fn test_parse_rmc_example() {
        let mut rec = RmcRecord::default();
        let bound = parse_rmc(RMC_EXAMPLE, &mut rec).unwrap();
        assert_eq!(bound, RMC_FIELD_COUNT);
        assert_eq!(rec.time.as_str(), "225446");
        assert_eq!(rec.status, 'A');
        assert_eq!(rec.latitude.as_str(), "4916.45");
        assert_eq!(rec.latitude_direction, 'N');
        assert_eq!(rec.longitude.as_str(), "12311.12");
        assert_eq!(rec.longitude_direction, 'W');
        assert_eq!(rec.speed.as_str(), "000.5");
        assert_eq!(rec.course.as_str(), "054.7");
        assert_eq!(rec.date.as_str(), "191194");
        assert_eq!(rec.magnetic_variation.as_str(), "020.3");
        assert_eq!(rec.magnetic_variation_direction, 'E');
    }

    #[test]
    fn test_parse_gga_example() {
        let mut rec = GgaRecord::default();
        let bound = parse_gga(GGA_EXAMPLE, &mut rec).unwrap();
        assert_eq!(bound, GGA_FIELD_COUNT);
        assert_eq!(rec.time.as_str(), "123519");
        assert_eq!(rec.latitude.as_str(), "4807.038");
        assert_eq!(rec.latitude_direction, 'N');
        assert_eq!(rec.longitude.as_str(), "01131.000");
        assert_eq!(rec.longitude_direction, 'E');
        assert_eq!(rec.fix_quality, 1);
        assert_eq!(rec.num_satellites, 8);
        assert_eq!(rec.hdop, 0.9);
        assert_eq!(rec.altitude, 545.4);
        assert_eq!(rec.altitude_unit, 'M');
        assert_eq!(rec.geoid_height, 46.9);
        assert_eq!(rec.geoid_height_unit, 'M');
    }

    #[test]
    fn test_wrong_kind_rejected() {
        let mut rec = VtgRecord::default();
        assert_eq!(
            parse_vtg(RMC_EXAMPLE, &mut rec),
            Err(ParseError::WrongSentenceKind)
        );
        // Nothing bound on rejection
        assert_eq!(rec, VtgRecord::default());
    }

    #[test]
    fn test_bare_prefix_parses_to_zero_fields() {
        let mut rec = VtgRecord::default();
        assert_eq!(parse_vtg("$GPVTG", &mut rec), Ok(0));
        assert_eq!(rec, VtgRecord::default());
    }

    #[test]
    fn test_empty_field_stops_binding() {
        let mut rec = VtgRecord::default();
        parse_vtg(VTG_EXAMPLE, &mut rec).unwrap();

        // Same sentence with the magnetic track blanked out: binding stops
        // there and the trailing fields keep their previous values.
        let bound = parse_vtg("$GPVTG,120.0,T,,M,020.0,N,037.0,K*4F", &mut rec).unwrap();
        assert_eq!(bound, 2);
        assert_eq!(rec.true_track.as_str(), "120.0");
        assert_eq!(rec.magnetic_track.as_str(), "034.4");
        assert_eq!(rec.ground_speed_kph.as_str(), "010.2");
    }

    #[test]
    fn test_missing_trailing_fields_accepted() {
        let mut rec = RmcRecord::default();
        let bound = parse_rmc("$GPRMC,225446,A,4916.45,N", &mut rec).unwrap();
        assert_eq!(bound, 4);
        assert_eq!(rec.latitude_direction, 'N');
        assert_eq!(rec.longitude.as_str(), "");
    }

    #[test]
    fn test_unconvertible_numeric_stops_binding() {
        let mut rec = GgaRecord::default();
        let bound = parse_gga("$GPGGA,123519,4807.038,N,01131.000,E,x,08", &mut rec).unwrap();
        assert_eq!(bound, 5);
        assert_eq!(rec.fix_quality, 0);
        assert_eq!(rec.num_satellites, 0);
    }

    #[test]
    fn test_overlong_text_field_truncated() {
        let mut rec = RmcRecord::default();
        parse_rmc("$GPRMC,0123456789012345,A", &mut rec).unwrap();
        assert_eq!(rec.time.as_str(), "0123456789");
        assert_eq!(rec.status, 'A');
    }

    #[test]
    fn test_scan_int() {
        assert_eq!(scan_int("08"), Some(8));
        assert_eq!(scan_int("1x"), Some(1));
        assert_eq!(scan_int("x"), None);
        assert_eq!(scan_int("999"), None); // overflows the counter width
    }

    #[test]
    fn test_scan_float() {
        assert_eq!(scan_float("46.9"), Some(46.9));
        assert_eq!(scan_float("545.4M"), Some(545.4));
        assert_eq!(scan_float("-3.5"), Some(-3.5));
        assert_eq!(scan_float("."), None);
        assert_eq!(scan_float("M"), None);
    }

    #[test]
    fn test_vtg_field_roundtrip() {
        let mut rec = VtgRecord::default();
        parse_vtg(VTG_EXAMPLE, &mut rec).unwrap();

        let mut out = heapless::String::<82>::new();
        write!(
            out,
            "$GPVTG,{},{},{},{},{},{},{},{}",
            rec.true_track.as_str(),
            rec.true_track_indicator,
            rec.magnetic_track.as_str(),
            rec.magnetic_track_indicator,
            rec.ground_speed_knots.as_str(),
            rec.ground_speed_knots_unit,
            rec.ground_speed_kph.as_str(),
            rec.ground_speed_kph_unit,
        )
        .unwrap();

        // Field values survive a comma-join; only the checksum is gone
        assert_eq!(out.as_str(), &VTG_EXAMPLE[..VTG_EXAMPLE.len() - 3]);
    }

    #[test]
    fn test_rmc_field_roundtrip() {
        let mut rec = RmcRecord::default();
        parse_rmc(RMC_EXAMPLE, &mut rec).unwrap();

        let mut out = heapless::String::<82>::new();
        write!(
            out,
            "$GPRMC,{},{},{},{},{},{},{},{},{},{},{}",
            rec.time.as_str(),
            rec.status,
            rec.latitude.as_str(),
            rec.latitude_direction,
            rec.longitude.as_str(),
            rec.longitude_direction,
            rec.speed.as_str(),
            rec.course.as_str(),
            rec.date.as_str(),
            rec.magnetic_variation.as_str(),
            rec.magnetic_variation_direction,
        )
        .unwrap();

        assert_eq!(out.as_str(), &RMC_EXAMPLE[..RMC_EXAMPLE.len() - 3]);
    }
}
