//! Latest-known decoded GPS state
//!
//! One record slot per sentence kind, each updated independently: an RMC
//! update never invalidates a stored VTG or GGA record. There is
//! deliberately no timestamping, no staleness tracking, and no
//! cross-sentence reconciliation - the display only ever wants the
//! freshest value seen.

use veloce_nmea::records::{
    parse_gga, parse_rmc, parse_vtg, GgaRecord, RmcRecord, VtgRecord, GGA_FIELD_COUNT,
    RMC_FIELD_COUNT, VTG_FIELD_COUNT,
};
use veloce_nmea::sentence::SentenceKind;

/// Why a line was discarded without touching the state
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum DecodeError {
    /// No parser claims the line's prefix
    UnrecognizedSentence,
    /// Classification and parser disagree about the prefix. Cannot happen
    /// through [`GpsState::apply`]; kept as a defensive check.
    KindMismatch,
}

/// Outcome of a successful [`GpsState::apply`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Update {
    /// Which record slot was overwritten
    pub kind: SentenceKind,
    /// How many grammar fields bound. Fewer than the kind's field count
    /// means the trailing fields kept their previous contents.
    pub fields_bound: usize,
}

impl Update {
    /// Whether every field of the kind's grammar bound
    pub fn is_complete(&self) -> bool {
        self.fields_bound == expected_fields(self.kind)
    }
}

fn expected_fields(kind: SentenceKind) -> usize {
    match kind {
        SentenceKind::Gga => GGA_FIELD_COUNT,
        SentenceKind::Rmc => RMC_FIELD_COUNT,
        SentenceKind::Vtg => VTG_FIELD_COUNT,
        SentenceKind::Unknown => 0,
    }
}

/// The latest successfully parsed record of each sentence kind.
///
/// Constructed once at startup with zeroed/empty fields and owned by the
/// decoder; it lives for the rest of the process.
#[derive(Debug, Clone, Default)]
pub struct GpsState {
    pub rmc: RmcRecord,
    pub vtg: VtgRecord,
    pub gga: GgaRecord,
}

impl GpsState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Classify `line`, run the matching parser, and overwrite that kind's
    /// record slot. Unknown or mismatched lines leave the state untouched.
    pub fn apply(&mut self, line: &str) -> Result<Update, DecodeError> {
        let kind = SentenceKind::classify(line);
        let bound = match kind {
            SentenceKind::Gga => parse_gga(line, &mut self.gga),
            SentenceKind::Rmc => parse_rmc(line, &mut self.rmc),
            SentenceKind::Vtg => parse_vtg(line, &mut self.vtg),
            SentenceKind::Unknown => return Err(DecodeError::UnrecognizedSentence),
        }
        .map_err(|_| DecodeError::KindMismatch)?;

        Ok(Update {
            kind,
            fields_bound: bound,
        })
    }

    /// Latest ground-speed text in kilometers per hour, exactly as received
    pub fn speed_kph(&self) -> &str {
        self.vtg.ground_speed_kph.as_str()
    }
}
