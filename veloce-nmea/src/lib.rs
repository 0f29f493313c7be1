//! NMEA 0183 ingestion for the Veloce speedometer
//!
//! This crate covers the text side of the GPS link: carving discrete
//! sentence lines out of the raw UART byte stream, naming each line's kind
//! from its fixed prefix, and binding the comma-delimited fields of the
//! three kinds the speedometer models.
//!
//! # Sentence format
//!
//! ```text
//! $GPVTG,054.7,T,034.4,M,005.5,N,010.2,K*48<CR><LF>
//! └──┬──┘└──────────────────┬─────────────┘└┬┘
//!  prefix     comma-delimited fields      checksum
//! ```
//!
//! Checksums are neither validated nor stripped; the final field's binding
//! rule absorbs them (see [`records`]).

#![no_std]
#![deny(unsafe_code)]

pub mod framer;
pub mod records;
pub mod sentence;

pub use framer::SentenceFramer;
pub use records::{
    parse_gga, parse_rmc, parse_vtg, GgaRecord, ParseError, RmcRecord, SentenceField, VtgRecord,
    FIELD_MAX_LEN,
};
pub use sentence::{SentenceKind, SentenceLine, SENTENCE_MAX_LEN};
