//! Board-agnostic decode pipeline for the Veloce speedometer
//!
//! Everything between the UART byte stream and the display driver that
//! does not touch hardware lives here:
//!
//! - Bounded hand-off queue between the UART producer and the decoder
//! - Latest-known decoded state, one record slot per sentence kind
//! - Speed field interpretation for the display side

#![no_std]
#![deny(unsafe_code)]

pub mod queue;
pub mod speed;
pub mod state;

pub use queue::{SentenceQueue, SENTENCE_QUEUE_DEPTH};
pub use state::{DecodeError, GpsState, Update};
