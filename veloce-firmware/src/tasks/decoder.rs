//! Sentence decoder task
//!
//! The consumer side: waits on the queue, classifies and parses each
//! line, and pushes the ground-speed text to the display after every
//! successful VTG decode. Bad lines are logged and forgotten; nothing
//! here ever stops the loop.

use defmt::*;

use veloce_core::{speed, DecodeError, GpsState};
use veloce_nmea::SentenceKind;

use crate::channels::{SENTENCE_QUEUE, SPEED_UPDATE};

/// Decoder task - drains the sentence queue into the decoded state
#[embassy_executor::task]
pub async fn decoder_task() {
    info!("Decoder task started");

    // The decoded state is owned here and lives as long as the task
    let mut state = GpsState::new();

    loop {
        let line = SENTENCE_QUEUE.receive().await;

        match state.apply(line.as_str()) {
            Ok(update) => {
                if !update.is_complete() {
                    warn!(
                        "Partial {:?} bind: {} fields",
                        update.kind, update.fields_bound
                    );
                }
                if update.kind == SentenceKind::Vtg {
                    SPEED_UPDATE.signal(speed::to_text(state.speed_kph()));
                }
            }
            Err(DecodeError::UnrecognizedSentence) => {
                debug!("Discarding unrecognized sentence");
            }
            Err(DecodeError::KindMismatch) => {
                // Classification and dispatch disagree; should be unreachable
                warn!("Classifier/parser prefix mismatch");
            }
        }
    }
}
