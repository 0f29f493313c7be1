//! GPS UART receive task
//!
//! The producer side of the pipeline: feeds raw bytes through the framer
//! and hands completed lines to the decoder. Nothing in this task may
//! block - a full queue means the line goes on the floor.

use defmt::*;
use embassy_rp::uart::BufferedUartRx;
use embedded_io_async::Read;

use veloce_core::queue;
use veloce_nmea::SentenceFramer;

use crate::channels::SENTENCE_QUEUE;

/// Buffer size for UART receive
const RX_CHUNK_SIZE: usize = 64;

/// GPS RX task - frames the NMEA byte stream into sentence lines
#[embassy_executor::task]
pub async fn gps_rx_task(mut rx: BufferedUartRx) {
    info!("GPS RX task started");

    let mut framer = SentenceFramer::new();
    let mut buf = [0u8; RX_CHUNK_SIZE];

    loop {
        // Read available bytes
        match rx.read(&mut buf).await {
            Ok(n) if n > 0 => {
                trace!("RX: {} bytes", n);

                for &byte in &buf[..n] {
                    if let Some(line) = framer.feed(byte) {
                        // Drop-on-full: the decoder gets no say, we get no retry
                        if !queue::offer(&SENTENCE_QUEUE, line) {
                            warn!("Sentence queue full, dropping line");
                        }
                    }
                }
            }
            Ok(_) => {
                // No bytes read, continue
            }
            Err(e) => {
                warn!("UART read error: {:?}", e);
            }
        }
    }
}
