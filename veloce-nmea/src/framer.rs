//! Byte-stream framing into sentence lines

use heapless::Vec;

use crate::sentence::{SentenceLine, SENTENCE_MAX_LEN};

/// Carves delimiter-terminated sentence lines out of a raw byte stream.
///
/// The framer never reports an error: oversized lines come out truncated
/// at capacity, and stray delimiters between sentences are swallowed.
/// This keeps the UART read path total - any byte sequence is acceptable
/// input.
#[derive(Debug, Clone)]
pub struct SentenceFramer {
    buf: Vec<u8, SENTENCE_MAX_LEN>,
}

impl Default for SentenceFramer {
    fn default() -> Self {
        Self::new()
    }
}

impl SentenceFramer {
    /// Create a new framer with an empty accumulation buffer
    pub const fn new() -> Self {
        Self { buf: Vec::new() }
    }

    /// Consume one byte, returning a completed line when `byte` ends one.
    ///
    /// CR or LF with a non-empty buffer emits the accumulated line and
    /// resets; with an empty buffer it is ignored, so CRLF pairs and blank
    /// lines produce nothing. A data byte arriving while the buffer is
    /// full is dropped - the in-progress line keeps framing and comes out
    /// truncated at the first delimiter.
    pub fn feed(&mut self, byte: u8) -> Option<SentenceLine> {
        match byte {
            b'\r' | b'\n' => {
                if self.buf.is_empty() {
                    None
                } else {
                    Some(SentenceLine::from_bytes(core::mem::take(&mut self.buf)))
                }
            }
            _ => {
                // Full buffer: the byte is silently dropped
                let _ = self.buf.push(byte);
                None
            }
        }
    }
}
