//! Inter-task communication channels
//!
//! Defines the static channels used for communication between Embassy
//! tasks. Uses embassy-sync primitives for safe async communication.

use embassy_sync::blocking_mutex::raw::CriticalSectionRawMutex;
use embassy_sync::signal::Signal;

use veloce_core::speed::SpeedText;
use veloce_core::SentenceQueue;

/// Complete sentence lines, UART producer to decoder. Capacity and the
/// drop-on-full policy live in `veloce_core::queue`.
pub static SENTENCE_QUEUE: SentenceQueue = SentenceQueue::new();

/// Freshest ground-speed-kph text after each successful VTG decode.
/// Latest-value semantics: an unread update is overwritten, never queued.
pub static SPEED_UPDATE: Signal<CriticalSectionRawMutex, SpeedText> = Signal::new();
