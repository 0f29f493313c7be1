//! Bounded hand-off queue between the UART producer and the decoder
//!
//! The producer runs in the interrupt-fed read path and must never block,
//! so enqueueing is strictly try-and-drop: when every slot is occupied the
//! newest line is discarded and the retained backlog keeps its FIFO order.
//! The consumer parks on `receive()` for as long as the stream stays quiet;
//! there is no timeout and nothing is ever retried.

use embassy_sync::blocking_mutex::raw::CriticalSectionRawMutex;
use embassy_sync::channel::Channel;

use veloce_nmea::SentenceLine;

/// Queue capacity in complete sentence lines
pub const SENTENCE_QUEUE_DEPTH: usize = 10;

/// Fixed-capacity channel of complete sentence lines. The channel owns
/// the slot storage; a line's ownership transfers on enqueue.
pub type SentenceQueue = Channel<CriticalSectionRawMutex, SentenceLine, SENTENCE_QUEUE_DEPTH>;

/// Non-blocking enqueue.
///
/// Returns `false` when the queue was full and the line was dropped. The
/// producer gets no other feedback and must not retry.
pub fn offer(queue: &SentenceQueue, line: SentenceLine) -> bool {
    queue.try_send(line).is_ok()
}

#[cfg(test)]
mod tests {
    use super::*;
    use core::fmt::Write as _;

    fn line(n: usize) -> SentenceLine {
        let mut text = heapless::String::<32>::new();
        write!(text, "$GPVTG,{:03}.0,T", n).unwrap();
        SentenceLine::new(text.as_str()).unwrap()
    }

    #[test]
    fn test_drop_newest_when_full() {
        let queue = SentenceQueue::new();

        let mut accepted = 0;
        let mut dropped = 0;
        for i in 0..15 {
            if offer(&queue, line(i)) {
                accepted += 1;
            } else {
                dropped += 1;
            }
        }
        assert_eq!(accepted, SENTENCE_QUEUE_DEPTH);
        assert_eq!(dropped, 5);

        // The retained lines are the oldest ten, in arrival order
        for i in 0..SENTENCE_QUEUE_DEPTH {
            let got = queue.try_receive().unwrap();
            assert_eq!(got.as_str(), line(i).as_str());
        }
        assert!(queue.try_receive().is_err());
    }

    #[test]
    fn test_fifo_order() {
        let queue = SentenceQueue::new();
        for i in 0..3 {
            assert!(offer(&queue, line(i)));
        }
        assert_eq!(queue.try_receive().unwrap().as_str(), line(0).as_str());
        assert_eq!(queue.try_receive().unwrap().as_str(), line(1).as_str());
        assert_eq!(queue.try_receive().unwrap().as_str(), line(2).as_str());
    }

    #[test]
    fn test_slots_free_up_after_drain() {
        let queue = SentenceQueue::new();
        for i in 0..SENTENCE_QUEUE_DEPTH {
            assert!(offer(&queue, line(i)));
        }
        assert!(!offer(&queue, line(99)));

        let _ = queue.try_receive().unwrap();
        assert!(offer(&queue, line(100)));

        // Drain the rest; the late line comes out last
        let mut last = queue.try_receive().unwrap();
        while let Ok(next) = queue.try_receive() {
            last = next;
        }
        assert_eq!(last.as_str(), line(100).as_str());
    }
}
