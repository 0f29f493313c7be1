//! Embassy async tasks
//!
//! Each task runs independently and communicates via channels/signals.

pub mod decoder;
pub mod display_tx;
pub mod gps_rx;

pub use decoder::decoder_task;
pub use display_tx::display_task;
pub use gps_rx::gps_rx_task;
