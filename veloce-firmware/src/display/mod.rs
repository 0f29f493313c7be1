//! SSD1306 display sink
//!
//! Thin I/O wrapper on the output side of the pipeline; nothing in here
//! feeds back into decoding.

mod font;
mod ssd1306;

pub use ssd1306::Ssd1306;
