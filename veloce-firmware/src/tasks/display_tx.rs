//! Display task
//!
//! Owns the SSD1306 and repaints it whenever the decoder signals a fresh
//! ground-speed value. Display errors are logged and the task keeps
//! waiting; a dead screen must not stall the pipeline.

use defmt::*;
use embassy_rp::i2c::{Async, I2c};
use embassy_rp::peripherals::I2C0;

use veloce_core::speed;

use crate::channels::SPEED_UPDATE;
use crate::display::Ssd1306;

/// Row the speed value is drawn on
const SPEED_ROW: u8 = 3;
/// Column the speed value starts at
const SPEED_COL: u8 = 5;
/// Placeholder shown before the first fix
const NO_SPEED: &str = "---.-";

/// Display task - renders the latest ground speed
#[embassy_executor::task]
pub async fn display_task(i2c: I2c<'static, I2C0, Async>) {
    info!("Display task started");

    let mut display = Ssd1306::new(i2c);
    if let Err(e) = display.init().await {
        error!("Display init failed: {:?}", e);
    }

    display.clear();
    display.draw_text(SPEED_ROW, SPEED_COL, NO_SPEED);
    display.draw_text(SPEED_ROW + 2, 8, "km/h");
    if let Err(e) = display.flush().await {
        warn!("Display flush failed: {:?}", e);
    }

    loop {
        let text = SPEED_UPDATE.wait().await;

        // The record keeps speed as raw text; interpreting it numerically
        // is this side's job. Non-numeric fields never reach the screen.
        let kph = match speed::parse_kph(text.as_str()) {
            Some(v) => v,
            None => {
                debug!("Ignoring non-numeric speed field");
                continue;
            }
        };
        trace!("Speed update: {} km/h", kph);

        display.clear_row(SPEED_ROW);
        display.draw_text(SPEED_ROW, SPEED_COL, text.as_str());
        if let Err(e) = display.flush().await {
            warn!("Display flush failed: {:?}", e);
        }
    }
}
