//! Veloce - GPS Speedometer Firmware
//!
//! Main firmware binary for RP2040-based speed displays. A GPS module
//! streams NMEA sentences into UART0; the pipeline frames them into
//! lines, queues them across the producer/consumer boundary, decodes the
//! three modeled sentence kinds, and keeps the freshest ground speed on
//! an SSD1306 OLED.

#![no_std]
#![no_main]

use defmt::*;
use embassy_executor::Spawner;
use embassy_rp::bind_interrupts;
use embassy_rp::i2c::{self, I2c};
use embassy_rp::peripherals::{I2C0, UART0};
use embassy_rp::uart::{BufferedInterruptHandler, Config as UartConfig, Uart};
use static_cell::StaticCell;
use {defmt_rtt as _, panic_probe as _};

mod channels;
mod display;
mod tasks;

bind_interrupts!(struct Irqs {
    UART0_IRQ => BufferedInterruptHandler<UART0>;
    I2C0_IRQ => i2c::InterruptHandler<I2C0>;
});

/// GPS modules ship talking NMEA at 9600 baud
const GPS_BAUD: u32 = 9600;

// Static cells for UART buffers (must live forever)
static TX_BUF: StaticCell<[u8; 32]> = StaticCell::new();
static RX_BUF: StaticCell<[u8; 256]> = StaticCell::new();

/// Main entry point
#[embassy_executor::main]
async fn main(spawner: Spawner) {
    info!("Veloce firmware starting...");

    // Initialize RP2040 peripherals
    let p = embassy_rp::init(Default::default());
    info!("Peripherals initialized");

    // Setup UART for the GPS NMEA stream
    let mut uart_config = UartConfig::default();
    uart_config.baudrate = GPS_BAUD;

    let tx_buf = TX_BUF.init([0u8; 32]);
    let rx_buf = RX_BUF.init([0u8; 256]);

    let uart = Uart::new_blocking(p.UART0, p.PIN_0, p.PIN_1, uart_config);
    let uart = uart.into_buffered(Irqs, tx_buf, rx_buf);
    // The GPS link is receive-only; the TX half stays parked
    let (_tx, rx) = uart.split();

    info!("UART initialized for GPS at {} baud", GPS_BAUD);

    // Setup I2C for the SSD1306 display
    let i2c = I2c::new_async(p.I2C0, p.PIN_5, p.PIN_4, Irqs, i2c::Config::default());
    info!("I2C initialized for display");

    // Spawn tasks
    spawner.spawn(tasks::gps_rx_task(rx)).unwrap();
    spawner.spawn(tasks::decoder_task()).unwrap();
    spawner.spawn(tasks::display_task(i2c)).unwrap();

    info!("All tasks spawned, firmware running");

    // Main task has nothing else to do - all work happens in spawned tasks
    loop {
        embassy_time::Timer::after_secs(60).await;
        trace!("Main loop heartbeat");
    }
}
