//! Tickerwatch - Serial Quote Monitor Firmware
//!
//! Main firmware binary for RP2040-based boards. Picks a price threshold
//! with the push button at boot, then shows every quote line received on
//! the serial feed and raises a light/buzzer alarm while the price is
//! below the threshold.

#![no_std]
#![no_main]

use defmt::*;
use embassy_executor::Spawner;
use {defmt_rtt as _, panic_probe as _};

use tickerwatch_core::config::DEFAULT_THRESHOLDS;
use tickerwatch_core::monitor::{AlarmTick, LineOutcome, Monitor, MonitorStep};
use tickerwatch_core::selector::select_threshold;
use tickerwatch_core::LineAccumulator;
use tickerwatch_drivers::{GpioButton, GpioBuzzer, Hd44780, RgbIndicator};
use tickerwatch_hal::UartConfig;
use tickerwatch_hal_rp2040::BusyWaitClock;

use crate::board::Board;

mod board;
mod config;

/// Main entry point
#[embassy_executor::main]
async fn main(_spawner: Spawner) {
    info!("Tickerwatch firmware starting...");

    let p = embassy_rp::init(Default::default());
    let board = Board::take(p);
    info!("Peripherals initialized");

    let config = config::load();

    // Outputs off before anything is drawn
    let indicator = RgbIndicator::new(board.led_a, board.led_b);
    let buzzer = GpioBuzzer::new_active_high(board.buzzer);

    let mut lcd = Hd44780::new(board.lcd, BusyWaitClock::new());
    lcd.init();
    info!("LCD initialized");

    let uart_config = UartConfig {
        baudrate: config.baudrate,
    };
    let mut serial = board.feed.open(&uart_config);
    info!("UART1 receiving at {} baud", config.baudrate);

    let mut button = GpioButton::new_active_low(board.button);
    let mut clock = BusyWaitClock::new();

    let threshold = match select_threshold(
        &config.thresholds,
        config.selector,
        &mut lcd,
        &mut button,
        &mut clock,
    ) {
        Ok(threshold) => threshold,
        Err(e) => {
            error!("Threshold selection failed: {}", e);
            DEFAULT_THRESHOLDS[0] as f32
        }
    };
    info!("Threshold committed: {}", threshold);

    let mut monitor = Monitor::new(threshold, &config, lcd, indicator, buzzer, button, clock);
    let mut accumulator = LineAccumulator::new();

    loop {
        match monitor.step(&mut serial, &mut accumulator) {
            Ok(MonitorStep::Byte(None)) => {}
            Ok(MonitorStep::Byte(Some(outcome))) => log_outcome(&outcome),
            Ok(MonitorStep::Alarm(AlarmTick::Dismissed)) => info!("Alarm dismissed"),
            Ok(MonitorStep::Alarm(tick)) => trace!("Alarm tick: {}", tick),
            Err(e) => warn!("UART receive error: {}", e),
        }
    }
}

fn log_outcome(outcome: &LineOutcome) {
    match outcome {
        LineOutcome::Loading => warn!("Malformed quote line"),
        LineOutcome::Normal(quote) => debug!("Quote: {}", quote),
        LineOutcome::Alarm(quote) => info!("Price {} below threshold, alarm", quote.price),
    }
}
