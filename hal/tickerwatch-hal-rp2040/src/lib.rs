//! RP2040-specific HAL for the quote monitor firmware
//!
//! This crate provides RP2040 implementations of the shared
//! `tickerwatch-hal` traits and of the core clock and serial
//! capabilities:
//!
//! - GPIO output/input wrappers over `embassy_rp::gpio`
//! - Blocking UART receiver and UART pin mapping
//! - Busy-wait millisecond clock

#![no_std]
#![deny(unsafe_code)]

pub mod clock;
pub mod gpio;
pub mod uart;

pub use clock::BusyWaitClock;
pub use gpio::{RpInput, RpOutput};
pub use uart::{gpio_to_uart, RpUartRx, UartId};
