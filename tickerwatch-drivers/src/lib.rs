//! Hardware driver implementations
//!
//! This crate provides concrete implementations of the traits defined
//! in tickerwatch-core, built on the pin traits from tickerwatch-hal:
//!
//! - HD44780 character LCD in 4-bit mode
//! - Two-channel RGB indicator
//! - GPIO buzzer
//! - GPIO push button

#![cfg_attr(not(test), no_std)]
#![deny(unsafe_code)]

pub mod button;
pub mod buzzer;
pub mod hd44780;
pub mod rgb;

pub use button::GpioButton;
pub use buzzer::GpioBuzzer;
pub use hd44780::{Hd44780, LcdPins};
pub use rgb::RgbIndicator;
