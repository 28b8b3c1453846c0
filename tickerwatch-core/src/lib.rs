//! Board-agnostic core logic for the quote monitor firmware
//!
//! This crate contains all application logic that does not depend on
//! specific hardware implementations:
//!
//! - Capability traits for the display, indicator, buzzer, button, serial
//!   input and clock
//! - Configuration types and validation
//! - Startup threshold selection
//! - Alert state machine and the monitor loop driving it
//! - Display formatting

#![cfg_attr(not(test), no_std)]
#![deny(unsafe_code)]

pub mod config;
pub mod monitor;
pub mod render;
pub mod selector;
pub mod state;
pub mod traits;

#[cfg(test)]
pub(crate) mod mock;

pub use tickerwatch_protocol::{Line, LineAccumulator, ParseError, Quote};
