//! Tickerwatch Hardware Abstraction Layer
//!
//! This crate defines the pin and serial traits that the device drivers
//! are written against. Chip-specific crates (currently RP2040) implement
//! them, so the LCD, indicator, buzzer and button drivers never touch
//! registers directly.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────┐
//! │  tickerwatch-firmware                   │
//! └─────────────────────────────────────────┘
//!           │                    │
//!           ▼                    ▼
//! ┌──────────────────┐  ┌──────────────────┐
//! │ tickerwatch-     │  │ tickerwatch-core │
//! │ drivers          │──▶ (capabilities)   │
//! └──────────────────┘  └──────────────────┘
//!           │
//!           ▼
//! ┌─────────────────────────────────────────┐
//! │  tickerwatch-hal (this crate - traits)  │
//! └─────────────────────────────────────────┘
//!                     │
//!                     ▼
//!          ┌─────────────────────┐
//!          │ tickerwatch-hal-    │
//!          │      rp2040         │
//!          └─────────────────────┘
//! ```
//!
//! # Traits
//!
//! - [`gpio::OutputPin`], [`gpio::InputPin`] - Digital I/O
//! - [`uart::UartRx`] - Serial receive

#![no_std]
#![deny(unsafe_code)]

pub mod gpio;
pub mod uart;

// Re-export key traits at crate root for convenience
pub use gpio::{InputPin, OutputPin};
pub use uart::{SerialError, UartConfig, UartRx};
