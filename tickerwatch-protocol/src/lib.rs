//! Quote Feed Protocol
//!
//! The host streams one quote per text line over UART:
//!
//! ```text
//! BTC Price: $67890.42, 24h Change: +3.14%\n
//! ```
//!
//! Lines end with `\n` or `\r` (either is accepted on its own). A line that
//! grows to 127 bytes without a terminator is cut there and handed on
//! as-is. Lines that do not match the template are not errors at this
//! level: they simply mean "no data yet".
//!
//! - [`line::LineAccumulator`] assembles bytes into [`line::Line`]s.
//! - [`quote::parse_quote`] turns a line into a [`quote::Quote`].

#![cfg_attr(not(test), no_std)]
#![deny(unsafe_code)]

pub mod line;
pub mod quote;

pub use line::{FrameEvent, Line, LineAccumulator, LINE_BUFFER_SIZE, MAX_LINE_LEN};
pub use quote::{parse_quote, ParseError, Quote};
