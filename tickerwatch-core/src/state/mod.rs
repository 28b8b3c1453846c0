//! Alert state machine
//!
//! Decides what the device shows for each completed line.
//! The state machine is explicit, finite, and deterministic.

pub mod alarm;
pub mod events;
pub mod machine;

pub use alarm::AlarmBlink;
pub use events::Event;
pub use machine::AlertState;
