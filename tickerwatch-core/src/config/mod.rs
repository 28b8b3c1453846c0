//! Configuration types
//!
//! Board-agnostic tunables for the monitor. Defaults reproduce the
//! behaviour of the shipped device; the firmware may override them from its
//! embedded `monitor.toml`.

pub mod types;

pub use types::*;
