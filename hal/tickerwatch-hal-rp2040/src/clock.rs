//! Blocking millisecond delays
//!
//! The monitor is a single blocking loop, so waits spin on the embassy
//! time driver instead of yielding to the executor.

use embassy_time::{block_for, Duration};
use tickerwatch_core::traits::Clock;

/// Clock that busy-waits on the system timer
#[derive(Debug, Clone, Copy, Default)]
pub struct BusyWaitClock;

impl BusyWaitClock {
    pub const fn new() -> Self {
        Self
    }
}

impl Clock for BusyWaitClock {
    fn delay_ms(&mut self, ms: u32) {
        block_for(Duration::from_millis(u64::from(ms)));
    }
}
