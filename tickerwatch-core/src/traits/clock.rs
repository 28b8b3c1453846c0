//! Blocking delay trait

/// Trait for blocking millisecond delays
///
/// Implementations busy-wait; nothing else runs while a delay is in
/// progress.
pub trait Clock {
    /// Block for `ms` milliseconds
    fn delay_ms(&mut self, ms: u32);
}
