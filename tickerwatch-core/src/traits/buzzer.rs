//! Buzzer trait

/// Trait for the audible alert
///
/// Plain on/off; tone generation, if any, is the driver's business.
pub trait Buzzer {
    /// Start sounding
    fn on(&mut self);

    /// Stop sounding
    fn off(&mut self);

    /// Check if the buzzer is currently sounding
    fn is_on(&self) -> bool;

    /// Switch to a specific state
    fn set(&mut self, on: bool) {
        if on {
            self.on();
        } else {
            self.off();
        }
    }
}
