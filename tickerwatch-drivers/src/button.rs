//! GPIO push button

use tickerwatch_core::traits::Button;
use tickerwatch_hal::InputPin;

/// Push button on a GPIO input
///
/// The usual wiring shorts the pin to ground against the internal
/// pull-up, so the button is active-low by default.
pub struct GpioButton<P> {
    pin: P,
    /// If true, pressed = pin LOW
    active_low: bool,
}

impl<P: InputPin> GpioButton<P> {
    /// Create a button with explicit polarity
    pub fn new(pin: P, active_low: bool) -> Self {
        Self { pin, active_low }
    }

    /// Create a button that reads low while pressed
    pub fn new_active_low(pin: P) -> Self {
        Self::new(pin, true)
    }

    /// Create a button that reads high while pressed
    pub fn new_active_high(pin: P) -> Self {
        Self::new(pin, false)
    }
}

impl<P: InputPin> Button for GpioButton<P> {
    fn is_pressed(&mut self) -> bool {
        self.pin.is_high() != self.active_low
    }
}
