//! GPIO buzzer output
//!
//! Drives an active buzzer (built-in oscillator) straight from a pin.

use tickerwatch_core::traits::Buzzer;
use tickerwatch_hal::OutputPin;

/// GPIO buzzer
///
/// Active-high by default; active-low suits a buzzer switched by a PNP
/// transistor.
pub struct GpioBuzzer<P> {
    pin: P,
    /// If true, buzzer ON = pin LOW
    inverted: bool,
    /// Current logical state
    on: bool,
}

impl<P: OutputPin> GpioBuzzer<P> {
    /// Create a buzzer, switched off
    pub fn new(pin: P, inverted: bool) -> Self {
        let mut buzzer = Self {
            pin,
            inverted,
            on: false,
        };
        buzzer.off();
        buzzer
    }

    /// Create a buzzer that sounds while the pin is high
    pub fn new_active_high(pin: P) -> Self {
        Self::new(pin, false)
    }

    /// Create a buzzer that sounds while the pin is low
    pub fn new_active_low(pin: P) -> Self {
        Self::new(pin, true)
    }

    fn drive(&mut self, on: bool) {
        self.on = on;
        self.pin.set_state(on != self.inverted);
    }
}

impl<P: OutputPin> Buzzer for GpioBuzzer<P> {
    fn on(&mut self) {
        self.drive(true);
    }

    fn off(&mut self) {
        self.drive(false);
    }

    fn is_on(&self) -> bool {
        self.on
    }
}
