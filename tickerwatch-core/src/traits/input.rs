//! Input traits: push button and serial byte source

/// Trait for the push button
///
/// Reports the instantaneous level. Debouncing is done by the callers'
/// polling cadence, not here.
pub trait Button {
    /// True while the button is held down
    fn is_pressed(&mut self) -> bool;
}

/// Trait for the serial quote feed
pub trait SerialInput {
    /// Receive error type
    type Error;

    /// Block until one byte has been received
    fn read_byte(&mut self) -> Result<u8, Self::Error>;
}
