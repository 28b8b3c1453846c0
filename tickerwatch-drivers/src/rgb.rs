//! Two-channel RGB indicator
//!
//! Only two channels of the LED are wired. Channel A shows a falling
//! price, channel B a rising one, and both together mix to the alarm
//! yellow.

use tickerwatch_core::traits::{IndicatorColor, IndicatorLight};
use tickerwatch_hal::OutputPin;

/// RGB LED with two driven channels, active-high
pub struct RgbIndicator<A, B> {
    channel_a: A,
    channel_b: B,
}

impl<A: OutputPin, B: OutputPin> RgbIndicator<A, B> {
    /// Create the indicator with both channels off
    pub fn new(channel_a: A, channel_b: B) -> Self {
        let mut led = Self {
            channel_a,
            channel_b,
        };
        led.set_off();
        led
    }

    /// State currently shown
    pub fn color(&self) -> IndicatorColor {
        match (self.channel_a.is_set_high(), self.channel_b.is_set_high()) {
            (false, false) => IndicatorColor::Off,
            (true, false) => IndicatorColor::Down,
            (false, true) => IndicatorColor::Up,
            (true, true) => IndicatorColor::Both,
        }
    }

    fn drive(&mut self, a: bool, b: bool) {
        self.channel_a.set_state(a);
        self.channel_b.set_state(b);
    }
}

impl<A: OutputPin, B: OutputPin> IndicatorLight for RgbIndicator<A, B> {
    fn set_off(&mut self) {
        self.drive(false, false);
    }

    fn set_color_a(&mut self) {
        self.drive(true, false);
    }

    fn set_color_b(&mut self) {
        self.drive(false, true);
    }

    fn set_both(&mut self) {
        self.drive(true, true);
    }
}
