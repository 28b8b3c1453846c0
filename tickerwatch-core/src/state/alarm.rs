//! Alarm blink state
//!
//! The light and the buzzer each flip once per alarm tick. Both start off,
//! so the first tick of an episode turns both on.

use crate::traits::IndicatorColor;

/// Toggle state of the alarm outputs
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct AlarmBlink {
    /// Light currently lit (both channels)
    pub light_on: bool,
    /// Buzzer currently sounding
    pub buzzer_on: bool,
}

impl AlarmBlink {
    /// Both outputs off
    pub const fn new() -> Self {
        Self {
            light_on: false,
            buzzer_on: false,
        }
    }

    /// Flip both outputs for the next tick
    pub fn toggle(&mut self) {
        self.light_on = !self.light_on;
        self.buzzer_on = !self.buzzer_on;
    }

    /// Indicator state for the current phase
    pub fn light_color(&self) -> IndicatorColor {
        if self.light_on {
            IndicatorColor::Both
        } else {
            IndicatorColor::Off
        }
    }
}
