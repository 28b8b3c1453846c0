//! State machine definition
//!
//! Every output the monitor drives is a function of the current state and
//! the latest quote.

use super::events::Event;

/// Observable monitor states
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum AlertState {
    /// No valid quote yet, or the last line failed to parse
    #[default]
    Loading,
    /// Latest price at or above the threshold (or alarm dismissed)
    Normal,
    /// Latest price below the threshold, signalling
    Alarm,
}

impl AlertState {
    /// Check if the alarm is active
    pub fn is_alarm(&self) -> bool {
        matches!(self, AlertState::Alarm)
    }

    /// Process an event and return the next state
    pub fn transition(self, event: Event) -> Self {
        use AlertState::*;
        use Event::*;

        match (self, event) {
            // Line events apply from any state
            (_, LineMalformed) => Loading,
            (_, QuoteAbove) => Normal,
            (_, QuoteBelow) => Alarm,

            // Dismissal only leaves the alarm
            (Alarm, Dismissed) => Normal,
            (state, Dismissed) => state,
        }
    }
}
