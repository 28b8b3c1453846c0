//! Events that trigger state transitions

/// Events that can trigger state transitions
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Event {
    // Line events
    /// Completed line did not parse as a quote
    LineMalformed,
    /// Quote at or above the committed threshold
    QuoteAbove,
    /// Quote below the committed threshold
    QuoteBelow,

    // User events
    /// Button pressed while the alarm was sounding
    Dismissed,
}

impl Event {
    /// Classify a price against the committed threshold
    pub fn for_price(price: f32, threshold: f32) -> Self {
        if price < threshold {
            Event::QuoteBelow
        } else {
            Event::QuoteAbove
        }
    }
}
