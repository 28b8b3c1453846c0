//! Hardware capability traits
//!
//! These traits define the interface between the monitor logic and the
//! device drivers. Every output the monitor drives and every input it
//! polls goes through one of them.

pub mod buzzer;
pub mod clock;
pub mod display;
pub mod indicator;
pub mod input;

pub use buzzer::Buzzer;
pub use clock::Clock;
pub use display::{CharDisplay, DisplayExt, DISPLAY_COLS, DISPLAY_ROWS};
pub use indicator::{IndicatorColor, IndicatorLight};
pub use input::{Button, SerialInput};
