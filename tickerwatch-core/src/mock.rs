//! Test doubles for the capability traits

use std::cell::Cell;
use std::collections::VecDeque;
use std::rc::Rc;
use std::string::String;
use std::vec::Vec;

use crate::traits::{Button, Buzzer, CharDisplay, Clock, IndicatorColor, IndicatorLight, SerialInput};

/// Cells per row kept by the mock (HD44780 DDRAM line length)
const MOCK_ROW_CELLS: usize = 40;

/// Character display that keeps a cell grid
pub struct MockDisplay {
    cells: [[u8; MOCK_ROW_CELLS]; 2],
    col: usize,
    row: usize,
    pub clears: usize,
}

impl MockDisplay {
    pub fn new() -> Self {
        Self {
            cells: [[b' '; MOCK_ROW_CELLS]; 2],
            col: 0,
            row: 0,
            clears: 0,
        }
    }

    /// Row contents with trailing blanks removed
    pub fn row(&self, row: usize) -> String {
        String::from_utf8_lossy(&self.cells[row])
            .trim_end()
            .into()
    }
}

impl CharDisplay for MockDisplay {
    fn clear(&mut self) {
        self.cells = [[b' '; MOCK_ROW_CELLS]; 2];
        self.col = 0;
        self.row = 0;
        self.clears += 1;
    }

    fn set_cursor(&mut self, col: u8, row: u8) {
        self.col = col as usize;
        self.row = (row as usize).min(1);
    }

    fn write_str(&mut self, text: &str) {
        for b in text.bytes() {
            if self.col < MOCK_ROW_CELLS {
                self.cells[self.row][self.col] = b;
            }
            self.col += 1;
        }
    }
}

/// Indicator that remembers every state it was put in
pub struct MockIndicator {
    pub color: IndicatorColor,
    pub history: Vec<IndicatorColor>,
}

impl MockIndicator {
    pub fn new() -> Self {
        Self {
            color: IndicatorColor::Off,
            history: Vec::new(),
        }
    }

    fn record(&mut self, color: IndicatorColor) {
        self.color = color;
        self.history.push(color);
    }
}

impl IndicatorLight for MockIndicator {
    fn set_off(&mut self) {
        self.record(IndicatorColor::Off);
    }

    fn set_color_a(&mut self) {
        self.record(IndicatorColor::Down);
    }

    fn set_color_b(&mut self) {
        self.record(IndicatorColor::Up);
    }

    fn set_both(&mut self) {
        self.record(IndicatorColor::Both);
    }
}

/// Buzzer that counts how often it was switched on
pub struct MockBuzzer {
    pub on: bool,
    pub activations: usize,
}

impl MockBuzzer {
    pub fn new() -> Self {
        Self {
            on: false,
            activations: 0,
        }
    }
}

impl Buzzer for MockBuzzer {
    fn on(&mut self) {
        self.on = true;
        self.activations += 1;
    }

    fn off(&mut self) {
        self.on = false;
    }

    fn is_on(&self) -> bool {
        self.on
    }
}

/// Button answering polls from a script, then released forever
pub struct ScriptedButton {
    script: VecDeque<bool>,
    pub polls: usize,
}

impl ScriptedButton {
    pub fn new(script: &[bool]) -> Self {
        Self {
            script: script.iter().copied().collect(),
            polls: 0,
        }
    }

    pub fn released() -> Self {
        Self::new(&[])
    }
}

impl Button for ScriptedButton {
    fn is_pressed(&mut self) -> bool {
        self.polls += 1;
        self.script.pop_front().unwrap_or(false)
    }
}

/// Simulated time source shared between a clock and timed inputs
#[derive(Clone, Default)]
pub struct SimTime(Rc<Cell<u64>>);

impl SimTime {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn now_ms(&self) -> u64 {
        self.0.get()
    }

    pub fn clock(&self) -> SimClock {
        SimClock {
            time: self.clone(),
            delays: Vec::new(),
        }
    }
}

/// Clock that advances simulated time instead of sleeping
pub struct SimClock {
    time: SimTime,
    pub delays: Vec<u32>,
}

impl SimClock {
    pub fn standalone() -> Self {
        SimTime::new().clock()
    }

    pub fn elapsed_ms(&self) -> u64 {
        self.time.now_ms()
    }
}

impl Clock for SimClock {
    fn delay_ms(&mut self, ms: u32) {
        self.delays.push(ms);
        self.time.0.set(self.time.0.get() + u64::from(ms));
    }
}

/// Button pressed at given instants of simulated time
///
/// A press registers on the first poll at or after its instant.
pub struct TimedButton {
    time: SimTime,
    presses: VecDeque<u64>,
}

impl TimedButton {
    pub fn new(time: &SimTime, presses_ms: &[u64]) -> Self {
        Self {
            time: time.clone(),
            presses: presses_ms.iter().copied().collect(),
        }
    }
}

impl Button for TimedButton {
    fn is_pressed(&mut self) -> bool {
        match self.presses.front() {
            Some(&at) if at <= self.time.now_ms() => {
                self.presses.pop_front();
                true
            }
            _ => false,
        }
    }
}

/// Serial source replaying a byte string
pub struct MockSerial {
    bytes: VecDeque<u8>,
}

impl MockSerial {
    pub fn new(bytes: &[u8]) -> Self {
        Self {
            bytes: bytes.iter().copied().collect(),
        }
    }

    pub fn remaining(&self) -> usize {
        self.bytes.len()
    }
}

/// Returned once the script is exhausted
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EndOfInput;

impl SerialInput for MockSerial {
    type Error = EndOfInput;

    fn read_byte(&mut self) -> Result<u8, Self::Error> {
        self.bytes.pop_front().ok_or(EndOfInput)
    }
}
