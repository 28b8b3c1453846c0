//! HD44780 character LCD, 4-bit parallel interface
//!
//! Write-only: R/W is tied to ground, so the busy flag cannot be read and
//! every transfer is followed by a fixed wait instead.
//!
//! Timing (all from the clock passed in):
//! - enable pulse: 1 ms high, 1 ms low
//! - 2 ms after every command or data byte
//! - a further 2 ms after a clear

use tickerwatch_core::traits::{CharDisplay, Clock, DISPLAY_COLS};
use tickerwatch_hal::OutputPin;

/// Controller commands
pub mod cmd {
    /// Clear display, cursor home
    pub const CLEAR: u8 = 0x01;
    /// Entry mode: increment, no shift
    pub const ENTRY_INCREMENT: u8 = 0x06;
    /// Display off
    pub const DISPLAY_OFF: u8 = 0x08;
    /// Display on, cursor off, blink off
    pub const DISPLAY_ON: u8 = 0x0C;
    /// Function set: 4-bit bus, 2 lines, 5x8 font
    pub const FUNCTION_4BIT_2LINE: u8 = 0x28;
    /// Set DDRAM address (OR with the address)
    pub const SET_DDRAM_ADDR: u8 = 0x80;
}

/// DDRAM address of the first cell of row 1
const ROW1_OFFSET: u8 = 0x40;

/// Pins of the 4-bit interface
pub struct LcdPins<P> {
    /// Register select: low = command, high = data
    pub rs: P,
    /// Enable strobe; the controller latches on the falling edge
    pub en: P,
    /// D4..D7, lowest bit first
    pub data: [P; 4],
}

/// HD44780 driver
pub struct Hd44780<P, C> {
    pins: LcdPins<P>,
    clock: C,
}

impl<P: OutputPin, C: Clock> Hd44780<P, C> {
    /// Take ownership of the pins; no bus traffic until [`init`](Self::init)
    pub fn new(pins: LcdPins<P>, clock: C) -> Self {
        Self { pins, clock }
    }

    /// Run the power-on initialisation into 4-bit, 2-line mode
    ///
    /// Leaves the display cleared and switched on with the cursor hidden.
    pub fn init(&mut self) {
        self.clock.delay_ms(40);

        // Three times 0x3 resynchronises whatever mode the controller is in
        self.write_nibble(0x03);
        self.clock.delay_ms(5);
        self.write_nibble(0x03);
        self.clock.delay_ms(1);
        self.write_nibble(0x03);
        self.clock.delay_ms(1);
        self.write_nibble(0x02);

        self.command(cmd::FUNCTION_4BIT_2LINE);
        self.command(cmd::DISPLAY_OFF);
        self.clear();
        self.command(cmd::ENTRY_INCREMENT);
        self.command(cmd::DISPLAY_ON);
    }

    /// Send an instruction byte
    pub fn command(&mut self, byte: u8) {
        self.pins.rs.set_low();
        self.send(byte);
    }

    /// Write one character code at the cursor
    pub fn data(&mut self, byte: u8) {
        self.pins.rs.set_high();
        self.send(byte);
    }

    /// Give the pins and clock back
    pub fn release(self) -> (LcdPins<P>, C) {
        (self.pins, self.clock)
    }

    fn send(&mut self, byte: u8) {
        self.write_nibble(byte >> 4);
        self.write_nibble(byte & 0x0F);
        self.clock.delay_ms(2);
    }

    fn write_nibble(&mut self, nibble: u8) {
        for (bit, pin) in self.pins.data.iter_mut().enumerate() {
            pin.set_state(nibble & (1 << bit) != 0);
        }
        self.pulse_enable();
    }

    fn pulse_enable(&mut self) {
        self.pins.en.set_high();
        self.clock.delay_ms(1);
        self.pins.en.set_low();
        self.clock.delay_ms(1);
    }
}

impl<P: OutputPin, C: Clock> CharDisplay for Hd44780<P, C> {
    fn clear(&mut self) {
        self.command(cmd::CLEAR);
        self.clock.delay_ms(2);
    }

    fn set_cursor(&mut self, col: u8, row: u8) {
        let base = if row == 0 { 0x00 } else { ROW1_OFFSET };
        let addr = base + (col & (DISPLAY_COLS - 1));
        self.command(cmd::SET_DDRAM_ADDR | addr);
    }

    fn write_str(&mut self, text: &str) {
        for byte in text.bytes() {
            self.data(byte);
        }
    }
}
