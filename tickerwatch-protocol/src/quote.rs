//! Quote line decoding.
//!
//! Template: `BTC Price: $<price>, 24h Change: <change>%`
//!
//! Matching follows scanf conventions for a fixed format:
//! - a space in the template matches any run of ASCII whitespace, including none
//! - a number skips leading whitespace, then reads
//!   `[+-]digits[.digits][(e|E)[+-]digits]` with at least one mantissa digit
//! - the `%` suffix skips leading whitespace, as `%%` does
//! - every other template byte must match exactly
//!
//! The `%` suffix is required. Bytes after it are ignored.

use core::fmt::Write;

use heapless::String;

use crate::line::{Line, MAX_LINE_LEN};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Text before the price field
pub const PRICE_PREFIX: &str = "BTC Price: $";

/// Text between the price and change fields
pub const CHANGE_SEPARATOR: &str = ", 24h Change: ";

/// Text after the change field
pub const CHANGE_SUFFIX: &str = "%";

/// Errors from quote parsing
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ParseError {
    /// Line does not match the two-field template
    Malformed,
}

/// One decoded quote
///
/// No range checks are applied: a negative price is passed through and
/// left to the alert logic.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Quote {
    /// Price in dollars
    pub price: f32,
    /// 24h change in percent (signed)
    pub change_percent: f32,
}

impl Quote {
    /// Create a quote
    pub const fn new(price: f32, change_percent: f32) -> Self {
        Self {
            price,
            change_percent,
        }
    }

    /// Parse a quote from text
    pub fn parse(text: &str) -> Result<Self, ParseError> {
        parse_quote(text.as_bytes())
    }

    /// Parse a quote from a framed line
    pub fn from_line(line: &Line) -> Result<Self, ParseError> {
        parse_quote(line.as_bytes())
    }

    /// Render this quote as a wire line (without terminator)
    pub fn format_wire(&self) -> Result<String<MAX_LINE_LEN>, core::fmt::Error> {
        let mut out = String::new();
        write!(
            out,
            "{}{}{}{:+}{}",
            PRICE_PREFIX, self.price, CHANGE_SEPARATOR, self.change_percent, CHANGE_SUFFIX
        )?;
        Ok(out)
    }
}

/// Parse one line of the quote feed
///
/// Both fields must be present and well formed; anything less is
/// [`ParseError::Malformed`]. Pure function of its input.
pub fn parse_quote(input: &[u8]) -> Result<Quote, ParseError> {
    let mut scan = Scanner::new(input);

    scan.literal(PRICE_PREFIX)?;
    let price = scan.number()?;
    scan.literal(CHANGE_SEPARATOR)?;
    let change_percent = scan.number()?;
    scan.skip_whitespace();
    scan.literal(CHANGE_SUFFIX)?;

    Ok(Quote {
        price,
        change_percent,
    })
}

/// Cursor over the input bytes
struct Scanner<'a> {
    input: &'a [u8],
    pos: usize,
}

impl<'a> Scanner<'a> {
    fn new(input: &'a [u8]) -> Self {
        Self { input, pos: 0 }
    }

    fn peek(&self) -> Option<u8> {
        self.input.get(self.pos).copied()
    }

    fn skip_whitespace(&mut self) {
        while matches!(self.peek(), Some(b) if b.is_ascii_whitespace()) {
            self.pos += 1;
        }
    }

    fn skip_digits(&mut self) -> usize {
        let start = self.pos;
        while matches!(self.peek(), Some(b) if b.is_ascii_digit()) {
            self.pos += 1;
        }
        self.pos - start
    }

    fn literal(&mut self, template: &str) -> Result<(), ParseError> {
        for expected in template.bytes() {
            if expected == b' ' {
                self.skip_whitespace();
                continue;
            }
            if self.peek() != Some(expected) {
                return Err(ParseError::Malformed);
            }
            self.pos += 1;
        }
        Ok(())
    }

    fn number(&mut self) -> Result<f32, ParseError> {
        self.skip_whitespace();
        let start = self.pos;

        if matches!(self.peek(), Some(b'+' | b'-')) {
            self.pos += 1;
        }

        let mut digits = self.skip_digits();
        if self.peek() == Some(b'.') {
            self.pos += 1;
            digits += self.skip_digits();
        }
        if digits == 0 {
            return Err(ParseError::Malformed);
        }

        // Exponent only counts if at least one digit follows
        if matches!(self.peek(), Some(b'e' | b'E')) {
            let mark = self.pos;
            self.pos += 1;
            if matches!(self.peek(), Some(b'+' | b'-')) {
                self.pos += 1;
            }
            if self.skip_digits() == 0 {
                self.pos = mark;
            }
        }

        let text = core::str::from_utf8(&self.input[start..self.pos])
            .map_err(|_| ParseError::Malformed)?;
        let value: f32 = text.parse().map_err(|_| ParseError::Malformed)?;
        if !value.is_finite() {
            return Err(ParseError::Malformed);
        }
        Ok(value)
    }
}
