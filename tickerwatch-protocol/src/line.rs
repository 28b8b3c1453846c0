//! Line framing for the serial quote feed.
//!
//! Bytes are collected until a line terminator arrives or the buffer is one
//! byte short of full. Both cases produce a completed line:
//! - `\n` or `\r` ends the line; the terminator itself is not stored
//! - with 127 bytes buffered, the next byte ends the line and is dropped
//!
//! There is no resynchronisation beyond that. An overlong line is still
//! framed and handed to the parser, which rejects it.

use heapless::Vec;

/// Size of the receive buffer, including the slot reserved for the terminator
pub const LINE_BUFFER_SIZE: usize = 128;

/// Maximum number of content bytes in one line
pub const MAX_LINE_LEN: usize = LINE_BUFFER_SIZE - 1;

/// A completed line of serial input, terminator stripped
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Line {
    bytes: Vec<u8, MAX_LINE_LEN>,
    overflowed: bool,
}

impl Line {
    /// Build a line from raw bytes, truncating at [`MAX_LINE_LEN`]
    pub fn from_bytes(bytes: &[u8]) -> Self {
        let len = bytes.len().min(MAX_LINE_LEN);
        let mut line = Self::default();
        // Cannot fail: len is clamped to capacity
        let _ = line.bytes.extend_from_slice(&bytes[..len]);
        line.overflowed = bytes.len() > MAX_LINE_LEN;
        line
    }

    /// Line contents
    pub fn as_bytes(&self) -> &[u8] {
        &self.bytes
    }

    /// Line contents as text, if valid UTF-8
    pub fn as_str(&self) -> Option<&str> {
        core::str::from_utf8(&self.bytes).ok()
    }

    /// Number of content bytes
    pub fn len(&self) -> usize {
        self.bytes.len()
    }

    /// True for a bare terminator (e.g. the `\n` of a `\r\n` pair)
    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }

    /// True if the line was cut by the buffer limit rather than a terminator
    pub fn overflowed(&self) -> bool {
        self.overflowed
    }
}

#[cfg(feature = "defmt")]
impl defmt::Format for Line {
    fn format(&self, f: defmt::Formatter) {
        match self.as_str() {
            Some(s) => defmt::write!(f, "Line({=str}, overflowed={})", s, self.overflowed),
            None => defmt::write!(f, "Line({=[u8]}, overflowed={})", &self.bytes[..], self.overflowed),
        }
    }
}

/// Result of feeding one byte
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum FrameEvent {
    /// Byte stored, line still open
    Pending,
    /// A line was terminated (by `\n`, `\r`, or buffer limit)
    LineComplete(Line),
}

/// Assembles serial bytes into lines
#[derive(Debug, Clone, Default)]
pub struct LineAccumulator {
    buffer: Vec<u8, MAX_LINE_LEN>,
}

impl LineAccumulator {
    /// Create an empty accumulator
    pub fn new() -> Self {
        Self { buffer: Vec::new() }
    }

    /// Discard any partially received line
    pub fn reset(&mut self) {
        self.buffer.clear();
    }

    /// Bytes received since the last completed line
    pub fn pending(&self) -> &[u8] {
        &self.buffer
    }

    /// Number of bytes buffered
    pub fn len(&self) -> usize {
        self.buffer.len()
    }

    /// True if no bytes are buffered
    pub fn is_empty(&self) -> bool {
        self.buffer.is_empty()
    }

    /// Feed a single byte
    ///
    /// Returns [`FrameEvent::LineComplete`] when the byte ends a line,
    /// [`FrameEvent::Pending`] otherwise. The terminating byte is never
    /// stored, including the byte that arrives when the buffer is full.
    pub fn push(&mut self, byte: u8) -> FrameEvent {
        let full = self.buffer.is_full();
        if byte == b'\n' || byte == b'\r' || full {
            let line = Line {
                bytes: core::mem::take(&mut self.buffer),
                overflowed: full,
            };
            return FrameEvent::LineComplete(line);
        }

        // Room is guaranteed by the is_full check above
        let _ = self.buffer.push(byte);
        FrameEvent::Pending
    }

    /// Feed multiple bytes
    ///
    /// Returns the first completed line, if any, and the number of bytes
    /// consumed. Bytes after the completing byte are left for the caller.
    pub fn push_bytes(&mut self, bytes: &[u8]) -> (Option<Line>, usize) {
        for (i, &byte) in bytes.iter().enumerate() {
            if let FrameEvent::LineComplete(line) = self.push(byte) {
                return (Some(line), i + 1);
            }
        }
        (None, bytes.len())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use std::vec::Vec as StdVec;

    fn collect_lines(input: &[u8]) -> StdVec<Line> {
        let mut acc = LineAccumulator::new();
        input
            .iter()
            .filter_map(|&b| match acc.push(b) {
                FrameEvent::LineComplete(line) => Some(line),
                FrameEvent::Pending => None,
            })
            .collect()
    }

    #[test]
    fn test_newline_completes_line() {
        let lines = collect_lines(b"abc\n");
        assert_eq!(lines.len(), 1);
        assert_eq!(lines[0].as_bytes(), b"abc");
        assert!(!lines[0].overflowed());
    }

    #[test]
    fn test_carriage_return_completes_line() {
        let lines = collect_lines(b"abc\r");
        assert_eq!(lines.len(), 1);
        assert_eq!(lines[0].as_str(), Some("abc"));
    }

    #[test]
    fn test_crlf_yields_trailing_empty_line() {
        let lines = collect_lines(b"abc\r\n");
        assert_eq!(lines.len(), 2);
        assert_eq!(lines[0].as_bytes(), b"abc");
        assert!(lines[1].is_empty());
    }

    #[test]
    fn test_two_quotes_framed_separately() {
        let input = b"BTC Price: $1.0, 24h Change: 1.0%\nBTC Price: $2.0, 24h Change: -2.0%\n";
        let lines = collect_lines(input);
        assert_eq!(lines.len(), 2);
        assert_eq!(lines[0].as_str(), Some("BTC Price: $1.0, 24h Change: 1.0%"));
        assert_eq!(lines[1].as_str(), Some("BTC Price: $2.0, 24h Change: -2.0%"));
    }

    #[test]
    fn test_overflow_forces_frame_at_127() {
        let mut acc = LineAccumulator::new();
        let mut completed = StdVec::new();
        for i in 0..130 {
            if let FrameEvent::LineComplete(line) = acc.push(b'x') {
                completed.push((i, line));
            }
        }

        assert_eq!(completed.len(), 1);
        let (at, line) = &completed[0];
        // 128th byte (index 127) triggers the frame and is discarded
        assert_eq!(*at, 127);
        assert_eq!(line.len(), MAX_LINE_LEN);
        assert!(line.overflowed());
        // Bytes 129 and 130 start the next line
        assert_eq!(acc.len(), 2);
    }

    #[test]
    fn test_terminator_at_capacity_is_still_one_line() {
        let mut input = [b'y'; MAX_LINE_LEN + 1];
        input[MAX_LINE_LEN] = b'\n';
        let lines = collect_lines(&input);
        assert_eq!(lines.len(), 1);
        assert_eq!(lines[0].len(), MAX_LINE_LEN);
    }

    #[test]
    fn test_reset_discards_partial_line() {
        let mut acc = LineAccumulator::new();
        acc.push(b'a');
        acc.push(b'b');
        assert_eq!(acc.pending(), b"ab");
        acc.reset();
        assert!(acc.is_empty());
        assert_eq!(acc.push(b'\n'), FrameEvent::LineComplete(Line::default()));
    }

    #[test]
    fn test_push_bytes_stops_after_first_line() {
        let mut acc = LineAccumulator::new();
        let (line, used) = acc.push_bytes(b"one\ntwo");
        assert_eq!(line.unwrap().as_bytes(), b"one");
        assert_eq!(used, 4);
        assert!(acc.is_empty());

        let (line, used) = acc.push_bytes(b"two");
        assert!(line.is_none());
        assert_eq!(used, 3);
        assert_eq!(acc.pending(), b"two");
    }

    #[test]
    fn test_crlf_counts() {
        assert_eq!(collect_lines(b"a\nb\n").len(), 2);
        assert_eq!(collect_lines(b"a\rb\r").len(), 2);

        let lines = collect_lines(b"a\r\nb\r\n");
        assert_eq!(lines.len(), 4);
        assert!(lines[1].is_empty());
        assert!(lines[3].is_empty());
    }

    #[test]
    fn test_line_from_bytes_truncates() {
        let long = [b'z'; 200];
        let line = Line::from_bytes(&long);
        assert_eq!(line.len(), MAX_LINE_LEN);
        assert!(line.overflowed());
        assert!(!Line::from_bytes(b"short").overflowed());
    }

    fn body() -> impl Strategy<Value = StdVec<u8>> {
        // Printable ASCII only, so no accidental terminators
        prop::collection::vec(0x20u8..0x7f, 0..MAX_LINE_LEN)
    }

    fn separator() -> impl Strategy<Value = &'static [u8]> {
        prop_oneof![Just(&b"\n"[..]), Just(&b"\r"[..]), Just(&b"\r\n"[..])]
    }

    proptest! {
        #[test]
        fn prop_two_lines_framed(a in body(), b in body(), sep in separator()) {
            let mut input = StdVec::new();
            input.extend_from_slice(&a);
            input.extend_from_slice(sep);
            input.extend_from_slice(&b);
            input.extend_from_slice(sep);

            let lines = collect_lines(&input);

            // Each terminator byte ends a line, so CRLF also yields an empty one
            let expected: StdVec<&[u8]> = if sep == b"\r\n" {
                StdVec::from([&a[..], &[][..], &b[..], &[][..]])
            } else {
                StdVec::from([&a[..], &b[..]])
            };

            prop_assert_eq!(lines.len(), expected.len());
            for (line, want) in lines.iter().zip(expected) {
                prop_assert_eq!(line.as_bytes(), want);
            }
        }
    }
}
