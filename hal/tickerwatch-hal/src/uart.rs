//! UART serial receive abstractions
//!
//! The quote feed is receive-only: the device never talks back to the
//! host, so only the RX half is modelled.

/// Errors reported by a UART receiver
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum SerialError {
    /// Stop bit missing
    Framing,
    /// Parity mismatch
    Parity,
    /// Receive FIFO overflowed before it was drained
    Overrun,
    /// Line held low for longer than a frame
    Break,
}

/// UART receiver
///
/// Blocking: `read_byte` does not return until a byte (or an error) has
/// arrived.
pub trait UartRx {
    /// Read data from the UART
    ///
    /// Blocks until the buffer is filled or an error occurs.
    fn read_blocking(&mut self, buf: &mut [u8]) -> Result<usize, SerialError>;

    /// Read a single byte from the UART
    fn read_byte(&mut self) -> Result<u8, SerialError> {
        let mut buf = [0u8; 1];
        self.read_blocking(&mut buf)?;
        Ok(buf[0])
    }
}

/// UART configuration
///
/// Frames are fixed at 8 data bits, no parity, one stop bit.
#[derive(Debug, Clone, Copy)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct UartConfig {
    /// Baud rate in bits per second
    pub baudrate: u32,
}

impl Default for UartConfig {
    fn default() -> Self {
        Self { baudrate: 115_200 }
    }
}
