//! UART receive
//!
//! RP2040 has two UART peripherals (UART0 and UART1). The quote feed uses
//! the RX half of one of them in blocking mode.

use embassy_rp::uart::{self, Blocking};
use tickerwatch_core::traits::SerialInput;
use tickerwatch_hal::{SerialError, UartConfig, UartRx};

/// UART peripheral identifier
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum UartId {
    Uart0,
    Uart1,
}

/// Determine which UART can use a given GPIO pin
///
/// RP2040 has specific pin mappings for each UART.
pub const fn gpio_to_uart(gpio: u8) -> Option<UartId> {
    // UART0: GPIO 0/1, 12/13, 16/17, 28/29
    // UART1: GPIO 4/5, 8/9, 20/21, 24/25
    match gpio {
        0 | 1 | 12 | 13 | 16 | 17 | 28 | 29 => Some(UartId::Uart0),
        4 | 5 | 8 | 9 | 20 | 21 | 24 | 25 => Some(UartId::Uart1),
        _ => None,
    }
}

/// Build the embassy UART configuration (8N1 at the configured rate)
pub fn embassy_config(config: &UartConfig) -> uart::Config {
    let mut out = uart::Config::default();
    out.baudrate = config.baudrate;
    out.data_bits = uart::DataBits::DataBits8;
    out.parity = uart::Parity::ParityNone;
    out.stop_bits = uart::StopBits::STOP1;
    out
}

fn map_error(err: uart::Error) -> SerialError {
    #[allow(unreachable_patterns)]
    match err {
        uart::Error::Overrun => SerialError::Overrun,
        uart::Error::Break => SerialError::Break,
        uart::Error::Parity => SerialError::Parity,
        uart::Error::Framing => SerialError::Framing,
        _ => SerialError::Framing,
    }
}

/// Blocking UART receiver
pub struct RpUartRx<'d> {
    rx: uart::UartRx<'d, Blocking>,
}

impl<'d> RpUartRx<'d> {
    /// Wrap an already configured receiver
    pub fn new(rx: uart::UartRx<'d, Blocking>) -> Self {
        Self { rx }
    }
}

impl UartRx for RpUartRx<'_> {
    fn read_blocking(&mut self, buf: &mut [u8]) -> Result<usize, SerialError> {
        self.rx.blocking_read(buf).map_err(map_error)?;
        Ok(buf.len())
    }
}

impl SerialInput for RpUartRx<'_> {
    type Error = SerialError;

    fn read_byte(&mut self) -> Result<u8, SerialError> {
        UartRx::read_byte(self)
    }
}
