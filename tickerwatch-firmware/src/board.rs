//! Board wiring
//!
//! Pin assignment for a Raspberry Pi Pico carrying the monitor
//! peripherals:
//!
//! | Function          | GPIO        |
//! |-------------------|-------------|
//! | LCD RS / EN       | GP6 / GP7   |
//! | LCD D4..D7        | GP2..GP5    |
//! | LED channel A     | GP16 (red)  |
//! | LED channel B     | GP17 (green)|
//! | Buzzer            | GP15        |
//! | Button (to GND)   | GP14        |
//! | Quote feed RX/TX  | GP9 / GP8   |

use embassy_rp::peripherals::{PIN_9, UART1};
use embassy_rp::uart::UartRx;
use embassy_rp::{Peri, Peripherals};

use tickerwatch_drivers::LcdPins;
use tickerwatch_hal::UartConfig;
use tickerwatch_hal_rp2040::uart::embassy_config;
use tickerwatch_hal_rp2040::{gpio_to_uart, RpInput, RpOutput, RpUartRx, UartId};

/// GPIO of the quote feed receive line
pub const UART_RX_GPIO: u8 = 9;

/// GPIO of the (unused) transmit line
pub const UART_TX_GPIO: u8 = 8;

// The feed must sit on UART1 pins
const _: () = assert!(matches!(gpio_to_uart(UART_RX_GPIO), Some(UartId::Uart1)));
const _: () = assert!(matches!(gpio_to_uart(UART_TX_GPIO), Some(UartId::Uart1)));

/// Peripherals the monitor uses, configured for their role
pub struct Board {
    pub lcd: LcdPins<RpOutput<'static>>,
    pub led_a: RpOutput<'static>,
    pub led_b: RpOutput<'static>,
    pub buzzer: RpOutput<'static>,
    pub button: RpInput<'static>,
    pub feed: FeedUart,
}

/// Quote feed UART, not yet opened
pub struct FeedUart {
    uart: Peri<'static, UART1>,
    rx: Peri<'static, PIN_9>,
}

impl FeedUart {
    /// Open the receiver in blocking mode
    pub fn open(self, config: &UartConfig) -> RpUartRx<'static> {
        RpUartRx::new(UartRx::new_blocking(
            self.uart,
            self.rx,
            embassy_config(config),
        ))
    }
}

impl Board {
    /// Configure every output low and the button with its pull-up
    ///
    /// The UART is left closed; see [`FeedUart::open`].
    pub fn take(p: Peripherals) -> Self {
        let led_a = RpOutput::new(p.PIN_16);
        let led_b = RpOutput::new(p.PIN_17);
        let buzzer = RpOutput::new(p.PIN_15);

        let lcd = LcdPins {
            rs: RpOutput::new(p.PIN_6),
            en: RpOutput::new(p.PIN_7),
            data: [
                RpOutput::new(p.PIN_2),
                RpOutput::new(p.PIN_3),
                RpOutput::new(p.PIN_4),
                RpOutput::new(p.PIN_5),
            ],
        };

        let button = RpInput::pull_up(p.PIN_14);

        let feed = FeedUart {
            uart: p.UART1,
            rx: p.PIN_9,
        };

        Self {
            lcd,
            led_a,
            led_b,
            buzzer,
            button,
            feed,
        }
    }
}
