//! Quote monitor
//!
//! Owns the committed threshold and every piece of mutable alert state,
//! plus the output collaborators. The main loop reads one serial byte per
//! step while no alarm is active; while the alarm is active it only ticks
//! the alarm and leaves the serial input untouched. Bytes arriving during
//! an alarm therefore wait in the receiver (or are lost to overrun) until
//! the user dismisses it.

use tickerwatch_protocol::{FrameEvent, Line, LineAccumulator, Quote};

use crate::config::MonitorConfig;
use crate::render::{format_price, format_quote_line, ALARM_PROMPT, LOADING_TEXT, PRICE_HEADER};
use crate::state::{AlarmBlink, AlertState, Event};
use crate::traits::{
    Button, Buzzer, CharDisplay, Clock, DisplayExt, IndicatorColor, IndicatorLight, SerialInput,
};

/// What a completed line did to the monitor
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum LineOutcome {
    /// Line did not parse; loading screen shown
    Loading,
    /// Quote at or above the threshold; quote screen shown
    Normal(Quote),
    /// Quote below the threshold; alarm started
    Alarm(Quote),
}

/// Result of one alarm iteration
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum AlarmTick {
    /// Alarm screen drawn, outputs toggled, blink period waited
    Signalled,
    /// Button pressed; alarm silenced and quote screen shown
    Dismissed,
    /// No alarm active
    Inactive,
}

/// Result of one main loop step
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum MonitorStep {
    /// Alarm active; one alarm iteration ran, no byte was read
    Alarm(AlarmTick),
    /// One byte was read, possibly completing a line
    Byte(Option<LineOutcome>),
}

/// The running monitor
pub struct Monitor<D, L, Z, B, C> {
    display: D,
    indicator: L,
    buzzer: Z,
    button: B,
    clock: C,
    threshold: f32,
    alarm_period_ms: u32,
    dead_band: f64,
    state: AlertState,
    dismissed: bool,
    blink: AlarmBlink,
    quote: Option<Quote>,
}

impl<D, L, Z, B, C> Monitor<D, L, Z, B, C>
where
    D: CharDisplay,
    L: IndicatorLight,
    Z: Buzzer,
    B: Button,
    C: Clock,
{
    /// Create a monitor for a committed threshold
    ///
    /// Starts in [`AlertState::Loading`] with nothing drawn.
    pub fn new(
        threshold: f32,
        config: &MonitorConfig,
        display: D,
        indicator: L,
        buzzer: Z,
        button: B,
        clock: C,
    ) -> Self {
        Self {
            display,
            indicator,
            buzzer,
            button,
            clock,
            threshold,
            alarm_period_ms: config.alarm_period_ms,
            dead_band: config.dead_band,
            state: AlertState::Loading,
            dismissed: false,
            blink: AlarmBlink::new(),
            quote: None,
        }
    }

    /// Committed threshold
    pub fn threshold(&self) -> f32 {
        self.threshold
    }

    /// Current state
    pub fn state(&self) -> AlertState {
        self.state
    }

    /// True if the user silenced the alarm and the price has not recovered
    ///
    /// Informational only; nothing in the monitor branches on it.
    pub fn is_dismissed(&self) -> bool {
        self.dismissed
    }

    /// Alarm toggle state
    pub fn blink(&self) -> AlarmBlink {
        self.blink
    }

    /// Latest successfully parsed quote
    pub fn last_quote(&self) -> Option<Quote> {
        self.quote
    }

    pub fn display(&self) -> &D {
        &self.display
    }

    pub fn indicator(&self) -> &L {
        &self.indicator
    }

    pub fn buzzer(&self) -> &Z {
        &self.buzzer
    }

    pub fn clock(&self) -> &C {
        &self.clock
    }

    /// Apply one completed line
    pub fn handle_line(&mut self, line: &Line) -> LineOutcome {
        let quote = match Quote::from_line(line) {
            Ok(quote) => quote,
            Err(_) => {
                self.state = self.state.transition(Event::LineMalformed);
                self.render_loading();
                return LineOutcome::Loading;
            }
        };

        self.quote = Some(quote);
        let event = Event::for_price(quote.price, self.threshold);
        self.state = self.state.transition(event);

        match event {
            Event::QuoteBelow => {
                self.blink = AlarmBlink::new();
                LineOutcome::Alarm(quote)
            }
            _ => {
                self.dismissed = false;
                self.render_normal(&quote);
                LineOutcome::Normal(quote)
            }
        }
    }

    /// Run one alarm iteration
    ///
    /// The button is checked before anything is drawn, so a press ends the
    /// alarm without a further blink.
    pub fn alarm_tick(&mut self) -> AlarmTick {
        let quote = match (self.state, self.quote) {
            (AlertState::Alarm, Some(quote)) => quote,
            _ => return AlarmTick::Inactive,
        };

        if self.button.is_pressed() {
            self.dismissed = true;
            self.buzzer.off();
            self.state = self.state.transition(Event::Dismissed);
            self.render_normal(&quote);
            return AlarmTick::Dismissed;
        }

        self.display
            .show_rows(&[format_price(quote.price).as_str(), ALARM_PROMPT]);
        self.blink.toggle();
        self.indicator.show(self.blink.light_color());
        self.buzzer.set(self.blink.buzzer_on);
        self.clock.delay_ms(self.alarm_period_ms);
        AlarmTick::Signalled
    }

    /// Tick the alarm until the user dismisses it
    ///
    /// Returns the number of blink iterations. Returns 0 at once if no
    /// alarm is active.
    pub fn run_until_dismissed(&mut self) -> u32 {
        let mut ticks = 0u32;
        while self.alarm_tick() == AlarmTick::Signalled {
            ticks = ticks.wrapping_add(1);
        }
        ticks
    }

    /// Feed one received byte through the accumulator
    pub fn feed(&mut self, byte: u8, accumulator: &mut LineAccumulator) -> Option<LineOutcome> {
        match accumulator.push(byte) {
            FrameEvent::LineComplete(line) => Some(self.handle_line(&line)),
            FrameEvent::Pending => None,
        }
    }

    /// One main loop iteration
    ///
    /// While the alarm is active this ticks the alarm and does not touch
    /// `serial`. A receive error leaves the accumulator unchanged.
    pub fn step<S: SerialInput>(
        &mut self,
        serial: &mut S,
        accumulator: &mut LineAccumulator,
    ) -> Result<MonitorStep, S::Error> {
        if self.state.is_alarm() {
            return Ok(MonitorStep::Alarm(self.alarm_tick()));
        }
        let byte = serial.read_byte()?;
        Ok(MonitorStep::Byte(self.feed(byte, accumulator)))
    }

    /// Run forever
    pub fn run<S: SerialInput>(&mut self, serial: &mut S, accumulator: &mut LineAccumulator) -> ! {
        loop {
            // Receive errors drop the byte; the line keeps accumulating
            let _ = self.step(serial, accumulator);
        }
    }

    fn render_loading(&mut self) {
        self.display.show_rows(&[LOADING_TEXT]);
        self.indicator.set_off();
        self.buzzer.off();
    }

    fn render_normal(&mut self, quote: &Quote) {
        self.display
            .show_rows(&[PRICE_HEADER, format_quote_line(quote).as_str()]);
        self.indicator
            .show(IndicatorColor::for_change(quote.change_percent, self.dead_band));
        self.buzzer.off();
    }
}
