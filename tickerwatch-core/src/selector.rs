//! Boot-time threshold selection
//!
//! The user cycles through the candidate prices with the button. Each press
//! advances to the next candidate (wrapping) and restarts the idle window;
//! the phase ends once the window elapses with no press at all. The
//! candidate showing at that moment becomes the committed threshold.

use crate::config::{ConfigError, SelectorTiming};
use crate::render::{format_threshold, SAVED_TEXT, SELECT_PROMPT};
use crate::traits::{Button, CharDisplay, Clock, DisplayExt};

/// Outcome of one button poll
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct SelectorStep {
    /// How long to wait before the next poll
    pub delay_ms: u32,
    /// True if the press moved to a new candidate (redraw needed)
    pub advanced: bool,
}

/// Selection state: current candidate and idle time
#[derive(Debug, Clone)]
pub struct ThresholdSelector<'a> {
    candidates: &'a [u32],
    timing: SelectorTiming,
    index: usize,
    idle_ms: u32,
}

impl<'a> ThresholdSelector<'a> {
    /// Start at the first candidate
    pub fn new(candidates: &'a [u32], timing: SelectorTiming) -> Result<Self, ConfigError> {
        if candidates.is_empty() {
            return Err(ConfigError::NoThresholds);
        }
        Ok(Self {
            candidates,
            timing,
            index: 0,
            idle_ms: 0,
        })
    }

    /// Candidate currently shown
    pub fn current(&self) -> u32 {
        self.candidates[self.index]
    }

    /// Index of the current candidate
    pub fn index(&self) -> usize {
        self.index
    }

    /// Time since the last press (ms)
    pub fn idle_ms(&self) -> u32 {
        self.idle_ms
    }

    /// True once the idle window has elapsed without a press
    pub fn is_done(&self) -> bool {
        self.idle_ms >= self.timing.idle_window_ms
    }

    /// Feed one button sample
    pub fn poll(&mut self, pressed: bool) -> SelectorStep {
        if pressed {
            self.index = (self.index + 1) % self.candidates.len();
            self.idle_ms = 0;
            SelectorStep {
                delay_ms: self.timing.debounce_ms,
                advanced: true,
            }
        } else {
            self.idle_ms = self.idle_ms.saturating_add(self.timing.poll_interval_ms);
            SelectorStep {
                delay_ms: self.timing.poll_interval_ms,
                advanced: false,
            }
        }
    }
}

/// Run the interactive selection and return the committed threshold
///
/// Blocks until the idle window passes without a press, then shows the
/// confirmation for `timing.confirm_ms` and clears the screen.
pub fn select_threshold<D, B, C>(
    candidates: &[u32],
    timing: SelectorTiming,
    display: &mut D,
    button: &mut B,
    clock: &mut C,
) -> Result<f32, ConfigError>
where
    D: CharDisplay,
    B: Button,
    C: Clock,
{
    let mut selector = ThresholdSelector::new(candidates, timing)?;

    display.show_rows(&[SELECT_PROMPT, format_threshold(selector.current()).as_str()]);

    while !selector.is_done() {
        let step = selector.poll(button.is_pressed());
        if step.advanced {
            display.write_row(1, &format_threshold(selector.current()));
        }
        clock.delay_ms(step.delay_ms);
    }

    let committed = selector.current();

    display.show_rows(&[SAVED_TEXT]);
    clock.delay_ms(timing.confirm_ms);
    display.clear();

    Ok(committed as f32)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::DEFAULT_THRESHOLDS;
    use crate::mock::{MockDisplay, ScriptedButton, SimClock, SimTime, TimedButton};

    fn timing() -> SelectorTiming {
        SelectorTiming::default()
    }

    #[test]
    fn test_empty_candidates_rejected() {
        assert!(matches!(
            ThresholdSelector::new(&[], timing()),
            Err(ConfigError::NoThresholds)
        ));
    }

    #[test]
    fn test_idle_window_needs_forty_polls() {
        let mut selector = ThresholdSelector::new(&DEFAULT_THRESHOLDS, timing()).unwrap();
        let mut polls = 0;
        while !selector.is_done() {
            let step = selector.poll(false);
            assert_eq!(step.delay_ms, 100);
            assert!(!step.advanced);
            polls += 1;
        }
        assert_eq!(polls, 40);
        assert_eq!(selector.current(), 10_000);
    }

    #[test]
    fn test_press_advances_and_restarts_window() {
        let mut selector = ThresholdSelector::new(&DEFAULT_THRESHOLDS, timing()).unwrap();
        for _ in 0..39 {
            selector.poll(false);
        }
        assert_eq!(selector.idle_ms(), 3900);

        let step = selector.poll(true);
        assert!(step.advanced);
        assert_eq!(step.delay_ms, 300);
        assert_eq!(selector.idle_ms(), 0);
        assert_eq!(selector.current(), 20_000);
        assert!(!selector.is_done());
    }

    #[test]
    fn test_wraps_around() {
        let mut selector = ThresholdSelector::new(&DEFAULT_THRESHOLDS, timing()).unwrap();
        for _ in 0..DEFAULT_THRESHOLDS.len() {
            selector.poll(true);
        }
        assert_eq!(selector.index(), 0);
        selector.poll(true);
        assert_eq!(selector.current(), 20_000);
    }

    #[test]
    fn test_single_candidate_still_waits_full_window() {
        let mut selector = ThresholdSelector::new(&[42_000], timing()).unwrap();
        selector.poll(true);
        assert_eq!(selector.index(), 0);
        assert!(!selector.is_done());
        for _ in 0..40 {
            selector.poll(false);
        }
        assert!(selector.is_done());
        assert_eq!(selector.current(), 42_000);
    }

    #[test]
    fn test_no_press_commits_first_after_4s() {
        let time = SimTime::new();
        let mut clock = time.clock();
        let mut display = MockDisplay::new();
        let mut button = ScriptedButton::released();

        let threshold = select_threshold(
            &DEFAULT_THRESHOLDS,
            timing(),
            &mut display,
            &mut button,
            &mut clock,
        )
        .unwrap();

        assert_eq!(threshold, 10_000.0);
        assert_eq!(button.polls, 40);
        // 4 s idle window + 3 s confirmation
        assert_eq!(clock.elapsed_ms(), 7000);
        assert_eq!(clock.delays.last(), Some(&3000));
    }

    #[test]
    fn test_press_at_start_commits_second() {
        let time = SimTime::new();
        let mut clock = time.clock();
        let mut display = MockDisplay::new();
        let mut button = TimedButton::new(&time, &[0]);

        let threshold = select_threshold(
            &DEFAULT_THRESHOLDS,
            timing(),
            &mut display,
            &mut button,
            &mut clock,
        )
        .unwrap();

        assert_eq!(threshold, 20_000.0);
        // 300 ms debounce, then a fresh 4 s window, then confirmation
        assert_eq!(clock.elapsed_ms(), 300 + 4000 + 3000);
    }

    #[test]
    fn test_presses_keep_extending_the_phase() {
        let time = SimTime::new();
        let mut clock = time.clock();
        let mut display = MockDisplay::new();
        // Each press lands before the previous window runs out
        let mut button = TimedButton::new(&time, &[1000, 4000, 7500]);

        let threshold = select_threshold(
            &DEFAULT_THRESHOLDS,
            timing(),
            &mut display,
            &mut button,
            &mut clock,
        )
        .unwrap();

        assert_eq!(threshold, 40_000.0);
        assert!(clock.elapsed_ms() > 7500 + 4000);
    }

    #[test]
    fn test_same_script_same_result() {
        let run = || {
            let time = SimTime::new();
            let mut clock = time.clock();
            let mut display = MockDisplay::new();
            let mut button = TimedButton::new(&time, &[200, 900, 1500]);
            select_threshold(
                &DEFAULT_THRESHOLDS,
                timing(),
                &mut display,
                &mut button,
                &mut clock,
            )
            .unwrap()
        };
        assert_eq!(run(), run());
        assert_eq!(run(), 40_000.0);
    }

    #[test]
    fn test_screens() {
        let mut display = MockDisplay::new();
        let mut clock = SimClock::standalone();
        let mut button = ScriptedButton::new(&[false, true]);

        // Stop after the press to inspect the selection screen
        let mut selector = ThresholdSelector::new(&DEFAULT_THRESHOLDS, timing()).unwrap();
        display.show_rows(&[SELECT_PROMPT, format_threshold(selector.current()).as_str()]);
        assert_eq!(display.row(0), "Set min val:");
        assert_eq!(display.row(1), "$10000");
        for _ in 0..2 {
            if selector.poll(button.is_pressed()).advanced {
                display.write_row(1, &format_threshold(selector.current()));
            }
        }
        assert_eq!(display.row(1), "$20000");

        // Full run ends on a cleared screen
        let mut button = ScriptedButton::released();
        select_threshold(&[5], timing(), &mut display, &mut button, &mut clock).unwrap();
        assert_eq!(display.row(0), "");
        assert_eq!(display.row(1), "");
    }
}
