//! Configuration type definitions

use heapless::Vec;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Maximum number of threshold candidates
pub const MAX_THRESHOLDS: usize = 16;

/// Price tiers offered at boot, in dollars
pub const DEFAULT_THRESHOLDS: [u32; 12] = [
    10_000, 20_000, 30_000, 40_000, 50_000, 60_000, 70_000, 80_000, 90_000, 100_000, 110_000,
    120_000,
];

/// Configuration errors
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ConfigError {
    /// No threshold candidates
    NoThresholds,
    /// More candidates than [`MAX_THRESHOLDS`]
    TooManyThresholds,
    /// Same candidate listed twice
    DuplicateThreshold(u32),
    /// Poll interval is zero
    ZeroPollInterval,
    /// Poll interval longer than the idle window
    PollExceedsIdleWindow,
    /// Alarm blink period is zero
    ZeroBlinkPeriod,
    /// Dead-band is negative or not a number
    InvalidDeadBand,
    /// Baud rate is zero
    ZeroBaudRate,
}

/// Timing of the boot-time threshold selection
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct SelectorTiming {
    /// Selection ends after this long without a press (ms)
    pub idle_window_ms: u32,
    /// Button poll interval while idle (ms)
    pub poll_interval_ms: u32,
    /// Pause after a press before polling resumes (ms)
    pub debounce_ms: u32,
    /// How long "Threshold Saved" stays up (ms)
    pub confirm_ms: u32,
}

impl Default for SelectorTiming {
    fn default() -> Self {
        Self {
            idle_window_ms: 4000,
            poll_interval_ms: 100,
            debounce_ms: 300,
            confirm_ms: 3000,
        }
    }
}

/// Complete monitor configuration
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct MonitorConfig {
    /// Threshold candidates, cycled in order by the button
    pub thresholds: Vec<u32, MAX_THRESHOLDS>,
    /// Selection phase timing
    pub selector: SelectorTiming,
    /// Period of one alarm blink/buzz step (ms)
    pub alarm_period_ms: u32,
    /// Changes within +/- this many percent show no trend color
    pub dead_band: f64,
    /// Serial baud rate of the quote feed
    pub baudrate: u32,
}

impl Default for MonitorConfig {
    fn default() -> Self {
        let mut thresholds = Vec::new();
        // Fits: DEFAULT_THRESHOLDS is shorter than MAX_THRESHOLDS
        let _ = thresholds.extend_from_slice(&DEFAULT_THRESHOLDS);
        Self {
            thresholds,
            selector: SelectorTiming::default(),
            alarm_period_ms: 150,
            dead_band: 0.001,
            baudrate: 115_200,
        }
    }
}

impl MonitorConfig {
    /// Replace the threshold candidates
    pub fn set_thresholds(&mut self, values: &[u32]) -> Result<(), ConfigError> {
        let mut thresholds = Vec::new();
        thresholds
            .extend_from_slice(values)
            .map_err(|_| ConfigError::TooManyThresholds)?;
        self.thresholds = thresholds;
        Ok(())
    }

    /// Check the configuration for values the monitor cannot run with
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.thresholds.is_empty() {
            return Err(ConfigError::NoThresholds);
        }
        for (i, value) in self.thresholds.iter().enumerate() {
            if self.thresholds[..i].contains(value) {
                return Err(ConfigError::DuplicateThreshold(*value));
            }
        }

        let timing = &self.selector;
        if timing.poll_interval_ms == 0 {
            return Err(ConfigError::ZeroPollInterval);
        }
        if timing.poll_interval_ms > timing.idle_window_ms {
            return Err(ConfigError::PollExceedsIdleWindow);
        }

        if self.alarm_period_ms == 0 {
            return Err(ConfigError::ZeroBlinkPeriod);
        }
        if self.dead_band.is_nan() || self.dead_band < 0.0 {
            return Err(ConfigError::InvalidDeadBand);
        }
        if self.baudrate == 0 {
            return Err(ConfigError::ZeroBaudRate);
        }

        Ok(())
    }
}
