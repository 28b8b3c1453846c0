//! Configuration loading
//!
//! The configuration is compiled in from monitor.toml and read with a
//! small no_std parser. Anything it cannot use falls back to the
//! built-in defaults.

pub mod toml;

use defmt::*;

use tickerwatch_core::config::MonitorConfig;

pub use self::toml::{parse_config, ConfigParseError};

/// Embedded configuration (compiled into firmware)
/// Edit monitor.toml and rebuild to customize
pub const EMBEDDED_CONFIG: &str = include_str!("../../monitor.toml");

/// Load the embedded configuration, or the defaults if it is unusable
pub fn load() -> MonitorConfig {
    match parse_config(EMBEDDED_CONFIG) {
        Ok(config) => {
            info!(
                "Loaded monitor.toml: {} thresholds, {} baud",
                config.thresholds.len(),
                config.baudrate
            );
            config
        }
        Err(e) => {
            warn!("monitor.toml rejected ({}), using defaults", e);
            MonitorConfig::default()
        }
    }
}
