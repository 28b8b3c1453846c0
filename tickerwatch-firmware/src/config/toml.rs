//! Minimal TOML reader for the monitor configuration
//!
//! Handles only the subset monitor.toml uses. It does NOT support the full
//! TOML spec.
//!
//! Supported features:
//! - `[section]` headers: selector, alarm, indicator, serial
//! - Key = value pairs (integer, float, array of integers)
//! - Underscores between digits (`115_200`)
//! - Comments (# ...), including trailing ones
//!
//! NOT supported:
//! - Strings, booleans, datetimes
//! - Dotted keys and nested tables
//! - Arrays spanning several lines

use heapless::{String as HString, Vec as HVec};

use tickerwatch_core::config::{ConfigError, MonitorConfig, MAX_THRESHOLDS};

/// Longest numeric literal accepted
const MAX_NUMBER_LEN: usize = 24;

/// Parse error
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ConfigParseError {
    /// Unknown or malformed section header
    InvalidSection,
    /// Key not known in its section
    UnknownKey,
    /// Value of the wrong type or out of range
    InvalidValue,
    /// Too many items (exceeded heapless capacity)
    TooManyItems,
    /// Parsed, but rejected by validation
    Invalid(ConfigError),
}

impl From<ConfigError> for ConfigParseError {
    fn from(e: ConfigError) -> Self {
        match e {
            ConfigError::TooManyThresholds => ConfigParseError::TooManyItems,
            other => ConfigParseError::Invalid(other),
        }
    }
}

/// Current parsing context
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Section {
    Root,
    Selector,
    Alarm,
    Indicator,
    Serial,
}

/// Parse TOML text into a validated `MonitorConfig`
///
/// Keys that are absent keep their default values.
pub fn parse_config(input: &str) -> Result<MonitorConfig, ConfigParseError> {
    let mut config = MonitorConfig::default();
    let mut section = Section::Root;

    for line in input.lines() {
        let line = strip_comment(line).trim();

        // Skip empty lines and comments
        if line.is_empty() {
            continue;
        }

        if line.starts_with('[') && line.ends_with(']') {
            section = parse_section_header(&line[1..line.len() - 1])?;
            continue;
        }

        let (key, value) = parse_key_value(line).ok_or(ConfigParseError::InvalidValue)?;
        apply_value(section, key, value, &mut config)?;
    }

    config.validate()?;
    Ok(config)
}

fn strip_comment(line: &str) -> &str {
    match line.find('#') {
        Some(pos) => &line[..pos],
        None => line,
    }
}

fn parse_section_header(header: &str) -> Result<Section, ConfigParseError> {
    match header.trim() {
        "selector" => Ok(Section::Selector),
        "alarm" => Ok(Section::Alarm),
        "indicator" => Ok(Section::Indicator),
        "serial" => Ok(Section::Serial),
        _ => Err(ConfigParseError::InvalidSection),
    }
}

fn parse_key_value(line: &str) -> Option<(&str, &str)> {
    let eq_pos = line.find('=')?;
    let key = line[..eq_pos].trim();
    let value = line[eq_pos + 1..].trim();

    if key.is_empty() || value.is_empty() {
        return None;
    }

    Some((key, value))
}

fn apply_value(
    section: Section,
    key: &str,
    value: &str,
    config: &mut MonitorConfig,
) -> Result<(), ConfigParseError> {
    match (section, key) {
        (Section::Selector, "thresholds") => {
            let thresholds = parse_int_array(value)?;
            config.set_thresholds(&thresholds)?;
        }
        (Section::Selector, "idle_window_ms") => config.selector.idle_window_ms = parse_u32(value)?,
        (Section::Selector, "poll_interval_ms") => {
            config.selector.poll_interval_ms = parse_u32(value)?
        }
        (Section::Selector, "debounce_ms") => config.selector.debounce_ms = parse_u32(value)?,
        (Section::Selector, "confirm_ms") => config.selector.confirm_ms = parse_u32(value)?,
        (Section::Alarm, "blink_period_ms") => config.alarm_period_ms = parse_u32(value)?,
        (Section::Indicator, "dead_band") => config.dead_band = parse_f64(value)?,
        (Section::Serial, "baudrate") => config.baudrate = parse_u32(value)?,
        _ => return Err(ConfigParseError::UnknownKey),
    }
    Ok(())
}

/// Copy a numeric literal without its digit separators
fn strip_underscores(value: &str) -> Result<HString<MAX_NUMBER_LEN>, ConfigParseError> {
    let mut out = HString::new();
    for c in value.chars().filter(|&c| c != '_') {
        out.push(c).map_err(|_| ConfigParseError::InvalidValue)?;
    }
    Ok(out)
}

fn parse_u32(value: &str) -> Result<u32, ConfigParseError> {
    strip_underscores(value)?
        .parse()
        .map_err(|_| ConfigParseError::InvalidValue)
}

fn parse_f64(value: &str) -> Result<f64, ConfigParseError> {
    strip_underscores(value)?
        .parse()
        .map_err(|_| ConfigParseError::InvalidValue)
}

/// Parse `[1, 2, 3]`; a trailing comma is allowed
fn parse_int_array(value: &str) -> Result<HVec<u32, MAX_THRESHOLDS>, ConfigParseError> {
    let inner = value
        .strip_prefix('[')
        .and_then(|v| v.strip_suffix(']'))
        .ok_or(ConfigParseError::InvalidValue)?;

    let mut items = HVec::new();
    for item in inner.split(',').map(str::trim).filter(|s| !s.is_empty()) {
        items
            .push(parse_u32(item)?)
            .map_err(|_| ConfigParseError::TooManyItems)?;
    }
    Ok(items)
}
