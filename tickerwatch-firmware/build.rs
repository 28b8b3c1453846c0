//! Build script for tickerwatch-firmware
//!
//! - Sets up linker search paths for memory.x
//! - Validates monitor.toml at compile time

use std::env;
use std::fs::{self, File};
use std::io::Write;
use std::path::{Path, PathBuf};

use tickerwatch_core::config::{ConfigError, MonitorConfig, MAX_THRESHOLDS};

/// Keys accepted in each section
const SECTIONS: &[(&str, &[&str])] = &[
    (
        "selector",
        &[
            "thresholds",
            "idle_window_ms",
            "poll_interval_ms",
            "debounce_ms",
            "confirm_ms",
        ],
    ),
    ("alarm", &["blink_period_ms"]),
    ("indicator", &["dead_band"]),
    ("serial", &["baudrate"]),
];

fn main() {
    setup_linker();
    validate_config();
}

/// Set up linker search paths for memory.x
fn setup_linker() {
    let out_dir = PathBuf::from(env::var("OUT_DIR").unwrap());

    // Copy memory.x to the output directory
    let memory_x = include_bytes!("memory.x");
    let mut f = File::create(out_dir.join("memory.x")).unwrap();
    f.write_all(memory_x).unwrap();

    // Tell rustc where to find memory.x
    println!("cargo:rustc-link-search={}", out_dir.display());

    // Re-run if memory.x changes
    println!("cargo:rerun-if-changed=memory.x");
    println!("cargo:rerun-if-changed=build.rs");
}

/// Validate monitor.toml configuration at compile time
fn validate_config() {
    println!("cargo:rerun-if-changed=monitor.toml");

    let config_path = Path::new("monitor.toml");

    if !config_path.exists() {
        panic!(
            "\n\
            ╔══════════════════════════════════════════════════════════════════╗\n\
            ║  ERROR: monitor.toml not found!                                  ║\n\
            ║                                                                  ║\n\
            ║  The firmware embeds a monitor.toml configuration file.          ║\n\
            ║  Please create one in the tickerwatch-firmware directory.        ║\n\
            ╚══════════════════════════════════════════════════════════════════╝\n"
        );
    }

    let config_content = match fs::read_to_string(config_path) {
        Ok(content) => content,
        Err(e) => {
            panic!(
                "\n\
                ╔══════════════════════════════════════════════════════════════════╗\n\
                ║  ERROR: Failed to read monitor.toml                              ║\n\
                ║                                                                  ║\n\
                ║  Error: {:<56} ║\n\
                ╚══════════════════════════════════════════════════════════════════╝\n",
                e
            );
        }
    };

    // Parse and validate TOML syntax
    let config: toml::Value = match toml::from_str(&config_content) {
        Ok(value) => value,
        Err(e) => {
            let error_msg = e.to_string();
            panic!(
                "\n\
                ╔══════════════════════════════════════════════════════════════════╗\n\
                ║  ERROR: Invalid TOML syntax in monitor.toml                      ║\n\
                ╠══════════════════════════════════════════════════════════════════╣\n\
                ║                                                                  ║\n\
                {}\n\
                ║                                                                  ║\n\
                ╚══════════════════════════════════════════════════════════════════╝\n",
                format_error_lines(&error_msg)
            );
        }
    };

    let mut errors = check_layout(&config);
    if errors.is_empty() {
        match build_config(&config) {
            Ok(monitor) => {
                if let Err(e) = monitor.validate() {
                    errors.push(describe(e));
                }
            }
            Err(e) => errors.push(e),
        }
    }

    if !errors.is_empty() {
        panic!(
            "\n\
            ╔══════════════════════════════════════════════════════════════════╗\n\
            ║  ERROR: Invalid monitor configuration                            ║\n\
            ╠══════════════════════════════════════════════════════════════════╣\n\
            {}\n\
            ╚══════════════════════════════════════════════════════════════════╝\n",
            errors
                .iter()
                .map(|e| format!("║  • {:<62} ║", e))
                .collect::<Vec<_>>()
                .join("\n")
        );
    }

    println!("cargo:warning=monitor.toml validated successfully");
}

/// Format error message lines with box drawing
fn format_error_lines(msg: &str) -> String {
    msg.lines()
        .map(|line| {
            let truncated = if line.len() > 64 {
                format!("{}...", &line[..61])
            } else {
                line.to_string()
            };
            format!("║  {:<64} ║", truncated)
        })
        .collect::<Vec<_>>()
        .join("\n")
}

/// Reject unknown sections and keys
fn check_layout(config: &toml::Value) -> Vec<String> {
    let mut errors = Vec::new();

    let root = match config.as_table() {
        Some(t) => t,
        None => return vec!["top level must be a table".to_string()],
    };

    for (name, section) in root {
        let keys = match SECTIONS.iter().find(|(s, _)| *s == name.as_str()) {
            Some((_, keys)) => keys,
            None => {
                errors.push(format!("unknown section [{}]", name));
                continue;
            }
        };
        let table = match section.as_table() {
            Some(t) => t,
            None => {
                errors.push(format!("[{}] must be a table", name));
                continue;
            }
        };
        for key in table.keys() {
            if !keys.contains(&key.as_str()) {
                errors.push(format!("[{}] unknown key '{}'", name, key));
            }
        }
    }

    errors
}

/// Overlay the file onto the defaults, the same way the firmware does
fn build_config(config: &toml::Value) -> Result<MonitorConfig, String> {
    let mut monitor = MonitorConfig::default();

    if let Some(values) = config.get("selector").and_then(|s| s.get("thresholds")) {
        let array = values
            .as_array()
            .ok_or("[selector] thresholds must be an array")?;
        if array.len() > MAX_THRESHOLDS {
            return Err(format!(
                "[selector] at most {} thresholds allowed",
                MAX_THRESHOLDS
            ));
        }
        let mut thresholds = Vec::new();
        for value in array {
            thresholds.push(as_u32(value, "selector", "thresholds")?);
        }
        monitor
            .set_thresholds(&thresholds)
            .map_err(describe)?;
    }

    let timing = &mut monitor.selector;
    for (key, field) in [
        ("idle_window_ms", &mut timing.idle_window_ms),
        ("poll_interval_ms", &mut timing.poll_interval_ms),
        ("debounce_ms", &mut timing.debounce_ms),
        ("confirm_ms", &mut timing.confirm_ms),
    ] {
        if let Some(value) = config.get("selector").and_then(|s| s.get(key)) {
            *field = as_u32(value, "selector", key)?;
        }
    }

    if let Some(value) = config.get("alarm").and_then(|s| s.get("blink_period_ms")) {
        monitor.alarm_period_ms = as_u32(value, "alarm", "blink_period_ms")?;
    }

    if let Some(value) = config.get("indicator").and_then(|s| s.get("dead_band")) {
        monitor.dead_band = match value {
            toml::Value::Float(f) => *f,
            toml::Value::Integer(i) => *i as f64,
            _ => return Err("[indicator] dead_band must be a number".to_string()),
        };
    }

    if let Some(value) = config.get("serial").and_then(|s| s.get("baudrate")) {
        monitor.baudrate = as_u32(value, "serial", "baudrate")?;
    }

    Ok(monitor)
}

fn as_u32(value: &toml::Value, section: &str, key: &str) -> Result<u32, String> {
    value
        .as_integer()
        .and_then(|i| u32::try_from(i).ok())
        .ok_or_else(|| format!("[{}] {} must be a non-negative integer", section, key))
}

fn describe(error: ConfigError) -> String {
    match error {
        ConfigError::NoThresholds => "[selector] thresholds cannot be empty".to_string(),
        ConfigError::TooManyThresholds => {
            format!("[selector] at most {} thresholds allowed", MAX_THRESHOLDS)
        }
        ConfigError::DuplicateThreshold(v) => {
            format!("[selector] threshold {} listed twice", v)
        }
        ConfigError::ZeroPollInterval => "[selector] poll_interval_ms must be > 0".to_string(),
        ConfigError::PollExceedsIdleWindow => {
            "[selector] poll_interval_ms exceeds idle_window_ms".to_string()
        }
        ConfigError::ZeroBlinkPeriod => "[alarm] blink_period_ms must be > 0".to_string(),
        ConfigError::InvalidDeadBand => "[indicator] dead_band must be >= 0".to_string(),
        ConfigError::ZeroBaudRate => "[serial] baudrate must be > 0".to_string(),
    }
}
