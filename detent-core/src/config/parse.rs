//! Minimal TOML-subset parser for driver configuration
//!
//! Handles only what `detent.toml` needs, without allocation:
//! - `[encoder]`, `[acceleration]` and `[button]` section headers
//! - `key = value` pairs (integer, boolean, quoted string)
//! - Comments (`# ...`), whole-line or trailing
//!
//! Everything starts from [`DetentConfig::default`]; keys only override.

use core::fmt;

use detent_hal::ActiveLevel;
use heapless::String as HString;

use super::types::{DecoderMode, DetentConfig};

/// Longest key name kept in an error report
pub const MAX_KEY_LEN: usize = 24;

/// Parse error
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ParseError {
    /// Unknown or malformed section header
    InvalidSection {
        /// 1-based line number
        line: usize,
    },
    /// Key not valid in the current section
    UnknownKey {
        /// 1-based line number
        line: usize,
        /// Offending key, truncated to [`MAX_KEY_LEN`]
        key: HString<MAX_KEY_LEN>,
    },
    /// Value has the wrong type or is out of range
    InvalidValue {
        /// 1-based line number
        line: usize,
    },
    /// Line is neither a header, a comment nor `key = value`
    MissingEquals {
        /// 1-based line number
        line: usize,
    },
}

impl fmt::Display for ParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ParseError::InvalidSection { line } => write!(f, "line {}: invalid section", line),
            ParseError::UnknownKey { line, key } => {
                write!(f, "line {}: unknown key `{}`", line, key)
            }
            ParseError::InvalidValue { line } => write!(f, "line {}: invalid value", line),
            ParseError::MissingEquals { line } => {
                write!(f, "line {}: expected `key = value`", line)
            }
        }
    }
}

/// Current parsing context
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Section {
    Root,
    Encoder,
    Acceleration,
    Button,
}

/// Parse configuration text into a [`DetentConfig`]
pub fn parse(input: &str) -> Result<DetentConfig, ParseError> {
    let mut config = DetentConfig::default();
    let mut section = Section::Root;

    for (index, raw) in input.lines().enumerate() {
        let line_no = index + 1;
        let line = strip_comment(raw).trim();

        if line.is_empty() {
            continue;
        }

        if line.starts_with('[') && line.ends_with(']') {
            section = parse_section_header(&line[1..line.len() - 1])
                .ok_or(ParseError::InvalidSection { line: line_no })?;
            continue;
        }

        let (key, value) =
            parse_key_value(line).ok_or(ParseError::MissingEquals { line: line_no })?;

        apply_value(&mut config, section, key, value, line_no)?;
    }

    Ok(config)
}

/// Parse a section header (without brackets)
fn parse_section_header(header: &str) -> Option<Section> {
    match header.trim() {
        "encoder" => Some(Section::Encoder),
        "acceleration" => Some(Section::Acceleration),
        "button" => Some(Section::Button),
        _ => None,
    }
}

/// Drop a trailing comment, unless the `#` sits inside a quoted string
fn strip_comment(line: &str) -> &str {
    let mut in_string = false;
    for (pos, ch) in line.char_indices() {
        match ch {
            '"' => in_string = !in_string,
            '#' if !in_string => return &line[..pos],
            _ => {}
        }
    }
    line
}

/// Parse "key = value" line
fn parse_key_value(line: &str) -> Option<(&str, &str)> {
    let eq_pos = line.find('=')?;
    let key = line[..eq_pos].trim();
    let value = line[eq_pos + 1..].trim();

    if key.is_empty() || value.is_empty() {
        return None;
    }

    Some((key, value))
}

/// Parse a string value (removes quotes)
fn parse_string(value: &str) -> &str {
    if value.len() >= 2 && value.starts_with('"') && value.ends_with('"') {
        &value[1..value.len() - 1]
    } else {
        // Allow unquoted strings for simple values
        value
    }
}

fn parse_int<T: core::str::FromStr>(value: &str, line: usize) -> Result<T, ParseError> {
    value.parse().map_err(|_| ParseError::InvalidValue { line })
}

fn parse_nonzero(value: &str, line: usize) -> Result<u16, ParseError> {
    match parse_int(value, line)? {
        0 => Err(ParseError::InvalidValue { line }),
        v => Ok(v),
    }
}

fn parse_bool(value: &str, line: usize) -> Result<bool, ParseError> {
    match value {
        "true" => Ok(true),
        "false" => Ok(false),
        _ => Err(ParseError::InvalidValue { line }),
    }
}

fn parse_active_level(value: &str, line: usize) -> Result<ActiveLevel, ParseError> {
    match parse_string(value) {
        "low" | "Low" => Ok(ActiveLevel::Low),
        "high" | "High" => Ok(ActiveLevel::High),
        _ => Err(ParseError::InvalidValue { line }),
    }
}

fn parse_mode(value: &str, line: usize) -> Result<DecoderMode, ParseError> {
    match parse_string(value) {
        "gray" | "Gray" => Ok(DecoderMode::Gray),
        "table" | "Table" => Ok(DecoderMode::Table),
        "half_step" | "HalfStepTable" => Ok(DecoderMode::HalfStepTable),
        _ => Err(ParseError::InvalidValue { line }),
    }
}

fn unknown_key(key: &str, line: usize) -> ParseError {
    let mut truncated = HString::new();
    for ch in key.chars() {
        if truncated.push(ch).is_err() {
            break;
        }
    }
    ParseError::UnknownKey {
        line,
        key: truncated,
    }
}

fn apply_value(
    config: &mut DetentConfig,
    section: Section,
    key: &str,
    value: &str,
    line: usize,
) -> Result<(), ParseError> {
    match section {
        Section::Root => return Err(unknown_key(key, line)),
        Section::Encoder => {
            let enc = &mut config.encoder;
            match key {
                "steps_per_notch" => enc.steps_per_notch = parse_int(value, line)?,
                "active_level" => enc.active_level = parse_active_level(value, line)?,
                "active_low" => {
                    enc.active_level = ActiveLevel::from_active_low(parse_bool(value, line)?)
                }
                "decoder" => enc.mode = parse_mode(value, line)?,
                "acceleration" => enc.acceleration = parse_bool(value, line)?,
                _ => return Err(unknown_key(key, line)),
            }
        }
        Section::Acceleration => {
            let accel = &mut config.encoder.accel;
            match key {
                "ceiling" => accel.ceiling = parse_nonzero(value, line)?,
                "slope" => accel.slope = parse_nonzero(value, line)?,
                _ => return Err(unknown_key(key, line)),
            }
        }
        Section::Button => {
            let btn = &mut config.button;
            match key {
                "active_level" => btn.active_level = parse_active_level(value, line)?,
                "active_low" => {
                    btn.active_level = ActiveLevel::from_active_low(parse_bool(value, line)?)
                }
                "interval_ticks" => btn.interval_ticks = parse_int(value, line)?,
                "hold_ticks" => btn.hold_ticks = parse_int(value, line)?,
                "repeat_ticks" => btn.repeat_ticks = parse_int(value, line)?,
                "double_click_ticks" => btn.double_click_ticks = parse_int(value, line)?,
                "double_click" => btn.double_click = parse_bool(value, line)?,
                "long_press_repeat" => btn.long_press_repeat = parse_bool(value, line)?,
                _ => return Err(unknown_key(key, line)),
            }
        }
    }

    Ok(())
}
