//! Display configuration
//!
//! Configs come either as a minimal TOML subset:
//!
//! ```toml
//! [display]
//! address = 0x3C
//! double_buffered = true   # diff against a shadow canvas
//! contrast = 207
//! flip_vertical = false
//! inverted = false
//! clock_div = 0xF0
//! ```
//!
//! or as the postcard encoding of [`DisplayConfig`] (with the `serde`
//! feature). [`load_config`] accepts either.
//!
//! Supported TOML: `[section]` headers, `key = value` pairs, decimal and
//! `0x` hex integers, booleans, `#` comments. Nothing else.

#[cfg(feature = "serde")]
use alloc::vec::Vec;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Current config format version
pub const CONFIG_VERSION: u8 = 1;

/// Default 7-bit I2C address of the controller
pub const DEFAULT_ADDRESS: u8 = 0x3C;

/// Display controller configuration
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct DisplayConfig {
    /// Format version for compatibility checks
    pub version: u8,
    /// 7-bit I2C address
    pub address: u8,
    /// Diff against a shadow canvas instead of sending full frames
    pub double_buffered: bool,
    /// Contrast (0-255)
    pub contrast: u8,
    /// Rotate the panel 180 degrees
    pub flip_vertical: bool,
    /// Start with inverted pixels
    pub inverted: bool,
    /// Clock divide ratio / oscillator frequency register
    pub clock_div: u8,
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            version: CONFIG_VERSION,
            address: DEFAULT_ADDRESS,
            double_buffered: true,
            contrast: 0xCF,
            flip_vertical: false,
            inverted: false,
            // Fastest refresh, ~96 Hz
            clock_div: 0xF0,
        }
    }
}

/// TOML parse error
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ParseError {
    /// Unknown or malformed section header
    InvalidSection,
    /// Value has the wrong type or is out of range
    InvalidValue,
}

/// Config loading errors
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ConfigError {
    /// TOML parsing failed
    TomlParse(ParseError),
    /// Binary encoding failed
    Serialize,
    /// Binary decoding failed
    Deserialize,
    /// Config version mismatch
    VersionMismatch,
}

impl From<ParseError> for ConfigError {
    fn from(e: ParseError) -> Self {
        ConfigError::TomlParse(e)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Section {
    Root,
    Display,
}

/// Parse a TOML config
///
/// Keys missing from the input keep their defaults. Unknown keys are ignored
/// so configs can carry settings for other components.
pub fn parse_config(input: &str) -> Result<DisplayConfig, ParseError> {
    let mut config = DisplayConfig::default();
    let mut section = Section::Root;

    for line in input.lines() {
        let line = line.trim();

        if line.is_empty() || line.starts_with('#') {
            continue;
        }

        if line.starts_with('[') && line.ends_with(']') {
            section = match line[1..line.len() - 1].trim() {
                "display" => Section::Display,
                _ => return Err(ParseError::InvalidSection),
            };
            continue;
        }

        if section != Section::Display {
            continue;
        }
        if let Some((key, value)) = parse_key_value(line) {
            apply_value(&mut config, key, value)?;
        }
    }

    Ok(config)
}

fn apply_value(config: &mut DisplayConfig, key: &str, value: &str) -> Result<(), ParseError> {
    match key {
        "address" => {
            let address: u8 = parse_int(value)?;
            if address > 0x7F {
                return Err(ParseError::InvalidValue);
            }
            config.address = address;
        }
        "double_buffered" => config.double_buffered = parse_bool(value)?,
        "contrast" => config.contrast = parse_int(value)?,
        "flip_vertical" => config.flip_vertical = parse_bool(value)?,
        "inverted" => config.inverted = parse_bool(value)?,
        "clock_div" => config.clock_div = parse_int(value)?,
        _ => {
            #[cfg(feature = "defmt")]
            defmt::debug!("ignoring unknown display key");
        }
    }
    Ok(())
}

/// Split `key = value`, dropping a trailing comment
fn parse_key_value(line: &str) -> Option<(&str, &str)> {
    let eq_pos = line.find('=')?;
    let key = line[..eq_pos].trim();
    let value = line[eq_pos + 1..].trim();

    let value = match value.find('#') {
        Some(hash_pos) => value[..hash_pos].trim(),
        None => value,
    };

    if key.is_empty() || value.is_empty() {
        return None;
    }

    Some((key, value))
}

/// Parse a decimal or `0x` hex integer
fn parse_int<T: TryFrom<u32>>(value: &str) -> Result<T, ParseError> {
    let raw = match value.strip_prefix("0x").or_else(|| value.strip_prefix("0X")) {
        Some(hex) => u32::from_str_radix(hex, 16),
        None => value.parse(),
    }
    .map_err(|_| ParseError::InvalidValue)?;

    T::try_from(raw).map_err(|_| ParseError::InvalidValue)
}

fn parse_bool(value: &str) -> Result<bool, ParseError> {
    match value {
        "true" => Ok(true),
        "false" => Ok(false),
        _ => Err(ParseError::InvalidValue),
    }
}

#[cfg(feature = "serde")]
impl DisplayConfig {
    /// Encode as postcard
    pub fn to_postcard(&self) -> Result<Vec<u8>, ConfigError> {
        postcard::to_allocvec(self).map_err(|_| ConfigError::Serialize)
    }

    /// Decode from postcard, rejecting other format versions
    pub fn from_postcard(bytes: &[u8]) -> Result<Self, ConfigError> {
        let config: DisplayConfig =
            postcard::from_bytes(bytes).map_err(|_| ConfigError::Deserialize)?;

        if config.version != CONFIG_VERSION {
            #[cfg(feature = "defmt")]
            defmt::warn!(
                "Config version mismatch: found {}, expected {}",
                config.version,
                CONFIG_VERSION
            );
            return Err(ConfigError::VersionMismatch);
        }

        Ok(config)
    }
}

/// Load a stored config
///
/// UTF-8 input that looks like TOML is parsed as TOML; anything else falls
/// back to the binary postcard format.
pub fn load_config(bytes: &[u8]) -> Result<DisplayConfig, ConfigError> {
    if let Ok(text) = core::str::from_utf8(bytes) {
        if text.trim_start().starts_with(['[', '#']) {
            let config = parse_config(text)?;
            #[cfg(feature = "defmt")]
            defmt::info!("Loaded TOML display config");
            return Ok(config);
        }
    }

    #[cfg(feature = "serde")]
    {
        DisplayConfig::from_postcard(bytes)
    }
    #[cfg(not(feature = "serde"))]
    {
        Err(ConfigError::Deserialize)
    }
}
