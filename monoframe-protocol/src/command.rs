//! Pixel-channel command parsing
//!
//! Text commands are colon-separated ASCII; the first byte selects the
//! command. Binary messages always carry an image replacement.

use core::fmt::Write;

use heapless::String;

use crate::navigation::Navigation;

/// Size of the remote image in bytes (128 columns x 8 pages)
pub const IMAGE_SIZE: usize = 1024;

/// Longest encoded text command (`d:255:65535:65535`)
pub const MAX_TEXT_COMMAND_LEN: usize = 24;

// Text command selectors
const CMD_DRAW: u8 = b'd';
const CMD_CLEAR: u8 = b'c';

/// Field separator for text commands
const SEPARATOR: char = ':';

/// Errors that can occur while parsing or encoding a command
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum CommandError {
    /// Message was empty
    Empty,
    /// First byte does not select a known command
    UnknownCommand,
    /// A required field is absent
    MissingField,
    /// A field is not a number in range
    InvalidField,
    /// Binary payload exceeds the image size
    PayloadTooLarge,
    /// Command has no text encoding
    NotText,
    /// Encoding buffer too small
    BufferTooSmall,
}

/// A command received on the pixel channel
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Command<'a> {
    /// Set one pixel of the remote image
    SetPixel { color: u8, x: u16, y: u16 },
    /// Clear the remote image
    Clear,
    /// Replace the remote image with a column-major payload
    Replace(&'a [u8]),
    /// Frame navigation for the frame scheduler
    Navigate(Navigation),
}

impl<'a> Command<'a> {
    /// Parse a text message
    ///
    /// Trailing bytes after a single-byte command, and fields after the
    /// third field of a draw command, are ignored.
    pub fn parse_text(text: &str) -> Result<Self, CommandError> {
        let selector = *text.as_bytes().first().ok_or(CommandError::Empty)?;

        match selector {
            CMD_DRAW => {
                let mut fields = text.split(SEPARATOR).skip(1);
                let color = parse_field::<u8>(fields.next())?;
                let x = parse_field::<u16>(fields.next())?;
                let y = parse_field::<u16>(fields.next())?;
                Ok(Command::SetPixel { color, x, y })
            }
            CMD_CLEAR => Ok(Command::Clear),
            other => Navigation::from_byte(other)
                .map(Command::Navigate)
                .ok_or(CommandError::UnknownCommand),
        }
    }

    /// Wrap a binary message as an image replacement
    pub fn from_binary(payload: &'a [u8]) -> Result<Self, CommandError> {
        if payload.len() > IMAGE_SIZE {
            return Err(CommandError::PayloadTooLarge);
        }
        Ok(Command::Replace(payload))
    }

    /// Encode this command as a text message (for testing or simulation)
    pub fn to_text(&self) -> Result<String<MAX_TEXT_COMMAND_LEN>, CommandError> {
        let mut out = String::new();
        match self {
            Command::SetPixel { color, x, y } => {
                write!(out, "d:{}:{}:{}", color, x, y).map_err(|_| CommandError::BufferTooSmall)?
            }
            Command::Clear => out
                .push(CMD_CLEAR as char)
                .map_err(|_| CommandError::BufferTooSmall)?,
            Command::Navigate(nav) => out
                .push(nav.to_byte() as char)
                .map_err(|_| CommandError::BufferTooSmall)?,
            Command::Replace(_) => return Err(CommandError::NotText),
        }
        Ok(out)
    }
}

fn parse_field<T: core::str::FromStr>(field: Option<&str>) -> Result<T, CommandError> {
    field
        .ok_or(CommandError::MissingField)?
        .trim()
        .parse()
        .map_err(|_| CommandError::InvalidField)
}
