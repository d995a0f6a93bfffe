//! Raw pixel-command channel for Monoframe displays
//!
//! A remote controller (a browser over a WebSocket, a serial console) feeds a
//! display two kinds of messages:
//!
//! - **Text** messages: short ASCII commands
//! - **Binary** messages: a wholesale replacement of the remote image
//!
//! ```text
//! d:<color>:<x>:<y>   set one pixel of the remote image
//! c                   clear the remote image
//! n | p               next / previous frame
//! a | e               pause / resume automatic frame rotation
//! <binary, ≤1024B>    replace the remote image (column-major, 8 bytes/column)
//! ```
//!
//! This crate only parses and encodes these messages. The display crate owns
//! the image buffer they act on.

#![cfg_attr(not(test), no_std)]
#![deny(unsafe_code)]

pub mod command;
pub mod navigation;

pub use command::{Command, CommandError, IMAGE_SIZE, MAX_TEXT_COMMAND_LEN};
pub use navigation::Navigation;
