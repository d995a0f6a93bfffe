//! Monochrome framebuffer engine for 128x64 SSD1306 OLEDs
//!
//! This crate provides:
//! - `Canvas`: the bit-packed pixel buffer, in the controller's page layout
//! - Drawing primitives, bitmap blits and word-wrapped text on the canvas
//! - `Font`: validated jump-table fonts, plus the built-in `FONT_6X8`
//! - `Ssd1306`: the controller driver with diffing sync over async I2C
//! - `RemoteImage`: the image buffer fed by the pixel-command channel
//!
//! # Architecture
//!
//! All drawing is synchronous and touches only the canvas. The bus is used
//! by [`Ssd1306::flush`], which asks the configured [`SyncMode`] what
//! changed and streams just that window:
//!
//! - **Full frame**: every flush sends all 1024 bytes.
//! - **Double buffered**: the canvas is diffed against a shadow of the last
//!   transmitted frame; a single changed pixel costs one payload byte.
//!
//! Scans and transfers yield to the executor after every page row, so other
//! tasks keep running during a flush.

#![cfg_attr(not(test), no_std)]
#![deny(unsafe_code)]

extern crate alloc;

pub mod blit;
pub mod canvas;
pub mod config;
pub mod error;
pub mod font;
pub mod fonts;
pub mod primitives;
pub mod remote;
pub mod ssd1306;
pub mod sync;
pub mod text;
pub mod transliterate;

#[cfg(test)]
mod testing;

// Re-export key types
pub use blit::BitOrder;
pub use canvas::{Canvas, DrawColor, BUFFER_SIZE, HEIGHT, PAGES, WIDTH};
pub use config::{load_config, parse_config, ConfigError, DisplayConfig, ParseError};
pub use error::DisplayError;
pub use font::{Font, FontError, Glyph};
pub use fonts::FONT_6X8;
pub use remote::RemoteImage;
pub use ssd1306::Ssd1306;
pub use sync::{DoubleBuffered, FrameSync, FullFrame, Region, SyncMode};
pub use text::{Segment, TextAlignment, TextStyle, WordWrap};
pub use transliterate::transliterate;
