//! Bit-packed pixel canvas
//!
//! The canvas mirrors the controller's GDDRAM layout: 8 pages of 128 bytes,
//! each byte holding 8 vertically stacked pixels with bit 0 at the top.
//!
//! ```text
//!          col 0   col 1        col 127
//! page 0 [ b0..b7 ][ b0..b7 ] ... [ .. ]   rows 0-7
//! page 1 [ b0..b7 ][ b0..b7 ] ... [ .. ]   rows 8-15
//!   ...
//! page 7 [ b0..b7 ][ b0..b7 ] ... [ .. ]   rows 56-63
//! ```

use alloc::vec::Vec;

use crate::error::DisplayError;

/// Display width in pixels
pub const WIDTH: usize = 128;

/// Display height in pixels
pub const HEIGHT: usize = 64;

/// Number of 8-pixel pages
pub const PAGES: usize = HEIGHT.div_ceil(8);

/// Canvas size in bytes
pub const BUFFER_SIZE: usize = WIDTH * PAGES;

/// How a write combines with the bits already on the canvas
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum DrawColor {
    /// Turn pixels on (OR)
    #[default]
    Set,
    /// Turn pixels off (AND-NOT)
    Clear,
    /// Toggle pixels (XOR)
    Invert,
}

impl DrawColor {
    /// Apply `mask` to `byte` with this composition mode
    #[inline]
    pub fn apply(self, byte: &mut u8, mask: u8) {
        match self {
            DrawColor::Set => *byte |= mask,
            DrawColor::Clear => *byte &= !mask,
            DrawColor::Invert => *byte ^= mask,
        }
    }

    /// Overwrite a whole byte; O(1) regardless of mode
    #[inline]
    pub(crate) fn fill(self, byte: &mut u8) {
        match self {
            DrawColor::Set => *byte = 0xFF,
            DrawColor::Clear => *byte = 0x00,
            DrawColor::Invert => *byte = !*byte,
        }
    }
}

/// Owned 128x64 1-bit canvas
#[derive(Clone, PartialEq, Eq)]
pub struct Canvas {
    pixels: Vec<u8>,
}

impl Canvas {
    /// Allocate a cleared canvas
    ///
    /// Fails with [`DisplayError::OutOfMemory`] instead of aborting when the
    /// heap cannot hold the buffer.
    pub fn try_new() -> Result<Self, DisplayError> {
        let mut pixels = Vec::new();
        pixels
            .try_reserve_exact(BUFFER_SIZE)
            .map_err(|_| DisplayError::OutOfMemory)?;
        pixels.resize(BUFFER_SIZE, 0);
        Ok(Self { pixels })
    }

    /// Clear every pixel
    pub fn clear(&mut self) {
        self.pixels.fill(0);
    }

    /// Fill every byte with `value`
    pub fn fill(&mut self, value: u8) {
        self.pixels.fill(value);
    }

    /// Raw bytes in page-major order
    pub fn as_bytes(&self) -> &[u8] {
        &self.pixels
    }

    /// Mutable raw bytes in page-major order
    pub fn as_bytes_mut(&mut self) -> &mut [u8] {
        &mut self.pixels
    }

    /// One page (8 pixel rows) of the canvas
    ///
    /// # Panics
    /// If `page >= PAGES`.
    pub fn page(&self, page: usize) -> &[u8] {
        &self.pixels[page * WIDTH..(page + 1) * WIDTH]
    }

    pub(crate) fn page_mut(&mut self, page: usize) -> &mut [u8] {
        &mut self.pixels[page * WIDTH..(page + 1) * WIDTH]
    }

    /// Read a pixel; out-of-range coordinates read as off
    pub fn pixel(&self, x: i32, y: i32) -> bool {
        match Self::pixel_index(x, y) {
            Some(index) => self.pixels[index] & (1 << (y & 7)) != 0,
            None => false,
        }
    }

    /// Apply `color` to a single pixel; no-op outside the canvas
    pub fn set_pixel(&mut self, x: i32, y: i32, color: DrawColor) {
        if let Some(index) = Self::pixel_index(x, y) {
            color.apply(&mut self.pixels[index], 1 << (y & 7));
        }
    }

    /// Apply `bits` to the byte at (`column`, `page`); skipped when either
    /// coordinate is off the canvas
    #[inline]
    pub(crate) fn apply_byte(&mut self, column: i32, page: i32, bits: u8, color: DrawColor) {
        if let Some(index) = Self::byte_index(column, page) {
            color.apply(&mut self.pixels[index], bits);
        }
    }

    /// Byte offset of pixel (`x`, `y`), if on the canvas
    #[inline]
    pub(crate) fn pixel_index(x: i32, y: i32) -> Option<usize> {
        if (0..HEIGHT as i32).contains(&y) {
            Self::byte_index(x, y >> 3)
        } else {
            None
        }
    }

    /// Byte offset of (`column`, `page`), if on the canvas
    #[inline]
    pub(crate) fn byte_index(column: i32, page: i32) -> Option<usize> {
        if (0..WIDTH as i32).contains(&column) && (0..PAGES as i32).contains(&page) {
            Some(page as usize * WIDTH + column as usize)
        } else {
            None
        }
    }
}

impl core::fmt::Debug for Canvas {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        let lit = self.pixels.iter().map(|b| b.count_ones()).sum::<u32>();
        f.debug_struct("Canvas").field("lit_pixels", &lit).finish()
    }
}
