//! Jump-table font resources
//!
//! Font blob layout:
//!
//! ```text
//! ┌────────┬────────────┬───────────┬──────────────────────┬─────────────┐
//! │ HEIGHT │ FIRST_CHAR │ CHAR_NUM  │ JUMP TABLE           │ GLYPH DATA  │
//! │ 1B     │ 1B         │ 1B        │ CHAR_NUM x 4B        │ ...         │
//! └────────┴────────────┴───────────┴──────────────────────┴─────────────┘
//!
//! jump table entry: [offset MSB][offset LSB][byte size][advance width]
//! ```
//!
//! Offsets are relative to the start of the glyph data. An offset of
//! `0xFFFF` marks a glyph with no bitmap (a space, usually) that still
//! advances the pen. Glyph bitmaps are column-major, `ceil(height / 8)`
//! bytes per column, and may omit trailing blank columns.

const HEIGHT_POS: usize = 0;
const FIRST_CHAR_POS: usize = 1;
const CHAR_NUM_POS: usize = 2;

/// Size of the font header
pub const HEADER_LEN: usize = 3;

/// Size of one jump-table entry
pub const JUMP_TABLE_ENTRY_LEN: usize = 4;

/// Offset marking a glyph without a bitmap
pub const NO_BITMAP: u16 = 0xFFFF;

/// Errors found while validating a font blob
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum FontError {
    /// Blob is shorter than the header
    MissingHeader,
    /// Glyph height is zero
    ZeroHeight,
    /// Blob ends inside the jump table
    TruncatedJumpTable,
    /// A glyph's bitmap extends past the end of the blob
    GlyphOutOfBounds {
        /// Character code of the offending glyph
        code: u8,
    },
}

/// A glyph as described by the jump table
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Glyph<'a> {
    /// Pen advance in pixels
    pub width: u8,
    /// Packed bitmap, or `None` for a non-renderable glyph
    pub bitmap: Option<&'a [u8]>,
}

/// Read-only, validated view over a font blob
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Font<'a> {
    data: &'a [u8],
}

impl<'a> Font<'a> {
    /// Validate a font blob
    ///
    /// Checks the header, the jump table bounds and that every glyph bitmap
    /// lies inside the blob, so later lookups cannot fail.
    pub fn new(data: &'a [u8]) -> Result<Self, FontError> {
        if data.len() < HEADER_LEN {
            return Err(FontError::MissingHeader);
        }
        if data[HEIGHT_POS] == 0 {
            return Err(FontError::ZeroHeight);
        }

        let font = Self { data };
        if data.len() < font.glyph_data_start() {
            return Err(FontError::TruncatedJumpTable);
        }

        let glyph_data_len = data.len() - font.glyph_data_start();
        for index in 0..font.glyph_count() {
            let entry = font.entry(index);
            let offset = u16::from_be_bytes([entry[0], entry[1]]);
            if offset == NO_BITMAP {
                continue;
            }
            if offset as usize + entry[2] as usize > glyph_data_len {
                return Err(FontError::GlyphOutOfBounds {
                    code: font.first_char().wrapping_add(index as u8),
                });
            }
        }

        Ok(font)
    }

    /// Glyph height in pixels (also the line height)
    pub fn height(&self) -> u8 {
        self.data[HEIGHT_POS]
    }

    /// First character code covered by the font
    pub fn first_char(&self) -> u8 {
        self.data[FIRST_CHAR_POS]
    }

    /// Number of jump-table entries
    pub fn glyph_count(&self) -> usize {
        self.data[CHAR_NUM_POS] as usize
    }

    /// Look up the glyph for a character code
    ///
    /// Returns `None` for codes outside the font's range.
    pub fn glyph(&self, code: u8) -> Option<Glyph<'a>> {
        let index = code.checked_sub(self.first_char())? as usize;
        if index >= self.glyph_count() {
            return None;
        }

        let entry = self.entry(index);
        let offset = u16::from_be_bytes([entry[0], entry[1]]);
        let bitmap = if offset == NO_BITMAP {
            None
        } else {
            let start = self.glyph_data_start() + offset as usize;
            Some(&self.data[start..start + entry[2] as usize])
        };

        Some(Glyph {
            width: entry[3],
            bitmap,
        })
    }

    /// Pen advance for a character code; 0 when the font has no entry
    pub fn char_width(&self, code: u8) -> u8 {
        let Some(index) = code.checked_sub(self.first_char()) else {
            return 0;
        };
        if (index as usize) < self.glyph_count() {
            self.entry(index as usize)[3]
        } else {
            0
        }
    }

    /// The underlying blob
    pub fn as_bytes(&self) -> &'a [u8] {
        self.data
    }

    fn entry(&self, index: usize) -> &'a [u8] {
        let start = HEADER_LEN + index * JUMP_TABLE_ENTRY_LEN;
        &self.data[start..start + JUMP_TABLE_ENTRY_LEN]
    }

    fn glyph_data_start(&self) -> usize {
        HEADER_LEN + self.glyph_count() * JUMP_TABLE_ENTRY_LEN
    }
}
