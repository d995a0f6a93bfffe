//! Built-in fonts
//!
//! Fonts are stored in the jump-table format read by [`Font`](crate::font::Font).

/// 6x8 ASCII font, `0x20..=0x7E`
///
/// Glyphs are 5 pixels wide with a blank sixth column for spacing; the
/// blank column is not stored. The space glyph has no bitmap.
pub static FONT_6X8: [u8; 824] = [
    // height, first char, glyph count
    0x08, 0x20, 0x5F,
    // jump table: offset MSB, offset LSB, byte size, width
    0xFF, 0xFF, 0x00, 0x06, // ' '
    0x00, 0x00, 0x03, 0x06, // '!'
    0x00, 0x03, 0x04, 0x06, // '"'
    0x00, 0x07, 0x05, 0x06, // '#'
    0x00, 0x0C, 0x05, 0x06, // '$'
    0x00, 0x11, 0x05, 0x06, // '%'
    0x00, 0x16, 0x05, 0x06, // '&'
    0x00, 0x1B, 0x03, 0x06, // '\''
    0x00, 0x1E, 0x04, 0x06, // '('
    0x00, 0x22, 0x04, 0x06, // ')'
    0x00, 0x26, 0x05, 0x06, // '*'
    0x00, 0x2B, 0x05, 0x06, // '+'
    0x00, 0x30, 0x03, 0x06, // ','
    0x00, 0x33, 0x05, 0x06, // '-'
    0x00, 0x38, 0x03, 0x06, // '.'
    0x00, 0x3B, 0x05, 0x06, // '/'
    0x00, 0x40, 0x05, 0x06, // '0'
    0x00, 0x45, 0x04, 0x06, // '1'
    0x00, 0x49, 0x05, 0x06, // '2'
    0x00, 0x4E, 0x05, 0x06, // '3'
    0x00, 0x53, 0x05, 0x06, // '4'
    0x00, 0x58, 0x05, 0x06, // '5'
    0x00, 0x5D, 0x05, 0x06, // '6'
    0x00, 0x62, 0x05, 0x06, // '7'
    0x00, 0x67, 0x05, 0x06, // '8'
    0x00, 0x6C, 0x05, 0x06, // '9'
    0x00, 0x71, 0x03, 0x06, // ':'
    0x00, 0x74, 0x03, 0x06, // ';'
    0x00, 0x77, 0x04, 0x06, // '<'
    0x00, 0x7B, 0x05, 0x06, // '='
    0x00, 0x80, 0x05, 0x06, // '>'
    0x00, 0x85, 0x05, 0x06, // '?'
    0x00, 0x8A, 0x05, 0x06, // '@'
    0x00, 0x8F, 0x05, 0x06, // 'A'
    0x00, 0x94, 0x05, 0x06, // 'B'
    0x00, 0x99, 0x05, 0x06, // 'C'
    0x00, 0x9E, 0x05, 0x06, // 'D'
    0x00, 0xA3, 0x05, 0x06, // 'E'
    0x00, 0xA8, 0x05, 0x06, // 'F'
    0x00, 0xAD, 0x05, 0x06, // 'G'
    0x00, 0xB2, 0x05, 0x06, // 'H'
    0x00, 0xB7, 0x04, 0x06, // 'I'
    0x00, 0xBB, 0x05, 0x06, // 'J'
    0x00, 0xC0, 0x05, 0x06, // 'K'
    0x00, 0xC5, 0x05, 0x06, // 'L'
    0x00, 0xCA, 0x05, 0x06, // 'M'
    0x00, 0xCF, 0x05, 0x06, // 'N'
    0x00, 0xD4, 0x05, 0x06, // 'O'
    0x00, 0xD9, 0x05, 0x06, // 'P'
    0x00, 0xDE, 0x05, 0x06, // 'Q'
    0x00, 0xE3, 0x05, 0x06, // 'R'
    0x00, 0xE8, 0x05, 0x06, // 'S'
    0x00, 0xED, 0x05, 0x06, // 'T'
    0x00, 0xF2, 0x05, 0x06, // 'U'
    0x00, 0xF7, 0x05, 0x06, // 'V'
    0x00, 0xFC, 0x05, 0x06, // 'W'
    0x01, 0x01, 0x05, 0x06, // 'X'
    0x01, 0x06, 0x05, 0x06, // 'Y'
    0x01, 0x0B, 0x05, 0x06, // 'Z'
    0x01, 0x10, 0x04, 0x06, // '['
    0x01, 0x14, 0x05, 0x06, // '\\'
    0x01, 0x19, 0x04, 0x06, // ']'
    0x01, 0x1D, 0x05, 0x06, // '^'
    0x01, 0x22, 0x05, 0x06, // '_'
    0x01, 0x27, 0x04, 0x06, // '`'
    0x01, 0x2B, 0x05, 0x06, // 'a'
    0x01, 0x30, 0x05, 0x06, // 'b'
    0x01, 0x35, 0x05, 0x06, // 'c'
    0x01, 0x3A, 0x05, 0x06, // 'd'
    0x01, 0x3F, 0x05, 0x06, // 'e'
    0x01, 0x44, 0x05, 0x06, // 'f'
    0x01, 0x49, 0x05, 0x06, // 'g'
    0x01, 0x4E, 0x05, 0x06, // 'h'
    0x01, 0x53, 0x04, 0x06, // 'i'
    0x01, 0x57, 0x04, 0x06, // 'j'
    0x01, 0x5B, 0x04, 0x06, // 'k'
    0x01, 0x5F, 0x04, 0x06, // 'l'
    0x01, 0x63, 0x05, 0x06, // 'm'
    0x01, 0x68, 0x05, 0x06, // 'n'
    0x01, 0x6D, 0x05, 0x06, // 'o'
    0x01, 0x72, 0x05, 0x06, // 'p'
    0x01, 0x77, 0x05, 0x06, // 'q'
    0x01, 0x7C, 0x05, 0x06, // 'r'
    0x01, 0x81, 0x05, 0x06, // 's'
    0x01, 0x86, 0x05, 0x06, // 't'
    0x01, 0x8B, 0x05, 0x06, // 'u'
    0x01, 0x90, 0x05, 0x06, // 'v'
    0x01, 0x95, 0x05, 0x06, // 'w'
    0x01, 0x9A, 0x05, 0x06, // 'x'
    0x01, 0x9F, 0x05, 0x06, // 'y'
    0x01, 0xA4, 0x05, 0x06, // 'z'
    0x01, 0xA9, 0x04, 0x06, // '{'
    0x01, 0xAD, 0x03, 0x06, // '|'
    0x01, 0xB0, 0x04, 0x06, // '}'
    0x01, 0xB4, 0x05, 0x06, // '~'
    // glyph data
    0x00, 0x00, 0x5F, // '!'
    0x00, 0x07, 0x00, 0x07, // '"'
    0x14, 0x7F, 0x14, 0x7F, 0x14, // '#'
    0x24, 0x2A, 0x7F, 0x2A, 0x12, // '$'
    0x23, 0x13, 0x08, 0x64, 0x62, // '%'
    0x36, 0x49, 0x55, 0x22, 0x50, // '&'
    0x00, 0x05, 0x03, // '\''
    0x00, 0x1C, 0x22, 0x41, // '('
    0x00, 0x41, 0x22, 0x1C, // ')'
    0x08, 0x2A, 0x1C, 0x2A, 0x08, // '*'
    0x08, 0x08, 0x3E, 0x08, 0x08, // '+'
    0x00, 0x80, 0x60, // ','
    0x08, 0x08, 0x08, 0x08, 0x08, // '-'
    0x00, 0x60, 0x60, // '.'
    0x20, 0x10, 0x08, 0x04, 0x02, // '/'
    0x3E, 0x51, 0x49, 0x45, 0x3E, // '0'
    0x00, 0x42, 0x7F, 0x40, // '1'
    0x42, 0x61, 0x51, 0x49, 0x46, // '2'
    0x21, 0x41, 0x45, 0x4B, 0x31, // '3'
    0x18, 0x14, 0x12, 0x7F, 0x10, // '4'
    0x27, 0x45, 0x45, 0x45, 0x39, // '5'
    0x3C, 0x4A, 0x49, 0x49, 0x30, // '6'
    0x01, 0x71, 0x09, 0x05, 0x03, // '7'
    0x36, 0x49, 0x49, 0x49, 0x36, // '8'
    0x06, 0x49, 0x49, 0x29, 0x1E, // '9'
    0x00, 0x36, 0x36, // ':'
    0x00, 0x80, 0x66, // ';'
    0x08, 0x14, 0x22, 0x41, // '<'
    0x14, 0x14, 0x14, 0x14, 0x14, // '='
    0x00, 0x41, 0x22, 0x14, 0x08, // '>'
    0x02, 0x01, 0x51, 0x09, 0x06, // '?'
    0x32, 0x49, 0x79, 0x41, 0x3E, // '@'
    0x7E, 0x11, 0x11, 0x11, 0x7E, // 'A'
    0x7F, 0x49, 0x49, 0x49, 0x36, // 'B'
    0x3E, 0x41, 0x41, 0x41, 0x22, // 'C'
    0x7F, 0x41, 0x41, 0x22, 0x1C, // 'D'
    0x7F, 0x49, 0x49, 0x49, 0x41, // 'E'
    0x7F, 0x09, 0x09, 0x09, 0x01, // 'F'
    0x3E, 0x41, 0x49, 0x49, 0x7A, // 'G'
    0x7F, 0x08, 0x08, 0x08, 0x7F, // 'H'
    0x00, 0x41, 0x7F, 0x41, // 'I'
    0x20, 0x40, 0x41, 0x3F, 0x01, // 'J'
    0x7F, 0x08, 0x14, 0x22, 0x41, // 'K'
    0x7F, 0x40, 0x40, 0x40, 0x40, // 'L'
    0x7F, 0x02, 0x0C, 0x02, 0x7F, // 'M'
    0x7F, 0x04, 0x08, 0x10, 0x7F, // 'N'
    0x3E, 0x41, 0x41, 0x41, 0x3E, // 'O'
    0x7F, 0x09, 0x09, 0x09, 0x06, // 'P'
    0x3E, 0x41, 0x51, 0x21, 0x5E, // 'Q'
    0x7F, 0x09, 0x19, 0x29, 0x46, // 'R'
    0x46, 0x49, 0x49, 0x49, 0x31, // 'S'
    0x01, 0x01, 0x7F, 0x01, 0x01, // 'T'
    0x3F, 0x40, 0x40, 0x40, 0x3F, // 'U'
    0x1F, 0x20, 0x40, 0x20, 0x1F, // 'V'
    0x7F, 0x20, 0x18, 0x20, 0x7F, // 'W'
    0x63, 0x14, 0x08, 0x14, 0x63, // 'X'
    0x03, 0x04, 0x78, 0x04, 0x03, // 'Y'
    0x61, 0x51, 0x49, 0x45, 0x43, // 'Z'
    0x00, 0x7F, 0x41, 0x41, // '['
    0x02, 0x04, 0x08, 0x10, 0x20, // '\\'
    0x00, 0x41, 0x41, 0x7F, // ']'
    0x04, 0x02, 0x01, 0x02, 0x04, // '^'
    0x40, 0x40, 0x40, 0x40, 0x40, // '_'
    0x00, 0x01, 0x02, 0x04, // '`'
    0x20, 0x54, 0x54, 0x54, 0x78, // 'a'
    0x7F, 0x48, 0x44, 0x44, 0x38, // 'b'
    0x38, 0x44, 0x44, 0x44, 0x20, // 'c'
    0x38, 0x44, 0x44, 0x48, 0x7F, // 'd'
    0x38, 0x54, 0x54, 0x54, 0x18, // 'e'
    0x08, 0x7E, 0x09, 0x01, 0x02, // 'f'
    0x08, 0x14, 0x54, 0x54, 0x3C, // 'g'
    0x7F, 0x08, 0x04, 0x04, 0x78, // 'h'
    0x00, 0x44, 0x7D, 0x40, // 'i'
    0x20, 0x40, 0x44, 0x3D, // 'j'
    0x7F, 0x10, 0x28, 0x44, // 'k'
    0x00, 0x41, 0x7F, 0x40, // 'l'
    0x7C, 0x04, 0x18, 0x04, 0x78, // 'm'
    0x7C, 0x08, 0x04, 0x04, 0x78, // 'n'
    0x38, 0x44, 0x44, 0x44, 0x38, // 'o'
    0x7C, 0x14, 0x14, 0x14, 0x08, // 'p'
    0x08, 0x14, 0x14, 0x18, 0x7C, // 'q'
    0x7C, 0x08, 0x04, 0x04, 0x08, // 'r'
    0x48, 0x54, 0x54, 0x54, 0x20, // 's'
    0x04, 0x3F, 0x44, 0x40, 0x20, // 't'
    0x3C, 0x40, 0x40, 0x20, 0x7C, // 'u'
    0x1C, 0x20, 0x40, 0x20, 0x1C, // 'v'
    0x3C, 0x40, 0x30, 0x40, 0x3C, // 'w'
    0x44, 0x28, 0x10, 0x28, 0x44, // 'x'
    0x0C, 0x50, 0x50, 0x50, 0x3C, // 'y'
    0x44, 0x64, 0x54, 0x4C, 0x44, // 'z'
    0x00, 0x08, 0x36, 0x41, // '{'
    0x00, 0x00, 0x7F, // '|'
    0x00, 0x41, 0x36, 0x08, // '}'
    0x10, 0x08, 0x08, 0x10, 0x08, // '~'
];
