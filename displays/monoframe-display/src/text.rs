//! Text layout
//!
//! Text is laid out in the font's 8-bit code page. The `*_str` entry points
//! accept UTF-8 and run it through [`transliterate`] first; the byte-slice
//! entry points expect already-encoded text.
//!
//! - [`Canvas::draw_text`]: one line per `'\n'`, empty lines skipped
//! - [`Canvas::draw_text_max_width`]: greedy word-wrap, see [`WordWrap`]

use heapless::Vec;

use crate::canvas::{Canvas, DrawColor, HEIGHT, WIDTH};
use crate::font::Font;
use crate::transliterate::transliterate;

/// Longest UTF-8 string accepted by the `*_str` entry points, after
/// transliteration; longer text is truncated
pub const MAX_TEXT_LEN: usize = 256;

const LINE_BREAK: u8 = b'\n';

/// Where the anchor point sits relative to the rendered text
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum TextAlignment {
    /// Anchor is the top-left corner
    #[default]
    Left,
    /// Anchor is the top-right corner
    Right,
    /// Anchor is the top edge, horizontally centered
    CenterHorizontal,
    /// Anchor is the center of the text block
    CenterBoth,
}

/// Font, alignment and color for a text draw call
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TextStyle<'f> {
    pub font: Font<'f>,
    pub alignment: TextAlignment,
    pub color: DrawColor,
}

impl<'f> TextStyle<'f> {
    /// Left-aligned, [`DrawColor::Set`] text in `font`
    pub fn new(font: Font<'f>) -> Self {
        Self {
            font,
            alignment: TextAlignment::Left,
            color: DrawColor::Set,
        }
    }

    pub fn with_alignment(mut self, alignment: TextAlignment) -> Self {
        self.alignment = alignment;
        self
    }

    pub fn with_color(mut self, color: DrawColor) -> Self {
        self.color = color;
        self
    }
}

impl Font<'_> {
    /// Summed advance of every character in `line`
    pub fn line_width(&self, line: &[u8]) -> u32 {
        line.iter().map(|&code| u32::from(self.char_width(code))).sum()
    }

    /// Width of the widest line in `text`
    pub fn text_width(&self, text: &[u8]) -> u32 {
        text.split(|&code| code == LINE_BREAK)
            .map(|line| self.line_width(line))
            .max()
            .unwrap_or(0)
    }

    /// Width of the widest line of a UTF-8 string
    pub fn str_width(&self, text: &str) -> u32 {
        self.text_width(&encode(text))
    }
}

/// One wrapped line: `text[start..end]`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Segment {
    pub start: usize,
    pub end: usize,
    /// Width used to align the line; for a break at a space this includes
    /// the consumed space
    pub width: u32,
}

#[derive(Debug, Clone, Copy)]
struct Breakpoint {
    end: usize,
    resume: usize,
    width: u32,
}

/// Greedy word-wrap over encoded text
///
/// Characters accumulate until the line width reaches `max_width`. The line
/// then ends at the last space or dash seen on it, which is consumed; with
/// no such breakpoint it is split mid-word before the overflowing character.
/// A single character wider than `max_width` gets a line of its own.
#[derive(Debug, Clone)]
pub struct WordWrap<'t, 'f> {
    text: &'t [u8],
    font: Font<'f>,
    max_width: u32,
    pos: usize,
}

impl<'t, 'f> WordWrap<'t, 'f> {
    pub fn new(text: &'t [u8], font: Font<'f>, max_width: u32) -> Self {
        Self {
            text,
            font,
            max_width,
            pos: 0,
        }
    }
}

impl Iterator for WordWrap<'_, '_> {
    type Item = Segment;

    fn next(&mut self) -> Option<Segment> {
        let len = self.text.len();
        if self.pos >= len {
            return None;
        }

        let start = self.pos;
        let mut width = 0u32;
        let mut breakpoint: Option<Breakpoint> = None;

        for i in start..len {
            let code = self.text[i];
            let advance = u32::from(self.font.char_width(code));
            width += advance;

            if (code == b' ' || code == b'-') && i > start {
                breakpoint = Some(Breakpoint {
                    end: i,
                    resume: i + 1,
                    width,
                });
            }

            if width >= self.max_width {
                let split = match breakpoint {
                    Some(split) => split,
                    None if i == start => Breakpoint {
                        end: i + 1,
                        resume: i + 1,
                        width,
                    },
                    None => Breakpoint {
                        end: i,
                        resume: i,
                        width: width - advance,
                    },
                };
                self.pos = split.resume;
                return Some(Segment {
                    start,
                    end: split.end,
                    width: split.width,
                });
            }
        }

        self.pos = len;
        Some(Segment {
            start,
            end: len,
            width,
        })
    }
}

impl Canvas {
    /// Draw encoded text, one line per `'\n'`
    ///
    /// With [`TextAlignment::CenterBoth`] the whole block is centered
    /// vertically on `y`.
    pub fn draw_text(&mut self, x: i32, y: i32, text: &[u8], style: &TextStyle<'_>) {
        let line_height = i32::from(style.font.height());

        let mut top = y;
        if style.alignment == TextAlignment::CenterBoth {
            let breaks = text.iter().filter(|&&code| code == LINE_BREAK).count() as i32;
            top = top.saturating_sub(breaks.saturating_mul(line_height) / 2);
        }

        let lines = text
            .split(|&code| code == LINE_BREAK)
            .filter(|line| !line.is_empty());
        for (row, line) in lines.enumerate() {
            let width = style.font.line_width(line) as i32;
            let line_y = top.saturating_add((row as i32).saturating_mul(line_height));
            self.draw_line(x, line_y, line, width, style);
        }
    }

    /// Draw encoded text wrapped to `max_width` pixels
    pub fn draw_text_max_width(
        &mut self,
        x: i32,
        y: i32,
        max_width: u32,
        text: &[u8],
        style: &TextStyle<'_>,
    ) {
        let line_height = i32::from(style.font.height());
        for (row, segment) in WordWrap::new(text, style.font, max_width).enumerate() {
            let line_y = y.saturating_add((row as i32).saturating_mul(line_height));
            let line = &text[segment.start..segment.end];
            self.draw_line(x, line_y, line, segment.width as i32, style);
        }
    }

    /// Draw UTF-8 text, one line per `'\n'`
    pub fn draw_str(&mut self, x: i32, y: i32, text: &str, style: &TextStyle<'_>) {
        self.draw_text(x, y, &encode(text), style);
    }

    /// Draw UTF-8 text wrapped to `max_width` pixels
    pub fn draw_str_max_width(
        &mut self,
        x: i32,
        y: i32,
        max_width: u32,
        text: &str,
        style: &TextStyle<'_>,
    ) {
        self.draw_text_max_width(x, y, max_width, &encode(text), style);
    }

    /// Render one line; `width` is the width used for alignment
    fn draw_line(&mut self, x: i32, y: i32, line: &[u8], width: i32, style: &TextStyle<'_>) {
        let font = &style.font;
        let height = i32::from(font.height());

        let (mut x, mut y) = (x, y);
        match style.alignment {
            TextAlignment::CenterBoth => {
                y = y.saturating_sub(height >> 1);
                x = x.saturating_sub(width >> 1);
            }
            TextAlignment::CenterHorizontal => x = x.saturating_sub(width >> 1),
            TextAlignment::Right => x = x.saturating_sub(width),
            TextAlignment::Left => {}
        }

        // Nothing of this line can land on the canvas
        if x.saturating_add(width) < 0 || x >= WIDTH as i32 {
            return;
        }
        if y.saturating_add(height) < 0 || y >= HEIGHT as i32 {
            return;
        }

        let mut cursor = x;
        for &code in line {
            let Some(glyph) = font.glyph(code) else {
                continue;
            };
            let advance = i32::from(glyph.width);
            if let Some(bitmap) = glyph.bitmap {
                self.draw_bitmap(cursor, y, advance, height, bitmap, style.color);
            }
            cursor = cursor.saturating_add(advance);
        }
    }
}

/// Transliterate UTF-8 into the font code page
fn encode(text: &str) -> Vec<u8, MAX_TEXT_LEN> {
    let mut out = Vec::new();
    for code in transliterate(text.bytes()) {
        if out.push(code).is_err() {
            #[cfg(feature = "defmt")]
            defmt::warn!("text truncated to {} bytes", MAX_TEXT_LEN);
            break;
        }
    }
    out
}
