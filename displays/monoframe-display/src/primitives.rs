//! Lines and rectangles
//!
//! Every primitive clips against the canvas before touching memory, so any
//! geometry, including negative sizes, is safe to pass.

use crate::canvas::{Canvas, DrawColor, HEIGHT, WIDTH};

impl Canvas {
    /// Draw a horizontal line of `length` pixels starting at (`x`, `y`)
    pub fn draw_horizontal_line(&mut self, x: i32, y: i32, length: i32, color: DrawColor) {
        if !(0..HEIGHT as i32).contains(&y) {
            return;
        }

        let (mut x, mut length) = (x, length);
        if x < 0 {
            length = length.saturating_add(x);
            x = 0;
        }
        if x.saturating_add(length) > WIDTH as i32 {
            length = WIDTH as i32 - x;
        }
        if length <= 0 {
            return;
        }

        let start = (y as usize >> 3) * WIDTH + x as usize;
        let mask = 1u8 << (y & 7);
        for byte in &mut self.as_bytes_mut()[start..start + length as usize] {
            color.apply(byte, mask);
        }
    }

    /// Draw a vertical line of `length` pixels starting at (`x`, `y`)
    ///
    /// Works a byte at a time: a masked leading byte when `y` is not page
    /// aligned, whole bytes while 8 or more rows remain, then a masked tail.
    pub fn draw_vertical_line(&mut self, x: i32, y: i32, length: i32, color: DrawColor) {
        if !(0..WIDTH as i32).contains(&x) {
            return;
        }

        let (mut y, mut length) = (y, length);
        if y < 0 {
            length = length.saturating_add(y);
            y = 0;
        }
        // Exclusive bound: row HEIGHT is already off the panel.
        if y >= HEIGHT as i32 {
            return;
        }
        length = length.min(HEIGHT as i32 - y);
        if length <= 0 {
            return;
        }

        let column = x as usize;
        let mut page = y as usize >> 3;
        let mut remaining = length as u32;
        let pixels = self.as_bytes_mut();

        let offset = (y & 7) as u32;
        if offset != 0 {
            let span = 8 - offset;
            let mut mask = 0xFFu8 << offset;
            if remaining < span {
                mask &= 0xFF >> (span - remaining);
            }
            color.apply(&mut pixels[page * WIDTH + column], mask);

            if remaining <= span {
                return;
            }
            remaining -= span;
            page += 1;
        }

        while remaining >= 8 {
            color.fill(&mut pixels[page * WIDTH + column]);
            remaining -= 8;
            page += 1;
        }

        if remaining > 0 {
            color.apply(&mut pixels[page * WIDTH + column], (1u8 << remaining) - 1);
        }
    }

    /// Outline a `width` x `height` rectangle
    ///
    /// Each edge pixel is written exactly once, so an [`DrawColor::Invert`]
    /// outline can be undone by drawing it again.
    pub fn draw_rect(&mut self, x: i32, y: i32, width: i32, height: i32, color: DrawColor) {
        if width <= 0 || height <= 0 {
            return;
        }

        let bottom = y.saturating_add(height - 1);
        let right = x.saturating_add(width - 1);

        self.draw_horizontal_line(x, y, width, color);
        if height > 1 {
            self.draw_horizontal_line(x, bottom, width, color);
        }
        if height > 2 {
            self.draw_vertical_line(x, y.saturating_add(1), height - 2, color);
            if width > 1 {
                self.draw_vertical_line(right, y.saturating_add(1), height - 2, color);
            }
        }
    }

    /// Fill a `width` x `height` rectangle
    pub fn fill_rect(&mut self, x: i32, y: i32, width: i32, height: i32, color: DrawColor) {
        if height <= 0 {
            return;
        }
        let first = y.max(0);
        let last = y.saturating_add(height).min(HEIGHT as i32);
        for row in first..last {
            self.draw_horizontal_line(x, row, width, color);
        }
    }

    /// Draw a progress bar: an outline with an inner bar inset by 2 pixels
    ///
    /// `percent` is clamped to 100.
    pub fn draw_progress_bar(
        &mut self,
        x: i32,
        y: i32,
        width: i32,
        height: i32,
        percent: u8,
        color: DrawColor,
    ) {
        self.draw_rect(x, y, width, height, color);

        let inner_width = width.saturating_sub(4);
        let inner_height = height.saturating_sub(4);
        if inner_width <= 0 || inner_height <= 0 {
            return;
        }
        // Widened so wide bars cannot overflow; the result fits inner_width
        let filled = (i64::from(inner_width) * i64::from(percent.min(100)) / 100) as i32;
        self.fill_rect(x.saturating_add(2), y.saturating_add(2), filled, inner_height, color);
    }
}
