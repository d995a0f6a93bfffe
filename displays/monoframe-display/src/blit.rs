//! Bitmap blitting
//!
//! Two source encodings are supported:
//!
//! - **Column-major packed** (the canvas' own format): each source column is
//!   `ceil(height / 8)` bytes, bit 0 at the top. Used for fonts and full-frame
//!   images, and composited a byte at a time by [`Canvas::draw_bitmap`].
//! - **Row-major** 1-bit images (XBM and friends): `ceil(width / 8)` bytes
//!   per row, drawn pixel by pixel by [`Canvas::draw_row_major`].
//!
//! When the destination `y` is not a multiple of 8, every packed source byte
//! straddles two canvas pages:
//!
//! ```text
//! y = 11 (page 1, offset 3)
//!   source byte  b7 b6 b5 b4 b3 b2 b1 b0
//!   page 1       b4 b3 b2 b1 b0 .  .  .    <- byte << 3
//!   page 2       .  .  .  .  .  b7 b6 b5   <- byte >> 5
//! ```

use crate::canvas::{Canvas, DrawColor, HEIGHT, WIDTH};

/// Bit order of row-major source images
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum BitOrder {
    /// Leftmost pixel in the most significant bit
    MsbFirst,
    /// Leftmost pixel in the least significant bit (XBM)
    LsbFirst,
}

impl Canvas {
    /// Composite a column-major packed bitmap at a pixel-precise position
    ///
    /// Only the first `width * ceil(height / 8)` bytes of `data` are used; a
    /// shorter `data` (fonts trim trailing blank columns) draws what it has.
    /// Bytes landing off the canvas are skipped individually.
    pub fn draw_bitmap(
        &mut self,
        x: i32,
        y: i32,
        width: i32,
        height: i32,
        data: &[u8],
        color: DrawColor,
    ) {
        if width <= 0 || height <= 0 {
            return;
        }
        if y.saturating_add(height) < 0 || y >= HEIGHT as i32 {
            return;
        }
        if x.saturating_add(width) < 0 || x >= WIDTH as i32 {
            return;
        }

        let raster_height = ((height - 1) >> 3) + 1;
        let byte_count = (width as usize).saturating_mul(raster_height as usize);

        // Floor division keeps the shift in 0..8 for rows above the canvas.
        let first_page = y.div_euclid(8);
        let offset = y.rem_euclid(8) as u32;

        for (i, &byte) in data.iter().take(byte_count).enumerate() {
            if byte == 0 {
                continue;
            }
            let i = i as i32;
            let column = x.saturating_add(i / raster_height);
            let page = first_page + i % raster_height;

            self.apply_byte(column, page, byte << offset, color);
            if offset != 0 {
                self.apply_byte(column, page + 1, byte >> (8 - offset), color);
            }
        }
    }

    /// Draw a full-canvas-format image (raw blit of `width * ceil(height / 8)`
    /// bytes)
    pub fn draw_fast_image(
        &mut self,
        x: i32,
        y: i32,
        width: i32,
        height: i32,
        image: &[u8],
        color: DrawColor,
    ) {
        self.draw_bitmap(x, y, width, height, image, color);
    }

    /// Draw a row-major 1-bit image pixel by pixel
    ///
    /// Only set source bits are drawn. Rows are `ceil(width / 8)` bytes; a
    /// truncated `data` stops drawing where it ends.
    pub fn draw_row_major(
        &mut self,
        x: i32,
        y: i32,
        width: i32,
        height: i32,
        data: &[u8],
        order: BitOrder,
        color: DrawColor,
    ) {
        if width <= 0 || height <= 0 {
            return;
        }
        if x >= WIDTH as i32 || y >= HEIGHT as i32 {
            return;
        }
        if x.saturating_add(width) <= 0 || y.saturating_add(height) <= 0 {
            return;
        }
        let stride = (width as usize).div_ceil(8);

        for row in 0..height {
            let row_start = row as usize * stride;
            for col in 0..width {
                let Some(&byte) = data.get(row_start + (col as usize >> 3)) else {
                    return;
                };
                let bit = match order {
                    BitOrder::MsbFirst => (byte >> (7 - (col & 7))) & 1,
                    BitOrder::LsbFirst => (byte >> (col & 7)) & 1,
                };
                if bit != 0 {
                    self.set_pixel(x.saturating_add(col), y.saturating_add(row), color);
                }
            }
        }
    }

    /// Draw an XBM image (row-major, least significant bit first)
    pub fn draw_xbm(&mut self, x: i32, y: i32, width: i32, height: i32, xbm: &[u8], color: DrawColor) {
        self.draw_row_major(x, y, width, height, xbm, BitOrder::LsbFirst, color);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::canvas::BUFFER_SIZE;
    use proptest::prelude::*;

    fn canvas() -> Canvas {
        Canvas::try_new().unwrap()
    }

    /// Set pixels of a column-major bitmap, one by one
    fn reference_blit(c: &mut Canvas, x: i32, y: i32, width: i32, height: i32, data: &[u8]) {
        let raster = ((height - 1) >> 3) + 1;
        for (i, &byte) in data.iter().enumerate() {
            let col = i as i32 / raster;
            let row0 = (i as i32 % raster) * 8;
            for bit in 0..8 {
                if byte & (1 << bit) != 0 {
                    c.set_pixel(x + col, y + row0 + bit, DrawColor::Set);
                }
            }
        }
    }

    #[test]
    fn test_aligned_blit_copies_bytes() {
        let mut c = canvas();
        c.draw_bitmap(3, 8, 2, 8, &[0xA5, 0x3C], DrawColor::Set);
        assert_eq!(c.page(1)[3], 0xA5);
        assert_eq!(c.page(1)[4], 0x3C);
        assert_eq!(c.page(2)[3], 0);
    }

    #[test]
    fn test_unaligned_blit_spills_into_next_page() {
        let mut c = canvas();
        c.draw_bitmap(0, 11, 1, 8, &[0xFF], DrawColor::Set);
        assert_eq!(c.page(1)[0], 0b1111_1000);
        assert_eq!(c.page(2)[0], 0b0000_0111);
    }

    #[test]
    fn test_tall_bitmap_matches_reference() {
        let data = [0x81, 0x42, 0x24, 0x18, 0xFF, 0x0F];
        for y in [-9, -3, 0, 5, 13, 60] {
            let mut fast = canvas();
            fast.draw_bitmap(10, y, 2, 24, &data, DrawColor::Set);
            let mut slow = canvas();
            reference_blit(&mut slow, 10, y, 2, 24, &data);
            assert_eq!(fast, slow, "y = {}", y);
        }
    }

    #[test]
    fn test_partially_offscreen_top_keeps_visible_rows() {
        let mut c = canvas();
        c.draw_bitmap(0, -4, 1, 8, &[0xF0], DrawColor::Set);
        // Upper nibble lands on rows 0..4
        assert_eq!(c.page(0)[0], 0x0F);
    }

    #[test]
    fn test_clips_columns_and_bottom_page() {
        let mut c = canvas();
        c.draw_bitmap(126, 60, 4, 8, &[0xFF; 4], DrawColor::Set);
        assert_eq!(c.page(7)[126], 0xF0);
        assert_eq!(c.page(7)[127], 0xF0);
        let lit: u32 = c.as_bytes().iter().map(|b| b.count_ones()).sum();
        assert_eq!(lit, 8);
    }

    #[test]
    fn test_clear_and_invert_modes() {
        let mut c = canvas();
        c.fill(0xFF);
        c.draw_bitmap(0, 4, 1, 8, &[0x0F], DrawColor::Clear);
        assert_eq!(c.page(0)[0], 0x0F);
        assert_eq!(c.page(1)[0], 0xFF);

        let mut c = canvas();
        c.draw_bitmap(0, 4, 1, 8, &[0xFF], DrawColor::Invert);
        c.draw_bitmap(0, 4, 1, 8, &[0xFF], DrawColor::Invert);
        assert!(c.as_bytes().iter().all(|&b| b == 0));
    }

    #[test]
    fn test_full_frame_image() {
        let mut image = [0u8; BUFFER_SIZE];
        // Column-major: column x occupies bytes x*8..x*8+8
        image[5 * 8 + 2] = 0x01; // column 5, page 2
        let mut c = canvas();
        c.draw_fast_image(0, 0, 128, 64, &image, DrawColor::Set);
        assert!(c.pixel(5, 16));
        let lit: u32 = c.as_bytes().iter().map(|b| b.count_ones()).sum();
        assert_eq!(lit, 1);
    }

    #[test]
    fn test_extra_data_ignored() {
        let mut c = canvas();
        c.draw_bitmap(0, 0, 1, 8, &[0x01, 0xFF, 0xFF], DrawColor::Set);
        assert_eq!(c.page(0)[0], 0x01);
        assert_eq!(c.page(0)[1], 0x00);
    }

    #[test]
    fn test_xbm_lsb_first() {
        let mut c = canvas();
        // 10 px wide: 2 bytes per row
        let xbm = [0b0000_0001, 0b0000_0010, 0b1000_0000, 0b0000_0000];
        c.draw_xbm(0, 0, 10, 2, &xbm, DrawColor::Set);
        assert!(c.pixel(0, 0));
        assert!(c.pixel(9, 0));
        assert!(c.pixel(7, 1));
        let lit: u32 = c.as_bytes().iter().map(|b| b.count_ones()).sum();
        assert_eq!(lit, 3);
    }

    #[test]
    fn test_row_major_msb_first() {
        let mut c = canvas();
        c.draw_row_major(4, 4, 8, 1, &[0b1000_0001], BitOrder::MsbFirst, DrawColor::Set);
        assert!(c.pixel(4, 4));
        assert!(c.pixel(11, 4));
        assert!(!c.pixel(5, 4));
    }

    #[test]
    fn test_row_major_at_extreme_coordinates() {
        let mut c = canvas();
        c.draw_row_major(i32::MAX, 0, 8, 1, &[0xFF], BitOrder::MsbFirst, DrawColor::Set);
        c.draw_row_major(0, i32::MAX, 8, 1, &[0xFF], BitOrder::MsbFirst, DrawColor::Set);
        c.draw_row_major(i32::MIN, i32::MIN, i32::MAX, i32::MAX, &[0xFF; 4], BitOrder::LsbFirst, DrawColor::Set);
        c.draw_bitmap(i32::MAX, i32::MAX, i32::MAX, i32::MAX, &[0xFF; 4], DrawColor::Set);
        let lit: u32 = c.as_bytes().iter().map(|b| b.count_ones()).sum();
        assert_eq!(lit, 0);

        // Partly visible from the left edge
        c.draw_row_major(-4, 0, 8, 1, &[0xFF], BitOrder::MsbFirst, DrawColor::Set);
        let lit: u32 = c.as_bytes().iter().map(|b| b.count_ones()).sum();
        assert_eq!(lit, 4);
    }

    #[test]
    fn test_row_major_truncated_data() {
        let mut c = canvas();
        c.draw_row_major(0, 0, 8, 4, &[0xFF], BitOrder::MsbFirst, DrawColor::Set);
        let lit: u32 = c.as_bytes().iter().map(|b| b.count_ones()).sum();
        assert_eq!(lit, 8);
    }

    proptest! {
        #[test]
        fn prop_extreme_blits_never_panic(
            x in prop_oneof![Just(i32::MIN), Just(i32::MAX), -200i32..200],
            y in prop_oneof![Just(i32::MIN), Just(i32::MAX), -200i32..200],
            w in prop_oneof![Just(i32::MIN), Just(i32::MAX), -20i32..200],
            h in prop_oneof![Just(i32::MIN), Just(i32::MAX), -20i32..100],
            data in proptest::collection::vec(any::<u8>(), 0..64),
        ) {
            let mut c = canvas();
            for color in [DrawColor::Set, DrawColor::Clear, DrawColor::Invert] {
                c.draw_bitmap(x, y, w, h, &data, color);
                c.draw_row_major(x, y, w, h, &data, BitOrder::MsbFirst, color);
                c.draw_xbm(x, y, w, h, &data, color);
            }
        }
    }
}
