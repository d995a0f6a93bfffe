//! Remote image buffer
//!
//! Backing store for the pixel-command channel. The image is column-major
//! in the blit-native format (8 bytes per column, bit `y & 7` of byte
//! `x * 8 + y / 8`), so drawing it is a single [`Canvas::draw_fast_image`].

use monoframe_protocol::{Command, Navigation, IMAGE_SIZE};

use crate::canvas::{Canvas, DrawColor, HEIGHT, PAGES, WIDTH};

/// Image populated by pixel-channel commands
#[derive(Clone, PartialEq, Eq)]
pub struct RemoteImage {
    data: [u8; IMAGE_SIZE],
}

impl Default for RemoteImage {
    fn default() -> Self {
        Self::new()
    }
}

impl RemoteImage {
    /// Blank image
    pub const fn new() -> Self {
        Self {
            data: [0; IMAGE_SIZE],
        }
    }

    /// Apply a channel command
    ///
    /// Image commands update the buffer. Navigation signals belong to the
    /// frame scheduler and are handed back untouched.
    pub fn apply(&mut self, command: &Command<'_>) -> Option<Navigation> {
        match *command {
            Command::SetPixel { color, x, y } => {
                self.set_pixel(x, y, color);
                None
            }
            Command::Clear => {
                self.clear();
                None
            }
            Command::Replace(payload) => {
                self.replace(payload);
                None
            }
            Command::Navigate(nav) => Some(nav),
        }
    }

    /// Set (non-zero `color`) or clear (`color == 0`) one pixel; ignored
    /// outside the image
    pub fn set_pixel(&mut self, x: u16, y: u16, color: u8) {
        let (x, y) = (usize::from(x), usize::from(y));
        if x >= WIDTH || y >= HEIGHT {
            return;
        }
        let index = x * PAGES + y / 8;
        let mask = 1 << (y & 7);
        if color == 0 {
            self.data[index] &= !mask;
        } else {
            self.data[index] |= mask;
        }
    }

    /// Read one pixel; off outside the image
    pub fn pixel(&self, x: u16, y: u16) -> bool {
        let (x, y) = (usize::from(x), usize::from(y));
        if x >= WIDTH || y >= HEIGHT {
            return false;
        }
        self.data[x * PAGES + y / 8] & (1 << (y & 7)) != 0
    }

    pub fn clear(&mut self) {
        self.data.fill(0);
    }

    /// Overwrite the image from the start of `payload`
    ///
    /// A short payload leaves the remaining bytes as they were; bytes past
    /// the image size are ignored.
    pub fn replace(&mut self, payload: &[u8]) {
        let len = payload.len().min(IMAGE_SIZE);
        self.data[..len].copy_from_slice(&payload[..len]);
    }

    pub fn as_bytes(&self) -> &[u8] {
        &self.data
    }

    /// Blit the whole image onto `canvas`
    pub fn draw(&self, canvas: &mut Canvas, x: i32, y: i32, color: DrawColor) {
        canvas.draw_fast_image(x, y, WIDTH as i32, HEIGHT as i32, &self.data, color);
    }
}

impl core::fmt::Debug for RemoteImage {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        let lit = self.data.iter().map(|b| b.count_ones()).sum::<u32>();
        f.debug_struct("RemoteImage").field("lit_pixels", &lit).finish()
    }
}
