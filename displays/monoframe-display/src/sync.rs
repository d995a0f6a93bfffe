//! Display sync strategies
//!
//! A sync cycle decides which part of the canvas has to go over the bus:
//!
//! ```text
//! IDLE -> SCANNING -> IDLE                (nothing changed)
//!                  -> TRANSMITTING -> IDLE
//! ```
//!
//! [`FullFrame`] skips the scan and always reports the whole canvas.
//! [`DoubleBuffered`] diffs the canvas against a shadow copy of what was last
//! transmitted and reports the bounding box of the changed bytes. The
//! strategy is picked once, at construction, through [`SyncMode`].

use core::ops::RangeInclusive;

use embassy_futures::yield_now;

use crate::canvas::{Canvas, PAGES, WIDTH};
use crate::error::DisplayError;

/// Inclusive bounding box of changed bytes, in pages and columns
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Region {
    pub min_page: u8,
    pub max_page: u8,
    pub min_col: u8,
    pub max_col: u8,
}

impl Region {
    /// The whole canvas
    pub const FULL: Region = Region {
        min_page: 0,
        max_page: PAGES as u8 - 1,
        min_col: 0,
        max_col: WIDTH as u8 - 1,
    };

    /// Region covering the single byte at (`page`, `col`)
    pub const fn byte(page: u8, col: u8) -> Self {
        Self {
            min_page: page,
            max_page: page,
            min_col: col,
            max_col: col,
        }
    }

    /// Smallest region covering `self` and the byte at (`page`, `col`)
    #[must_use]
    pub fn including(self, page: u8, col: u8) -> Self {
        Self {
            min_page: self.min_page.min(page),
            max_page: self.max_page.max(page),
            min_col: self.min_col.min(col),
            max_col: self.max_col.max(col),
        }
    }

    pub fn pages(&self) -> RangeInclusive<usize> {
        self.min_page as usize..=self.max_page as usize
    }

    pub fn columns(&self) -> RangeInclusive<usize> {
        self.min_col as usize..=self.max_col as usize
    }

    /// Payload bytes needed to transmit this region
    pub fn byte_count(&self) -> usize {
        self.pages().count() * self.columns().count()
    }
}

/// A sync strategy
#[allow(async_fn_in_trait)]
pub trait FrameSync {
    /// Region of `canvas` that must be transmitted, or `None` when the
    /// controller already shows it
    ///
    /// Yields cooperatively while scanning.
    async fn changed_region(&mut self, canvas: &Canvas) -> Option<Region>;

    /// Forget what the controller shows; the next cycle sends everything
    fn invalidate(&mut self);
}

/// Always transmit the whole canvas
#[derive(Debug, Clone, Copy, Default)]
pub struct FullFrame;

impl FrameSync for FullFrame {
    async fn changed_region(&mut self, _canvas: &Canvas) -> Option<Region> {
        Some(Region::FULL)
    }

    fn invalidate(&mut self) {}
}

/// Diff against a shadow of the last transmitted frame
#[derive(Debug)]
pub struct DoubleBuffered {
    shadow: Canvas,
    stale: bool,
}

impl DoubleBuffered {
    /// Allocate the shadow canvas, assumed to match a blank controller
    pub fn try_new() -> Result<Self, DisplayError> {
        Ok(Self {
            shadow: Canvas::try_new()?,
            stale: false,
        })
    }

    /// Last frame handed to the transmitter
    pub fn shadow(&self) -> &Canvas {
        &self.shadow
    }
}

impl FrameSync for DoubleBuffered {
    async fn changed_region(&mut self, canvas: &Canvas) -> Option<Region> {
        let mut region: Option<Region> = None;

        for page in 0..PAGES {
            let shadow = self.shadow.page_mut(page);
            for (col, (old, &new)) in shadow.iter_mut().zip(canvas.page(page)).enumerate() {
                if *old != new {
                    let (page, col) = (page as u8, col as u8);
                    region = Some(match region {
                        Some(region) => region.including(page, col),
                        None => Region::byte(page, col),
                    });
                }
                // The shadow ends every scan equal to the canvas
                *old = new;
            }
            yield_now().await;
        }

        if core::mem::take(&mut self.stale) {
            return Some(Region::FULL);
        }
        region
    }

    fn invalidate(&mut self) {
        self.stale = true;
    }
}

/// Sync strategy chosen at construction
#[derive(Debug)]
pub enum SyncMode {
    Full(FullFrame),
    DoubleBuffered(DoubleBuffered),
}

impl SyncMode {
    /// Build the strategy selected by the configuration
    ///
    /// Only double buffering allocates; on failure nothing is retained.
    pub fn from_config(double_buffered: bool) -> Result<Self, DisplayError> {
        if double_buffered {
            Ok(Self::DoubleBuffered(DoubleBuffered::try_new()?))
        } else {
            Ok(Self::Full(FullFrame))
        }
    }

    pub fn is_double_buffered(&self) -> bool {
        matches!(self, Self::DoubleBuffered(_))
    }
}

impl FrameSync for SyncMode {
    async fn changed_region(&mut self, canvas: &Canvas) -> Option<Region> {
        match self {
            Self::Full(sync) => sync.changed_region(canvas).await,
            Self::DoubleBuffered(sync) => sync.changed_region(canvas).await,
        }
    }

    fn invalidate(&mut self) {
        match self {
            Self::Full(sync) => sync.invalidate(),
            Self::DoubleBuffered(sync) => sync.invalidate(),
        }
    }
}
