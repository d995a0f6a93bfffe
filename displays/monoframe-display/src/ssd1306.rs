//! SSD1306 OLED controller driver
//!
//! Drives a 128x64 SSD1306 panel over I2C. Every I2C write starts with a
//! control byte:
//!
//! ```text
//! command:  [0x80][cmd]
//! data:     [0x40][payload, up to 16 bytes]
//! ```
//!
//! The panel runs in horizontal addressing mode, so after programming the
//! column and page windows the payload streams row by row without further
//! addressing. [`Ssd1306::flush`] only sends the window reported by the
//! configured sync strategy.

use embassy_futures::yield_now;
use embedded_hal_async::i2c::I2c;

use crate::canvas::Canvas;
use crate::config::DisplayConfig;
use crate::error::DisplayError;
use crate::sync::{FrameSync, Region, SyncMode};

/// Control byte for a single command
const CONTROL_COMMAND: u8 = 0x80;

/// Control byte for a data packet
const CONTROL_DATA: u8 = 0x40;

/// Largest data payload per I2C write
pub const PACKET_LEN: usize = 16;

/// SSD1306 commands
mod cmd {
    pub const DISPLAY_OFF: u8 = 0xAE;
    pub const DISPLAY_ON: u8 = 0xAF;
    pub const SET_CLOCK_DIV: u8 = 0xD5;
    pub const SET_MULTIPLEX: u8 = 0xA8;
    pub const SET_DISPLAY_OFFSET: u8 = 0xD3;
    pub const SET_START_LINE: u8 = 0x40;
    pub const CHARGE_PUMP: u8 = 0x8D;
    pub const MEMORY_MODE: u8 = 0x20;
    pub const SEG_REMAP: u8 = 0xA0;
    pub const COM_SCAN_INC: u8 = 0xC0;
    pub const COM_SCAN_DEC: u8 = 0xC8;
    pub const SET_COM_PINS: u8 = 0xDA;
    pub const SET_CONTRAST: u8 = 0x81;
    pub const SET_PRECHARGE: u8 = 0xD9;
    pub const DISPLAY_ALL_ON_RESUME: u8 = 0xA4;
    pub const NORMAL_DISPLAY: u8 = 0xA6;
    pub const INVERT_DISPLAY: u8 = 0xA7;
    pub const DEACTIVATE_SCROLL: u8 = 0x2E;
    pub const COLUMN_ADDR: u8 = 0x21;
    pub const PAGE_ADDR: u8 = 0x22;
}

/// SSD1306 OLED driver
///
/// Owns the bus, the canvas and the sync strategy. Drawing happens on
/// [`Ssd1306::canvas_mut`]; nothing reaches the panel until
/// [`Ssd1306::flush`].
pub struct Ssd1306<I2C> {
    i2c: I2C,
    config: DisplayConfig,
    canvas: Canvas,
    sync: SyncMode,
    initialized: bool,
}

impl<I2C> Ssd1306<I2C>
where
    I2C: I2c,
{
    /// Create a driver and allocate its buffers
    ///
    /// Fails with [`DisplayError::OutOfMemory`] if the canvas (or, when
    /// double buffering, the shadow) cannot be allocated. The panel is not
    /// touched until [`Ssd1306::init`].
    pub fn new(i2c: I2C, config: DisplayConfig) -> Result<Self, DisplayError> {
        let buffers = Canvas::try_new().and_then(|canvas| {
            SyncMode::from_config(config.double_buffered).map(|sync| (canvas, sync))
        });
        let (canvas, sync) = match buffers {
            Ok(buffers) => buffers,
            Err(e) => {
                #[cfg(feature = "defmt")]
                defmt::warn!("Display buffer allocation failed");
                return Err(e);
            }
        };

        Ok(Self {
            i2c,
            config,
            canvas,
            sync,
            initialized: false,
        })
    }

    /// Initialize the panel and push a blank frame
    pub async fn init(&mut self) -> Result<(), DisplayError> {
        let (seg_remap, com_scan) = if self.config.flip_vertical {
            (cmd::SEG_REMAP | 0x01, cmd::COM_SCAN_DEC)
        } else {
            (cmd::SEG_REMAP, cmd::COM_SCAN_INC)
        };
        let display_mode = if self.config.inverted {
            cmd::INVERT_DISPLAY
        } else {
            cmd::NORMAL_DISPLAY
        };

        let init_cmds = [
            cmd::DISPLAY_OFF,
            cmd::SET_CLOCK_DIV,
            self.config.clock_div,
            cmd::SET_MULTIPLEX,
            0x3F, // 64 lines
            cmd::SET_DISPLAY_OFFSET,
            0x00,
            cmd::SET_START_LINE,
            cmd::CHARGE_PUMP,
            0x14, // Enable charge pump
            cmd::MEMORY_MODE,
            0x00, // Horizontal addressing
            seg_remap,
            com_scan,
            cmd::SET_COM_PINS,
            0x12,
            cmd::SET_CONTRAST,
            self.config.contrast,
            cmd::SET_PRECHARGE,
            0xF1,
            cmd::DISPLAY_ALL_ON_RESUME,
            display_mode,
            cmd::DEACTIVATE_SCROLL,
            cmd::DISPLAY_ON,
        ];
        self.initialized = false;
        self.commands(&init_cmds).await?;

        // The reset needs the bus; only a successful reset completes init
        self.initialized = true;
        if let Err(e) = self.reset_display().await {
            self.initialized = false;
            return Err(e);
        }

        #[cfg(feature = "defmt")]
        defmt::info!(
            "SSD1306 initialized at {=u8:#x}, double buffered: {}",
            self.config.address,
            self.sync.is_double_buffered()
        );

        Ok(())
    }

    /// Clear the canvas and push it as a full frame, whatever the panel
    /// shows now
    pub async fn reset_display(&mut self) -> Result<(), DisplayError> {
        self.ensure_initialized()?;
        self.canvas.clear();
        self.sync.invalidate();
        self.flush().await?;
        Ok(())
    }

    /// Transmit what changed since the last flush
    ///
    /// Returns the transmitted region, or `None` if the panel was already
    /// up to date and the bus was not used.
    pub async fn flush(&mut self) -> Result<Option<Region>, DisplayError> {
        self.ensure_initialized()?;

        let Some(region) = self.sync.changed_region(&self.canvas).await else {
            #[cfg(feature = "defmt")]
            defmt::trace!("Display unchanged, skipping transfer");
            return Ok(None);
        };

        #[cfg(feature = "defmt")]
        defmt::debug!("Display transfer: {}", region);

        if let Err(e) = self.transmit(region).await {
            // The scan already recorded this region as sent
            self.sync.invalidate();
            return Err(e);
        }

        Ok(Some(region))
    }

    /// Program the address window for `region` and stream its bytes
    async fn transmit(&mut self, region: Region) -> Result<(), DisplayError> {
        self.commands(&[
            cmd::COLUMN_ADDR,
            region.min_col,
            region.max_col,
            cmd::PAGE_ADDR,
            region.min_page,
            region.max_page,
        ])
        .await?;

        let mut packet = [0u8; PACKET_LEN + 1];
        packet[0] = CONTROL_DATA;
        for page in region.pages() {
            let row = &self.canvas.page(page)[region.columns()];
            // Packets never straddle a row
            for chunk in row.chunks(PACKET_LEN) {
                let len = chunk.len();
                packet[1..=len].copy_from_slice(chunk);
                self.i2c
                    .write(self.config.address, &packet[..=len])
                    .await
                    .map_err(bus_error)?;
            }
            yield_now().await;
        }

        Ok(())
    }

    /// Clear the canvas; the panel keeps its content until the next flush
    pub fn clear(&mut self) {
        self.canvas.clear();
    }

    pub fn canvas(&self) -> &Canvas {
        &self.canvas
    }

    pub fn canvas_mut(&mut self) -> &mut Canvas {
        &mut self.canvas
    }

    pub fn config(&self) -> &DisplayConfig {
        &self.config
    }

    pub fn is_initialized(&self) -> bool {
        self.initialized
    }

    pub async fn display_on(&mut self) -> Result<(), DisplayError> {
        self.ensure_initialized()?;
        self.command(cmd::DISPLAY_ON).await
    }

    pub async fn display_off(&mut self) -> Result<(), DisplayError> {
        self.ensure_initialized()?;
        self.command(cmd::DISPLAY_OFF).await
    }

    /// Show lit pixels dark and dark pixels lit
    pub async fn invert_display(&mut self) -> Result<(), DisplayError> {
        self.ensure_initialized()?;
        self.command(cmd::INVERT_DISPLAY).await?;
        self.config.inverted = true;
        Ok(())
    }

    pub async fn normal_display(&mut self) -> Result<(), DisplayError> {
        self.ensure_initialized()?;
        self.command(cmd::NORMAL_DISPLAY).await?;
        self.config.inverted = false;
        Ok(())
    }

    /// Set display contrast (0-255)
    pub async fn set_contrast(&mut self, contrast: u8) -> Result<(), DisplayError> {
        self.ensure_initialized()?;
        self.commands(&[cmd::SET_CONTRAST, contrast]).await?;
        self.config.contrast = contrast;
        Ok(())
    }

    /// Rotate the panel output by 180 degrees
    pub async fn flip_screen_vertically(&mut self) -> Result<(), DisplayError> {
        self.ensure_initialized()?;
        self.commands(&[cmd::SEG_REMAP | 0x01, cmd::COM_SCAN_DEC])
            .await?;
        self.config.flip_vertical = true;
        Ok(())
    }

    /// Tear down the driver, dropping its buffers and returning the bus
    pub fn release(self) -> I2C {
        self.i2c
    }

    fn ensure_initialized(&self) -> Result<(), DisplayError> {
        if self.initialized {
            Ok(())
        } else {
            Err(DisplayError::NotInitialized)
        }
    }

    /// Send a command to the display
    async fn command(&mut self, c: u8) -> Result<(), DisplayError> {
        self.i2c
            .write(self.config.address, &[CONTROL_COMMAND, c])
            .await
            .map_err(bus_error)
    }

    /// Send each byte as its own command write
    async fn commands(&mut self, cmds: &[u8]) -> Result<(), DisplayError> {
        for &c in cmds {
            self.command(c).await?;
        }
        Ok(())
    }
}

/// Bus failures are surfaced, never retried
fn bus_error<E>(_e: E) -> DisplayError {
    #[cfg(feature = "defmt")]
    defmt::warn!("I2C write to display failed");
    DisplayError::Communication
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::canvas::DrawColor;
    use crate::testing::RecordingBus;
    use embassy_futures::block_on;

    fn display(config: DisplayConfig) -> Ssd1306<RecordingBus> {
        let mut display = Ssd1306::new(RecordingBus::default(), config).unwrap();
        block_on(display.init()).unwrap();
        display.i2c.writes.clear();
        display
    }

    #[test]
    fn test_requires_init() {
        let mut display = Ssd1306::new(RecordingBus::default(), DisplayConfig::default()).unwrap();
        assert_eq!(block_on(display.flush()), Err(DisplayError::NotInitialized));
        assert_eq!(
            block_on(display.display_on()),
            Err(DisplayError::NotInitialized)
        );
        assert!(display.release().writes.is_empty());
    }

    #[test]
    fn test_init_sequence_then_full_frame() {
        let mut display = Ssd1306::new(RecordingBus::default(), DisplayConfig::default()).unwrap();
        block_on(display.init()).unwrap();
        assert!(display.is_initialized());

        let bus = display.release();
        let commands = bus.commands();
        assert_eq!(
            &commands[..8],
            &[0xAE, 0xD5, 0xF0, 0xA8, 0x3F, 0xD3, 0x00, 0x40]
        );
        // Init ends with display on, then the full-frame window
        assert_eq!(&commands[23..], &[0xAF, 0x21, 0, 127, 0x22, 0, 7]);
        assert_eq!(bus.data_bytes().len(), 1024);
        assert_eq!(bus.data_packets(), 64);
        assert!(bus.writes.iter().all(|(address, _)| *address == 0x3C));
    }

    #[test]
    fn test_init_applies_config() {
        let config = DisplayConfig {
            address: 0x3D,
            flip_vertical: true,
            inverted: true,
            contrast: 0x20,
            ..DisplayConfig::default()
        };
        let mut display = Ssd1306::new(RecordingBus::default(), config).unwrap();
        block_on(display.init()).unwrap();
        let bus = display.release();
        let commands = bus.commands();
        assert_eq!(&commands[12..14], &[0xA1, 0xC8]);
        assert_eq!(&commands[16..18], &[0x81, 0x20]);
        assert_eq!(commands[21], 0xA7);
        assert!(bus.writes.iter().all(|(address, _)| *address == 0x3D));
    }

    #[test]
    fn test_single_pixel_sync() {
        let mut display = display(DisplayConfig::default());
        display.canvas_mut().set_pixel(0, 0, DrawColor::Set);

        let region = block_on(display.flush()).unwrap();
        assert_eq!(region, Some(Region::byte(0, 0)));
        assert_eq!(display.i2c.commands(), [0x21, 0, 0, 0x22, 0, 0]);
        assert_eq!(display.i2c.data_bytes(), [0x01]);
        assert_eq!(display.i2c.data_packets(), 1);
    }

    #[test]
    fn test_unchanged_canvas_skips_bus() {
        let mut display = display(DisplayConfig::default());
        assert_eq!(block_on(display.flush()), Ok(None));
        assert!(display.i2c.writes.is_empty());
    }

    #[test]
    fn test_packets_split_at_row_end() {
        let mut display = display(DisplayConfig::default());
        // 20 columns wide, 2 pages tall
        display
            .canvas_mut()
            .draw_horizontal_line(10, 3, 20, DrawColor::Set);
        display.canvas_mut().set_pixel(10, 12, DrawColor::Set);

        block_on(display.flush()).unwrap();
        let sizes: alloc::vec::Vec<usize> = display
            .i2c
            .writes
            .iter()
            .filter(|(_, bytes)| bytes[0] == 0x40)
            .map(|(_, bytes)| bytes.len() - 1)
            .collect();
        assert_eq!(sizes, [16, 4, 16, 4]);
        assert_eq!(display.i2c.data_bytes().len(), 40);
    }

    #[test]
    fn test_full_frame_mode_always_sends_everything() {
        let mut display = display(DisplayConfig {
            double_buffered: false,
            ..DisplayConfig::default()
        });
        block_on(display.flush()).unwrap();
        block_on(display.flush()).unwrap();
        assert_eq!(display.i2c.data_bytes().len(), 2048);
    }

    #[test]
    fn test_reset_display_resends_full_frame() {
        let mut display = display(DisplayConfig::default());
        display.canvas_mut().fill(0xFF);
        block_on(display.reset_display()).unwrap();

        assert!(display.canvas().as_bytes().iter().all(|&b| b == 0));
        assert_eq!(display.i2c.data_bytes(), [0u8; 1024]);
    }

    #[test]
    fn test_control_commands() {
        let mut display = display(DisplayConfig::default());
        block_on(display.display_off()).unwrap();
        block_on(display.invert_display()).unwrap();
        block_on(display.set_contrast(0x42)).unwrap();
        block_on(display.flip_screen_vertically()).unwrap();
        block_on(display.normal_display()).unwrap();
        block_on(display.display_on()).unwrap();

        assert_eq!(
            display.i2c.commands(),
            [0xAE, 0xA7, 0x81, 0x42, 0xA1, 0xC8, 0xA6, 0xAF]
        );
        assert_eq!(display.config().contrast, 0x42);
        assert!(display.config().flip_vertical);
        assert!(!display.config().inverted);
    }

    #[test]
    fn test_bus_failure_is_reported() {
        let mut display = display(DisplayConfig::default());
        display.i2c.fail = true;
        display.canvas_mut().set_pixel(1, 1, DrawColor::Set);
        assert_eq!(block_on(display.flush()), Err(DisplayError::Communication));
        assert_eq!(
            block_on(display.set_contrast(1)),
            Err(DisplayError::Communication)
        );
    }

    #[test]
    fn test_failed_flush_is_retried_in_full() {
        let mut display = display(DisplayConfig::default());
        display.canvas_mut().set_pixel(1, 1, DrawColor::Set);

        display.i2c.fail = true;
        assert_eq!(block_on(display.flush()), Err(DisplayError::Communication));

        display.i2c.fail = false;
        assert_eq!(block_on(display.flush()), Ok(Some(Region::FULL)));
        let sent = display.i2c.data_bytes();
        assert_eq!(sent.len(), 1024);
        assert_eq!(sent[1], 0b10);

        display.i2c.writes.clear();
        assert_eq!(block_on(display.flush()), Ok(None));
        assert!(display.i2c.writes.is_empty());
    }

    #[test]
    fn test_failed_init_leaves_display_uninitialized() {
        let bus = RecordingBus {
            fail: true,
            ..RecordingBus::default()
        };
        let mut display = Ssd1306::new(bus, DisplayConfig::default()).unwrap();
        assert_eq!(block_on(display.init()), Err(DisplayError::Communication));
        assert!(!display.is_initialized());
        assert_eq!(block_on(display.flush()), Err(DisplayError::NotInitialized));

        display.i2c.fail = false;
        block_on(display.init()).unwrap();
        assert!(display.is_initialized());
    }

    #[test]
    fn test_failed_reset_during_init_leaves_display_uninitialized() {
        // All 24 init commands go through; the first full-frame write fails
        let bus = RecordingBus {
            fail_after: Some(24),
            ..RecordingBus::default()
        };
        let mut display = Ssd1306::new(bus, DisplayConfig::default()).unwrap();
        assert_eq!(block_on(display.init()), Err(DisplayError::Communication));
        assert_eq!(display.i2c.writes.len(), 24);
        assert!(!display.is_initialized());
        assert_eq!(
            block_on(display.set_contrast(1)),
            Err(DisplayError::NotInitialized)
        );
    }

    #[test]
    fn test_clear_is_local() {
        let mut display = display(DisplayConfig::default());
        display.canvas_mut().set_pixel(1, 1, DrawColor::Set);
        display.clear();
        assert!(display.i2c.writes.is_empty());
        assert_eq!(block_on(display.flush()), Ok(None));
    }
}
