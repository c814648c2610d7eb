//! Core display operations

use crate::command::{
    SET_ALL_ON, SET_COL_ADDR, SET_CONTRAST, SET_DISP, SET_ENTIRE_ON, SET_HORIZ_SCROLL, SET_INV_DISP,
    SET_NORM_DISP, SET_PAGE_ADDR, SET_SCROLL,
};
use crate::config::{Config, Dimensions};
use crate::error::Error;
use crate::interface::DisplayInterface;
use crate::window::AddressWindow;

type DisplayResult<I> = core::result::Result<(), Error<I>>;

/// Controller lifecycle
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub enum DisplayState {
    /// Bring-up has not been sent; only [`Display::init`] is accepted
    #[default]
    Uninitialized,
    /// Bring-up completed; the controller accepts rendering and control
    Ready,
}

/// Core display driver for SSD1306
///
/// Owns the [`DisplayInterface`] and the panel [`Config`]. Drawing happens in
/// a separate [`FrameBuffer`](crate::FrameBuffer); the display only reads it
/// when rendering.
///
/// ## Example
///
/// ```rust,no_run
/// use ssd1306_paged::{AddressWindow, Builder, Dimensions, Display, FrameBuffer, I2cInterface};
/// # use embedded_hal::i2c::{ErrorType, I2c, Operation};
/// # struct MockI2c;
/// # impl ErrorType for MockI2c { type Error = core::convert::Infallible; }
/// # impl I2c for MockI2c {
/// #     fn transaction(
/// #         &mut self,
/// #         _address: u8,
/// #         _operations: &mut [Operation<'_>],
/// #     ) -> Result<(), Self::Error> {
/// #         Ok(())
/// #     }
/// # }
/// let config = match Builder::new().dimensions(Dimensions::W128_H32).build() {
///     Ok(config) => config,
///     Err(_) => return,
/// };
/// let mut display = Display::new(I2cInterface::new(MockI2c), config);
/// let _ = display.init();
///
/// let mut frame = FrameBuffer::new_128x32();
/// frame.set_pixel(0, 0, true);
///
/// // Refresh only the first 8 columns of page 0
/// if let Ok(area) = AddressWindow::new(Dimensions::W128_H32, 0, 7, 0, 0) {
///     let _ = display.render(&frame, &area);
/// }
/// ```
pub struct Display<I>
where
    I: DisplayInterface,
{
    /// Hardware interface
    interface: I,
    /// Display configuration
    config: Config,
    /// Lifecycle state
    state: DisplayState,
}

impl<I> Display<I>
where
    I: DisplayInterface,
{
    /// Create a new Display instance
    ///
    /// Nothing is sent until [`init`](Self::init) is called.
    pub fn new(interface: I, config: Config) -> Self {
        Self {
            interface,
            config,
            state: DisplayState::Uninitialized,
        }
    }

    /// Send the bring-up sequence and switch the panel on
    ///
    /// May be called again to re-initialize the controller, e.g. after a
    /// brown-out.
    ///
    /// # Errors
    ///
    /// Returns `Error::Interface` if a command fails to send. The display
    /// stays uninitialized in that case.
    pub fn init(&mut self) -> DisplayResult<I> {
        self.state = DisplayState::Uninitialized;
        let sequence = self.config.init_sequence();
        self.send_commands(&sequence)?;
        self.state = DisplayState::Ready;
        log::debug!(
            "ssd1306 initialized: {}x{}, com pins {:#04x}",
            self.config.dimensions.width(),
            self.config.dimensions.height(),
            self.config.com_pin_config
        );
        Ok(())
    }

    /// Stream the window's bytes of `buffer` into GDDRAM
    ///
    /// Addresses the window's columns and pages, then sends `area.buflen()`
    /// bytes starting at `area.offset(width)`. The controller wraps rows
    /// inside the window, so the bytes land exactly where they sit in
    /// `buffer` only for windows spanning the full panel width.
    ///
    /// `buffer` is usually a [`FrameBuffer`](crate::FrameBuffer) but any byte
    /// slice in page-packed layout works.
    ///
    /// # Errors
    ///
    /// - `Error::NotInitialized` if [`init`](Self::init) has not succeeded
    /// - `Error::WindowOutOfRange` if the window reaches past the configured
    ///   panel or the bytes run past the end of `buffer`; nothing is sent
    /// - `Error::Interface` if the transfer fails
    pub fn render<B>(&mut self, buffer: &B, area: &AddressWindow) -> DisplayResult<I>
    where
        B: AsRef<[u8]> + ?Sized,
    {
        self.ensure_ready()?;
        let buffer = buffer.as_ref();
        let dimensions = self.config.dimensions;
        let offset = area.offset(dimensions.width());
        let len = area.buflen();
        let on_panel = (area.end_col() as u16) < dimensions.width()
            && (area.end_page() as u16) < dimensions.pages();
        let Some(bytes) = buffer.get(offset..offset + len).filter(|_| on_panel) else {
            log::warn!(
                "render window cols ..={} pages ..={} ({} bytes at offset {}) exceeds {}x{} panel or {}-byte buffer",
                area.end_col(),
                area.end_page(),
                len,
                offset,
                dimensions.width(),
                dimensions.height(),
                buffer.len()
            );
            return Err(Error::WindowOutOfRange {
                offset,
                len,
                buffer_len: buffer.len(),
            });
        };

        self.send_commands(&[
            SET_COL_ADDR,
            area.start_col(),
            area.end_col(),
            SET_PAGE_ADDR,
            area.start_page(),
            area.end_page(),
        ])?;
        log::trace!(
            "render cols {}..={} pages {}..={} ({} bytes)",
            area.start_col(),
            area.end_col(),
            area.start_page(),
            area.end_page(),
            len
        );
        self.send_data(bytes)
    }

    /// Render the whole panel
    ///
    /// # Errors
    ///
    /// Same as [`render`](Self::render).
    pub fn flush<B>(&mut self, buffer: &B) -> DisplayResult<I>
    where
        B: AsRef<[u8]> + ?Sized,
    {
        let area = AddressWindow::full(self.config.dimensions);
        self.render(buffer, &area)
    }

    /// Start or stop continuous horizontal scrolling
    ///
    /// Scrolls right across all pages at the fastest step interval. GDDRAM
    /// writes while scrolling are not reliable, so stop scrolling before
    /// rendering.
    ///
    /// # Errors
    ///
    /// Returns `Error::NotInitialized` before [`init`](Self::init), or
    /// `Error::Interface` if a command fails to send.
    pub fn set_scroll(&mut self, enabled: bool) -> DisplayResult<I> {
        self.ensure_ready()?;
        self.send_commands(&[
            SET_HORIZ_SCROLL,
            0x00, // dummy
            0x00, // start page
            0x00, // step interval
            0x03, // end page
            0x00, // dummy
            0xFF, // dummy
            SET_SCROLL | u8::from(enabled),
        ])?;
        log::debug!("ssd1306 scroll {}", if enabled { "on" } else { "off" });
        Ok(())
    }

    /// Set panel contrast (0x00 dimmest to 0xFF brightest)
    ///
    /// # Errors
    ///
    /// Returns `Error::NotInitialized` before [`init`](Self::init), or
    /// `Error::Interface` if a command fails to send.
    pub fn set_contrast(&mut self, contrast: u8) -> DisplayResult<I> {
        self.ensure_ready()?;
        self.send_commands(&[SET_CONTRAST, contrast])
    }

    /// Select inverse video (lit pixels for 0 bits) or normal video
    ///
    /// # Errors
    ///
    /// Returns `Error::NotInitialized` before [`init`](Self::init), or
    /// `Error::Interface` if the command fails to send.
    pub fn set_inverted(&mut self, inverted: bool) -> DisplayResult<I> {
        self.ensure_ready()?;
        let command = if inverted { SET_INV_DISP } else { SET_NORM_DISP };
        self.send_command(command)
    }

    /// Switch the panel on or off (sleep)
    ///
    /// GDDRAM is retained while off.
    ///
    /// # Errors
    ///
    /// Returns `Error::NotInitialized` before [`init`](Self::init), or
    /// `Error::Interface` if the command fails to send.
    pub fn set_display_on(&mut self, on: bool) -> DisplayResult<I> {
        self.ensure_ready()?;
        self.send_command(SET_DISP | u8::from(on))?;
        log::debug!("ssd1306 display {}", if on { "on" } else { "off" });
        Ok(())
    }

    /// Light every pixel regardless of GDDRAM, or resume following it
    ///
    /// # Errors
    ///
    /// Returns `Error::NotInitialized` before [`init`](Self::init), or
    /// `Error::Interface` if the command fails to send.
    pub fn set_entire_on(&mut self, entire_on: bool) -> DisplayResult<I> {
        self.ensure_ready()?;
        let command = if entire_on { SET_ALL_ON } else { SET_ENTIRE_ON };
        self.send_command(command)
    }

    /// Current lifecycle state
    pub fn state(&self) -> DisplayState {
        self.state
    }

    /// Get display dimensions
    pub fn dimensions(&self) -> &Dimensions {
        &self.config.dimensions
    }

    /// Get the configuration
    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Consume the display and return the interface
    pub fn release(self) -> I {
        self.interface
    }

    fn ensure_ready(&self) -> DisplayResult<I> {
        if self.state != DisplayState::Ready {
            log::warn!("ssd1306 used before init");
            return Err(Error::NotInitialized);
        }
        Ok(())
    }

    /// Send a command to the display controller
    fn send_command(&mut self, cmd: u8) -> DisplayResult<I> {
        self.interface.send_command(cmd).map_err(Error::Interface)
    }

    /// Send a command list to the display controller
    fn send_commands(&mut self, cmds: &[u8]) -> DisplayResult<I> {
        self.interface.send_commands(cmds).map_err(Error::Interface)
    }

    /// Send data to the display controller
    fn send_data(&mut self, data: &[u8]) -> DisplayResult<I> {
        self.interface.send_data(data).map_err(Error::Interface)
    }
}
