//! SSD1306 Paged OLED Driver
//!
//! A driver for SSD1306 monochrome OLED controllers (128x64 and 128x32 panels) over I2C.
//!
//! ## Features
//!
//! - `no_std` compatible
//! - `embedded-hal` v1.0 support
//! - `embedded-graphics` integration (with `graphics` feature)
//! - Page-packed framebuffer with pixel, line and rectangle drawing
//! - Built-in 8x8 glyph table for upper-case text, digits and `=,%.`
//! - Partial refresh through address windows
//! - Horizontal scroll toggling
//!
//! ## Usage
//!
//! ```rust,no_run
//! use embedded_hal::i2c::{ErrorType, I2c, Operation};
//! use ssd1306_paged::{AddressWindow, Builder, Dimensions, Display, FrameBuffer, I2cInterface};
//! use ssd1306_paged::{raster, text};
//!
//! # struct MockI2c;
//! # impl ErrorType for MockI2c { type Error = core::convert::Infallible; }
//! # impl I2c for MockI2c {
//! #     fn transaction(
//! #         &mut self,
//! #         _address: u8,
//! #         _operations: &mut [Operation<'_>],
//! #     ) -> Result<(), Self::Error> {
//! #         Ok(())
//! #     }
//! # }
//! # let i2c = MockI2c;
//! let dims = match Dimensions::new(128, 64) {
//!     Ok(dims) => dims,
//!     Err(_) => return,
//! };
//! let config = match Builder::new().dimensions(dims).build() {
//!     Ok(config) => config,
//!     Err(_) => return,
//! };
//!
//! let mut display = Display::new(I2cInterface::new(i2c), config);
//! let _ = display.init();
//!
//! let mut frame = FrameBuffer::new_128x64();
//! let area = AddressWindow::full(dims);
//!
//! frame.clear();
//! text::write_string(&mut frame, 20, 24, "GAME OVER");
//! raster::draw_line(&mut frame, 0, 63, 127, 63, true);
//! let _ = display.render(&frame, &area);
//! ```

#![no_std]

#[cfg(any(test, feature = "alloc"))]
extern crate alloc;

/// SSD1306 command definitions
pub mod command;
/// Display configuration types and builder
pub mod config;
/// Display controller: bring-up, refresh and scrolling
pub mod display;
/// Error types for the driver
pub mod error;
/// Built-in 8x8 glyph table
pub mod font;
/// Page-packed monochrome framebuffer
pub mod framebuffer;
/// Hardware interface abstraction
pub mod interface;
/// Pixel, line and rectangle drawing
pub mod raster;
/// Glyph blitting and string rendering
pub mod text;
/// Column/page address windows for partial refresh
pub mod window;

/// Graphics support via embedded-graphics (requires `graphics` feature)
#[cfg(feature = "graphics")]
pub mod graphics;

pub use config::{Builder, Config, Dimensions, MAX_COLUMNS, MAX_ROWS, PAGE_HEIGHT};
pub use display::{Display, DisplayState};
pub use error::{BuilderError, Error, FrameBufferError, WindowError};
pub use framebuffer::FrameBuffer;
pub use interface::{
    DEFAULT_I2C_ADDRESS, DEFAULT_I2C_FREQUENCY_HZ, DisplayInterface, I2cInterface, InterfaceError,
};
pub use window::AddressWindow;
