//! SSD1306 command definitions
//!
//! This module defines the command bytes used to control the SSD1306 OLED
//! controller and the I2C control bytes that frame them on the wire.
//!
//! ## Framing
//!
//! Every I2C write to the controller starts with a control byte:
//! 1. [`CONTROL_COMMAND`] (Co = 1, D/C = 0) precedes a single command byte
//! 2. [`CONTROL_DATA`] (Co = 0, D/C = 1) precedes a run of GDDRAM bytes
//!
//! Command arguments are sent as further command bytes, each with its own
//! control byte.
//!
//! ## Example
//!
//! ```rust,no_run
//! use ssd1306_paged::{command, DisplayInterface, I2cInterface};
//! # use embedded_hal::i2c::{ErrorType, I2c, Operation};
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
//! # let mut interface = I2cInterface::new(MockI2c);
//! // Invert the panel
//! let _ = interface.send_command(command::SET_INV_DISP);
//!
//! // Contrast takes one argument byte
//! let _ = interface.send_commands(&[command::SET_CONTRAST, 0x7F]);
//! ```

// Bus framing

/// Control byte preceding a single command byte (0x80)
pub const CONTROL_COMMAND: u8 = 0x80;

/// Control byte preceding a run of display data bytes (0x40)
pub const CONTROL_DATA: u8 = 0x40;

// Addressing commands

/// Memory addressing mode command (0x20)
///
/// Requires 1 byte: 0x00 = horizontal, 0x01 = vertical, 0x02 = page.
pub const SET_MEM_MODE: u8 = 0x20;

/// Set column address range command (0x21)
///
/// Requires 2 bytes: [start column, end column]
pub const SET_COL_ADDR: u8 = 0x21;

/// Set page address range command (0x22)
///
/// Requires 2 bytes: [start page, end page]
pub const SET_PAGE_ADDR: u8 = 0x22;

/// Horizontal addressing mode argument for [`SET_MEM_MODE`]
pub const MEM_MODE_HORIZONTAL: u8 = 0x00;

// Scrolling commands

/// Continuous right horizontal scroll setup (0x26)
///
/// OR with 0x01 for left scroll. Requires 6 bytes:
/// [dummy 0x00, start page, frame interval, end page, dummy 0x00, dummy 0xFF]
pub const SET_HORIZ_SCROLL: u8 = 0x26;

/// Deactivate scroll (0x2E)
///
/// OR with 0x01 (0x2F) to activate the configured scroll.
pub const SET_SCROLL: u8 = 0x2E;

// Hardware configuration commands

/// Set display start line (0x40)
///
/// OR with the start line in the low 6 bits.
pub const SET_DISP_START_LINE: u8 = 0x40;

/// Segment re-map (0xA0)
///
/// OR with 0x01 to map column 127 to SEG0.
pub const SET_SEG_REMAP: u8 = 0xA0;

/// Multiplex ratio command (0xA8)
///
/// Requires 1 byte: display height - 1.
pub const SET_MUX_RATIO: u8 = 0xA8;

/// COM output scan direction (0xC0)
///
/// OR with 0x08 to scan from COM[N-1] to COM0.
pub const SET_COM_OUT_DIR: u8 = 0xC0;

/// Display offset command (0xD3)
///
/// Requires 1 byte: vertical shift by COM.
pub const SET_DISP_OFFSET: u8 = 0xD3;

/// COM pins hardware configuration command (0xDA)
///
/// Requires 1 byte. Board specific: 0x02 for 128x32 panels, 0x12 for 128x64.
pub const SET_COM_PIN_CFG: u8 = 0xDA;

// Timing and driving scheme commands

/// Display clock divide ratio / oscillator frequency command (0xD5)
///
/// Requires 1 byte.
pub const SET_DISP_CLK_DIV: u8 = 0xD5;

/// Pre-charge period command (0xD9)
///
/// Requires 1 byte.
pub const SET_PRECHARGE: u8 = 0xD9;

/// VCOMH deselect level command (0xDB)
///
/// Requires 1 byte.
pub const SET_VCOM_DESEL: u8 = 0xDB;

/// Charge pump setting command (0x8D)
///
/// Requires 1 byte: 0x14 enables the internal charge pump, 0x10 disables it.
pub const SET_CHARGE_PUMP: u8 = 0x8D;

// Fundamental commands

/// Contrast control command (0x81)
///
/// Requires 1 byte: contrast 0x00..=0xFF.
pub const SET_CONTRAST: u8 = 0x81;

/// Resume display from GDDRAM content (0xA4)
pub const SET_ENTIRE_ON: u8 = 0xA4;

/// Light every pixel regardless of GDDRAM content (0xA5)
pub const SET_ALL_ON: u8 = 0xA5;

/// Normal display, a set bit lights the pixel (0xA6)
pub const SET_NORM_DISP: u8 = 0xA6;

/// Inverse display, a cleared bit lights the pixel (0xA7)
pub const SET_INV_DISP: u8 = 0xA7;

/// Display off (0xAE)
///
/// OR with 0x01 (0xAF) to turn the display on.
pub const SET_DISP: u8 = 0xAE;
