//! Driver error types
//!
//! This module defines error types for configuration building ([`BuilderError`]),
//! address windows ([`WindowError`]), framebuffer construction ([`FrameBufferError`])
//! and display operations ([`Error`]).
//!
//! ## Error Types
//!
//! - [`BuilderError`] - Errors during configuration construction
//! - [`WindowError`] - Window bounds outside the panel
//! - [`FrameBufferError`] - Storage that does not match the panel size
//! - [`Error`] - Runtime errors during display operations
//! - [`InterfaceError`](crate::interface::InterfaceError) - Low-level bus errors
//!
//! Out-of-range pixel coordinates are not represented here: drawing outside
//! the panel is a caller bug and panics (see [`crate::framebuffer`]).
//!
//! ## Example
//!
//! ```
//! use ssd1306_paged::{Builder, BuilderError, Dimensions};
//!
//! // Missing dimensions
//! let result = Builder::new().build();
//! assert!(matches!(result, Err(BuilderError::MissingDimensions)));
//!
//! // Height must be whole pages
//! let result = Dimensions::new(128, 60);
//! assert!(result.is_err());
//! ```

use crate::interface::DisplayInterface;

/// Maximum columns (segment outputs) driven by the SSD1306
pub const MAX_COLUMNS: u16 = 128;

/// Maximum rows (common outputs) driven by the SSD1306
pub const MAX_ROWS: u16 = 64;

/// Errors returned by [`Display`](crate::Display) operations
///
/// Generic over the interface so the bus error type is kept intact.
#[derive(Debug)]
pub enum Error<I: DisplayInterface> {
    /// Interface error (I2C)
    ///
    /// Wraps the underlying bus error from the [`DisplayInterface`] implementation.
    Interface(I::Error),
    /// The controller has not been brought up with [`Display::init`](crate::Display::init)
    NotInitialized,
    /// The window addresses bytes past the end of the framebuffer
    WindowOutOfRange {
        /// Flat offset of the first byte streamed
        offset: usize,
        /// Number of bytes the window requires
        len: usize,
        /// Length of the provided buffer
        buffer_len: usize,
    },
}

impl<I: DisplayInterface> core::fmt::Display for Error<I> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Self::Interface(_) => write!(f, "Interface error"),
            Self::NotInitialized => write!(f, "Display not initialized"),
            Self::WindowOutOfRange {
                offset,
                len,
                buffer_len,
            } => write!(
                f,
                "Window out of range: {len} bytes at offset {offset}, buffer is {buffer_len} bytes"
            ),
        }
    }
}

impl<I: DisplayInterface + core::fmt::Debug> core::error::Error for Error<I> {}

/// Configuration rejected by [`Builder`](crate::Builder) or [`Dimensions::new`](crate::Dimensions::new)
#[derive(Debug, PartialEq)]
pub enum BuilderError {
    /// Dimensions were not specified
    ///
    /// [`Builder::dimensions()`](crate::config::Builder::dimensions) must be called before building.
    MissingDimensions,
    /// Invalid dimensions provided
    ///
    /// See [`Dimensions::new()`](crate::config::Dimensions::new) for constraints.
    InvalidDimensions {
        /// Width in pixels requested
        width: u16,
        /// Height in pixels requested
        height: u16,
    },
}

impl core::fmt::Display for BuilderError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Self::MissingDimensions => write!(f, "Panel dimensions not set"),
            Self::InvalidDimensions { width, height } => write!(
                f,
                "Invalid dimensions {width}x{height} (max {MAX_COLUMNS}x{MAX_ROWS}, height must be a multiple of 8)"
            ),
        }
    }
}

impl core::error::Error for BuilderError {}

/// Address window bounds that do not fit the panel
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum WindowError {
    /// `start_col > end_col` or `end_col >= width`
    InvalidColumns {
        /// First column
        start: u8,
        /// Last column (inclusive)
        end: u8,
    },
    /// `start_page > end_page` or `end_page >= height / 8`
    InvalidPages {
        /// First page
        start: u8,
        /// Last page (inclusive)
        end: u8,
    },
}

impl core::fmt::Display for WindowError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Self::InvalidColumns { start, end } => {
                write!(f, "Invalid column range: {start}..={end}")
            }
            Self::InvalidPages { start, end } => write!(f, "Invalid page range: {start}..={end}"),
        }
    }
}

impl core::error::Error for WindowError {}

/// Errors that can occur when wrapping framebuffer storage
#[derive(Debug, PartialEq)]
pub enum FrameBufferError {
    /// Storage length differs from `dimensions.buffer_size()`
    SizeMismatch {
        /// Required buffer size in bytes
        required: usize,
        /// Provided buffer size in bytes
        provided: usize,
    },
}

impl core::fmt::Display for FrameBufferError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Self::SizeMismatch { required, provided } => write!(
                f,
                "Buffer size mismatch: required {required} bytes, provided {provided}"
            ),
        }
    }
}

impl core::error::Error for FrameBufferError {}
