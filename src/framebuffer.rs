//! Page-packed monochrome framebuffer
//!
//! The SSD1306 GDDRAM is split into pages of 8 rows. Each byte holds one
//! column of one page, with bit 0 as the topmost pixel:
//!
//! ```text
//!          col 0    col 1    ...  col W-1
//! page 0   byte 0   byte 1   ...  byte W-1        rows 0..=7
//! page 1   byte W   byte W+1 ...  byte 2W-1       rows 8..=15
//! ...
//! ```
//!
//! so pixel `(x, y)` lives at byte `(y / 8) * width + x`, mask `1 << (y % 8)`.
//! In horizontal addressing mode the controller consumes bytes in exactly
//! this order, which lets a full frame be streamed as one slice.
//!
//! ## Example
//!
//! ```
//! use ssd1306_paged::FrameBuffer;
//!
//! let mut frame = FrameBuffer::new_128x64();
//! frame.set_pixel(3, 10, true);
//! assert_eq!(frame.pixel_index(3, 10), Some((131, 0b0000_0100)));
//! assert_eq!(frame.pixel(3, 10), Some(true));
//!
//! frame.clear();
//! assert_eq!(frame.pixel(3, 10), Some(false));
//! ```

use crate::config::{Dimensions, PAGE_HEIGHT};
use crate::error::FrameBufferError;

/// Locate the byte and bit holding pixel `(x, y)`
///
/// Returns `(byte_index, bit_mask)`, or `None` when the pixel is outside
/// `dimensions`.
pub fn pixel_index(dimensions: Dimensions, x: i32, y: i32) -> Option<(usize, u8)> {
    contains(dimensions, x, y).then(|| locate(dimensions, x, y))
}

fn contains(dimensions: Dimensions, x: i32, y: i32) -> bool {
    (0..dimensions.width() as i32).contains(&x) && (0..dimensions.height() as i32).contains(&y)
}

/// Byte and bit of an on-panel pixel; callers check [`contains`] first
fn locate(dimensions: Dimensions, x: i32, y: i32) -> (usize, u8) {
    let (x, y) = (x as usize, y as usize);
    let page = y / PAGE_HEIGHT as usize;
    let index = page * dimensions.width() as usize + x;
    let mask = 1u8 << (y % PAGE_HEIGHT as usize);
    (index, mask)
}

/// Bit-packed pixel store for one display frame
///
/// Generic over the storage so the frame can live in a static array, on the
/// stack, or (with the `alloc` feature) on the heap. The storage length is
/// fixed to `dimensions.buffer_size()` at construction.
#[derive(Clone, Debug)]
pub struct FrameBuffer<B> {
    dimensions: Dimensions,
    buffer: B,
}

impl FrameBuffer<[u8; 1024]> {
    /// Zeroed frame for a 128x64 panel
    pub const fn new_128x64() -> Self {
        Self {
            dimensions: Dimensions::W128_H64,
            buffer: [0; 1024],
        }
    }
}

impl FrameBuffer<[u8; 512]> {
    /// Zeroed frame for a 128x32 panel
    pub const fn new_128x32() -> Self {
        Self {
            dimensions: Dimensions::W128_H32,
            buffer: [0; 512],
        }
    }
}

#[cfg(any(test, feature = "alloc"))]
impl FrameBuffer<alloc::vec::Vec<u8>> {
    /// Zeroed heap-allocated frame for any supported panel size
    pub fn with_dimensions(dimensions: Dimensions) -> Self {
        Self {
            dimensions,
            buffer: alloc::vec![0; dimensions.buffer_size()],
        }
    }
}

impl<B> FrameBuffer<B>
where
    B: AsRef<[u8]> + AsMut<[u8]>,
{
    /// Wrap existing storage
    ///
    /// # Panics
    ///
    /// Panics if `buffer` is not exactly `dimensions.buffer_size()` bytes.
    /// Use [`try_new`](Self::try_new) for a fallible version.
    pub fn new(dimensions: Dimensions, buffer: B) -> Self {
        let required = dimensions.buffer_size();
        let provided = buffer.as_ref().len();
        assert!(
            provided == required,
            "framebuffer size mismatch: required {} bytes, got {}",
            required,
            provided
        );
        Self { dimensions, buffer }
    }

    /// Wrap existing storage, checking its length
    ///
    /// # Errors
    ///
    /// Returns `FrameBufferError::SizeMismatch` if `buffer` is not exactly
    /// `dimensions.buffer_size()` bytes.
    pub fn try_new(dimensions: Dimensions, buffer: B) -> Result<Self, FrameBufferError> {
        let required = dimensions.buffer_size();
        let provided = buffer.as_ref().len();
        if provided != required {
            return Err(FrameBufferError::SizeMismatch { required, provided });
        }
        Ok(Self { dimensions, buffer })
    }

    /// Panel dimensions this frame was built for
    pub fn dimensions(&self) -> Dimensions {
        self.dimensions
    }

    /// Width in pixels
    pub fn width(&self) -> u16 {
        self.dimensions.width()
    }

    /// Height in pixels
    pub fn height(&self) -> u16 {
        self.dimensions.height()
    }

    /// Length in bytes
    pub fn len(&self) -> usize {
        self.buffer.as_ref().len()
    }

    /// Always false: construction requires `dimensions.buffer_size()` bytes,
    /// which is at least one column of one page
    pub fn is_empty(&self) -> bool {
        self.buffer.as_ref().is_empty()
    }

    /// Byte index and bit mask of pixel `(x, y)`, if it is on the panel
    pub fn pixel_index(&self, x: i32, y: i32) -> Option<(usize, u8)> {
        pixel_index(self.dimensions, x, y)
    }

    /// Turn pixel `(x, y)` on or off
    ///
    /// # Panics
    ///
    /// Panics if `(x, y)` is outside the panel. Drawing off-screen is a caller
    /// bug; probe with [`pixel_index`](Self::pixel_index) first if the
    /// coordinates are untrusted.
    #[track_caller]
    pub fn set_pixel(&mut self, x: i32, y: i32, on: bool) {
        assert!(
            contains(self.dimensions, x, y),
            "pixel ({}, {}) outside {}x{} display",
            x,
            y,
            self.dimensions.width(),
            self.dimensions.height()
        );
        let (index, mask) = locate(self.dimensions, x, y);
        let byte = &mut self.buffer.as_mut()[index];
        if on {
            *byte |= mask;
        } else {
            *byte &= !mask;
        }
    }

    /// Read pixel `(x, y)`, or `None` if it is outside the panel
    pub fn pixel(&self, x: i32, y: i32) -> Option<bool> {
        self.pixel_index(x, y)
            .map(|(index, mask)| self.buffer.as_ref()[index] & mask != 0)
    }

    /// Turn every pixel off
    pub fn clear(&mut self) {
        self.fill(false);
    }

    /// Turn every pixel on or off
    pub fn fill(&mut self, on: bool) {
        let value = if on { 0xFF } else { 0x00 };
        self.buffer.as_mut().fill(value);
    }

    /// Raw page-packed bytes
    pub fn as_bytes(&self) -> &[u8] {
        self.buffer.as_ref()
    }

    /// Mutable raw page-packed bytes
    pub fn as_bytes_mut(&mut self) -> &mut [u8] {
        self.buffer.as_mut()
    }

    /// Return the underlying storage
    pub fn into_inner(self) -> B {
        self.buffer
    }
}

impl<B: AsRef<[u8]>> AsRef<[u8]> for FrameBuffer<B> {
    fn as_ref(&self) -> &[u8] {
        self.buffer.as_ref()
    }
}
