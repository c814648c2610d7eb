//! Pixel, line and rectangle drawing
//!
//! All functions draw straight into a [`FrameBuffer`] and share its contract:
//! every plotted point must be on the panel, otherwise they panic.
//!
//! ## Example
//!
//! ```
//! use ssd1306_paged::{raster, FrameBuffer};
//!
//! let mut frame = FrameBuffer::new_128x64();
//! raster::draw_line(&mut frame, 0, 0, 7, 7, true);
//! assert_eq!(frame.pixel(4, 4), Some(true));
//! assert_eq!(frame.pixel(4, 5), Some(false));
//! ```

use crate::framebuffer::FrameBuffer;

/// Turn pixel `(x, y)` on or off
///
/// # Panics
///
/// Panics if `(x, y)` is outside the panel.
#[track_caller]
pub fn set_pixel<B>(frame: &mut FrameBuffer<B>, x: i32, y: i32, on: bool)
where
    B: AsRef<[u8]> + AsMut<[u8]>,
{
    frame.set_pixel(x, y, on);
}

/// Draw a line from `(x0, y0)` to `(x1, y1)`, both ends included
///
/// Integer Bresenham covering every octant; identical endpoints plot a single
/// pixel.
///
/// # Panics
///
/// Panics if any point of the line is outside the panel.
#[track_caller]
pub fn draw_line<B>(frame: &mut FrameBuffer<B>, x0: i32, y0: i32, x1: i32, y1: i32, on: bool)
where
    B: AsRef<[u8]> + AsMut<[u8]>,
{
    let dx = (x1 - x0).abs();
    let sx = if x0 < x1 { 1 } else { -1 };
    let dy = -(y1 - y0).abs();
    let sy = if y0 < y1 { 1 } else { -1 };
    let mut err = dx + dy;

    let (mut x, mut y) = (x0, y0);
    loop {
        frame.set_pixel(x, y, on);
        if x == x1 && y == y1 {
            break;
        }
        let e2 = 2 * err;
        if e2 >= dy {
            err += dy;
            x += sx;
        }
        if e2 <= dx {
            err += dx;
            y += sy;
        }
    }
}

/// Draw a horizontal run of `len` pixels starting at `(x, y)`
///
/// Does nothing when `len` is zero.
#[track_caller]
pub fn draw_hline<B>(frame: &mut FrameBuffer<B>, x: i32, y: i32, len: u16, on: bool)
where
    B: AsRef<[u8]> + AsMut<[u8]>,
{
    if len > 0 {
        draw_line(frame, x, y, x + len as i32 - 1, y, on);
    }
}

/// Draw a vertical run of `len` pixels starting at `(x, y)`
///
/// Does nothing when `len` is zero.
#[track_caller]
pub fn draw_vline<B>(frame: &mut FrameBuffer<B>, x: i32, y: i32, len: u16, on: bool)
where
    B: AsRef<[u8]> + AsMut<[u8]>,
{
    if len > 0 {
        draw_line(frame, x, y, x, y + len as i32 - 1, on);
    }
}

/// Outline a `width` x `height` rectangle with its top-left corner at `(x, y)`
#[track_caller]
pub fn draw_rect<B>(frame: &mut FrameBuffer<B>, x: i32, y: i32, width: u16, height: u16, on: bool)
where
    B: AsRef<[u8]> + AsMut<[u8]>,
{
    if width == 0 || height == 0 {
        return;
    }
    let right = x + width as i32 - 1;
    let bottom = y + height as i32 - 1;
    draw_line(frame, x, y, right, y, on);
    draw_line(frame, x, bottom, right, bottom, on);
    draw_line(frame, x, y, x, bottom, on);
    draw_line(frame, right, y, right, bottom, on);
}

/// Fill a `width` x `height` rectangle with its top-left corner at `(x, y)`
#[track_caller]
pub fn fill_rect<B>(frame: &mut FrameBuffer<B>, x: i32, y: i32, width: u16, height: u16, on: bool)
where
    B: AsRef<[u8]> + AsMut<[u8]>,
{
    for row in 0..height as i32 {
        draw_hline(frame, x, y + row, width, on);
    }
}
