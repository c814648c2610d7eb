//! Page-aligned text rendering with the built-in glyph table
//!
//! Each character occupies one 8x8 cell. The vertical position is snapped to
//! the page containing `y`, so text always sits on page boundaries and a
//! glyph is copied into the frame as 8 whole bytes.
//!
//! Unlike [`raster`](crate::raster), text drawing never panics: a start
//! position beyond the last full cell is silently ignored.
//!
//! ## Example
//!
//! ```
//! use ssd1306_paged::{font, text, FrameBuffer};
//!
//! let mut frame = FrameBuffer::new_128x64();
//! let cursor = text::write_string(&mut frame, 0, 0, "Hi");
//! assert_eq!(cursor, 16);
//! assert_eq!(&frame.as_bytes()[..8], font::glyph('H'));
//!
//! // Chain from the returned cursor
//! text::write_string(&mut frame, cursor, 0, "5%");
//! ```

use crate::config::PAGE_HEIGHT;
use crate::font::{self, GLYPH_SIZE};
use crate::framebuffer::FrameBuffer;

const CELL: i32 = GLYPH_SIZE as i32;

/// Whether an 8x8 cell starting at `(x, y)` fits on the panel
fn cell_fits<B>(frame: &FrameBuffer<B>, x: i32, y: i32) -> bool
where
    B: AsRef<[u8]> + AsMut<[u8]>,
{
    x >= 0 && y >= 0 && x <= frame.width() as i32 - CELL && y <= frame.height() as i32 - CELL
}

/// Draw one character with its left edge at `x`, in the page containing `y`
///
/// Does nothing if the cell would not fit on the panel. Unsupported
/// characters draw as blank.
pub fn write_char<B>(frame: &mut FrameBuffer<B>, x: i32, y: i32, ch: char)
where
    B: AsRef<[u8]> + AsMut<[u8]>,
{
    if !cell_fits(frame, x, y) {
        return;
    }
    let page = y as usize / PAGE_HEIGHT as usize;
    let start = page * frame.width() as usize + x as usize;
    frame.as_bytes_mut()[start..start + GLYPH_SIZE].copy_from_slice(font::glyph(ch));
}

/// Draw a string left to right starting at `(x, y)`
///
/// Returns the x coordinate just after the last character. Nothing is drawn
/// and `x` is returned unchanged if the first cell does not fit. There is no
/// wrapping: characters running off the right edge are dropped.
pub fn write_string<B>(frame: &mut FrameBuffer<B>, x: i32, y: i32, s: &str) -> i32
where
    B: AsRef<[u8]> + AsMut<[u8]>,
{
    if !cell_fits(frame, x, y) {
        return x;
    }
    let mut cursor = x;
    for ch in s.chars() {
        write_char(frame, cursor, y, ch);
        cursor += CELL;
    }
    cursor
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::font::GLYPHS;

    #[test]
    fn test_write_string_two_letters() {
        let mut frame = FrameBuffer::new_128x64();
        let cursor = write_string(&mut frame, 0, 0, "AB");
        assert_eq!(cursor, 16);
        assert_eq!(&frame.as_bytes()[0..8], &GLYPHS[1]);
        assert_eq!(&frame.as_bytes()[8..16], &GLYPHS[2]);
        assert!(frame.as_bytes()[16..].iter().all(|&b| b == 0));
    }

    #[test]
    fn test_write_char_snaps_to_page() {
        let mut frame = FrameBuffer::new_128x64();
        write_char(&mut frame, 4, 13, '7');
        let start = 128 + 4;
        assert_eq!(&frame.as_bytes()[start..start + 8], font::glyph('7'));
    }

    #[test]
    fn test_lowercase_renders_as_uppercase() {
        let mut upper = FrameBuffer::new_128x32();
        let mut lower = FrameBuffer::new_128x32();
        write_string(&mut upper, 0, 8, "HELLO");
        write_string(&mut lower, 0, 8, "hello");
        assert_eq!(upper.as_bytes(), lower.as_bytes());
    }

    #[test]
    fn test_last_cell_is_drawable() {
        let mut frame = FrameBuffer::new_128x64();
        write_char(&mut frame, 120, 56, 'O');
        assert_eq!(&frame.as_bytes()[1016..1024], font::glyph('O'));
    }

    #[test]
    fn test_off_screen_start_is_ignored() {
        let mut frame = FrameBuffer::new_128x64();
        assert_eq!(write_string(&mut frame, 121, 0, "X"), 121);
        assert_eq!(write_string(&mut frame, 0, 57, "X"), 0);
        assert_eq!(write_string(&mut frame, -1, 0, "X"), -1);
        write_char(&mut frame, 0, -8, 'X');
        assert!(frame.as_bytes().iter().all(|&b| b == 0));
    }

    #[test]
    fn test_string_is_clipped_at_right_edge() {
        let mut frame = FrameBuffer::new_128x64();
        let cursor = write_string(&mut frame, 112, 0, "ABC");
        assert_eq!(cursor, 136);
        assert_eq!(&frame.as_bytes()[112..120], font::glyph('A'));
        assert_eq!(&frame.as_bytes()[120..128], font::glyph('B'));
        // 'C' would start at x = 128 and is dropped rather than wrapped
        assert!(frame.as_bytes()[128..].iter().all(|&b| b == 0));
    }

    #[test]
    fn test_glyph_overwrites_cell() {
        let mut frame = FrameBuffer::new_128x64();
        frame.fill(true);
        write_char(&mut frame, 0, 0, ' ');
        assert!(frame.as_bytes()[..8].iter().all(|&b| b == 0));
        assert_eq!(frame.as_bytes()[8], 0xFF);
    }
}
