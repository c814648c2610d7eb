//! Property-based tests for framebuffer, window and drawing invariants.

use proptest::{prop_assert, prop_assert_eq};
use ssd1306_paged::window::compute_length;
use ssd1306_paged::{AddressWindow, Builder, Dimensions, FrameBuffer, font, raster, text};

proptest::proptest! {
    /// Setting then clearing a pixel restores an empty frame.
    #[test]
    fn set_then_clear_pixel_is_identity(x in 0i32..128, y in 0i32..64) {
        let mut frame = FrameBuffer::new_128x64();
        frame.set_pixel(x, y, true);
        prop_assert_eq!(frame.pixel(x, y), Some(true));
        prop_assert_eq!(frame.as_bytes().iter().map(|b| b.count_ones()).sum::<u32>(), 1);

        frame.set_pixel(x, y, false);
        prop_assert!(frame.as_bytes().iter().all(|&b| b == 0));
    }

    /// Setting a pixel twice has the same effect as setting it once.
    #[test]
    fn set_pixel_is_idempotent(x in 0i32..128, y in 0i32..32, on in proptest::bool::ANY) {
        let mut once = FrameBuffer::new_128x32();
        let mut twice = FrameBuffer::new_128x32();
        once.fill(!on);
        twice.fill(!on);

        once.set_pixel(x, y, on);
        twice.set_pixel(x, y, on);
        twice.set_pixel(x, y, on);
        prop_assert_eq!(once.as_bytes(), twice.as_bytes());
    }

    /// Pixel location follows the page-packed layout.
    #[test]
    fn pixel_index_matches_layout(x in 0i32..128, y in 0i32..64) {
        let frame = FrameBuffer::new_128x64();
        let expected = ((y as usize / 8) * 128 + x as usize, 1u8 << (y % 8));
        prop_assert_eq!(frame.pixel_index(x, y), Some(expected));
    }

    /// Window length is always columns times pages.
    #[test]
    fn window_length_is_columns_times_pages(
        a in 0u8..128, b in 0u8..128, c in 0u8..8, d in 0u8..8,
    ) {
        let (start_col, end_col) = (a.min(b), a.max(b));
        let (start_page, end_page) = (c.min(d), c.max(d));
        let expected = (end_col - start_col + 1) as usize * (end_page - start_page + 1) as usize;
        prop_assert_eq!(compute_length(start_col, end_col, start_page, end_page), expected);

        let area = AddressWindow::new(Dimensions::W128_H64, start_col, end_col, start_page, end_page);
        prop_assert_eq!(area.map(|area| area.buflen()), Ok(expected));
    }

    /// Every accepted panel size builds a config and a full window covering its buffer.
    #[test]
    fn accepted_dimensions_cover_whole_buffer(width in 1u16..=128, pages in 1u16..=8) {
        let dims = Dimensions::new(width, pages * 8);
        prop_assert!(dims.is_ok());
        if let Ok(dims) = dims {
            let config = Builder::new().dimensions(dims).build();
            prop_assert!(config.is_ok());
            if let Ok(config) = config {
                prop_assert_eq!(config.init_sequence()[6], (pages * 8 - 1) as u8);
            }
            prop_assert_eq!(AddressWindow::full(dims).buflen(), dims.buffer_size());
        }
    }

    /// Panel sizes outside the controller's range are rejected.
    #[test]
    fn unsupported_dimensions_are_rejected(width in 129u16..=u16::MAX, height in 0u16..=u16::MAX) {
        prop_assert!(Dimensions::new(width, height).is_err());
        prop_assert!(Dimensions::new(height % 129, 0).is_err());
    }

    /// Windows with reversed bounds are always rejected.
    #[test]
    fn reversed_window_is_rejected(a in 0u8..128, b in 0u8..128) {
        if a > b {
            prop_assert!(AddressWindow::new(Dimensions::W128_H64, a, b, 0, 0).is_err());
        }
    }

    /// A line whose endpoints coincide lights exactly one pixel.
    #[test]
    fn degenerate_line_is_single_pixel(x in 0i32..128, y in 0i32..64) {
        let mut frame = FrameBuffer::new_128x64();
        raster::draw_line(&mut frame, x, y, x, y, true);
        prop_assert_eq!(frame.as_bytes().iter().map(|b| b.count_ones()).sum::<u32>(), 1);
        prop_assert_eq!(frame.pixel(x, y), Some(true));
    }

    /// Lines include both endpoints and light one pixel per step of the longer axis.
    #[test]
    fn line_includes_endpoints(
        x0 in 0i32..128, y0 in 0i32..64, x1 in 0i32..128, y1 in 0i32..64,
    ) {
        let mut frame = FrameBuffer::new_128x64();
        raster::draw_line(&mut frame, x0, y0, x1, y1, true);
        prop_assert_eq!(frame.pixel(x0, y0), Some(true));
        prop_assert_eq!(frame.pixel(x1, y1), Some(true));

        let lit = frame.as_bytes().iter().map(|b| b.count_ones()).sum::<u32>();
        let longest = (x1 - x0).abs().max((y1 - y0).abs()) as u32 + 1;
        prop_assert_eq!(lit, longest);
    }

    /// Every character maps into the glyph table.
    #[test]
    fn glyph_index_is_total(ch in proptest::char::any()) {
        prop_assert!(font::char_to_glyph_index(ch) < font::GLYPH_COUNT);
    }

    /// Text never panics and advances 8 pixels per character when it starts on screen.
    #[test]
    fn write_string_never_panics(x in -16i32..144, y in -16i32..80, s in "[A-Za-z0-9=,%. ]{0,20}") {
        let mut frame = FrameBuffer::new_128x64();
        let cursor = text::write_string(&mut frame, x, y, &s);
        if (0..=120).contains(&x) && (0..=56).contains(&y) {
            prop_assert_eq!(cursor, x + 8 * s.chars().count() as i32);
        } else {
            prop_assert_eq!(cursor, x);
            prop_assert!(frame.as_bytes().iter().all(|&b| b == 0));
        }
    }
}
