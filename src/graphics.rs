//! Graphics support via embedded-graphics
//!
//! [`FrameBuffer`] implements [`DrawTarget`] with [`BinaryColor`], so any
//! embedded-graphics primitive, font or image can be drawn into it and then
//! sent with [`Display::render`](crate::Display::render).
//!
//! Unlike the [`raster`](crate::raster) functions, drawing through
//! embedded-graphics clips: pixels outside the panel are skipped.
//!
//! ## Example
//!
//! ```rust
//! use embedded_graphics::{
//!     mono_font::{ascii::FONT_6X10, MonoTextStyle},
//!     pixelcolor::BinaryColor,
//!     prelude::*,
//!     primitives::{Circle, PrimitiveStyle, Rectangle},
//!     text::Text,
//! };
//! use ssd1306_paged::FrameBuffer;
//!
//! let mut frame = FrameBuffer::new_128x64();
//!
//! let _ = Rectangle::new(Point::new(0, 0), Size::new(128, 16))
//!     .into_styled(PrimitiveStyle::with_fill(BinaryColor::On))
//!     .draw(&mut frame);
//!
//! let _ = Circle::new(Point::new(100, 30), 30)
//!     .into_styled(PrimitiveStyle::with_stroke(BinaryColor::On, 1))
//!     .draw(&mut frame);
//!
//! let _ = Text::new(
//!     "Hello, OLED!",
//!     Point::new(4, 40),
//!     MonoTextStyle::new(&FONT_6X10, BinaryColor::On),
//! )
//! .draw(&mut frame);
//!
//! assert_eq!(frame.as_bytes()[0], 0xFF);
//! ```

use core::convert::Infallible;
use embedded_graphics_core::{
    draw_target::DrawTarget,
    geometry::{OriginDimensions, Size},
    pixelcolor::BinaryColor,
    prelude::Pixel,
};

use crate::framebuffer::FrameBuffer;

impl<B> DrawTarget for FrameBuffer<B>
where
    B: AsRef<[u8]> + AsMut<[u8]>,
{
    type Color = BinaryColor;
    type Error = Infallible;

    fn draw_iter<Iter>(&mut self, pixels: Iter) -> Result<(), Self::Error>
    where
        Iter: IntoIterator<Item = Pixel<Self::Color>>,
    {
        for Pixel(point, color) in pixels {
            let Some((index, mask)) = self.pixel_index(point.x, point.y) else {
                continue;
            };
            let byte = &mut self.as_bytes_mut()[index];
            if color.is_on() {
                *byte |= mask;
            } else {
                *byte &= !mask;
            }
        }

        Ok(())
    }

    fn clear(&mut self, color: Self::Color) -> Result<(), Self::Error> {
        self.fill(color.is_on());
        Ok(())
    }
}

impl<B> OriginDimensions for FrameBuffer<B>
where
    B: AsRef<[u8]> + AsMut<[u8]>,
{
    fn size(&self) -> Size {
        Size::new(self.width() as u32, self.height() as u32)
    }
}
