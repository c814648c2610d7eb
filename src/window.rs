//! Column/page address windows for partial refresh
//!
//! An [`AddressWindow`] names the rectangle of GDDRAM a render targets, in
//! column and page units, together with the number of bytes it covers. The
//! byte count is derived from the bounds on every construction or change, so
//! it can never drift from them.
//!
//! ## Example
//!
//! ```
//! use ssd1306_paged::{AddressWindow, Dimensions};
//!
//! let full = AddressWindow::full(Dimensions::W128_H64);
//! assert_eq!(full.buflen(), 1024);
//!
//! // Two pages of the first 16 columns
//! let area = match AddressWindow::new(Dimensions::W128_H64, 0, 15, 2, 3) {
//!     Ok(area) => area,
//!     Err(_) => return,
//! };
//! assert_eq!(area.buflen(), 32);
//! ```

use crate::config::Dimensions;
use crate::error::WindowError;

/// Number of bytes covered by a column/page rectangle
///
/// `(end_col - start_col + 1) * (end_page - start_page + 1)`; bounds are
/// inclusive and must satisfy `start <= end`.
pub fn compute_length(start_col: u8, end_col: u8, start_page: u8, end_page: u8) -> usize {
    let columns = end_col as usize - start_col as usize + 1;
    let pages = end_page as usize - start_page as usize + 1;
    columns * pages
}

/// Rectangular GDDRAM region targeted by a render
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct AddressWindow {
    start_col: u8,
    end_col: u8,
    start_page: u8,
    end_page: u8,
    /// Cached [`compute_length`] of the bounds above
    buflen: usize,
}

impl AddressWindow {
    /// Create a window, validating it against the panel
    ///
    /// # Errors
    ///
    /// Returns `WindowError::InvalidColumns` if `start_col > end_col` or
    /// `end_col >= width`, and `WindowError::InvalidPages` if
    /// `start_page > end_page` or `end_page >= height / 8`.
    pub fn new(
        dimensions: Dimensions,
        start_col: u8,
        end_col: u8,
        start_page: u8,
        end_page: u8,
    ) -> Result<Self, WindowError> {
        check_columns(dimensions, start_col, end_col)?;
        check_pages(dimensions, start_page, end_page)?;
        Ok(Self {
            start_col,
            end_col,
            start_page,
            end_page,
            buflen: compute_length(start_col, end_col, start_page, end_page),
        })
    }

    /// Window covering the whole panel
    pub fn full(dimensions: Dimensions) -> Self {
        let end_col = (dimensions.width() - 1) as u8;
        let end_page = (dimensions.pages() - 1) as u8;
        Self {
            start_col: 0,
            end_col,
            start_page: 0,
            end_page,
            buflen: compute_length(0, end_col, 0, end_page),
        }
    }

    /// Move the column bounds, recomputing the length
    ///
    /// On error the window is left unchanged.
    pub fn set_columns(
        &mut self,
        dimensions: Dimensions,
        start_col: u8,
        end_col: u8,
    ) -> Result<(), WindowError> {
        check_columns(dimensions, start_col, end_col)?;
        self.start_col = start_col;
        self.end_col = end_col;
        self.buflen = compute_length(start_col, end_col, self.start_page, self.end_page);
        Ok(())
    }

    /// Move the page bounds, recomputing the length
    ///
    /// On error the window is left unchanged.
    pub fn set_pages(
        &mut self,
        dimensions: Dimensions,
        start_page: u8,
        end_page: u8,
    ) -> Result<(), WindowError> {
        check_pages(dimensions, start_page, end_page)?;
        self.start_page = start_page;
        self.end_page = end_page;
        self.buflen = compute_length(self.start_col, self.end_col, start_page, end_page);
        Ok(())
    }

    /// First column
    pub fn start_col(&self) -> u8 {
        self.start_col
    }

    /// Last column (inclusive)
    pub fn end_col(&self) -> u8 {
        self.end_col
    }

    /// First page
    pub fn start_page(&self) -> u8 {
        self.start_page
    }

    /// Last page (inclusive)
    pub fn end_page(&self) -> u8 {
        self.end_page
    }

    /// Number of bytes the controller expects after addressing this window
    pub fn buflen(&self) -> usize {
        self.buflen
    }

    /// Flat framebuffer index of the window's first byte
    pub fn offset(&self, width: u16) -> usize {
        self.start_page as usize * width as usize + self.start_col as usize
    }
}

fn check_columns(dimensions: Dimensions, start: u8, end: u8) -> Result<(), WindowError> {
    if start > end || end as u16 >= dimensions.width() {
        return Err(WindowError::InvalidColumns { start, end });
    }
    Ok(())
}

fn check_pages(dimensions: Dimensions, start: u8, end: u8) -> Result<(), WindowError> {
    if start > end || end as u16 >= dimensions.pages() {
        return Err(WindowError::InvalidPages { start, end });
    }
    Ok(())
}
