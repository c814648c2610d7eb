//! Display configuration types and builder

use crate::command::{
    MEM_MODE_HORIZONTAL, SET_CHARGE_PUMP, SET_COM_OUT_DIR, SET_COM_PIN_CFG, SET_CONTRAST,
    SET_DISP, SET_DISP_CLK_DIV, SET_DISP_OFFSET, SET_DISP_START_LINE, SET_ENTIRE_ON,
    SET_MEM_MODE, SET_MUX_RATIO, SET_NORM_DISP, SET_PRECHARGE, SET_SCROLL, SET_SEG_REMAP,
    SET_VCOM_DESEL,
};
pub use crate::error::{BuilderError, MAX_COLUMNS, MAX_ROWS};

/// Height of one display page in pixels
///
/// Each framebuffer byte holds one column of a page.
pub const PAGE_HEIGHT: u16 = 8;

/// Number of bytes in the bring-up command sequence
pub const INIT_SEQUENCE_LEN: usize = 26;

/// Display dimensions
///
/// Only obtainable through [`Dimensions::new`] or the panel constants, so a
/// value always describes a panel the controller can drive.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Dimensions {
    /// Width in pixels (columns, corresponds to segment outputs)
    width: u16,
    /// Height in pixels (rows, corresponds to common outputs)
    height: u16,
}

impl Dimensions {
    /// 128x64 panel
    pub const W128_H64: Self = Self {
        width: 128,
        height: 64,
    };

    /// 128x32 panel
    pub const W128_H32: Self = Self {
        width: 128,
        height: 32,
    };

    /// Create new dimensions with validation
    ///
    /// # Errors
    ///
    /// Returns `BuilderError::InvalidDimensions` if:
    /// - width == 0 or width > MAX_COLUMNS
    /// - height == 0 or height > MAX_ROWS
    /// - height % 8 != 0 (must be whole pages)
    pub fn new(width: u16, height: u16) -> Result<Self, BuilderError> {
        if width == 0 || width > MAX_COLUMNS {
            return Err(BuilderError::InvalidDimensions { width, height });
        }
        if height == 0 || height > MAX_ROWS || height % PAGE_HEIGHT != 0 {
            return Err(BuilderError::InvalidDimensions { width, height });
        }
        Ok(Self { width, height })
    }

    /// Width in pixels
    pub fn width(&self) -> u16 {
        self.width
    }

    /// Height in pixels
    pub fn height(&self) -> u16 {
        self.height
    }

    /// Number of 8-pixel pages
    pub fn pages(&self) -> u16 {
        self.height / PAGE_HEIGHT
    }

    /// Calculate required buffer size in bytes
    pub fn buffer_size(&self) -> usize {
        self.pages() as usize * self.width as usize
    }

    /// COM pins configuration that matches the panel wiring
    ///
    /// 128x64 modules use alternative COM pins (0x12); 128x32 and anything
    /// else use sequential pins (0x02).
    pub fn default_com_pin_config(&self) -> u8 {
        match (self.width, self.height) {
            (128, 64) => 0x12,
            _ => 0x02,
        }
    }
}

/// Display configuration
///
/// Holds the panel parameters sent during bring-up. Use `Builder` to create a Config.
#[derive(Clone, Debug)]
pub struct Config {
    /// Display dimensions
    pub dimensions: Dimensions,
    /// COM pins hardware configuration byte
    pub com_pin_config: u8,
    /// Display clock divide ratio / oscillator frequency byte
    pub clock_divide: u8,
    /// Pre-charge period byte
    pub precharge: u8,
    /// VCOMH deselect level byte
    pub vcom_deselect: u8,
    /// Contrast applied during bring-up
    pub contrast: u8,
    /// Charge pump setting byte
    pub charge_pump: u8,
}

impl Config {
    /// Bring-up command sequence for this configuration
    ///
    /// Display off, horizontal addressing, panel layout, timing, contrast,
    /// normal video, charge pump, scrolling disabled, display on.
    pub fn init_sequence(&self) -> [u8; INIT_SEQUENCE_LEN] {
        [
            SET_DISP,
            SET_MEM_MODE,
            MEM_MODE_HORIZONTAL,
            SET_DISP_START_LINE,
            SET_SEG_REMAP | 0x01,
            SET_MUX_RATIO,
            (self.dimensions.height - 1) as u8,
            SET_COM_OUT_DIR | 0x08,
            SET_DISP_OFFSET,
            0x00,
            SET_COM_PIN_CFG,
            self.com_pin_config,
            SET_DISP_CLK_DIV,
            self.clock_divide,
            SET_PRECHARGE,
            self.precharge,
            SET_VCOM_DESEL,
            self.vcom_deselect,
            SET_CONTRAST,
            self.contrast,
            SET_ENTIRE_ON,
            SET_NORM_DISP,
            SET_CHARGE_PUMP,
            self.charge_pump,
            // Scrolling must be off while GDDRAM is written
            SET_SCROLL,
            SET_DISP | 0x01,
        ]
    }
}

/// Builder for constructing display configuration
///
/// # Example
///
/// ```rust,no_run
/// use ssd1306_paged::{Builder, Dimensions};
///
/// let dims = match Dimensions::new(128, 32) {
///     Ok(dims) => dims,
///     Err(_) => return,
/// };
/// let config = match Builder::new().dimensions(dims).contrast(0x80).build() {
///     Ok(config) => config,
///     Err(_) => return,
/// };
/// assert_eq!(config.com_pin_config, 0x02);
/// ```
#[must_use]
pub struct Builder {
    /// Display dimensions (required)
    dimensions: Option<Dimensions>,
    /// COM pins override; derived from dimensions when unset
    com_pin_config: Option<u8>,
    clock_divide: u8,
    precharge: u8,
    vcom_deselect: u8,
    contrast: u8,
    charge_pump: u8,
}

impl Default for Builder {
    fn default() -> Self {
        Self {
            dimensions: None,
            com_pin_config: None,
            // Divide ratio 1, default oscillator frequency
            clock_divide: 0x80,
            // Internally generated VCC
            precharge: 0xF1,
            // ~0.83 x VCC
            vcom_deselect: 0x30,
            contrast: 0xFF,
            // Internal charge pump enabled
            charge_pump: 0x14,
        }
    }
}

impl Builder {
    /// Create a new Builder with default values
    pub fn new() -> Self {
        Self::default()
    }

    /// Set display dimensions (required)
    pub fn dimensions(mut self, dims: Dimensions) -> Self {
        self.dimensions = Some(dims);
        self
    }

    /// Override the COM pins hardware configuration byte
    ///
    /// Some modules need 0x22 or 0x32 instead of the derived default.
    pub fn com_pin_config(mut self, value: u8) -> Self {
        self.com_pin_config = Some(value);
        self
    }

    /// Set display clock divide ratio / oscillator frequency
    pub fn clock_divide(mut self, value: u8) -> Self {
        self.clock_divide = value;
        self
    }

    /// Set pre-charge period
    pub fn precharge(mut self, value: u8) -> Self {
        self.precharge = value;
        self
    }

    /// Set VCOMH deselect level
    pub fn vcom_deselect(mut self, value: u8) -> Self {
        self.vcom_deselect = value;
        self
    }

    /// Set contrast applied during bring-up
    pub fn contrast(mut self, value: u8) -> Self {
        self.contrast = value;
        self
    }

    /// Set charge pump byte (0x14 internal, 0x10 external VCC)
    pub fn charge_pump(mut self, value: u8) -> Self {
        self.charge_pump = value;
        self
    }

    /// Build the configuration
    ///
    /// # Errors
    ///
    /// Returns `BuilderError::MissingDimensions` if dimensions were not set
    pub fn build(self) -> Result<Config, BuilderError> {
        let requested = self.dimensions.ok_or(BuilderError::MissingDimensions)?;
        let dimensions = Dimensions::new(requested.width, requested.height)?;
        Ok(Config {
            dimensions,
            com_pin_config: self
                .com_pin_config
                .unwrap_or_else(|| dimensions.default_com_pin_config()),
            clock_divide: self.clock_divide,
            precharge: self.precharge,
            vcom_deselect: self.vcom_deselect,
            contrast: self.contrast,
            charge_pump: self.charge_pump,
        })
    }
}
