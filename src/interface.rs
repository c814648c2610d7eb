//! Hardware interface abstraction
//!
//! This module provides the [`DisplayInterface`] trait and the [`I2cInterface`] struct
//! for communicating with the SSD1306 controller over I2C.
//!
//! ## Hardware Requirements
//!
//! The SSD1306 in I2C mode needs only SDA and SCL. The controller is write-only
//! here: every transfer starts with a control byte that tells it whether the
//! following bytes are a command ([`CONTROL_COMMAND`]) or GDDRAM data
//! ([`CONTROL_DATA`]).
//!
//! ## Example
//!
//! ```rust,no_run
//! use embedded_hal::i2c::{ErrorType, I2c, Operation};
//! use ssd1306_paged::{DisplayInterface, I2cInterface};
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
//! // Create interface on the default 0x3C address
//! let mut interface = I2cInterface::new(MockI2c);
//!
//! // Send command
//! let _ = interface.send_command(0xAF); // Display on
//!
//! // Send data
//! let _ = interface.send_data(&[0xFF, 0x00, 0xFF]);
//! ```

use core::fmt::Debug;
use embedded_hal::i2c::I2c;

use crate::command::{CONTROL_COMMAND, CONTROL_DATA};

type InterfaceResult<T, E> = core::result::Result<T, E>;

/// Default 7-bit I2C address of SSD1306 modules (SA0 low)
pub const DEFAULT_I2C_ADDRESS: u8 = 0x3C;

/// Recommended I2C bus clock (fast mode)
///
/// The driver does not configure the bus; pass this to your HAL when creating it.
pub const DEFAULT_I2C_FREQUENCY_HZ: u32 = 400_000;

/// Largest data payload sent in a single I2C write
///
/// Matches a full 128x64 frame, so a full-screen render is one transfer.
pub const DATA_CHUNK_LEN: usize = 1024;

/// Trait for hardware interface to the SSD1306 controller
///
/// This trait abstracts over the bus, allowing the
/// [`Display`](crate::display::Display) to work with any transport that can
/// deliver framed command and data bytes.
///
/// ## Implementing
///
/// For most cases, use the provided [`I2cInterface`]. Implement this trait on
/// your own type for other transports or for capturing traffic in tests.
pub trait DisplayInterface {
    /// Error type for interface operations
    ///
    /// Must implement [`Debug`] for error reporting.
    type Error: Debug;

    /// Send a single command byte to the controller
    ///
    /// The implementation must frame the byte as a command
    /// (control byte [`CONTROL_COMMAND`] on I2C).
    ///
    /// # Errors
    ///
    /// Returns an error if the bus transfer fails.
    fn send_command(&mut self, command: u8) -> InterfaceResult<(), Self::Error>;

    /// Send a list of command bytes, in order
    ///
    /// Command arguments travel as command bytes too, so a multi-byte command
    /// is a list. The default sends one framed byte at a time and stops at the
    /// first failure.
    ///
    /// # Errors
    ///
    /// Returns the first error reported by [`send_command`](Self::send_command).
    fn send_commands(&mut self, commands: &[u8]) -> InterfaceResult<(), Self::Error> {
        for &command in commands {
            self.send_command(command)?;
        }
        Ok(())
    }

    /// Send display data bytes to the controller
    ///
    /// The implementation must frame the bytes as GDDRAM data
    /// (control byte [`CONTROL_DATA`] on I2C).
    ///
    /// # Errors
    ///
    /// Returns an error if the bus transfer fails.
    fn send_data(&mut self, data: &[u8]) -> InterfaceResult<(), Self::Error>;
}

/// Errors that can occur at the interface level
#[derive(Debug)]
pub enum InterfaceError<I2cErr> {
    /// I2C communication error
    I2c(I2cErr),
}

impl<I2cErr: Debug> core::fmt::Display for InterfaceError<I2cErr> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Self::I2c(e) => write!(f, "I2C error: {e:?}"),
        }
    }
}

impl<I2cErr: Debug> core::error::Error for InterfaceError<I2cErr> {}

/// I2C interface implementation for the SSD1306
///
/// Implements [`DisplayInterface`] for an embedded-hal v1.0 [`I2c`] bus.
///
/// The interface owns a scratch buffer used to prepend the data control byte
/// to pixel payloads. It is allocated with the interface and reused for every
/// transfer, so rendering never allocates.
///
/// ## Example
///
/// ```rust,no_run
/// use ssd1306_paged::{Builder, Dimensions, Display, I2cInterface};
/// # use embedded_hal::i2c::{ErrorType, I2c, Operation};
/// # struct MockI2c;
/// # impl ErrorType for MockI2c { type Error = core::convert::Infallible; }
/// # impl I2c for MockI2c {
/// #     fn transaction(
/// #         &mut self,
/// #         _address: u8,
/// #         _operations: &mut [Operation<'_>],
/// #     ) -> Result<(), Self::Error> {
/// #         Ok(())
/// #     }
/// # }
/// // Module strapped to the alternate address
/// let interface = I2cInterface::with_address(MockI2c, 0x3D);
///
/// # let config = match Builder::new().dimensions(Dimensions::W128_H64).build() {
/// #     Ok(config) => config,
/// #     Err(_) => return,
/// # };
/// let _display = Display::new(interface, config);
/// ```
pub struct I2cInterface<I2C> {
    /// I2C bus
    i2c: I2C,
    /// 7-bit device address
    address: u8,
    /// Control byte followed by up to one chunk of data
    scratch: [u8; DATA_CHUNK_LEN + 1],
}

impl<I2C> I2cInterface<I2C>
where
    I2C: I2c,
{
    /// Create a new interface on [`DEFAULT_I2C_ADDRESS`]
    pub fn new(i2c: I2C) -> Self {
        Self::with_address(i2c, DEFAULT_I2C_ADDRESS)
    }

    /// Create a new interface on a specific 7-bit address
    pub fn with_address(i2c: I2C, address: u8) -> Self {
        Self {
            i2c,
            address,
            scratch: [0; DATA_CHUNK_LEN + 1],
        }
    }

    /// Get the 7-bit device address
    pub fn address(&self) -> u8 {
        self.address
    }

    /// Consume the interface and return the bus
    pub fn release(self) -> I2C {
        self.i2c
    }
}

impl<I2C> DisplayInterface for I2cInterface<I2C>
where
    I2C: I2c,
{
    type Error = InterfaceError<I2C::Error>;

    fn send_command(&mut self, command: u8) -> InterfaceResult<(), Self::Error> {
        self.i2c
            .write(self.address, &[CONTROL_COMMAND, command])
            .map_err(InterfaceError::I2c)
    }

    fn send_data(&mut self, data: &[u8]) -> InterfaceResult<(), Self::Error> {
        // Horizontal addressing wraps the column pointer onto the next page,
        // so chunks can be sent back to back.
        self.scratch[0] = CONTROL_DATA;
        for chunk in data.chunks(DATA_CHUNK_LEN) {
            let framed = chunk.len() + 1;
            self.scratch[1..framed].copy_from_slice(chunk);
            self.i2c
                .write(self.address, &self.scratch[..framed])
                .map_err(InterfaceError::I2c)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::vec::Vec;
    use embedded_hal::i2c::{ErrorKind, ErrorType, Operation};

    #[derive(Debug, Clone, Copy, PartialEq)]
    struct MockError;

    impl embedded_hal::i2c::Error for MockError {
        fn kind(&self) -> ErrorKind {
            ErrorKind::Other
        }
    }

    #[derive(Debug, Default)]
    struct MockI2c {
        writes: Vec<(u8, Vec<u8>)>,
        fail_after: Option<usize>,
    }

    impl ErrorType for MockI2c {
        type Error = MockError;
    }

    impl I2c for MockI2c {
        fn transaction(
            &mut self,
            address: u8,
            operations: &mut [Operation<'_>],
        ) -> Result<(), Self::Error> {
            if self.fail_after.is_some_and(|limit| self.writes.len() >= limit) {
                return Err(MockError);
            }
            for op in operations.iter() {
                if let Operation::Write(bytes) = op {
                    self.writes.push((address, bytes.to_vec()));
                }
            }
            Ok(())
        }
    }

    #[test]
    fn test_default_address() {
        let interface = I2cInterface::new(MockI2c::default());
        assert_eq!(interface.address(), 0x3C);
        assert_eq!(DEFAULT_I2C_FREQUENCY_HZ, 400_000);
    }

    #[test]
    fn test_command_framing() {
        let mut interface = I2cInterface::with_address(MockI2c::default(), 0x3D);
        interface.send_command(0xAF).unwrap();

        let i2c = interface.release();
        assert_eq!(i2c.writes, alloc::vec![(0x3D, alloc::vec![0x80, 0xAF])]);
    }

    #[test]
    fn test_command_list_frames_each_byte() {
        let mut interface = I2cInterface::new(MockI2c::default());
        interface.send_commands(&[0x81, 0x7F]).unwrap();

        let i2c = interface.release();
        assert_eq!(
            i2c.writes,
            alloc::vec![
                (0x3C, alloc::vec![0x80, 0x81]),
                (0x3C, alloc::vec![0x80, 0x7F]),
            ]
        );
    }

    #[test]
    fn test_data_framing() {
        let mut interface = I2cInterface::new(MockI2c::default());
        interface.send_data(&[0x01, 0x02, 0x03]).unwrap();

        let i2c = interface.release();
        assert_eq!(
            i2c.writes,
            alloc::vec![(0x3C, alloc::vec![0x40, 0x01, 0x02, 0x03])]
        );
    }

    #[test]
    fn test_full_frame_is_single_transfer() {
        let mut interface = I2cInterface::new(MockI2c::default());
        let frame = [0xA5u8; 1024];
        interface.send_data(&frame).unwrap();

        let i2c = interface.release();
        assert_eq!(i2c.writes.len(), 1);
        assert_eq!(i2c.writes[0].1.len(), 1025);
        assert_eq!(i2c.writes[0].1[0], 0x40);
    }

    #[test]
    fn test_oversized_payload_is_chunked() {
        let mut interface = I2cInterface::new(MockI2c::default());
        let payload = [0x11u8; DATA_CHUNK_LEN + 10];
        interface.send_data(&payload).unwrap();

        let i2c = interface.release();
        assert_eq!(i2c.writes.len(), 2);
        assert_eq!(i2c.writes[0].1.len(), DATA_CHUNK_LEN + 1);
        assert_eq!(i2c.writes[1].1, {
            let mut expected = alloc::vec![0x40];
            expected.extend_from_slice(&[0x11; 10]);
            expected
        });
    }

    #[test]
    fn test_scratch_is_reused_between_transfers() {
        let mut interface = I2cInterface::new(MockI2c::default());
        interface.send_data(&[0xFF; 8]).unwrap();
        interface.send_data(&[0x01]).unwrap();

        let i2c = interface.release();
        assert_eq!(i2c.writes[1].1, alloc::vec![0x40, 0x01]);
    }

    #[test]
    fn test_empty_payload_sends_nothing() {
        let mut interface = I2cInterface::new(MockI2c::default());
        interface.send_data(&[]).unwrap();
        assert!(interface.release().writes.is_empty());
    }

    #[test]
    fn test_bus_error_is_surfaced() {
        let mut interface = I2cInterface::new(MockI2c {
            writes: Vec::new(),
            fail_after: Some(1),
        });
        assert!(interface.send_commands(&[0xAE, 0xAF, 0xA6]).is_err());

        let i2c = interface.release();
        // Stops at the first failed byte
        assert_eq!(i2c.writes.len(), 1);
    }
}
