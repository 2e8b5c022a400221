//! Hardware interface abstraction
//!
//! This module provides one trait per board and an `embedded-hal` backed
//! implementation of each:
//!
//! - [`FrameInterface`] / [`SpiInterface`]: the 10x10 RGB board takes whole
//!   LED frames over SPI (MOSI + SCK only).
//! - [`RegisterInterface`] / [`I2cInterface`]: the 16x12 R board is an
//!   IS31FL3733 register file on I2C, plus the active-low **SDB** shutdown
//!   pin (wired to the Click RST position).
//!
//! ## Example
//!
//! ```rust,no_run
//! use embedded_hal::delay::DelayNs;
//! use embedded_hal::digital::OutputPin;
//! use embedded_hal::i2c::{I2c, Operation};
//! use click_matrix::{command, I2cInterface, RegisterInterface};
//! # use core::convert::Infallible;
//! # struct MockI2c;
//! # impl embedded_hal::i2c::ErrorType for MockI2c { type Error = Infallible; }
//! # impl I2c for MockI2c {
//! #     fn transaction(
//! #         &mut self,
//! #         _address: u8,
//! #         _operations: &mut [Operation<'_>],
//! #     ) -> Result<(), Self::Error> {
//! #         Ok(())
//! #     }
//! # }
//! # struct MockPin;
//! # impl embedded_hal::digital::ErrorType for MockPin { type Error = Infallible; }
//! # impl OutputPin for MockPin {
//! #     fn set_low(&mut self) -> Result<(), Self::Error> { Ok(()) }
//! #     fn set_high(&mut self) -> Result<(), Self::Error> { Ok(()) }
//! # }
//! # struct MockDelay;
//! # impl DelayNs for MockDelay { fn delay_ns(&mut self, _ns: u32) {} }
//! # let mut delay = MockDelay;
//! let mut interface = I2cInterface::new(MockI2c, MockPin, command::DEFAULT_ADDRESS);
//!
//! // Leave hardware shutdown
//! let _ = interface.enable(&mut delay);
//!
//! // Read the interrupt status register
//! let _ = interface.read_register(command::INTERRUPT_STATUS);
//! ```

use core::fmt::Debug;
use embedded_hal::delay::DelayNs;
use embedded_hal::digital::OutputPin;
use embedded_hal::i2c::{I2c, Operation};
use embedded_hal::spi::SpiDevice;

type InterfaceResult<T, E> = core::result::Result<T, E>;

/// Trait for the 10x10 RGB board's frame transport
///
/// The LED chain has no registers: every update is one complete frame
/// (start marker, four bytes per LED, end marker) clocked out in a single
/// transfer.
pub trait FrameInterface {
    /// Error type for interface operations
    type Error: Debug;

    /// Clock out one complete frame
    ///
    /// # Errors
    ///
    /// Returns an error if the SPI transfer fails.
    fn write_frame(&mut self, frame: &[u8]) -> InterfaceResult<(), Self::Error>;
}

/// Trait for the 16x12 R board's register transport
///
/// Page selection is left to the caller; register addresses refer to the
/// page most recently selected through
/// [`COMMAND_REGISTER`](crate::command::COMMAND_REGISTER).
pub trait RegisterInterface {
    /// Error type for interface operations
    type Error: Debug;

    /// Write `data` to consecutive registers starting at `start`
    ///
    /// The implementation must send the start address followed by the data
    /// in one bus transaction so the controller auto-increments.
    ///
    /// # Errors
    ///
    /// Returns an error if the bus transfer fails.
    fn write_registers(&mut self, start: u8, data: &[u8]) -> InterfaceResult<(), Self::Error>;

    /// Read one register
    ///
    /// # Errors
    ///
    /// Returns an error if the bus transfer fails.
    fn read_register(&mut self, register: u8) -> InterfaceResult<u8, Self::Error>;

    /// Bring the controller out of hardware shutdown
    ///
    /// The implementation must:
    /// 1. Set SDB low
    /// 2. Wait at least 1ms
    /// 3. Set SDB high
    /// 4. Wait at least 1ms
    ///
    /// # Errors
    ///
    /// Returns an error if the pin cannot be driven.
    fn enable<D: DelayNs>(&mut self, delay: &mut D) -> InterfaceResult<(), Self::Error>;

    /// Put the controller into hardware shutdown (SDB low)
    ///
    /// # Errors
    ///
    /// Returns an error if the pin cannot be driven.
    fn disable(&mut self) -> InterfaceResult<(), Self::Error>;
}

/// Errors that can occur at the interface level
///
/// Generic over bus and GPIO error types.
#[derive(Debug, PartialEq, Eq)]
pub enum InterfaceError<BusErr, PinErr> {
    /// SPI or I2C communication error
    Bus(BusErr),
    /// GPIO pin error
    Pin(PinErr),
}

impl<BusErr: Debug, PinErr: Debug> core::fmt::Display for InterfaceError<BusErr, PinErr> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Self::Bus(e) => write!(f, "Bus error: {e:?}"),
            Self::Pin(e) => write!(f, "Pin error: {e:?}"),
        }
    }
}

impl<BusErr: Debug, PinErr: Debug> core::error::Error for InterfaceError<BusErr, PinErr> {}

/// SPI transport for the 10x10 RGB board
///
/// Chip select is handled by the [`SpiDevice`].
pub struct SpiInterface<SPI> {
    spi: SPI,
}

impl<SPI: SpiDevice> SpiInterface<SPI> {
    /// Create a new SPI interface
    pub fn new(spi: SPI) -> Self {
        Self { spi }
    }

    /// Give back the SPI device
    pub fn release(self) -> SPI {
        self.spi
    }
}

impl<SPI> FrameInterface for SpiInterface<SPI>
where
    SPI: SpiDevice,
    SPI::Error: Debug,
{
    type Error = SPI::Error;

    fn write_frame(&mut self, frame: &[u8]) -> InterfaceResult<(), Self::Error> {
        self.spi.write(frame)
    }
}

/// I2C transport for the 16x12 R board
///
/// ## Type Parameters
///
/// * `I2C` - Bus implementing [`I2c`]
/// * `SDB` - Shutdown pin implementing [`OutputPin`] (active low)
pub struct I2cInterface<I2C, SDB> {
    /// I2C bus
    i2c: I2C,
    /// Shutdown pin (low = hardware shutdown)
    sdb: SDB,
    /// 7-bit device address
    address: u8,
}

impl<I2C, SDB> I2cInterface<I2C, SDB>
where
    I2C: I2c,
    SDB: OutputPin,
{
    /// Create a new interface
    ///
    /// # Arguments
    ///
    /// * `i2c` - I2C bus
    /// * `sdb` - Shutdown pin (output, active low)
    /// * `address` - 7-bit address selected by the ADDR pins
    pub fn new(i2c: I2C, sdb: SDB, address: u8) -> Self {
        Self { i2c, sdb, address }
    }

    /// The 7-bit device address
    pub fn address(&self) -> u8 {
        self.address
    }

    /// Give back the bus and pin
    pub fn release(self) -> (I2C, SDB) {
        (self.i2c, self.sdb)
    }
}

impl<I2C, SDB> RegisterInterface for I2cInterface<I2C, SDB>
where
    I2C: I2c,
    I2C::Error: Debug,
    SDB: OutputPin,
    SDB::Error: Debug,
{
    type Error = InterfaceError<I2C::Error, SDB::Error>;

    fn write_registers(&mut self, start: u8, data: &[u8]) -> InterfaceResult<(), Self::Error> {
        // Adjacent writes go out without a repeated start
        self.i2c
            .transaction(
                self.address,
                &mut [Operation::Write(&[start]), Operation::Write(data)],
            )
            .map_err(InterfaceError::Bus)
    }

    fn read_register(&mut self, register: u8) -> InterfaceResult<u8, Self::Error> {
        let mut value = [0u8; 1];
        self.i2c
            .write_read(self.address, &[register], &mut value)
            .map_err(InterfaceError::Bus)?;
        Ok(value[0])
    }

    fn enable<D: DelayNs>(&mut self, delay: &mut D) -> InterfaceResult<(), Self::Error> {
        self.sdb.set_low().map_err(InterfaceError::Pin)?;
        delay.delay_ms(1);
        self.sdb.set_high().map_err(InterfaceError::Pin)?;
        delay.delay_ms(1);
        Ok(())
    }

    fn disable(&mut self) -> InterfaceResult<(), Self::Error> {
        self.sdb.set_low().map_err(InterfaceError::Pin)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::vec::Vec;
    use embedded_hal::digital::ErrorType;
    use embedded_hal::i2c::ErrorType as I2cErrorType;

    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    struct MockError;

    impl embedded_hal::i2c::Error for MockError {
        fn kind(&self) -> embedded_hal::i2c::ErrorKind {
            embedded_hal::i2c::ErrorKind::Other
        }
    }

    impl embedded_hal::digital::Error for MockError {
        fn kind(&self) -> embedded_hal::digital::ErrorKind {
            embedded_hal::digital::ErrorKind::Other
        }
    }

    #[derive(Debug, Default)]
    struct MockI2c {
        writes: Vec<(u8, Vec<u8>)>,
        reads: Vec<(u8, u8)>,
        fail: bool,
    }

    impl I2cErrorType for MockI2c {
        type Error = MockError;
    }

    impl I2c for MockI2c {
        fn transaction(
            &mut self,
            address: u8,
            operations: &mut [Operation<'_>],
        ) -> Result<(), Self::Error> {
            if self.fail {
                return Err(MockError);
            }
            let mut written = Vec::new();
            for operation in operations.iter_mut() {
                match operation {
                    Operation::Write(bytes) => written.extend_from_slice(bytes),
                    Operation::Read(buffer) => {
                        buffer.fill(0xA5);
                        if let Some(register) = written.first() {
                            self.reads.push((address, *register));
                        }
                        return Ok(());
                    }
                }
            }
            self.writes.push((address, written));
            Ok(())
        }
    }

    #[derive(Debug, Default)]
    struct MockPin {
        levels: Vec<bool>,
    }

    impl ErrorType for MockPin {
        type Error = MockError;
    }

    impl OutputPin for MockPin {
        fn set_low(&mut self) -> Result<(), Self::Error> {
            self.levels.push(false);
            Ok(())
        }
        fn set_high(&mut self) -> Result<(), Self::Error> {
            self.levels.push(true);
            Ok(())
        }
    }

    #[derive(Default)]
    struct MockDelay {
        ms: u32,
    }

    impl DelayNs for MockDelay {
        fn delay_ns(&mut self, _ns: u32) {}
        fn delay_ms(&mut self, ms: u32) {
            self.ms += ms;
        }
    }

    #[test]
    fn test_write_registers_is_one_transaction() {
        let mut interface = I2cInterface::new(MockI2c::default(), MockPin::default(), 0x50);
        interface.write_registers(0x10, &[1, 2, 3]).unwrap();
        let (i2c, _) = interface.release();
        assert_eq!(i2c.writes, alloc::vec![(0x50, alloc::vec![0x10, 1, 2, 3])]);
    }

    #[test]
    fn test_read_register() {
        let mut interface = I2cInterface::new(MockI2c::default(), MockPin::default(), 0x5A);
        assert_eq!(interface.read_register(0xF1), Ok(0xA5));
        let (i2c, _) = interface.release();
        assert_eq!(i2c.reads, alloc::vec![(0x5A, 0xF1)]);
    }

    #[test]
    fn test_bus_error_is_wrapped() {
        let i2c = MockI2c {
            fail: true,
            ..MockI2c::default()
        };
        let mut interface = I2cInterface::new(i2c, MockPin::default(), 0x50);
        assert_eq!(
            interface.write_registers(0x00, &[0]),
            Err(InterfaceError::Bus(MockError))
        );
    }

    #[test]
    fn test_enable_pulses_sdb() {
        let mut interface = I2cInterface::new(MockI2c::default(), MockPin::default(), 0x50);
        let mut delay = MockDelay::default();
        interface.enable(&mut delay).unwrap();
        interface.disable().unwrap();
        assert_eq!(delay.ms, 2);
        let (_, sdb) = interface.release();
        assert_eq!(sdb.levels, alloc::vec![false, true, false]);
    }
}
