//! Wire constants for both boards
//!
//! ## 10x10 RGB board
//!
//! The LED chain is clocked over SPI as one frame per update:
//!
//! ```text
//! [0x00; 4] | (0xE0 | brightness), blue, green, red | ... | [0xFF; 8]
//! ```
//!
//! ## 16x12 R board (IS31FL3733)
//!
//! Registers live in four pages. A page is selected by unlocking the command
//! register ([`COMMAND_WRITE_LOCK`] <- [`WRITE_LOCK_KEY`]) and then writing
//! the page number to [`COMMAND_REGISTER`]. The unlock only holds for one
//! write, so every page change repeats it.
//!
//! ## Example
//!
//! ```rust,no_run
//! use click_matrix::{command, RegisterInterface};
//! # use core::convert::Infallible;
//! # use embedded_hal::delay::DelayNs;
//! # struct MockRegs;
//! # impl RegisterInterface for MockRegs {
//! #     type Error = Infallible;
//! #     fn write_registers(&mut self, _start: u8, _data: &[u8]) -> Result<(), Infallible> { Ok(()) }
//! #     fn read_register(&mut self, _register: u8) -> Result<u8, Infallible> { Ok(0) }
//! #     fn enable<D: DelayNs>(&mut self, _delay: &mut D) -> Result<(), Infallible> { Ok(()) }
//! #     fn disable(&mut self) -> Result<(), Infallible> { Ok(()) }
//! # }
//! # let mut interface = MockRegs;
//! // Select the function page and leave software shutdown
//! let _ = interface.write_registers(command::COMMAND_WRITE_LOCK, &[command::WRITE_LOCK_KEY]);
//! let _ = interface.write_registers(command::COMMAND_REGISTER, &[command::Page::Function as u8]);
//! let _ = interface.write_registers(command::CONFIGURATION, &[command::CONFIG_NORMAL_OPERATION]);
//! ```

// 10x10 RGB frame layout

/// Start-of-frame marker, four zero bytes
pub const FRAME_START: [u8; 4] = [0x00; 4];

/// End-of-frame marker, eight `0xFF` bytes
///
/// Extra clock edges so the last LEDs in the chain latch their data.
pub const FRAME_END: [u8; 8] = [0xFF; 8];

/// Bytes per LED inside a frame
pub const BYTES_PER_LED: usize = 4;

/// Upper three bits of every LED's first byte
pub const BRIGHTNESS_MARKER: u8 = 0xE0;

/// Mask for the 5-bit global brightness
pub const BRIGHTNESS_MASK: u8 = 0x1F;

// IS31FL3733 paging

/// Command register (0xFD)
///
/// Selects which [`Page`] subsequent register addresses refer to.
pub const COMMAND_REGISTER: u8 = 0xFD;

/// Command register write lock (0xFE)
///
/// Must be written with [`WRITE_LOCK_KEY`] before each write to
/// [`COMMAND_REGISTER`].
pub const COMMAND_WRITE_LOCK: u8 = 0xFE;

/// Key that unlocks [`COMMAND_REGISTER`] for one write
pub const WRITE_LOCK_KEY: u8 = 0xC5;

/// Interrupt mask register (0xF0)
pub const INTERRUPT_MASK: u8 = 0xF0;

/// Interrupt status register (0xF1)
///
/// Bit 0: open detected, bit 1: short detected, bits 2-3: auto breath loop
/// finished.
pub const INTERRUPT_STATUS: u8 = 0xF1;

/// Register pages of the IS31FL3733
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[repr(u8)]
pub enum Page {
    /// LED on/off, open and short status
    LedControl = 0x00,
    /// Per-LED PWM duty
    Pwm = 0x01,
    /// Per-LED auto breath mode
    AutoBreath = 0x02,
    /// Configuration, global current, pull resistors, reset
    Function = 0x03,
}

// Page 0: LED control

/// First LED on/off register; 24 registers, two per SW line
pub const LED_ON_OFF: u8 = 0x00;

/// First LED open-status register (read only)
pub const LED_OPEN: u8 = 0x18;

/// First LED short-status register (read only)
pub const LED_SHORT: u8 = 0x30;

// Page 1: PWM

/// First PWM register; 192 registers, register address = LED index
pub const PWM: u8 = 0x00;

// Page 3: function

/// Configuration register (0x00)
///
/// - Bit 0 (SSD): 0 = software shutdown, 1 = normal operation
/// - Bit 1 (B_EN): auto breath enable
/// - Bits 2-3: open/short detection
pub const CONFIGURATION: u8 = 0x00;

/// Global current control register (0x01), 0x00..=0xFF
pub const GLOBAL_CURRENT: u8 = 0x01;

/// SW pull-up resistor selection (0x0F)
pub const SW_PULL_UP: u8 = 0x0F;

/// CS pull-down resistor selection (0x10)
pub const CS_PULL_DOWN: u8 = 0x10;

/// Reset register (0x11)
///
/// Reading it resets every register to its power-on value.
pub const RESET: u8 = 0x11;

/// Configuration value: normal operation
pub const CONFIG_NORMAL_OPERATION: u8 = 0x01;

/// Configuration value: software shutdown
pub const CONFIG_SOFTWARE_SHUTDOWN: u8 = 0x00;

/// Default 7-bit I2C address (ADDR1 and ADDR2 tied to GND)
pub const DEFAULT_ADDRESS: u8 = 0x50;

/// Lowest valid 7-bit I2C address
pub const MIN_ADDRESS: u8 = 0x50;

/// Highest valid 7-bit I2C address
pub const MAX_ADDRESS: u8 = 0x5F;
