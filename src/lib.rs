//! LED-Matrix Click Board Drivers
//!
//! Drivers for two LED-matrix Click boards:
//!
//! - **10x10 RGB 2**: 100 serially clocked RGB LEDs on SPI ([`Rgb10x10`])
//! - **16x12 R**: an IS31FL3733 controller with 192 red LEDs on I2C ([`Red16x12`])
//!
//! ## Features
//!
//! - `no_std` compatible
//! - `embedded-hal` v1.0 support
//! - `embedded-graphics` integration (with `graphics` feature)
//! - 8x8 and 12x12 ASCII fonts with four text rotations
//! - Scrolling text, as a blocking call or as a lazy frame iterator ([`scroll`])
//! - Pictures, color wheel and a rainbow demo
//!
//! ## Usage
//!
//! ```rust,no_run
//! use core::convert::Infallible;
//! use embedded_hal::delay::DelayNs;
//! use embedded_hal::digital::OutputPin;
//! use embedded_hal::i2c::{I2c, Operation as I2cOperation};
//! use embedded_hal::spi::{Operation, SpiDevice};
//! use click_matrix::{
//!     color, I2cInterface, Pen, Red16x12, RedBuilder, Rgb10x10, RgbBuilder, Rotation,
//!     SpiInterface,
//! };
//!
//! # struct MockSpi;
//! # impl embedded_hal::spi::ErrorType for MockSpi { type Error = Infallible; }
//! # impl SpiDevice for MockSpi {
//! #     fn transaction(
//! #         &mut self,
//! #         _operations: &mut [Operation<'_, u8>],
//! #     ) -> Result<(), Self::Error> {
//! #         Ok(())
//! #     }
//! # }
//! # struct MockI2c;
//! # impl embedded_hal::i2c::ErrorType for MockI2c { type Error = Infallible; }
//! # impl I2c for MockI2c {
//! #     fn transaction(
//! #         &mut self,
//! #         _address: u8,
//! #         _operations: &mut [I2cOperation<'_>],
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
//! // 10x10 RGB board
//! let config = match RgbBuilder::new().brightness(4).build() {
//!     Ok(config) => config,
//!     Err(_) => return,
//! };
//! let mut rgb = Rgb10x10::new(SpiInterface::new(MockSpi), config);
//! let _ = rgb.default_config();
//! rgb.set_pen(Pen {
//!     text: color::YELLOW,
//!     background: color::BLUE,
//!     rotation: Rotation::Horizontal0,
//! });
//! let _ = rgb.write_string("Hi!", 40, &mut delay);
//!
//! // 16x12 R board
//! let config = match RedBuilder::new().address(0x50).build() {
//!     Ok(config) => config,
//!     Err(_) => return,
//! };
//! let interface = I2cInterface::new(MockI2c, MockPin, config.address);
//! let mut red = Red16x12::new(interface, config);
//! let _ = red.default_config(&mut delay);
//! let _ = red.write_char(b'M');
//! ```

#![no_std]

#[cfg(any(test, feature = "alloc"))]
extern crate alloc;

/// Colors and the 10x10 LED entry
pub mod color;
/// Wire constants and IS31FL3733 register map
pub mod command;
/// Configuration types and builders
pub mod config;
/// Error types for the drivers
pub mod error;
/// ASCII bitmap fonts
pub mod font;
/// Built-in pictures
pub mod image;
/// Hardware interface abstraction
pub mod interface;
/// 16x12 R board driver
pub mod red16x12;
/// 10x10 RGB board driver
pub mod rgb10x10;
/// Glyph-to-LED coordinate transforms
pub mod rotation;
/// Scrolling text frame sequences
pub mod scroll;

/// Graphics support via embedded-graphics (requires `graphics` feature)
#[cfg(feature = "graphics")]
pub mod graphics;

pub use color::Led;
pub use config::{IndexPolicy, Pen, RedBuilder, RedConfig, RgbBuilder, RgbConfig, Rotation};
pub use error::{BuilderError, Error};
pub use interface::{
    FrameInterface, I2cInterface, InterfaceError, RegisterInterface, SpiInterface,
};
pub use red16x12::Red16x12;
pub use rgb10x10::Rgb10x10;
