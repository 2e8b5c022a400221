//! Error types for the drivers
//!
//! This module defines error types for configuration building ([`BuilderError`])
//! and display operations ([`Error`]).
//!
//! ## Error Types
//!
//! - [`BuilderError`] - Errors during configuration construction
//! - [`Error`] - Runtime errors during display operations
//! - [`InterfaceError`](crate::interface::InterfaceError) - Low-level bus and pin errors
//!
//! Every fallible driver call collapses to `Ok(())` or one `Err`. Operations
//! made of several transfers (scrolling text) keep going after a failed
//! transfer and report the first failure when they finish.
//!
//! ## Example
//!
//! ```
//! use click_matrix::{BuilderError, RedBuilder, RgbBuilder};
//!
//! // Brightness is 5 bits
//! let result = RgbBuilder::new().brightness(32).build();
//! assert!(matches!(result, Err(BuilderError::InvalidBrightness(32))));
//!
//! // The IS31FL3733 answers on 0x50..=0x5F only
//! let result = RedBuilder::new().address(0x20).build();
//! assert!(result.is_err());
//! ```

use crate::command::{MAX_ADDRESS, MIN_ADDRESS};
use crate::color::MAX_BRIGHTNESS;

/// Errors that can occur when driving a matrix
///
/// Generic over the interface error type so callers can match on the
/// underlying bus or pin failure.
#[derive(Debug, PartialEq, Eq)]
pub enum Error<E> {
    /// Interface error (SPI/I2C/GPIO)
    ///
    /// Wraps the error returned by the [`FrameInterface`](crate::FrameInterface)
    /// or [`RegisterInterface`](crate::RegisterInterface) implementation.
    Interface(E),
    /// Character has no glyph in the font
    ///
    /// Both fonts cover ASCII 32 (space) to 122 (`z`).
    InvalidGlyph(u8),
    /// LED index outside the matrix
    InvalidLed {
        /// Index requested
        index: usize,
        /// Number of LEDs on the matrix
        count: usize,
    },
    /// LED state other than 0 (off) or 1 (on)
    InvalidLedState(u8),
    /// More LEDs than the chain holds were passed to a raw write
    TooManyLeds {
        /// LEDs in the chain
        max: usize,
        /// LEDs provided
        provided: usize,
    },
}

impl<E> core::fmt::Display for Error<E> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Self::Interface(_) => write!(f, "Interface error"),
            Self::InvalidGlyph(ascii) => write!(f, "No glyph for character 0x{ascii:02X}"),
            Self::InvalidLed { index, count } => {
                write!(f, "Invalid LED {index} (matrix has {count} LEDs)")
            }
            Self::InvalidLedState(state) => write!(f, "Invalid LED state {state}"),
            Self::TooManyLeds { max, provided } => {
                write!(f, "Too many LEDs: max {max}, provided {provided}")
            }
        }
    }
}

impl<E: core::fmt::Debug> core::error::Error for Error<E> {}

/// Errors that can occur when building configuration
#[derive(Debug, PartialEq, Eq)]
pub enum BuilderError {
    /// Default brightness above 31
    InvalidBrightness(u8),
    /// I2C address outside the range selectable with the ADDR pins
    InvalidAddress(u8),
    /// Raw rotation value other than 0..=3
    InvalidRotation(u8),
}

impl core::fmt::Display for BuilderError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Self::InvalidBrightness(value) => {
                write!(f, "Invalid brightness {value} (max {MAX_BRIGHTNESS})")
            }
            Self::InvalidAddress(address) => write!(
                f,
                "Invalid I2C address 0x{address:02X} (expected 0x{MIN_ADDRESS:02X}..=0x{MAX_ADDRESS:02X})"
            ),
            Self::InvalidRotation(value) => write!(f, "Invalid rotation {value}"),
        }
    }
}

impl core::error::Error for BuilderError {}
