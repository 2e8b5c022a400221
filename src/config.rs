//! Driver configuration types and builders

use crate::color::{BLACK, MAX_BRIGHTNESS, WHITE};
use crate::command::{DEFAULT_ADDRESS, MAX_ADDRESS, MIN_ADDRESS};
pub use crate::error::BuilderError;

/// Text orientation on the matrix
///
/// The "vertical" rotations keep glyph columns as matrix columns; the
/// "horizontal" ones exchange the axes. How each value mirrors the glyph is
/// board specific, see [`Geometry`](crate::rotation::Geometry).
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Rotation {
    /// Native orientation
    #[default]
    Vertical0,
    /// Point reflection of the native orientation
    Vertical180,
    /// Axes exchanged, rows mirrored
    Horizontal0,
    /// Axes exchanged, columns mirrored
    Horizontal180,
}

impl Rotation {
    /// All rotations, in raw-value order
    pub const ALL: [Rotation; 4] = [
        Rotation::Vertical0,
        Rotation::Vertical180,
        Rotation::Horizontal0,
        Rotation::Horizontal180,
    ];

    /// Whether glyph columns run across matrix rows
    pub fn is_horizontal(self) -> bool {
        matches!(self, Rotation::Horizontal0 | Rotation::Horizontal180)
    }
}

impl TryFrom<u8> for Rotation {
    type Error = BuilderError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        match value {
            0 => Ok(Rotation::Vertical0),
            1 => Ok(Rotation::Vertical180),
            2 => Ok(Rotation::Horizontal0),
            3 => Ok(Rotation::Horizontal180),
            _ => Err(BuilderError::InvalidRotation(value)),
        }
    }
}

/// How out-of-range indices are handled by a setter
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum IndexPolicy {
    /// Reduce the value modulo the bound
    WrapModulo,
    /// Refuse values at or above the bound
    RejectOutOfRange,
}

impl IndexPolicy {
    /// Apply the policy to `value` for the range `0..bound`
    ///
    /// Returns `None` only for [`IndexPolicy::RejectOutOfRange`].
    ///
    /// ```
    /// use click_matrix::IndexPolicy;
    ///
    /// assert_eq!(IndexPolicy::WrapModulo.apply(105, 100), Some(5));
    /// assert_eq!(IndexPolicy::RejectOutOfRange.apply(105, 100), None);
    /// ```
    pub fn apply(self, value: usize, bound: usize) -> Option<usize> {
        match self {
            IndexPolicy::WrapModulo => value.checked_rem(bound),
            IndexPolicy::RejectOutOfRange => (value < bound).then_some(value),
        }
    }
}

/// Text style of the 10x10 RGB board
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Pen {
    /// Glyph color, `0xRRGGBB`
    pub text: u32,
    /// Background color, `0xRRGGBB`
    pub background: u32,
    /// Glyph orientation
    pub rotation: Rotation,
}

impl Default for Pen {
    fn default() -> Self {
        Self {
            text: WHITE,
            background: BLACK,
            rotation: Rotation::Vertical0,
        }
    }
}

/// Configuration of the 10x10 RGB board
///
/// Use [`RgbBuilder`] to create one.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RgbConfig {
    /// Brightness written to every LED by `default_config`
    pub brightness: u8,
    /// Initial pen
    pub pen: Pen,
}

impl Default for RgbConfig {
    fn default() -> Self {
        Self {
            brightness: 1,
            pen: Pen::default(),
        }
    }
}

/// Builder for [`RgbConfig`]
///
/// # Example
///
/// ```
/// use click_matrix::{Pen, RgbBuilder, Rotation};
///
/// let config = RgbBuilder::new()
///     .brightness(4)
///     .pen(Pen { text: 0xFF_00_00, background: 0, rotation: Rotation::Horizontal0 })
///     .build();
/// assert!(config.is_ok());
/// ```
#[must_use]
#[derive(Default)]
pub struct RgbBuilder {
    config: RgbConfig,
}

impl RgbBuilder {
    /// Create a new builder with default values
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the brightness applied by `default_config` (0..=31)
    pub fn brightness(mut self, brightness: u8) -> Self {
        self.config.brightness = brightness;
        self
    }

    /// Set the initial pen
    pub fn pen(mut self, pen: Pen) -> Self {
        self.config.pen = pen;
        self
    }

    /// Build the configuration
    ///
    /// # Errors
    ///
    /// Returns `BuilderError::InvalidBrightness` if the brightness is above 31
    pub fn build(self) -> Result<RgbConfig, BuilderError> {
        if self.config.brightness > MAX_BRIGHTNESS {
            return Err(BuilderError::InvalidBrightness(self.config.brightness));
        }
        Ok(self.config)
    }
}

/// Configuration of the 16x12 R board
///
/// Use [`RedBuilder`] to create one.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RedConfig {
    /// 7-bit I2C address of the IS31FL3733
    pub address: u8,
    /// Global current control value
    pub global_current: u8,
    /// PWM duty written to every LED by `default_config`
    pub led_pwm: u8,
    /// Initial text rotation
    pub rotation: Rotation,
}

impl Default for RedConfig {
    fn default() -> Self {
        Self {
            address: DEFAULT_ADDRESS,
            global_current: 0x80,
            led_pwm: 0x80,
            rotation: Rotation::Vertical0,
        }
    }
}

/// Builder for [`RedConfig`]
///
/// # Example
///
/// ```
/// use click_matrix::{RedBuilder, Rotation};
///
/// let config = match RedBuilder::new().address(0x53).rotation(Rotation::Vertical180).build() {
///     Ok(config) => config,
///     Err(_) => return,
/// };
/// assert_eq!(config.address, 0x53);
/// ```
#[must_use]
#[derive(Default)]
pub struct RedBuilder {
    config: RedConfig,
}

impl RedBuilder {
    /// Create a new builder with default values
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the 7-bit I2C address (0x50..=0x5F)
    pub fn address(mut self, address: u8) -> Self {
        self.config.address = address;
        self
    }

    /// Set the global current control value
    pub fn global_current(mut self, value: u8) -> Self {
        self.config.global_current = value;
        self
    }

    /// Set the PWM duty used for every LED
    pub fn led_pwm(mut self, value: u8) -> Self {
        self.config.led_pwm = value;
        self
    }

    /// Set the initial text rotation
    pub fn rotation(mut self, rotation: Rotation) -> Self {
        self.config.rotation = rotation;
        self
    }

    /// Build the configuration
    ///
    /// # Errors
    ///
    /// Returns `BuilderError::InvalidAddress` if the address cannot be
    /// selected with the board's ADDR pins
    pub fn build(self) -> Result<RedConfig, BuilderError> {
        if !(MIN_ADDRESS..=MAX_ADDRESS).contains(&self.config.address) {
            return Err(BuilderError::InvalidAddress(self.config.address));
        }
        Ok(self.config)
    }
}
