//! Driver for the 16x12 R Click board
//!
//! The board is an IS31FL3733 matrix controller driving 192 red LEDs, 12 SW
//! lines (rows) by 16 CS lines (columns). LED `n` sits on SW `n / 16`, CS
//! `n % 16`; its on/off bit is bit `n % 8` of LED control register `n / 8`.
//!
//! The driver mirrors the 24 on/off registers in a buffer and keeps track
//! of the selected register page, so repeated frame writes cost a single
//! burst each. Out-of-range LED indices and states are rejected
//! ([`IndexPolicy::RejectOutOfRange`]) without touching the bus.

use embedded_hal::delay::DelayNs;
use log::{debug, trace, warn};

use crate::command::{
    COMMAND_REGISTER, COMMAND_WRITE_LOCK, CONFIG_NORMAL_OPERATION, CONFIG_SOFTWARE_SHUTDOWN,
    CONFIGURATION, GLOBAL_CURRENT, INTERRUPT_STATUS, LED_ON_OFF, PWM, Page, RESET,
    WRITE_LOCK_KEY,
};
use crate::config::{IndexPolicy, RedConfig, Rotation};
use crate::error::Error;
use crate::font::{glyph_12x12, validate};
use crate::image::RED_IMAGE_LEN;
use crate::interface::RegisterInterface;
use crate::rotation::RED_16X12;
use crate::scroll::SparseScroll;

/// Number of LEDs on the matrix
pub const LED_COUNT: usize = 192;

/// LEDs per SW line
pub const ROW_LEN: usize = 16;

/// Number of LED on/off registers
pub const LED_BYTES: usize = LED_COUNT / 8;

/// LED state: off
pub const LED_OFF: u8 = 0;

/// LED state: on
pub const LED_ON: u8 = 1;

/// How LED indices are brought into range
pub const INDEX_POLICY: IndexPolicy = IndexPolicy::RejectOutOfRange;

type RedResult<T, I> = core::result::Result<T, Error<<I as RegisterInterface>::Error>>;

/// Driver for the 16x12 R board
///
/// ## Example
///
/// ```rust,no_run
/// use embedded_hal::digital::OutputPin;
/// use embedded_hal::i2c::{I2c, Operation};
/// use click_matrix::{I2cInterface, Red16x12, RedBuilder, Rotation};
/// # use core::convert::Infallible;
/// # use embedded_hal::delay::DelayNs;
/// # struct MockI2c;
/// # impl embedded_hal::i2c::ErrorType for MockI2c { type Error = Infallible; }
/// # impl I2c for MockI2c {
/// #     fn transaction(&mut self, _address: u8, _operations: &mut [Operation<'_>]) -> Result<(), Self::Error> {
/// #         Ok(())
/// #     }
/// # }
/// # struct MockPin;
/// # impl embedded_hal::digital::ErrorType for MockPin { type Error = Infallible; }
/// # impl OutputPin for MockPin {
/// #     fn set_low(&mut self) -> Result<(), Self::Error> { Ok(()) }
/// #     fn set_high(&mut self) -> Result<(), Self::Error> { Ok(()) }
/// # }
/// # struct MockDelay;
/// # impl DelayNs for MockDelay { fn delay_ns(&mut self, _ns: u32) {} }
/// # let mut delay = MockDelay;
/// let config = match RedBuilder::new().rotation(Rotation::Vertical180).build() {
///     Ok(config) => config,
///     Err(_) => return,
/// };
/// let interface = I2cInterface::new(MockI2c, MockPin, config.address);
/// let mut matrix = Red16x12::new(interface, config);
/// let _ = matrix.default_config(&mut delay);
/// let _ = matrix.write_string("Click", 20, &mut delay);
/// ```
pub struct Red16x12<I>
where
    I: RegisterInterface,
{
    /// Register transport
    interface: I,
    /// Board configuration
    config: RedConfig,
    /// Mirror of the LED on/off registers
    leds: [u8; LED_BYTES],
    /// Text rotation
    rotation: Rotation,
    /// Page last selected, `None` when unknown
    page: Option<Page>,
}

impl<I> Red16x12<I>
where
    I: RegisterInterface,
{
    /// Create a new driver
    ///
    /// Nothing is sent until [`Red16x12::default_config`] or the first write.
    pub fn new(interface: I, config: RedConfig) -> Self {
        Self {
            interface,
            rotation: config.rotation,
            config,
            leds: [0; LED_BYTES],
            page: None,
        }
    }

    /// Reset the controller and bring it up with every LED off
    ///
    /// Sequence:
    /// 1. Leave hardware shutdown (SDB)
    /// 2. Reset all registers by reading the reset register
    /// 3. Normal operation, configured global current
    /// 4. Configured PWM duty for all 192 LEDs
    /// 5. Clear the LED on/off registers
    pub fn default_config<D: DelayNs>(&mut self, delay: &mut D) -> RedResult<(), I> {
        debug!(
            "red16x12: default config, global current 0x{:02X}, pwm 0x{:02X}",
            self.config.global_current, self.config.led_pwm
        );
        self.interface.enable(delay).map_err(Error::Interface)?;
        self.page = None;

        self.select_page(Page::Function)?;
        self.interface.read_register(RESET).map_err(Error::Interface)?;
        // Reset also clears the command register
        self.page = None;

        self.select_page(Page::Function)?;
        self.write_register(CONFIGURATION, CONFIG_NORMAL_OPERATION)?;
        self.write_register(GLOBAL_CURRENT, self.config.global_current)?;

        self.select_page(Page::Pwm)?;
        self.interface
            .write_registers(PWM, &[self.config.led_pwm; LED_COUNT])
            .map_err(Error::Interface)?;

        self.rotation = self.config.rotation;
        self.clear()
    }

    /// Set the text rotation used by `write_char` and `write_string`
    pub fn set_rotation(&mut self, rotation: Rotation) {
        self.rotation = rotation;
    }

    /// Current text rotation
    pub fn rotation(&self) -> Rotation {
        self.rotation
    }

    /// Switch one LED on (1) or off (0)
    ///
    /// Only the on/off register holding `led` is written.
    ///
    /// # Errors
    ///
    /// Returns `Error::InvalidLed` for `led >= 192` and
    /// `Error::InvalidLedState` for `state > 1`. Neither the buffer nor the
    /// bus is touched in that case.
    pub fn set_led_state(&mut self, led: usize, state: u8) -> RedResult<(), I> {
        let led = Self::check_led(led)?;
        if state > LED_ON {
            return Err(Error::InvalidLedState(state));
        }

        let (register, mask) = (led / 8, 1u8 << (led % 8));
        if state == LED_ON {
            self.leds[register] |= mask;
        } else {
            self.leds[register] &= !mask;
        }

        self.select_page(Page::LedControl)?;
        self.write_register(LED_ON_OFF + register as u8, self.leds[register])
    }

    /// Buffered on/off state of one LED, `None` for `led >= 192`
    pub fn led_state(&self, led: usize) -> Option<bool> {
        INDEX_POLICY
            .apply(led, LED_COUNT)
            .map(|led| self.leds[led / 8] & (1 << (led % 8)) != 0)
    }

    /// The LED on/off buffer, two bytes per SW line
    pub fn leds(&self) -> &[u8; LED_BYTES] {
        &self.leds
    }

    #[cfg(feature = "graphics")]
    pub(crate) fn leds_mut(&mut self) -> &mut [u8; LED_BYTES] {
        &mut self.leds
    }

    /// Set the PWM duty of one LED
    ///
    /// # Errors
    ///
    /// Returns `Error::InvalidLed` for `led >= 192`.
    pub fn set_led_pwm(&mut self, led: usize, pwm: u8) -> RedResult<(), I> {
        let led = Self::check_led(led)?;
        self.select_page(Page::Pwm)?;
        self.write_register(PWM + led as u8, pwm)
    }

    /// Set the global current control register
    pub fn set_global_current(&mut self, value: u8) -> RedResult<(), I> {
        self.select_page(Page::Function)?;
        self.write_register(GLOBAL_CURRENT, value)
    }

    /// Enter (`true`) or leave (`false`) software shutdown
    ///
    /// Register contents are kept while shut down.
    pub fn software_shutdown(&mut self, shutdown: bool) -> RedResult<(), I> {
        let value = if shutdown {
            CONFIG_SOFTWARE_SHUTDOWN
        } else {
            CONFIG_NORMAL_OPERATION
        };
        self.select_page(Page::Function)?;
        self.write_register(CONFIGURATION, value)
    }

    /// Switch every LED off
    pub fn clear(&mut self) -> RedResult<(), I> {
        self.leds = [0; LED_BYTES];
        self.write_led_matrix()
    }

    /// Switch every LED on
    pub fn fill_screen(&mut self) -> RedResult<(), I> {
        self.leds = [0xFF; LED_BYTES];
        self.write_led_matrix()
    }

    /// Push the on/off buffer in one 24-register burst
    pub fn write_led_matrix(&mut self) -> RedResult<(), I> {
        self.select_page(Page::LedControl)?;
        let leds = self.leds;
        self.interface
            .write_registers(LED_ON_OFF, &leds)
            .map_err(Error::Interface)
    }

    /// Show a picture of 12 row words and push it
    ///
    /// Bit `n` of word `r` lights the LED on SW `r`, CS `n`.
    pub fn draw_picture(&mut self, image: &[u16; RED_IMAGE_LEN]) -> RedResult<(), I> {
        for (pair, row) in self.leds.chunks_exact_mut(2).zip(image) {
            pair.copy_from_slice(&row.to_le_bytes());
        }
        self.write_led_matrix()
    }

    /// Render one character with the current rotation
    ///
    /// # Errors
    ///
    /// Returns `Error::InvalidGlyph` for characters outside ASCII 32..=122.
    pub fn write_char(&mut self, ascii: u8) -> RedResult<(), I> {
        let glyph = glyph_12x12(ascii).ok_or(Error::InvalidGlyph(ascii))?;
        self.render_window(glyph)
    }

    /// Scroll `text` across the matrix, one column per frame
    ///
    /// Blank glyph columns are dropped and one blank column separates
    /// characters. After each frame `delay.delay_ms(1)` is called
    /// `speed_ms` times. A failed frame does not stop the animation; the
    /// first failure is returned once the text has scrolled off.
    ///
    /// # Errors
    ///
    /// Returns `Error::InvalidGlyph` before anything is drawn if `text`
    /// contains a character outside ASCII 32..=122.
    pub fn write_string<D: DelayNs>(
        &mut self,
        text: &str,
        speed_ms: u32,
        delay: &mut D,
    ) -> RedResult<(), I> {
        validate(text).map_err(Error::InvalidGlyph)?;
        trace!("red16x12: scrolling {} chars", text.len());

        let mut result = Ok(());
        for window in SparseScroll::new(text) {
            if let Err(error) = self.render_window(&window) {
                warn!("red16x12: scroll frame failed");
                if result.is_ok() {
                    result = Err(error);
                }
            }
            for _ in 0..speed_ms {
                delay.delay_ms(1);
            }
        }
        result
    }

    /// Read the interrupt status register
    ///
    /// The register is outside the paged space; no page is selected.
    pub fn interrupt_status(&mut self) -> RedResult<u8, I> {
        self.interface
            .read_register(INTERRUPT_STATUS)
            .map_err(Error::Interface)
    }

    /// Access the configuration
    pub fn config(&self) -> &RedConfig {
        &self.config
    }

    /// Give back the interface
    pub fn release(self) -> I {
        self.interface
    }

    /// Clear the buffer, light the window's set bits and push it
    fn render_window(&mut self, window: &[u16]) -> RedResult<(), I> {
        let mut leds = [0u8; LED_BYTES];
        RED_16X12.for_each_lit(self.rotation, window, |led| {
            if let Some(byte) = leds.get_mut(led / 8) {
                *byte |= 1 << (led % 8);
            }
        });
        self.leds = leds;
        self.write_led_matrix()
    }

    fn check_led(led: usize) -> RedResult<usize, I> {
        INDEX_POLICY.apply(led, LED_COUNT).ok_or(Error::InvalidLed {
            index: led,
            count: LED_COUNT,
        })
    }

    /// Unlock the command register and select `page`, unless already selected
    fn select_page(&mut self, page: Page) -> RedResult<(), I> {
        if self.page == Some(page) {
            return Ok(());
        }
        self.page = None;
        self.write_register(COMMAND_WRITE_LOCK, WRITE_LOCK_KEY)?;
        self.write_register(COMMAND_REGISTER, page as u8)?;
        self.page = Some(page);
        Ok(())
    }

    fn write_register(&mut self, register: u8, value: u8) -> RedResult<(), I> {
        self.interface
            .write_registers(register, &[value])
            .map_err(Error::Interface)
    }
}
