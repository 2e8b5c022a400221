//! Driver for the 10x10 RGB 2 Click board
//!
//! The board is a chain of 100 serially clocked RGB LEDs. The driver keeps
//! the whole chain in an LED buffer; setters only touch the buffer and
//! [`Rgb10x10::write_led_matrix`] pushes it as one SPI frame. Rendering
//! operations (`fill_screen`, `write_char`, ...) update the buffer and push
//! it in one go.
//!
//! Out-of-range LED indices and brightness values are wrapped, never
//! rejected ([`IndexPolicy::WrapModulo`]).

use embedded_hal::delay::DelayNs;
use log::{debug, trace, warn};

use crate::color::{Led, MAX_BRIGHTNESS, color_wheel};
use crate::command::{BRIGHTNESS_MARKER, BRIGHTNESS_MASK, BYTES_PER_LED, FRAME_END, FRAME_START};
use crate::config::{IndexPolicy, Pen, RgbConfig};
use crate::error::Error;
use crate::font::{glyph_8x8, validate};
use crate::image::RGB_IMAGE_LEN;
use crate::interface::FrameInterface;
use crate::rotation::RGB_10X10;
use crate::scroll::{GLYPH_BUFFER_LEN, GlyphScroll};

/// Number of LEDs on the matrix
pub const LED_COUNT: usize = 100;

/// Length of a frame carrying the whole chain
pub const FRAME_LEN: usize = FRAME_START.len() + BYTES_PER_LED * LED_COUNT + FRAME_END.len();

/// How LED indices and brightness values are brought into range
pub const INDEX_POLICY: IndexPolicy = IndexPolicy::WrapModulo;

type RgbResult<I> = core::result::Result<(), Error<<I as FrameInterface>::Error>>;

/// Encode `leds` as one frame into `frame`, returning the frame length
fn encode_frame(leds: &[Led], frame: &mut [u8; FRAME_LEN]) -> usize {
    let body = FRAME_START.len();
    frame[..body].copy_from_slice(&FRAME_START);

    for (chunk, led) in frame[body..]
        .chunks_exact_mut(BYTES_PER_LED)
        .zip(leds.iter().take(LED_COUNT))
    {
        chunk.copy_from_slice(&[
            BRIGHTNESS_MARKER | (led.brightness & BRIGHTNESS_MASK),
            led.blue,
            led.green,
            led.red,
        ]);
    }

    let end = body + BYTES_PER_LED * leds.len().min(LED_COUNT);
    frame[end..end + FRAME_END.len()].copy_from_slice(&FRAME_END);
    end + FRAME_END.len()
}

/// Driver for the 10x10 RGB board
///
/// ## Example
///
/// ```rust,no_run
/// use embedded_hal::spi::{Operation, SpiDevice};
/// use click_matrix::{color, Rgb10x10, RgbBuilder, SpiInterface};
/// # use core::convert::Infallible;
/// # use embedded_hal::delay::DelayNs;
/// # struct MockSpi;
/// # impl embedded_hal::spi::ErrorType for MockSpi { type Error = Infallible; }
/// # impl SpiDevice for MockSpi {
/// #     fn transaction(&mut self, _operations: &mut [Operation<'_, u8>]) -> Result<(), Self::Error> {
/// #         Ok(())
/// #     }
/// # }
/// # struct MockDelay;
/// # impl DelayNs for MockDelay { fn delay_ns(&mut self, _ns: u32) {} }
/// # let mut delay = MockDelay;
/// let config = match RgbBuilder::new().brightness(2).build() {
///     Ok(config) => config,
///     Err(_) => return,
/// };
/// let mut matrix = Rgb10x10::new(SpiInterface::new(MockSpi), config);
/// let _ = matrix.default_config();
/// let _ = matrix.fill_screen(color::BLUE);
/// let _ = matrix.write_string("Hello", 50, &mut delay);
/// ```
pub struct Rgb10x10<I>
where
    I: FrameInterface,
{
    /// Frame transport
    interface: I,
    /// Board configuration
    config: RgbConfig,
    /// Current state of every LED in chain order
    leds: [Led; LED_COUNT],
    /// Current text style
    pen: Pen,
}

impl<I> Rgb10x10<I>
where
    I: FrameInterface,
{
    /// Create a new driver
    ///
    /// Nothing is sent until the first write.
    pub fn new(interface: I, config: RgbConfig) -> Self {
        Self {
            interface,
            pen: config.pen,
            config,
            leds: [Led::default(); LED_COUNT],
        }
    }

    /// Blank the matrix and apply the configured brightness and pen
    pub fn default_config(&mut self) -> RgbResult<I> {
        debug!("rgb10x10: default config, brightness {}", self.config.brightness);
        self.leds = [Led::new(self.config.brightness, 0); LED_COUNT];
        self.pen = self.config.pen;
        self.write_led_matrix()
    }

    /// Set the text style used by `write_char` and `write_string`
    pub fn set_pen(&mut self, pen: Pen) {
        self.pen = pen;
    }

    /// Current text style
    pub fn pen(&self) -> Pen {
        self.pen
    }

    /// Set the brightness of one LED in the buffer
    ///
    /// `led` wraps modulo 100 and `brightness` modulo 32.
    pub fn set_led_brightness(&mut self, led: usize, brightness: u8) {
        if let Some(led) = self.wrap(led) {
            self.leds[led].brightness = brightness % (MAX_BRIGHTNESS + 1);
        }
    }

    /// Set the brightness of every LED in the buffer
    ///
    /// `brightness` wraps modulo 32.
    pub fn set_leds_brightness(&mut self, brightness: u8) {
        let brightness = brightness % (MAX_BRIGHTNESS + 1);
        for led in &mut self.leds {
            led.brightness = brightness;
        }
    }

    /// Set the color of one LED in the buffer
    ///
    /// `led` wraps modulo 100.
    pub fn set_led_color(&mut self, led: usize, rgb: u32) {
        if let Some(led) = self.wrap(led) {
            self.leds[led].set_rgb(rgb);
        }
    }

    /// Set the color of every LED in the buffer
    pub fn set_leds_color(&mut self, rgb: u32) {
        for led in &mut self.leds {
            led.set_rgb(rgb);
        }
    }

    /// One LED of the buffer, index wrapped modulo 100
    pub fn led(&self, led: usize) -> Led {
        self.wrap(led).map_or_else(Led::default, |led| self.leds[led])
    }

    /// The whole LED buffer in chain order
    pub fn leds(&self) -> &[Led; LED_COUNT] {
        &self.leds
    }

    #[cfg(feature = "graphics")]
    pub(crate) fn leds_mut(&mut self) -> &mut [Led; LED_COUNT] {
        &mut self.leds
    }

    /// Write an arbitrary run of LEDs, starting at the head of the chain
    ///
    /// The buffer is left untouched.
    ///
    /// # Errors
    ///
    /// Returns `Error::TooManyLeds` if more than 100 LEDs are passed; the
    /// transport is not touched in that case.
    pub fn write_leds(&mut self, leds: &[Led]) -> RgbResult<I> {
        if leds.len() > LED_COUNT {
            return Err(Error::TooManyLeds {
                max: LED_COUNT,
                provided: leds.len(),
            });
        }
        self.send_leds(leds)
    }

    /// Push the LED buffer to the matrix
    pub fn write_led_matrix(&mut self) -> RgbResult<I> {
        let leds = self.leds;
        self.send_leds(&leds)
    }

    /// Set every LED to `rgb` and push the buffer
    pub fn fill_screen(&mut self, rgb: u32) -> RgbResult<I> {
        self.set_leds_color(rgb);
        self.write_led_matrix()
    }

    /// Copy a 100-pixel `0xRRGGBB` image into the buffer and push it
    ///
    /// Pixels are in chain order; brightness is kept per LED.
    pub fn draw_picture(&mut self, image: &[u32; RGB_IMAGE_LEN]) -> RgbResult<I> {
        for (led, rgb) in self.leds.iter_mut().zip(image) {
            led.set_rgb(*rgb);
        }
        self.write_led_matrix()
    }

    /// Render one character with the current pen
    ///
    /// # Errors
    ///
    /// Returns `Error::InvalidGlyph` for characters outside ASCII 32..=122.
    pub fn write_char(&mut self, ascii: u8) -> RgbResult<I> {
        let glyph = glyph_8x8(ascii).ok_or(Error::InvalidGlyph(ascii))?;
        let mut window = [0u8; GLYPH_BUFFER_LEN];
        window[..glyph.len()].copy_from_slice(glyph);
        self.render_window(&window)
    }

    /// Scroll `text` across the matrix, one column per frame
    ///
    /// After each frame `delay.delay_ms(1)` is called `speed_ms` times. A
    /// failed frame does not stop the animation; the first failure is
    /// returned once the text has scrolled off.
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
    ) -> RgbResult<I> {
        validate(text).map_err(Error::InvalidGlyph)?;
        trace!("rgb10x10: scrolling {} chars", text.len());

        let mut result = Ok(());
        for window in GlyphScroll::new(text) {
            if let Err(error) = self.render_window(&window) {
                warn!("rgb10x10: scroll frame failed");
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

    /// Run a rainbow across the matrix for `upd_num` frames
    ///
    /// LED `n` of frame `f` shows `color_wheel((n + f) & 0xFF, pct)`. Stops
    /// at the first failed write.
    pub fn demo_rainbow<D: DelayNs>(
        &mut self,
        pct: u8,
        upd_num: u32,
        upd_rate_ms: u32,
        delay: &mut D,
    ) -> RgbResult<I> {
        for frame in 0..upd_num as usize {
            for (index, led) in self.leds.iter_mut().enumerate() {
                led.set_rgb(color_wheel(((index + frame) & 0xFF) as u8, pct));
            }
            self.write_led_matrix()?;
            delay.delay_ms(upd_rate_ms);
        }
        Ok(())
    }

    /// Access the configuration
    pub fn config(&self) -> &RgbConfig {
        &self.config
    }

    /// Give back the interface
    pub fn release(self) -> I {
        self.interface
    }

    /// Paint a render window with the current pen and push it
    fn render_window(&mut self, window: &[u8]) -> RgbResult<I> {
        let pen = self.pen;
        self.set_leds_color(pen.background);
        let leds = &mut self.leds;
        RGB_10X10.for_each_lit(pen.rotation, window, |index| {
            if let Some(led) = leds.get_mut(index) {
                led.set_rgb(pen.text);
            }
        });
        self.write_led_matrix()
    }

    fn wrap(&self, led: usize) -> Option<usize> {
        INDEX_POLICY.apply(led, LED_COUNT)
    }

    fn send_leds(&mut self, leds: &[Led]) -> RgbResult<I> {
        let mut frame = [0u8; FRAME_LEN];
        let len = encode_frame(leds, &mut frame);
        self.interface
            .write_frame(&frame[..len])
            .map_err(Error::Interface)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::color::{BLACK, GREEN, RED, WHITE};
    use crate::config::{RgbBuilder, Rotation};
    use alloc::vec::Vec;

    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    struct MockError;

    #[derive(Debug, Default)]
    struct MockInterface {
        frames: Vec<Vec<u8>>,
        /// Frame numbers (0-based) that fail
        fail_on: Vec<usize>,
        attempts: usize,
    }

    impl FrameInterface for MockInterface {
        type Error = MockError;

        fn write_frame(&mut self, frame: &[u8]) -> Result<(), Self::Error> {
            let attempt = self.attempts;
            self.attempts += 1;
            if self.fail_on.contains(&attempt) {
                return Err(MockError);
            }
            self.frames.push(frame.to_vec());
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

    fn test_matrix() -> Rgb10x10<MockInterface> {
        let config = RgbBuilder::new().build().unwrap();
        Rgb10x10::new(MockInterface::default(), config)
    }

    /// Decode the color of LED `n` from a full frame
    fn frame_rgb(frame: &[u8], n: usize) -> u32 {
        let at = FRAME_START.len() + BYTES_PER_LED * n;
        crate::color::rgb(frame[at + 3], frame[at + 2], frame[at + 1])
    }

    #[test]
    fn test_frame_layout() {
        let mut matrix = test_matrix();
        matrix.set_led_color(0, 0x11_22_33);
        matrix.set_led_brightness(0, 7);
        matrix.write_led_matrix().unwrap();

        let frame = &matrix.interface.frames[0];
        assert_eq!(frame.len(), 12 + 4 * LED_COUNT);
        assert_eq!(frame.len(), FRAME_LEN);
        assert_eq!(&frame[..4], &[0x00; 4]);
        assert_eq!(&frame[4..8], &[0xE7, 0x33, 0x22, 0x11]);
        assert_eq!(&frame[FRAME_LEN - 8..], &[0xFF; 8]);
    }

    #[test]
    fn test_led_index_and_brightness_wrap() {
        let mut matrix = test_matrix();
        matrix.set_led_brightness(105, 40);
        assert_eq!(matrix.led(5).brightness, 8);
        assert_eq!(matrix.led(105), matrix.led(5));

        matrix.write_led_matrix().unwrap();
        let frame = &matrix.interface.frames[0];
        assert_eq!(frame[4 + 4 * 5], BRIGHTNESS_MARKER | 8);
    }

    #[test]
    fn test_set_led_color_wraps() {
        let mut matrix = test_matrix();
        matrix.set_led_color(199, RED);
        assert_eq!(matrix.leds()[99].rgb(), RED);
    }

    #[test]
    fn test_setters_do_not_write() {
        let mut matrix = test_matrix();
        matrix.set_leds_color(GREEN);
        matrix.set_leds_brightness(3);
        assert!(matrix.interface.frames.is_empty());
        assert!(matrix.leds().iter().all(|led| led.brightness == 3));
    }

    #[test]
    fn test_write_leds_rejects_oversize_without_writing() {
        let mut matrix = test_matrix();
        let leds = [Led::new(1, WHITE); LED_COUNT + 1];
        let result = matrix.write_leds(&leds);
        assert_eq!(
            result,
            Err(Error::TooManyLeds {
                max: 100,
                provided: 101
            })
        );
        assert_eq!(matrix.interface.attempts, 0);
    }

    #[test]
    fn test_write_leds_short_chain() {
        let mut matrix = test_matrix();
        let leds = [Led::new(31, RED); 3];
        matrix.write_leds(&leds).unwrap();
        let frame = &matrix.interface.frames[0];
        assert_eq!(frame.len(), 12 + 4 * 3);
        assert_eq!(&frame[4..8], &[0xFF, 0x00, 0x00, 0xFF]);
        assert_eq!(&frame[16..], &[0xFF; 8]);
    }

    #[test]
    fn test_default_config_applies_brightness() {
        let config = RgbBuilder::new().brightness(5).build().unwrap();
        let mut matrix = Rgb10x10::new(MockInterface::default(), config);
        matrix.set_led_color(3, RED);
        matrix.default_config().unwrap();
        assert!(matrix.leds().iter().all(|led| *led == Led::new(5, BLACK)));
        assert_eq!(matrix.interface.frames.len(), 1);
    }

    #[test]
    fn test_write_char_identity_rotation() {
        let mut matrix = test_matrix();
        matrix.write_char(b'0').unwrap();

        let glyph = glyph_8x8(b'0').unwrap();
        let frame = &matrix.interface.frames[0];
        for (byte, column) in glyph.iter().enumerate() {
            for bit in 0..8 {
                let expected = if column & (1 << bit) != 0 { WHITE } else { BLACK };
                assert_eq!(frame_rgb(frame, 10 * bit + byte), expected);
            }
        }
        // Rows 8 and 9 stay background
        assert!((80..100).all(|n| frame_rgb(frame, n) == BLACK));
    }

    #[test]
    fn test_write_char_uses_pen() {
        let mut matrix = test_matrix();
        matrix.set_pen(Pen {
            text: RED,
            background: GREEN,
            rotation: Rotation::Vertical180,
        });
        matrix.write_char(b'I').unwrap();
        let frame = &matrix.interface.frames[0];
        // 'I' column 1 bit 0 is lit; Vertical180 reflects through the center
        assert_eq!(frame_rgb(frame, 99 - 1), RED);
        assert_eq!(frame_rgb(frame, 0), GREEN);
    }

    #[test]
    fn test_write_char_rejects_missing_glyph() {
        let mut matrix = test_matrix();
        assert_eq!(matrix.write_char(b'{'), Err(Error::InvalidGlyph(b'{')));
        assert_eq!(matrix.write_char(0x1F), Err(Error::InvalidGlyph(0x1F)));
        assert!(matrix.interface.frames.is_empty());
    }

    #[test]
    fn test_write_string_frame_count_and_drain() {
        let mut matrix = test_matrix();
        let mut delay = MockDelay::default();
        matrix.write_string("A", 0, &mut delay).unwrap();

        assert_eq!(matrix.interface.frames.len(), 8 + 10);
        let last = matrix.interface.frames.last().unwrap();
        assert!((0..LED_COUNT).all(|n| frame_rgb(last, n) == BLACK));
        assert_eq!(delay.ms, 0);
    }

    #[test]
    fn test_write_string_delays_per_frame() {
        let mut matrix = test_matrix();
        let mut delay = MockDelay::default();
        matrix.write_string("AB", 3, &mut delay).unwrap();
        assert_eq!(delay.ms, 3 * (2 * 8 + 10));
    }

    #[test]
    fn test_write_string_continues_after_error() {
        let mut matrix = test_matrix();
        matrix.interface.fail_on = alloc::vec![2, 5];
        let mut delay = MockDelay::default();

        let result = matrix.write_string("A", 0, &mut delay);
        assert_eq!(result, Err(Error::Interface(MockError)));
        assert_eq!(matrix.interface.attempts, 18);
        assert_eq!(matrix.interface.frames.len(), 16);
    }

    #[test]
    fn test_write_string_validates_first() {
        let mut matrix = test_matrix();
        let mut delay = MockDelay::default();
        let result = matrix.write_string("ok~", 0, &mut delay);
        assert_eq!(result, Err(Error::InvalidGlyph(b'~')));
        assert_eq!(matrix.interface.attempts, 0);
    }

    #[test]
    fn test_draw_picture_copies_image() {
        let mut matrix = test_matrix();
        matrix.draw_picture(&crate::image::LOGO_10X10).unwrap();
        let frame = &matrix.interface.frames[0];
        for (n, rgb) in crate::image::LOGO_10X10.iter().enumerate() {
            assert_eq!(frame_rgb(frame, n), *rgb);
        }
    }

    #[test]
    fn test_fill_screen() {
        let mut matrix = test_matrix();
        matrix.fill_screen(RED).unwrap();
        let frame = &matrix.interface.frames[0];
        assert!((0..LED_COUNT).all(|n| frame_rgb(frame, n) == RED));
    }

    #[test]
    fn test_demo_rainbow_frames() {
        let mut matrix = test_matrix();
        let mut delay = MockDelay::default();
        matrix.demo_rainbow(100, 3, 10, &mut delay).unwrap();

        assert_eq!(matrix.interface.frames.len(), 3);
        assert_eq!(delay.ms, 30);
        let frame = &matrix.interface.frames[2];
        assert_eq!(frame_rgb(frame, 0), color_wheel(2, 100));
        assert_eq!(frame_rgb(frame, 83), color_wheel(85, 100));
    }

    #[test]
    fn test_demo_rainbow_stops_on_error() {
        let mut matrix = test_matrix();
        matrix.interface.fail_on = alloc::vec![1];
        let mut delay = MockDelay::default();
        let result = matrix.demo_rainbow(50, 10, 1, &mut delay);
        assert_eq!(result, Err(Error::Interface(MockError)));
        assert_eq!(matrix.interface.attempts, 2);
    }
}
