//! Graphics support via embedded-graphics
//!
//! Both drivers implement [`DrawTarget`] so embedded-graphics primitives,
//! fonts and images can be drawn onto the matrices:
//!
//! - [`Rgb10x10`]: 10x10 pixels of [`Rgb888`], pixel `(x, y)` is LED
//!   `10 * y + x`. The per-LED brightness is left as is.
//! - [`Red16x12`]: 16x12 pixels of [`BinaryColor`], pixel `(x, y)` is LED
//!   `16 * y + x`.
//!
//! Drawing only updates the LED buffer, so it cannot fail. Call
//! `write_led_matrix` to push the result. Pixels outside the matrix are
//! ignored.
//!
//! ## Example
//!
//! ```rust,no_run
//! use embedded_graphics::{
//!     pixelcolor::Rgb888,
//!     prelude::*,
//!     primitives::{Circle, PrimitiveStyle},
//! };
//! use click_matrix::{Rgb10x10, RgbBuilder, SpiInterface};
//! # use core::convert::Infallible;
//! # use embedded_hal::spi::{Operation, SpiDevice};
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
//! # let config = match RgbBuilder::new().build() {
//! #     Ok(config) => config,
//! #     Err(_) => return,
//! # };
//! let mut matrix = Rgb10x10::new(SpiInterface::new(MockSpi), config);
//! let _ = matrix.default_config();
//!
//! let _ = Circle::new(Point::new(1, 1), 8)
//!     .into_styled(PrimitiveStyle::with_stroke(Rgb888::CYAN, 1))
//!     .draw(&mut matrix);
//!
//! let _ = matrix.write_led_matrix();
//! ```

use core::convert::Infallible;
use embedded_graphics_core::{
    draw_target::DrawTarget,
    geometry::{OriginDimensions, Point, Size},
    pixelcolor::{BinaryColor, Rgb888, RgbColor},
    prelude::Pixel,
};

use crate::color::rgb;
use crate::interface::{FrameInterface, RegisterInterface};
use crate::red16x12::{self, Red16x12};
use crate::rgb10x10::Rgb10x10;

/// Width and height of the 10x10 RGB matrix
const RGB_SIDE: u32 = 10;

/// Width of the 16x12 R matrix
const RED_WIDTH: u32 = red16x12::ROW_LEN as u32;

/// Height of the 16x12 R matrix
const RED_HEIGHT: u32 = (red16x12::LED_COUNT / red16x12::ROW_LEN) as u32;

/// Row-major LED index of a pixel, `None` outside `width` x `height`
fn led_at(point: Point, width: u32, height: u32) -> Option<usize> {
    let x = u32::try_from(point.x).ok()?;
    let y = u32::try_from(point.y).ok()?;
    if x >= width || y >= height {
        return None;
    }
    Some((y * width + x) as usize)
}

impl<I> DrawTarget for Rgb10x10<I>
where
    I: FrameInterface,
{
    type Color = Rgb888;
    type Error = Infallible;

    fn draw_iter<Iter>(&mut self, pixels: Iter) -> Result<(), Self::Error>
    where
        Iter: IntoIterator<Item = Pixel<Self::Color>>,
    {
        let leds = self.leds_mut();
        for Pixel(point, color) in pixels {
            let Some(index) = led_at(point, RGB_SIDE, RGB_SIDE) else {
                continue;
            };
            if let Some(led) = leds.get_mut(index) {
                led.set_rgb(rgb(color.r(), color.g(), color.b()));
            }
        }
        Ok(())
    }
}

impl<I> OriginDimensions for Rgb10x10<I>
where
    I: FrameInterface,
{
    fn size(&self) -> Size {
        Size::new(RGB_SIDE, RGB_SIDE)
    }
}

impl<I> DrawTarget for Red16x12<I>
where
    I: RegisterInterface,
{
    type Color = BinaryColor;
    type Error = Infallible;

    fn draw_iter<Iter>(&mut self, pixels: Iter) -> Result<(), Self::Error>
    where
        Iter: IntoIterator<Item = Pixel<Self::Color>>,
    {
        let leds = self.leds_mut();
        for Pixel(point, color) in pixels {
            let Some(index) = led_at(point, RED_WIDTH, RED_HEIGHT) else {
                continue;
            };
            let Some(byte) = leds.get_mut(index / 8) else {
                continue;
            };
            let mask = 1u8 << (index % 8);
            if color.is_on() {
                *byte |= mask;
            } else {
                *byte &= !mask;
            }
        }
        Ok(())
    }
}

impl<I> OriginDimensions for Red16x12<I>
where
    I: RegisterInterface,
{
    fn size(&self) -> Size {
        Size::new(RED_WIDTH, RED_HEIGHT)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::color::{BLACK, Led};
    use crate::config::{RedBuilder, RgbBuilder};
    use embedded_graphics::prelude::*;
    use embedded_graphics::primitives::{Line, PrimitiveStyle, Rectangle};
    use embedded_hal::delay::DelayNs;

    struct MockFrames;

    impl FrameInterface for MockFrames {
        type Error = Infallible;

        fn write_frame(&mut self, _frame: &[u8]) -> Result<(), Self::Error> {
            Ok(())
        }
    }

    struct MockRegs;

    impl RegisterInterface for MockRegs {
        type Error = Infallible;

        fn write_registers(&mut self, _start: u8, _data: &[u8]) -> Result<(), Self::Error> {
            Ok(())
        }

        fn read_register(&mut self, _register: u8) -> Result<u8, Self::Error> {
            Ok(0)
        }

        fn enable<D: DelayNs>(&mut self, _delay: &mut D) -> Result<(), Self::Error> {
            Ok(())
        }

        fn disable(&mut self) -> Result<(), Self::Error> {
            Ok(())
        }
    }

    fn rgb_matrix() -> Rgb10x10<MockFrames> {
        Rgb10x10::new(MockFrames, RgbBuilder::new().build().unwrap())
    }

    fn red_matrix() -> Red16x12<MockRegs> {
        Red16x12::new(MockRegs, RedBuilder::new().build().unwrap())
    }

    #[test]
    fn test_sizes() {
        assert_eq!(rgb_matrix().size(), Size::new(10, 10));
        assert_eq!(red_matrix().size(), Size::new(16, 12));
    }

    #[test]
    fn test_rgb_pixel_maps_row_major() {
        let mut matrix = rgb_matrix();
        Pixel(Point::new(3, 7), Rgb888::new(0x12, 0x34, 0x56))
            .draw(&mut matrix)
            .unwrap();
        assert_eq!(matrix.led(73).rgb(), 0x12_34_56);
        assert_eq!(
            matrix.leds().iter().filter(|led| led.rgb() != BLACK).count(),
            1
        );
    }

    #[test]
    fn test_rgb_keeps_brightness() {
        let mut matrix = rgb_matrix();
        matrix.set_led_brightness(0, 9);
        Pixel(Point::zero(), Rgb888::RED).draw(&mut matrix).unwrap();
        assert_eq!(matrix.led(0), Led::new(9, 0xFF_00_00));
    }

    #[test]
    fn test_out_of_range_pixels_are_ignored() {
        let mut matrix = rgb_matrix();
        Line::new(Point::new(-5, 0), Point::new(15, 0))
            .into_styled(PrimitiveStyle::with_stroke(Rgb888::GREEN, 1))
            .draw(&mut matrix)
            .unwrap();
        assert!((0..10).all(|n| matrix.led(n).rgb() == 0x00_FF_00));
        assert!((10..100).all(|n| matrix.led(n).rgb() == BLACK));

        let mut matrix = red_matrix();
        Pixel(Point::new(16, 0), BinaryColor::On)
            .draw(&mut matrix)
            .unwrap();
        Pixel(Point::new(0, 12), BinaryColor::On)
            .draw(&mut matrix)
            .unwrap();
        assert!(matrix.leds().iter().all(|byte| *byte == 0));
    }

    #[test]
    fn test_red_rectangle() {
        let mut matrix = red_matrix();
        Rectangle::new(Point::new(0, 0), Size::new(16, 12))
            .into_styled(PrimitiveStyle::with_fill(BinaryColor::On))
            .draw(&mut matrix)
            .unwrap();
        assert!(matrix.leds().iter().all(|byte| *byte == 0xFF));

        Pixel(Point::new(9, 1), BinaryColor::Off)
            .draw(&mut matrix)
            .unwrap();
        assert_eq!(matrix.led_state(16 + 9), Some(false));
        assert_eq!(matrix.leds()[3], 0xFD);
    }
}
