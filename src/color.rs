//! Color and pixel types for the LED matrices
//!
//! Colors are carried as 24-bit `0xRRGGBB` values in a `u32`. The 10x10 RGB
//! board stores one [`Led`] per position, combining that color with a 5-bit
//! global brightness.
//!
//! ## Color Wheel
//!
//! [`color_wheel`] maps an 8-bit wheel position onto three linear segments:
//!
//! | Position  | Red        | Green      | Blue       |
//! |-----------|------------|------------|------------|
//! | 0..85     | ramps up   | ramps down | 0          |
//! | 85..170   | ramps down | 0          | ramps up   |
//! | 170..=255 | 0          | ramps up   | ramps down |
//!
//! ## Example
//!
//! ```
//! use click_matrix::color::{color_wheel, make_color};
//!
//! assert_eq!(make_color(255, 255, 255, 100), 0xFF_FF_FF);
//! assert_eq!(make_color(255, 255, 255, 150), 0xFF_FF_FF); // clamped
//! assert_eq!(color_wheel(0, 100), make_color(0, 255, 0, 100));
//! ```

/// Black (all channels off)
pub const BLACK: u32 = 0x00_00_00;
/// White (all channels full)
pub const WHITE: u32 = 0xFF_FF_FF;
/// Red
pub const RED: u32 = 0xFF_00_00;
/// Green
pub const GREEN: u32 = 0x00_FF_00;
/// Blue
pub const BLUE: u32 = 0x00_00_FF;
/// Yellow
pub const YELLOW: u32 = 0xFF_FF_00;
/// Cyan
pub const CYAN: u32 = 0x00_FF_FF;
/// Magenta
pub const MAGENTA: u32 = 0xFF_00_FF;

/// Maximum per-LED brightness (5 bits)
pub const MAX_BRIGHTNESS: u8 = 31;

/// Highest percentage accepted by [`make_color`]; larger values are clamped
pub const MAX_PERCENT: u8 = 100;

/// One LED of the 10x10 RGB matrix
///
/// The brightness is the APA102-style global brightness (0..=31), applied by
/// the LED itself on top of the 8-bit channel values.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Led {
    /// Global brightness, 0..=31
    pub brightness: u8,
    /// Red channel
    pub red: u8,
    /// Green channel
    pub green: u8,
    /// Blue channel
    pub blue: u8,
}

impl Led {
    /// Create an LED entry from a brightness and a `0xRRGGBB` color
    ///
    /// Brightness bits above the low five are dropped.
    pub const fn new(brightness: u8, rgb: u32) -> Self {
        Self {
            brightness: brightness & MAX_BRIGHTNESS,
            red: red(rgb),
            green: green(rgb),
            blue: blue(rgb),
        }
    }

    /// The LED color as `0xRRGGBB`
    pub const fn rgb(&self) -> u32 {
        rgb(self.red, self.green, self.blue)
    }

    /// Replace the color, keeping the brightness
    pub fn set_rgb(&mut self, rgb: u32) {
        self.red = red(rgb);
        self.green = green(rgb);
        self.blue = blue(rgb);
    }
}

/// Pack three channels into `0xRRGGBB`
pub const fn rgb(red: u8, green: u8, blue: u8) -> u32 {
    ((red as u32) << 16) | ((green as u32) << 8) | blue as u32
}

/// Red channel of a `0xRRGGBB` color
pub const fn red(rgb: u32) -> u8 {
    (rgb >> 16) as u8
}

/// Green channel of a `0xRRGGBB` color
pub const fn green(rgb: u32) -> u8 {
    (rgb >> 8) as u8
}

/// Blue channel of a `0xRRGGBB` color
pub const fn blue(rgb: u32) -> u8 {
    rgb as u8
}

/// Build a `0xRRGGBB` color scaled by a brightness percentage
///
/// Each channel is multiplied by `pct / 100` (integer arithmetic, rounding
/// down). Percentages above 100 are clamped to 100.
///
/// ## Example
///
/// ```
/// use click_matrix::color::make_color;
///
/// assert_eq!(make_color(255, 255, 255, 0), 0x00_00_00);
/// assert_eq!(make_color(255, 255, 255, 1), 0x02_02_02);
/// assert_eq!(make_color(200, 100, 50, 50), 0x64_32_19);
/// ```
pub fn make_color(red: u8, green: u8, blue: u8, pct: u8) -> u32 {
    let pct = u32::from(pct.min(MAX_PERCENT));
    let scale = |channel: u8| (u32::from(channel) * pct / u32::from(MAX_PERCENT)) as u8;
    rgb(scale(red), scale(green), scale(blue))
}

/// Map a wheel position (0..=255) to a color, scaled by `pct`
///
/// Segment boundaries sit at 85 and 170: position 0 is pure green, 85 pure
/// red, 170 pure blue. Within a segment one channel ramps up by 3 per step
/// while another ramps down; the third stays at zero.
pub fn color_wheel(position: u8, pct: u8) -> u32 {
    let step = |offset: u8| offset.saturating_mul(3);
    match position {
        0..85 => make_color(step(position), 255 - step(position), 0, pct),
        85..170 => {
            let offset = position - 85;
            make_color(255 - step(offset), 0, step(offset), pct)
        }
        _ => {
            let offset = position - 170;
            make_color(0, step(offset), 255 - step(offset), pct)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_make_color_clamps_percentage() {
        assert_eq!(make_color(255, 255, 255, 0), 0x00_00_00);
        assert_eq!(make_color(255, 255, 255, 1), 0x02_02_02);
        assert_eq!(make_color(255, 255, 255, 100), 0xFF_FF_FF);
        assert_eq!(make_color(255, 255, 255, 150), 0xFF_FF_FF);
        assert_eq!(make_color(255, 255, 255, 255), 0xFF_FF_FF);
    }

    #[test]
    fn test_make_color_scales_each_channel() {
        assert_eq!(make_color(0x80, 0x40, 0x20, 50), 0x40_20_10);
    }

    #[test]
    fn test_color_wheel_start_is_green() {
        assert_eq!(color_wheel(0, 100), make_color(0, 255, 0, 100));
        assert_eq!(color_wheel(0, 100), GREEN);
    }

    #[test]
    fn test_color_wheel_segment_boundaries() {
        let at_85 = color_wheel(85, 100);
        assert_eq!(at_85, RED);
        assert_eq!(green(at_85), 0);

        let at_170 = color_wheel(170, 100);
        assert_eq!(at_170, BLUE);
        assert_eq!(red(at_170), 0);
    }

    #[test]
    fn test_color_wheel_segments_hold_one_channel_at_zero() {
        for position in 0..=255u8 {
            let color = color_wheel(position, 100);
            let zeros = [red(color), green(color), blue(color)]
                .iter()
                .filter(|channel| **channel == 0)
                .count();
            assert!(zeros >= 1, "position {position} -> {color:06X}");
        }
    }

    #[test]
    fn test_color_wheel_end_of_wheel() {
        // 255 - 170 = 85 steps into the last segment
        assert_eq!(color_wheel(255, 100), rgb(0, 255, 0));
    }

    #[test]
    fn test_led_new_masks_brightness() {
        let led = Led::new(40, 0x12_34_56);
        assert_eq!(led.brightness, 8);
        assert_eq!((led.red, led.green, led.blue), (0x12, 0x34, 0x56));
        assert_eq!(led.rgb(), 0x12_34_56);
    }

    #[test]
    fn test_led_set_rgb_keeps_brightness() {
        let mut led = Led::new(5, BLACK);
        led.set_rgb(MAGENTA);
        assert_eq!(led.brightness, 5);
        assert_eq!(led.rgb(), MAGENTA);
    }
}
