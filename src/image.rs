//! Built-in pictures for `draw_picture`
//!
//! 10x10 images are 100 `0xRRGGBB` colors in row-major order. 16x12 images
//! are 12 words, one per SW line (matrix row), bit `n` lighting column `n`.

/// Number of pixels in a 10x10 image
pub const RGB_IMAGE_LEN: usize = 100;

/// Number of row words in a 16x12 image
pub const RED_IMAGE_LEN: usize = 12;

/// Logo for the 10x10 RGB board: a red heart inside a blue ring
#[rustfmt::skip]
pub const LOGO_10X10: [u32; RGB_IMAGE_LEN] = [
    0x000000, 0x000000, 0x0000FF, 0x0000FF, 0x0000FF, 0x0000FF, 0x0000FF, 0x0000FF, 0x000000, 0x000000,
    0x000000, 0x0000FF, 0x000000, 0x000000, 0x000000, 0x000000, 0x000000, 0x000000, 0x0000FF, 0x000000,
    0x0000FF, 0x000000, 0x000000, 0xFF0000, 0x000000, 0x000000, 0xFF0000, 0x000000, 0x000000, 0x0000FF,
    0x0000FF, 0x000000, 0xFF0000, 0xFF0000, 0xFF0000, 0xFF0000, 0xFF0000, 0xFF0000, 0x000000, 0x0000FF,
    0x0000FF, 0x000000, 0xFF0000, 0xFF0000, 0xFF0000, 0xFF0000, 0xFF0000, 0xFF0000, 0x000000, 0x0000FF,
    0x0000FF, 0x000000, 0x000000, 0xFF0000, 0xFF0000, 0xFF0000, 0xFF0000, 0x000000, 0x000000, 0x0000FF,
    0x0000FF, 0x000000, 0x000000, 0x000000, 0xFF0000, 0xFF0000, 0x000000, 0x000000, 0x000000, 0x0000FF,
    0x0000FF, 0x000000, 0x000000, 0x000000, 0x000000, 0x000000, 0x000000, 0x000000, 0x000000, 0x0000FF,
    0x000000, 0x0000FF, 0x000000, 0x000000, 0x000000, 0x000000, 0x000000, 0x000000, 0x0000FF, 0x000000,
    0x000000, 0x000000, 0x0000FF, 0x0000FF, 0x0000FF, 0x0000FF, 0x0000FF, 0x0000FF, 0x000000, 0x000000,
];

/// [`LOGO_10X10`] with every color inverted
pub const LOGO_10X10_INVERTED: [u32; RGB_IMAGE_LEN] = invert_rgb(&LOGO_10X10);

/// Logo for the 16x12 R board: an "M" inside a frame
pub const LOGO_16X12: [u16; RED_IMAGE_LEN] = [
    0xFFFF, 0x8001, 0xB00D, 0xB81D, 0xBC3D, 0xB66D, 0xB3CD, 0xB18D, 0xB00D, 0xB00D, 0x8001, 0xFFFF,
];

/// [`LOGO_16X12`] with every LED toggled
pub const LOGO_16X12_INVERTED: [u16; RED_IMAGE_LEN] = invert_red(&LOGO_16X12);

const fn invert_rgb(image: &[u32; RGB_IMAGE_LEN]) -> [u32; RGB_IMAGE_LEN] {
    let mut out = [0; RGB_IMAGE_LEN];
    let mut i = 0;
    while i < RGB_IMAGE_LEN {
        out[i] = image[i] ^ 0x00FF_FFFF;
        i += 1;
    }
    out
}

const fn invert_red(image: &[u16; RED_IMAGE_LEN]) -> [u16; RED_IMAGE_LEN] {
    let mut out = [0; RED_IMAGE_LEN];
    let mut i = 0;
    while i < RED_IMAGE_LEN {
        out[i] = !image[i];
        i += 1;
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_inverted_logos() {
        assert_eq!(LOGO_10X10_INVERTED[0], 0xFF_FF_FF);
        assert_eq!(LOGO_10X10_INVERTED[2], 0xFF_FF_00);
        assert_eq!(LOGO_16X12_INVERTED[0], 0x0000);
        assert_eq!(LOGO_16X12_INVERTED[1], 0x7FFE);
    }

    #[test]
    fn test_logo_16x12_is_framed() {
        assert!(LOGO_16X12.iter().all(|row| row & 0x8001 == 0x8001));
    }
}
