//! Bitmap fonts for ASCII 32 (space) to 122 (`z`)
//!
//! Both fonts are stored column by column: element `n` of a glyph is glyph
//! column `n` (left to right), bit `r` of that element is row `r` (top to
//! bottom). This is the layout the renderers and scroll engine consume.
//!
//! - [`FONT_8X8`]: 8 column bytes per glyph, used by the 10x10 RGB board.
//! - [`FONT_12X12`]: 12 column words per glyph (low 12 bits), used by the
//!   16x12 R board. Most glyphs leave blank columns that the scroll engine
//!   strips to tighten spacing.
//!
//! ```
//! use click_matrix::font::{glyph_8x8, validate};
//!
//! // 'I' is a single stroke with serifs
//! assert_eq!(glyph_8x8(b'I'), Some(&[0x00, 0x41, 0x7F, 0x7F, 0x41, 0x00, 0x00, 0x00]));
//! assert_eq!(glyph_8x8(b'~'), None);
//! assert_eq!(validate("Hello~"), Err(b'~'));
//! ```

/// First character covered by the fonts
pub const FIRST_CHAR: u8 = b' ';

/// Last character covered by the fonts
pub const LAST_CHAR: u8 = b'z';

/// Number of glyphs in each font
pub const GLYPH_COUNT: usize = (LAST_CHAR - FIRST_CHAR) as usize + 1;

/// Glyph for `ascii` from [`FONT_8X8`]
pub fn glyph_8x8(ascii: u8) -> Option<&'static [u8; 8]> {
    FONT_8X8.get(usize::from(ascii.checked_sub(FIRST_CHAR)?))
}

/// Glyph for `ascii` from [`FONT_12X12`]
pub fn glyph_12x12(ascii: u8) -> Option<&'static [u16; 12]> {
    FONT_12X12.get(usize::from(ascii.checked_sub(FIRST_CHAR)?))
}

/// Check that every byte of `text` has a glyph
///
/// Returns the first byte without one.
pub fn validate(text: &str) -> Result<(), u8> {
    match text.bytes().find(|ascii| !(FIRST_CHAR..=LAST_CHAR).contains(ascii)) {
        Some(ascii) => Err(ascii),
        None => Ok(()),
    }
}

/// 8x8 font, one byte per column
#[rustfmt::skip]
pub static FONT_8X8: [[u8; 8]; GLYPH_COUNT] = [
    [0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00], // ' '
    [0x00, 0x00, 0x06, 0x5F, 0x5F, 0x06, 0x00, 0x00], // '!'
    [0x00, 0x03, 0x03, 0x00, 0x03, 0x03, 0x00, 0x00], // '"'
    [0x14, 0x7F, 0x7F, 0x14, 0x7F, 0x7F, 0x14, 0x00], // '#'
    [0x24, 0x2E, 0x6B, 0x6B, 0x3A, 0x12, 0x00, 0x00], // '$'
    [0x46, 0x66, 0x30, 0x18, 0x0C, 0x66, 0x62, 0x00], // '%'
    [0x30, 0x7A, 0x4F, 0x5D, 0x37, 0x7A, 0x48, 0x00], // '&'
    [0x04, 0x07, 0x03, 0x00, 0x00, 0x00, 0x00, 0x00], // "'"
    [0x00, 0x1C, 0x3E, 0x63, 0x41, 0x00, 0x00, 0x00], // '('
    [0x00, 0x41, 0x63, 0x3E, 0x1C, 0x00, 0x00, 0x00], // ')'
    [0x08, 0x2A, 0x3E, 0x1C, 0x1C, 0x3E, 0x2A, 0x08], // '*'
    [0x08, 0x08, 0x3E, 0x3E, 0x08, 0x08, 0x00, 0x00], // '+'
    [0x00, 0x80, 0xE0, 0x60, 0x00, 0x00, 0x00, 0x00], // ','
    [0x08, 0x08, 0x08, 0x08, 0x08, 0x08, 0x00, 0x00], // '-'
    [0x00, 0x00, 0x60, 0x60, 0x00, 0x00, 0x00, 0x00], // '.'
    [0x60, 0x30, 0x18, 0x0C, 0x06, 0x03, 0x01, 0x00], // '/'
    [0x3E, 0x7F, 0x71, 0x59, 0x4D, 0x7F, 0x3E, 0x00], // '0'
    [0x40, 0x42, 0x7F, 0x7F, 0x40, 0x40, 0x00, 0x00], // '1'
    [0x62, 0x73, 0x59, 0x49, 0x6F, 0x66, 0x00, 0x00], // '2'
    [0x22, 0x63, 0x49, 0x49, 0x7F, 0x36, 0x00, 0x00], // '3'
    [0x18, 0x1C, 0x16, 0x53, 0x7F, 0x7F, 0x50, 0x00], // '4'
    [0x27, 0x67, 0x45, 0x45, 0x7D, 0x39, 0x00, 0x00], // '5'
    [0x3C, 0x7E, 0x4B, 0x49, 0x79, 0x30, 0x00, 0x00], // '6'
    [0x03, 0x03, 0x71, 0x79, 0x0F, 0x07, 0x00, 0x00], // '7'
    [0x36, 0x7F, 0x49, 0x49, 0x7F, 0x36, 0x00, 0x00], // '8'
    [0x06, 0x4F, 0x49, 0x69, 0x3F, 0x1E, 0x00, 0x00], // '9'
    [0x00, 0x00, 0x66, 0x66, 0x00, 0x00, 0x00, 0x00], // ':'
    [0x00, 0x80, 0xE6, 0x66, 0x00, 0x00, 0x00, 0x00], // ';'
    [0x08, 0x1C, 0x36, 0x63, 0x41, 0x00, 0x00, 0x00], // '<'
    [0x24, 0x24, 0x24, 0x24, 0x24, 0x24, 0x00, 0x00], // '='
    [0x00, 0x41, 0x63, 0x36, 0x1C, 0x08, 0x00, 0x00], // '>'
    [0x02, 0x03, 0x51, 0x59, 0x0F, 0x06, 0x00, 0x00], // '?'
    [0x3E, 0x7F, 0x41, 0x5D, 0x5D, 0x1F, 0x1E, 0x00], // '@'
    [0x7C, 0x7E, 0x13, 0x13, 0x7E, 0x7C, 0x00, 0x00], // 'A'
    [0x41, 0x7F, 0x7F, 0x49, 0x49, 0x7F, 0x36, 0x00], // 'B'
    [0x1C, 0x3E, 0x63, 0x41, 0x41, 0x63, 0x22, 0x00], // 'C'
    [0x41, 0x7F, 0x7F, 0x41, 0x63, 0x3E, 0x1C, 0x00], // 'D'
    [0x41, 0x7F, 0x7F, 0x49, 0x5D, 0x41, 0x63, 0x00], // 'E'
    [0x41, 0x7F, 0x7F, 0x49, 0x1D, 0x01, 0x03, 0x00], // 'F'
    [0x1C, 0x3E, 0x63, 0x41, 0x51, 0x73, 0x72, 0x00], // 'G'
    [0x7F, 0x7F, 0x08, 0x08, 0x7F, 0x7F, 0x00, 0x00], // 'H'
    [0x00, 0x41, 0x7F, 0x7F, 0x41, 0x00, 0x00, 0x00], // 'I'
    [0x30, 0x70, 0x40, 0x41, 0x7F, 0x3F, 0x01, 0x00], // 'J'
    [0x41, 0x7F, 0x7F, 0x08, 0x1C, 0x77, 0x63, 0x00], // 'K'
    [0x41, 0x7F, 0x7F, 0x41, 0x40, 0x60, 0x70, 0x00], // 'L'
    [0x7F, 0x7F, 0x0E, 0x1C, 0x0E, 0x7F, 0x7F, 0x00], // 'M'
    [0x7F, 0x7F, 0x06, 0x0C, 0x18, 0x7F, 0x7F, 0x00], // 'N'
    [0x1C, 0x3E, 0x63, 0x41, 0x63, 0x3E, 0x1C, 0x00], // 'O'
    [0x41, 0x7F, 0x7F, 0x49, 0x09, 0x0F, 0x06, 0x00], // 'P'
    [0x1E, 0x3F, 0x21, 0x71, 0x7F, 0x5E, 0x00, 0x00], // 'Q'
    [0x41, 0x7F, 0x7F, 0x09, 0x19, 0x7F, 0x66, 0x00], // 'R'
    [0x26, 0x6F, 0x4D, 0x59, 0x73, 0x32, 0x00, 0x00], // 'S'
    [0x03, 0x41, 0x7F, 0x7F, 0x41, 0x03, 0x00, 0x00], // 'T'
    [0x7F, 0x7F, 0x40, 0x40, 0x7F, 0x7F, 0x00, 0x00], // 'U'
    [0x1F, 0x3F, 0x60, 0x60, 0x3F, 0x1F, 0x00, 0x00], // 'V'
    [0x7F, 0x7F, 0x30, 0x18, 0x30, 0x7F, 0x7F, 0x00], // 'W'
    [0x43, 0x67, 0x3C, 0x18, 0x3C, 0x67, 0x43, 0x00], // 'X'
    [0x07, 0x4F, 0x78, 0x78, 0x4F, 0x07, 0x00, 0x00], // 'Y'
    [0x47, 0x63, 0x71, 0x59, 0x4D, 0x67, 0x73, 0x00], // 'Z'
    [0x00, 0x7F, 0x7F, 0x41, 0x41, 0x00, 0x00, 0x00], // '['
    [0x01, 0x03, 0x06, 0x0C, 0x18, 0x30, 0x60, 0x00], // '\\'
    [0x00, 0x41, 0x41, 0x7F, 0x7F, 0x00, 0x00, 0x00], // ']'
    [0x08, 0x0C, 0x06, 0x03, 0x06, 0x0C, 0x08, 0x00], // '^'
    [0x80, 0x80, 0x80, 0x80, 0x80, 0x80, 0x80, 0x80], // '_'
    [0x00, 0x00, 0x03, 0x07, 0x04, 0x00, 0x00, 0x00], // '`'
    [0x20, 0x74, 0x54, 0x54, 0x3C, 0x78, 0x40, 0x00], // 'a'
    [0x41, 0x7F, 0x3F, 0x48, 0x48, 0x78, 0x30, 0x00], // 'b'
    [0x38, 0x7C, 0x44, 0x44, 0x6C, 0x28, 0x00, 0x00], // 'c'
    [0x30, 0x78, 0x48, 0x49, 0x3F, 0x7F, 0x40, 0x00], // 'd'
    [0x38, 0x7C, 0x54, 0x54, 0x5C, 0x18, 0x00, 0x00], // 'e'
    [0x48, 0x7E, 0x7F, 0x49, 0x03, 0x02, 0x00, 0x00], // 'f'
    [0x98, 0xBC, 0xA4, 0xA4, 0xF8, 0x7C, 0x04, 0x00], // 'g'
    [0x41, 0x7F, 0x7F, 0x08, 0x04, 0x7C, 0x78, 0x00], // 'h'
    [0x00, 0x44, 0x7D, 0x7D, 0x40, 0x00, 0x00, 0x00], // 'i'
    [0x60, 0xE0, 0x80, 0x80, 0xFD, 0x7D, 0x00, 0x00], // 'j'
    [0x41, 0x7F, 0x7F, 0x10, 0x38, 0x6C, 0x44, 0x00], // 'k'
    [0x00, 0x41, 0x7F, 0x7F, 0x40, 0x00, 0x00, 0x00], // 'l'
    [0x7C, 0x7C, 0x18, 0x38, 0x1C, 0x7C, 0x78, 0x00], // 'm'
    [0x7C, 0x7C, 0x04, 0x04, 0x7C, 0x78, 0x00, 0x00], // 'n'
    [0x38, 0x7C, 0x44, 0x44, 0x7C, 0x38, 0x00, 0x00], // 'o'
    [0x84, 0xFC, 0xF8, 0xA4, 0x24, 0x3C, 0x18, 0x00], // 'p'
    [0x18, 0x3C, 0x24, 0xA4, 0xF8, 0xFC, 0x84, 0x00], // 'q'
    [0x44, 0x7C, 0x78, 0x4C, 0x04, 0x1C, 0x18, 0x00], // 'r'
    [0x48, 0x5C, 0x54, 0x54, 0x74, 0x24, 0x00, 0x00], // 's'
    [0x00, 0x04, 0x3E, 0x7F, 0x44, 0x24, 0x00, 0x00], // 't'
    [0x3C, 0x7C, 0x40, 0x40, 0x3C, 0x7C, 0x40, 0x00], // 'u'
    [0x1C, 0x3C, 0x60, 0x60, 0x3C, 0x1C, 0x00, 0x00], // 'v'
    [0x3C, 0x7C, 0x70, 0x38, 0x70, 0x7C, 0x3C, 0x00], // 'w'
    [0x44, 0x6C, 0x38, 0x10, 0x38, 0x6C, 0x44, 0x00], // 'x'
    [0x9C, 0xBC, 0xA0, 0xA0, 0xFC, 0x7C, 0x00, 0x00], // 'y'
    [0x4C, 0x64, 0x74, 0x5C, 0x4C, 0x64, 0x00, 0x00], // 'z'
];

/// 12x12 font, one word per column
#[rustfmt::skip]
pub static FONT_12X12: [[u16; 12]; GLYPH_COUNT] = [
    [0x000, 0x000, 0x000, 0x000, 0x000, 0x000, 0x000, 0x000, 0x000, 0x000, 0x000, 0x000], // ' '
    [0x000, 0x000, 0x000, 0x01C, 0x01C, 0x6FF, 0x6FF, 0x6FF, 0x01C, 0x000, 0x000, 0x000], // '!'
    [0x000, 0x000, 0x007, 0x007, 0x007, 0x000, 0x007, 0x007, 0x007, 0x000, 0x000, 0x000], // '"'
    [0x0D8, 0x0D8, 0x7FF, 0x7FF, 0x7FF, 0x0D8, 0x7FF, 0x7FF, 0x7FF, 0x0D8, 0x0D8, 0x000], // '#'
    [0x118, 0x118, 0x13C, 0x727, 0x727, 0x727, 0x1E4, 0x1E4, 0x0C4, 0x000, 0x000, 0x000], // '$'
    [0x61C, 0x61C, 0x71C, 0x1C0, 0x1C0, 0x0E0, 0x038, 0x038, 0x71C, 0x704, 0x704, 0x000], // '%'
    [0x1C0, 0x1C0, 0x7E4, 0x63F, 0x63F, 0x6FB, 0x1DF, 0x1DF, 0x7E4, 0x620, 0x620, 0x000], // '&'
    [0x018, 0x018, 0x01F, 0x007, 0x007, 0x000, 0x000, 0x000, 0x000, 0x000, 0x000, 0x000], // "'"
    [0x000, 0x000, 0x0F8, 0x1FC, 0x1FC, 0x707, 0x603, 0x603, 0x000, 0x000, 0x000, 0x000], // '('
    [0x000, 0x000, 0x603, 0x707, 0x707, 0x1FC, 0x0F8, 0x0F8, 0x000, 0x000, 0x000, 0x000], // ')'
    [0x020, 0x020, 0x124, 0x1FC, 0x1FC, 0x0F8, 0x0F8, 0x0F8, 0x1FC, 0x124, 0x124, 0x020], // '*'
    [0x020, 0x020, 0x020, 0x1FC, 0x1FC, 0x1FC, 0x020, 0x020, 0x020, 0x000, 0x000, 0x000], // '+'
    [0x000, 0x000, 0x800, 0xF00, 0xF00, 0x700, 0x000, 0x000, 0x000, 0x000, 0x000, 0x000], // ','
    [0x020, 0x020, 0x020, 0x020, 0x020, 0x020, 0x020, 0x020, 0x020, 0x000, 0x000, 0x000], // '-'
    [0x000, 0x000, 0x000, 0x700, 0x700, 0x700, 0x000, 0x000, 0x000, 0x000, 0x000, 0x000], // '.'
    [0x700, 0x700, 0x1C0, 0x0E0, 0x0E0, 0x038, 0x01C, 0x01C, 0x007, 0x003, 0x003, 0x000], // '/'
    [0x1FC, 0x1FC, 0x7FF, 0x7C3, 0x7C3, 0x6E3, 0x63B, 0x63B, 0x7FF, 0x1FC, 0x1FC, 0x000], // '0'
    [0x600, 0x600, 0x604, 0x7FF, 0x7FF, 0x7FF, 0x600, 0x600, 0x600, 0x000, 0x000, 0x000], // '1'
    [0x704, 0x704, 0x7C7, 0x6E3, 0x6E3, 0x623, 0x73F, 0x73F, 0x71C, 0x000, 0x000, 0x000], // '2'
    [0x104, 0x104, 0x707, 0x623, 0x623, 0x623, 0x7FF, 0x7FF, 0x1DC, 0x000, 0x000, 0x000], // '3'
    [0x0E0, 0x0E0, 0x0F8, 0x0DC, 0x0DC, 0x6C7, 0x7FF, 0x7FF, 0x7FF, 0x6C0, 0x6C0, 0x000], // '4'
    [0x11F, 0x11F, 0x71F, 0x61B, 0x61B, 0x61B, 0x7FB, 0x7FB, 0x1E3, 0x000, 0x000, 0x000], // '5'
    [0x1F8, 0x1F8, 0x7FC, 0x627, 0x627, 0x623, 0x7E3, 0x7E3, 0x1C0, 0x000, 0x000, 0x000], // '6'
    [0x007, 0x007, 0x007, 0x7C3, 0x7C3, 0x7E3, 0x03F, 0x03F, 0x01F, 0x000, 0x000, 0x000], // '7'
    [0x1DC, 0x1DC, 0x7FF, 0x623, 0x623, 0x623, 0x7FF, 0x7FF, 0x1DC, 0x000, 0x000, 0x000], // '8'
    [0x01C, 0x01C, 0x63F, 0x623, 0x623, 0x723, 0x1FF, 0x1FF, 0x0FC, 0x000, 0x000, 0x000], // '9'
    [0x000, 0x000, 0x000, 0x71C, 0x71C, 0x71C, 0x000, 0x000, 0x000, 0x000, 0x000, 0x000], // ':'
    [0x000, 0x000, 0x800, 0xF1C, 0xF1C, 0x71C, 0x000, 0x000, 0x000, 0x000, 0x000, 0x000], // ';'
    [0x020, 0x020, 0x0F8, 0x1DC, 0x1DC, 0x707, 0x603, 0x603, 0x000, 0x000, 0x000, 0x000], // '<'
    [0x118, 0x118, 0x118, 0x118, 0x118, 0x118, 0x118, 0x118, 0x118, 0x000, 0x000, 0x000], // '='
    [0x000, 0x000, 0x603, 0x707, 0x707, 0x1DC, 0x0F8, 0x0F8, 0x020, 0x000, 0x000, 0x000], // '>'
    [0x004, 0x004, 0x007, 0x6C3, 0x6C3, 0x6E3, 0x03F, 0x03F, 0x01C, 0x000, 0x000, 0x000], // '?'
    [0x1FC, 0x1FC, 0x7FF, 0x603, 0x603, 0x6FB, 0x6FB, 0x6FB, 0x0FF, 0x0FC, 0x0FC, 0x000], // '@'
    [0x7F8, 0x7F8, 0x7FC, 0x0C7, 0x0C7, 0x0C7, 0x7FC, 0x7FC, 0x7F8, 0x000, 0x000, 0x000], // 'A'
    [0x603, 0x603, 0x7FF, 0x7FF, 0x7FF, 0x623, 0x623, 0x623, 0x7FF, 0x1DC, 0x1DC, 0x000], // 'B'
    [0x0F8, 0x0F8, 0x1FC, 0x707, 0x707, 0x603, 0x603, 0x603, 0x707, 0x104, 0x104, 0x000], // 'C'
    [0x603, 0x603, 0x7FF, 0x7FF, 0x7FF, 0x603, 0x707, 0x707, 0x1FC, 0x0F8, 0x0F8, 0x000], // 'D'
    [0x603, 0x603, 0x7FF, 0x7FF, 0x7FF, 0x623, 0x6FB, 0x6FB, 0x603, 0x707, 0x707, 0x000], // 'E'
    [0x603, 0x603, 0x7FF, 0x7FF, 0x7FF, 0x623, 0x0FB, 0x0FB, 0x003, 0x007, 0x007, 0x000], // 'F'
    [0x0F8, 0x0F8, 0x1FC, 0x707, 0x707, 0x603, 0x6C3, 0x6C3, 0x7C7, 0x7C4, 0x7C4, 0x000], // 'G'
    [0x7FF, 0x7FF, 0x7FF, 0x020, 0x020, 0x020, 0x7FF, 0x7FF, 0x7FF, 0x000, 0x000, 0x000], // 'H'
    [0x000, 0x000, 0x603, 0x7FF, 0x7FF, 0x7FF, 0x603, 0x603, 0x000, 0x000, 0x000, 0x000], // 'I'
    [0x1C0, 0x1C0, 0x7C0, 0x600, 0x600, 0x603, 0x7FF, 0x7FF, 0x1FF, 0x003, 0x003, 0x000], // 'J'
    [0x603, 0x603, 0x7FF, 0x7FF, 0x7FF, 0x020, 0x0F8, 0x0F8, 0x7DF, 0x707, 0x707, 0x000], // 'K'
    [0x603, 0x603, 0x7FF, 0x7FF, 0x7FF, 0x603, 0x600, 0x600, 0x700, 0x7C0, 0x7C0, 0x000], // 'L'
    [0x7FF, 0x7FF, 0x7FF, 0x03C, 0x03C, 0x0F8, 0x03C, 0x03C, 0x7FF, 0x7FF, 0x7FF, 0x000], // 'M'
    [0x7FF, 0x7FF, 0x7FF, 0x01C, 0x01C, 0x038, 0x0E0, 0x0E0, 0x7FF, 0x7FF, 0x7FF, 0x000], // 'N'
    [0x0F8, 0x0F8, 0x1FC, 0x707, 0x707, 0x603, 0x707, 0x707, 0x1FC, 0x0F8, 0x0F8, 0x000], // 'O'
    [0x603, 0x603, 0x7FF, 0x7FF, 0x7FF, 0x623, 0x023, 0x023, 0x03F, 0x01C, 0x01C, 0x000], // 'P'
    [0x0FC, 0x0FC, 0x1FF, 0x103, 0x103, 0x7C3, 0x7FF, 0x7FF, 0x6FC, 0x000, 0x000, 0x000], // 'Q'
    [0x603, 0x603, 0x7FF, 0x7FF, 0x7FF, 0x023, 0x0E3, 0x0E3, 0x7FF, 0x71C, 0x71C, 0x000], // 'R'
    [0x11C, 0x11C, 0x73F, 0x63B, 0x63B, 0x6E3, 0x7C7, 0x7C7, 0x1C4, 0x000, 0x000, 0x000], // 'S'
    [0x007, 0x007, 0x603, 0x7FF, 0x7FF, 0x7FF, 0x603, 0x603, 0x007, 0x000, 0x000, 0x000], // 'T'
    [0x7FF, 0x7FF, 0x7FF, 0x600, 0x600, 0x600, 0x7FF, 0x7FF, 0x7FF, 0x000, 0x000, 0x000], // 'U'
    [0x0FF, 0x0FF, 0x1FF, 0x700, 0x700, 0x700, 0x1FF, 0x1FF, 0x0FF, 0x000, 0x000, 0x000], // 'V'
    [0x7FF, 0x7FF, 0x7FF, 0x1C0, 0x1C0, 0x0E0, 0x1C0, 0x1C0, 0x7FF, 0x7FF, 0x7FF, 0x000], // 'W'
    [0x607, 0x607, 0x71F, 0x1F8, 0x1F8, 0x0E0, 0x1F8, 0x1F8, 0x71F, 0x607, 0x607, 0x000], // 'X'
    [0x01F, 0x01F, 0x63F, 0x7E0, 0x7E0, 0x7E0, 0x63F, 0x63F, 0x01F, 0x000, 0x000, 0x000], // 'Y'
    [0x61F, 0x61F, 0x707, 0x7C3, 0x7C3, 0x6E3, 0x63B, 0x63B, 0x71F, 0x7C7, 0x7C7, 0x000], // 'Z'
    [0x000, 0x000, 0x7FF, 0x7FF, 0x7FF, 0x603, 0x603, 0x603, 0x000, 0x000, 0x000, 0x000], // '['
    [0x003, 0x003, 0x007, 0x01C, 0x01C, 0x038, 0x0E0, 0x0E0, 0x1C0, 0x700, 0x700, 0x000], // '\\'
    [0x000, 0x000, 0x603, 0x603, 0x603, 0x7FF, 0x7FF, 0x7FF, 0x000, 0x000, 0x000, 0x000], // ']'
    [0x020, 0x020, 0x038, 0x01C, 0x01C, 0x007, 0x01C, 0x01C, 0x038, 0x020, 0x020, 0x000], // '^'
    [0x800, 0x800, 0x800, 0x800, 0x800, 0x800, 0x800, 0x800, 0x800, 0x800, 0x800, 0x800], // '_'
    [0x000, 0x000, 0x000, 0x007, 0x007, 0x01F, 0x018, 0x018, 0x000, 0x000, 0x000, 0x000], // '`'
    [0x100, 0x100, 0x7D8, 0x6D8, 0x6D8, 0x6D8, 0x1F8, 0x1F8, 0x7E0, 0x600, 0x600, 0x000], // 'a'
    [0x603, 0x603, 0x7FF, 0x1FF, 0x1FF, 0x620, 0x620, 0x620, 0x7E0, 0x1C0, 0x1C0, 0x000], // 'b'
    [0x1E0, 0x1E0, 0x7F8, 0x618, 0x618, 0x618, 0x738, 0x738, 0x120, 0x000, 0x000, 0x000], // 'c'
    [0x1C0, 0x1C0, 0x7E0, 0x620, 0x620, 0x623, 0x1FF, 0x1FF, 0x7FF, 0x600, 0x600, 0x000], // 'd'
    [0x1E0, 0x1E0, 0x7F8, 0x6D8, 0x6D8, 0x6D8, 0x6F8, 0x6F8, 0x0E0, 0x000, 0x000, 0x000], // 'e'
    [0x620, 0x620, 0x7FC, 0x7FF, 0x7FF, 0x623, 0x007, 0x007, 0x004, 0x000, 0x000, 0x000], // 'f'
    [0x8E0, 0x8E0, 0x9F8, 0x918, 0x918, 0x918, 0xFE0, 0xFE0, 0x7F8, 0x018, 0x018, 0x000], // 'g'
    [0x603, 0x603, 0x7FF, 0x7FF, 0x7FF, 0x020, 0x018, 0x018, 0x7F8, 0x7E0, 0x7E0, 0x000], // 'h'
    [0x000, 0x000, 0x618, 0x7FB, 0x7FB, 0x7FB, 0x600, 0x600, 0x000, 0x000, 0x000, 0x000], // 'i'
    [0x700, 0x700, 0xF00, 0x800, 0x800, 0x800, 0xFFB, 0xFFB, 0x7FB, 0x000, 0x000, 0x000], // 'j'
    [0x603, 0x603, 0x7FF, 0x7FF, 0x7FF, 0x0C0, 0x1E0, 0x1E0, 0x738, 0x618, 0x618, 0x000], // 'k'
    [0x000, 0x000, 0x603, 0x7FF, 0x7FF, 0x7FF, 0x600, 0x600, 0x000, 0x000, 0x000, 0x000], // 'l'
    [0x7F8, 0x7F8, 0x7F8, 0x0E0, 0x0E0, 0x1E0, 0x0F8, 0x0F8, 0x7F8, 0x7E0, 0x7E0, 0x000], // 'm'
    [0x7F8, 0x7F8, 0x7F8, 0x018, 0x018, 0x018, 0x7F8, 0x7F8, 0x7E0, 0x000, 0x000, 0x000], // 'n'
    [0x1E0, 0x1E0, 0x7F8, 0x618, 0x618, 0x618, 0x7F8, 0x7F8, 0x1E0, 0x000, 0x000, 0x000], // 'o'
    [0x818, 0x818, 0xFF8, 0xFE0, 0xFE0, 0x918, 0x118, 0x118, 0x1F8, 0x0E0, 0x0E0, 0x000], // 'p'
    [0x0E0, 0x0E0, 0x1F8, 0x118, 0x118, 0x918, 0xFE0, 0xFE0, 0xFF8, 0x818, 0x818, 0x000], // 'q'
    [0x618, 0x618, 0x7F8, 0x7E0, 0x7E0, 0x638, 0x018, 0x018, 0x0F8, 0x0E0, 0x0E0, 0x000], // 'r'
    [0x620, 0x620, 0x6F8, 0x6D8, 0x6D8, 0x6D8, 0x7D8, 0x7D8, 0x118, 0x000, 0x000, 0x000], // 's'
    [0x000, 0x000, 0x018, 0x1FC, 0x1FC, 0x7FF, 0x618, 0x618, 0x118, 0x000, 0x000, 0x000], // 't'
    [0x1F8, 0x1F8, 0x7F8, 0x600, 0x600, 0x600, 0x1F8, 0x1F8, 0x7F8, 0x600, 0x600, 0x000], // 'u'
    [0x0F8, 0x0F8, 0x1F8, 0x700, 0x700, 0x700, 0x1F8, 0x1F8, 0x0F8, 0x000, 0x000, 0x000], // 'v'
    [0x1F8, 0x1F8, 0x7F8, 0x7C0, 0x7C0, 0x1E0, 0x7C0, 0x7C0, 0x7F8, 0x1F8, 0x1F8, 0x000], // 'w'
    [0x618, 0x618, 0x738, 0x1E0, 0x1E0, 0x0C0, 0x1E0, 0x1E0, 0x738, 0x618, 0x618, 0x000], // 'x'
    [0x8F8, 0x8F8, 0x9F8, 0x900, 0x900, 0x900, 0xFF8, 0xFF8, 0x7F8, 0x000, 0x000, 0x000], // 'y'
    [0x638, 0x638, 0x718, 0x7D8, 0x7D8, 0x6F8, 0x638, 0x638, 0x718, 0x000, 0x000, 0x000], // 'z'
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_glyph_lookup_bounds() {
        assert!(glyph_8x8(b' ').is_some());
        assert!(glyph_8x8(b'z').is_some());
        assert!(glyph_8x8(b'{').is_none());
        assert!(glyph_8x8(0x1F).is_none());
        assert!(glyph_12x12(b'z').is_some());
        assert!(glyph_12x12(0).is_none());
    }

    #[test]
    fn test_space_is_blank() {
        assert_eq!(glyph_8x8(b' '), Some(&[0u8; 8]));
        assert_eq!(glyph_12x12(b' '), Some(&[0u16; 12]));
    }

    #[test]
    fn test_digit_zero_columns() {
        assert_eq!(
            glyph_8x8(b'0'),
            Some(&[0x3E, 0x7F, 0x71, 0x59, 0x4D, 0x7F, 0x3E, 0x00])
        );
    }

    #[test]
    fn test_12x12_uses_twelve_rows() {
        for glyph in &FONT_12X12 {
            for column in glyph {
                assert_eq!(column & !0x0FFF, 0);
            }
        }
    }

    #[test]
    fn test_every_printable_glyph_has_ink() {
        for ascii in b'!'..=LAST_CHAR {
            assert!(glyph_8x8(ascii).is_some_and(|glyph| glyph.iter().any(|col| *col != 0)));
            assert!(glyph_12x12(ascii).is_some_and(|glyph| glyph.iter().any(|col| *col != 0)));
        }
    }

    #[test]
    fn test_validate_reports_first_bad_byte() {
        assert_eq!(validate("abc XYZ 123"), Ok(()));
        assert_eq!(validate("a{b}"), Err(b'{'));
        assert_eq!(validate(""), Ok(()));
    }
}
