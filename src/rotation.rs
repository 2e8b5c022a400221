//! Glyph-to-LED coordinate transforms
//!
//! A render window is a run of column values: byte (or word) `x` is one
//! glyph column, bit `y` of it is one glyph row. [`Geometry::led_index`]
//! maps such a `(byte, bit)` position to the physical LED it lights:
//!
//! 1. [`Geometry::invert_byte_pos`] and [`Geometry::invert_bit_pos`] mirror
//!    the column and row where the rotation asks for it.
//! 2. [`Geometry::get_led_num`] exchanges the axes for the horizontal
//!    rotations.
//! 3. [`Geometry::offset`] shifts the result to cover the unused matrix
//!    rows or columns (an 8-row glyph on a 10-row matrix, a 12-column glyph
//!    on a 16-column matrix).
//!
//! The two boards are wired differently, so they mirror different axes for
//! the same [`Rotation`]:
//!
//! | Board | bit kept for | byte kept for | offsets V0/V180/H0/H180 |
//! |-------|--------------|---------------|-------------------------|
//! | 10x10 | V0, H180     | V0, H0        | 0 / 20 / 2 / 0          |
//! | 16x12 | V0, H0       | V0, H180      | 2 / 2 / 2 / 2           |
//!
//! ## Example
//!
//! ```
//! use click_matrix::rotation::RGB_10X10;
//! use click_matrix::Rotation;
//!
//! // Native orientation: column 3, row 2 is LED 10 * 2 + 3
//! assert_eq!(RGB_10X10.led_index(Rotation::Vertical0, 3, 2), 23);
//!
//! // Point reflection lands on the opposite corner of the matrix
//! assert_eq!(RGB_10X10.led_index(Rotation::Vertical180, 0, 0), 99);
//! ```

use crate::config::Rotation;

/// Matrix wiring and glyph placement of one board
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Geometry {
    /// LEDs per physical matrix row
    pub row_len: usize,
    /// Total LEDs on the matrix
    pub led_count: usize,
    /// Column values in one render window
    pub window_width: usize,
    /// Rows (bits) used from each column value
    pub glyph_height: usize,
    /// Rotations that keep the bit position as is
    pub bit_identity: [Rotation; 2],
    /// Rotations that keep the byte position as is
    pub byte_identity: [Rotation; 2],
    /// LED offset per rotation, indexed like [`Rotation::ALL`]
    pub offsets: [usize; 4],
}

/// 10x10 RGB board: 10-column window of 8-row glyph columns
pub const RGB_10X10: Geometry = Geometry {
    row_len: 10,
    led_count: 100,
    window_width: 10,
    glyph_height: 8,
    bit_identity: [Rotation::Vertical0, Rotation::Horizontal180],
    byte_identity: [Rotation::Vertical0, Rotation::Horizontal0],
    offsets: [0, 20, 2, 0],
};

/// 16x12 R board: 12-column window of 12-row glyph columns
pub const RED_16X12: Geometry = Geometry {
    row_len: 16,
    led_count: 192,
    window_width: 12,
    glyph_height: 12,
    bit_identity: [Rotation::Vertical0, Rotation::Horizontal0],
    byte_identity: [Rotation::Vertical0, Rotation::Horizontal180],
    offsets: [2, 2, 2, 2],
};

impl Geometry {
    /// Mirror a bit (row) position unless `rotation` keeps it
    ///
    /// Only the two rotations in `bit_identity` are tested; every other
    /// value takes the mirrored branch.
    pub fn invert_bit_pos(&self, rotation: Rotation, bit: usize) -> usize {
        if self.bit_identity.contains(&rotation) {
            bit
        } else {
            self.glyph_height - 1 - bit
        }
    }

    /// Mirror a byte (column) position within the window unless `rotation`
    /// keeps it
    pub fn invert_byte_pos(&self, rotation: Rotation, byte: usize) -> usize {
        if self.byte_identity.contains(&rotation) {
            byte
        } else {
            self.window_width - 1 - byte
        }
    }

    /// Exchange axes for the horizontal rotations
    ///
    /// Horizontal: `row_len * x + y`. Vertical: `row_len * y + x`.
    pub fn get_led_num(&self, rotation: Rotation, x: usize, y: usize) -> usize {
        if rotation.is_horizontal() {
            self.row_len * x + y
        } else {
            self.row_len * y + x
        }
    }

    /// Constant LED shift for `rotation`
    pub fn offset(&self, rotation: Rotation) -> usize {
        self.offsets[rotation as usize]
    }

    /// Physical LED lit by window column `byte`, row `bit`
    ///
    /// No bounds checking: callers stay within `window_width` x
    /// `glyph_height`.
    pub fn led_index(&self, rotation: Rotation, byte: usize, bit: usize) -> usize {
        let x = self.invert_byte_pos(rotation, byte);
        let y = self.invert_bit_pos(rotation, bit);
        self.get_led_num(rotation, x, y) + self.offset(rotation)
    }

    /// Visit every lit `(byte, bit)` of a window and yield its LED index
    pub fn for_each_lit<T, F>(&self, rotation: Rotation, window: &[T], mut f: F)
    where
        T: Copy + Into<u16>,
        F: FnMut(usize),
    {
        for (byte, column) in window.iter().take(self.window_width).enumerate() {
            let column: u16 = (*column).into();
            for bit in 0..self.glyph_height {
                if column & (1 << bit) != 0 {
                    f(self.led_index(rotation, byte, bit));
                }
            }
        }
    }
}
