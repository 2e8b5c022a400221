//! Scrolling text as a lazy sequence of frames
//!
//! Both boards scroll text one pixel column per frame through a shift
//! buffer: the buffer is shifted left by one element after each frame and
//! the vacated tail element is zero filled. The engines are iterators that
//! yield the render window for each frame; they never touch hardware, so
//! callers decide how frames are pushed and how long to wait between them.
//!
//! Each engine runs the same three-phase state machine:
//!
//! - **Loading**: append the next character's columns to the buffer.
//! - **Rendering**: yield the window, then shift, once per loaded column.
//! - **Draining**: once the text is exhausted, keep yielding and shifting
//!   for one buffer length until everything has scrolled off.
//!
//! The sequence is finite and not restartable.
//!
//! ## Example
//!
//! ```
//! use click_matrix::scroll::GlyphScroll;
//!
//! // 8 frames per character plus 10 to drain the buffer
//! assert_eq!(GlyphScroll::new("Hi").count(), 2 * 8 + 10);
//!
//! // The last frame is always blank
//! assert_eq!(GlyphScroll::new("Hi").last(), Some([0u8; 10]));
//! ```

use crate::font::{glyph_8x8, glyph_12x12};

/// Width of the 10x10 shift buffer: 2 lead-in columns and one glyph
pub const GLYPH_BUFFER_LEN: usize = 10;

/// Lead-in columns in front of each 8x8 glyph
const GLYPH_LEAD_IN: usize = GLYPH_BUFFER_LEN - 8;

/// Visible columns of the 16x12 shift buffer
pub const SPARSE_WINDOW_LEN: usize = 12;

/// Width of the 16x12 shift buffer: the visible window plus a staging area
/// of the same size
pub const SPARSE_BUFFER_LEN: usize = 2 * SPARSE_WINDOW_LEN;

/// Shift a buffer one element to the left and zero the tail
pub fn shift_left<T: Copy + Default>(buffer: &mut [T]) {
    if buffer.is_empty() {
        return;
    }
    buffer.copy_within(1.., 0);
    if let Some(last) = buffer.last_mut() {
        *last = T::default();
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Phase {
    Loading,
    Rendering { remaining: usize },
    Draining { remaining: usize },
    Done,
}

/// Scroll engine for the 10x10 RGB board
///
/// Every character's 8 glyph columns are loaded behind a 2-column lead-in,
/// then the buffer is rendered and shifted 8 times. Blank glyph columns are
/// kept. Characters without a glyph scroll as blanks; validate the text
/// first with [`validate`](crate::font::validate) to reject them instead.
#[derive(Clone, Debug)]
pub struct GlyphScroll<'a> {
    text: core::str::Bytes<'a>,
    buffer: [u8; GLYPH_BUFFER_LEN],
    phase: Phase,
}

impl<'a> GlyphScroll<'a> {
    /// Start scrolling `text`
    pub fn new(text: &'a str) -> Self {
        Self {
            text: text.bytes(),
            buffer: [0; GLYPH_BUFFER_LEN],
            phase: Phase::Loading,
        }
    }

    /// Current contents of the shift buffer
    pub fn buffer(&self) -> &[u8; GLYPH_BUFFER_LEN] {
        &self.buffer
    }
}

impl Iterator for GlyphScroll<'_> {
    type Item = [u8; GLYPH_BUFFER_LEN];

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            match self.phase {
                Phase::Loading => match self.text.next() {
                    Some(ascii) => {
                        let glyph = glyph_8x8(ascii).copied().unwrap_or_default();
                        self.buffer[GLYPH_LEAD_IN..].copy_from_slice(&glyph);
                        self.phase = Phase::Rendering {
                            remaining: glyph.len(),
                        };
                    }
                    None => {
                        self.phase = Phase::Draining {
                            remaining: GLYPH_BUFFER_LEN,
                        };
                    }
                },
                Phase::Rendering { remaining: 0 } => self.phase = Phase::Loading,
                Phase::Rendering { remaining } => {
                    let frame = self.buffer;
                    shift_left(&mut self.buffer);
                    self.phase = Phase::Rendering {
                        remaining: remaining - 1,
                    };
                    return Some(frame);
                }
                Phase::Draining { remaining: 0 } => self.phase = Phase::Done,
                Phase::Draining { remaining } => {
                    let frame = self.buffer;
                    shift_left(&mut self.buffer);
                    self.phase = Phase::Draining {
                        remaining: remaining - 1,
                    };
                    return Some(frame);
                }
                Phase::Done => return None,
            }
        }
    }
}

impl core::iter::FusedIterator for GlyphScroll<'_> {}

/// Scroll engine for the 16x12 R board
///
/// Glyph columns that are entirely blank are skipped, and one blank column
/// is appended after each character, which packs proportional text tightly.
/// Non-blank columns are staged behind the visible window; whenever 12 are
/// staged the buffer is rendered and shifted 12 times. Columns still staged
/// when the text ends get one final 12-frame cycle before the 24-frame drain.
#[derive(Clone, Debug)]
pub struct SparseScroll<'a> {
    text: core::str::Bytes<'a>,
    glyph: Option<&'static [u16; 12]>,
    column: usize,
    staged: usize,
    buffer: [u16; SPARSE_BUFFER_LEN],
    phase: Phase,
}

const BLANK_GLYPH_12X12: [u16; 12] = [0; 12];

impl<'a> SparseScroll<'a> {
    /// Start scrolling `text`
    pub fn new(text: &'a str) -> Self {
        Self {
            text: text.bytes(),
            glyph: None,
            column: 0,
            staged: 0,
            buffer: [0; SPARSE_BUFFER_LEN],
            phase: Phase::Loading,
        }
    }

    /// Current contents of the shift buffer
    pub fn buffer(&self) -> &[u16; SPARSE_BUFFER_LEN] {
        &self.buffer
    }

    /// Stage one column; true once the staging area is full
    fn stage(&mut self, column: u16) -> bool {
        self.buffer[SPARSE_WINDOW_LEN + self.staged] = column;
        self.staged += 1;
        self.staged == SPARSE_WINDOW_LEN
    }

    fn window(&self) -> [u16; SPARSE_WINDOW_LEN] {
        let mut window = [0; SPARSE_WINDOW_LEN];
        window.copy_from_slice(&self.buffer[..SPARSE_WINDOW_LEN]);
        window
    }

    /// Advance the loading phase; true when a render cycle must start
    fn load(&mut self) -> bool {
        let Some(glyph) = self.glyph else {
            match self.text.next() {
                Some(ascii) => {
                    self.glyph = Some(glyph_12x12(ascii).unwrap_or(&BLANK_GLYPH_12X12));
                    self.column = 0;
                }
                None if self.staged > 0 => return true,
                None => {
                    self.phase = Phase::Draining {
                        remaining: SPARSE_BUFFER_LEN,
                    };
                }
            }
            return false;
        };

        while let Some(&column) = glyph.get(self.column) {
            self.column += 1;
            if column != 0 && self.stage(column) {
                return true;
            }
        }

        // Glyph exhausted: one blank column as the gap to the next character
        self.glyph = None;
        self.stage(0)
    }
}

impl Iterator for SparseScroll<'_> {
    type Item = [u16; SPARSE_WINDOW_LEN];

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            match self.phase {
                Phase::Loading => {
                    if self.load() {
                        self.phase = Phase::Rendering {
                            remaining: SPARSE_WINDOW_LEN,
                        };
                    }
                }
                Phase::Rendering { remaining: 0 } => {
                    self.staged = 0;
                    self.phase = Phase::Loading;
                }
                Phase::Rendering { remaining } => {
                    let frame = self.window();
                    shift_left(&mut self.buffer);
                    self.phase = Phase::Rendering {
                        remaining: remaining - 1,
                    };
                    return Some(frame);
                }
                Phase::Draining { remaining: 0 } => self.phase = Phase::Done,
                Phase::Draining { remaining } => {
                    let frame = self.window();
                    shift_left(&mut self.buffer);
                    self.phase = Phase::Draining {
                        remaining: remaining - 1,
                    };
                    return Some(frame);
                }
                Phase::Done => return None,
            }
        }
    }
}

impl core::iter::FusedIterator for SparseScroll<'_> {}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::font::{FONT_8X8, FONT_12X12};
    use alloc::vec::Vec;

    #[test]
    fn test_shift_left_zero_fills() {
        let mut buffer = [1u8, 2, 3, 4];
        shift_left(&mut buffer);
        assert_eq!(buffer, [2, 3, 4, 0]);
        let mut empty: [u8; 0] = [];
        shift_left(&mut empty);
    }

    #[test]
    fn test_glyph_scroll_frame_count() {
        assert_eq!(GlyphScroll::new("A").count(), 8 + 10);
        assert_eq!(GlyphScroll::new("ABC").count(), 3 * 8 + 10);
        assert_eq!(GlyphScroll::new("").count(), 10);
    }

    #[test]
    fn test_glyph_scroll_first_frame_shows_lead_in_and_glyph() {
        let glyph = FONT_8X8[usize::from(b'A' - b' ')];
        let first = GlyphScroll::new("A").next().unwrap();
        assert_eq!(&first[..2], &[0, 0]);
        assert_eq!(&first[2..], &glyph);
    }

    #[test]
    fn test_glyph_scroll_moves_one_column_per_frame() {
        let frames: Vec<_> = GlyphScroll::new("A").collect();
        for pair in frames.windows(2) {
            assert_eq!(pair[0][1..], pair[1][..9]);
            assert_eq!(pair[1][9], 0);
        }
    }

    #[test]
    fn test_glyph_scroll_drains_to_blank() {
        let mut scroll = GlyphScroll::new("W");
        let last = scroll.by_ref().last().unwrap();
        assert_eq!(last, [0; GLYPH_BUFFER_LEN]);
        assert_eq!(scroll.buffer(), &[0; GLYPH_BUFFER_LEN]);
        assert_eq!(scroll.next(), None);
    }

    #[test]
    fn test_glyph_scroll_keeps_second_glyph_behind_first() {
        let frames: Vec<_> = GlyphScroll::new("AB").collect();
        let a = FONT_8X8[usize::from(b'A' - b' ')];
        let b = FONT_8X8[usize::from(b'B' - b' ')];
        // After 8 shifts the last two columns of 'A' remain as lead-in
        assert_eq!(&frames[8][..2], &a[6..]);
        assert_eq!(&frames[8][2..], &b);
    }

    #[test]
    fn test_sparse_scroll_frame_count_single_char() {
        assert_eq!(SparseScroll::new("A").count(), 12 + 24);
    }

    #[test]
    fn test_sparse_scroll_empty_text_only_drains() {
        assert_eq!(SparseScroll::new("").count(), 24);
    }

    #[test]
    fn test_sparse_scroll_skips_blank_columns() {
        let glyph = FONT_12X12[usize::from(b'!' - b' ')];
        let ink: Vec<u16> = glyph.iter().copied().filter(|col| *col != 0).collect();
        let frames: Vec<_> = SparseScroll::new("!").collect();
        // First frame of the drain shows the staged, stripped glyph
        let shown = frames[12];
        assert_eq!(&shown[..ink.len()], ink.as_slice());
        assert!(shown[ink.len()..].iter().all(|col| *col == 0));
    }

    #[test]
    fn test_sparse_scroll_renders_when_staging_fills() {
        // 'W' + gap + 'W' + gap exceeds 12 staged columns
        let w = FONT_12X12[usize::from(b'W' - b' ')];
        let per_char = w.iter().filter(|col| **col != 0).count() + 1;
        assert!(2 * per_char > SPARSE_WINDOW_LEN);
        let frames = SparseScroll::new("WW").count();
        assert_eq!(frames, 2 * SPARSE_WINDOW_LEN + SPARSE_BUFFER_LEN);
    }

    #[test]
    fn test_sparse_scroll_drains_to_blank() {
        let mut scroll = SparseScroll::new("Hello");
        let last = scroll.by_ref().last().unwrap();
        assert_eq!(last, [0; SPARSE_WINDOW_LEN]);
        assert_eq!(scroll.buffer(), &[0; SPARSE_BUFFER_LEN]);
    }

    #[test]
    fn test_space_collapses_to_gap() {
        // A space has no ink, so it contributes only its gap column
        let frames: Vec<_> = SparseScroll::new(" ").collect();
        assert_eq!(frames.len(), 12 + 24);
        assert!(frames.iter().all(|frame| frame.iter().all(|col| *col == 0)));
    }
}
