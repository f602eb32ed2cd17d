//! Character LCD port - everything the shell and demos draw through.
//!
//! ## Components
//!
//! - **CharDisplay**: the text/glyph primitive every renderer targets
//! - **Hd44780**: 4-bit GPIO driver for the 16×2 module on the board
//! - **Glyphs**: the custom 5×8 characters loaded at startup

pub mod hd44780;

#[cfg(test)]
pub(crate) mod fake;

use crate::config::DISPLAY_COLS;
use crate::error::Error;

pub use hd44780::Hd44780;

/// One custom 5×8 character, top row first, low five bits used.
pub type Glyph = [u8; 8];

/// Chevron low in the cell (first animation frame).
pub const GLYPH_CHEVRON_LOW: u8 = 0;
/// Chevron mid-cell.
pub const GLYPH_CHEVRON_MID: u8 = 1;
/// Chevron at the top of the cell.
pub const GLYPH_CHEVRON_HIGH: u8 = 2;
/// Menu selection marker.
pub const GLYPH_CURSOR: u8 = 3;

/// Built-in "full block" character of the HD44780 ROM.
pub const CHAR_BLOCK: u8 = 0xFF;

const CHEVRON_LOW: Glyph = [
    0b00000, 0b00000, 0b00000, 0b00000, 0b00000, 0b00100, 0b01010, 0b10001,
];

const CHEVRON_MID: Glyph = [
    0b00000, 0b00000, 0b00100, 0b01010, 0b10001, 0b00000, 0b00000, 0b00000,
];

const CHEVRON_HIGH: Glyph = [
    0b00100, 0b01010, 0b10001, 0b00000, 0b00000, 0b00000, 0b00000, 0b00000,
];

const CURSOR: Glyph = [
    0b00000, 0b01000, 0b01100, 0b01110, 0b01100, 0b01000, 0b00000, 0b00000,
];

/// Slot → bitmap table registered by [`load_glyphs`].
pub const GLYPHS: [(u8, &Glyph); 4] = [
    (GLYPH_CHEVRON_LOW, &CHEVRON_LOW),
    (GLYPH_CHEVRON_MID, &CHEVRON_MID),
    (GLYPH_CHEVRON_HIGH, &CHEVRON_HIGH),
    (GLYPH_CURSOR, &CURSOR),
];

/// Blocking character display.
///
/// All calls are assumed to succeed. Character codes 0-7 print the custom
/// glyphs registered with [`define_glyph`](CharDisplay::define_glyph).
pub trait CharDisplay {
    /// Print one character at the cursor and advance it.
    fn write_char(&mut self, c: u8);

    /// Place the cursor at `row`, `col` (both zero-based).
    fn move_cursor(&mut self, row: u8, col: u8);

    /// Blank the whole screen and home the cursor.
    fn clear(&mut self);

    /// Register a custom glyph in slot `index` (0-7).
    ///
    /// The cursor position is undefined afterwards; callers move it.
    fn define_glyph(&mut self, index: u8, bitmap: &Glyph);

    /// Print a string, continuing on row 1 once a full row has been written.
    fn write_text(&mut self, text: &str) {
        for (i, b) in text.bytes().enumerate() {
            if i == DISPLAY_COLS as usize {
                self.move_cursor(1, 0);
            }
            self.write_char(b);
        }
    }
}

/// Blank `row` from `col` to the right edge.
pub fn clear_from<D: CharDisplay + ?Sized>(display: &mut D, row: u8, col: u8) {
    display.move_cursor(row, col);
    for _ in col..DISPLAY_COLS {
        display.write_char(b' ');
    }
}

/// Replace the contents of `row` with `text`, padding with blanks.
pub fn write_line<D: CharDisplay + ?Sized>(display: &mut D, row: u8, text: &str) {
    let len = text.len().min(DISPLAY_COLS as usize);
    display.move_cursor(row, 0);
    display.write_text(text.get(..len).unwrap_or(text));
    clear_from(display, row, len as u8);
}

/// Register every custom glyph the firmware uses.
pub fn load_glyphs<D: CharDisplay + ?Sized>(display: &mut D) {
    for (index, bitmap) in GLYPHS {
        display.define_glyph(index, bitmap);
    }
    display.move_cursor(0, 0);
}

/// Full-screen error report for configuration failures.
pub fn show_error<D: CharDisplay + ?Sized>(display: &mut D, err: &Error) {
    display.clear();
    write_line(display, 0, "ERROR");
    write_line(display, 1, err.message());
}
