//! In-memory display used by the unit tests.

use super::{CharDisplay, Glyph};
use crate::config::{DISPLAY_COLS, DISPLAY_ROWS};

const COLS: usize = DISPLAY_COLS as usize;
const ROWS: usize = DISPLAY_ROWS as usize;

/// 2×16 character grid. Writes past the right edge are dropped, the way
/// they land in invisible DDRAM on the real module.
pub struct FakeDisplay {
    cells: [[u8; COLS]; ROWS],
    row: usize,
    col: usize,
    glyphs: [Option<Glyph>; 8],
    pub clears: usize,
    pub writes: usize,
}

impl FakeDisplay {
    pub fn new() -> Self {
        Self {
            cells: [[b' '; COLS]; ROWS],
            row: 0,
            col: 0,
            glyphs: [None; 8],
            clears: 0,
            writes: 0,
        }
    }

    /// Row contents with glyph slots shown as `^` (chevrons) and `>` (cursor).
    pub fn row(&self, row: usize) -> String {
        self.cells[row]
            .iter()
            .map(|&c| match c {
                0..=2 => '^',
                3 => '>',
                0xFF => '#',
                c => c as char,
            })
            .collect()
    }

    pub fn cell(&self, row: usize, col: usize) -> u8 {
        self.cells[row][col]
    }

    pub fn glyph(&self, index: u8) -> Option<Glyph> {
        self.glyphs[index as usize]
    }
}

impl CharDisplay for FakeDisplay {
    fn write_char(&mut self, c: u8) {
        self.writes += 1;
        if self.row < ROWS && self.col < COLS {
            self.cells[self.row][self.col] = c;
        }
        self.col += 1;
    }

    fn move_cursor(&mut self, row: u8, col: u8) {
        self.row = row as usize;
        self.col = col as usize;
    }

    fn clear(&mut self) {
        self.clears += 1;
        self.cells = [[b' '; COLS]; ROWS];
        self.row = 0;
        self.col = 0;
    }

    fn define_glyph(&mut self, index: u8, bitmap: &Glyph) {
        self.glyphs[index as usize & 7] = Some(*bitmap);
    }
}
