//! Keypad codes and the press-event filter.
//!
//! Raw codes come from a 4×4 matrix scanned row-major:
//! ```text
//!          col0   col1   col2   col3
//! row0  :   1      2      3      Up
//! row1  :   4      5      6      Down
//! row2  :   7      8      9      Right
//! row3  :  Clear   0     Enter   Left
//! ```
//! `code = row * 4 + col + 1`, with 0 meaning "no key held".

/// No key is held.
pub const KEY_NONE: u8 = 0;

/// Highest valid raw key code.
pub const KEY_MAX: u8 = 16;

pub const KEY_UP: u8 = 4;
pub const KEY_DOWN: u8 = 8;
pub const KEY_RIGHT: u8 = 12;
pub const KEY_CLEAR: u8 = 13;
pub const KEY_ENTER: u8 = 15;
pub const KEY_LEFT: u8 = 16;

static LEGEND: [&str; KEY_MAX as usize] = [
    "1", "2", "3", "Up", //
    "4", "5", "6", "Down", //
    "7", "8", "9", "Right", //
    "Clear", "0", "Enter", "Left",
];

/// Printed legend of a key, `None` for 0 or out-of-range codes.
pub fn key_name(code: u8) -> Option<&'static str> {
    match code {
        1..=KEY_MAX => Some(LEGEND[code as usize - 1]),
        _ => None,
    }
}

/// Numeric value of a digit key.
pub fn digit(code: u8) -> Option<u8> {
    match key_name(code)?.as_bytes() {
        [d @ b'0'..=b'9'] => Some(d - b'0'),
        _ => None,
    }
}

/// Anything that can report which key is currently held.
///
/// Called once per tick; returns 0 when nothing is pressed.
pub trait KeySource {
    fn sample(&mut self) -> u8;
}

/// Edge detector turning continuous samples into press events.
///
/// Only "some key is held" is tracked, so sliding from one key to another
/// without an idle sample in between yields no second event.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct KeyFilter {
    held: bool,
}

impl KeyFilter {
    pub const fn new() -> Self {
        Self { held: false }
    }

    /// Feed one raw sample; returns the code on the unheld → held edge.
    ///
    /// Codes above [`KEY_MAX`] are treated like [`KEY_NONE`].
    pub fn sample(&mut self, raw: u8) -> Option<u8> {
        let pressed = (1..=KEY_MAX).contains(&raw);
        match (pressed, self.held) {
            (true, false) => {
                self.held = true;
                trace!("press {=u8}", raw);
                Some(raw)
            }
            (false, true) => {
                self.held = false;
                None
            }
            _ => None,
        }
    }

    pub fn is_held(&self) -> bool {
        self.held
    }
}
