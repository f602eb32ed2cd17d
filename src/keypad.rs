//! 4×4 matrix keypad scanner.
//!
//! Columns are outputs idling high, rows are inputs with pull-ups. A
//! column is selected by driving it low; a pressed key then pulls its row
//! low. The first hit in column order wins, so at most one key is reported
//! per scan.

use embedded_hal::delay::DelayNs;
use embedded_hal::digital::{InputPin, OutputPin};

use crate::config::KEYPAD_SETTLE_US;
use crate::keys::{KeySource, KEY_NONE};

/// Scanner over four column outputs and four row inputs.
pub struct MatrixKeypad<O, I, D> {
    cols: [O; 4],
    rows: [I; 4],
    delay: D,
}

impl<O, I, D> MatrixKeypad<O, I, D>
where
    O: OutputPin,
    I: InputPin,
    D: DelayNs,
{
    pub fn new(mut cols: [O; 4], rows: [I; 4], delay: D) -> Self {
        for col in cols.iter_mut() {
            let _ = col.set_high();
        }
        Self { cols, rows, delay }
    }

    /// Scan once; returns `row * 4 + col + 1`, or 0 when nothing is pressed.
    pub fn scan(&mut self) -> u8 {
        for c in 0..self.cols.len() {
            let _ = self.cols[c].set_low();
            self.delay.delay_us(KEYPAD_SETTLE_US);

            let hit = self
                .rows
                .iter_mut()
                .position(|row| row.is_low().unwrap_or(false));

            let _ = self.cols[c].set_high();

            if let Some(r) = hit {
                return (r * 4 + c + 1) as u8;
            }
        }
        KEY_NONE
    }
}

impl<O, I, D> KeySource for MatrixKeypad<O, I, D>
where
    O: OutputPin,
    I: InputPin,
    D: DelayNs,
{
    fn sample(&mut self) -> u8 {
        self.scan()
    }
}
