//! HD44780 16×2 character LCD on a 4-bit GPIO bus.
//!
//! Wiring: RS (register select), EN (strobe) and D4..D7. R/W is tied to
//! ground, so the busy flag is never read; every transfer is followed by
//! a fixed settle time instead:
//!
//! ```text
//! command byte : RS=0, high nibble, low nibble, 50 µs, 5 ms
//! data byte    : RS=1, high nibble, low nibble, 50 µs
//! ```

use embedded_hal::delay::DelayNs;
use embedded_hal::digital::OutputPin;

use super::{CharDisplay, Glyph};
use crate::config::{
    DISPLAY_ROWS, LCD_COMMAND_SETTLE_MS, LCD_DATA_SETTLE_US, LCD_ENABLE_PULSE_US,
    LCD_POWER_ON_DELAY_MS,
};

const CMD_CLEAR: u8 = 0x01;
const CMD_SET_CGRAM: u8 = 0x40;
const CMD_SET_DDRAM: u8 = 0x80;

/// DDRAM offset of the second row.
const ROW_STRIDE: u8 = 0x40;

/// Power-up configuration, sent in order.
const INIT_SEQUENCE: [u8; 4] = [
    0x02,        // return home, switches the bus to 4-bit
    0b0010_1000, // function set: 4-bit, 2 lines, 5x8 font
    0b0000_0110, // entry mode: increment, no display shift
    0b0000_1100, // display on, cursor hidden, no blink
];

/// 4-bit HD44780 driver.
///
/// Generic over the HAL's output pin and a blocking delay so it runs
/// unchanged on the nRF52840 and against recording fakes in tests.
pub struct Hd44780<O, D> {
    rs: O,
    en: O,
    data: [O; 4],
    delay: D,
}

impl<O, D> Hd44780<O, D>
where
    O: OutputPin,
    D: DelayNs,
{
    /// Wrap the bus pins; `data` is D4, D5, D6, D7 in that order.
    pub fn new(rs: O, en: O, data: [O; 4], delay: D) -> Self {
        Self { rs, en, data, delay }
    }

    /// Run the power-up sequence and blank the screen.
    pub fn init(&mut self) {
        let _ = self.en.set_low();
        self.delay.delay_ms(LCD_POWER_ON_DELAY_MS);

        for cmd in INIT_SEQUENCE {
            self.command(cmd);
        }
        self.clear();
    }

    /// Hand the pins and delay back.
    pub fn release(self) -> (O, O, [O; 4], D) {
        (self.rs, self.en, self.data, self.delay)
    }

    fn command(&mut self, cmd: u8) {
        let _ = self.rs.set_low();
        self.send(cmd);
        let _ = self.rs.set_high();
        self.delay.delay_ms(LCD_COMMAND_SETTLE_MS);
    }

    fn send(&mut self, byte: u8) {
        self.send_nibble(byte >> 4);
        self.send_nibble(byte & 0x0F);
        self.delay.delay_us(LCD_DATA_SETTLE_US);
    }

    fn send_nibble(&mut self, nibble: u8) {
        for (bit, pin) in self.data.iter_mut().enumerate() {
            let _ = if nibble & (1 << bit) != 0 {
                pin.set_high()
            } else {
                pin.set_low()
            };
        }
        // Latched on the falling edge of EN.
        let _ = self.en.set_high();
        self.delay.delay_us(LCD_ENABLE_PULSE_US);
        let _ = self.en.set_low();
    }
}

impl<O, D> CharDisplay for Hd44780<O, D>
where
    O: OutputPin,
    D: DelayNs,
{
    fn write_char(&mut self, c: u8) {
        let _ = self.rs.set_high();
        self.send(c);
    }

    fn move_cursor(&mut self, row: u8, col: u8) {
        let row = row.min(DISPLAY_ROWS - 1);
        self.command(CMD_SET_DDRAM | (row * ROW_STRIDE + col.min(ROW_STRIDE - 1)));
    }

    fn clear(&mut self) {
        self.command(CMD_CLEAR);
    }

    fn define_glyph(&mut self, index: u8, bitmap: &Glyph) {
        self.command(CMD_SET_CGRAM + (index & 0x07) * 8);
        for &line in bitmap {
            self.write_char(line);
        }
        // Back to DDRAM so the next character lands on screen.
        self.command(CMD_SET_DDRAM);
    }
}
