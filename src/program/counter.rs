//! Button counter - counts presses, "0" resets.

use core::fmt::Write;

use heapless::String;

use super::Lifecycle;
use crate::keys::{digit, key_name};
use crate::lcd::{self, CharDisplay};

pub struct ButtonCounter {
    count: u32,
}

impl ButtonCounter {
    pub const fn new() -> Self {
        Self { count: 0 }
    }

    pub fn count(&self) -> u32 {
        self.count
    }

    fn draw_count(&self, display: &mut dyn CharDisplay) {
        let mut line: String<16> = String::new();
        let _ = write!(line, "Presses: {}", self.count);
        lcd::write_line(display, 0, &line);
    }
}

impl Default for ButtonCounter {
    fn default() -> Self {
        Self::new()
    }
}

impl Lifecycle for ButtonCounter {
    fn on_start(&mut self, display: &mut dyn CharDisplay) {
        self.count = 0;
        display.clear();
        self.draw_count(display);
        lcd::write_line(display, 1, "0 resets");
    }

    fn on_stop(&mut self, _display: &mut dyn CharDisplay) {}

    fn on_key(&mut self, display: &mut dyn CharDisplay, code: u8) {
        if digit(code) == Some(0) {
            self.count = 0;
        } else {
            self.count = self.count.saturating_add(1);
        }
        self.draw_count(display);

        let mut line: String<16> = String::new();
        let _ = write!(line, "Last: {}", key_name(code).unwrap_or("?"));
        lcd::write_line(display, 1, &line);
    }

    fn on_tick(&mut self, _display: &mut dyn CharDisplay) {}
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::keys::{KEY_DOWN, KEY_ENTER};
    use crate::lcd::fake::FakeDisplay;

    #[test]
    fn counts_every_press() {
        let mut c = ButtonCounter::new();
        let mut lcd = FakeDisplay::new();
        c.on_start(&mut lcd);
        assert_eq!(lcd.row(0), "Presses: 0      ");

        for code in [1, KEY_DOWN, KEY_ENTER] {
            c.on_key(&mut lcd, code);
        }
        assert_eq!(c.count(), 3);
        assert_eq!(lcd.row(0), "Presses: 3      ");
        assert_eq!(lcd.row(1), "Last: Enter     ");
    }

    #[test]
    fn zero_key_resets() {
        let mut c = ButtonCounter::new();
        let mut lcd = FakeDisplay::new();
        c.on_start(&mut lcd);
        c.on_key(&mut lcd, 2);
        c.on_key(&mut lcd, 14);
        assert_eq!(c.count(), 0);
        assert_eq!(lcd.row(1), "Last: 0         ");
    }

    #[test]
    fn start_resets_but_stop_keeps_state() {
        let mut c = ButtonCounter::new();
        let mut lcd = FakeDisplay::new();
        c.on_start(&mut lcd);
        c.on_key(&mut lcd, 5);
        c.on_stop(&mut lcd);
        assert_eq!(c.count(), 1);
        c.on_start(&mut lcd);
        assert_eq!(c.count(), 0);
    }
}
