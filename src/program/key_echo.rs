//! Key echo - prints the legend of every key pressed.

use super::Lifecycle;
use crate::config::ECHO_ANIM_PERIOD_MS;
use crate::keys::key_name;
use crate::lcd::{self, CharDisplay, GLYPH_CHEVRON_LOW};
use crate::timer::TickPeriod;

const FRAMES: u8 = 3;

pub struct KeyEcho {
    frame: u8,
    ticks: u32,
    frame_ticks: u32,
}

impl KeyEcho {
    pub fn new(tick: TickPeriod) -> Self {
        Self {
            frame: 0,
            ticks: 0,
            frame_ticks: tick.ticks_for_millis(ECHO_ANIM_PERIOD_MS),
        }
    }

    fn draw_frame(&self, display: &mut dyn CharDisplay) {
        display.move_cursor(0, 0);
        display.write_char(GLYPH_CHEVRON_LOW + self.frame);
    }
}

impl Lifecycle for KeyEcho {
    fn on_start(&mut self, display: &mut dyn CharDisplay) {
        self.frame = 0;
        self.ticks = 0;
        display.clear();
        display.move_cursor(0, 2);
        display.write_text("Key echo");
        self.draw_frame(display);
        lcd::write_line(display, 1, "Press a key");
    }

    fn on_stop(&mut self, _display: &mut dyn CharDisplay) {}

    fn on_key(&mut self, display: &mut dyn CharDisplay, code: u8) {
        lcd::write_line(display, 1, key_name(code).unwrap_or("?"));
    }

    fn on_tick(&mut self, display: &mut dyn CharDisplay) {
        self.ticks += 1;
        if self.ticks >= self.frame_ticks {
            self.ticks = 0;
            self.frame = (self.frame + 1) % FRAMES;
            self.draw_frame(display);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::keys::{KEY_ENTER, KEY_UP};
    use crate::lcd::fake::FakeDisplay;
    use crate::lcd::{GLYPH_CHEVRON_HIGH, GLYPH_CHEVRON_MID};

    fn started(period_ms: f32) -> (KeyEcho, FakeDisplay) {
        let tick = TickPeriod::from_secs(period_ms / 1000.0).unwrap();
        let mut echo = KeyEcho::new(tick);
        let mut lcd = FakeDisplay::new();
        echo.on_start(&mut lcd);
        (echo, lcd)
    }

    #[test]
    fn start_shows_title_and_hint() {
        let (_, lcd) = started(10.0);
        assert_eq!(lcd.row(0), "^ Key echo      ");
        assert_eq!(lcd.row(1), "Press a key     ");
        assert_eq!(lcd.cell(0, 0), GLYPH_CHEVRON_LOW);
    }

    #[test]
    fn keys_replace_the_second_row() {
        let (mut echo, mut lcd) = started(10.0);
        echo.on_key(&mut lcd, KEY_ENTER);
        assert_eq!(lcd.row(1), "Enter           ");
        echo.on_key(&mut lcd, KEY_UP);
        assert_eq!(lcd.row(1), "Up              ");
        echo.on_key(&mut lcd, 14);
        assert_eq!(lcd.row(1), "0               ");
    }

    #[test]
    fn chevron_rises_every_frame_period() {
        // 100 ms ticks -> 4 ticks per 400 ms frame.
        let (mut echo, mut lcd) = started(100.0);
        let mut seen = Vec::new();
        for _ in 0..12 {
            echo.on_tick(&mut lcd);
            seen.push(lcd.cell(0, 0));
        }
        let expected: Vec<u8> = [
            GLYPH_CHEVRON_LOW,
            GLYPH_CHEVRON_LOW,
            GLYPH_CHEVRON_LOW,
            GLYPH_CHEVRON_MID,
            GLYPH_CHEVRON_MID,
            GLYPH_CHEVRON_MID,
            GLYPH_CHEVRON_MID,
            GLYPH_CHEVRON_HIGH,
            GLYPH_CHEVRON_HIGH,
            GLYPH_CHEVRON_HIGH,
            GLYPH_CHEVRON_HIGH,
            GLYPH_CHEVRON_LOW,
        ]
        .to_vec();
        assert_eq!(seen, expected);
    }

    #[test]
    fn restart_resets_animation() {
        let (mut echo, mut lcd) = started(100.0);
        for _ in 0..4 {
            echo.on_tick(&mut lcd);
        }
        assert_eq!(lcd.cell(0, 0), GLYPH_CHEVRON_MID);
        echo.on_stop(&mut lcd);
        echo.on_start(&mut lcd);
        assert_eq!(lcd.cell(0, 0), GLYPH_CHEVRON_LOW);
    }
}
