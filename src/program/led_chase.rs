//! LED chase - a lit cell bouncing along the bottom row.
//!
//! UP halves the step period, DOWN doubles it, ENTER pauses.

use core::fmt::Write;

use heapless::String;

use super::Lifecycle;
use crate::config::{CHASE_STEP_DEFAULT_MS, CHASE_STEP_MAX_MS, CHASE_STEP_MIN_MS, DISPLAY_COLS};
use crate::keys::{KEY_DOWN, KEY_ENTER, KEY_UP};
use crate::lcd::{self, CharDisplay, CHAR_BLOCK};
use crate::timer::TickPeriod;

const ROW: u8 = 1;

pub struct LedChase {
    tick: TickPeriod,
    pos: u8,
    forward: bool,
    step_ms: u32,
    step_ticks: u32,
    ticks: u32,
    paused: bool,
}

impl LedChase {
    pub fn new(tick: TickPeriod) -> Self {
        Self {
            tick,
            pos: 0,
            forward: true,
            step_ms: CHASE_STEP_DEFAULT_MS,
            step_ticks: tick.ticks_for_millis(CHASE_STEP_DEFAULT_MS),
            ticks: 0,
            paused: false,
        }
    }

    pub fn position(&self) -> u8 {
        self.pos
    }

    pub fn step_ms(&self) -> u32 {
        self.step_ms
    }

    fn set_step(&mut self, ms: u32) {
        self.step_ms = ms.clamp(CHASE_STEP_MIN_MS, CHASE_STEP_MAX_MS);
        self.step_ticks = self.tick.ticks_for_millis(self.step_ms);
    }

    fn draw_header(&self, display: &mut dyn CharDisplay) {
        let mut line: String<16> = String::new();
        if self.paused {
            let _ = line.push_str("LED chase  pause");
        } else {
            let _ = write!(line, "LED chase {:>4}ms", self.step_ms);
        }
        lcd::write_line(display, 0, &line);
    }

    fn advance(&mut self) {
        let last = DISPLAY_COLS - 1;
        if self.forward && self.pos == last {
            self.forward = false;
        } else if !self.forward && self.pos == 0 {
            self.forward = true;
        }
        if self.forward {
            self.pos += 1;
        } else {
            self.pos -= 1;
        }
    }
}

impl Lifecycle for LedChase {
    fn on_start(&mut self, display: &mut dyn CharDisplay) {
        self.pos = 0;
        self.forward = true;
        self.ticks = 0;
        self.paused = false;
        self.set_step(CHASE_STEP_DEFAULT_MS);
        display.clear();
        self.draw_header(display);
        display.move_cursor(ROW, self.pos);
        display.write_char(CHAR_BLOCK);
    }

    fn on_stop(&mut self, _display: &mut dyn CharDisplay) {}

    fn on_key(&mut self, display: &mut dyn CharDisplay, code: u8) {
        match code {
            KEY_UP => self.set_step(self.step_ms / 2),
            KEY_DOWN => self.set_step(self.step_ms * 2),
            KEY_ENTER => self.paused = !self.paused,
            _ => return,
        }
        self.draw_header(display);
    }

    fn on_tick(&mut self, display: &mut dyn CharDisplay) {
        if self.paused {
            return;
        }
        self.ticks += 1;
        if self.ticks < self.step_ticks {
            return;
        }
        self.ticks = 0;

        display.move_cursor(ROW, self.pos);
        display.write_char(b' ');
        self.advance();
        display.move_cursor(ROW, self.pos);
        display.write_char(CHAR_BLOCK);
    }
}
