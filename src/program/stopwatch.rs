//! Stopwatch - ENTER starts/pauses, "0" resets.
//!
//! Time advances by one tick period per shell tick while running, so the
//! accuracy is that of the tick timer.

use core::fmt::Write;

use heapless::String;

use super::Lifecycle;
use crate::keys::{digit, KEY_ENTER};
use crate::lcd::{self, CharDisplay};
use crate::timer::TickPeriod;

const STATUS_COL: u8 = 12;

pub struct Stopwatch {
    tick_us: u64,
    elapsed_us: u64,
    running: bool,
    shown_cs: Option<u64>,
}

impl Stopwatch {
    pub fn new(tick: TickPeriod) -> Self {
        Self {
            tick_us: tick.as_micros(),
            elapsed_us: 0,
            running: false,
            shown_cs: None,
        }
    }

    pub fn elapsed_us(&self) -> u64 {
        self.elapsed_us
    }

    pub fn is_running(&self) -> bool {
        self.running
    }

    fn draw_status(&self, display: &mut dyn CharDisplay) {
        display.move_cursor(0, STATUS_COL);
        display.write_text(if self.running { "RUN " } else { "STOP" });
    }

    /// Redraw `MM:SS.cc` when the shown centisecond changed.
    fn draw_time(&mut self, display: &mut dyn CharDisplay) {
        let cs = self.elapsed_us / 10_000;
        if self.shown_cs == Some(cs) {
            return;
        }
        self.shown_cs = Some(cs);

        let mut line: String<16> = String::new();
        let _ = write!(
            line,
            "{:02}:{:02}.{:02}",
            (cs / 6_000) % 100,
            (cs / 100) % 60,
            cs % 100
        );
        lcd::write_line(display, 1, &line);
    }
}

impl Lifecycle for Stopwatch {
    fn on_start(&mut self, display: &mut dyn CharDisplay) {
        self.elapsed_us = 0;
        self.running = false;
        self.shown_cs = None;
        display.clear();
        lcd::write_line(display, 0, "Stopwatch");
        self.draw_status(display);
        self.draw_time(display);
    }

    fn on_stop(&mut self, _display: &mut dyn CharDisplay) {
        self.running = false;
    }

    fn on_key(&mut self, display: &mut dyn CharDisplay, code: u8) {
        if code == KEY_ENTER {
            self.running = !self.running;
            self.draw_status(display);
        } else if digit(code) == Some(0) {
            self.elapsed_us = 0;
            self.draw_time(display);
        }
    }

    fn on_tick(&mut self, display: &mut dyn CharDisplay) {
        if self.running {
            self.elapsed_us += self.tick_us;
            self.draw_time(display);
        }
    }
}
