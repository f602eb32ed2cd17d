//! The menu and program set the firmware ships with.
//!
//! ```text
//! Demos  ──▶ Key echo, Button counter
//! Timing ──▶ Stopwatch, LED chase
//! About  ──▶ version / hardware lines (placeholders)
//! ```

use crate::error::Error;
use crate::menu::{MenuTree, Route};
use crate::program::{ButtonCounter, KeyEcho, LedChase, Program, Programs, Stopwatch};
use crate::shell::Shell;
use crate::timer::TickPeriod;

/// Version line shown under "About".
pub const VERSION_LABEL: &str = concat!("lcdshell ", env!("CARGO_PKG_VERSION"));

/// Build the default shell for the given tick period.
pub fn build(tick: TickPeriod) -> Result<Shell, Error> {
    let mut programs = Programs::new();
    let echo = programs.register(Program::KeyEcho(KeyEcho::new(tick)))?;
    let counter = programs.register(Program::ButtonCounter(ButtonCounter::new()))?;
    let stopwatch = programs.register(Program::Stopwatch(Stopwatch::new(tick)))?;
    let chase = programs.register(Program::LedChase(LedChase::new(tick)))?;

    let mut tree = MenuTree::new();
    let root = tree.add_menu()?;
    let demos = tree.add_menu()?;
    let timing = tree.add_menu()?;
    let about = tree.add_menu()?;

    tree.add_route(root, Route::submenu("Demos", demos))?;
    tree.add_route(root, Route::submenu("Timing", timing))?;
    tree.add_route(root, Route::submenu("About", about))?;

    tree.add_route(demos, Route::program("Key echo", echo))?;
    tree.add_route(demos, Route::program("Button counter", counter))?;

    tree.add_route(timing, Route::program("Stopwatch", stopwatch))?;
    tree.add_route(timing, Route::program("LED chase", chase))?;

    tree.add_route(about, Route::placeholder(VERSION_LABEL))?;
    tree.add_route(about, Route::placeholder("16x2 LCD 4x4pad"))?;

    Shell::new(tree, programs)
}
