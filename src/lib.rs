//! lcdshell - menu shell for a 16×2 character LCD and a 4×4 keypad.
//!
//! Everything except the board bring-up lives in this library so it can
//! be tested on the host (no embedded hardware required):
//!
//! - **keys**: key legend and the press-event filter
//! - **keypad** / **lcd**: drivers written against `embedded-hal` 1.0
//! - **menu**: the menu arena and navigation engine
//! - **program**: the demo programs and their registry
//! - **shell**: focus routing between the menu and a running program
//!
//! Usage: `cargo test --lib`
//!
//! Note: The embedded binary uses main.rs with #![no_std] and #![no_main]
//! and is built with `--features embedded --target thumbv7em-none-eabihf`.

#![cfg_attr(not(test), no_std)]

#[macro_use]
mod fmt;

pub mod catalog;
pub mod config;
pub mod error;
pub mod keypad;
pub mod keys;
pub mod lcd;
pub mod menu;
pub mod program;
pub mod shell;
pub mod timer;

pub use error::Error;
pub use keys::{KeyFilter, KeySource};
pub use lcd::CharDisplay;
pub use shell::Shell;
pub use timer::TickPeriod;
