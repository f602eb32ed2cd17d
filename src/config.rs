//! Application-wide constants and compile-time configuration.
//!
//! Display geometry, timer parameters, LCD bus timing and arena sizes
//! live here so they can be tuned in one place.

// Display

/// Visible columns of the character LCD.
pub const DISPLAY_COLS: u8 = 16;

/// Visible rows of the character LCD.
pub const DISPLAY_ROWS: u8 = 2;

// Timer

/// Requested period of the shell tick (seconds).
///
/// The keypad is sampled once per tick, so this must stay well below the
/// duration of a human key press.
pub const TICK_PERIOD_SECS: f32 = 0.01;

/// Clock feeding the tick timer (nRF RTC1, used by embassy-time).
pub const TIMER_TICK_HZ: u64 = 32_768;

/// Largest compare value the tick timer can hold (24-bit RTC counter).
pub const TIMER_MAX_TICKS: u64 = 0x00FF_FFFF;

// HD44780 bus timing
//
// These are contractual settle times of the LCD controller, not tuning knobs.

/// Wait after power-up before the first command (ms).
pub const LCD_POWER_ON_DELAY_MS: u32 = 40;

/// Settle time after every command byte (ms).
pub const LCD_COMMAND_SETTLE_MS: u32 = 5;

/// Settle time after every byte put on the bus (µs).
pub const LCD_DATA_SETTLE_US: u32 = 50;

/// Width of the EN strobe (µs).
pub const LCD_ENABLE_PULSE_US: u32 = 1;

// Keypad

/// Time a driven column needs before the rows read back stable (µs).
pub const KEYPAD_SETTLE_US: u32 = 2;

// GPIO pin assignments (nRF52840-DK, free header pins)
//
// These are logical names; the concrete `embassy_nrf::peripherals::*` are
// picked in `main.rs`.  Adjust for a custom board.
//
//   LCD RS         → P1.01
//   LCD EN         → P1.02
//   LCD D4..D7     → P1.03, P1.04, P1.05, P1.06
//   Keypad COL0..3 → P1.10, P1.11, P1.12, P1.13 (outputs, idle high)
//   Keypad ROW0..3 → P1.14, P1.15, P0.02, P0.03 (inputs, pull-up)

// Arena sizes

/// Maximum number of menus in the menu tree.
pub const MAX_MENUS: usize = 8;

/// Maximum number of routes in one menu.
pub const MAX_ROUTES: usize = 8;

/// Maximum number of registered programs.
pub const MAX_PROGRAMS: usize = 8;

// Demo programs

/// Frame period of the key-echo chevron animation (ms).
pub const ECHO_ANIM_PERIOD_MS: u32 = 400;

/// Initial step period of the LED chase (ms).
pub const CHASE_STEP_DEFAULT_MS: u32 = 150;

/// Fastest LED chase step (ms).
pub const CHASE_STEP_MIN_MS: u32 = 30;

/// Slowest LED chase step (ms).
pub const CHASE_STEP_MAX_MS: u32 = 600;
