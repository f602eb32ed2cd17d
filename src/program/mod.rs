//! Demo programs and their registry.
//!
//! Every program implements the same four-callback [`Lifecycle`]; the
//! closed [`Program`] enum dispatches to the concrete demo. A program's
//! state lives inside its variant and is reset by `on_start`.

mod counter;
mod key_echo;
mod led_chase;
mod stopwatch;

use heapless::Vec;

use crate::config::MAX_PROGRAMS;
use crate::error::Error;
use crate::lcd::CharDisplay;

pub use counter::ButtonCounter;
pub use key_echo::KeyEcho;
pub use led_chase::LedChase;
pub use stopwatch::Stopwatch;

/// Stable index of a program in its [`Programs`] registry.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct ProgramId(u8);

impl ProgramId {
    pub const fn index(self) -> usize {
        self.0 as usize
    }
}

/// Callbacks the shell drives while a program holds the focus.
///
/// Unused callbacks are implemented as empty bodies, never skipped.
pub trait Lifecycle {
    /// Take over the display; reset all program state.
    fn on_start(&mut self, display: &mut dyn CharDisplay);

    /// Focus goes back to the menu right after this returns.
    fn on_stop(&mut self, display: &mut dyn CharDisplay);

    /// A press event other than CLEAR.
    fn on_key(&mut self, display: &mut dyn CharDisplay, code: u8);

    /// Called once per shell tick, with or without key activity.
    fn on_tick(&mut self, display: &mut dyn CharDisplay);
}

/// The set of demo programs the firmware ships.
pub enum Program {
    KeyEcho(KeyEcho),
    ButtonCounter(ButtonCounter),
    Stopwatch(Stopwatch),
    LedChase(LedChase),
}

impl Program {
    pub fn name(&self) -> &'static str {
        match self {
            Program::KeyEcho(_) => "key echo",
            Program::ButtonCounter(_) => "button counter",
            Program::Stopwatch(_) => "stopwatch",
            Program::LedChase(_) => "led chase",
        }
    }

    fn inner(&mut self) -> &mut dyn Lifecycle {
        match self {
            Program::KeyEcho(p) => p,
            Program::ButtonCounter(p) => p,
            Program::Stopwatch(p) => p,
            Program::LedChase(p) => p,
        }
    }
}

impl Lifecycle for Program {
    fn on_start(&mut self, display: &mut dyn CharDisplay) {
        self.inner().on_start(display)
    }

    fn on_stop(&mut self, display: &mut dyn CharDisplay) {
        self.inner().on_stop(display)
    }

    fn on_key(&mut self, display: &mut dyn CharDisplay, code: u8) {
        self.inner().on_key(display, code)
    }

    fn on_tick(&mut self, display: &mut dyn CharDisplay) {
        self.inner().on_tick(display)
    }
}

/// Registry of programs, addressed by [`ProgramId`] in registration order.
#[derive(Default)]
pub struct Programs {
    list: Vec<Program, MAX_PROGRAMS>,
}

impl Programs {
    pub const fn new() -> Self {
        Self { list: Vec::new() }
    }

    pub fn register(&mut self, program: Program) -> Result<ProgramId, Error> {
        let id = ProgramId(self.list.len() as u8);
        self.list
            .push(program)
            .map_err(|_| Error::TooManyPrograms)?;
        Ok(id)
    }

    pub fn get(&self, id: ProgramId) -> Option<&Program> {
        self.list.get(id.index())
    }

    pub fn get_mut(&mut self, id: ProgramId) -> Option<&mut Program> {
        self.list.get_mut(id.index())
    }

    pub fn len(&self) -> usize {
        self.list.len()
    }

    pub fn is_empty(&self) -> bool {
        self.list.is_empty()
    }
}
