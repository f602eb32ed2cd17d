//! Unified error type for lcdshell.
//!
//! Every variant is a configuration mistake caught at startup; the running
//! shell itself has no failure paths. No `alloc` - variants carry no data.

/// Top-level error type used across the application.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Error {
    // Timer
    /// The requested tick period cannot be represented by the timer.
    TickPeriodOutOfRange,

    // Menu tree
    /// The menu arena is full.
    TooManyMenus,

    /// A menu already holds the maximum number of routes.
    TooManyRoutes,

    /// A route label does not fit on one display row.
    LabelTooLong,

    /// A menu was built without any routes.
    EmptyMenu,

    /// A route or operation names a menu that does not exist.
    UnknownMenu,

    // Programs
    /// The program registry is full.
    TooManyPrograms,

    /// A route names a program that was never registered.
    UnknownProgram,
}

impl Error {
    /// Short text for the LCD error screen (fits one 16-column row).
    pub const fn message(&self) -> &'static str {
        match self {
            Error::TickPeriodOutOfRange => "Bad tick period",
            Error::TooManyMenus => "Too many menus",
            Error::TooManyRoutes => "Too many routes",
            Error::LabelTooLong => "Label too long",
            Error::EmptyMenu => "Empty menu",
            Error::UnknownMenu => "Unknown menu",
            Error::TooManyPrograms => "Too many progs",
            Error::UnknownProgram => "Unknown program",
        }
    }
}

impl core::fmt::Display for Error {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.message())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::DISPLAY_COLS;

    #[test]
    fn every_message_fits_one_row() {
        for e in [
            Error::TickPeriodOutOfRange,
            Error::TooManyMenus,
            Error::TooManyRoutes,
            Error::LabelTooLong,
            Error::EmptyMenu,
            Error::UnknownMenu,
            Error::TooManyPrograms,
            Error::UnknownProgram,
        ] {
            assert!(e.message().len() <= DISPLAY_COLS as usize, "{}", e);
        }
    }
}
