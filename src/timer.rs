//! Tick period conversion.
//!
//! The shell never programs the timer itself; it only needs to know that
//! the requested period is something the hardware can represent, and how
//! long one tick lasts so demos can animate in wall-clock units.

use crate::config::{TIMER_MAX_TICKS, TIMER_TICK_HZ};
use crate::error::Error;

/// A validated tick period, in whole timer-clock ticks.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct TickPeriod {
    ticks: u64,
}

impl TickPeriod {
    /// Convert a period in seconds, rounding to the nearest timer tick.
    ///
    /// Fails with [`Error::TickPeriodOutOfRange`] when the period is not a
    /// positive finite number, rounds to zero ticks, or overflows the
    /// compare register.
    pub fn from_secs(secs: f32) -> Result<Self, Error> {
        if !secs.is_finite() || secs <= 0.0 {
            return Err(Error::TickPeriodOutOfRange);
        }
        let scaled = secs * TIMER_TICK_HZ as f32 + 0.5;
        if scaled > TIMER_MAX_TICKS as f32 + 0.5 {
            return Err(Error::TickPeriodOutOfRange);
        }
        Self::from_ticks(scaled as u64)
    }

    /// Use an exact timer-clock tick count.
    pub const fn from_ticks(ticks: u64) -> Result<Self, Error> {
        if ticks == 0 || ticks > TIMER_MAX_TICKS {
            return Err(Error::TickPeriodOutOfRange);
        }
        Ok(Self { ticks })
    }

    pub const fn ticks(&self) -> u64 {
        self.ticks
    }

    pub const fn as_micros(&self) -> u64 {
        self.ticks * 1_000_000 / TIMER_TICK_HZ
    }

    pub const fn as_millis(&self) -> u64 {
        self.ticks * 1_000 / TIMER_TICK_HZ
    }

    /// Number of shell ticks covering `ms` milliseconds, never less than one.
    pub fn ticks_for_millis(&self, ms: u32) -> u32 {
        let per_tick = self.as_micros().max(1);
        let n = (ms as u64 * 1_000 + per_tick / 2) / per_tick;
        n.clamp(1, u32::MAX as u64) as u32
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_period_is_representable() {
        let p = TickPeriod::from_secs(crate::config::TICK_PERIOD_SECS).unwrap();
        // 0.01 s * 32768 Hz = 327.68 -> 328
        assert_eq!(p.ticks(), 328);
        assert_eq!(p.as_millis(), 10);
        assert_eq!(p.as_micros(), 10_009);
    }

    #[test]
    fn rejects_non_positive_and_non_finite() {
        assert_eq!(TickPeriod::from_secs(0.0), Err(Error::TickPeriodOutOfRange));
        assert_eq!(TickPeriod::from_secs(-1.0), Err(Error::TickPeriodOutOfRange));
        assert_eq!(TickPeriod::from_secs(f32::NAN), Err(Error::TickPeriodOutOfRange));
        assert_eq!(
            TickPeriod::from_secs(f32::INFINITY),
            Err(Error::TickPeriodOutOfRange)
        );
    }

    #[test]
    fn rejects_periods_shorter_than_one_timer_tick() {
        // Half a tick at 32768 Hz is ~15 µs.
        assert_eq!(
            TickPeriod::from_secs(0.000_01),
            Err(Error::TickPeriodOutOfRange)
        );
    }

    #[test]
    fn rejects_periods_overflowing_the_counter() {
        // 24-bit counter at 32768 Hz holds a bit over 512 s.
        assert!(TickPeriod::from_secs(500.0).is_ok());
        assert_eq!(TickPeriod::from_secs(600.0), Err(Error::TickPeriodOutOfRange));
        assert_eq!(
            TickPeriod::from_ticks(TIMER_MAX_TICKS + 1),
            Err(Error::TickPeriodOutOfRange)
        );
        assert_eq!(TickPeriod::from_ticks(0), Err(Error::TickPeriodOutOfRange));
    }

    #[test]
    fn ticks_for_millis_rounds_and_never_returns_zero() {
        let p = TickPeriod::from_ticks(328).unwrap(); // ~10 ms
        assert_eq!(p.ticks_for_millis(400), 40);
        assert_eq!(p.ticks_for_millis(0), 1);
        assert_eq!(p.ticks_for_millis(3), 1);

        let slow = TickPeriod::from_secs(0.25).unwrap();
        assert_eq!(slow.ticks_for_millis(400), 2);
    }
}
