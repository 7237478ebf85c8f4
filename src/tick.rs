//! Tick timing for platform-agnostic duration handling.
//!
//! The controller never reads a clock. All durations are expressed in ticks
//! of the integrator's periodic timer, and [`TickRate`] converts wall-clock
//! durations into tick counts for whatever period that timer runs at.

/// The fixed period of the timer driving the controller.
///
/// Stage thresholds are derived from this rate when the controller is
/// constructed, so running the timer at a different period only requires
/// constructing the controller with the matching rate.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct TickRate {
    period_ms: u32,
}

impl TickRate {
    /// The reference rate: one tick every 250 ms.
    pub const DEFAULT: Self = Self::from_period_ms(250);

    /// Creates a rate from a timer period in milliseconds.
    ///
    /// # Panics
    /// Panics if `period_ms` is zero.
    pub const fn from_period_ms(period_ms: u32) -> Self {
        assert!(period_ms > 0, "tick period must be non-zero");
        Self { period_ms }
    }

    /// Returns the timer period in milliseconds.
    #[inline]
    pub const fn period_ms(self) -> u32 {
        self.period_ms
    }

    /// Converts a duration in milliseconds to the nearest whole tick count.
    pub const fn ticks_for_millis(self, millis: u32) -> u32 {
        (millis + self.period_ms / 2) / self.period_ms
    }
}

impl Default for TickRate {
    fn default() -> Self {
        Self::DEFAULT
    }
}
