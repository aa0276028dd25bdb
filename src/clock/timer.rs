use std::fmt;

use super::format::format_clock;
use super::DEFAULT_MILLIS_PER_TICK;

/// A tick counter with an optional label.
///
/// `millis_per_tick` only affects [`Timer::to_clock_string`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Timer {
    label: Option<String>,
    ticks: u64,
    millis_per_tick: u64,
}

impl Timer {
    /// Creates an unlabelled timer starting at `start` ticks.
    ///
    /// Tick counts are unsigned; a timer cannot start before tick 0.
    #[must_use]
    pub fn new(start: u64, millis_per_tick: u64) -> Self {
        Self {
            label: None,
            ticks: start,
            millis_per_tick,
        }
    }

    /// Attaches a label to the timer.
    #[must_use]
    pub fn with_label(mut self, label: impl Into<String>) -> Self {
        self.label = Some(label.into());
        self
    }

    #[must_use]
    pub fn label(&self) -> Option<&str> {
        self.label.as_deref()
    }

    #[must_use]
    pub fn ticks(&self) -> u64 {
        self.ticks
    }

    #[must_use]
    pub fn millis_per_tick(&self) -> u64 {
        self.millis_per_tick
    }

    /// Advances the timer by one tick, saturating at `u64::MAX`.
    pub fn tick(&mut self) {
        self.ticks = self.ticks.saturating_add(1);
    }

    /// Returns the current tick count and sets it to zero.
    pub fn reset(&mut self) -> u64 {
        std::mem::take(&mut self.ticks)
    }

    /// Elapsed time as `days:hh:mm:ss:ms`, see [`format_clock`].
    #[must_use]
    pub fn to_clock_string(&self) -> String {
        format_clock(self.ticks, self.millis_per_tick)
    }
}

impl Default for Timer {
    fn default() -> Self {
        Self::new(0, DEFAULT_MILLIS_PER_TICK)
    }
}

impl fmt::Display for Timer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_clock_string())
    }
}
