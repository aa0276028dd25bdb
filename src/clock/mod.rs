mod format;
mod timer;

pub use format::format_clock;
pub use timer::Timer;

use std::fmt;

use slotmap::SlotMap;
use tracing::{debug, trace};

use crate::error::ClockError;

/// Milliseconds represented by one tick unless configured otherwise.
pub const DEFAULT_MILLIS_PER_TICK: u64 = 1;

slotmap::new_key_type! {
    /// Handle to a timer registered with a [`Clock`].
    pub struct TimerId;
}

/// A global tick counter together with the timers it drives.
///
/// Each `Clock` is an independent clock domain: it owns its timers and
/// [`Clock::tick_all`] advances the global count and every registered
/// timer in lockstep. Share it across threads behind a `Mutex`.
#[derive(Debug)]
pub struct Clock {
    ticks: u64,
    millis_per_tick: u64,
    timers: SlotMap<TimerId, Timer>,
}

impl Clock {
    /// Creates a clock at tick 0 with no timers.
    #[must_use]
    pub fn new() -> Self {
        Self::with_millis_per_tick(DEFAULT_MILLIS_PER_TICK)
    }

    /// Creates a clock whose global count is formatted with the given scale.
    #[must_use]
    pub fn with_millis_per_tick(millis_per_tick: u64) -> Self {
        Self {
            ticks: 0,
            millis_per_tick,
            timers: SlotMap::with_key(),
        }
    }

    /// Global tick count.
    #[must_use]
    pub fn ticks(&self) -> u64 {
        self.ticks
    }

    #[must_use]
    pub fn millis_per_tick(&self) -> u64 {
        self.millis_per_tick
    }

    /// Overwrites the global tick count. Timers are not affected.
    ///
    /// Tick counts are unsigned, so a clock cannot be set before tick 0.
    pub fn set_global(&mut self, start: u64) {
        self.ticks = start;
    }

    /// Advances the global count by one tick, saturating at `u64::MAX`.
    pub fn tick(&mut self) {
        self.ticks = self.ticks.saturating_add(1);
    }

    /// Returns the global tick count and sets it to zero.
    pub fn reset(&mut self) -> u64 {
        let value = std::mem::take(&mut self.ticks);
        debug!(ticks = value, "global clock reset");
        value
    }

    /// Advances the global count and every registered timer by one tick.
    ///
    /// Counters already at `u64::MAX` stay there.
    pub fn tick_all(&mut self) {
        self.tick();
        for timer in self.timers.values_mut() {
            timer.tick();
        }
        trace!(ticks = self.ticks, timers = self.timers.len(), "ticked all timers");
    }

    // --- Timer registry ---

    /// Registers a timer and returns its handle.
    pub fn add_timer(&mut self, timer: Timer) -> TimerId {
        debug!(label = timer.label(), start = timer.ticks(), "timer registered");
        self.timers.insert(timer)
    }

    /// Unregisters a timer and returns it.
    ///
    /// # Errors
    ///
    /// Returns an error if the timer is not registered.
    pub fn remove_timer(&mut self, id: TimerId) -> Result<Timer, ClockError> {
        let timer = self.timers.remove(id).ok_or(ClockError::TimerNotFound)?;
        debug!(label = timer.label(), ticks = timer.ticks(), "timer removed");
        Ok(timer)
    }

    /// Returns a reference to a registered timer.
    ///
    /// # Errors
    ///
    /// Returns an error if the timer is not registered.
    pub fn timer(&self, id: TimerId) -> Result<&Timer, ClockError> {
        self.timers.get(id).ok_or(ClockError::TimerNotFound)
    }

    /// Returns a mutable reference to a registered timer.
    ///
    /// # Errors
    ///
    /// Returns an error if the timer is not registered.
    pub fn timer_mut(&mut self, id: TimerId) -> Result<&mut Timer, ClockError> {
        self.timers.get_mut(id).ok_or(ClockError::TimerNotFound)
    }

    /// Advances a single timer by one tick.
    ///
    /// # Errors
    ///
    /// Returns an error if the timer is not registered.
    pub fn tick_timer(&mut self, id: TimerId) -> Result<(), ClockError> {
        self.timer_mut(id)?.tick();
        Ok(())
    }

    /// Returns a timer's tick count and sets it to zero.
    ///
    /// # Errors
    ///
    /// Returns an error if the timer is not registered.
    pub fn reset_timer(&mut self, id: TimerId) -> Result<u64, ClockError> {
        let timer = self.timer_mut(id)?;
        let value = timer.reset();
        debug!(label = timer.label(), ticks = value, "timer reset");
        Ok(value)
    }

    /// Iterates over all registered timers.
    pub fn timers(&self) -> impl Iterator<Item = (TimerId, &Timer)> {
        self.timers.iter()
    }

    /// Number of registered timers.
    #[must_use]
    pub fn len(&self) -> usize {
        self.timers.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.timers.is_empty()
    }

    /// Global elapsed time as `days:hh:mm:ss:ms`, see [`format_clock`].
    #[must_use]
    pub fn to_clock_string(&self) -> String {
        format_clock(self.ticks, self.millis_per_tick)
    }
}

impl Default for Clock {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for Clock {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_clock_string())
    }
}
