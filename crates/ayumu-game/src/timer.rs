use std::time::{Duration, Instant};

/// Countdown for the memorize phase.
///
/// The timer never reads the clock itself; every query takes the current
/// instant, so transitions can be driven by synthetic timestamps.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MemorizeTimer {
    started_at: Instant,
    duration: Duration,
}

impl MemorizeTimer {
    /// Starts a countdown of `duration` at `now`.
    #[must_use]
    pub fn start(now: Instant, duration: Duration) -> Self {
        Self {
            started_at: now,
            duration,
        }
    }

    /// Returns the instant the countdown started.
    #[must_use]
    pub fn started_at(&self) -> Instant {
        self.started_at
    }

    /// Returns the full countdown length.
    #[must_use]
    pub fn duration(&self) -> Duration {
        self.duration
    }

    /// Returns the time elapsed since the start, zero if `now` is earlier.
    #[must_use]
    pub fn elapsed(&self, now: Instant) -> Duration {
        now.saturating_duration_since(self.started_at)
    }

    /// Returns `true` once `elapsed >= duration`.
    #[must_use]
    pub fn is_expired(&self, now: Instant) -> bool {
        self.elapsed(now) >= self.duration
    }

    /// Returns the whole seconds left, rounded down and never negative.
    #[must_use]
    pub fn remaining_secs(&self, now: Instant) -> u64 {
        self.duration.saturating_sub(self.elapsed(now)).as_secs()
    }
}
