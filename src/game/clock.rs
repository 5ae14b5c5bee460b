use std::time::{Duration, Instant};

/// A periodic tick schedule.
///
/// A game holds at most one `Clock`; stopping the ticks means dropping it.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub(crate) struct Clock {
    period: Duration,
    next_tick: Instant,
}

impl Clock {
    /// Start a clock whose first tick falls one `period` after `now`
    pub(crate) fn start(now: Instant, period: Duration) -> Clock {
        Clock {
            period,
            next_tick: now + period,
        }
    }

    /// Return how long to wait from `now` until the next tick is due.  Zero
    /// means the tick is due already.
    pub(crate) fn wait(&self, now: Instant) -> Duration {
        self.next_tick.saturating_duration_since(now)
    }

    pub(crate) fn is_due(&self, now: Instant) -> bool {
        self.wait(now).is_zero()
    }

    /// Record that the due tick has been run at `now` and schedule the next
    /// one.  Ticks keep a fixed cadence, except that a clock which has
    /// fallen a whole period behind restarts from `now` rather than firing a
    /// burst of ticks to catch up.
    pub(crate) fn fire(&mut self, now: Instant) {
        self.next_tick += self.period;
        if self.next_tick <= now {
            self.next_tick = now + self.period;
        }
    }
}
