//! Cancellable periodic ticker driven by a pluggable clock
//!
//! The ticker never runs callbacks on its own. The owner polls it with the
//! [`TickHandle`] it got from `start` and receives the number of whole
//! intervals that elapsed since the last poll. Cancelling or re-arming retires
//! the old handle; polling with a retired handle yields nothing, so a late poll
//! can never advance a cursor on behalf of a timer that no longer exists.

use std::cell::Cell;
use std::rc::Rc;
use std::time::{Duration, Instant};

/// Monotonic time source
pub trait Clock {
    /// Time elapsed since an arbitrary, fixed origin
    fn now(&self) -> Duration;
}

/// Wall-clock time backed by [`Instant`]
#[derive(Debug, Clone, Copy)]
pub struct SystemClock {
    origin: Instant,
}

impl SystemClock {
    pub fn new() -> Self {
        SystemClock {
            origin: Instant::now(),
        }
    }
}

impl Default for SystemClock {
    fn default() -> Self {
        Self::new()
    }
}

impl Clock for SystemClock {
    fn now(&self) -> Duration {
        self.origin.elapsed()
    }
}

/// Hand-advanced clock for tests; clones share the same time
#[derive(Debug, Clone, Default)]
pub struct ManualClock {
    now: Rc<Cell<Duration>>,
}

impl ManualClock {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn advance(&self, by: Duration) {
        self.now.set(self.now.get() + by);
    }
}

impl Clock for ManualClock {
    fn now(&self) -> Duration {
        self.now.get()
    }
}

/// Identifies one arming of a ticker; only the latest arming ever ticks
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TickHandle(u64);

/// Something that can be armed with an interval, cancelled, and polled
pub trait Ticker {
    /// Arm a periodic tick, replacing any schedule that was already armed
    fn start(&mut self, interval: Duration) -> TickHandle;

    /// Disarm; ticks that were due but not yet polled are discarded
    fn cancel(&mut self);

    fn is_armed(&self) -> bool;

    /// Number of ticks that fell due since the last poll of `handle`'s
    /// schedule. A cancelled or superseded handle always polls zero.
    fn poll(&mut self, handle: TickHandle) -> usize;
}

#[derive(Debug, Clone, Copy)]
struct Schedule {
    handle: TickHandle,
    interval: Duration,
    next_due: Duration,
}

/// [`Ticker`] that measures intervals against a [`Clock`]
#[derive(Debug)]
pub struct IntervalTicker<C: Clock = SystemClock> {
    clock: C,
    generation: u64,
    schedule: Option<Schedule>,
}

impl<C: Clock> IntervalTicker<C> {
    pub fn new(clock: C) -> Self {
        IntervalTicker {
            clock,
            generation: 0,
            schedule: None,
        }
    }

    /// Handle of the currently armed schedule
    pub fn handle(&self) -> Option<TickHandle> {
        self.schedule.map(|s| s.handle)
    }
}

impl Default for IntervalTicker<SystemClock> {
    fn default() -> Self {
        Self::new(SystemClock::new())
    }
}

impl<C: Clock> Ticker for IntervalTicker<C> {
    fn start(&mut self, interval: Duration) -> TickHandle {
        self.cancel();
        self.generation += 1;
        let handle = TickHandle(self.generation);
        // A zero interval would make every poll report unbounded ticks.
        let interval = interval.max(Duration::from_millis(1));
        self.schedule = Some(Schedule {
            handle,
            interval,
            next_due: self.clock.now() + interval,
        });
        handle
    }

    fn cancel(&mut self) {
        self.schedule = None;
    }

    fn is_armed(&self) -> bool {
        self.schedule.is_some()
    }

    fn poll(&mut self, handle: TickHandle) -> usize {
        let Some(schedule) = self.schedule.as_mut().filter(|s| s.handle == handle) else {
            return 0;
        };

        let now = self.clock.now();
        let mut ticks = 0;
        while now >= schedule.next_due {
            ticks += 1;
            schedule.next_due += schedule.interval;
        }
        ticks
    }
}
