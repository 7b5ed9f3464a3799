//! Time sources and deadline-based input buffers.
//!
//! Nothing here spawns timers. A host calls `tick()` on the form whenever it
//! likes (an animation frame, an interval, a test step) and any buffer whose
//! deadline has passed is flushed at that point.

use std::sync::{Arc, Mutex};
use std::time::{Duration, Instant};

pub trait Clock: Send + Sync {
    fn now(&self) -> Instant;
}

#[derive(Debug, Default, Clone, Copy)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> Instant {
        Instant::now()
    }
}

/// A clock that only moves when told to.
#[derive(Debug, Clone)]
pub struct ManualClock {
    origin: Instant,
    offset: Arc<Mutex<Duration>>,
}

impl ManualClock {
    pub fn new() -> Self {
        Self {
            origin: Instant::now(),
            offset: Arc::new(Mutex::new(Duration::ZERO)),
        }
    }

    pub fn advance(&self, by: Duration) {
        let mut offset = self.offset.lock().unwrap_or_else(|e| e.into_inner());
        *offset += by;
    }

    pub fn advance_ms(&self, ms: u64) {
        self.advance(Duration::from_millis(ms));
    }
}

impl Default for ManualClock {
    fn default() -> Self {
        Self::new()
    }
}

impl Clock for ManualClock {
    fn now(&self) -> Instant {
        let offset = self.offset.lock().unwrap_or_else(|e| e.into_inner());
        self.origin + *offset
    }
}

/// Pending input buffer with a flush deadline.
///
/// `set` stores the new value and (re)starts the window; `poll` moves the
/// pending value into `settled` once the window has elapsed without another
/// `set`.
#[derive(Debug, Clone)]
pub struct Debounced<T> {
    settled: T,
    pending: Option<(T, Instant)>,
    delay: Duration,
}

impl<T: Clone + PartialEq> Debounced<T> {
    pub fn new(initial: T, delay: Duration) -> Self {
        Self {
            settled: initial,
            pending: None,
            delay,
        }
    }

    pub fn set(&mut self, value: T, now: Instant) {
        self.pending = Some((value, now + self.delay));
    }

    /// Flush the pending value if its deadline has passed. Returns true when
    /// the settled value changed.
    pub fn poll(&mut self, now: Instant) -> bool {
        match &self.pending {
            Some((_, deadline)) if *deadline <= now => self.flush(),
            _ => false,
        }
    }

    /// Flush immediately, ignoring the deadline.
    pub fn flush(&mut self) -> bool {
        match self.pending.take() {
            Some((value, _)) if value != self.settled => {
                self.settled = value;
                true
            }
            _ => false,
        }
    }

    /// Replace both settled and pending state at once.
    pub fn reset(&mut self, value: T) -> bool {
        self.pending = None;
        if self.settled == value {
            return false;
        }
        self.settled = value;
        true
    }

    pub fn settled(&self) -> &T {
        &self.settled
    }

    pub fn is_pending(&self) -> bool {
        self.pending.is_some()
    }

    pub fn deadline(&self) -> Option<Instant> {
        self.pending.as_ref().map(|(_, deadline)| *deadline)
    }
}

/// A flag that turns on immediately and off after a delay.
#[derive(Debug, Clone)]
pub struct DelayedFalse {
    value: bool,
    off_at: Option<Instant>,
    delay: Duration,
}

impl DelayedFalse {
    pub fn new(delay: Duration) -> Self {
        Self {
            value: false,
            off_at: None,
            delay,
        }
    }

    pub fn set_on(&mut self) {
        self.value = true;
        self.off_at = None;
    }

    pub fn schedule_off(&mut self, now: Instant) {
        self.off_at = Some(now + self.delay);
    }

    pub fn poll(&mut self, now: Instant) -> bool {
        match self.off_at {
            Some(at) if at <= now => {
                self.off_at = None;
                let changed = self.value;
                self.value = false;
                changed
            }
            _ => false,
        }
    }

    pub fn get(&self) -> bool {
        self.value
    }
}
