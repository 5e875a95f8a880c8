use std::sync::Mutex;

use chrono::{DateTime, Duration, Local};

/// Wall-clock instant as shown on the board.
pub type Timestamp = DateTime<Local>;

/// Source of wall-clock time.
pub trait Clock: Send + Sync {
    fn now(&self) -> Timestamp;
}

/// Reads the system clock.
#[derive(Debug, Default, Clone, Copy)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> Timestamp {
        Local::now()
    }
}

/// A clock that only moves when told to. Used to drive sessions
/// deterministically in tests and simulations.
#[derive(Debug)]
pub struct ManualClock {
    now: Mutex<Timestamp>,
}

impl ManualClock {
    pub fn new(start: Timestamp) -> Self {
        Self {
            now: Mutex::new(start),
        }
    }

    pub fn set(&self, at: Timestamp) {
        if let Ok(mut now) = self.now.lock() {
            *now = at;
        }
    }

    /// Move the clock forward and return the new time.
    pub fn advance(&self, by: Duration) -> Timestamp {
        match self.now.lock() {
            Ok(mut now) => {
                *now = *now + by;
                *now
            }
            Err(poisoned) => *poisoned.into_inner(),
        }
    }
}

impl Clock for ManualClock {
    fn now(&self) -> Timestamp {
        match self.now.lock() {
            Ok(now) => *now,
            Err(poisoned) => *poisoned.into_inner(),
        }
    }
}
