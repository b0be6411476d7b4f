//! Test utilities for deterministic clocks and synthetic payloads
//!
//! This module provides testing helpers shared between the unit tests
//! and the criterion benches, so neither needs fixture files.

#![cfg(any(test, feature = "benchmark"))]

use std::sync::{Arc, Mutex};
use std::time::{Duration, SystemTime, UNIX_EPOCH};

use crate::clock::Clock;

/// A clock that only moves when told to.
///
/// Cloning shares the underlying instant, so a clock handed to a
/// stamper can still be advanced from the test body.
#[derive(Debug, Clone)]
pub struct ManualClock {
    now: Arc<Mutex<SystemTime>>,
}

impl ManualClock {
    /// Clock whose first reading is `start`.
    pub fn starting_at(start: SystemTime) -> Self {
        Self { now: Arc::new(Mutex::new(start)) }
    }

    /// Clock whose first reading is the Unix epoch.
    pub fn at_epoch() -> Self {
        Self::starting_at(UNIX_EPOCH)
    }

    /// Move the clock forward.
    pub fn advance(&self, by: Duration) {
        let mut now = self.now.lock().unwrap();
        *now += by;
    }

    /// Set an absolute reading.
    pub fn set(&self, to: SystemTime) {
        *self.now.lock().unwrap() = to;
    }
}

impl Clock for ManualClock {
    fn now(&self) -> SystemTime {
        *self.now.lock().unwrap()
    }
}

/// Deterministic payload bytes of the requested length.
///
/// The ramp pattern lets tests and benches assert on content without
/// carrying fixture files.
pub fn sample_pcm(len: usize) -> Vec<u8> {
    (0..len).map(|i| (i % 251) as u8).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn manual_clock_advances_and_sets() {
        let clock = ManualClock::at_epoch();
        assert_eq!(clock.now(), UNIX_EPOCH);

        clock.advance(Duration::from_secs(5));
        assert_eq!(clock.now(), UNIX_EPOCH + Duration::from_secs(5));

        let target = UNIX_EPOCH + Duration::from_secs(60);
        clock.set(target);
        assert_eq!(clock.now(), target);
    }

    #[test]
    fn sample_pcm_is_deterministic() {
        assert_eq!(sample_pcm(4), sample_pcm(4));
        assert_eq!(sample_pcm(300).len(), 300);
    }
}
