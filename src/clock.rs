//! Clock seam for chunk timestamping.

use std::time::SystemTime;

/// Source of wall-clock readings for chunk construction.
///
/// The implicit-timestamp constructor reads the clock through this trait,
/// so tests and replay tooling can substitute a fixed or manually
/// advanced clock while production code uses [`SystemClock`].
pub trait Clock: Send + Sync {
    /// Get the current wall-clock time.
    fn now(&self) -> SystemTime;
}

/// The production clock, backed by [`SystemTime::now`].
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> SystemTime {
        SystemTime::now()
    }
}
