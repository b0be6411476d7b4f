//! Producer-side chunk stamping.

use std::sync::Arc;
use tracing::trace;

use crate::clock::{Clock, SystemClock};
use crate::error::{ChunkError, Result};
use crate::types::AudioChunk;

/// Stamps outgoing chunks with receive times from an injected clock.
///
/// A producer stage keeps one stamper per source; every chunk stamped
/// through it carries that clock's reading as its receive time. The
/// stamper fixes construction-time state only — queueing, handoff, and
/// backpressure stay with the surrounding pipeline.
#[derive(Debug)]
pub struct ChunkStamper<C: Clock = SystemClock> {
    clock: C,

    /// Chunks stamped since construction
    stamped: u64,
}

impl ChunkStamper<SystemClock> {
    /// Create a stamper over the system clock.
    pub fn new() -> Self {
        Self::with_clock(SystemClock)
    }
}

impl Default for ChunkStamper<SystemClock> {
    fn default() -> Self {
        Self::new()
    }
}

impl<C: Clock> ChunkStamper<C> {
    /// Create a stamper over a caller-supplied clock.
    pub fn with_clock(clock: C) -> Self {
        Self { clock, stamped: 0 }
    }

    /// Stamp a shared buffer as a chunk received now.
    ///
    /// `size` must describe the valid bytes in `data`, exactly as for
    /// [`AudioChunk::new`].
    pub fn stamp(&mut self, data: Arc<[u8]>, size: u32) -> AudioChunk {
        let chunk = AudioChunk::with_timestamp(data, size, self.clock.now());
        self.stamped += 1;
        trace!(size = chunk.size, total = self.stamped, "stamped audio chunk");
        chunk
    }

    /// Stamp an owned buffer, taking its full length as valid payload.
    ///
    /// # Errors
    ///
    /// Returns [`ChunkError::BufferTooLarge`] when the buffer length does
    /// not fit the u32 size field.
    pub fn stamp_vec(&mut self, data: Vec<u8>) -> Result<AudioChunk> {
        let size =
            u32::try_from(data.len()).map_err(|_| ChunkError::BufferTooLarge { len: data.len() })?;
        Ok(self.stamp(data.into(), size))
    }

    /// Number of chunks stamped so far.
    pub fn chunks_stamped(&self) -> u64 {
        self.stamped
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::{ManualClock, sample_pcm};
    use std::time::{Duration, UNIX_EPOCH};

    #[test]
    fn stamps_follow_the_injected_clock() {
        let start = UNIX_EPOCH + Duration::from_secs(1_000);
        let clock = ManualClock::starting_at(start);
        let mut stamper = ChunkStamper::with_clock(clock.clone());

        let first = stamper.stamp(Arc::from(&b"abcd"[..]), 4);
        assert_eq!(first.received_time, start);

        clock.advance(Duration::from_millis(20));
        let second = stamper.stamp_vec(vec![0u8; 8]).unwrap();
        assert_eq!(second.received_time, start + Duration::from_millis(20));
        assert_eq!(second.size, 8);
    }

    #[test]
    fn stamper_counts_every_chunk() {
        let mut stamper = ChunkStamper::with_clock(ManualClock::at_epoch());
        assert_eq!(stamper.chunks_stamped(), 0);

        stamper.stamp(Arc::from(&b"a"[..]), 1);
        stamper.stamp_vec(vec![0u8; 2]).unwrap();
        assert_eq!(stamper.chunks_stamped(), 2);
    }

    #[test]
    fn system_clock_stamps_are_non_decreasing() {
        let mut stamper = ChunkStamper::new();
        let a = stamper.stamp(Arc::from(&b"aa"[..]), 2);
        let b = stamper.stamp(Arc::from(&b"bb"[..]), 2);
        assert!(b.received_time >= a.received_time);
    }

    #[test]
    fn stamping_logs_under_a_subscriber() {
        let _ = tracing_subscriber::fmt()
            .with_env_filter("waveline=trace")
            .with_test_writer()
            .try_init();

        let mut stamper = ChunkStamper::new();
        let chunk = stamper.stamp_vec(sample_pcm(64)).unwrap();
        assert_eq!(chunk.size, 64);
    }
}
