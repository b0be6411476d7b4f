//! Audio chunk type for the handoff between pipeline stages.

use std::sync::Arc;
use std::time::{Duration, SystemTime};

use serde::de::Deserializer;
use serde::ser::{SerializeStruct, Serializer};
use serde::{Deserialize, Serialize};

use crate::clock::{Clock, SystemClock};
use crate::error::ChunkError;

/// Shared handle for stages that pass the chunk object itself around.
pub type SharedAudioChunk = Arc<AudioChunk>;

/// One unit of raw audio payload with its receive timestamp.
///
/// This is the fundamental data unit that moves between pipeline stages.
/// The payload lives behind an `Arc`, so cloning a chunk is one atomic
/// increment plus two scalar copies and every holder reads the same
/// buffer. All fields are fixed at construction and treated as immutable
/// by every holder; the buffer is freed when the last holder drops.
#[derive(Debug, Clone)]
pub struct AudioChunk {
    /// Payload bytes (zero-copy via Arc).
    pub data: Arc<[u8]>,

    /// Count of valid bytes at the front of `data`.
    pub size: u32,

    /// Wall-clock time the payload was produced or received.
    pub received_time: SystemTime,
}

impl AudioChunk {
    /// Create a chunk stamped with the current wall-clock time.
    ///
    /// `size` must describe the number of valid bytes in `data`; the pair
    /// is stored as given, without validation. Use [`AudioChunk::try_new`]
    /// to check `size` against the buffer length instead.
    pub fn new(data: Arc<[u8]>, size: u32) -> Self {
        Self::with_timestamp(data, size, SystemClock.now())
    }

    /// Create a chunk carrying an explicit receive timestamp.
    ///
    /// For receive stages that must preserve an upstream timestamp, and
    /// for tests that need deterministic construction. The instant is
    /// stored exactly; no plausibility check is applied.
    pub fn with_timestamp(data: Arc<[u8]>, size: u32, received_time: SystemTime) -> Self {
        Self { data, size, received_time }
    }

    /// Checked variant of [`AudioChunk::new`].
    ///
    /// # Errors
    ///
    /// Returns [`ChunkError::SizeExceedsBuffer`] when `size` is larger
    /// than the buffer.
    pub fn try_new(data: Arc<[u8]>, size: u32) -> crate::Result<Self> {
        Self::try_with_timestamp(data, size, SystemClock.now())
    }

    /// Checked variant of [`AudioChunk::with_timestamp`].
    ///
    /// # Errors
    ///
    /// Returns [`ChunkError::SizeExceedsBuffer`] when `size` is larger
    /// than the buffer.
    pub fn try_with_timestamp(
        data: Arc<[u8]>,
        size: u32,
        received_time: SystemTime,
    ) -> crate::Result<Self> {
        if size as usize > data.len() {
            return Err(ChunkError::SizeExceedsBuffer { size, capacity: data.len() });
        }
        Ok(Self { data, size, received_time })
    }

    /// Create a chunk from an owned buffer, taking the whole buffer as
    /// valid payload and stamping the current wall-clock time.
    ///
    /// # Errors
    ///
    /// Returns [`ChunkError::BufferTooLarge`] when the buffer length does
    /// not fit the u32 size field.
    pub fn from_vec(data: Vec<u8>) -> crate::Result<Self> {
        let size =
            u32::try_from(data.len()).map_err(|_| ChunkError::BufferTooLarge { len: data.len() })?;
        Ok(Self::new(data.into(), size))
    }

    /// The valid payload prefix, `&data[..size]`.
    ///
    /// # Panics
    ///
    /// Panics when the chunk was built through an unchecked constructor
    /// with a `size` larger than its buffer.
    pub fn payload(&self) -> &[u8] {
        &self.data[..self.size as usize]
    }

    /// Whether the chunk carries no valid bytes.
    pub fn is_empty(&self) -> bool {
        self.size == 0
    }

    /// Elapsed time between `received_time` and `now`.
    ///
    /// Saturates to zero when `now` reads earlier than the chunk's
    /// timestamp, so latency accounting stays well-defined under clock
    /// skew and future-dated chunks.
    pub fn latency_at(&self, now: SystemTime) -> Duration {
        now.duration_since(self.received_time).unwrap_or(Duration::ZERO)
    }

    /// Wrap the chunk in a [`SharedAudioChunk`] handle.
    pub fn into_shared(self) -> SharedAudioChunk {
        Arc::new(self)
    }
}

// Arc<[u8]> has no derive path, so the chunk round-trips through an
// explicit three-field struct form.
impl Serialize for AudioChunk {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let mut state = serializer.serialize_struct("AudioChunk", 3)?;
        state.serialize_field("data", &self.data[..])?;
        state.serialize_field("size", &self.size)?;
        state.serialize_field("received_time", &self.received_time)?;
        state.end()
    }
}

#[derive(Deserialize)]
#[serde(rename = "AudioChunk")]
struct ChunkFields {
    data: Vec<u8>,
    size: u32,
    received_time: SystemTime,
}

impl<'de> Deserialize<'de> for AudioChunk {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let fields = ChunkFields::deserialize(deserializer)?;
        Ok(AudioChunk::with_timestamp(fields.data.into(), fields.size, fields.received_time))
    }
}
