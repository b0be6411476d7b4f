//! Core types for audio chunk handoff.
//!
//! This module provides the data structure that moves payloads between
//! pipeline stages:
//! - [`AudioChunk`] is one timestamped unit of payload with zero-copy
//!   binary data
//! - [`SharedAudioChunk`] is the reference-counted handle for stages
//!   that share the chunk object itself
//!
//! ## Performance characteristics
//!
//! - Zero-copy payload sharing via Arc
//! - Chunk clone is one atomic increment plus two scalar copies
//! - Field reads are pure and lock-free; safe from any thread once
//!   constructed
//!
//! ## Usage example
//!
//! ```rust
//! use waveline::types::AudioChunk;
//! use std::sync::Arc;
//! use std::time::{Duration, UNIX_EPOCH};
//!
//! // A receive stage preserves the upstream timestamp.
//! let upstream = UNIX_EPOCH + Duration::from_secs(1_722_470_400);
//! let data: Arc<[u8]> = Arc::from(&[0u8; 3200][..]);
//! let chunk = AudioChunk::with_timestamp(data, 3200, upstream);
//!
//! // A forwarding stage holds the same payload without copying.
//! let forwarded = chunk.clone();
//! assert!(Arc::ptr_eq(&chunk.data, &forwarded.data));
//! assert_eq!(forwarded.received_time, upstream);
//! ```

mod chunk;

// Re-export all public types
pub use chunk::{AudioChunk, SharedAudioChunk};
