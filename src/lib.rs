//! Timestamped, shared-ownership audio chunks for processing pipelines.
//!
//! Waveline provides the handoff currency for audio pipelines: a passive,
//! immutable-by-convention [`AudioChunk`] carrying a shared byte buffer,
//! a valid-byte count, and the wall-clock instant the payload was
//! produced or received.
//!
//! # Features
//!
//! - **Zero-copy sharing**: payloads live behind `Arc`, so every stage
//!   holds the same buffer without copying
//! - **Two timestamp modes**: stamp "now" at construction, or preserve an
//!   upstream receive time exactly
//! - **Injectable clock**: route "now" through the [`Clock`] seam for
//!   deterministic tests
//! - **No pipeline policy**: capture, codecs, transport, and queueing
//!   belong to the surrounding stages — chunks only carry bytes and time
//!
//! # Quick Start
//!
//! ```rust
//! use waveline::{AudioChunk, ChunkStamper};
//!
//! // A capture stage hands off a filled buffer.
//! let chunk = AudioChunk::from_vec(vec![0u8; 3200])?;
//! assert_eq!(chunk.size, 3200);
//!
//! // Downstream stages share the same payload without copying.
//! let for_encoder = chunk.clone();
//! assert_eq!(for_encoder.payload().len(), 3200);
//!
//! // Producers that emit many chunks keep one stamper per source.
//! let mut stamper = ChunkStamper::new();
//! let next = stamper.stamp_vec(vec![0u8; 3200])?;
//! assert_eq!(next.size, chunk.size);
//! # Ok::<(), waveline::ChunkError>(())
//! ```

// Core types and error handling
mod clock;
mod error;
mod stamper;
#[cfg_attr(any(test, feature = "benchmark"), path = "test_utils.rs")]
#[cfg(any(test, feature = "benchmark"))]
pub mod test_utils;
pub mod types;

// Core exports
pub use clock::{Clock, SystemClock};
pub use error::{ChunkError, Result};
pub use stamper::ChunkStamper;
pub use types::{AudioChunk, SharedAudioChunk};
