//! Error types for chunk construction.
//!
//! The chunk type itself polices nothing: the permissive constructors
//! store exactly what they are given, and a mismatched (buffer, size)
//! pair only surfaces where the payload is read. The variants here back
//! the opt-in checked constructors and the owned-buffer conversions,
//! where the 32-bit size field makes failure genuinely possible.

use thiserror::Error;

/// Result type alias for chunk operations.
pub type Result<T, E = ChunkError> = std::result::Result<T, E>;

/// Main error type for chunk construction.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum ChunkError {
    /// A checked constructor was handed a size larger than its buffer.
    #[error("declared size {size} exceeds buffer capacity {capacity}")]
    SizeExceedsBuffer { size: u32, capacity: usize },

    /// An owned buffer is too long to describe with the u32 size field.
    #[error("buffer length {len} does not fit in the u32 size field")]
    BufferTooLarge { len: usize },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_messages_carry_both_bounds() {
        let err = ChunkError::SizeExceedsBuffer { size: 640, capacity: 320 };
        assert_eq!(err.to_string(), "declared size 640 exceeds buffer capacity 320");

        let err = ChunkError::BufferTooLarge { len: usize::MAX };
        assert!(err.to_string().contains(&usize::MAX.to_string()));
    }
}
