//! Error types for BWZ operations.

use std::io;
use thiserror::Error;

/// The main error type for BWZ operations.
#[derive(Debug, Error)]
pub enum BwzError {
    /// I/O error from underlying reader/writer.
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// Input sequence is empty where a non-empty one is required.
    ///
    /// Both the transform and the compressor operate on whole byte
    /// sequences; an empty block has no rotation index to record.
    #[error("Input must not be empty")]
    EmptyInput,

    /// Rotation index passed to the inverse transform is out of range.
    #[error("End position {position} out of range for length {len}")]
    PositionOutOfRange {
        /// The invalid rotation index.
        position: u32,
        /// Length of the transformed sequence.
        len: usize,
    },

    /// Invalid LZW code encountered during decoding.
    #[error("Invalid LZW code: {0}")]
    InvalidCode(u32),

    /// Invalid bit width requested from the bitstream.
    #[error("Invalid bit width: {0} (must be 1-32)")]
    InvalidBitWidth(u8),

    /// Compressed stream ended before the end-of-data code.
    #[error("Unexpected end of data at bit position {position}")]
    UnexpectedEof {
        /// Bit position where the stream ran out.
        position: u64,
    },

    /// Decompressed container is too short to carry the rotation trailer.
    #[error("Payload of {len} bytes is too short for the 4-byte rotation trailer")]
    TruncatedPayload {
        /// Length of the truncated payload.
        len: usize,
    },
}

/// Result type alias for BWZ operations.
pub type Result<T> = std::result::Result<T, BwzError>;
