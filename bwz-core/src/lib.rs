//! # BWZ Core
//!
//! Core components for the BWZ compression pipeline.
//!
//! This crate provides the building blocks shared by the pipeline stages:
//!
//! - [`bitstream`]: bit-level I/O for variable-width LZW codes
//! - [`error`]: error types
//!
//! ## Architecture
//!
//! BWZ is a small layered pipeline:
//!
//! ```text
//! ┌─────────────────────────────────────────────┐
//! │ CLI                                         │
//! │     file in/out, mode selection             │
//! ├─────────────────────────────────────────────┤
//! │ Codec                                       │
//! │     LZW (bwz-lzw), BWT (bwz-bwt)            │
//! ├─────────────────────────────────────────────┤
//! │ BitStream (this crate)                      │
//! │     BitWriter/BitReader, errors             │
//! └─────────────────────────────────────────────┘
//! ```
//!
//! ## Example
//!
//! ```rust
//! use bwz_core::bitstream::{BitReader, BitWriter};
//!
//! let mut writer = BitWriter::new();
//! writer.write_bits(0x1A5, 9).unwrap();
//! let data = writer.into_vec().unwrap();
//!
//! let mut reader = BitReader::new(&data);
//! assert_eq!(reader.read_bits(9).unwrap(), 0x1A5);
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![forbid(unsafe_code)]

pub mod bitstream;
pub mod error;

// Re-exports for convenience
pub use bitstream::{BitReader, BitWriter};
pub use error::{BwzError, Result};
