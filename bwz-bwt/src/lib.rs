//! # BWZ BWT
//!
//! Burrows-Wheeler Transform built on a cyclic-rotation suffix array.
//!
//! The BWT is a reversible permutation of a byte sequence: sorting all
//! cyclic rotations and taking the last column groups repeated substrings
//! together, which makes the data far more compressible for a downstream
//! dictionary coder. The transform keeps no extra data beyond the
//! permuted bytes and a single rotation index, and the inverse
//! reconstructs the input exactly.
//!
//! ## Example
//!
//! ```
//! let (transformed, end_position) = bwz_bwt::transform(b"BANANA").unwrap();
//! assert_eq!(transformed, b"NNBAAA");
//! assert_eq!(end_position, 3);
//!
//! let original = bwz_bwt::inverse_transform(&transformed, end_position).unwrap();
//! assert_eq!(original, b"BANANA");
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![forbid(unsafe_code)]

pub mod suffix_array;

use bwz_core::{BwzError, Result};

/// Perform the Burrows-Wheeler Transform.
///
/// Returns the last column of the sorted rotation matrix together with
/// `end_position`, the row at which the unrotated input appears. That
/// index is required to invert the transform.
///
/// # Errors
///
/// Returns [`BwzError::EmptyInput`] if `data` is empty: an empty block
/// has no rotation index to record.
pub fn transform(data: &[u8]) -> Result<(Vec<u8>, u32)> {
    if data.is_empty() {
        return Err(BwzError::EmptyInput);
    }

    let suffix_array = suffix_array::build(data);

    let mut transformed = Vec::with_capacity(data.len());
    let mut end_position = 0u32;
    for (i, &start) in suffix_array.iter().enumerate() {
        if start != 0 {
            transformed.push(data[start - 1]);
        } else {
            // The rotation starting at 0 is the original string; its
            // predecessor column wraps to the last byte.
            transformed.push(data[data.len() - 1]);
            end_position = i as u32;
        }
    }

    Ok((transformed, end_position))
}

/// Invert the Burrows-Wheeler Transform.
///
/// Reconstructs the original sequence from the transformed bytes and the
/// `end_position` returned by [`transform`]. The walk uses the
/// last-to-first column mapping: a stable sort of positions keyed by byte
/// value recovers, for each row, the row it maps to under one cyclic
/// shift of the rotation matrix.
///
/// # Errors
///
/// Returns [`BwzError::EmptyInput`] if `data` is empty, and
/// [`BwzError::PositionOutOfRange`] if `end_position` is not a valid
/// index into `data`.
pub fn inverse_transform(data: &[u8], end_position: u32) -> Result<Vec<u8>> {
    if data.is_empty() {
        return Err(BwzError::EmptyInput);
    }
    if end_position as usize >= data.len() {
        return Err(BwzError::PositionOutOfRange {
            position: end_position,
            len: data.len(),
        });
    }

    let n = data.len();

    // Last-to-first mapping: stable sort of row indices by their byte.
    let mut positions: Vec<usize> = (0..n).collect();
    positions.sort_by_key(|&i| data[i]);

    // The first column of the rotation matrix is the bytes in sorted order.
    let mut sorted = data.to_vec();
    sorted.sort_unstable();

    let mut original = Vec::with_capacity(n);
    let mut position = end_position as usize;
    for _ in 0..n {
        original.push(sorted[position]);
        position = positions[position];
    }

    Ok(original)
}
