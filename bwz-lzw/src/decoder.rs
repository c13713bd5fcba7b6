//! LZW decoder (decompression).

use crate::{DICT_LIMIT, END_OF_DATA, FIRST_CODE, MAX_CODE_WIDTH, START_CODE_WIDTH};
use bwz_core::{BitReader, BwzError, Result};

/// LZW decoder driven by an explicit code-to-bytes table.
#[derive(Debug)]
pub struct LzwDecoder {
    /// Code table: code -> byte sequence. Slot 256 stays empty for the
    /// sentinel so codes index the table directly.
    table: Vec<Vec<u8>>,
    /// Next code the encoder will assign.
    next_code: u32,
    /// Current code width in bits.
    width: u8,
}

impl LzwDecoder {
    /// Create a new decoder with the 256 single-byte literals primed.
    pub fn new() -> Self {
        let mut decoder = Self {
            table: Vec::new(),
            next_code: FIRST_CODE,
            width: START_CODE_WIDTH,
        };
        decoder.reset();
        decoder
    }

    /// Decode a bit-packed stream of variable-width codes.
    ///
    /// The table mirrors the encoder's dictionary one entry behind: each
    /// decoded code registers the previous entry extended by the current
    /// entry's first byte. A code equal to the not-yet-created
    /// `next_code` is the self-referential case, where the encoder used
    /// an entry in the same step that created it; the missing entry is
    /// synthesized as the previous entry plus its own first byte. The
    /// width schedule must match the encoder's exactly, so the table
    /// drives widening with the same growth rule.
    ///
    /// # Errors
    ///
    /// Returns [`BwzError::InvalidCode`] for a code with no table entry
    /// and [`BwzError::UnexpectedEof`] if the stream ends before the
    /// sentinel. Streams not produced by the matching encoder are
    /// otherwise undefined and may decode to garbage.
    pub fn decode(&mut self, input: &[u8]) -> Result<Vec<u8>> {
        self.reset();

        let mut reader = BitReader::new(input);
        let mut output = Vec::new();

        let mut current = reader.read_bits(self.width)?;
        if current == END_OF_DATA {
            return Ok(output);
        }
        output.extend_from_slice(self.entry(current)?);

        loop {
            let code = reader.read_bits(self.width)?;
            if code == END_OF_DATA {
                break;
            }

            if code == self.next_code {
                // The encoder referenced the entry it was about to
                // create: previous entry plus its own first byte.
                let previous = self.entry(current)?;
                let mut synthesized = previous.to_vec();
                synthesized.push(previous[0]);
                output.extend_from_slice(&synthesized);
                self.register(synthesized);
            } else {
                let bytes = self.entry(code)?.to_vec();
                output.extend_from_slice(&bytes);

                let previous = self.entry(current)?;
                let mut extended = previous.to_vec();
                extended.push(bytes[0]);
                self.register(extended);
            }

            current = code;
        }

        Ok(output)
    }

    /// Reset the table to the 256 single-byte literals.
    pub fn reset(&mut self) {
        self.table = (0..=u8::MAX).map(|byte| vec![byte]).collect();
        self.table.push(Vec::new());
        self.next_code = FIRST_CODE;
        self.width = START_CODE_WIDTH;
    }

    fn entry(&self, code: u32) -> Result<&[u8]> {
        if code == END_OF_DATA || code as usize >= self.table.len() {
            return Err(BwzError::InvalidCode(code));
        }
        Ok(&self.table[code as usize])
    }

    /// Register `entry` under `next_code` and advance the width schedule
    /// in lockstep with the encoder. The table reaches a new code one
    /// step after the encoder does, so the width check runs against the
    /// already-incremented counter.
    fn register(&mut self, entry: Vec<u8>) {
        if self.next_code >= DICT_LIMIT {
            return;
        }
        debug_assert_eq!(self.table.len(), self.next_code as usize);
        self.table.push(entry);
        self.next_code += 1;
        if self.next_code >= 1 << self.width && self.width < MAX_CODE_WIDTH {
            self.width += 1;
        }
    }
}

impl Default for LzwDecoder {
    fn default() -> Self {
        Self::new()
    }
}
