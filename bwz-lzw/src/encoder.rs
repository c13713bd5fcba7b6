//! LZW encoder (compression).

use crate::trie::PrefixTrie;
use crate::{DICT_LIMIT, END_OF_DATA, FIRST_CODE, START_CODE_WIDTH};
use bwz_core::{BitWriter, BwzError, Result};

/// LZW encoder over a prefix-trie dictionary.
#[derive(Debug)]
pub struct LzwEncoder {
    /// Dictionary index: longest previously seen run -> code.
    trie: PrefixTrie,
    /// Next code to assign to a new dictionary entry.
    next_code: u32,
    /// Current code width in bits.
    width: u8,
}

impl LzwEncoder {
    /// Create a new encoder with the 256 single-byte literals primed.
    pub fn new() -> Self {
        let mut encoder = Self {
            trie: PrefixTrie::new(),
            next_code: FIRST_CODE,
            width: START_CODE_WIDTH,
        };
        encoder.reset();
        encoder
    }

    /// Encode `input` into a bit-packed stream of variable-width codes.
    ///
    /// # Algorithm
    ///
    /// The trie cursor tracks the longest dictionary run matching the
    /// input at the current position. Each byte either extends the match
    /// or, on a miss, the matched run's code is emitted, the run plus
    /// the new byte is registered under the next free code, and matching
    /// restarts at the new byte. The code width grows by one bit the
    /// moment an assigned code no longer fits, and the stream ends with
    /// the final match's code followed by the end-of-data sentinel.
    ///
    /// # Errors
    ///
    /// Returns [`BwzError::EmptyInput`] if `input` is empty.
    pub fn encode(&mut self, input: &[u8]) -> Result<Vec<u8>> {
        if input.is_empty() {
            return Err(BwzError::EmptyInput);
        }
        self.reset();

        let mut writer = BitWriter::new();
        self.trie.descend(input[0]);

        for &byte in &input[1..] {
            if self.trie.descend(byte) {
                continue;
            }

            writer.write_bits(self.trie.cursor_code(), self.width)?;
            if self.next_code < DICT_LIMIT {
                self.trie.add_at_cursor(byte, self.next_code);
                if self.next_code >= 1 << self.width {
                    self.width += 1;
                }
                self.next_code += 1;
            }
            self.trie.reset_cursor();
            self.trie.descend(byte);
        }

        writer.write_bits(self.trie.cursor_code(), self.width)?;
        writer.write_bits(END_OF_DATA, self.width)?;

        writer.into_vec()
    }

    /// Reset the dictionary to the 256 single-byte literals.
    pub fn reset(&mut self) {
        let mut trie = PrefixTrie::new();
        for byte in 0..=u8::MAX {
            trie.add_at_cursor(byte, u32::from(byte));
        }
        self.trie = trie;
        self.next_code = FIRST_CODE;
        self.width = START_CODE_WIDTH;
    }
}

impl Default for LzwEncoder {
    fn default() -> Self {
        Self::new()
    }
}
