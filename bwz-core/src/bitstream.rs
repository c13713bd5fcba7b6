//! Bit-level I/O for variable-width LZW codes.
//!
//! Codes are packed LSB-first (Least Significant Bit first) within each
//! byte: the low bit of a code lands in the lowest unused bit of the
//! current output byte. The stream has no notion of a width schedule;
//! callers pass the width for every code, and reads must use the exact
//! width sequence the codes were written with.
//!
//! # Example
//!
//! ```
//! use bwz_core::bitstream::{BitReader, BitWriter};
//!
//! let mut writer = BitWriter::new();
//! writer.write_bits(0b101, 3).unwrap();
//! writer.write_bits(0b1100, 4).unwrap();
//! let data = writer.into_vec().unwrap();
//!
//! let mut reader = BitReader::new(&data);
//! assert_eq!(reader.read_bits(3).unwrap(), 0b101);
//! assert_eq!(reader.read_bits(4).unwrap(), 0b1100);
//! ```

use crate::error::{BwzError, Result};

/// LSB-first bit writer over a growable byte buffer.
#[derive(Debug)]
pub struct BitWriter {
    /// Output buffer.
    output: Vec<u8>,
    /// Bit accumulator (LSB-first).
    buffer: u64,
    /// Number of valid bits in the accumulator.
    bits_in_buffer: u8,
}

impl BitWriter {
    /// Create a new empty bit writer.
    pub fn new() -> Self {
        Self {
            output: Vec::new(),
            buffer: 0,
            bits_in_buffer: 0,
        }
    }

    /// Append the low `count` bits of `value`, least significant bit first.
    pub fn write_bits(&mut self, value: u32, count: u8) -> Result<()> {
        if count == 0 || count > 32 {
            return Err(BwzError::InvalidBitWidth(count));
        }

        let mask = if count == 32 {
            u32::MAX
        } else {
            (1u32 << count) - 1
        };
        self.buffer |= u64::from(value & mask) << self.bits_in_buffer;
        self.bits_in_buffer += count;

        // Flush complete bytes from the low end
        while self.bits_in_buffer >= 8 {
            self.output.push((self.buffer & 0xFF) as u8);
            self.buffer >>= 8;
            self.bits_in_buffer -= 8;
        }

        Ok(())
    }

    /// Flush remaining bits, padding the final byte with zeros.
    pub fn flush(&mut self) -> Result<()> {
        if self.bits_in_buffer > 0 {
            self.output.push((self.buffer & 0xFF) as u8);
            self.buffer = 0;
            self.bits_in_buffer = 0;
        }
        Ok(())
    }

    /// Total bits written so far.
    pub fn bits_written(&self) -> u64 {
        (self.output.len() as u64) * 8 + u64::from(self.bits_in_buffer)
    }

    /// Flush and return the packed bytes.
    pub fn into_vec(mut self) -> Result<Vec<u8>> {
        self.flush()?;
        Ok(self.output)
    }
}

impl Default for BitWriter {
    fn default() -> Self {
        Self::new()
    }
}

/// LSB-first bit reader over a byte slice.
#[derive(Debug)]
pub struct BitReader<'a> {
    /// Input data.
    data: &'a [u8],
    /// Current byte position.
    byte_pos: usize,
    /// Bit accumulator (LSB-first).
    buffer: u64,
    /// Number of valid bits in the accumulator.
    bits_in_buffer: u8,
    /// Total bits read (for error reporting).
    total_bits_read: u64,
}

impl<'a> BitReader<'a> {
    /// Create a new bit reader over `data`.
    pub fn new(data: &'a [u8]) -> Self {
        Self {
            data,
            byte_pos: 0,
            buffer: 0,
            bits_in_buffer: 0,
            total_bits_read: 0,
        }
    }

    /// Fill the accumulator with at least `count` bits.
    #[inline]
    fn fill_buffer(&mut self, count: u8) -> Result<()> {
        while self.bits_in_buffer < count && self.byte_pos < self.data.len() {
            let byte = self.data[self.byte_pos];
            self.byte_pos += 1;

            self.buffer |= u64::from(byte) << self.bits_in_buffer;
            self.bits_in_buffer += 8;
        }

        if self.bits_in_buffer < count {
            return Err(BwzError::UnexpectedEof {
                position: self.total_bits_read,
            });
        }

        Ok(())
    }

    /// Read the next `count` bits, least significant bit first.
    pub fn read_bits(&mut self, count: u8) -> Result<u32> {
        if count == 0 || count > 32 {
            return Err(BwzError::InvalidBitWidth(count));
        }

        self.fill_buffer(count)?;

        let mask = if count == 32 {
            u64::from(u32::MAX)
        } else {
            (1u64 << count) - 1
        };
        let value = (self.buffer & mask) as u32;

        self.buffer >>= count;
        self.bits_in_buffer -= count;
        self.total_bits_read += u64::from(count);

        Ok(value)
    }

    /// Total bits read so far.
    pub fn bits_read(&self) -> u64 {
        self.total_bits_read
    }
}
