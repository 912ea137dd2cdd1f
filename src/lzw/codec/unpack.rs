//! Recovers 12-bit codewords from an 8-bit byte stream.
//!
//! Layout on disk:
//! - Full chunk (3 bytes): `AAAAAAAA AAAABBBB BBBBBBBB`, two codes.
//! - Trailing chunk (2 bytes, odd code count only): a plain big-endian `u16`.
//!   It is not nibble-split and not masked to 12 bits.
//!
//! A single byte left over at the end cannot form a code and is dropped, or
//! reported as truncation in strict mode.

use std::io::Read;

use byteorder::{BigEndian, ByteOrder};
use log::{trace, warn};

use crate::lzw::types::error::{LzwError, Result};
use crate::lzw::types::models::{Codes, Codeword, CHUNK_LEN, TRAILING_LEN};
use crate::lzw::utils;

const CODE_MASK: u32 = 0xFFF;

/// Splits a byte source into codewords, one chunk at a time.
///
/// The sequence is finite and not restartable: once [`Codes::Exhausted`] or
/// [`Codes::Single`] has been returned, every later call yields `Exhausted`.
#[derive(Debug)]
pub struct CodeUnpacker<R> {
    reader: R,
    strict: bool,
    finished: bool,
    truncated: bool,
    bytes_read: u64,
}

impl<R: Read> CodeUnpacker<R> {
    pub fn new(reader: R) -> Self {
        Self {
            reader,
            strict: false,
            finished: false,
            truncated: false,
            bytes_read: 0,
        }
    }

    /// Report a dangling final byte as an error instead of dropping it.
    pub fn strict(mut self, strict: bool) -> Self {
        self.strict = strict;
        self
    }

    /// Reads the next chunk and unpacks it.
    ///
    /// # Errors
    /// Returns [`LzwError::Io`] if the source fails, and
    /// [`LzwError::TruncatedInput`] in strict mode when one byte is left over.
    pub fn next_codes(&mut self) -> Result<Codes> {
        if self.finished {
            return Ok(Codes::Exhausted);
        }

        let mut chunk = [0u8; CHUNK_LEN];
        let filled = match utils::read_up_to(&mut self.reader, &mut chunk) {
            Ok(n) => n,
            Err(e) => {
                self.finished = true;
                return Err(e.into());
            }
        };
        self.bytes_read += filled as u64;

        match filled {
            CHUNK_LEN => {
                let word = BigEndian::read_u24(&chunk);
                let first = (word >> 12) as Codeword;
                let second = (word & CODE_MASK) as Codeword;
                trace!("Chunk {:02x?} -> codes {} {}", chunk, first, second);
                Ok(Codes::Pair(first, second))
            }
            TRAILING_LEN => {
                self.finished = true;
                let code = BigEndian::read_u16(&chunk[..TRAILING_LEN]);
                trace!("Trailing pair {:02x?} -> code {}", &chunk[..TRAILING_LEN], code);
                Ok(Codes::Single(code))
            }
            0 => {
                self.finished = true;
                Ok(Codes::Exhausted)
            }
            _ => {
                self.finished = true;
                self.truncated = true;
                let offset = self.bytes_read - 1;
                if self.strict {
                    return Err(LzwError::TruncatedInput { offset });
                }
                warn!("Dropping dangling byte {:#04x} at offset {}", chunk[0], offset);
                Ok(Codes::Exhausted)
            }
        }
    }

    /// Whether the input has been fully consumed.
    pub fn is_finished(&self) -> bool {
        self.finished
    }

    /// Whether a dangling byte was dropped at the end of the input.
    pub fn truncated(&self) -> bool {
        self.truncated
    }

    /// Total bytes consumed from the source so far.
    pub fn bytes_read(&self) -> u64 {
        self.bytes_read
    }
}
