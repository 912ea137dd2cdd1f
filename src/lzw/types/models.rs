//! Core data structures shared by the unpacker, the dictionary and the driver.
//!
//! This module defines:
//! - The codeword type and the fixed dictionary geometry
//! - The result of a single unpacking step
//! - Decode options and run statistics

/// A 12-bit index into the symbol table.
///
/// Stored in a `u16` because the trailing-pair codeword is not masked and can
/// carry up to 16 bits from a malformed file.
pub type Codeword = u16;

/// Number of single-byte entries the dictionary starts (and restarts) with.
pub const INIT_DICT_SIZE: usize = 256;

/// Capacity of a 12-bit dictionary. Reaching it triggers a reset.
pub const MAX_DICT_SIZE: usize = 4096;

/// Bytes per full chunk: two 12-bit codes packed into 24 bits.
pub const CHUNK_LEN: usize = 3;

/// Bytes in the trailing chunk of a stream with an odd number of codes.
pub const TRAILING_LEN: usize = 2;

/// The outcome of one unpacking step.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Codes {
    /// A full three-byte chunk.
    Pair(Codeword, Codeword),
    /// Exactly two bytes remained before end of input.
    Single(Codeword),
    /// No complete data remains. Terminal.
    Exhausted,
}

impl Codes {
    /// Number of codewords carried by this step.
    pub fn len(&self) -> usize {
        match self {
            Codes::Pair(..) => 2,
            Codes::Single(_) => 1,
            Codes::Exhausted => 0,
        }
    }

    pub fn is_empty(&self) -> bool {
        matches!(self, Codes::Exhausted)
    }
}

/// A codeword tagged with whether it is the last one the input can yield.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TaggedCode {
    pub code: Codeword,
    pub is_last: bool,
}

/// Options controlling a decode run.
///
/// The defaults reproduce the lenient behaviour: a dangling byte at the end of
/// the input is dropped with a warning and the output is unbounded.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DecodeOptions {
    /// Report a dangling byte as [`LzwError::TruncatedInput`](super::error::LzwError::TruncatedInput).
    pub strict: bool,
    /// Abort with [`LzwError::OutputLimit`](super::error::LzwError::OutputLimit)
    /// once the output would grow past this many bytes.
    pub max_output: Option<usize>,
}

impl DecodeOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn strict(mut self, strict: bool) -> Self {
        self.strict = strict;
        self
    }

    pub fn max_output(mut self, limit: Option<usize>) -> Self {
        self.max_output = limit;
        self
    }
}

/// Counters collected over one decode run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DecodeStats {
    /// Bytes consumed from the input source.
    pub bytes_in: u64,
    /// Codewords decoded.
    pub codes: u64,
    /// Times the dictionary was reset after reaching capacity.
    pub resets: u64,
    /// Whether a dangling byte was dropped at the end of the input.
    pub truncated: bool,
}

/// The result of a completed decode run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Decoded {
    pub data: Vec<u8>,
    pub stats: DecodeStats,
}
