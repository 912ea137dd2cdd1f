//! Custom error types for the lzw12 crate.

use std::path::PathBuf;

use thiserror::Error;

use super::models::Codeword;

/// The primary error type for all operations in this crate.
#[derive(Debug, Error)]
pub enum LzwError {
    /// An error originating from I/O operations on the input source.
    #[error("I/O error: {0:?}")]
    Io(#[from] std::io::Error),

    /// The compressed file could not be opened. No decode is attempted.
    #[error("No such file: {}: {source}", .path.display())]
    FileOpen {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The input ended one byte into a chunk, losing a partial codeword.
    ///
    /// Only reported when strict decoding is enabled; otherwise the byte is dropped.
    #[error("Truncated input: dangling byte at offset {offset}")]
    TruncatedInput { offset: u64 },

    /// A codeword is neither in the dictionary nor the next code to be assigned.
    #[error("Corrupt stream: code {code} at position {position} is undefined (next code is {next_code})")]
    CorruptStream {
        code: Codeword,
        next_code: usize,
        position: u64,
    },

    /// A codeword after the first was decoded without a previous string.
    #[error("Corrupt stream: no previous string for code at position {position}")]
    MissingPrefix { position: u64 },

    /// The decoded output grew past the configured limit.
    #[error("Decoded output exceeds limit of {limit} bytes")]
    OutputLimit { limit: usize },
}

/// A convenience `Result` type alias using the crate's `LzwError` type.
pub type Result<T> = std::result::Result<T, LzwError>;
