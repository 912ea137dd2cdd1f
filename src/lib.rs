//! # lzw12
//!
//! A decompressor for fixed-width 12-bit LZW streams.
//!
//! Codes are packed two per three bytes; a stream with an odd number of codes
//! ends in a two-byte big-endian code. The dictionary holds up to 4096 entries
//! and is reset to its 256 single-byte roots when full.
//!
//! ```
//! let output = lzw12::decompress(&[0x00, 0x41][..]).unwrap();
//! assert_eq!(output, b"A");
//! ```
pub mod lzw;

// Re-export the main types for convenience
pub use lzw::{
    codec::{
        dictionary::{DictionaryDecoder, SymbolTable},
        unpack::CodeUnpacker,
    },
    decompress, decompress_file, decompress_with,
    iter::Codewords,
    open_input,
    types::models::{
        Codes, Codeword, DecodeOptions, DecodeStats, Decoded, TaggedCode, INIT_DICT_SIZE,
        MAX_DICT_SIZE,
    },
    Decompressor, LzwError, Result,
};
