//! Fixed-width 12-bit LZW decompression.
//!
//! # Module Organization
//!
//! - [`types`]: Error type, codeword type, options and statistics
//! - [`codec`]: Codeword unpacking and the dictionary decode step
//! - [`iter`]: Tagged codeword iterator over a byte source
//! - [`reader`]: The decode driver and file entry points
//!
//! # Data Flow
//!
//! ```text
//! bytes ─► CodeUnpacker ─► Codewords ─► DictionaryDecoder ─► Decompressor ─► output
//!          (3 bytes → 2)   (tagged)     (table + reset)      (accumulate)
//! ```

pub mod codec;
pub mod iter;
pub mod reader;
pub mod types;
mod utils;

pub use reader::{decompress, decompress_file, decompress_with, open_input, Decompressor};
pub use types::error::{LzwError, Result};
