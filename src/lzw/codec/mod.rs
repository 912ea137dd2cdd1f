//! Codec layer: pure bit and dictionary transformations.
//!
//! # Submodules
//!
//! - [`unpack`][]: 12-bit codeword recovery from packed bytes
//! - [`dictionary`][]: Symbol table arena and the LZW decode step

pub mod dictionary;
pub mod unpack;
