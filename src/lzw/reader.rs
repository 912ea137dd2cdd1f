use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;

use log::info;

use super::codec::dictionary::DictionaryDecoder;
use super::codec::unpack::CodeUnpacker;
use super::iter::Codewords;
use super::types::error::{LzwError, Result};
use super::types::models::{DecodeOptions, DecodeStats, Decoded};

/// Drives a full decode run: unpacks codewords, decodes them in order and
/// collects the output.
///
/// Every call to [`decompress`](Self::decompress) starts from a fresh
/// dictionary, so the same input always yields the same output.
#[derive(Debug, Clone, Default)]
pub struct Decompressor {
    options: DecodeOptions,
}

impl Decompressor {
    pub fn new(options: DecodeOptions) -> Self {
        Self { options }
    }

    pub fn options(&self) -> &DecodeOptions {
        &self.options
    }

    /// Decodes the whole of `reader`.
    ///
    /// The output is returned only once the input is exhausted; nothing is
    /// emitted for a run that fails part way.
    ///
    /// # Errors
    /// Returns an error if:
    /// - The source fails to read
    /// - A codeword is undefined for the current dictionary
    /// - Strict mode is on and the input ends one byte into a chunk
    /// - The output would exceed `max_output`
    pub fn decompress<R: Read>(&self, reader: R) -> Result<Decoded> {
        let unpacker = CodeUnpacker::new(reader).strict(self.options.strict);
        let mut codewords = Codewords::new(unpacker);
        let mut decoder = DictionaryDecoder::new();

        let mut output = Vec::new();
        let mut last = Vec::new();

        for tagged in &mut codewords {
            let tagged = tagged?;
            let fragment = decoder.decode(tagged.code, &last)?;

            if let Some(limit) = self.options.max_output {
                if output.len() + fragment.len() > limit {
                    return Err(LzwError::OutputLimit { limit });
                }
            }
            output.extend_from_slice(&fragment);
            last = fragment;
        }

        let unpacker = codewords.unpacker();
        let stats = DecodeStats {
            bytes_in: unpacker.bytes_read(),
            codes: decoder.position(),
            resets: decoder.resets(),
            truncated: unpacker.truncated(),
        };
        info!(
            "Decoded {} codes ({} bytes in) into {} bytes, {} dictionary resets",
            stats.codes,
            stats.bytes_in,
            output.len(),
            stats.resets
        );

        Ok(Decoded { data: output, stats })
    }

    /// Opens `path` and decodes its contents.
    ///
    /// # Errors
    /// Returns [`LzwError::FileOpen`] if the file cannot be opened, in which case
    /// no decode is attempted, plus any error from [`decompress`](Self::decompress).
    pub fn decompress_file(&self, path: impl AsRef<Path>) -> Result<Decoded> {
        let input = open_input(path)?;
        self.decompress(input)
    }
}

/// Opens a compressed file for reading.
///
/// # Errors
/// Returns [`LzwError::FileOpen`] if the file cannot be opened.
pub fn open_input(path: impl AsRef<Path>) -> Result<BufReader<File>> {
    let path = path.as_ref();
    info!("Opening compressed file: {}", path.display());
    let file = File::open(path).map_err(|source| LzwError::FileOpen {
        path: path.to_path_buf(),
        source,
    })?;
    Ok(BufReader::new(file))
}

/// Decodes `reader` with default options and returns the output bytes.
pub fn decompress(reader: impl Read) -> Result<Vec<u8>> {
    Decompressor::default().decompress(reader).map(|decoded| decoded.data)
}

/// Decodes `reader` with the given options.
pub fn decompress_with(reader: impl Read, options: &DecodeOptions) -> Result<Decoded> {
    Decompressor::new(options.clone()).decompress(reader)
}

/// Decodes the file at `path` with the given options.
pub fn decompress_file(path: impl AsRef<Path>, options: &DecodeOptions) -> Result<Decoded> {
    Decompressor::new(options.clone()).decompress_file(path)
}
