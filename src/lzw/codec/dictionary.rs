//! The adaptive symbol table and the per-codeword LZW decode step.
//!
//! Codes are assigned densely from 0 upward, so the table is an arena: every
//! entry's bytes live in one buffer and the code is an index into a span list.
//! A reset truncates both back to the 256 single-byte roots.

use log::{debug, trace};

use crate::lzw::types::error::{LzwError, Result};
use crate::lzw::types::models::{Codeword, INIT_DICT_SIZE, MAX_DICT_SIZE};

#[derive(Debug, Clone, Copy)]
struct Span {
    start: usize,
    len: usize,
}

/// Mapping from codeword to the non-empty byte string it stands for.
///
/// Entries `0..=255` always map to the single bytes `0x00..=0xFF`.
#[derive(Debug, Clone)]
pub struct SymbolTable {
    bytes: Vec<u8>,
    spans: Vec<Span>,
}

impl SymbolTable {
    pub fn new() -> Self {
        let mut bytes = Vec::with_capacity(MAX_DICT_SIZE * 8);
        let mut spans = Vec::with_capacity(MAX_DICT_SIZE);
        for (start, byte) in (0..=u8::MAX).enumerate() {
            bytes.push(byte);
            spans.push(Span { start, len: 1 });
        }
        Self { bytes, spans }
    }

    /// Number of defined codes. Also the next code to be assigned.
    pub fn len(&self) -> usize {
        self.spans.len()
    }

    /// Always false: the 256 roots survive every reset.
    pub fn is_empty(&self) -> bool {
        self.spans.is_empty()
    }

    /// True when only the 256 root entries are defined.
    pub fn is_initial(&self) -> bool {
        self.spans.len() == INIT_DICT_SIZE
    }

    pub fn get(&self, code: Codeword) -> Option<&[u8]> {
        self.spans
            .get(usize::from(code))
            .map(|span| &self.bytes[span.start..span.start + span.len])
    }

    /// Appends `prefix` followed by `byte` as the next code.
    pub fn push(&mut self, prefix: &[u8], byte: u8) {
        let start = self.bytes.len();
        self.bytes.extend_from_slice(prefix);
        self.bytes.push(byte);
        self.spans.push(Span {
            start,
            len: prefix.len() + 1,
        });
    }

    /// Drops every entry above the single-byte roots.
    pub fn reset(&mut self) {
        self.bytes.truncate(INIT_DICT_SIZE);
        self.spans.truncate(INIT_DICT_SIZE);
    }
}

impl Default for SymbolTable {
    fn default() -> Self {
        Self::new()
    }
}

/// Decodes one codeword at a time, growing and resetting its own table.
#[derive(Debug, Clone, Default)]
pub struct DictionaryDecoder {
    table: SymbolTable,
    position: u64,
    resets: u64,
}

impl DictionaryDecoder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Decodes `code` given the string decoded for the previous codeword.
    ///
    /// `last` must be empty only for the first codeword of a run. On a fresh
    /// table with an empty `last`, the root entry is returned and nothing is
    /// added. Otherwise exactly one entry is added, and the table is reset to
    /// its roots once it reaches 4096 entries.
    ///
    /// # Errors
    /// - [`LzwError::CorruptStream`] if `code` is neither defined nor the next code.
    /// - [`LzwError::MissingPrefix`] if `last` is empty past the first codeword.
    pub fn decode(&mut self, code: Codeword, last: &[u8]) -> Result<Vec<u8>> {
        let position = self.position;
        self.position += 1;
        let next_code = self.table.len();

        if self.table.is_initial() && last.is_empty() {
            trace!("Code {} at position {}: fresh table, no insert", code, position);
            return self.table.get(code).map(<[u8]>::to_vec).ok_or(LzwError::CorruptStream {
                code,
                next_code,
                position,
            });
        }

        let Some(&prefix_head) = last.first() else {
            return Err(LzwError::MissingPrefix { position });
        };

        let (decoded, head) = match self.table.get(code) {
            Some(entry) => (entry.to_vec(), entry[0]),
            None if usize::from(code) == next_code => {
                let mut decoded = Vec::with_capacity(last.len() + 1);
                decoded.extend_from_slice(last);
                decoded.push(prefix_head);
                (decoded, prefix_head)
            }
            None => {
                return Err(LzwError::CorruptStream {
                    code,
                    next_code,
                    position,
                })
            }
        };

        self.table.push(last, head);
        trace!("Code {} -> {} bytes, new entry {}", code, decoded.len(), next_code);

        if self.table.len() >= MAX_DICT_SIZE {
            debug!("Dictionary full at position {}, resetting", position);
            self.table.reset();
            self.resets += 1;
        }

        Ok(decoded)
    }

    pub fn table(&self) -> &SymbolTable {
        &self.table
    }

    /// Number of codewords passed to [`decode`](Self::decode) so far.
    pub fn position(&self) -> u64 {
        self.position
    }

    pub fn resets(&self) -> u64 {
        self.resets
    }
}
