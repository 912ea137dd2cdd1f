//! Iterator over the codewords of a packed stream.
//!
//! [`Codewords`] flattens the chunk-at-a-time output of
//! [`CodeUnpacker`] into single codewords, in stream order, and tags each one
//! with whether it is the last the input can yield. Tagging needs one chunk of
//! lookahead, which is read only when the current chunk runs out.

use std::io::Read;

use super::codec::unpack::CodeUnpacker;
use super::types::error::Result;
use super::types::models::{Codes, TaggedCode};

/// Iterator over `Result<TaggedCode>`.
///
/// Yields `None` once the input is exhausted. An error is yielded at most once
/// and ends the sequence.
pub struct Codewords<R> {
    unpacker: CodeUnpacker<R>,
    current: Codes,
    index: usize,
    lookahead: Option<Result<Codes>>,
}

impl<R: Read> Codewords<R> {
    pub fn new(unpacker: CodeUnpacker<R>) -> Self {
        Self {
            unpacker,
            current: Codes::Exhausted,
            index: 0,
            lookahead: None,
        }
    }

    /// The underlying unpacker, for byte and truncation counters.
    pub fn unpacker(&self) -> &CodeUnpacker<R> {
        &self.unpacker
    }

    fn next_step(&mut self) -> Result<Codes> {
        match self.lookahead.take() {
            Some(step) => step,
            None => self.unpacker.next_codes(),
        }
    }

    fn next_step_is_exhausted(&mut self) -> bool {
        let step = self.next_step();
        let exhausted = matches!(step, Ok(Codes::Exhausted));
        self.lookahead = Some(step);
        exhausted
    }
}

impl<R: Read> Iterator for Codewords<R> {
    type Item = Result<TaggedCode>;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            let code = match (self.current, self.index) {
                (Codes::Pair(first, _), 0) | (Codes::Single(first), 0) => Some(first),
                (Codes::Pair(_, second), 1) => Some(second),
                _ => None,
            };

            if let Some(code) = code {
                self.index += 1;
                let is_last = self.index == self.current.len() && self.next_step_is_exhausted();
                return Some(Ok(TaggedCode { code, is_last }));
            }

            // Current chunk used up, move to the next one
            match self.next_step() {
                Ok(Codes::Exhausted) => {
                    self.current = Codes::Exhausted;
                    return None;
                }
                Ok(step) => {
                    self.current = step;
                    self.index = 0;
                }
                Err(e) => {
                    self.current = Codes::Exhausted;
                    return Some(Err(e));
                }
            }
        }
    }
}
