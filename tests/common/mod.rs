//! Test-only reference encoder producing streams the decoder accepts.
//!
//! Mirrors the decoder's dictionary policy: one entry per emitted code after
//! the first, reset to the 256 roots as soon as the table reaches 4096.

#![allow(dead_code)]

use std::collections::HashMap;

const INIT: usize = 256;
const MAX: usize = 4096;

fn roots() -> HashMap<Vec<u8>, u16> {
    (0..INIT).map(|i| (vec![i as u8], i as u16)).collect()
}

/// LZW-encodes `data` into a list of codewords.
pub fn encode_codes(data: &[u8]) -> Vec<u16> {
    let mut dict = roots();
    let mut codes = Vec::new();
    let mut word: Vec<u8> = Vec::new();

    for &byte in data {
        let mut extended = word.clone();
        extended.push(byte);
        if dict.contains_key(&extended) {
            word = extended;
            continue;
        }

        codes.push(dict[&word]);
        let next = dict.len();
        dict.insert(extended, next as u16);
        if dict.len() >= MAX {
            dict = roots();
        }
        word = vec![byte];
    }

    if !word.is_empty() {
        codes.push(dict[&word]);
    }
    codes
}

/// Packs codewords two per three bytes; an odd final code becomes a big-endian pair.
pub fn pack(codes: &[u16]) -> Vec<u8> {
    let mut out = Vec::with_capacity(codes.len() * 3 / 2 + 2);
    let mut chunks = codes.chunks_exact(2);
    for pair in &mut chunks {
        let (a, b) = (pair[0], pair[1]);
        out.push((a >> 4) as u8);
        out.push((((a & 0x0F) << 4) | (b >> 8)) as u8);
        out.push((b & 0xFF) as u8);
    }
    if let [last] = chunks.remainder() {
        out.extend_from_slice(&last.to_be_bytes());
    }
    out
}

pub fn encode(data: &[u8]) -> Vec<u8> {
    pack(&encode_codes(data))
}

/// Deterministic pseudo-random bytes (LCG), for inputs large enough to fill the table.
pub fn noise(len: usize, seed: u32) -> Vec<u8> {
    let mut state = seed;
    (0..len)
        .map(|_| {
            state = state.wrapping_mul(1_103_515_245).wrapping_add(12_345);
            (state >> 16) as u8
        })
        .collect()
}
