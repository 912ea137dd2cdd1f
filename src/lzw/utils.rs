//! Low-level byte reading utilities

use std::io::{ErrorKind, Read};

/// Fill `buf` from `reader` until it is full or the input ends.
///
/// Returns the number of bytes read. A short count means end of input was
/// reached; it is signalled by the count, never by an error.
pub fn read_up_to(reader: &mut impl Read, buf: &mut [u8]) -> std::io::Result<usize> {
    let mut filled = 0;
    while filled < buf.len() {
        match reader.read(&mut buf[filled..]) {
            Ok(0) => break,
            Ok(n) => filled += n,
            Err(e) if e.kind() == ErrorKind::Interrupted => continue,
            Err(e) => return Err(e),
        }
    }
    Ok(filled)
}
