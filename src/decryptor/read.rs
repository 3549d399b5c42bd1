//! src/decryptor/read.rs
//! Pulling whole segments out of an arbitrary `Read` source

use std::io::{self, Read};

/// Fill `buf` from `reader` until it is full or the source is exhausted.
///
/// Returns the number of bytes read; anything below `buf.len()` means the
/// source hit end-of-data. `Interrupted` is retried like
/// [`Read::read_exact`] does; every other error is returned as is and the
/// partially filled buffer must be discarded.
#[inline(always)]
pub fn read_segment<R>(reader: &mut R, buf: &mut [u8]) -> io::Result<usize>
where
    R: Read + ?Sized,
{
    let mut filled = 0;
    while filled < buf.len() {
        match reader.read(&mut buf[filled..]) {
            Ok(0) => break,
            Ok(n) => filled += n,
            Err(e) if e.kind() == io::ErrorKind::Interrupted => continue,
            Err(e) => return Err(e),
        }
    }
    Ok(filled)
}
