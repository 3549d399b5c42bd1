//! tests/common.rs
//! Common constants and utilities shared across test files

use std::io::{self, Read};

/// Segment size of the stripe scheme, repeated here so tests read on their own.
#[allow(dead_code)] // Used across multiple test files
pub const SEG: usize = 2048;

/// Asset identifier used by most fixtures.
#[allow(dead_code)] // Used across multiple test files
pub const TEST_ID: &str = "3135556";

/// Plaintext lengths that hit every framing corner: empty, sub-block,
/// sub-segment, exact segments, short tails on eligible and plain indices.
#[allow(dead_code)] // Used across multiple test files
pub const TEST_LENGTHS: &[usize] = &[
    0,
    1,
    7,
    8,
    SEG - 1,
    SEG,
    SEG + 1,
    2 * SEG,
    3 * SEG,
    3 * SEG + 5,
    3 * SEG + 8,
    4 * SEG + 100,
    6 * SEG,
    10 * SEG + 1234,
];

/// Deterministic, non-repeating-per-segment plaintext.
#[allow(dead_code)] // Used across multiple test files
pub fn sample_plaintext(len: usize) -> Vec<u8> {
    (0..len)
        .map(|i| (i as u32).wrapping_mul(2_654_435_761).rotate_left(7) as u8)
        .collect()
}

/// Encrypt with the reference encoder and default configuration.
#[allow(dead_code)] // Used across multiple test files
pub fn encrypt_fixture(plaintext: &[u8], identifier: &str) -> Vec<u8> {
    let mut encrypted = Vec::with_capacity(plaintext.len());
    dzcrypt_rs::encrypt(plaintext, &mut encrypted, identifier).unwrap();
    encrypted
}

/// Read everything from `reader` using the given read sizes in rotation.
#[allow(dead_code)] // Used across multiple test files
pub fn read_with_sizes<R: Read>(mut reader: R, sizes: &[usize]) -> io::Result<Vec<u8>> {
    let mut output = Vec::new();
    let mut buf = vec![0u8; sizes.iter().copied().max().unwrap_or(1).max(1)];
    for &size in sizes.iter().cycle() {
        let size = size.max(1);
        let n = reader.read(&mut buf[..size])?;
        if n == 0 {
            break;
        }
        output.extend_from_slice(&buf[..n]);
    }
    Ok(output)
}

/// Source that hands out at most `max` bytes per `read` call.
#[allow(dead_code)] // Used across multiple test files
pub struct DribbleReader {
    pub data: Vec<u8>,
    pub pos: usize,
    pub max: usize,
}

impl Read for DribbleReader {
    fn read(&mut self, out: &mut [u8]) -> io::Result<usize> {
        let n = self.max.min(out.len()).min(self.data.len() - self.pos);
        out[..n].copy_from_slice(&self.data[self.pos..self.pos + n]);
        self.pos += n;
        Ok(n)
    }
}

/// Source that serves `data` and then fails with `kind`.
#[allow(dead_code)] // Used across multiple test files
pub struct FailAfter {
    pub data: Vec<u8>,
    pub pos: usize,
    pub kind: io::ErrorKind,
}

impl Read for FailAfter {
    fn read(&mut self, out: &mut [u8]) -> io::Result<usize> {
        if self.pos == self.data.len() {
            return Err(io::Error::new(self.kind, "injected source failure"));
        }
        let n = out.len().min(self.data.len() - self.pos);
        out[..n].copy_from_slice(&self.data[self.pos..self.pos + n]);
        self.pos += n;
        Ok(n)
    }
}
