// ============================================================================
// FILE: src/utils.rs
// ============================================================================

//! Utility functions used across the library.

use crate::consts::BLOCK_SIZE;

/// XORs two 8-byte blocks and writes the result to `output`.
///
/// Used by the CBC loops of [`SegmentCipher`](crate::SegmentCipher).
///
/// # Panics (by contract)
///
/// Panics if any of `block_a`, `block_b`, `output` is shorter than 8 bytes.
#[inline(always)]
pub fn xor_blocks(block_a: &[u8], block_b: &[u8], output: &mut [u8]) {
    for i in 0..BLOCK_SIZE {
        output[i] = block_a[i] ^ block_b[i];
    }
}

/// XORs an 8-byte block into `target` in place.
///
/// # Panics (by contract)
///
/// Panics if `target` or `block` is shorter than 8 bytes.
#[inline(always)]
pub fn xor_in_place(target: &mut [u8], block: &[u8]) {
    for i in 0..BLOCK_SIZE {
        target[i] ^= block[i];
    }
}
