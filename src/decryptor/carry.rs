//! src/decryptor/carry.rs
//! Carry-over buffer: one fixed segment-sized backing array, head/tail indices

use crate::aliases::SegmentBuffer2048;
use crate::consts::SEGMENT_SIZE;

/// Bytes already decrypted (or passed through) but not yet handed out.
///
/// The backing array is exactly one segment, which bounds the memory of a
/// session. It is only refilled once everything in it has been delivered.
pub(crate) struct CarryBuffer {
    backing: SegmentBuffer2048,
    head: usize,
    tail: usize,
}

impl CarryBuffer {
    #[inline(always)]
    pub(crate) fn new() -> Self {
        Self {
            backing: SegmentBuffer2048::new([0u8; SEGMENT_SIZE]),
            head: 0,
            tail: 0,
        }
    }

    #[inline(always)]
    pub(crate) fn len(&self) -> usize {
        self.tail - self.head
    }

    #[inline(always)]
    pub(crate) fn is_empty(&self) -> bool {
        self.head == self.tail
    }

    /// Whole backing array, ready to receive the next segment.
    ///
    /// Must only be called once the buffer is drained.
    #[inline(always)]
    pub(crate) fn spare_mut(&mut self) -> &mut [u8] {
        debug_assert!(self.is_empty(), "refilling a carry buffer that still holds data");
        self.head = 0;
        self.tail = 0;
        self.backing.expose_secret_mut()
    }

    /// Mark the first `len` bytes of the backing array as pending output.
    #[inline(always)]
    pub(crate) fn commit(&mut self, len: usize) {
        debug_assert!(len <= SEGMENT_SIZE);
        self.head = 0;
        self.tail = len;
    }

    /// Pending bytes, for in-place decryption after a [`commit`](Self::commit).
    #[inline(always)]
    pub(crate) fn pending_mut(&mut self) -> &mut [u8] {
        &mut self.backing.expose_secret_mut()[self.head..self.tail]
    }

    /// Copy as many pending bytes as fit into `out`; returns the count.
    #[inline(always)]
    pub(crate) fn drain_into(&mut self, out: &mut [u8]) -> usize {
        let n = self.len().min(out.len());
        out[..n].copy_from_slice(&self.backing.expose_secret()[self.head..self.head + n]);
        self.head += n;
        n
    }

    /// Zero the backing array and forget any pending bytes.
    pub(crate) fn wipe(&mut self) {
        self.backing.expose_secret_mut().fill(0);
        self.head = 0;
        self.tail = 0;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn drains_in_arbitrary_pieces() {
        let mut carry = CarryBuffer::new();
        let spare = carry.spare_mut();
        for (i, byte) in spare.iter_mut().take(10).enumerate() {
            *byte = i as u8;
        }
        carry.commit(10);
        assert_eq!(carry.len(), 10);

        let mut out = [0u8; 4];
        assert_eq!(carry.drain_into(&mut out), 4);
        assert_eq!(out, [0, 1, 2, 3]);
        assert_eq!(carry.drain_into(&mut out[..1]), 1);
        assert_eq!(out[0], 4);

        let mut rest = [0u8; 32];
        assert_eq!(carry.drain_into(&mut rest), 5);
        assert_eq!(&rest[..5], &[5, 6, 7, 8, 9]);
        assert!(carry.is_empty());
        assert_eq!(carry.drain_into(&mut rest), 0);
    }

    #[test]
    fn pending_view_tracks_head() {
        let mut carry = CarryBuffer::new();
        carry.spare_mut()[..3].copy_from_slice(b"abc");
        carry.commit(3);
        let mut one = [0u8; 1];
        carry.drain_into(&mut one);
        assert_eq!(carry.pending_mut(), b"bc");
    }

    #[test]
    fn wipe_discards_pending_bytes() {
        let mut carry = CarryBuffer::new();
        carry.spare_mut()[..4].copy_from_slice(b"data");
        carry.commit(4);
        carry.wipe();
        assert!(carry.is_empty());
        assert_eq!(carry.drain_into(&mut [0u8; 4]), 0);
        carry.commit(4);
        assert_eq!(carry.pending_mut(), &[0u8; 4]);
    }
}
