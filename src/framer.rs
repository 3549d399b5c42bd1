//! Segment classification.
//!
//! Decides per segment whether it goes through the cipher or is copied as is.

use crate::config::TailPolicy;
use crate::consts::{SEGMENT_PERIOD, SEGMENT_RESIDUE, SEGMENT_SIZE};
use crate::error::DzcryptError;

/// Routing decision for one segment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SegmentAction {
    /// Run the segment through [`SegmentCipher`](crate::SegmentCipher).
    Decrypt,
    /// Copy the segment unchanged.
    Passthrough,
}

/// Stateless stripe policy: segment `i` is encrypted iff
/// `i % SEGMENT_PERIOD == SEGMENT_RESIDUE` and the segment is full-sized.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SegmentFramer {
    tail_policy: TailPolicy,
}

impl SegmentFramer {
    #[must_use]
    pub const fn new(tail_policy: TailPolicy) -> Self {
        Self { tail_policy }
    }

    #[must_use]
    pub const fn tail_policy(&self) -> TailPolicy {
        self.tail_policy
    }

    /// Whether the index alone makes a segment a decryption candidate.
    #[inline(always)]
    #[must_use]
    pub const fn is_eligible(index: u64) -> bool {
        index % SEGMENT_PERIOD == SEGMENT_RESIDUE
    }

    /// Classify segment `index` of `len` bytes.
    ///
    /// Only the final segment of a stream can be shorter than
    /// [`SEGMENT_SIZE`], so a short length is read as "this is the tail".
    /// An eligible tail is never fed to the cipher: it either passes through
    /// or, under [`TailPolicy::Reject`], fails.
    pub fn classify(&self, index: u64, len: usize) -> Result<SegmentAction, DzcryptError> {
        if len == 0 || len > SEGMENT_SIZE {
            return Err(DzcryptError::MalformedSegment { index, len });
        }

        if !Self::is_eligible(index) {
            return Ok(SegmentAction::Passthrough);
        }

        if len == SEGMENT_SIZE {
            return Ok(SegmentAction::Decrypt);
        }

        match self.tail_policy {
            TailPolicy::Passthrough => Ok(SegmentAction::Passthrough),
            TailPolicy::Reject => Err(DzcryptError::MalformedSegment { index, len }),
        }
    }
}
