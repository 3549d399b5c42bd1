//! # Error Types
//!
//! All fallible operations return [`Result<T, DzcryptError>`](DzcryptError).
//! Clean end-of-stream is not an error: readers report it as `Ok(0)`.

use std::io;
use thiserror::Error;

/// The error type for all stripe decryption operations.
#[derive(Error, Debug)]
pub enum DzcryptError {
    /// The underlying byte source (or output sink) failed.
    ///
    /// Source errors are passed through untouched and are never retried
    /// here; retry policy belongs to whoever supplies the source.
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// A segment cannot be processed under the current policy.
    ///
    /// Raised for empty or oversized segments and for a short final
    /// segment on an encrypted index when [`TailPolicy::Reject`](crate::TailPolicy::Reject)
    /// is in effect. Points at a protocol mismatch or corrupted input.
    #[error("malformed segment {index}: {len} bytes")]
    MalformedSegment {
        /// Zero-based segment index in the stream.
        index: u64,
        /// Length of the offending segment.
        len: usize,
    },

    /// Cipher input that is not a whole number of blocks.
    ///
    /// Only reachable when driving [`SegmentCipher`](crate::SegmentCipher)
    /// directly; readers never hand it such input.
    #[error("cipher input of {len} bytes is not a whole number of blocks")]
    Unaligned {
        /// Length of the rejected input.
        len: usize,
    },

    /// Secret, IV or key parameters are unusable.
    ///
    /// Only produced by [`CipherConfig::self_check`](crate::CipherConfig::self_check)
    /// and cipher construction; a fault here is fatal for the process.
    #[error("configuration fault: {0}")]
    Config(String),

    /// The reader was closed, by the caller or after a source failure.
    #[error("stream closed")]
    Closed,

    /// The asset identifier cannot be used to open a session.
    #[error("invalid asset identifier: {0}")]
    Identifier(String),
}

impl From<DzcryptError> for io::Error {
    fn from(err: DzcryptError) -> Self {
        match err {
            DzcryptError::Io(inner) => inner,
            DzcryptError::MalformedSegment { .. } | DzcryptError::Unaligned { .. } => {
                io::Error::new(io::ErrorKind::InvalidData, err)
            }
            DzcryptError::Identifier(_) => io::Error::new(io::ErrorKind::InvalidInput, err),
            DzcryptError::Config(_) | DzcryptError::Closed => io::Error::other(err),
        }
    }
}
