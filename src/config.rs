//! # Cipher Configuration
//!
//! The protocol secret, the CBC IV and the short-tail policy are plain values
//! handed to each session instead of process-wide globals, so tests can run
//! against a fixture secret without touching shared state.

use crate::aliases::{Iv8, Secret16};
use crate::consts::{BLOCK_SIZE, DEFAULT_IV, DEFAULT_SECRET, SEGMENT_SIZE};
use crate::crypto::cipher::SegmentCipher;
use crate::crypto::kdf::derive_segment_key_new;
use crate::error::DzcryptError;
use std::fmt;

/// What to do with a short final segment that lands on an encrypted index.
///
/// Deployed encoders leave such a tail in the clear, which is what
/// [`TailPolicy::Passthrough`] expects. [`TailPolicy::Reject`] treats it as
/// corruption instead.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum TailPolicy {
    /// Copy the short tail through unchanged.
    #[default]
    Passthrough,
    /// Fail with [`DzcryptError::MalformedSegment`].
    Reject,
}

/// Immutable parameters shared by every segment of a session.
///
/// # Thread Safety
///
/// `Send + Sync`; one configuration can back any number of sessions on any
/// number of threads.
pub struct CipherConfig {
    pub(crate) secret: Secret16,
    pub(crate) iv: Iv8,
    pub(crate) tail_policy: TailPolicy,
}

impl CipherConfig {
    /// Configuration with caller-provided values.
    #[must_use]
    pub fn new(secret: [u8; 16], iv: [u8; 8], tail_policy: TailPolicy) -> Self {
        Self {
            secret: Secret16::new(secret),
            iv: Iv8::new(iv),
            tail_policy,
        }
    }

    /// Secret folded into derived keys.
    #[must_use]
    pub fn secret(&self) -> &Secret16 {
        &self.secret
    }

    /// IV every encrypted segment restarts from.
    #[must_use]
    pub fn iv(&self) -> &Iv8 {
        &self.iv
    }

    /// Short-tail policy.
    #[must_use]
    pub const fn tail_policy(&self) -> TailPolicy {
        self.tail_policy
    }

    /// Start-up check for configuration faults.
    ///
    /// Verifies segment/block geometry, that the cipher accepts a derived key
    /// and that one block survives an encrypt/decrypt cycle under this secret
    /// and IV. A failure here means the build is unusable, not that some
    /// input was bad.
    pub fn self_check(&self) -> Result<(), DzcryptError> {
        if SEGMENT_SIZE == 0 || SEGMENT_SIZE % BLOCK_SIZE != 0 {
            return Err(DzcryptError::Config(format!(
                "segment size {SEGMENT_SIZE} is not a multiple of block size {BLOCK_SIZE}"
            )));
        }

        let key = derive_segment_key_new("self-check", &self.secret);
        let cipher = SegmentCipher::new(&key, &self.iv)?;

        let probe = *b"selftest";
        let mut block = probe;
        cipher.encrypt_segment(&mut block)?;
        if block == probe {
            return Err(DzcryptError::Config("cipher left the probe block unchanged".into()));
        }
        cipher.decrypt_segment(&mut block)?;
        if block != probe {
            return Err(DzcryptError::Config("cipher round trip mismatch".into()));
        }

        Ok(())
    }
}

impl Default for CipherConfig {
    fn default() -> Self {
        Self::new(DEFAULT_SECRET, DEFAULT_IV, TailPolicy::default())
    }
}

impl fmt::Debug for CipherConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CipherConfig")
            .field("secret", &"[REDACTED]")
            .field("iv", &"[REDACTED]")
            .field("tail_policy", &self.tail_policy)
            .finish()
    }
}
