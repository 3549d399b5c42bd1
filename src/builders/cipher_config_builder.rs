//! src/builders/cipher_config_builder.rs
//! CipherConfig builder: protocol defaults, secure-gate storage from birth

use crate::aliases::{Iv8, Secret16};
use crate::config::{CipherConfig, TailPolicy};
use crate::consts::{DEFAULT_IV, DEFAULT_SECRET};
use crate::error::DzcryptError;

/// Builder for [`CipherConfig`].
///
/// Starts from the compiled-in protocol constants and the
/// [`TailPolicy::Passthrough`] default.
#[derive(Debug)]
pub struct CipherConfigBuilder {
    secret: Secret16,
    iv: Iv8,
    tail_policy: TailPolicy,
}

impl CipherConfigBuilder {
    /// Create builder with protocol defaults
    #[must_use]
    pub fn new() -> Self {
        Self {
            secret: Secret16::new(DEFAULT_SECRET),
            iv: Iv8::new(DEFAULT_IV),
            tail_policy: TailPolicy::default(),
        }
    }

    /// Replace the key-derivation secret, accepts [u8; 16]
    #[must_use]
    pub fn with_secret(mut self, secret: impl Into<[u8; 16]>) -> Self {
        self.secret = Secret16::new(secret.into());
        self
    }

    /// Replace the CBC initialization vector
    #[must_use]
    pub fn with_iv(mut self, iv: impl Into<[u8; 8]>) -> Self {
        self.iv = Iv8::new(iv.into());
        self
    }

    /// Choose how a short tail on an encrypted index is handled
    #[must_use]
    pub fn with_tail_policy(mut self, tail_policy: TailPolicy) -> Self {
        self.tail_policy = tail_policy;
        self
    }

    /// Current tail policy
    #[must_use]
    pub const fn tail_policy(&self) -> TailPolicy {
        self.tail_policy
    }

    /// Finish without validation
    #[must_use]
    pub fn build(self) -> CipherConfig {
        CipherConfig {
            secret: self.secret,
            iv: self.iv,
            tail_policy: self.tail_policy,
        }
    }

    /// Finish and run [`CipherConfig::self_check`]
    pub fn build_checked(self) -> Result<CipherConfig, DzcryptError> {
        let config = self.build();
        config.self_check()?;
        Ok(config)
    }
}

impl Default for CipherConfigBuilder {
    fn default() -> Self {
        Self::new()
    }
}
