// src/encryptor/mod.rs

//! Reference encoder.
//!
//! Core API: `encrypt(input, output, id)?` produces stripe-encrypted assets
//! with the same framing the decoder expects. Used for fixtures and tooling.
//! Low-level: [`encrypt_stream`] for a pre-keyed [`SegmentCipher`](crate::SegmentCipher).

pub(crate) mod encrypt;
pub(crate) mod stream;

pub use encrypt::{encrypt, encrypt_with_config};
pub use stream::encrypt_stream;
