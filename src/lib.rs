// src/lib.rs

//! Streaming decryption of Deezer stripe-encrypted media.
//!
//! Assets are cut into 2048-byte segments; every third segment (starting at
//! index 0) is Blowfish-CBC encrypted with a key derived from the asset ID,
//! the rest travel in the clear. [`DecryptingReader`] undoes that on the fly
//! for any [`std::io::Read`] source, whatever read sizes the caller uses.
//!
//! ```no_run
//! use dzcrypt_rs::DecryptingReader;
//! use std::io::Read;
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let encrypted = std::fs::File::open("3135556.enc")?;
//! let mut reader = DecryptingReader::new(encrypted, "3135556")?;
//! let mut plaintext = Vec::new();
//! reader.read_to_end(&mut plaintext)?;
//! # Ok(())
//! # }
//! ```

pub mod aliases;
#[cfg(feature = "batch-ops")]
pub mod batch_ops;
pub mod builders;
pub mod config;
pub mod consts;
pub mod crypto;
pub mod decryptor;
pub mod encryptor;
pub mod error;
pub mod framer;
pub mod utils;

// High-level API
pub use decryptor::{decrypt, decrypt_with_config, CloseReason, DecryptingReader, ReaderState};
pub use encryptor::{encrypt, encrypt_with_config};
pub use error::DzcryptError;

pub use builders::CipherConfigBuilder;
pub use config::{CipherConfig, TailPolicy};
pub use framer::{SegmentAction, SegmentFramer};

// Low-level primitives for custom flows (random access, parallel segment work)
pub use crypto::cipher::SegmentCipher;
pub use crypto::kdf::{derive_segment_key, derive_segment_key_new};

#[cfg(feature = "batch-ops")]
pub use batch_ops::{decrypt_batch, encrypt_batch};
