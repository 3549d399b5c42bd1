//! # Key Derivation
//!
//! Per-asset Blowfish keys. The derivation is fixed by the deployed encoder:
//! any deviation produces a key that silently decrypts to garbage.
//!
//! ## Modules
//!
//! - [`md5_fold`] - MD5-hex folding of the asset identifier with the protocol secret
//!
//! ## Usage
//!
//! [`DecryptingReader`](crate::DecryptingReader) derives its key on open; call
//! these directly only for custom flows such as decrypting segments out of order.

pub mod md5_fold;

pub use md5_fold::{derive_segment_key, derive_segment_key_new};
