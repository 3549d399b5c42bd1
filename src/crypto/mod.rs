// src/crypto/mod.rs

//! Low-level crypto primitives.
//!
//! - [`kdf`] turns an asset identifier into a Blowfish key.
//! - [`cipher`] decrypts (and, for fixtures, encrypts) one segment at a time.

pub mod cipher;
pub mod kdf;
