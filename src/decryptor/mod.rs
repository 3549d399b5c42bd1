// src/decryptor/mod.rs

//! High-level decryption facade.
//!
//! Core API: [`DecryptingReader`] for pull-based streaming, `decrypt(input, output, id)?`
//! for copying a whole asset into a sink.
//! Helpers: [`read_segment`] for custom segment-at-a-time flows.

pub(crate) mod carry;
pub(crate) mod decrypt;
pub(crate) mod read;
pub(crate) mod reader;

pub use decrypt::{decrypt, decrypt_with_config};
pub use read::read_segment;
pub use reader::{CloseReason, DecryptingReader, ReaderState};
