//! Parallel processing of independent assets (feature `batch-ops`).
//!
//! Each item is its own session with its own key; sessions share nothing
//! mutable, so rayon can spread them over all cores.

use rayon::prelude::*;
use std::io::{Read, Write};

use crate::{decrypt, encrypt, DzcryptError};

/// Decrypt every `(identifier, source, sink)` triple in parallel.
///
/// Stops at the first failure; items already finished stay written.
pub fn decrypt_batch<R, W>(batch: &mut [(&str, R, W)]) -> Result<(), DzcryptError>
where
    R: Read + Send,
    W: Write + Send,
{
    batch
        .par_iter_mut()
        .try_for_each(|(identifier, src, dst)| decrypt(src, dst, *identifier).map(|_| ()))
}

/// Encrypt every `(identifier, source, sink)` triple in parallel.
pub fn encrypt_batch<R, W>(batch: &mut [(&str, R, W)]) -> Result<(), DzcryptError>
where
    R: Read + Send,
    W: Write + Send,
{
    batch
        .par_iter_mut()
        .try_for_each(|(identifier, src, dst)| encrypt(src, dst, *identifier).map(|_| ()))
}
