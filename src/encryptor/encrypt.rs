//! src/encryptor/encrypt.rs
//! Stripe encryption of a whole asset: key derived from the asset ID

use crate::config::CipherConfig;
use crate::crypto::cipher::SegmentCipher;
use crate::crypto::kdf::derive_segment_key_new;
use crate::encryptor::stream::encrypt_stream;
use crate::error::DzcryptError;
use std::io::{Read, Write};
use tracing::debug;

/// Encrypt `input` into `output` the way the media CDN serves assets.
///
/// `decrypt(encrypt(p, id), id) == p` for every input and non-empty `id`.
#[inline(always)]
pub fn encrypt<R, W>(input: R, output: W, identifier: &str) -> Result<u64, DzcryptError>
where
    R: Read,
    W: Write,
{
    encrypt_with_config(input, output, identifier, &CipherConfig::default())
}

/// [`encrypt`] with an explicit [`CipherConfig`].
pub fn encrypt_with_config<R, W>(
    input: R,
    output: W,
    identifier: &str,
    config: &CipherConfig,
) -> Result<u64, DzcryptError>
where
    R: Read,
    W: Write,
{
    if identifier.is_empty() {
        return Err(DzcryptError::Identifier("empty asset identifier".into()));
    }

    let key = derive_segment_key_new(identifier, config.secret());
    let cipher = SegmentCipher::new(&key, config.iv())?;

    let total = encrypt_stream(input, output, &cipher)?;
    debug!(asset = identifier, bytes = total, "asset encrypted");
    Ok(total)
}
