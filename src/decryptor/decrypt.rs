//! src/decryptor/decrypt.rs
//! Whole-asset decryption into any `Write` sink

use crate::aliases::SegmentBuffer2048;
use crate::config::CipherConfig;
use crate::consts::SEGMENT_SIZE;
use crate::decryptor::reader::DecryptingReader;
use crate::error::DzcryptError;
use std::io::{Read, Write};
use tracing::debug;

/// Decrypt a whole asset from `input` into `output`.
///
/// Returns the number of plaintext bytes written. Memory use stays at one
/// segment regardless of the asset size.
#[inline(always)]
pub fn decrypt<R, W>(input: R, output: W, identifier: &str) -> Result<u64, DzcryptError>
where
    R: Read,
    W: Write,
{
    decrypt_with_config(input, output, identifier, &CipherConfig::default())
}

/// [`decrypt`] with an explicit [`CipherConfig`].
pub fn decrypt_with_config<R, W>(
    input: R,
    mut output: W,
    identifier: &str,
    config: &CipherConfig,
) -> Result<u64, DzcryptError>
where
    R: Read,
    W: Write,
{
    let mut reader = DecryptingReader::with_config(input, identifier, config)?;
    let mut chunk = SegmentBuffer2048::new([0u8; SEGMENT_SIZE]);
    let mut total = 0u64;

    loop {
        let n = reader.read_plain(chunk.expose_secret_mut())?;
        if n == 0 {
            break;
        }
        output.write_all(&chunk.expose_secret()[..n])?;
        total += n as u64;
    }
    output.flush()?;

    debug!(
        asset = identifier,
        bytes = total,
        segments = reader.segments_processed(),
        "asset decrypted"
    );
    Ok(total)
}
