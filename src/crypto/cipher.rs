//! src/crypto/cipher.rs
//! Per-segment Blowfish-CBC: the chaining restarts from the fixed IV on every call

use crate::aliases::{BlowfishKey16, Iv8};
use crate::consts::BLOCK_SIZE;
use crate::error::DzcryptError;
use crate::utils::{xor_blocks, xor_in_place};
use blowfish::cipher::{Block, BlockDecrypt, BlockEncrypt, KeyInit};
use blowfish::Blowfish;

type BlowfishBlock = Block<Blowfish>;

/// Blowfish (big-endian) in CBC mode over independent segments.
///
/// Holds the key schedule for one session and the fixed IV. No chaining
/// state survives between calls, so segments can be processed in any order
/// or on different threads.
pub struct SegmentCipher {
    cipher: Blowfish,
    iv: [u8; BLOCK_SIZE],
}

impl SegmentCipher {
    /// Key the cipher for one session.
    ///
    /// Fails only if Blowfish rejects the key length, which is a configuration
    /// fault rather than a data error.
    pub fn new(key: &BlowfishKey16, iv: &Iv8) -> Result<Self, DzcryptError> {
        let cipher: Blowfish = Blowfish::new_from_slice(key.expose_secret())
            .map_err(|e| DzcryptError::Config(format!("Blowfish rejected the key: {e}")))?;

        Ok(Self {
            cipher,
            iv: *iv.expose_secret(),
        })
    }

    /// Decrypt one segment in place.
    ///
    /// `segment.len()` must be a multiple of [`BLOCK_SIZE`]; the output has
    /// the same length.
    pub fn decrypt_segment(&self, segment: &mut [u8]) -> Result<(), DzcryptError> {
        check_aligned(segment)?;

        let mut previous = self.iv;
        for chunk in segment.chunks_exact_mut(BLOCK_SIZE) {
            let mut block = BlowfishBlock::clone_from_slice(chunk);
            self.cipher.decrypt_block(&mut block);

            let mut ciphertext = [0u8; BLOCK_SIZE];
            ciphertext.copy_from_slice(chunk);

            xor_blocks(&block, &previous, chunk);
            previous = ciphertext;
        }
        Ok(())
    }

    /// Encrypt one segment in place; the exact inverse of [`decrypt_segment`](Self::decrypt_segment).
    pub fn encrypt_segment(&self, segment: &mut [u8]) -> Result<(), DzcryptError> {
        check_aligned(segment)?;

        let mut previous = self.iv;
        for chunk in segment.chunks_exact_mut(BLOCK_SIZE) {
            xor_in_place(chunk, &previous);
            self.cipher.encrypt_block(BlowfishBlock::from_mut_slice(chunk));
            previous.copy_from_slice(chunk);
        }
        Ok(())
    }
}

#[inline(always)]
fn check_aligned(segment: &[u8]) -> Result<(), DzcryptError> {
    if segment.len() % BLOCK_SIZE != 0 {
        return Err(DzcryptError::Unaligned { len: segment.len() });
    }
    Ok(())
}
