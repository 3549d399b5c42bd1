//! src/crypto/kdf/md5_fold.rs
//! Asset key derivation: MD5 hex digest folded onto the protocol secret

use crate::aliases::{BlowfishKey16, Secret16};
use crate::consts::{DIGEST_HEX_LENGTH, KEY_LENGTH};
use md5::{Digest, Md5};

/// Derive the Blowfish key for `identifier` into `out_key`.
///
/// - MD5 over the identifier's UTF-8 bytes, rendered as 32 lowercase hex chars
/// - `key[i] = hex[i] ^ hex[i + 16] ^ secret[i]`
///
/// Pure and total: every string, including the empty one, has a key.
#[inline(always)]
pub fn derive_segment_key(identifier: &str, secret: &Secret16, out_key: &mut BlowfishKey16) {
    let digest = Md5::digest(identifier.as_bytes());

    let mut digest_hex = [0u8; DIGEST_HEX_LENGTH];
    hex::encode_to_slice(digest, &mut digest_hex)
        .expect("digest_hex is exactly twice the MD5 output length");

    let secret = secret.expose_secret();
    let (low, high) = digest_hex.split_at(KEY_LENGTH);
    for (i, byte) in out_key.expose_secret_mut().iter_mut().enumerate() {
        *byte = low[i] ^ high[i] ^ secret[i];
    }
}

/// Convenience: derive and return a fresh secure key
#[inline(always)]
#[must_use]
pub fn derive_segment_key_new(identifier: &str, secret: &Secret16) -> BlowfishKey16 {
    let mut key = BlowfishKey16::new([0u8; KEY_LENGTH]);
    derive_segment_key(identifier, secret, &mut key);
    key
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::consts::DEFAULT_SECRET;

    #[test]
    fn known_song_id_vector() {
        let key = derive_segment_key_new("3135556", &Secret16::new(DEFAULT_SECRET));
        assert_eq!(
            hex::encode(key.expose_secret()),
            "6c6c666b39662c37652575603c643439"
        );
    }

    #[test]
    fn secret_is_xored_in() {
        let with_default = derive_segment_key_new("1", &Secret16::new(DEFAULT_SECRET));
        let with_zero = derive_segment_key_new("1", &Secret16::new([0u8; 16]));

        for i in 0..KEY_LENGTH {
            assert_eq!(
                with_default.expose_secret()[i] ^ with_zero.expose_secret()[i],
                DEFAULT_SECRET[i]
            );
        }
    }

    #[test]
    fn empty_identifier_still_derives() {
        let key = derive_segment_key_new("", &Secret16::new(DEFAULT_SECRET));
        assert_eq!(key.expose_secret().len(), KEY_LENGTH);
    }
}
