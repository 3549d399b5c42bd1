//! # Constants
//!
//! Protocol constants of the stripe encryption scheme. They must match the
//! encoder bit-for-bit; changing any of them is a protocol change, not a tweak.

/// Size of one stripe segment in bytes.
///
/// The stream is cut into windows of this size; only the last one may be shorter.
pub const SEGMENT_SIZE: usize = 2048;

/// Blowfish block size in bytes.
pub const BLOCK_SIZE: usize = 8;

/// Every `SEGMENT_PERIOD`-th segment is a decryption candidate.
pub const SEGMENT_PERIOD: u64 = 3;

/// Index residue (modulo [`SEGMENT_PERIOD`]) of the encrypted segments.
pub const SEGMENT_RESIDUE: u64 = 0;

/// Length of the derived Blowfish key in bytes.
pub const KEY_LENGTH: usize = 16;

/// Length of the hex-rendered MD5 digest of the asset identifier.
pub const DIGEST_HEX_LENGTH: usize = 32;

/// Fixed CBC initialization vector, reused for every encrypted segment.
pub const DEFAULT_IV: [u8; BLOCK_SIZE] = [0x00, 0x01, 0x02, 0x03, 0x04, 0x05, 0x06, 0x07];

/// Secret folded into every derived key.
pub const DEFAULT_SECRET: [u8; KEY_LENGTH] = *b"g4el58wc0zvf9na1";

// Segments that get decrypted must be made of whole cipher blocks.
const _: () = assert!(SEGMENT_SIZE % BLOCK_SIZE == 0);
const _: () = assert!(SEGMENT_RESIDUE < SEGMENT_PERIOD);
const _: () = assert!(DIGEST_HEX_LENGTH == 2 * KEY_LENGTH);
