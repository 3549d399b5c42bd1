//! src/encryptor/stream.rs
//! Stripe encryption over a `Read` → `Write` pair

use crate::aliases::SegmentBuffer2048;
use crate::config::TailPolicy;
use crate::consts::SEGMENT_SIZE;
use crate::crypto::cipher::SegmentCipher;
use crate::decryptor::read_segment;
use crate::error::DzcryptError;
use crate::framer::{SegmentAction, SegmentFramer};
use std::io::{Read, Write};

/// Encrypt every eligible full segment of `source` into `destination`.
///
/// A short tail is always written in the clear, which is what deployed
/// encoders do. Returns the number of bytes written.
pub fn encrypt_stream<R, W>(
    mut source: R,
    mut destination: W,
    cipher: &SegmentCipher,
) -> Result<u64, DzcryptError>
where
    R: Read,
    W: Write,
{
    let framer = SegmentFramer::new(TailPolicy::Passthrough);
    let mut segment = SegmentBuffer2048::new([0u8; SEGMENT_SIZE]);
    let mut index = 0u64;
    let mut total = 0u64;

    loop {
        let filled = read_segment(&mut source, segment.expose_secret_mut())?;
        if filled == 0 {
            break;
        }

        let window = &mut segment.expose_secret_mut()[..filled];
        if framer.classify(index, filled)? == SegmentAction::Decrypt {
            cipher.encrypt_segment(window)?;
        }
        destination.write_all(window)?;

        total += filled as u64;
        index += 1;

        if filled < SEGMENT_SIZE {
            break;
        }
    }

    destination.flush()?;
    Ok(total)
}
