//! src/decryptor/reader.rs
//! Streaming decryption session: pull-based, one segment of memory

use crate::config::CipherConfig;
use crate::consts::SEGMENT_SIZE;
use crate::crypto::cipher::SegmentCipher;
use crate::crypto::kdf::derive_segment_key_new;
use crate::decryptor::carry::CarryBuffer;
use crate::decryptor::read::read_segment;
use crate::error::DzcryptError;
use crate::framer::{SegmentAction, SegmentFramer};
use std::fmt;
use std::io::{self, Read};
use tracing::{debug, trace, warn};

/// Why a session reached [`ReaderState::Closed`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CloseReason {
    /// Source exhausted and every byte delivered. Reads keep returning `Ok(0)`.
    EndOfStream,
    /// [`DecryptingReader::close`] was called. Reads fail with [`DzcryptError::Closed`].
    Caller,
    /// A source or data error was returned. Reads fail with [`DzcryptError::Closed`].
    Failed,
}

/// Lifecycle of a [`DecryptingReader`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ReaderState {
    /// Source may still have bytes.
    Open,
    /// Source exhausted; the carry-over buffer is being emptied.
    Draining,
    /// Terminal.
    Closed(CloseReason),
}

/// Decrypting adapter over an encrypted `Read` source.
///
/// Binds one asset identifier, its derived key and one source. Output is the
/// same whatever read sizes the caller uses: one byte at a time, one segment
/// at a time or everything in one go.
///
/// Not meant to be shared between threads mid-read (`&mut self` everywhere);
/// independent readers share nothing and can run in parallel.
pub struct DecryptingReader<R> {
    source: Option<R>,
    cipher: SegmentCipher,
    framer: SegmentFramer,
    carry: CarryBuffer,
    next_index: u64,
    state: ReaderState,
}

impl<R: Read> DecryptingReader<R> {
    /// Open a session with the protocol's default configuration.
    pub fn new(source: R, identifier: &str) -> Result<Self, DzcryptError> {
        Self::with_config(source, identifier, &CipherConfig::default())
    }

    /// Open a session with an explicit secret, IV and tail policy.
    ///
    /// The key is derived here, once. An empty identifier is rejected since
    /// no real asset has one.
    pub fn with_config(
        source: R,
        identifier: &str,
        config: &CipherConfig,
    ) -> Result<Self, DzcryptError> {
        if identifier.is_empty() {
            return Err(DzcryptError::Identifier("empty asset identifier".into()));
        }

        let key = derive_segment_key_new(identifier, config.secret());
        let cipher = SegmentCipher::new(&key, config.iv())?;

        debug!(
            asset = identifier,
            segment_size = SEGMENT_SIZE,
            tail_policy = ?config.tail_policy(),
            "opened decrypting reader"
        );

        Ok(Self {
            source: Some(source),
            cipher,
            framer: SegmentFramer::new(config.tail_policy()),
            carry: CarryBuffer::new(),
            next_index: 0,
            state: ReaderState::Open,
        })
    }

    /// Read up to `out.len()` plaintext bytes.
    ///
    /// Keeps pulling segments until `out` is full or the source is exhausted,
    /// so a short count means end of stream is near and `Ok(0)` means it has
    /// been reached. After [`close`](Self::close) or an error every call fails
    /// with [`DzcryptError::Closed`].
    pub fn read_plain(&mut self, out: &mut [u8]) -> Result<usize, DzcryptError> {
        match self.state {
            ReaderState::Closed(CloseReason::EndOfStream) => return Ok(0),
            ReaderState::Closed(_) => return Err(DzcryptError::Closed),
            ReaderState::Open | ReaderState::Draining => {}
        }

        let mut written = 0;
        while written < out.len() {
            if !self.carry.is_empty() {
                written += self.carry.drain_into(&mut out[written..]);
                continue;
            }
            if self.state == ReaderState::Draining {
                break;
            }
            self.pull_segment()?;
        }

        if self.state == ReaderState::Draining && self.carry.is_empty() {
            self.finish();
        }

        Ok(written)
    }

    /// Pull, classify and (if needed) decrypt exactly one segment into the
    /// carry-over buffer.
    fn pull_segment(&mut self) -> Result<(), DzcryptError> {
        let Some(source) = self.source.as_mut() else {
            return Err(DzcryptError::Closed);
        };

        let filled = match read_segment(source, self.carry.spare_mut()) {
            Ok(n) => n,
            Err(e) => {
                warn!(segment = self.next_index, error = %e, "source read failed");
                self.shutdown(CloseReason::Failed);
                return Err(DzcryptError::Io(e));
            }
        };

        if filled < SEGMENT_SIZE {
            self.state = ReaderState::Draining;
        }
        if filled == 0 {
            return Ok(());
        }

        let index = self.next_index;
        self.next_index += 1;

        let action = match self.framer.classify(index, filled) {
            Ok(action) => action,
            Err(e) => {
                warn!(segment = index, len = filled, "rejected segment");
                self.shutdown(CloseReason::Failed);
                return Err(e);
            }
        };
        trace!(segment = index, len = filled, ?action, "segment classified");

        self.carry.commit(filled);
        if action == SegmentAction::Decrypt {
            if let Err(e) = self.cipher.decrypt_segment(self.carry.pending_mut()) {
                self.shutdown(CloseReason::Failed);
                return Err(e);
            }
        }
        Ok(())
    }

    fn finish(&mut self) {
        debug!(segments = self.next_index, "encrypted stream drained");
        self.carry.wipe();
        self.state = ReaderState::Closed(CloseReason::EndOfStream);
    }
}

impl<R> DecryptingReader<R> {
    fn shutdown(&mut self, reason: CloseReason) {
        self.source = None;
        self.carry.wipe();
        self.state = ReaderState::Closed(reason);
    }

    /// Close the session: drops the source, wipes buffered plaintext and makes
    /// every later read fail with [`DzcryptError::Closed`].
    pub fn close(&mut self) {
        debug!(segments = self.next_index, "decrypting reader closed by caller");
        self.shutdown(CloseReason::Caller);
    }

    /// Give back the source, if the session still holds it.
    ///
    /// Buffered plaintext is discarded.
    pub fn into_inner(mut self) -> Option<R> {
        self.carry.wipe();
        self.source.take()
    }

    #[must_use]
    pub const fn state(&self) -> ReaderState {
        self.state
    }

    /// Whether a read may still produce bytes.
    #[must_use]
    pub fn has_remaining(&self) -> bool {
        match self.state {
            ReaderState::Open => true,
            ReaderState::Draining => !self.carry.is_empty(),
            ReaderState::Closed(_) => false,
        }
    }

    /// Segments pulled from the source so far.
    #[must_use]
    pub const fn segments_processed(&self) -> u64 {
        self.next_index
    }

    /// Plaintext bytes waiting in the carry-over buffer.
    #[must_use]
    pub fn buffered(&self) -> usize {
        self.carry.len()
    }
}

impl<R: Read> Read for DecryptingReader<R> {
    fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
        self.read_plain(buf).map_err(io::Error::from)
    }
}

impl<R> fmt::Debug for DecryptingReader<R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DecryptingReader")
            .field("state", &self.state)
            .field("segments_processed", &self.next_index)
            .field("buffered", &self.carry.len())
            .field("tail_policy", &self.framer.tail_policy())
            .finish_non_exhaustive()
    }
}
