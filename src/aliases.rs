//! # Secure-Gate Type Aliases
//!
//! Fixed-size secret buffers built on [`secure-gate`](https://github.com/Slurp9187/secure-gate).
//! Contents are only reachable through `.expose_secret()` / `.expose_secret_mut()`,
//! and `Debug` output is redacted, so keys never end up in logs by accident.
//!
//! ## Type Categories
//!
//! ### Protocol Secrets
//! - [`Secret16`] - 16-byte secret mixed into every derived key
//! - [`Iv8`] - 8-byte CBC initialization vector
//!
//! ### Session Secrets
//! - [`BlowfishKey16`] - 16-byte per-asset Blowfish key
//!
//! ### Working Buffers
//! - [`SpanBuffer<N>`] - Generic secure stack buffer for any size `N`
//! - [`SegmentBuffer2048`] - one segment, backing store of the carry-over buffer

use secure_gate::fixed_alias;

// ─────────────────────────────────────────────────────────────────────────────
// SpanBuffer: generic secure buffer (direct alias to secure-gate's Fixed)
// ─────────────────────────────────────────────────────────────────────────────
pub type SpanBuffer<const N: usize> = secure_gate::Fixed<[u8; N]>;

pub type SegmentBuffer2048 = SpanBuffer<2048>; // one stripe segment

// ─────────────────────────────────────────────────────────────────────────────
// Fixed-size concrete secrets: alphabetical order
// ─────────────────────────────────────────────────────────────────────────────
fixed_alias!(BlowfishKey16, 16); // per-asset session key
fixed_alias!(Iv8, 8); // CBC IV, restarted every segment
fixed_alias!(Secret16, 16); // protocol secret folded into the key
