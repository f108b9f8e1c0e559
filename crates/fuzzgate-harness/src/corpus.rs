//! Seed inputs.
//!
//! Well-formed frames a fuzzer can start from, one per branch of the
//! dispatcher, so the first mutation rounds already pass every gate.

use bytes::{Bytes, BytesMut};
use fuzzgate_core::dispatch::TRIGGER_WORD;
use fuzzgate_proto::{Frame, Result};

/// A named seed input
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Seed {
    /// File name to use when writing the seed to a corpus directory
    pub name: &'static str,
    /// Encoded frame
    pub bytes: Bytes,
}

/// Encode a frame for `token`.
///
/// # Errors
///
/// Returns [`fuzzgate_proto::ProtocolError::TokenTooLong`] for tokens longer
/// than 255 bytes.
pub fn frame_for(token: &[u8]) -> Result<Bytes> {
    let mut buf = BytesMut::new();
    Frame::encode(token, &mut buf)?;
    Ok(buf.freeze())
}

/// One seed per dispatcher branch: empty token, each table entry and an
/// unknown token.
pub fn seed_corpus() -> Result<Vec<Seed>> {
    let tokens: [(&'static str, &[u8]); 5] = [
        ("empty", b""),
        ("ping", b"ping"),
        ("status", b"status"),
        ("unknown", b"hello"),
        ("trigger", TRIGGER_WORD),
    ];

    tokens
        .into_iter()
        .map(|(name, token)| Ok(Seed { name, bytes: frame_for(token)? }))
        .collect()
}
