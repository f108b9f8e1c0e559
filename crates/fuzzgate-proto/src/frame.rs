//! Frame view over raw input.
//!
//! A `Frame` only exists once the magic marker has been confirmed. It borrows
//! the input and never copies it; the later gates read through it.

use bytes::BufMut;

use crate::{
    FrameHeader,
    errors::{ProtocolError, Result},
};

/// Borrowed view over an input that starts with the magic marker
///
/// # Invariants
///
/// - **Magic**: `raw[..4] == FrameHeader::MAGIC`. Enforced by
///   [`Frame::validate`], the only constructor.
///
/// Nothing else is guaranteed: the checksum byte, length byte and token may
/// all be absent or wrong.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Frame<'a> {
    raw: &'a [u8],
}

impl<'a> Frame<'a> {
    /// Confirm the magic marker and wrap the input.
    ///
    /// # Errors
    ///
    /// Returns [`ProtocolError::InvalidMagic`] if the input is shorter than
    /// four bytes or any of the first four bytes differs from `FUZZ`.
    pub fn validate(raw: &'a [u8]) -> Result<Self> {
        match raw.get(..FrameHeader::MAGIC.len()) {
            Some(magic) if magic == FrameHeader::MAGIC => Ok(Self { raw }),
            _ => Err(ProtocolError::InvalidMagic),
        }
    }

    /// Whether the magic marker matched. Always true for a constructed frame.
    #[must_use]
    pub fn magic_ok(&self) -> bool {
        self.raw.starts_with(&FrameHeader::MAGIC)
    }

    /// Offset of the first byte covered by the checksum
    #[must_use]
    pub fn payload_offset(&self) -> usize {
        FrameHeader::LENGTH_OFFSET
    }

    /// The whole input
    #[must_use]
    pub fn raw(&self) -> &'a [u8] {
        self.raw
    }

    /// Stored checksum byte, if present
    #[must_use]
    pub fn checksum_byte(&self) -> Option<u8> {
        self.raw.get(FrameHeader::CHECKSUM_OFFSET).copied()
    }

    /// Checksummed region: every byte after the checksum byte
    #[must_use]
    pub fn payload(&self) -> &'a [u8] {
        self.raw.get(self.payload_offset()..).unwrap_or_default()
    }

    /// Encode a well-formed frame carrying `token`.
    ///
    /// Writes: `[magic] + [checksum] + [length] + [token]`
    ///
    /// # Errors
    ///
    /// Returns [`ProtocolError::TokenTooLong`] if the token exceeds
    /// [`FrameHeader::MAX_TOKEN_LEN`]. Nothing is written in that case.
    pub fn encode(token: &[u8], dst: &mut impl BufMut) -> Result<()> {
        let header = FrameHeader::for_token(token)?;

        dst.put_slice(&header.to_bytes());
        dst.put_slice(token);

        Ok(())
    }

    /// Encode a well-formed frame carrying `token` into a fresh buffer.
    ///
    /// # Errors
    ///
    /// See [`Frame::encode`].
    pub fn encode_to_vec(token: &[u8]) -> Result<Vec<u8>> {
        let mut wire = Vec::with_capacity(FrameHeader::SIZE + token.len());
        Self::encode(token, &mut wire)?;
        Ok(wire)
    }
}
