//! XOR checksum over the payload region.
//!
//! The checksum byte at offset 4 must equal the XOR-fold of every byte after
//! it: the length field, the token and any trailing bytes. An empty payload
//! region folds to zero.

use crate::{
    Frame, FrameHeader,
    errors::{ProtocolError, Result},
};

/// Outcome of comparing the stored checksum with the computed one
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ChecksumResult {
    /// Checksum byte carried by the frame
    pub expected: u8,
    /// XOR-fold of the payload region
    pub computed: u8,
    /// Whether the two are equal
    pub matched: bool,
}

/// XOR every byte of `bytes` into an accumulator starting at zero.
#[must_use]
pub fn xor_fold(bytes: &[u8]) -> u8 {
    bytes.iter().fold(0, |acc, byte| acc ^ byte)
}

/// Verify the frame checksum.
///
/// # Errors
///
/// - [`ProtocolError::MissingChecksum`] if the frame ends after the magic
///   marker
/// - [`ProtocolError::ChecksumMismatch`] if the stored and computed values
///   differ
pub fn verify(frame: &Frame<'_>) -> Result<ChecksumResult> {
    let Some(expected) = frame.checksum_byte() else {
        return Err(ProtocolError::MissingChecksum { offset: FrameHeader::CHECKSUM_OFFSET });
    };

    let computed = xor_fold(frame.payload());
    if computed != expected {
        return Err(ProtocolError::ChecksumMismatch { expected, computed });
    }

    Ok(ChecksumResult { expected, computed, matched: true })
}
