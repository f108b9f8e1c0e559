//! Fixed frame header with zero-copy parsing.
//!
//! The header is the first six bytes of every command frame:
//!
//! ```text
//! ┌──────────────┬──────────┬────────┬─────────────────┐
//! │ Magic "FUZZ" │ Checksum │ Length │ Token ...       │
//! │ 4 bytes      │ 1 byte   │ 1 byte │ `length` bytes  │
//! └──────────────┴──────────┴────────┴─────────────────┘
//! ```

use zerocopy::{FromBytes, Immutable, IntoBytes, KnownLayout};

use crate::{
    checksum::xor_fold,
    errors::{ProtocolError, Result},
};

/// Fixed 6-byte frame header
///
/// Every field is a single byte (or byte array), so all 6-byte patterns are
/// valid and the struct can be cast straight from untrusted input. Casting
/// does NOT validate anything; the gates in [`crate::Frame`],
/// [`crate::checksum`] and [`crate::field`] do that in order.
#[repr(C)]
#[derive(Clone, Copy, PartialEq, Eq, FromBytes, IntoBytes, KnownLayout, Immutable)]
pub struct FrameHeader {
    magic: [u8; 4], // "FUZZ"
    checksum: u8,   // XOR of every byte from offset 5 to the end
    length: u8,     // token length
}

impl FrameHeader {
    /// Size of the serialized header (6 bytes)
    pub const SIZE: usize = 6;

    /// Magic marker: "FUZZ" in ASCII
    pub const MAGIC: [u8; 4] = *b"FUZZ";

    /// Offset of the checksum byte
    pub const CHECKSUM_OFFSET: usize = 4;

    /// Offset of the length byte, which is also where the checksummed
    /// payload region begins
    pub const LENGTH_OFFSET: usize = 5;

    /// Offset of the first token byte
    pub const TOKEN_OFFSET: usize = 6;

    /// Largest token the single-byte length field can describe
    pub const MAX_TOKEN_LEN: usize = u8::MAX as usize;

    /// Build the header that frames `token`, with a checksum covering the
    /// length byte and the token.
    ///
    /// # Errors
    ///
    /// Returns [`ProtocolError::TokenTooLong`] if the token exceeds
    /// [`FrameHeader::MAX_TOKEN_LEN`].
    pub fn for_token(token: &[u8]) -> Result<Self> {
        let length = u8::try_from(token.len()).map_err(|_| ProtocolError::TokenTooLong {
            len: token.len(),
            max: Self::MAX_TOKEN_LEN,
        })?;

        Ok(Self { magic: Self::MAGIC, checksum: length ^ xor_fold(token), length })
    }

    /// Cast the leading bytes of `bytes` to a header without validation.
    ///
    /// Returns `None` if fewer than [`FrameHeader::SIZE`] bytes are present.
    #[must_use]
    pub fn peek(bytes: &[u8]) -> Option<&Self> {
        Self::ref_from_prefix(bytes).ok().map(|(header, _)| header)
    }

    /// Serialize header to bytes
    #[must_use]
    #[allow(clippy::wrong_self_convention)]
    pub fn to_bytes(&self) -> [u8; Self::SIZE] {
        let mut arr = [0u8; Self::SIZE];
        arr.copy_from_slice(IntoBytes::as_bytes(self));
        arr
    }

    /// Get the magic marker
    #[must_use]
    pub fn magic(&self) -> [u8; 4] {
        self.magic
    }

    /// Get the stored checksum byte
    #[must_use]
    pub fn checksum(&self) -> u8 {
        self.checksum
    }

    /// Get the token length
    #[must_use]
    pub fn length(&self) -> u8 {
        self.length
    }
}

impl std::fmt::Debug for FrameHeader {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FrameHeader")
            .field("magic", &String::from_utf8_lossy(&self.magic))
            .field("checksum", &format!("{:#04x}", self.checksum))
            .field("length", &self.length)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use proptest::prelude::*;

    use super::*;

    #[test]
    fn header_size() {
        assert_eq!(std::mem::size_of::<FrameHeader>(), FrameHeader::SIZE);
        assert_eq!(FrameHeader::TOKEN_OFFSET, FrameHeader::SIZE);
    }

    #[test]
    fn peek_needs_full_header() {
        assert!(FrameHeader::peek(b"FUZZ\x00").is_none());

        let header = FrameHeader::peek(b"FUZZ\x07\x03abc").expect("six bytes present");
        assert_eq!(header.magic(), FrameHeader::MAGIC);
        assert_eq!(header.checksum(), 0x07);
        assert_eq!(header.length(), 3);
    }

    #[test]
    fn trigger_header_checksum() {
        let header = FrameHeader::for_token(b"jazze").expect("fits");
        let expected = [0x05u8, b'j', b'a', b'z', b'z', b'e'].iter().fold(0, |acc, b| acc ^ b);

        assert_eq!(header.length(), 5);
        assert_eq!(header.checksum(), expected);
        assert_eq!(&header.to_bytes()[..4], b"FUZZ");
    }

    #[test]
    fn reject_oversized_token() {
        let token = vec![b'a'; FrameHeader::MAX_TOKEN_LEN + 1];
        assert_eq!(
            FrameHeader::for_token(&token),
            Err(ProtocolError::TokenTooLong { len: 256, max: 255 })
        );
    }

    proptest! {
        #[test]
        fn header_bytes_cast_back(token in prop::collection::vec(any::<u8>(), 0..=255)) {
            let header = FrameHeader::for_token(&token).expect("fits");
            let bytes = header.to_bytes();
            let peeked = FrameHeader::peek(&bytes).expect("six bytes present");

            prop_assert_eq!(&header, peeked);
            prop_assert_eq!(peeked.length() as usize, token.len());
        }
    }
}
