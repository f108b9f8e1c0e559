//! Length-prefixed command field extraction.

use crate::{
    Frame, FrameHeader,
    checksum::ChecksumResult,
    errors::{ProtocolError, Result},
};

/// Command field sliced out of a verified frame
///
/// # Invariants
///
/// - `token.len() == length as usize`
/// - `token` lies entirely inside the input
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CommandField<'a> {
    /// Value of the length byte
    pub length: u8,
    /// Exactly `length` bytes following the length byte
    pub token: &'a [u8],
}

/// Read the length byte and slice out the command token.
///
/// Bytes after the token are ignored. A zero length yields an empty token.
///
/// # Errors
///
/// - [`ProtocolError::ChecksumMismatch`] if `checksum` did not match; the
///   field of an unverified frame is never read
/// - [`ProtocolError::FieldTruncated`] if the length byte is missing or
///   `6 + length` exceeds the input length
pub fn extract<'a>(frame: &Frame<'a>, checksum: &ChecksumResult) -> Result<CommandField<'a>> {
    if !checksum.matched {
        return Err(ProtocolError::ChecksumMismatch {
            expected: checksum.expected,
            computed: checksum.computed,
        });
    }

    let raw = frame.raw();
    let available = raw.len().saturating_sub(FrameHeader::LENGTH_OFFSET);

    let Some(header) = FrameHeader::peek(raw) else {
        return Err(ProtocolError::FieldTruncated { needed: 1, available });
    };

    let length = header.length();
    let end = FrameHeader::TOKEN_OFFSET + usize::from(length);
    let token = raw
        .get(FrameHeader::TOKEN_OFFSET..end)
        .ok_or(ProtocolError::FieldTruncated { needed: 1 + usize::from(length), available })?;

    debug_assert_eq!(token.len(), usize::from(length));

    Ok(CommandField { length, token })
}

#[cfg(test)]
mod tests {
    use proptest::prelude::*;

    use super::*;
    use crate::checksum;

    fn verified(raw: &[u8]) -> (Frame<'_>, ChecksumResult) {
        let frame = Frame::validate(raw).expect("magic is valid");
        let result = checksum::verify(&frame).expect("checksum is valid");
        (frame, result)
    }

    #[test]
    fn zero_length_token_is_empty() {
        let (frame, sum) = verified(b"FUZZ\x00\x00");
        let field = extract(&frame, &sum).expect("empty token is allowed");

        assert_eq!(field.length, 0);
        assert!(field.token.is_empty());
    }

    #[test]
    fn missing_length_byte() {
        let (frame, sum) = verified(b"FUZZ\x00");
        assert_eq!(
            extract(&frame, &sum),
            Err(ProtocolError::FieldTruncated { needed: 1, available: 0 })
        );
    }

    #[test]
    fn length_past_end() {
        // length 4, only "abc" present; checksum = 0x04 ^ 'a' ^ 'b' ^ 'c'
        let sum = 0x04 ^ b'a' ^ b'b' ^ b'c';
        let raw = [b'F', b'U', b'Z', b'Z', sum, 0x04, b'a', b'b', b'c'];
        let (frame, result) = verified(&raw);

        assert_eq!(
            extract(&frame, &result),
            Err(ProtocolError::FieldTruncated { needed: 5, available: 4 })
        );
    }

    #[test]
    fn trailing_bytes_ignored() {
        // length 2 "hi", trailing "!!" cancels out in the checksum
        let raw = [b'F', b'U', b'Z', b'Z', 0x02 ^ b'h' ^ b'i', 0x02, b'h', b'i', b'!', b'!'];
        let (frame, sum) = verified(&raw);

        assert_eq!(extract(&frame, &sum).map(|f| f.token), Ok(&b"hi"[..]));
    }

    #[test]
    fn unmatched_checksum_is_refused() {
        let frame = Frame::validate(b"FUZZ\x00\x00").expect("magic is valid");
        let forged = ChecksumResult { expected: 1, computed: 0, matched: false };

        assert_eq!(
            extract(&frame, &forged),
            Err(ProtocolError::ChecksumMismatch { expected: 1, computed: 0 })
        );
    }

    proptest! {
        #[test]
        fn token_fits_input(length in any::<u8>(), body in prop::collection::vec(any::<u8>(), 0..300)) {
            let mut raw = b"FUZZ".to_vec();
            raw.push(length ^ checksum::xor_fold(&body));
            raw.push(length);
            raw.extend_from_slice(&body);

            let (frame, sum) = verified(&raw);
            match extract(&frame, &sum) {
                Ok(field) => {
                    prop_assert!(usize::from(length) <= body.len());
                    prop_assert_eq!(field.token, &body[..usize::from(length)]);
                },
                Err(err) => {
                    prop_assert!(usize::from(length) > body.len());
                    let is_truncated = matches!(err, ProtocolError::FieldTruncated { .. });
                    prop_assert!(is_truncated);
                },
            }
        }
    }
}
