//! Error types for the fuzzgate wire format.
//!
//! Every gate reports its own structured variant so callers can classify a
//! rejection without inspecting message text.

use thiserror::Error;

/// Errors raised while validating or encoding a command frame.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ProtocolError {
    // Frame validation
    /// Input is shorter than the magic marker or does not start with it
    #[error("invalid magic marker: expected \"FUZZ\"")]
    InvalidMagic,

    // Checksum verification
    /// Frame ends right after the magic marker, leaving no checksum byte
    #[error("missing checksum byte at offset {offset}")]
    MissingChecksum {
        /// Offset where the checksum byte was expected
        offset: usize,
    },

    /// Stored checksum does not equal the XOR-fold of the payload region
    #[error("checksum mismatch: stored {expected:#04x}, computed {computed:#04x}")]
    ChecksumMismatch {
        /// Checksum byte carried by the frame
        expected: u8,
        /// XOR-fold of the payload region
        computed: u8,
    },

    // Field extraction
    /// Length field is missing or claims more token bytes than are available
    #[error("command field truncated: needs {needed} bytes, only {available} available")]
    FieldTruncated {
        /// Bytes the field needs: the length byte plus the claimed token
        needed: usize,
        /// Bytes actually present from the length field onward
        available: usize,
    },

    // Encoding
    /// Token does not fit in the single-byte length field
    #[error("command token too long: {len} bytes exceeds maximum {max}")]
    TokenTooLong {
        /// Token length in bytes
        len: usize,
        /// Largest encodable token
        max: usize,
    },
}

/// Convenient Result type alias for protocol operations
pub type Result<T> = std::result::Result<T, ProtocolError>;
