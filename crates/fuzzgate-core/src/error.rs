//! Error taxonomy for the processing pipeline.
//!
//! Two layers:
//! - [`RejectionKind`]: the classification every rejected call reports
//! - [`ExecError`]: failures of the host execution mechanism itself
//!
//! Wire-level failures arrive as [`fuzzgate_proto::ProtocolError`] and are
//! folded into a [`RejectionKind`] at the processor boundary.

use std::fmt;

use fuzzgate_proto::ProtocolError;
use thiserror::Error;

/// Classification of a rejected call.
///
/// The first three kinds are ordinary malformed input and share one
/// severity. Only [`RejectionKind::DispatchExecutionFailure`] is security
/// relevant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RejectionKind {
    /// Input shorter than the magic marker, or marker mismatch
    BadMagic,
    /// Checksum byte missing or not equal to the payload XOR-fold
    ChecksumMismatch,
    /// Length byte missing or token runs past the end of the input
    TruncatedOrOversizedField,
    /// The sensitive action was reached and host execution failed
    DispatchExecutionFailure,
}

impl RejectionKind {
    /// Returns true if this kind indicates the sensitive sink was reached.
    #[must_use]
    pub const fn is_security_relevant(self) -> bool {
        matches!(self, Self::DispatchExecutionFailure)
    }

    /// Stable lowercase name, suitable for structured log fields
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::BadMagic => "bad_magic",
            Self::ChecksumMismatch => "checksum_mismatch",
            Self::TruncatedOrOversizedField => "truncated_or_oversized_field",
            Self::DispatchExecutionFailure => "dispatch_execution_failure",
        }
    }
}

impl fmt::Display for RejectionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Map a wire-level failure to the gate that raised it
impl From<&ProtocolError> for RejectionKind {
    fn from(err: &ProtocolError) -> Self {
        match err {
            ProtocolError::InvalidMagic => Self::BadMagic,
            ProtocolError::MissingChecksum { .. } | ProtocolError::ChecksumMismatch { .. } => {
                Self::ChecksumMismatch
            },
            ProtocolError::FieldTruncated { .. } | ProtocolError::TokenTooLong { .. } => {
                Self::TruncatedOrOversizedField
            },
        }
    }
}

/// Failure of the host execution mechanism.
///
/// Every variant carries the mechanism name and its `Display` output starts
/// with it, so a detector can attribute the failure without guessing.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ExecError {
    /// The host refused to start the process
    #[error("{mechanism} failed to run {command:?}: {reason}")]
    Spawn {
        /// Execution mechanism, e.g. `std::process::Command`
        mechanism: &'static str,
        /// Command that was passed to the mechanism
        command: String,
        /// Host-reported reason
        reason: String,
    },

    /// The mechanism rejected the argument before trying to run it
    #[error("{mechanism} rejected argument: {reason}")]
    InvalidArgument {
        /// Execution mechanism, e.g. `std::process::Command`
        mechanism: &'static str,
        /// Why the argument was rejected
        reason: String,
    },
}

impl ExecError {
    /// Name of the execution mechanism that failed
    #[must_use]
    pub fn mechanism(&self) -> &'static str {
        match self {
            Self::Spawn { mechanism, .. } | Self::InvalidArgument { mechanism, .. } => mechanism,
        }
    }
}
