//! Tagged results of a processing call.

use std::fmt;

use crate::{error::RejectionKind, processor::ProcessorState};

/// A rejected call: which kind, and a human-readable detail
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Rejection {
    /// Classification
    pub kind: RejectionKind,
    /// Detail message; for execution failures it names the mechanism
    pub detail: String,
}

/// Result of dispatching a frame, or the gate that stopped it
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ProcessingOutcome {
    /// The frame was dispatched and the action produced this message
    Success(String),
    /// A gate or the sensitive action failed
    Rejected(Rejection),
}

impl ProcessingOutcome {
    /// Build a rejection outcome
    #[must_use]
    pub fn rejected(kind: RejectionKind, detail: impl Into<String>) -> Self {
        Self::Rejected(Rejection { kind, detail: detail.into() })
    }

    /// Returns true for [`ProcessingOutcome::Success`]
    #[must_use]
    pub fn is_success(&self) -> bool {
        matches!(self, Self::Success(_))
    }

    /// Rejection kind, if rejected
    #[must_use]
    pub fn rejection_kind(&self) -> Option<RejectionKind> {
        match self {
            Self::Success(_) => None,
            Self::Rejected(rejection) => Some(rejection.kind),
        }
    }
}

/// Textual result handed to callers that only want a string
impl fmt::Display for ProcessingOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Success(message) => f.write_str(message),
            Self::Rejected(Rejection { kind, detail }) => {
                write!(f, "rejected ({}): {}", kind, detail)
            },
        }
    }
}

/// Record that the sensitive action was invoked.
///
/// Present whenever dispatch reached the host execution seam, whether or not
/// the host then ran the command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SensitiveInvocation {
    /// Exact argument handed to the executor
    pub argument: String,
    /// Mechanism the executor reported
    pub mechanism: &'static str,
}

/// Everything one call to the processor produced
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProcessReport {
    /// Tagged outcome
    pub outcome: ProcessingOutcome,
    /// Terminal state: [`ProcessorState::Dispatched`] or
    /// [`ProcessorState::Rejected`]
    pub state: ProcessorState,
    /// Set when the sensitive action was invoked
    pub sensitive: Option<SensitiveInvocation>,
}

impl ProcessReport {
    /// Returns true if the sensitive action was invoked or host execution
    /// failed.
    #[must_use]
    pub fn is_security_relevant(&self) -> bool {
        self.sensitive.is_some()
            || self.outcome.rejection_kind().is_some_and(RejectionKind::is_security_relevant)
    }
}

impl fmt::Display for ProcessReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.outcome, f)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn outcome_text() {
        assert_eq!(ProcessingOutcome::Success("pong".to_string()).to_string(), "pong");
        assert_eq!(
            ProcessingOutcome::rejected(RejectionKind::BadMagic, "invalid magic marker")
                .to_string(),
            "rejected (bad_magic): invalid magic marker"
        );
    }

    #[test]
    fn sensitive_invocation_alone_is_security_relevant() {
        let report = ProcessReport {
            outcome: ProcessingOutcome::Success("executed: jazze (spawned pid 7)".to_string()),
            state: ProcessorState::Dispatched,
            sensitive: Some(SensitiveInvocation {
                argument: "jazze".to_string(),
                mechanism: "std::process::Command",
            }),
        };

        assert!(report.outcome.is_success());
        assert!(report.is_security_relevant());
    }

    #[test]
    fn malformed_input_is_not_security_relevant() {
        let report = ProcessReport {
            outcome: ProcessingOutcome::rejected(RejectionKind::ChecksumMismatch, "mismatch"),
            state: ProcessorState::Rejected(RejectionKind::ChecksumMismatch),
            sensitive: None,
        };

        assert!(!report.is_security_relevant());
    }
}
