//! Processing state machine.
//!
//! One call walks one input through the gates in strict order:
//!
//! ```text
//! ┌───────┐  magic  ┌──────────────┐ checksum ┌──────────────────┐ length ┌────────────────┐ dispatch ┌────────────┐
//! │ Start │────────>│ MagicChecked │─────────>│ ChecksumVerified │───────>│ FieldExtracted │─────────>│ Dispatched │
//! └───────┘         └──────────────┘          └──────────────────┘        └────────────────┘          └────────────┘
//!     │                    │                           │
//!     └────────────────────┴───────────────────────────┴─────> Rejected(kind)
//! ```
//!
//! Every failure is terminal. Nothing is retried and nothing survives the
//! call: a `Processor` holds only its executor, so calls are independent and
//! may run concurrently.

use fuzzgate_proto::{Frame, ProtocolError, checksum, field};

use crate::{
    dispatch::{Dispatch, dispatch},
    error::RejectionKind,
    exec::{CommandExecutor, SystemExecutor},
    outcome::{ProcessReport, ProcessingOutcome},
};

/// Position of a call in the pipeline
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ProcessorState {
    /// Nothing checked yet
    Start,
    /// Magic marker confirmed
    MagicChecked,
    /// Checksum matched
    ChecksumVerified,
    /// Command token sliced out
    FieldExtracted,
    /// Token dispatched; the report carries the outcome
    Dispatched,
    /// A gate failed
    Rejected(RejectionKind),
}

impl ProcessorState {
    /// Returns true for `Dispatched` and `Rejected`
    #[must_use]
    pub fn is_terminal(self) -> bool {
        matches!(self, Self::Dispatched | Self::Rejected(_))
    }

    /// The state a successful step leads to, `None` when terminal
    #[must_use]
    pub fn next(self) -> Option<Self> {
        match self {
            Self::Start => Some(Self::MagicChecked),
            Self::MagicChecked => Some(Self::ChecksumVerified),
            Self::ChecksumVerified => Some(Self::FieldExtracted),
            Self::FieldExtracted => Some(Self::Dispatched),
            Self::Dispatched | Self::Rejected(_) => None,
        }
    }

    fn advance(&mut self, next: Self) {
        debug_assert_eq!(self.next(), Some(next), "out-of-order transition from {:?}", self);
        tracing::trace!(from = ?self, to = ?next, "processor transition");
        *self = next;
    }
}

/// Validates and dispatches command frames.
///
/// Generic over the executor so tests can substitute a recording stub for
/// [`SystemExecutor`].
#[derive(Debug, Clone, Default)]
pub struct Processor<E> {
    executor: E,
}

impl<E: CommandExecutor> Processor<E> {
    /// Create a processor that sends the sensitive action to `executor`
    pub fn new(executor: E) -> Self {
        Self { executor }
    }

    /// Get the executor
    #[must_use]
    pub fn executor(&self) -> &E {
        &self.executor
    }

    /// Run one input through every gate and dispatch it.
    ///
    /// Never panics and never fails: every input yields exactly one report.
    pub fn process(&self, raw: &[u8]) -> ProcessReport {
        let mut state = ProcessorState::Start;

        match self.run(raw, &mut state) {
            Ok(Dispatch { outcome, sensitive }) => {
                state.advance(ProcessorState::Dispatched);
                ProcessReport { outcome, state, sensitive }
            },
            Err(err) => {
                let kind = RejectionKind::from(&err);

                tracing::debug!(
                    reached = ?state,
                    kind = %kind,
                    error = %err,
                    input_len = raw.len(),
                    "frame rejected"
                );

                ProcessReport {
                    outcome: ProcessingOutcome::rejected(kind, err.to_string()),
                    state: ProcessorState::Rejected(kind),
                    sensitive: None,
                }
            },
        }
    }

    fn run(&self, raw: &[u8], state: &mut ProcessorState) -> Result<Dispatch, ProtocolError> {
        let frame = Frame::validate(raw)?;
        state.advance(ProcessorState::MagicChecked);

        let sum = checksum::verify(&frame)?;
        state.advance(ProcessorState::ChecksumVerified);

        let command = field::extract(&frame, &sum)?;
        state.advance(ProcessorState::FieldExtracted);

        Ok(dispatch(command.token, &self.executor))
    }
}

/// Process `raw` with a default [`SystemExecutor`].
pub fn process(raw: &[u8]) -> ProcessReport {
    Processor::new(SystemExecutor::default()).process(raw)
}
