//! fuzzgate processing core
//!
//! This crate turns a validated command frame into an outcome. It owns the
//! processing state machine, the static dispatch table and the one seam
//! through which a frame can reach host process execution.
//!
//! # Architecture
//!
//! ```text
//!   raw bytes
//!       ↓
//! ┌─────────────────────────────┐
//! │ fuzzgate-proto              │
//! │ - magic / checksum / length │
//! └─────────────────────────────┘
//!       ↓ command token
//! ┌─────────────────────────────┐
//! │ fuzzgate-core               │
//! │ - Processor state machine   │
//! │ - dispatch table            │
//! └─────────────────────────────┘
//!       ↓ Action::Execute only
//! ┌─────────────────────────────┐
//! │ CommandExecutor             │
//! │ - SystemExecutor            │
//! │ - RecordingExecutor (tests) │
//! └─────────────────────────────┘
//! ```
//!
//! # Key Principles
//!
//! - No hidden state: a call depends only on its input and the static table
//! - Single sink: only [`dispatch::Action::Execute`] touches the executor
//! - Tagged outcomes: callers match on [`ProcessingOutcome`] and
//!   [`RejectionKind`], never on message text
//!
//! # Modules
//!
//! - [`processor`]: state machine driving the gates
//! - [`dispatch`]: dispatch table and dispatcher
//! - [`exec`]: executor seam and the `std::process` implementation
//! - [`outcome`]: tagged results
//! - [`error`]: rejection kinds and executor errors

#![forbid(unsafe_code)]
#![deny(missing_docs)]

pub mod dispatch;
pub mod error;
pub mod exec;
pub mod outcome;
pub mod processor;

pub use error::{ExecError, RejectionKind};
pub use exec::{CommandExecutor, ExecConfig, ExecOutput, SystemExecutor};
pub use outcome::{ProcessReport, ProcessingOutcome, Rejection, SensitiveInvocation};
pub use processor::{Processor, ProcessorState, process};
