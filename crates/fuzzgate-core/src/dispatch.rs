//! Static dispatch table and command dispatcher.
//!
//! Tokens are matched byte-for-byte against [`DISPATCH_TABLE`]. Unknown
//! tokens are not errors: they produce a benign `no-op` message.
//!
//! # Security
//!
//! - **Single Sink**: [`Action::Execute`] is the only action that reaches
//!   [`CommandExecutor::execute`], and only the trigger word maps to it.
//! - **Immutable Table**: the table is a `static` slice, so no caller can add
//!   or rebind entries at runtime.

use crate::{
    error::RejectionKind,
    exec::CommandExecutor,
    outcome::{ProcessingOutcome, SensitiveInvocation},
};

/// Token that maps to the sensitive action
pub const TRIGGER_WORD: &[u8] = b"jazze";

/// Action bound to a recognised token
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Action {
    /// Liveness probe, answers `pong`
    Ping,
    /// Status probe, answers `ok`
    Status,
    /// Run the token as a host command
    Execute,
}

impl Action {
    /// Returns true if this action reaches host execution
    #[must_use]
    pub const fn is_sensitive(self) -> bool {
        matches!(self, Self::Execute)
    }
}

/// One row of the dispatch table
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DispatchEntry {
    /// Exact token bytes
    pub token: &'static [u8],
    /// Bound action
    pub action: Action,
}

/// Process-wide dispatch table
pub static DISPATCH_TABLE: &[DispatchEntry] = &[
    DispatchEntry { token: b"ping", action: Action::Ping },
    DispatchEntry { token: b"status", action: Action::Status },
    DispatchEntry { token: TRIGGER_WORD, action: Action::Execute },
];

/// Look up the action bound to `token`
#[must_use]
pub fn lookup(token: &[u8]) -> Option<Action> {
    DISPATCH_TABLE.iter().find(|entry| entry.token == token).map(|entry| entry.action)
}

/// What dispatching one token produced
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Dispatch {
    /// Tagged outcome of the action
    pub outcome: ProcessingOutcome,
    /// Set when the sensitive action was invoked
    pub sensitive: Option<SensitiveInvocation>,
}

impl Dispatch {
    fn benign(message: impl Into<String>) -> Self {
        Self { outcome: ProcessingOutcome::Success(message.into()), sensitive: None }
    }
}

/// Dispatch `token` through the table.
///
/// The executor is called only for [`Action::Execute`], with the token text
/// as its sole argument.
pub fn dispatch<E>(token: &[u8], executor: &E) -> Dispatch
where
    E: CommandExecutor + ?Sized,
{
    let text = String::from_utf8_lossy(token);
    let action = lookup(token);

    tracing::debug!(token = %text, action = ?action, "dispatching command token");

    match action {
        None => Dispatch::benign(format!("no-op: {}", text)),
        Some(Action::Ping) => Dispatch::benign("pong"),
        Some(Action::Status) => Dispatch::benign("ok"),
        Some(Action::Execute) => execute(&text, executor),
    }
}

fn execute<E>(command: &str, executor: &E) -> Dispatch
where
    E: CommandExecutor + ?Sized,
{
    let sensitive =
        SensitiveInvocation { argument: command.to_string(), mechanism: executor.mechanism() };

    let outcome = match executor.execute(command) {
        Ok(output) => ProcessingOutcome::Success(format!("executed: {} ({})", command, output)),
        Err(err) => {
            ProcessingOutcome::rejected(RejectionKind::DispatchExecutionFailure, err.to_string())
        },
    };

    Dispatch { outcome, sensitive: Some(sensitive) }
}
