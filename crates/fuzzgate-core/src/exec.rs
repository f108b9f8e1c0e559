//! Host execution seam.
//!
//! The `CommandExecutor` trait is the only way the processor can reach host
//! process creation. Dispatch logic stays pure; the executor is the single
//! place with an external effect.
//!
//! The executor is implemented twice:
//!
//! 1. [`SystemExecutor`] (this crate): spawns a real process via
//!    `std::process::Command` and returns as soon as the host accepted it
//! 2. `RecordingExecutor` (fuzzgate-harness): records the argument and returns
//!    a scripted result without creating a process
//!
//! # Invariants
//!
//! - Isolation: implementations must not share mutable global state
//! - Attribution: every error names the mechanism (see [`ExecError`])

use std::{
    ffi::OsString,
    fmt,
    path::PathBuf,
    process::{Child, Command, Stdio},
    thread,
};

use crate::error::ExecError;

/// Narrow interface to host command execution.
pub trait CommandExecutor: Send + Sync {
    /// Name of the execution mechanism, reported with every invocation and
    /// every failure.
    fn mechanism(&self) -> &'static str;

    /// Start `command` on the host.
    ///
    /// Must not wait for the command to finish.
    ///
    /// # Errors
    ///
    /// Returns [`ExecError`] if the mechanism rejects the argument or the
    /// host refuses to run it.
    fn execute(&self, command: &str) -> Result<ExecOutput, ExecError>;
}

/// Result of a host command that was started
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ExecOutput {
    /// Host process id of the started command
    pub pid: u32,
}

impl fmt::Display for ExecOutput {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "spawned pid {}", self.pid)
    }
}

/// Configuration for [`SystemExecutor`]
#[derive(Debug, Clone, Default)]
pub struct ExecConfig {
    /// Working directory for spawned commands, inherited when `None`
    pub working_dir: Option<PathBuf>,
    /// Start commands with an empty environment
    pub clear_env: bool,
    /// `PATH` used to resolve the program name, inherited when `None`
    pub search_path: Option<OsString>,
}

/// Executor backed by `std::process::Command`.
///
/// Stdio is always detached so a spawned command can neither block on input
/// nor interleave with the caller's output. The caller never waits for the
/// child: a detached reaper thread collects its exit status.
#[derive(Debug, Clone, Default)]
pub struct SystemExecutor {
    config: ExecConfig,
}

impl SystemExecutor {
    /// Mechanism name reported by this executor
    pub const MECHANISM: &'static str = "std::process::Command";

    /// Create an executor with the given configuration
    #[must_use]
    pub fn new(config: ExecConfig) -> Self {
        Self { config }
    }
}

fn reap(mut child: Child) {
    let pid = child.id();
    let spawned = thread::Builder::new().name(format!("reap-{}", pid)).spawn(move || {
        if let Err(e) = child.wait() {
            tracing::debug!(pid, error = %e, "failed to reap command");
        }
    });

    if let Err(e) = spawned {
        tracing::debug!(pid, error = %e, "no reaper thread, child left unreaped");
    }
}

impl CommandExecutor for SystemExecutor {
    fn mechanism(&self) -> &'static str {
        Self::MECHANISM
    }

    fn execute(&self, command: &str) -> Result<ExecOutput, ExecError> {
        if command.is_empty() || command.contains('\0') {
            return Err(ExecError::InvalidArgument {
                mechanism: Self::MECHANISM,
                reason: format!("unusable program name {:?}", command),
            });
        }

        let mut cmd = Command::new(command);
        cmd.stdin(Stdio::null()).stdout(Stdio::null()).stderr(Stdio::null());

        if let Some(dir) = &self.config.working_dir {
            cmd.current_dir(dir);
        }
        if self.config.clear_env {
            cmd.env_clear();
        }
        // Setting PATH on the command also makes it the lookup path for the
        // program name on Unix.
        if let Some(path) = &self.config.search_path {
            cmd.env("PATH", path);
        }

        let child = cmd.spawn().map_err(|e| {
            tracing::debug!(
                mechanism = Self::MECHANISM,
                command,
                error = %e,
                "host refused command"
            );
            ExecError::Spawn {
                mechanism: Self::MECHANISM,
                command: command.to_string(),
                reason: e.to_string(),
            }
        })?;

        let output = ExecOutput { pid: child.id() };
        tracing::debug!(mechanism = Self::MECHANISM, command, pid = output.pid, "command spawned");
        reap(child);

        Ok(output)
    }
}
