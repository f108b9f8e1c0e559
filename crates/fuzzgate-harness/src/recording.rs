//! Recording executor for tests and fuzz targets.

use std::sync::{Arc, Mutex};

use fuzzgate_core::{CommandExecutor, ExecError, ExecOutput};

/// What a [`RecordingExecutor`] answers when invoked
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Script {
    /// Report that the command started with this process id
    Succeed(u32),
    /// Report a spawn failure with this reason
    Fail(String),
}

/// Executor that never creates a process.
///
/// Every argument passed to [`CommandExecutor::execute`] is recorded, then
/// the scripted result is returned.
///
/// # Sharing
///
/// The log is wrapped in `Arc<Mutex<>>` so a clone handed to a
/// [`fuzzgate_core::Processor`] and the clone kept by the test observe the
/// same invocations.
#[derive(Debug, Clone)]
pub struct RecordingExecutor {
    script: Script,
    invocations: Arc<Mutex<Vec<String>>>,
}

impl RecordingExecutor {
    /// Mechanism name reported by this executor
    pub const MECHANISM: &'static str = "recording-executor";

    /// Process id reported by [`RecordingExecutor::succeeding`]
    pub const FAKE_PID: u32 = 4242;

    /// Executor that reports every command as started
    pub fn succeeding() -> Self {
        Self::with_script(Script::Succeed(Self::FAKE_PID))
    }

    /// Executor that fails every command with `reason`
    pub fn failing(reason: impl Into<String>) -> Self {
        Self::with_script(Script::Fail(reason.into()))
    }

    /// Executor answering with `script`
    pub fn with_script(script: Script) -> Self {
        Self { script, invocations: Arc::new(Mutex::new(Vec::new())) }
    }

    /// Arguments received so far, in call order
    pub fn invocations(&self) -> Vec<String> {
        self.lock().clone()
    }

    /// Number of calls so far
    pub fn call_count(&self) -> usize {
        self.lock().len()
    }

    /// Forget recorded invocations
    pub fn clear(&self) {
        self.lock().clear();
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, Vec<String>> {
        // A panicking test thread may poison the lock; the log is still valid.
        self.invocations.lock().unwrap_or_else(std::sync::PoisonError::into_inner)
    }
}

impl Default for RecordingExecutor {
    fn default() -> Self {
        Self::succeeding()
    }
}

impl CommandExecutor for RecordingExecutor {
    fn mechanism(&self) -> &'static str {
        Self::MECHANISM
    }

    fn execute(&self, command: &str) -> Result<ExecOutput, ExecError> {
        self.lock().push(command.to_string());

        match &self.script {
            Script::Succeed(pid) => Ok(ExecOutput { pid: *pid }),
            Script::Fail(reason) => Err(ExecError::Spawn {
                mechanism: Self::MECHANISM,
                command: command.to_string(),
                reason: reason.clone(),
            }),
        }
    }
}
