use std::fmt;

/// Result of running a single shell command.
///
/// Produced by a `CommandExecutor` and consumed immediately by the runner.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ExecutionOutcome {
    /// Exited with status zero and wrote nothing to stderr.
    Success,
    /// Could not be started, or exited abnormally.
    ProcessError { detail: String },
    /// Ran to completion but wrote to its error stream.
    Diagnostic { stderr: String },
}

impl ExecutionOutcome {
    pub fn is_success(&self) -> bool {
        matches!(self, Self::Success)
    }

    /// Failure kind and the text explaining it, or `None` on success.
    pub fn failure(&self) -> Option<(FailureKind, &str)> {
        match self {
            Self::Success => None,
            Self::ProcessError { detail } => Some((FailureKind::Process, detail)),
            Self::Diagnostic { stderr } => Some((FailureKind::Diagnostic, stderr)),
        }
    }
}

/// Why a command was considered failed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FailureKind {
    Process,
    Diagnostic,
}

impl fmt::Display for FailureKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Process => write!(f, "process error"),
            Self::Diagnostic => write!(f, "diagnostic output"),
        }
    }
}

/// Lifecycle of one runner invocation.
///
/// ```text
/// Idle ──start──▶ Running(n) ──ok, n>1──▶ Running(n-1)
///                     │ ok, n==1                │
///                     ▼                         ▼ error
///                 Succeeded                  Failed
/// ```
///
/// `Succeeded` and `Failed` are terminal.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RunState {
    Idle,
    Running { remaining: usize },
    Succeeded,
    Failed,
}

impl RunState {
    /// Leave `Idle` for a queue holding `queued` commands.
    ///
    /// An empty queue has nothing to run and succeeds immediately.
    pub fn start(self, queued: usize) -> Self {
        match self {
            Self::Idle if queued == 0 => Self::Succeeded,
            Self::Idle => Self::Running { remaining: queued },
            other => other,
        }
    }

    /// Apply the outcome of the command that just finished.
    pub fn advance(self, outcome: &ExecutionOutcome) -> Self {
        match self {
            Self::Running { .. } if !outcome.is_success() => Self::Failed,
            Self::Running { remaining } if remaining <= 1 => Self::Succeeded,
            Self::Running { remaining } => Self::Running {
                remaining: remaining - 1,
            },
            other => other,
        }
    }

    pub fn is_terminal(&self) -> bool {
        matches!(self, Self::Succeeded | Self::Failed)
    }
}

impl fmt::Display for RunState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Idle => write!(f, "idle"),
            Self::Running { remaining } => write!(f, "running ({remaining} remaining)"),
            Self::Succeeded => write!(f, "succeeded"),
            Self::Failed => write!(f, "failed"),
        }
    }
}

/// What a successful run did.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct RunSummary {
    pub executed: usize,
}
