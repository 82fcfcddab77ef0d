//! Shell executor using `tokio::process`.

use std::path::{Path, PathBuf};
use std::process::Stdio;

use async_trait::async_trait;
use tokio::process::Command;
use tracing::{debug, instrument, trace};

use geddy_core::{
    application::ports::CommandExecutor,
    domain::{ExecutionOutcome, ShellCommand},
};

/// Production executor: hands each command line to `sh -c`.
///
/// stdin is closed; stdout and stderr are captured. A command succeeds only
/// if it exits with status zero *and* leaves stderr empty.
#[derive(Debug, Clone)]
pub struct ShellExecutor {
    shell: PathBuf,
    current_dir: Option<PathBuf>,
}

impl ShellExecutor {
    /// Create an executor using `sh` in the process working directory.
    pub fn new() -> Self {
        Self {
            shell: PathBuf::from("sh"),
            current_dir: None,
        }
    }

    /// Use a different POSIX shell (it must accept `-c <line>`).
    pub fn with_shell(mut self, shell: impl Into<PathBuf>) -> Self {
        self.shell = shell.into();
        self
    }

    /// Run every command from `dir` instead of the process working directory.
    pub fn with_current_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.current_dir = Some(dir.into());
        self
    }

    pub fn current_dir(&self) -> Option<&Path> {
        self.current_dir.as_deref()
    }
}

impl Default for ShellExecutor {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl CommandExecutor for ShellExecutor {
    #[instrument(skip_all, fields(command = %command))]
    async fn execute(&self, command: &ShellCommand) -> ExecutionOutcome {
        let mut child = Command::new(&self.shell);
        child
            .arg("-c")
            .arg(command.as_str())
            .stdin(Stdio::null())
            .kill_on_drop(true);
        if let Some(dir) = &self.current_dir {
            child.current_dir(dir);
        }

        let output = match child.output().await {
            Ok(output) => output,
            Err(e) => {
                return ExecutionOutcome::ProcessError {
                    detail: format!("failed to start {}: {}", self.shell.display(), e),
                };
            }
        };

        let stdout = String::from_utf8_lossy(&output.stdout);
        if !stdout.is_empty() {
            trace!(stdout = %stdout.trim_end(), "command stdout");
        }
        let stderr = String::from_utf8_lossy(&output.stderr).into_owned();
        debug!(status = %output.status, stderr_bytes = stderr.len(), "command exited");

        classify(output.status, stderr)
    }
}

fn classify(status: std::process::ExitStatus, stderr: String) -> ExecutionOutcome {
    if !status.success() {
        let detail = if stderr.trim().is_empty() {
            status.to_string()
        } else {
            format!("{}: {}", status, stderr.trim_end())
        };
        ExecutionOutcome::ProcessError { detail }
    } else if !stderr.is_empty() {
        ExecutionOutcome::Diagnostic { stderr }
    } else {
        ExecutionOutcome::Success
    }
}
