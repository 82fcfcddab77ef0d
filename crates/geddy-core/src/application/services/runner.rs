//! Sequential command runner.
//!
//! Runs a [`CommandQueue`] strictly one command at a time. Each command is
//! awaited to completion before the next one is taken off the queue, so
//! later commands can rely on the effects of earlier ones (a `cp` into a
//! directory created by a preceding `mkdir -p`).
//!
//! The first failure stops the run. Nothing that already ran is undone.

use tracing::{debug, error, info, instrument};

use crate::{
    application::{ApplicationError, ports::CommandExecutor},
    domain::{CommandQueue, RunState, RunSummary},
    error::GeddyResult,
};

/// Fail-stop, FIFO runner over a [`CommandExecutor`].
pub struct SequentialRunner {
    executor: Box<dyn CommandExecutor>,
}

impl SequentialRunner {
    pub fn new(executor: Box<dyn CommandExecutor>) -> Self {
        Self { executor }
    }

    /// Run every command in order.
    ///
    /// Returns the number of commands executed once the whole queue has
    /// drained, or `ApplicationError::CommandFailed` for the first command
    /// that failed. An empty queue succeeds without running anything.
    #[instrument(skip_all, fields(commands = queue.len()))]
    pub async fn run(&self, mut queue: CommandQueue) -> GeddyResult<RunSummary> {
        let mut state = RunState::Idle.start(queue.len());
        let mut executed = 0;
        debug!(%state, "runner started");

        while let Some(command) = queue.pop_front() {
            executed += 1;
            debug!(position = executed, %command, "running command");

            let outcome = self.executor.execute(&command).await;
            state = state.advance(&outcome);

            if let Some((kind, detail)) = outcome.failure() {
                error!(
                    position = executed,
                    %command,
                    %kind,
                    detail = detail.trim_end(),
                    "command failed, abandoning queue"
                );
                return Err(ApplicationError::CommandFailed {
                    command,
                    position: executed,
                    kind,
                    detail: detail.trim_end().to_string(),
                    skipped: queue.len(),
                }
                .into());
            }

            debug!(%state, "command finished");
        }

        debug_assert_eq!(state, RunState::Succeeded);
        info!(executed, "all commands completed");
        Ok(RunSummary { executed })
    }

    /// Run the queue and invoke `on_complete` once it has fully drained.
    ///
    /// `on_complete` is called at most once, and only on success. For an
    /// empty queue it is called immediately.
    pub async fn run_then<F, R>(&self, queue: CommandQueue, on_complete: F) -> GeddyResult<R>
    where
        F: FnOnce() -> R,
    {
        self.run(queue).await?;
        Ok(on_complete())
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;
    use std::sync::{Arc, Mutex};

    use async_trait::async_trait;

    use super::*;
    use crate::domain::{ExecutionOutcome, FailureKind, ShellCommand};
    use crate::error::GeddyError;

    /// Executor that records each command and answers from a script.
    #[derive(Clone, Default)]
    struct ScriptedExecutor {
        log: Arc<Mutex<Vec<String>>>,
        answers: Arc<HashMap<String, ExecutionOutcome>>,
    }

    impl ScriptedExecutor {
        fn failing(command: &str, outcome: ExecutionOutcome) -> Self {
            Self {
                answers: Arc::new(HashMap::from([(command.to_string(), outcome)])),
                ..Self::default()
            }
        }

        fn log(&self) -> Vec<String> {
            self.log.lock().unwrap().clone()
        }
    }

    #[async_trait]
    impl CommandExecutor for ScriptedExecutor {
        async fn execute(&self, command: &ShellCommand) -> ExecutionOutcome {
            self.log.lock().unwrap().push(command.to_string());
            self.answers
                .get(command.as_str())
                .cloned()
                .unwrap_or(ExecutionOutcome::Success)
        }
    }

    fn queue(lines: &[&str]) -> CommandQueue {
        lines.iter().copied().collect()
    }

    #[tokio::test]
    async fn runs_all_commands_in_order() {
        let exec = ScriptedExecutor::default();
        let runner = SequentialRunner::new(Box::new(exec.clone()));

        let summary = runner.run(queue(&["a", "b", "c"])).await.unwrap();

        assert_eq!(summary.executed, 3);
        assert_eq!(exec.log(), vec!["a", "b", "c"]);
    }

    #[tokio::test]
    async fn callback_fires_once_after_last_command() {
        let exec = ScriptedExecutor::default();
        let runner = SequentialRunner::new(Box::new(exec.clone()));
        let calls = Arc::new(Mutex::new(0));

        let seen = runner
            .run_then(queue(&["mkdir -p ./blog", "mkdir -p ./blog/config"]), || {
                *calls.lock().unwrap() += 1;
                exec.log().len()
            })
            .await
            .unwrap();

        assert_eq!(*calls.lock().unwrap(), 1);
        assert_eq!(seen, 2, "callback must observe every command done");
    }

    #[tokio::test]
    async fn empty_queue_invokes_callback_immediately() {
        let exec = ScriptedExecutor::default();
        let runner = SequentialRunner::new(Box::new(exec.clone()));

        let value = runner.run_then(CommandQueue::new(), || 42).await.unwrap();

        assert_eq!(value, 42);
        assert!(exec.log().is_empty());
    }

    #[tokio::test]
    async fn process_error_stops_queue_and_skips_callback() {
        let exec = ScriptedExecutor::failing(
            "false",
            ExecutionOutcome::ProcessError {
                detail: "exit status: 1".into(),
            },
        );
        let runner = SequentialRunner::new(Box::new(exec.clone()));
        let mut called = false;

        let err = runner
            .run_then(queue(&["false", "mkdir -p ./blog"]), || called = true)
            .await
            .unwrap_err();

        assert!(!called);
        assert_eq!(exec.log(), vec!["false"]);
        match err {
            GeddyError::Application(ApplicationError::CommandFailed {
                command,
                position,
                kind,
                detail,
                skipped,
            }) => {
                assert_eq!(command.as_str(), "false");
                assert_eq!(position, 1);
                assert_eq!(kind, FailureKind::Process);
                assert_eq!(detail, "exit status: 1");
                assert_eq!(skipped, 1);
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[tokio::test]
    async fn diagnostic_output_counts_as_failure() {
        let exec = ScriptedExecutor::failing(
            "b",
            ExecutionOutcome::Diagnostic {
                stderr: "cp: cannot stat\n".into(),
            },
        );
        let runner = SequentialRunner::new(Box::new(exec.clone()));

        let err = runner.run(queue(&["a", "b", "c", "d"])).await.unwrap_err();

        assert_eq!(exec.log(), vec!["a", "b"]);
        match err {
            GeddyError::Application(ApplicationError::CommandFailed {
                position,
                kind,
                detail,
                skipped,
                ..
            }) => {
                assert_eq!(position, 2);
                assert_eq!(kind, FailureKind::Diagnostic);
                assert_eq!(detail, "cp: cannot stat");
                assert_eq!(skipped, 2);
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[tokio::test]
    async fn failure_of_last_command_still_skips_callback() {
        let exec = ScriptedExecutor::failing(
            "c",
            ExecutionOutcome::ProcessError {
                detail: "killed".into(),
            },
        );
        let runner = SequentialRunner::new(Box::new(exec.clone()));
        let mut called = false;

        let result = runner
            .run_then(queue(&["a", "b", "c"]), || called = true)
            .await;

        assert!(result.is_err());
        assert!(!called);
        assert_eq!(exec.log().len(), 3);
    }
}
