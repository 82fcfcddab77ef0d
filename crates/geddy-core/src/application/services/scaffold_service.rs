//! Scaffold Service - lays out a new application.
//!
//! The layout is produced entirely by shell commands (`mkdir -p` and `cp`
//! from the installed generator directory), run through the
//! [`SequentialRunner`] so a failed `mkdir` stops the copies that depend on it.

use tracing::{info, instrument};

use crate::{
    application::services::runner::SequentialRunner,
    domain::{AppName, CommandQueue, FrameworkPaths, app_plan},
    error::GeddyResult,
};

/// Service behind the `app` task.
pub struct ScaffoldService {
    runner: SequentialRunner,
    paths: FrameworkPaths,
}

impl ScaffoldService {
    /// Create a new scaffold service.
    ///
    /// # Example
    ///
    /// ```rust,ignore
    /// use geddy_core::application::{ScaffoldService, SequentialRunner};
    /// use geddy_core::domain::FrameworkPaths;
    ///
    /// let runner = SequentialRunner::new(executor); // impl CommandExecutor
    /// let service = ScaffoldService::new(runner, FrameworkPaths::default());
    /// ```
    pub fn new(runner: SequentialRunner, paths: FrameworkPaths) -> Self {
        Self { runner, paths }
    }

    /// Commands that would scaffold `app`, without running them.
    pub fn plan(&self, app: &AppName) -> CommandQueue {
        app_plan(app, &self.paths)
    }

    /// Scaffold `app` in the current directory, then call `on_complete`.
    #[instrument(skip_all, fields(app = %app))]
    pub async fn create_app<F, R>(&self, app: &AppName, on_complete: F) -> GeddyResult<R>
    where
        F: FnOnce() -> R,
    {
        info!("Scaffolding app");
        self.runner.run_then(self.plan(app), on_complete).await
    }
}

#[cfg(test)]
mod tests {
    use std::sync::{Arc, Mutex};

    use async_trait::async_trait;

    use super::*;
    use crate::application::ports::CommandExecutor;
    use crate::domain::{ExecutionOutcome, ShellCommand};

    #[derive(Clone, Default)]
    struct FailOnCopy {
        log: Arc<Mutex<Vec<String>>>,
    }

    #[async_trait]
    impl CommandExecutor for FailOnCopy {
        async fn execute(&self, command: &ShellCommand) -> ExecutionOutcome {
            self.log.lock().unwrap().push(command.to_string());
            if command.as_str().starts_with("cp ") {
                ExecutionOutcome::Diagnostic {
                    stderr: "cp: No such file or directory".into(),
                }
            } else {
                ExecutionOutcome::Success
            }
        }
    }

    #[tokio::test]
    async fn missing_generator_files_stop_after_first_copy() {
        let exec = FailOnCopy::default();
        let service = ScaffoldService::new(
            SequentialRunner::new(Box::new(exec.clone())),
            FrameworkPaths::default(),
        );
        let app = AppName::new("blog").unwrap();

        let result = service.create_app(&app, || ()).await;

        assert!(result.is_err());
        let log = exec.log.lock().unwrap();
        assert_eq!(log.len(), 7, "six mkdirs and the first cp");
        assert!(log[6].starts_with("cp "));
    }
}
