//! Install Service - copies the framework into its global location.

use tracing::{info, instrument};

use crate::{
    application::services::runner::SequentialRunner,
    domain::{CommandQueue, FrameworkPaths, install_plan},
    error::GeddyResult,
};

/// Service behind the `install` task.
pub struct InstallService {
    runner: SequentialRunner,
    paths: FrameworkPaths,
}

impl InstallService {
    pub fn new(runner: SequentialRunner, paths: FrameworkPaths) -> Self {
        Self { runner, paths }
    }

    /// Commands the install would run, without running them.
    pub fn plan(&self) -> CommandQueue {
        install_plan(&self.paths)
    }

    /// Install the framework, then call `on_complete`.
    #[instrument(skip_all, fields(library_dir = %self.paths.library_dir))]
    pub async fn install<F, R>(&self, on_complete: F) -> GeddyResult<R>
    where
        F: FnOnce() -> R,
    {
        info!("Installing framework");
        self.runner.run_then(self.plan(), on_complete).await
    }
}
