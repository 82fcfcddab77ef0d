//! Implementation of the `geddy-gen install` command.

use tracing::instrument;

use geddy_adapters::ShellExecutor;
use geddy_core::application::{InstallService, SequentialRunner};

use crate::{cli::InstallArgs, config::AppConfig, error::CliResult, output::OutputManager};

/// Copy the framework into the library directory and install the launchers.
#[instrument(skip_all)]
pub async fn execute(args: InstallArgs, config: AppConfig, output: OutputManager) -> CliResult<()> {
    let service = InstallService::new(
        SequentialRunner::new(Box::new(ShellExecutor::new())),
        config.to_paths(),
    );

    if args.dry_run {
        output.plan(&service.plan())?;
        return Ok(());
    }

    let spinner = output.spinner("Installing Geddy");
    let reported = service
        .install(|| {
            spinner.finish_and_clear();
            output.success("Geddy installed.")
        })
        .await;
    spinner.finish_and_clear();

    reported??;
    Ok(())
}
