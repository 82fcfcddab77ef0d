//! Implementation of the `geddy-gen app` command.
//!
//! Responsibility: validate the app name, confirm with the user, and hand
//! the layout commands to the core scaffold service.

use std::io::IsTerminal as _;

use tracing::{debug, instrument};

use geddy_adapters::ShellExecutor;
use geddy_core::{
    application::{ScaffoldService, SequentialRunner},
    domain::AppName,
    error::GeddyError,
};

use crate::{
    cli::AppArgs,
    config::AppConfig,
    error::{CliError, CliResult},
    output::OutputManager,
};

/// Execute the `geddy-gen app` command.
///
/// Dispatch sequence:
/// 1. Validate the app name
/// 2. Early-exit with the command plan if `--dry-run`
/// 3. Confirm with user unless `--yes`, `--quiet` or stdin is not a terminal
/// 4. Run the layout commands via `ScaffoldService`
#[instrument(skip_all, fields(app = %args.name))]
pub async fn execute(
    args: AppArgs,
    config: AppConfig,
    output: OutputManager,
) -> CliResult<()> {
    let app = AppName::new(args.name).map_err(GeddyError::from)?;

    let service = ScaffoldService::new(
        SequentialRunner::new(Box::new(ShellExecutor::new())),
        config.to_paths(),
    );

    if args.dry_run {
        output.plan(&service.plan(&app))?;
        return Ok(());
    }

    if !args.yes && !output.is_quiet() && std::io::stdin().is_terminal() {
        if !confirm(&format!("Create app '{app}' in the current directory?"))? {
            return Err(CliError::Cancelled);
        }
    } else {
        debug!("confirmation skipped");
    }

    let spinner = output.spinner(&format!("Creating app {app}"));
    let reported = service
        .create_app(&app, || {
            spinner.finish_and_clear();
            output.success(&format!("Created app {app}."))
        })
        .await;
    spinner.finish_and_clear();

    reported??;
    Ok(())
}

#[cfg(feature = "interactive")]
fn confirm(prompt: &str) -> CliResult<bool> {
    dialoguer::Confirm::new()
        .with_prompt(prompt)
        .default(true)
        .interact()
        .map_err(|e| CliError::IoError {
            message: "failed to read confirmation input".into(),
            source: std::io::Error::other(e.to_string()),
        })
}

#[cfg(not(feature = "interactive"))]
fn confirm(prompt: &str) -> CliResult<bool> {
    use std::io::{self, Write};

    print!("{prompt} [Y/n] ");
    io::stdout().flush().map_err(|e| CliError::IoError {
        message: "failed to flush stdout".into(),
        source: e,
    })?;

    let mut input = String::new();
    io::stdin()
        .read_line(&mut input)
        .map_err(|e| CliError::IoError {
            message: "failed to read confirmation input".into(),
            source: e,
        })?;

    let input = input.trim().to_ascii_lowercase();
    Ok(input.is_empty() || input == "y" || input == "yes")
}
