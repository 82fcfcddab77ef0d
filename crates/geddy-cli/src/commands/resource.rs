//! Implementation of the `geddy-gen resource` command.

use std::path::PathBuf;

use tracing::{info, instrument};

use geddy_adapters::{CamelCase, LocalFilesystem, ShellExecutor, SimpleRenderer, template_store};
use geddy_core::{
    application::{ResourcePorts, ResourceService, SequentialRunner},
    domain::{ResourceName, RouteChange, RoutePolicy},
    error::GeddyError,
};

use crate::{
    cli::ResourceArgs,
    config::AppConfig,
    error::{CliError, CliResult},
    output::OutputManager,
};

/// Generate model, controller, route and views for a resource.
///
/// Files are written under `--root` (default: the current directory) and
/// the view commands run there as well.
#[instrument(skip_all, fields(resource = %args.names))]
pub async fn execute(args: ResourceArgs, config: AppConfig, output: OutputManager) -> CliResult<()> {
    let resource = ResourceName::parse(&args.names).map_err(GeddyError::from)?;

    let root = args.root.unwrap_or_else(|| PathBuf::from("."));
    if !root.is_dir() {
        return Err(CliError::InvalidInput {
            message: format!("app root '{}' is not a directory", root.display()),
            source: None,
        });
    }

    let policy = if args.skip_existing_route || config.generator.skip_existing_routes {
        RoutePolicy::SkipExisting
    } else {
        RoutePolicy::Always
    };
    let templates_dir = args.templates_dir.as_deref().or(config.templates_dir());

    let service = ResourceService::new(
        ResourcePorts {
            store: template_store::resolve(templates_dir),
            renderer: Box::new(SimpleRenderer::new()),
            casing: Box::new(CamelCase::new()),
            filesystem: Box::new(LocalFilesystem::new()),
        },
        SequentialRunner::new(Box::new(ShellExecutor::new().with_current_dir(root.clone()))),
        config.to_paths(),
    )
    .with_route_policy(policy);

    let files = service.write_files(&resource, &root)?;
    output.print(&format!("[ADDED] {}", files.model.display()))?;
    output.print(&format!("[ADDED] {}", files.controller.display()))?;
    match files.route {
        RouteChange::Inserted => output.print(&format!(
            "resources {} route added to {}",
            resource.plural(),
            files.router.display()
        ))?,
        RouteChange::AlreadyPresent => output.warning(&format!(
            "resources {} route already in {}",
            resource.plural(),
            files.router.display()
        ))?,
    }
    info!(%resource, "files written, creating views");

    let spinner = output.spinner("Creating view templates");
    let reported = service
        .create_views(&resource, || {
            spinner.finish_and_clear();
            output.success("Created view templates.")
        })
        .await;
    spinner.finish_and_clear();

    reported??;
    Ok(())
}
