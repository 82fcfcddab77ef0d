//! Resource Service - generates a model, controller, route and views.
//!
//! Generation happens in two steps so the caller can report progress in
//! between:
//!
//! 1. [`ResourceService::write_files`] renders the model and controller
//!    templates and registers the route in `config/router.js`.
//! 2. [`ResourceService::create_views`] runs the shell commands that create
//!    the view directory and copy the stock views into it.
//!
//! Model and controller files are overwritten when they already exist.

use std::path::{Path, PathBuf};

use tracing::{debug, info, instrument, warn};

use crate::{
    application::{
        ApplicationError,
        ports::{Casing, Filesystem, TemplateRenderer, TemplateStore},
        services::runner::SequentialRunner,
    },
    domain::{
        CommandQueue, FrameworkPaths, RenderContext, ResourceName, RouteChange, RoutePolicy,
        RouterFile, TemplateKind, view_plan,
    },
    error::GeddyResult,
};

/// Router file location, relative to the app root.
pub const ROUTER_PATH: &str = "config/router.js";

/// Files touched by [`ResourceService::write_files`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratedFiles {
    pub model: PathBuf,
    pub controller: PathBuf,
    pub router: PathBuf,
    pub route: RouteChange,
}

/// Collaborators of the resource generator.
///
/// Every capability is injected; the service holds no global state.
pub struct ResourcePorts {
    pub store: Box<dyn TemplateStore>,
    pub renderer: Box<dyn TemplateRenderer>,
    pub casing: Box<dyn Casing>,
    pub filesystem: Box<dyn Filesystem>,
}

/// Service behind the `resource` task.
pub struct ResourceService {
    ports: ResourcePorts,
    runner: SequentialRunner,
    paths: FrameworkPaths,
    policy: RoutePolicy,
}

impl ResourceService {
    pub fn new(ports: ResourcePorts, runner: SequentialRunner, paths: FrameworkPaths) -> Self {
        Self {
            ports,
            runner,
            paths,
            policy: RoutePolicy::default(),
        }
    }

    /// Choose how an existing route registration is handled.
    pub fn with_route_policy(mut self, policy: RoutePolicy) -> Self {
        self.policy = policy;
        self
    }

    /// Render the model and controller and register the route under `root`.
    ///
    /// Everything that can fail without side effects (template lookup,
    /// rendering, router marker check) is done before the first write.
    #[instrument(skip_all, fields(resource = %resource, root = %root.display()))]
    pub fn write_files(&self, resource: &ResourceName, root: &Path) -> GeddyResult<GeneratedFiles> {
        let singular = self.ports.casing.camelize(resource.singular(), true);
        let plural = self.ports.casing.camelize(resource.plural(), true);
        debug!(%singular, %plural, "names converted");

        let model_src = self.render(
            TemplateKind::ResourceModel,
            RenderContext::new().with_variable("nameSingular", singular),
        )?;
        let controller_src = self.render(
            TemplateKind::ResourceController,
            RenderContext::new().with_variable("namePlural", plural),
        )?;

        let router_path = root.join(ROUTER_PATH);
        if !self.ports.filesystem.exists(&router_path) {
            return Err(ApplicationError::RouterNotFound { path: router_path }.into());
        }
        let mut router = RouterFile::new(self.ports.filesystem.read_to_string(&router_path)?);
        let route = router.register_resource(resource.plural(), self.policy)?;

        let model = root
            .join("app/models")
            .join(format!("{}.js", resource.singular()));
        let controller = root
            .join("app/controllers")
            .join(format!("{}.js", resource.plural()));

        self.write(&model, &model_src)?;
        self.write(&controller, &controller_src)?;

        match route {
            RouteChange::Inserted => {
                self.ports
                    .filesystem
                    .write_file(&router_path, router.as_str())?;
                info!(path = %router_path.display(), "route registered");
            }
            RouteChange::AlreadyPresent => {
                warn!(path = %router_path.display(), "route already registered, left unchanged");
            }
        }

        Ok(GeneratedFiles {
            model,
            controller,
            router: router_path,
            route,
        })
    }

    /// Commands that create the resource's views, without running them.
    pub fn view_plan(&self, resource: &ResourceName) -> CommandQueue {
        view_plan(resource, &self.paths)
    }

    /// Create the view directory and copy the stock views, then call
    /// `on_complete`.
    #[instrument(skip_all, fields(resource = %resource))]
    pub async fn create_views<F, R>(&self, resource: &ResourceName, on_complete: F) -> GeddyResult<R>
    where
        F: FnOnce() -> R,
    {
        self.runner
            .run_then(self.view_plan(resource), on_complete)
            .await
    }

    /// Both steps in sequence.
    pub async fn generate<F, R>(
        &self,
        resource: &ResourceName,
        root: &Path,
        on_complete: F,
    ) -> GeddyResult<(GeneratedFiles, R)>
    where
        F: FnOnce() -> R,
    {
        let files = self.write_files(resource, root)?;
        let done = self.create_views(resource, on_complete).await?;
        Ok((files, done))
    }

    // -------------------------------------------------------------------------
    // Internal Helpers
    // -------------------------------------------------------------------------

    fn render(&self, kind: TemplateKind, context: RenderContext) -> GeddyResult<String> {
        let text = self.ports.store.load(kind)?;
        self.ports.renderer.render(&text, &context)
    }

    fn write(&self, path: &Path, content: &str) -> GeddyResult<()> {
        if let Some(parent) = path.parent() {
            self.ports.filesystem.create_dir_all(parent)?;
        }
        if self.ports.filesystem.exists(path) {
            warn!(path = %path.display(), "overwriting existing file");
        }
        self.ports.filesystem.write_file(path, content)?;
        info!(path = %path.display(), "file written");
        Ok(())
    }
}
