//! Fixed command plans for installing the framework and laying out apps.
//!
//! Plans are plain [`CommandQueue`]s; building one has no side effects, so
//! the CLI can print a plan for `--dry-run` and hand the very same queue to
//! the runner otherwise.

use crate::domain::{
    entities::command::CommandQueue,
    value_objects::{AppName, FrameworkPaths, ResourceName},
};

/// Directories created under a new app, in creation order.
pub const APP_DIRECTORIES: [&str; 5] = [
    "config",
    "app/models",
    "app/controllers",
    "app/views",
    "public",
];

/// Starter files copied from the generator directory into a new app.
pub const APP_FILES: [(&str, &str); 4] = [
    ("router.js", "config"),
    ("config.js", "config"),
    ("main.js", "app/controllers"),
    ("application.js", "app/controllers"),
];

/// Commands that install the framework into the global library directory.
pub fn install_plan(paths: &FrameworkPaths) -> CommandQueue {
    CommandQueue::new()
        .with(format!("mkdir -p {}", paths.library_dir))
        .with(format!(
            "cp -R {}/* {}/",
            paths.dist_dir.trim_end_matches('/'),
            paths.library_dir.trim_end_matches('/')
        ))
        .with(format!(
            "cp {}/geddy-gen {}/",
            paths.scripts_dir, paths.bin_dir
        ))
        .with(format!("cp {}/geddy {}/", paths.scripts_dir, paths.bin_dir))
}

/// Commands that create the directory tree and starter files of a new app.
///
/// Directories come first: every `cp` depends on its target existing.
pub fn app_plan(app: &AppName, paths: &FrameworkPaths) -> CommandQueue {
    let mut queue = CommandQueue::new().with(format!("mkdir -p ./{app}"));

    for dir in APP_DIRECTORIES {
        queue.push(format!("mkdir -p ./{app}/{dir}"));
    }

    let gen_dir = paths.gen_dir();
    for (file, dest) in APP_FILES {
        queue.push(format!("cp {gen_dir}/{file} {app}/{dest}/"));
    }

    queue
}

/// Commands that create a resource's view directory and copy the stock views.
pub fn view_plan(resource: &ResourceName, paths: &FrameworkPaths) -> CommandQueue {
    let views = format!("./app/views/{}", resource.plural());
    CommandQueue::new()
        .with(format!("mkdir -p {views}"))
        .with(format!("cp {}/views/* {views}/", paths.gen_dir()))
}
