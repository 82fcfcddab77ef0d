//! Template stores.
//!
//! # Resolution order
//!
//! [`resolve`] picks the directory to read templates from, stopping at the
//! first one that exists:
//!
//! 1. The directory passed in (from `--templates-dir` or the config file's
//!    `generator.templates_dir`).
//! 2. **`$GEDDY_TEMPLATES_DIR`**.
//!
//! If neither exists the compiled-in templates are used. A directory that
//! lacks one of the template files falls back to the compiled-in copy of
//! that file.

mod builtin;
mod directory;

use std::path::{Path, PathBuf};

use tracing::{debug, info};

pub use builtin::BuiltinTemplates;
pub use directory::DirectoryTemplates;

use geddy_core::application::ports::TemplateStore;

/// Environment variable naming a template directory.
pub const TEMPLATES_DIR_ENV: &str = "GEDDY_TEMPLATES_DIR";

/// Build the template store for an optional explicit directory.
pub fn resolve(explicit: Option<&Path>) -> Box<dyn TemplateStore> {
    for candidate in candidate_paths(explicit) {
        debug!(path = %candidate.display(), "checking candidate templates path");
        if candidate.is_dir() {
            info!(path = %candidate.display(), "using templates directory");
            return Box::new(DirectoryTemplates::new(candidate));
        }
    }

    debug!("no templates directory found, using built-in templates");
    Box::new(BuiltinTemplates::new())
}

fn candidate_paths(explicit: Option<&Path>) -> Vec<PathBuf> {
    let mut paths = Vec::with_capacity(2);

    if let Some(dir) = explicit {
        paths.push(dir.to_path_buf());
    }

    if let Ok(env_dir) = std::env::var(TEMPLATES_DIR_ENV) {
        let p = PathBuf::from(env_dir);
        debug!(path = %p.display(), "candidate from $GEDDY_TEMPLATES_DIR");
        paths.push(p);
    }

    paths
}

#[cfg(test)]
mod tests {
    use super::*;
    use geddy_core::domain::TemplateKind;

    #[test]
    fn explicit_directory_wins() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("resource_model.ejs"), "custom <%= nameSingular %>")
            .unwrap();

        let store = resolve(Some(dir.path()));

        assert_eq!(
            store.load(TemplateKind::ResourceModel).unwrap(),
            "custom <%= nameSingular %>"
        );
    }

    #[test]
    fn explicit_path_is_first_candidate() {
        let paths = candidate_paths(Some(Path::new("/tmp/geddy-templates")));
        assert_eq!(paths[0], PathBuf::from("/tmp/geddy-templates"));
    }
}
