//! Templates read from a user directory.

use std::{
    fs, io,
    path::{Path, PathBuf},
};

use tracing::{debug, instrument, warn};

use geddy_core::{
    application::{ApplicationError, ports::TemplateStore},
    domain::TemplateKind,
    error::GeddyResult,
};

use super::BuiltinTemplates;

/// Reads `<dir>/resource_model.ejs` and `<dir>/resource_controller.ejs`.
///
/// A missing file falls back to the built-in template. Any other read
/// failure is an error.
#[derive(Debug, Clone)]
pub struct DirectoryTemplates {
    root: PathBuf,
}

impl DirectoryTemplates {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }
}

impl TemplateStore for DirectoryTemplates {
    #[instrument(skip(self), fields(root = %self.root.display()))]
    fn load(&self, kind: TemplateKind) -> GeddyResult<String> {
        let path = self.root.join(kind.file_name());

        match fs::read_to_string(&path) {
            Ok(text) => {
                debug!(path = %path.display(), "template loaded from directory");
                Ok(text)
            }
            Err(e) if e.kind() == io::ErrorKind::NotFound => {
                warn!(path = %path.display(), "template file missing, using built-in");
                Ok(BuiltinTemplates::text(kind).to_string())
            }
            Err(e) => Err(ApplicationError::FilesystemError {
                path,
                reason: format!("Failed to read template: {}", e),
            }
            .into()),
        }
    }
}
