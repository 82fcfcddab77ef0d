//! Local filesystem adapter using std::fs.

use std::io;
use std::path::Path;

use geddy_core::{
    application::{ApplicationError, ports::Filesystem},
    error::{GeddyError, GeddyResult},
};

/// Production filesystem implementation using `std::fs`.
#[derive(Debug, Clone, Copy)]
pub struct LocalFilesystem;

impl LocalFilesystem {
    /// Create a new local filesystem adapter.
    pub fn new() -> Self {
        Self
    }
}

impl Default for LocalFilesystem {
    fn default() -> Self {
        Self::new()
    }
}

impl Filesystem for LocalFilesystem {
    fn create_dir_all(&self, path: &Path) -> GeddyResult<()> {
        std::fs::create_dir_all(path).map_err(|e| map_io_error(path, e, "create directory"))
    }

    fn read_to_string(&self, path: &Path) -> GeddyResult<String> {
        std::fs::read_to_string(path).map_err(|e| map_io_error(path, e, "read file"))
    }

    fn write_file(&self, path: &Path, content: &str) -> GeddyResult<()> {
        std::fs::write(path, content).map_err(|e| map_io_error(path, e, "write file"))
    }

    fn exists(&self, path: &Path) -> bool {
        path.exists()
    }
}

fn map_io_error(path: &Path, e: io::Error, operation: &str) -> GeddyError {
    ApplicationError::FilesystemError {
        path: path.to_path_buf(),
        reason: format!("Failed to {}: {}", operation, e),
    }
    .into()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn write_then_read_back() {
        let dir = tempfile::tempdir().unwrap();
        let fs = LocalFilesystem::new();
        let path = dir.path().join("app/models/post.js");

        fs.create_dir_all(path.parent().unwrap()).unwrap();
        fs.write_file(&path, "var Post = function () {};\n").unwrap();

        assert!(fs.exists(&path));
        assert_eq!(
            fs.read_to_string(&path).unwrap(),
            "var Post = function () {};\n"
        );
    }

    #[test]
    fn reading_missing_file_names_the_path() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config/router.js");

        let err = LocalFilesystem::new().read_to_string(&path).unwrap_err();

        match err {
            GeddyError::Application(ApplicationError::FilesystemError { path: p, reason }) => {
                assert_eq!(p, path);
                assert!(reason.starts_with("Failed to read file"));
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }
}
