//! Driven (output) ports - implemented by infrastructure.
//!
//! These traits define what the application needs from external systems.
//! The `geddy-adapters` crate provides implementations.

use std::path::Path;

use async_trait::async_trait;

use crate::domain::{ExecutionOutcome, RenderContext, ShellCommand, TemplateKind};
use crate::error::GeddyResult;

/// Port for running one shell command to completion.
///
/// Implemented by:
/// - `geddy_adapters::executor::ShellExecutor` (production, `sh -c`)
/// - `geddy_adapters::executor::RecordingExecutor` (testing)
///
/// ## Design Notes
///
/// - The future resolves only after the process has exited
/// - Launch failures are reported as `ExecutionOutcome::ProcessError`, never
///   as a Rust error; the runner owns the decision to stop
#[async_trait]
pub trait CommandExecutor: Send + Sync {
    async fn execute(&self, command: &ShellCommand) -> ExecutionOutcome;
}

/// Port for filesystem operations.
///
/// Implemented by:
/// - `geddy_adapters::filesystem::LocalFilesystem` (production)
/// - `geddy_adapters::filesystem::MemoryFilesystem` (testing)
pub trait Filesystem: Send + Sync {
    /// Create a directory and all parent directories.
    fn create_dir_all(&self, path: &Path) -> GeddyResult<()>;

    /// Read a whole UTF-8 file.
    fn read_to_string(&self, path: &Path) -> GeddyResult<String>;

    /// Write content to a file, replacing any existing content.
    fn write_file(&self, path: &Path, content: &str) -> GeddyResult<()>;

    /// Check if path exists.
    fn exists(&self, path: &Path) -> bool;
}

/// Port for template text retrieval.
///
/// Implemented by:
/// - `geddy_adapters::template_store::BuiltinTemplates` (compiled in)
/// - `geddy_adapters::template_store::DirectoryTemplates` (user overrides)
pub trait TemplateStore: Send + Sync {
    fn load(&self, kind: TemplateKind) -> GeddyResult<String>;
}

/// Port for template rendering.
///
/// Contract: `render(text, vars) -> text`. Substitution is literal; no
/// escaping or validation of the produced markup is promised.
///
/// Implemented by:
/// - `geddy_adapters::renderer::SimpleRenderer` (`<%= name %>` substitution)
#[cfg_attr(test, mockall::automock)]
pub trait TemplateRenderer: Send + Sync {
    fn render(&self, text: &str, context: &RenderContext) -> GeddyResult<String>;
}

/// Port for identifier casing.
///
/// Contract: `camelize(text, capitalize_first) -> text`. Pure; the same
/// input always yields the same output.
///
/// Implemented by:
/// - `geddy_adapters::casing::CamelCase`
#[cfg_attr(test, mockall::automock)]
pub trait Casing: Send + Sync {
    fn camelize(&self, text: &str, capitalize_first: bool) -> String;
}
