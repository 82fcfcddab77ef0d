//! Infrastructure adapters for geddy-gen.
//!
//! This crate implements the ports defined in `geddy_core::application::ports`.
//! It contains all external dependencies and I/O operations: child processes,
//! the filesystem and template files.

pub mod casing;
pub mod executor;
pub mod filesystem;
pub mod renderer;
pub mod template_store;

// Re-export commonly used adapters
pub use casing::CamelCase;
pub use executor::{RecordingExecutor, ShellExecutor};
pub use filesystem::{LocalFilesystem, MemoryFilesystem};
pub use renderer::SimpleRenderer;
pub use template_store::{BuiltinTemplates, DirectoryTemplates};
