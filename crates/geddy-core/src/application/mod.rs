//! Application layer for geddy-gen.
//!
//! This layer contains:
//! - **Services**: Use case orchestration (runner, install, scaffold, resource)
//! - **Ports**: Interface definitions (traits) for external dependencies
//! - **Errors**: Application-specific error types
//!
//! The application layer coordinates the domain layer but contains no
//! domain rules itself. Those live in `crate::domain`.

pub mod error;
pub mod ports;
pub mod services;

// Re-export main services
pub use services::{
    GeneratedFiles, InstallService, ResourcePorts, ResourceService, ScaffoldService,
    SequentialRunner,
};

// Re-export port traits (for adapter implementation)
pub use ports::{Casing, CommandExecutor, Filesystem, TemplateRenderer, TemplateStore};

pub use error::ApplicationError;
