//! Application ports (traits) for external dependencies.
//!
//! In hexagonal architecture, ports define interfaces that the application
//! needs from the outside world. Adapters in `geddy-adapters` implement these.
//!
//! ## Port Types
//!
//! - **Driven (Output) Ports**: Called by application, implemented by infrastructure
//!   - `CommandExecutor`: Shell command execution
//!   - `Filesystem`: File operations
//!   - `TemplateStore`: Template text retrieval
//!   - `TemplateRenderer`: Variable substitution
//!   - `Casing`: Identifier casing
//!
//! - **Driving (Input) Ports**: Called by external world, implemented by application
//!   - (Defined in CLI layer, implemented by services)

pub mod output;

pub use output::{Casing, CommandExecutor, Filesystem, TemplateRenderer, TemplateStore};

#[cfg(test)]
pub use output::{MockCasing, MockTemplateRenderer};
