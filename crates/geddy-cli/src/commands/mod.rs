//! Command handlers, one module per subcommand.
//!
//! Handlers translate parsed arguments into core service calls and report
//! results through the [`OutputManager`](crate::output::OutputManager). No
//! business logic lives here.

pub mod app;
pub mod completions;
pub mod config;
pub mod init;
pub mod install;
pub mod resource;
