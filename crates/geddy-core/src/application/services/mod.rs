//! Application services - orchestrate use cases.
//!
//! Services coordinate the domain layer and ports to accomplish the three
//! generator tasks: install the framework, scaffold an app, generate a
//! resource. All of them run shell commands through [`SequentialRunner`].

pub mod install_service;
pub mod resource_service;
pub mod runner;
pub mod scaffold_service;

pub use install_service::InstallService;
pub use resource_service::{GeneratedFiles, ROUTER_PATH, ResourcePorts, ResourceService};
pub use runner::SequentialRunner;
pub use scaffold_service::ScaffoldService;
