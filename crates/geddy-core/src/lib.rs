//! geddy-core - Hexagonal Architecture Implementation
//!
//! This crate provides the domain and application layers for `geddy-gen`,
//! the installer and code generator of the Geddy web framework, following
//! hexagonal (ports and adapters) architecture.
//!
//! ## Architecture Overview
//!
//! ```text
//! ┌─────────────────────────────────────────┐
//! │           geddy-cli (CLI)               │
//! │     install / app / resource            │
//! └──────────────────┬──────────────────────┘
//!                    │ calls
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │         Application Services            │
//! │  (Install, Scaffold, Resource services) │
//! │   all shell work → SequentialRunner     │
//! └──────────────────┬──────────────────────┘
//!                    │ uses
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │      Application Ports (Traits)         │
//! │ (Executor, Filesystem, Store, Render,   │
//! │  Casing)                                │
//! └──────────────────┬──────────────────────┘
//!                    │ implemented by
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │    geddy-adapters (Infrastructure)      │
//! │ (ShellExecutor, LocalFilesystem, etc)   │
//! └─────────────────────────────────────────┘
//!                    │
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │         Domain Layer (Pure Logic)       │
//! │ (CommandQueue, RunState, RouterFile,    │
//! │  ResourceName, command plans)           │
//! └─────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//!
//! ```rust,ignore
//! use geddy_core::prelude::*;
//!
//! let runner = SequentialRunner::new(Box::new(executor)); // impl CommandExecutor
//! let queue: CommandQueue = ["mkdir -p ./blog", "mkdir -p ./blog/config"]
//!     .into_iter()
//!     .collect();
//!
//! runner.run_then(queue, || println!("done")).await?;
//! ```

pub mod domain;

pub mod application;

pub mod error;

// Public API - what external crates should use
pub mod prelude {
    pub use crate::application::{
        InstallService, ResourcePorts, ResourceService, ScaffoldService, SequentialRunner,
        ports::{Casing, CommandExecutor, Filesystem, TemplateRenderer, TemplateStore},
    };
    pub use crate::domain::{
        AppName, CommandQueue, ExecutionOutcome, FrameworkPaths, RenderContext, ResourceName,
        RoutePolicy, RunSummary, ShellCommand, TemplateKind,
    };
    pub use crate::error::{GeddyError, GeddyResult};
}

// Version info
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
