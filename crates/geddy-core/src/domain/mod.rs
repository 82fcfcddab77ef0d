// ============================================================================
//  CLEAN MODULE BOUNDARIES
// ============================================================================

//! Core domain layer for geddy-gen.
//!
//! This module contains pure logic with no I/O. Running commands, reading
//! templates and touching files all go through ports (traits) defined in the
//! application layer.
//!
//! ## Hexagonal Architecture Compliance
//!
//! - **No async**: Domain logic is synchronous
//! - **No I/O**: No filesystem, process or network calls
//! - **Validated values**: names and commands check their invariants at
//!   construction
//!
// Public API - what the world sees
pub mod entities;
pub mod error;
pub mod value_objects;

mod validation;

// Re-exports for convenience
pub use entities::{
    command::{CommandQueue, ShellCommand},
    outcome::{ExecutionOutcome, FailureKind, RunState, RunSummary},
    plan::{APP_DIRECTORIES, APP_FILES, app_plan, install_plan, view_plan},
    router::{ROUTER_MARKER, RouteChange, RouterFile},
};

pub use error::{DomainError, ErrorCategory};

pub use value_objects::{
    AppName, FrameworkPaths, RenderContext, ResourceName, RoutePolicy, TemplateKind,
};

pub use validation::DomainValidator;
