pub mod command;
pub mod outcome;
pub mod plan;
pub mod router;

pub use crate::domain::DomainError;
pub use command::{CommandQueue, ShellCommand};
pub use outcome::{ExecutionOutcome, FailureKind, RunState, RunSummary};
pub use router::{RouteChange, RouterFile};
