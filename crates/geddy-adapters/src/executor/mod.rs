//! Command executor adapters.

mod recording;
mod shell;

pub use recording::RecordingExecutor;
pub use shell::ShellExecutor;
