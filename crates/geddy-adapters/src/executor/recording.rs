//! Recording executor for testing.

use std::{
    collections::HashMap,
    sync::{Arc, RwLock},
};

use async_trait::async_trait;

use geddy_core::{
    application::ports::CommandExecutor,
    domain::{ExecutionOutcome, ShellCommand},
};

/// Executor that runs nothing: it records every command it is handed and
/// answers with a scripted outcome (success unless told otherwise).
#[derive(Debug, Clone, Default)]
pub struct RecordingExecutor {
    inner: Arc<RwLock<RecordingInner>>,
}

#[derive(Debug, Default)]
struct RecordingInner {
    executed: Vec<ShellCommand>,
    scripted: HashMap<String, ExecutionOutcome>,
}

impl RecordingExecutor {
    pub fn new() -> Self {
        Self::default()
    }

    /// Answer `outcome` whenever `command` is executed.
    pub fn script(&self, command: &str, outcome: ExecutionOutcome) {
        if let Ok(mut inner) = self.inner.write() {
            inner.scripted.insert(command.to_string(), outcome);
        }
    }

    /// Commands executed so far, in execution order (testing helper).
    pub fn executed(&self) -> Vec<String> {
        self.inner
            .read()
            .map(|inner| inner.executed.iter().map(ToString::to_string).collect())
            .unwrap_or_default()
    }

    /// Forget executed commands; scripted outcomes are kept.
    pub fn clear(&self) {
        if let Ok(mut inner) = self.inner.write() {
            inner.executed.clear();
        }
    }
}

#[async_trait]
impl CommandExecutor for RecordingExecutor {
    async fn execute(&self, command: &ShellCommand) -> ExecutionOutcome {
        let Ok(mut inner) = self.inner.write() else {
            return ExecutionOutcome::ProcessError {
                detail: "recording executor state is poisoned".into(),
            };
        };
        inner.executed.push(command.clone());
        inner
            .scripted
            .get(command.as_str())
            .cloned()
            .unwrap_or(ExecutionOutcome::Success)
    }
}
