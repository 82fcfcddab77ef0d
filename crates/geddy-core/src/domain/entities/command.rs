use std::collections::VecDeque;
use std::fmt;

use serde::Serialize;

use crate::domain::error::DomainError;

/// An opaque shell command line.
///
/// The text is handed to the shell as-is; nothing in the crate parses,
/// quotes or sandboxes it.
///
/// Invariant: never empty or whitespace-only. Enforced at construction.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct ShellCommand(String);

impl ShellCommand {
    /// Create a new command.
    ///
    /// # Panics
    /// Panics if the command is blank (use `try_new` for fallible).
    pub fn new(line: impl Into<String>) -> Self {
        let line = line.into();
        assert!(!line.trim().is_empty(), "ShellCommand cannot be empty");
        Self(line)
    }

    /// Fallible constructor.
    pub fn try_new(line: impl Into<String>) -> Result<Self, DomainError> {
        let line = line.into();
        if line.trim().is_empty() {
            Err(DomainError::EmptyCommand)
        } else {
            Ok(Self(line))
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl AsRef<str> for ShellCommand {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

/// # Panics
/// Panics on blank text, like [`ShellCommand::new`]. Use
/// [`ShellCommand::try_new`] for untrusted input.
impl From<&str> for ShellCommand {
    fn from(s: &str) -> Self {
        Self::new(s)
    }
}

/// # Panics
/// Panics on blank text, like [`ShellCommand::new`].
impl From<String> for ShellCommand {
    fn from(s: String) -> Self {
        Self::new(s)
    }
}

impl fmt::Display for ShellCommand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Ordered batch of shell commands consumed front to back.
///
/// A queue is owned by exactly one runner invocation. Commands are only ever
/// removed from the front; the order they were pushed in is the order they
/// run in.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct CommandQueue {
    commands: VecDeque<ShellCommand>,
}

impl CommandQueue {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a command to the back of the queue.
    ///
    /// # Panics
    /// Panics if `command` converts from blank text.
    pub fn push(&mut self, command: impl Into<ShellCommand>) {
        self.commands.push_back(command.into());
    }

    /// Builder-style variant of [`push`](Self::push).
    pub fn with(mut self, command: impl Into<ShellCommand>) -> Self {
        self.push(command);
        self
    }

    /// Remove and return the front command.
    pub fn pop_front(&mut self) -> Option<ShellCommand> {
        self.commands.pop_front()
    }

    pub fn len(&self) -> usize {
        self.commands.len()
    }

    pub fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &ShellCommand> {
        self.commands.iter()
    }
}

/// # Panics
/// Panics if any item converts from blank text.
impl<C: Into<ShellCommand>> FromIterator<C> for CommandQueue {
    fn from_iter<I: IntoIterator<Item = C>>(iter: I) -> Self {
        Self {
            commands: iter.into_iter().map(Into::into).collect(),
        }
    }
}
