use crate::errors::{Result, StackError};
use std::fs::OpenOptions;
use std::io::{ErrorKind, Write};
use std::path::{Path, PathBuf};
use tracing::debug;

/// Durable ordered list of branch names, bottom-to-top, one per line.
///
/// The file is created on first push and removed by `clear`. There is no
/// locking: the store assumes a single operator running one command at a
/// time in one working tree.
pub struct StackStore {
    path: PathBuf,
}

impl StackStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Read the stack, bottom (first) to top (last). A missing file is an
    /// empty stack, not an error.
    pub fn read(&self) -> Result<Vec<String>> {
        match std::fs::read_to_string(&self.path) {
            Ok(content) => Ok(content.lines().map(str::to_string).collect()),
            Err(err) if err.kind() == ErrorKind::NotFound => Ok(Vec::new()),
            Err(err) => Err(err.into()),
        }
    }

    /// Append `branch` as the new top of the stack.
    pub fn push(&self, branch: &str) -> Result<()> {
        debug!("pushing '{branch}' onto {}", self.path.display());
        let mut file = OpenOptions::new()
            .append(true)
            .create(true)
            .open(&self.path)?;
        writeln!(file, "{branch}")?;
        Ok(())
    }

    /// Remove and return the current top of the stack.
    pub fn pop(&self) -> Result<String> {
        let mut stack = self.read()?;
        let top = stack.pop().ok_or(StackError::EmptyStack)?;
        debug!("popping '{top}' from {}", self.path.display());
        self.write(&stack)?;
        Ok(top)
    }

    /// Delete the persisted list. Returns whether a file was actually
    /// removed; an already-absent stack is a successful no-op.
    pub fn clear(&self) -> Result<bool> {
        match std::fs::remove_file(&self.path) {
            Ok(()) => Ok(true),
            Err(err) if err.kind() == ErrorKind::NotFound => Ok(false),
            Err(err) => Err(err.into()),
        }
    }

    fn write(&self, stack: &[String]) -> Result<()> {
        let mut content = stack.join("\n");
        if !content.is_empty() {
            content.push('\n');
        }
        std::fs::write(&self.path, content)?;
        Ok(())
    }
}
