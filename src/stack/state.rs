use crate::errors::{Result, StackError};
use std::io::ErrorKind;
use std::path::PathBuf;
use tracing::debug;

/// Durable record of an in-progress stack rebase.
///
/// Written when a per-branch rebase fails, so a later `rebase --continue`
/// can re-enter the loop at the step that failed. `last_successful_index`
/// is 0-based into the stack; a negative value means only the base branch
/// has been handled.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RebaseCheckpoint {
    pub original_branch: String,
    pub last_successful_index: i64,
    pub stashed: bool,
}

/// File-backed persistence for [`RebaseCheckpoint`]. Exclusively owned by
/// the rebase orchestrator; nothing else reads or writes it.
pub struct RebaseStateFile {
    path: PathBuf,
}

impl RebaseStateFile {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Serialize the checkpoint as three newline-separated fields,
    /// overwriting any prior checkpoint.
    pub fn save(&self, checkpoint: &RebaseCheckpoint) -> Result<()> {
        debug!(
            "saving rebase checkpoint at index {}",
            checkpoint.last_successful_index
        );
        let content = format!(
            "{}\n{}\n{}",
            checkpoint.original_branch, checkpoint.last_successful_index, checkpoint.stashed
        );
        std::fs::write(&self.path, content)?;
        Ok(())
    }

    /// Load the persisted checkpoint. A missing file means no rebase is in
    /// progress; a file that does not parse into exactly three fields is
    /// corrupt.
    pub fn load(&self) -> Result<RebaseCheckpoint> {
        let content = match std::fs::read_to_string(&self.path) {
            Ok(content) => content,
            Err(err) if err.kind() == ErrorKind::NotFound => {
                return Err(StackError::NoRebaseInProgress)
            }
            Err(err) => return Err(err.into()),
        };

        let fields: Vec<&str> = content.trim().split('\n').collect();
        if fields.len() != 3 {
            return Err(StackError::corrupt_state(format!(
                "expected 3 fields, found {}",
                fields.len()
            )));
        }

        let last_successful_index = fields[1]
            .parse::<i64>()
            .map_err(|_| StackError::corrupt_state(format!("bad index field: {:?}", fields[1])))?;
        let stashed = fields[2]
            .parse::<bool>()
            .map_err(|_| StackError::corrupt_state(format!("bad stash field: {:?}", fields[2])))?;

        Ok(RebaseCheckpoint {
            original_branch: fields[0].to_string(),
            last_successful_index,
            stashed,
        })
    }

    /// Delete the checkpoint file. Idempotent.
    pub fn clear(&self) -> Result<()> {
        match std::fs::remove_file(&self.path) {
            Ok(()) => Ok(()),
            Err(err) if err.kind() == ErrorKind::NotFound => Ok(()),
            Err(err) => Err(err.into()),
        }
    }
}
