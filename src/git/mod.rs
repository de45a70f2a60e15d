//! Repository discovery and the subprocess boundary to git.
//!
//! Every actual VCS operation is delegated to the external `git` binary;
//! this module only locates the repository and shells out.

pub mod gateway;

pub use gateway::GitGateway;

use crate::errors::{Result, StackError};
use std::path::{Path, PathBuf};

/// Stash message used by every auto-stash this tool creates.
pub const AUTO_STASH_MESSAGE: &str = "git-stack auto-stash";

/// Resolve the per-worktree git directory from a workdir path.
/// Handles both normal repos (`.git` is a directory) and linked worktrees
/// (`.git` is a file containing `gitdir: <path>`).
pub fn resolve_git_dir(workdir: &Path) -> Result<PathBuf> {
    let git_path = workdir.join(".git");
    if git_path.is_dir() {
        Ok(git_path)
    } else if git_path.is_file() {
        let content = std::fs::read_to_string(&git_path)?;
        let gitdir = content
            .strip_prefix("gitdir: ")
            .map(|s| s.trim())
            .ok_or(StackError::NotARepository)?;
        if Path::new(gitdir).is_absolute() {
            Ok(PathBuf::from(gitdir))
        } else {
            Ok(workdir.join(gitdir))
        }
    } else {
        Err(StackError::NotARepository)
    }
}

/// Walk up from `start` until a directory containing a `.git` entry is
/// found. Returns the repository workdir and its resolved git directory.
pub fn discover_repository(start: &Path) -> Result<(PathBuf, PathBuf)> {
    let mut dir = start.to_path_buf();
    loop {
        if dir.join(".git").exists() {
            let git_dir = resolve_git_dir(&dir)?;
            return Ok((dir, git_dir));
        }
        if !dir.pop() {
            return Err(StackError::NotARepository);
        }
    }
}
