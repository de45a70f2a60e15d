use crate::errors::{Result, StackError};
use std::path::{Path, PathBuf};
use std::process::Command;
use tracing::debug;

/// Thin synchronous boundary to the external `git` binary.
///
/// Mutating operations echo the equivalent command line and stream the
/// subprocess output through unmodified; queries capture stdout silently.
/// Exactly one subprocess runs at a time, and a non-zero exit status is
/// propagated immediately, with no retries.
pub struct GitGateway {
    workdir: PathBuf,
}

impl GitGateway {
    pub fn new(workdir: impl Into<PathBuf>) -> Self {
        Self {
            workdir: workdir.into(),
        }
    }

    pub fn workdir(&self) -> &Path {
        &self.workdir
    }

    pub fn checkout(&self, branch: &str) -> Result<()> {
        self.run(&["checkout", branch])
    }

    pub fn rebase(&self, onto: &str) -> Result<()> {
        self.run(&["rebase", onto])
    }

    pub fn pull(&self) -> Result<()> {
        self.run(&["pull"])
    }

    pub fn stash_push(&self, message: &str) -> Result<()> {
        self.run(&["stash", "push", "-m", message])
    }

    pub fn stash_pop(&self) -> Result<()> {
        self.run(&["stash", "pop"])
    }

    /// Name of the currently checked-out branch.
    pub fn current_branch(&self) -> Result<String> {
        self.run_captured(&["rev-parse", "--abbrev-ref", "HEAD"])
    }

    /// Whether the working tree has uncommitted changes (staged, unstaged,
    /// or untracked).
    pub fn is_working_tree_dirty(&self) -> Result<bool> {
        let status = self.run_captured(&["status", "--porcelain"])?;
        Ok(!status.is_empty())
    }

    /// Run a mutating git command: echo it, inherit stdio so the
    /// subprocess output interleaves with ours, and await its exit status.
    fn run(&self, args: &[&str]) -> Result<()> {
        println!("+ git {}", args.join(" "));
        let status = Command::new("git")
            .args(args)
            .current_dir(&self.workdir)
            .status()?;
        if !status.success() {
            return Err(StackError::git_command(args, status));
        }
        Ok(())
    }

    /// Run a query git command, capturing and trimming its stdout.
    fn run_captured(&self, args: &[&str]) -> Result<String> {
        debug!("git {}", args.join(" "));
        let output = Command::new("git")
            .args(args)
            .current_dir(&self.workdir)
            .output()?;
        if !output.status.success() {
            return Err(StackError::git_command(args, output.status));
        }
        Ok(String::from_utf8_lossy(&output.stdout).trim().to_string())
    }
}
