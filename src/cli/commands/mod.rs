pub mod checkout;
pub mod clear;
pub mod completions;
pub mod list;
pub mod navigate;
pub mod peek;
pub mod pick;
pub mod pop;
pub mod rebase;

use crate::cli::output::Output;
use crate::errors::Result;
use crate::git::{discover_repository, GitGateway, AUTO_STASH_MESSAGE};
use crate::stack::{StackStore, STACK_FILE_NAME};
use std::path::{Path, PathBuf};

/// Per-invocation handles shared by every command: the git gateway rooted
/// at the repository workdir and the stack store under its git directory.
pub struct CommandContext {
    pub git: GitGateway,
    pub store: StackStore,
    pub git_dir: PathBuf,
}

impl CommandContext {
    /// Discover the enclosing repository from the process working directory.
    pub fn discover() -> Result<Self> {
        let cwd = std::env::current_dir()?;
        Self::discover_from(&cwd)
    }

    /// Discover the enclosing repository by walking up from `start`.
    pub fn discover_from(start: &Path) -> Result<Self> {
        let (workdir, git_dir) = discover_repository(start)?;
        Ok(Self {
            git: GitGateway::new(workdir),
            store: StackStore::new(git_dir.join(STACK_FILE_NAME)),
            git_dir,
        })
    }
}

/// Stash dirty working-tree changes when auto-stash is enabled. Returns
/// whether a stash was created and therefore must be restored later.
pub(crate) fn stash_before_switch(ctx: &CommandContext, enabled: bool) -> Result<bool> {
    if !enabled {
        return Ok(false);
    }
    if ctx.git.is_working_tree_dirty()? {
        Output::progress("Stashing local changes");
        ctx.git.stash_push(AUTO_STASH_MESSAGE)?;
        return Ok(true);
    }
    Ok(false)
}

/// Restore the auto-stash created by [`stash_before_switch`].
pub(crate) fn restore_stash(ctx: &CommandContext) -> Result<()> {
    Output::progress("Applying stashed changes");
    ctx.git.stash_pop()
}
