use crate::cli::output::Output;
use crate::errors::Result;
use crate::git::{GitGateway, AUTO_STASH_MESSAGE};
use crate::stack::{RebaseCheckpoint, RebaseStateFile, StackStore};
use tracing::{debug, warn};

/// Options for a whole-stack rebase run.
#[derive(Debug, Clone)]
pub struct RebaseOptions {
    /// Pull the base branch before rebasing the rest of the stack.
    pub pull_base: bool,
    /// Stash dirty working-tree changes for the duration of the run.
    pub auto_stash: bool,
}

impl Default for RebaseOptions {
    fn default() -> Self {
        Self {
            pull_base: true,
            auto_stash: true,
        }
    }
}

/// Drives the sequential stack rebase: checkout the base, pull it if asked,
/// then rebase each stacked branch onto its predecessor, bottom to top.
///
/// The loop is resumable. When a per-branch `git rebase` fails, a
/// checkpoint recording the last known-good index is persisted and the
/// failure propagates; after the operator resolves the conflict with git
/// itself, `resume` re-enters the loop at the step that failed. Checkpoints
/// are written only on failure, marking the last known-good index: resume
/// must retry the failed step, never skip it.
pub struct RebaseOrchestrator<'a> {
    git: &'a GitGateway,
    store: &'a StackStore,
    state: RebaseStateFile,
}

impl<'a> RebaseOrchestrator<'a> {
    pub fn new(git: &'a GitGateway, store: &'a StackStore, state: RebaseStateFile) -> Self {
        Self { git, store, state }
    }

    /// Rebase the whole stack from scratch.
    pub fn start(&self, options: &RebaseOptions) -> Result<()> {
        // A checkpoint left behind by an abandoned run would shadow this one.
        self.state.clear()?;

        let stack = self.store.read()?;
        if stack.len() < 2 {
            Output::info("Stack has fewer than two branches. Nothing to rebase.");
            return Ok(());
        }

        let stashed = if options.auto_stash && self.git.is_working_tree_dirty()? {
            Output::progress("Stashing local changes");
            self.git.stash_push(AUTO_STASH_MESSAGE)?;
            true
        } else {
            false
        };
        let original_branch = self.git.current_branch()?;
        debug!(
            "rebasing {} stacked branches, returning to '{original_branch}'",
            stack.len()
        );

        self.run_from(&stack, &original_branch, 0, options.pull_base, stashed)?;
        self.finish(&original_branch, stashed)
    }

    /// Resume an interrupted stack rebase from its persisted checkpoint,
    /// retrying the step that failed.
    pub fn resume(&self) -> Result<()> {
        let checkpoint = self.state.load()?;
        let stack = self.store.read()?;

        Output::section("Continuing stack rebase");
        self.run_from(
            &stack,
            &checkpoint.original_branch,
            checkpoint.last_successful_index + 1,
            false,
            checkpoint.stashed,
        )?;
        self.finish(&checkpoint.original_branch, checkpoint.stashed)
    }

    /// Run the rebase loop beginning at `start_index`. An index at or below
    /// zero starts with the base branch checkout (and optional pull); the
    /// base step is never checkpointed, so a failure there aborts the whole
    /// run and a fresh `start` is required.
    fn run_from(
        &self,
        stack: &[String],
        original_branch: &str,
        start_index: i64,
        pull_base: bool,
        stashed: bool,
    ) -> Result<()> {
        let first = if start_index > 0 {
            start_index as usize
        } else {
            let Some(base) = stack.first() else {
                // Stack file emptied out from under the checkpoint.
                self.state.clear()?;
                return Ok(());
            };
            Output::progress(format!("Checking out base branch '{base}'"));
            self.git.checkout(base)?;
            if pull_base {
                Output::progress(format!("Pulling latest changes for '{base}'"));
                self.git.pull()?;
            }
            1
        };

        for i in first..stack.len() {
            let branch = &stack[i];
            let onto = &stack[i - 1];
            Output::progress(format!("Rebasing '{branch}' onto '{onto}'"));
            self.git.checkout(branch)?;
            if let Err(err) = self.git.rebase(onto) {
                let checkpoint = RebaseCheckpoint {
                    original_branch: original_branch.to_string(),
                    last_successful_index: (i - 1) as i64,
                    stashed,
                };
                // The rebase failure is what the operator must see; a
                // checkpoint write failure only costs resumability.
                if let Err(save_err) = self.state.save(&checkpoint) {
                    warn!("could not persist rebase checkpoint: {save_err}");
                }
                Output::error(format!("Rebase of '{branch}' onto '{onto}' failed."));
                Output::error_hint("1. Resolve the conflicts and run `git rebase --continue`.");
                Output::error_hint(
                    "2. Then run `git-stack rebase --continue` to finish the stack.",
                );
                return Err(err);
            }
        }

        self.state.clear()?;
        Ok(())
    }

    /// Success path shared by `start` and `resume`: return to the original
    /// branch and replay the auto-stash if this run created one.
    fn finish(&self, original_branch: &str, stashed: bool) -> Result<()> {
        Output::section(format!(
            "Stack rebase finished successfully. Returning to '{original_branch}'"
        ));
        self.git.checkout(original_branch)?;
        if stashed {
            Output::progress("Applying stashed changes");
            self.git.stash_pop()?;
        }
        Ok(())
    }
}
