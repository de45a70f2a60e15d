use super::CommandContext;
use crate::errors::Result;
use crate::stack::{RebaseOptions, RebaseOrchestrator, RebaseStateFile, REBASE_STATE_FILE_NAME};

/// Rebase the entire stack, or continue an interrupted run.
pub fn run(pull: bool, resume: bool, stash: bool) -> Result<()> {
    let ctx = CommandContext::discover()?;
    run_in(&ctx, pull, resume, stash)
}

pub fn run_in(ctx: &CommandContext, pull: bool, resume: bool, stash: bool) -> Result<()> {
    let state = RebaseStateFile::new(ctx.git_dir.join(REBASE_STATE_FILE_NAME));
    let orchestrator = RebaseOrchestrator::new(&ctx.git, &ctx.store, state);

    if resume {
        orchestrator.resume()
    } else {
        orchestrator.start(&RebaseOptions {
            pull_base: pull,
            auto_stash: stash,
        })
    }
}
